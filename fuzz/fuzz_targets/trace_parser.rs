#![no_main]

use isrtrace::labels::LabelSet;
use isrtrace::scenario::Scenario;
use isrtrace::trace::parse_trace;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let labels = LabelSet::default();
        let lines = parse_trace(input, &labels);

        // Bounded durations keep the totals clear of saturation
        if lines.iter().all(|l| l.dur.unsigned_abs() < 1 << 40) {
            for scenario in [Scenario::FixedSave(10), Scenario::TargetBody(40)] {
                let t = scenario.evaluate(&lines, &labels);
                assert_eq!(t.total, t.cpu + t.overhead + t.body);
            }
        }
    }
});
