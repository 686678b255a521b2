//! Positive-integer rescaling of a group of durations to a target sum
//!
//! Used by the target-body scenario: the body lines of one interrupt episode
//! are rescaled so they add up to the requested ISR body time while every
//! line keeps a duration of at least 1.
//!
//! Algorithm:
//! - all-zero group: spread `target` evenly, remainder to the first lines
//! - otherwise: scale proportionally, round half to even, floor at 1, then
//!   hand out the residual round-robin from the first line, one unit per
//!   line per lap, until the sum matches (lines at 1 are never decremented)

/// Rescale `values` so they sum to `target` with every value `>= 1`
///
/// The exact sum is reached whenever `target >= values.len()`. With a
/// smaller target every value ends up at 1 and the sum overshoots.
///
/// # Example
/// ```
/// use isrtrace::rescale::rescale_to_target;
///
/// assert_eq!(rescale_to_target(&[1, 1, 1], 10), vec![4, 3, 3]);
/// assert_eq!(rescale_to_target(&[0, 0], 5), vec![3, 2]);
/// ```
pub fn rescale_to_target(values: &[i64], target: i64) -> Vec<i64> {
    if values.is_empty() {
        return Vec::new();
    }

    let original_sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    if original_sum == 0 {
        spread_evenly(values.len(), target)
    } else {
        let factor = target as f64 / original_sum as f64;
        let mut scaled: Vec<i64> = values
            .iter()
            .map(|&v| ((v as f64 * factor).round_ties_even() as i64).max(1))
            .collect();
        correct_residual(&mut scaled, target);
        scaled
    }
}

/// Even split of `target` over `k` slots, never below 1 per slot
fn spread_evenly(k: usize, target: i64) -> Vec<i64> {
    let k_i64 = k as i64;
    let base = target.div_euclid(k_i64).max(1);
    let rem = (target - base * k_i64).max(0);

    (0..k_i64)
        .map(|j| if j < rem { base + 1 } else { base })
        .collect()
}

/// Move units round-robin from index 0 until `values` sums to `target`
///
/// Equivalent to stepping one unit per line per lap, but whole laps are
/// applied at once: a lap adds one unit to every line, or takes one unit
/// from every line still above 1.
fn correct_residual(values: &mut [i64], target: i64) {
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    let mut diff = i128::from(target) - sum;

    if diff > 0 {
        let n = values.len() as i128;
        let (laps, rest) = (diff / n, diff % n);
        for (idx, v) in values.iter_mut().enumerate() {
            let extra = laps + i128::from((idx as i128) < rest);
            // sum stays <= target, so each value fits in i64
            *v = (i128::from(*v) + extra) as i64;
        }
        return;
    }

    while diff < 0 {
        let movable: Vec<usize> = (0..values.len()).filter(|&i| values[i] > 1).collect();
        if movable.is_empty() {
            tracing::debug!(
                "rescale stopped with residual {} (target {} below group size {})",
                diff,
                target,
                values.len()
            );
            return;
        }

        let count = movable.len() as i128;
        let headroom = movable
            .iter()
            .map(|&i| i128::from(values[i] - 1))
            .min()
            .unwrap_or(0);
        let laps = headroom.min(-diff / count);

        if laps > 0 {
            for &i in &movable {
                values[i] -= laps as i64;
            }
            diff += laps * count;
        } else {
            // Final partial lap
            for &i in movable.iter().take((-diff) as usize) {
                values[i] -= 1;
            }
            diff = 0;
        }
    }
}
