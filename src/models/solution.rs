//! Flat solution encoding with up-front validation.

use anyhow::{bail, ensure, Result};
use serde::{Deserialize, Serialize};

use super::Problem;

/// A candidate solution in the flat PDPTW encoding.
///
/// The encoding is a sequence of 1-based call indices with `0` as the
/// vehicle-segment sentinel: the entries before the first `0` are vehicle
/// 0's route, and so on. The entries after the last sentinel are the
/// unserved calls (the final sentinel is implicit, so a well-formed
/// solution contains exactly `num_vehicles` zeros). Within a segment, the
/// first occurrence of a call is its pickup and the second its delivery.
///
/// Validation happens once in [`Solution::new`]; the evaluators treat a
/// constructed `Solution` as well-formed and never re-check it.
///
/// # Examples
///
/// ```
/// use pdp_eval::models::{Call, Problem, Solution, TimeWindow, Vehicle};
///
/// let problem = Problem::new(
///     2,
///     vec![Vehicle::new(0, 0.0, 10.0)],
///     vec![Call::new(
///         0,
///         1,
///         5.0,
///         100.0,
///         TimeWindow::new(0.0, 100.0).unwrap(),
///         TimeWindow::new(0.0, 200.0).unwrap(),
///     )],
///     vec![true],
///     vec![0.0, 10.0, 10.0, 0.0],
///     vec![0.0, 30.0, 30.0, 0.0],
///     vec![0.0, 10.0],
///     vec![0.0, 30.0],
///     vec![0.0],
///     vec![0.0],
///     vec![20.0],
/// )
/// .unwrap();
///
/// // Call 1 served by the only vehicle.
/// let served = Solution::new(vec![1, 1, 0], &problem).unwrap();
/// assert_eq!(served.flat(), &[1, 1, 0]);
///
/// // Call 1 left unserved.
/// let unserved = Solution::new(vec![0, 1, 1], &problem).unwrap();
/// assert_eq!(unserved.flat(), &[0, 1, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    flat: Vec<usize>,
}

impl Solution {
    /// Creates a solution from the flat encoding, validating it against the
    /// problem's dimensions.
    ///
    /// Fails if the sentinel count differs from `num_vehicles`, if any call
    /// index is out of range, if any call does not appear exactly twice, or
    /// if a call's two occurrences land in different segments.
    pub fn new(flat: Vec<usize>, problem: &Problem) -> Result<Self> {
        let num_vehicles = problem.num_vehicles();
        let num_calls = problem.num_calls();

        let sentinels = flat.iter().filter(|&&x| x == 0).count();
        ensure!(
            sentinels == num_vehicles,
            "expected {} route sentinels, found {}",
            num_vehicles,
            sentinels
        );

        let mut occurrences = vec![0usize; num_calls];
        for &entry in &flat {
            if entry == 0 {
                continue;
            }
            if entry > num_calls {
                bail!("call index {} out of range (num_calls = {})", entry, num_calls);
            }
            occurrences[entry - 1] += 1;
        }
        for (c, &count) in occurrences.iter().enumerate() {
            ensure!(
                count == 2,
                "call {} appears {} times, expected exactly 2",
                c + 1,
                count
            );
        }

        // Both occurrences of a call must sit in the same segment, or the
        // pickup/delivery parity of the decoder is undefined.
        let mut seen = vec![0usize; num_calls];
        for (segment_idx, segment) in flat.split(|&x| x == 0).enumerate() {
            for &entry in segment {
                seen[entry - 1] += 1;
            }
            for (c, &count) in seen.iter().enumerate() {
                ensure!(
                    count != 1,
                    "call {} is split across segments (second occurrence missing from segment {})",
                    c + 1,
                    segment_idx
                );
            }
            seen.iter_mut().for_each(|s| *s = 0);
        }

        Ok(Self { flat })
    }

    /// The flat encoding: 1-based call indices with `0` sentinels.
    pub fn flat(&self) -> &[usize] {
        &self.flat
    }
}
