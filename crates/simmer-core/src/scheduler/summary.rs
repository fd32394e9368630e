//! Total plan duration.

use crate::models::Step;

/// Latest end time over all steps, or `min_plan_duration` for an empty plan.
pub fn optimized_time(steps: &[Step], min_plan_duration: u32) -> u64 {
    steps
        .iter()
        .map(Step::end_time)
        .max()
        .unwrap_or(u64::from(min_plan_duration))
}
