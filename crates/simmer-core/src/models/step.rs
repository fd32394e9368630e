//! Step model definition and related functionality.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::StepCategory;

/// A validated unit of cooking work.
///
/// Steps are built from [`crate::params::StepInput`] records by
/// [`crate::validation::validate_plan`]. Only `start_time` is changed by the
/// scheduler afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Unique, positive identifier within the plan
    pub id: u64,

    /// Short human-readable title
    pub title: String,

    /// Free text, also mined for ingredient and equipment keywords
    pub description: String,

    /// Duration in whole minutes, always positive
    pub duration: u32,

    /// Ids of steps that must finish before this one starts. Ids not present
    /// in the plan are kept here but treated as already satisfied.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<u64>,

    /// Whether this step may ever overlap another step
    pub can_parallel: bool,

    /// Informational category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<StepCategory>,

    /// Dish group tag, e.g. "A" or "B"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_label: Option<String>,

    /// Minutes from plan start
    #[serde(default)]
    pub start_time: u64,
}

impl Step {
    /// Minute at which the step finishes.
    ///
    /// Times are kept in `u64` while durations are at most `u32::MAX`, so a
    /// scheduled plan stays far below the ceiling.
    pub fn end_time(&self) -> u64 {
        self.start_time.saturating_add(u64::from(self.duration))
    }

    /// Half-open occupied interval `[start, end)`.
    pub fn interval(&self) -> Range<u64> {
        self.start_time..self.end_time()
    }

    /// Whether the two half-open intervals share at least one minute.
    pub fn overlaps(&self, other: &Step) -> bool {
        self.start_time < other.end_time() && other.start_time < self.end_time()
    }
}
