//! Scheduled plan returned to renderers.

use serde::{Deserialize, Serialize};

use super::Step;

/// The full step list after scheduling.
///
/// Steps keep the order they were submitted in; only their start times are
/// assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Steps in submission order with `start_time` populated
    pub steps: Vec<Step>,

    /// Latest step end time in minutes
    pub optimized_time: u64,

    /// Non-fatal notice, set when the repair loop stopped at its pass cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,

    /// Number of repair passes that ran
    #[serde(skip)]
    pub passes: usize,

    /// Whether the repair loop reached a pass that changed nothing
    #[serde(skip)]
    pub converged: bool,
}

impl Schedule {
    /// Look up a step by id.
    pub fn step(&self, id: u64) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// Steps ordered by start time, ties broken by id.
    pub fn chronological(&self) -> Vec<&Step> {
        let mut steps: Vec<&Step> = self.steps.iter().collect();
        steps.sort_by_key(|step| (step.start_time, step.id));
        steps
    }

    /// Whether the repair loop gave up before reaching a fixpoint.
    pub fn is_degraded(&self) -> bool {
        self.advisory.is_some()
    }
}
