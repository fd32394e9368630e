//! Step scheduling.
//!
//! The [`Scheduler`] runs a submitted plan through four stages:
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌────────────┐   ┌────────────┐
//! │ validation │──▶│  resolver  │──▶│   repair   │──▶│  summary   │
//! │ ids, cycles│   │ precedence │   │ conflicts, │   │ total time │
//! │            │   │    only    │   │ gaps, deps │   │            │
//! └────────────┘   └────────────┘   └────────────┘   └────────────┘
//! ```
//!
//! The repair engine consults a [`ConflictClassifier`] to decide which steps
//! may not overlap. [`KeywordClassifier`] is the default; the scheduler is
//! generic over the classifier so another resource model can replace it.
//!
//! Every call works on its own copy of the steps and holds no state between
//! calls, so a `Scheduler` can be shared freely.
//!
//! # Examples
//!
//! ```rust
//! use simmer_core::{params::PlanRequest, SchedulerBuilder};
//!
//! # fn example() -> Result<(), simmer_core::ScheduleError> {
//! let scheduler = SchedulerBuilder::new().without_user_config().build()?;
//! let request = PlanRequest::from_json(
//!     r#"[
//!         {"id": 1, "title": "Chop", "duration": 5, "canParallel": true},
//!         {"id": 2, "title": "Cook", "duration": 10, "dependencies": [1], "canParallel": true}
//!     ]"#,
//! )?;
//!
//! let schedule = scheduler.schedule(&request)?;
//! assert_eq!(schedule.optimized_time, 15);
//! assert_eq!(schedule.step(2).map(|s| s.start_time), Some(5));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::debug;

use crate::{
    config::SchedulerConfig,
    error::Result,
    models::Schedule,
    params::PlanRequest,
    validation::{validate_plan, ValidatedPlan},
};

pub mod builder;
pub mod conflict;
pub mod repair;
pub mod resolver;
pub mod summary;

#[cfg(test)]
mod tests;

pub use builder::SchedulerBuilder;
pub use conflict::{ConflictClassifier, ConflictReason, KeywordClassifier};
pub use repair::{RepairEngine, RepairOutcome};
pub use resolver::resolve_start_times;
pub use summary::optimized_time;

/// A pair of steps that may not overlap, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictPair {
    /// Lower of the two step ids
    pub first: u64,
    /// Higher of the two step ids
    pub second: u64,
    /// Why the two steps are serialized
    pub reason: ConflictReason,
}

/// Plans step start times.
pub struct Scheduler<C = KeywordClassifier> {
    config: SchedulerConfig,
    classifier: C,
}

impl<C: ConflictClassifier> Scheduler<C> {
    /// Create a scheduler with a custom conflict classifier.
    pub fn with_classifier(config: SchedulerConfig, classifier: C) -> Self {
        Self { config, classifier }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// The conflict classifier in use.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Validate a plan without scheduling it.
    ///
    /// # Errors
    ///
    /// Returns the validation error that rejected the plan.
    pub fn check(&self, request: &PlanRequest) -> Result<ValidatedPlan> {
        validate_plan(&request.steps)
    }

    /// Compute start times for every step in the plan.
    ///
    /// The returned schedule keeps the submitted step order. When the repair
    /// loop hits its pass cap the schedule still respects every dependency,
    /// and `advisory` explains that conflicts or gaps may remain.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput`, `DuplicateStep` or
    /// `CyclicDependency` when the plan is rejected.
    pub fn schedule(&self, request: &PlanRequest) -> Result<Schedule> {
        let ValidatedPlan {
            mut steps, order, ..
        } = validate_plan(&request.steps)?;
        debug!("Scheduling {} steps", steps.len());

        let starts = resolve_start_times(&steps)?;
        for (step, start) in steps.iter_mut().zip(starts) {
            step.start_time = start;
        }

        let engine = RepairEngine::new(&self.classifier, self.config.max_passes);
        let (steps, outcome) = engine.run(steps, &order);

        let optimized_time = optimized_time(&steps, self.config.min_plan_duration);
        let advisory = (!outcome.converged).then(|| {
            format!(
                "The timeline could not be fully compacted after {} passes; \
                 some steps may still overlap or leave idle time.",
                outcome.passes
            )
        });

        Ok(Schedule {
            steps,
            optimized_time,
            advisory,
            passes: outcome.passes,
            converged: outcome.converged,
        })
    }

    /// List every pair of steps the classifier would serialize, ordered by
    /// id.
    ///
    /// # Errors
    ///
    /// Returns the validation error that rejected the plan.
    pub fn conflicts(&self, request: &PlanRequest) -> Result<Vec<ConflictPair>> {
        let plan = validate_plan(&request.steps)?;
        let mut steps: Vec<_> = plan.steps.iter().collect();
        steps.sort_by_key(|step| step.id);

        let mut pairs = Vec::new();
        for (n, a) in steps.iter().enumerate() {
            for b in &steps[n + 1..] {
                if let Some(reason) = self.classifier.classify(a, b) {
                    pairs.push(ConflictPair {
                        first: a.id,
                        second: b.id,
                        reason,
                    });
                }
            }
        }
        Ok(pairs)
    }
}
