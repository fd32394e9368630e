//! Core library for the Simmer cooking step scheduler.
//!
//! Given the steps of one or more recipes, with durations, dependencies and
//! hints about which steps can share time, the scheduler assigns every step a
//! start minute so that:
//!
//! - no step starts before the steps it depends on have finished
//! - steps that compete for the cook's attention, an ingredient or a piece of
//!   equipment do not overlap
//! - the plan has as little idle time as the first two rules allow
//!
//! # Display Architecture
//!
//! Results are plain data ([`models`]); [`display`] turns them into markdown
//! that the CLI renders in the terminal and the MCP server returns as text.
//!
//! # Quick Start
//!
//! ```rust
//! use simmer_core::{display::Timeline, PlanRequest, SchedulerBuilder};
//!
//! # fn example() -> Result<(), simmer_core::ScheduleError> {
//! let scheduler = SchedulerBuilder::new().without_user_config().build()?;
//!
//! let request = PlanRequest::from_json(
//!     r#"{"steps": [
//!         {"id": 1, "title": "Dice onion", "description": "Dice the onion", "duration": 4},
//!         {"id": 2, "title": "Fry onion", "description": "Fry the onion in a pan",
//!          "duration": 8, "dependencies": [1]}
//!     ]}"#,
//! )?;
//!
//! let schedule = scheduler.schedule(&request)?;
//! assert_eq!(schedule.optimized_time, 12);
//! println!("{}", Timeline::new(&schedule));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod scheduler;
pub mod validation;

// Re-export commonly used types
pub use config::SchedulerConfig;
pub use display::{ClockAnchor, Conflicts, OperationStatus, Timeline, ValidationReport};
pub use error::{Result, ScheduleError};
pub use models::{Schedule, Step, StepCategory};
pub use params::{PlanRequest, StepInput};
pub use scheduler::{
    ConflictClassifier, ConflictPair, ConflictReason, KeywordClassifier, Scheduler,
    SchedulerBuilder,
};
pub use validation::{DanglingDependency, ValidatedPlan};
