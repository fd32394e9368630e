//! Data models for steps and schedules.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data and presentation apart.
//!
//! # Examples
//!
//! ```rust
//! use simmer_core::models::{Step, StepCategory};
//!
//! let step = Step {
//!     id: 1,
//!     title: "Boil water".to_string(),
//!     description: "Bring a pot of water to boil".to_string(),
//!     duration: 8,
//!     dependencies: vec![],
//!     can_parallel: true,
//!     category: Some(StepCategory::Cook),
//!     dish_label: Some("A".to_string()),
//!     start_time: 2,
//! };
//! assert_eq!(step.end_time(), 10);
//! assert_eq!(step.interval(), 2..10);
//! ```

pub mod category;
pub mod schedule;
pub mod step;


pub use category::StepCategory;
pub use schedule::Schedule;
pub use step::Step;
