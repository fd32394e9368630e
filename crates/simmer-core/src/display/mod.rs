//! Markdown rendering of schedules and check results.
//!
//! Models implement [`std::fmt::Display`] directly (see [`models`]); the
//! wrapper types here format whole results. Everything produces markdown so
//! the CLI can pass it to its terminal renderer and the MCP server can
//! return it verbatim.
//!
//! - [`Timeline`]: a schedule as bars over time, optionally with clock times
//! - [`Conflicts`]: which step pairs may not overlap and why
//! - [`ValidationReport`]: outcome of checking a plan
//! - [`OperationStatus`]: one-line success or failure

pub mod clock;
pub mod conflicts;
pub mod models;
pub mod report;
pub mod status;
pub mod timeline;

pub use clock::{ClockAnchor, ClockTime};
pub use conflicts::Conflicts;
pub use report::ValidationReport;
pub use status::OperationStatus;
pub use timeline::{Timeline, DEFAULT_BAR_WIDTH, MAX_BAR_WIDTH};
