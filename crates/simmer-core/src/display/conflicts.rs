//! Listing of conflicting step pairs.

use std::fmt;

use crate::scheduler::ConflictPair;

/// Conflicting pairs of a plan, as returned by
/// [`Scheduler::conflicts`](crate::scheduler::Scheduler::conflicts).
pub struct Conflicts(pub Vec<ConflictPair>);

impl fmt::Display for Conflicts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Conflicts")?;
        writeln!(f)?;

        if self.0.is_empty() {
            return writeln!(f, "No conflicting steps.");
        }

        for pair in &self.0 {
            writeln!(f, "- {} ↔ {}: {}", pair.first, pair.second, pair.reason)?;
        }
        Ok(())
    }
}
