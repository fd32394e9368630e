//! Timeline repair: the fixpoint loop that turns a dependency-only timeline
//! into one without conflict overlaps or idle gaps.
//!
//! One pass runs three sub-steps over an owned copy of the previous
//! snapshot:
//!
//! 1. conflict resolution: for each conflicting pair (in id order) whose
//!    intervals overlap, the earlier step stays and the other moves to its
//!    end
//! 2. gap compaction: idle time after the first step is closed by pulling
//!    every later step back
//! 3. dependency re-validation: in topological order, steps that now start
//!    before a dependency ends are pushed forward
//!
//! Passes repeat until one moves nothing or the pass cap is reached. Because
//! re-validation runs last, dependency order holds after every pass, even
//! when the loop gives up.

use log::{debug, warn};

use super::{
    conflict::ConflictClassifier,
    resolver::{dependency_floor, StepIndex},
};
use crate::models::Step;

/// How the repair loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairOutcome {
    /// Passes that ran, including the final no-change pass
    pub passes: usize,
    /// Whether a pass changed nothing before the cap
    pub converged: bool,
}

/// Per-pass counts of moved steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PassReport {
    conflicts: usize,
    gaps: usize,
    dependencies: usize,
}

impl PassReport {
    fn total(&self) -> usize {
        self.conflicts + self.gaps + self.dependencies
    }
}

/// Fixed facts about a plan that every pass reuses.
struct PlanShape<'o> {
    /// Conflicting index pairs, ordered by (lower id, higher id)
    conflicts: Vec<(usize, usize)>,
    index: StepIndex,
    order: &'o [usize],
}

/// Bounded fixpoint loop over a step timeline.
pub struct RepairEngine<'c, C: ?Sized> {
    classifier: &'c C,
    max_passes: usize,
}

impl<'c, C> RepairEngine<'c, C>
where
    C: ConflictClassifier + ?Sized,
{
    /// Create an engine that stops after `max_passes` passes.
    pub fn new(classifier: &'c C, max_passes: usize) -> Self {
        Self {
            classifier,
            max_passes,
        }
    }

    /// Repair `steps`, whose start times come from the dependency resolver.
    ///
    /// `order` must list every index of `steps` with dependencies before
    /// their dependents, as produced by [`crate::validation::validate_plan`].
    pub fn run(&self, steps: Vec<Step>, order: &[usize]) -> (Vec<Step>, RepairOutcome) {
        let shape = PlanShape {
            conflicts: self.conflicting_pairs(&steps),
            index: StepIndex::new(&steps),
            order,
        };

        let mut snapshot = steps;
        for pass in 1..=self.max_passes {
            let (next, report) = Self::pass(&snapshot, &shape);
            snapshot = next;
            debug!(
                "Repair pass {pass}: {} conflict moves, {} gap shifts, {} dependency pushes",
                report.conflicts, report.gaps, report.dependencies
            );
            if report.total() == 0 {
                return (
                    snapshot,
                    RepairOutcome {
                        passes: pass,
                        converged: true,
                    },
                );
            }
        }

        warn!(
            "Timeline repair stopped after {} passes without reaching a fixpoint",
            self.max_passes
        );
        (
            snapshot,
            RepairOutcome {
                passes: self.max_passes,
                converged: false,
            },
        )
    }

    fn conflicting_pairs(&self, steps: &[Step]) -> Vec<(usize, usize)> {
        let mut by_id: Vec<usize> = (0..steps.len()).collect();
        by_id.sort_by_key(|&i| steps[i].id);

        let mut pairs = Vec::new();
        for (n, &i) in by_id.iter().enumerate() {
            for &j in &by_id[n + 1..] {
                if self.classifier.must_serialize(&steps[i], &steps[j]) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    fn pass(snapshot: &[Step], shape: &PlanShape<'_>) -> (Vec<Step>, PassReport) {
        let mut next = snapshot.to_vec();
        let report = PassReport {
            conflicts: resolve_conflicts(&mut next, &shape.conflicts),
            gaps: compact_gaps(&mut next),
            dependencies: revalidate_dependencies(&mut next, &shape.index, shape.order),
        };
        (next, report)
    }
}

/// Whether `a` keeps its place when it overlaps `b`: the earlier start wins,
/// then the shorter step, then the lower id.
fn keeps_place(a: &Step, b: &Step) -> bool {
    (a.start_time, a.duration, a.id) < (b.start_time, b.duration, b.id)
}

fn resolve_conflicts(steps: &mut [Step], pairs: &[(usize, usize)]) -> usize {
    let mut moved = 0;
    for &(i, j) in pairs {
        if !steps[i].overlaps(&steps[j]) {
            continue;
        }
        let (fixed, shifted) = if keeps_place(&steps[i], &steps[j]) {
            (i, j)
        } else {
            (j, i)
        };
        steps[shifted].start_time = steps[fixed].end_time();
        moved += 1;
    }
    moved
}

fn compact_gaps(steps: &mut [Step]) -> usize {
    let mut by_start: Vec<usize> = (0..steps.len()).collect();
    by_start.sort_by_key(|&i| (steps[i].start_time, steps[i].id));

    let Some(&first) = by_start.first() else {
        return 0;
    };

    let mut frontier = steps[first].start_time;
    let mut shift = 0;
    let mut moved = 0;
    for &i in &by_start {
        let mut start = steps[i].start_time.saturating_sub(shift);
        if start > frontier {
            shift += start - frontier;
            start = frontier;
        }
        if start != steps[i].start_time {
            steps[i].start_time = start;
            moved += 1;
        }
        frontier = frontier.max(steps[i].end_time());
    }
    moved
}

fn revalidate_dependencies(steps: &mut [Step], index: &StepIndex, order: &[usize]) -> usize {
    let mut moved = 0;
    for &i in order {
        let floor = dependency_floor(steps, index, i);
        if steps[i].start_time < floor {
            steps[i].start_time = floor;
            moved += 1;
        }
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: u64, start_time: u64, duration: u32) -> Step {
        Step {
            id,
            title: format!("Step {id}"),
            description: String::new(),
            duration,
            dependencies: vec![],
            can_parallel: true,
            category: None,
            dish_label: None,
            start_time,
        }
    }

    fn starts(steps: &[Step]) -> Vec<u64> {
        steps.iter().map(|s| s.start_time).collect()
    }

    #[test]
    fn test_conflict_moves_later_step() {
        let mut steps = vec![step(1, 0, 5), step(2, 3, 4)];
        assert_eq!(resolve_conflicts(&mut steps, &[(0, 1)]), 1);
        assert_eq!(starts(&steps), vec![0, 5]);
    }

    #[test]
    fn test_conflict_tie_keeps_shorter_step() {
        let mut steps = vec![step(1, 0, 10), step(2, 0, 5)];
        resolve_conflicts(&mut steps, &[(0, 1)]);
        assert_eq!(starts(&steps), vec![5, 0]);
    }

    #[test]
    fn test_conflict_full_tie_keeps_lower_id() {
        let mut steps = vec![step(1, 2, 5), step(2, 2, 5)];
        resolve_conflicts(&mut steps, &[(0, 1)]);
        assert_eq!(starts(&steps), vec![2, 7]);
    }

    #[test]
    fn test_touching_intervals_are_not_conflicts() {
        let mut steps = vec![step(1, 0, 5), step(2, 5, 5)];
        assert_eq!(resolve_conflicts(&mut steps, &[(0, 1)]), 0);
    }

    #[test]
    fn test_gap_compaction_closes_idle_time() {
        let mut steps = vec![step(1, 0, 5), step(2, 9, 2), step(3, 20, 1)];
        assert_eq!(compact_gaps(&mut steps), 2);
        assert_eq!(starts(&steps), vec![0, 5, 7]);
    }

    #[test]
    fn test_gap_compaction_keeps_overlapping_runs() {
        let mut steps = vec![step(1, 0, 10), step(2, 4, 2), step(3, 12, 3), step(4, 13, 1)];
        compact_gaps(&mut steps);
        assert_eq!(starts(&steps), vec![0, 4, 10, 11]);
    }

    #[test]
    fn test_gap_compaction_ignores_time_before_first_step() {
        let mut steps = vec![step(1, 4, 2), step(2, 6, 2)];
        assert_eq!(compact_gaps(&mut steps), 0);
        assert_eq!(starts(&steps), vec![4, 6]);
    }

    #[test]
    fn test_revalidation_follows_topological_order() {
        let mut steps = vec![step(1, 0, 5), step(2, 0, 3), step(3, 0, 1)];
        steps[1].dependencies = vec![1];
        steps[2].dependencies = vec![2];
        let index = StepIndex::new(&steps);
        assert_eq!(revalidate_dependencies(&mut steps, &index, &[0, 1, 2]), 2);
        assert_eq!(starts(&steps), vec![0, 5, 8]);
    }
}
