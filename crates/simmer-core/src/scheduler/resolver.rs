//! Earliest start times from precedence edges alone.

use std::collections::HashMap;

use crate::{
    error::{Result, ScheduleError},
    models::Step,
};

/// Lookup from step id to its position in a step slice.
#[derive(Debug, Clone)]
pub(crate) struct StepIndex(HashMap<u64, usize>);

impl StepIndex {
    pub(crate) fn new(steps: &[Step]) -> Self {
        Self(steps.iter().enumerate().map(|(i, s)| (s.id, i)).collect())
    }

    pub(crate) fn get(&self, id: u64) -> Option<usize> {
        self.0.get(&id).copied()
    }
}

/// Earliest moment step `i` may start given the current start times of its
/// dependencies. Unknown dependency ids contribute nothing.
pub(crate) fn dependency_floor(steps: &[Step], index: &StepIndex, i: usize) -> u64 {
    steps[i]
        .dependencies
        .iter()
        .filter_map(|&dep| index.get(dep))
        .map(|d| steps[d].end_time())
        .max()
        .unwrap_or(0)
}

#[derive(Clone, Copy)]
enum Visit {
    Pending,
    InProgress,
    Done(u64),
}

/// Compute the earliest start of every step, ignoring conflicts.
///
/// A step without dependencies starts at 0; any other step starts when its
/// last dependency ends. Each step is computed once and memoized, walking
/// the dependency graph with an explicit stack so long chains in any order
/// cannot exhaust the call stack. The result is aligned with `steps`.
///
/// # Errors
///
/// - `ScheduleError::CyclicDependency` if a step is reached again while its
///   own start is still being computed
/// - `ScheduleError::InvalidInput` if a start time does not fit in `u64`
pub fn resolve_start_times(steps: &[Step]) -> Result<Vec<u64>> {
    let index = StepIndex::new(steps);
    let mut memo = vec![Visit::Pending; steps.len()];

    for root in 0..steps.len() {
        if !matches!(memo[root], Visit::Pending) {
            continue;
        }
        memo[root] = Visit::InProgress;
        // (step index, next dependency to visit)
        let mut stack = vec![(root, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let (i, next) = *frame;
            let dependencies = &steps[i].dependencies;

            if next < dependencies.len() {
                frame.1 += 1;
                let Some(d) = index.get(dependencies[next]) else {
                    continue;
                };
                match memo[d] {
                    Visit::Pending => {
                        memo[d] = Visit::InProgress;
                        stack.push((d, 0));
                    }
                    Visit::InProgress => {
                        return Err(ScheduleError::CyclicDependency {
                            ids: vec![steps[d].id],
                        })
                    }
                    Visit::Done(_) => {}
                }
                continue;
            }

            stack.pop();
            memo[i] = Visit::Done(start_after(steps, &index, &memo, i)?);
        }
    }

    Ok(memo
        .into_iter()
        .map(|visit| match visit {
            Visit::Done(start) => start,
            Visit::Pending | Visit::InProgress => 0,
        })
        .collect())
}

/// Start of step `i` once all of its dependencies are memoized.
fn start_after(steps: &[Step], index: &StepIndex, memo: &[Visit], i: usize) -> Result<u64> {
    let mut start = 0u64;
    for &dep in &steps[i].dependencies {
        let Some(d) = index.get(dep) else {
            continue;
        };
        if let Visit::Done(dep_start) = memo[d] {
            let end = dep_start
                .checked_add(u64::from(steps[d].duration))
                .ok_or_else(|| {
                    ScheduleError::invalid_input("startTime").with_reason(format!(
                        "step {} would start beyond the supported time range",
                        steps[i].id
                    ))
                })?;
            start = start.max(end);
        }
    }
    Ok(start)
}
