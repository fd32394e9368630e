//! Input validation for submitted plans.
//!
//! Turns untrusted [`StepInput`] records into [`Step`]s. A malformed step
//! (missing or zero id, duplicate id, missing or non-positive duration)
//! rejects the whole plan. Dependencies on ids that are not in the plan are
//! tolerated and reported as [`DanglingDependency`]. The dependency graph
//! must be acyclic; a topological order is computed here and handed to the
//! scheduler.

use std::collections::{HashMap, HashSet, VecDeque};

use log::warn;

use crate::{
    error::{Result, ScheduleError},
    models::{Step, StepCategory},
    params::StepInput,
};

/// A dependency that names a step missing from the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingDependency {
    /// Step declaring the dependency
    pub step: u64,
    /// Id that does not exist in the plan
    pub missing: u64,
}

/// A plan that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedPlan {
    /// Steps in submission order, start times zeroed
    pub steps: Vec<Step>,
    /// Indices into `steps` such that every step comes after its
    /// dependencies
    pub order: Vec<usize>,
    /// Dependencies that were ignored because their target is missing
    pub dangling: Vec<DanglingDependency>,
}

/// Validate a submitted plan.
///
/// # Errors
///
/// - `ScheduleError::InvalidInput` for a missing or zero id, or a missing,
///   non-finite, non-positive or oversized duration
/// - `ScheduleError::DuplicateStep` when an id is used twice
/// - `ScheduleError::CyclicDependency` when the steps cannot be ordered
pub fn validate_plan(inputs: &[StepInput]) -> Result<ValidatedPlan> {
    let mut steps = Vec::with_capacity(inputs.len());
    let mut seen = HashSet::with_capacity(inputs.len());

    for (position, input) in inputs.iter().enumerate() {
        let step = validate_step(position, input)?;
        if !seen.insert(step.id) {
            return Err(ScheduleError::DuplicateStep { id: step.id });
        }
        steps.push(step);
    }

    let dangling: Vec<DanglingDependency> = steps
        .iter()
        .flat_map(|step| {
            step.dependencies
                .iter()
                .filter(|dep| !seen.contains(dep))
                .map(|&missing| DanglingDependency {
                    step: step.id,
                    missing,
                })
        })
        .collect();
    for d in &dangling {
        warn!(
            "Step {} depends on unknown step {}; treating it as already done",
            d.step, d.missing
        );
    }

    let order = topological_order(&steps)?;

    Ok(ValidatedPlan {
        steps,
        order,
        dangling,
    })
}

fn validate_step(position: usize, input: &StepInput) -> Result<Step> {
    let id = match input.id {
        Some(0) => {
            return Err(ScheduleError::invalid_input(format!("steps[{position}].id"))
                .with_reason("must be a positive integer"))
        }
        Some(id) => id,
        None => {
            return Err(ScheduleError::invalid_input(format!("steps[{position}].id"))
                .with_reason("is required"))
        }
    };

    let duration = duration_minutes(input.duration).map_err(|reason| {
        ScheduleError::invalid_input(format!("steps[{position}].duration"))
            .with_reason(format!("step {id} {reason}"))
    })?;

    let category = input.category.as_deref().and_then(|raw| {
        raw.parse::<StepCategory>()
            .inspect_err(|e| warn!("Step {id}: {e}; leaving category unset"))
            .ok()
    });

    let mut dependencies = Vec::with_capacity(input.dependencies.len());
    for &dep in &input.dependencies {
        if !dependencies.contains(&dep) {
            dependencies.push(dep);
        }
    }

    Ok(Step {
        id,
        title: input.title.clone(),
        description: input.description.clone(),
        duration,
        dependencies,
        can_parallel: input.can_parallel,
        category,
        dish_label: input
            .dish_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(ToString::to_string),
        start_time: 0,
    })
}

/// Convert a raw duration to whole minutes, rounding fractions up.
fn duration_minutes(raw: Option<f64>) -> std::result::Result<u32, String> {
    let Some(minutes) = raw else {
        return Err("has no duration".to_string());
    };
    if !minutes.is_finite() || minutes <= 0.0 {
        return Err(format!("must last a positive number of minutes, got {minutes}"));
    }
    let whole = minutes.ceil();
    if whole > f64::from(u32::MAX) {
        return Err(format!("lasts {minutes} minutes, which is too long"));
    }
    Ok(whole as u32)
}

/// Kahn's algorithm over the known dependency edges.
///
/// Ready steps are taken in submission order so the result is deterministic.
fn topological_order(steps: &[Step]) -> Result<Vec<usize>> {
    let index: HashMap<u64, usize> = steps.iter().enumerate().map(|(i, s)| (s.id, i)).collect();

    let mut in_degree = vec![0usize; steps.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); steps.len()];
    for (i, step) in steps.iter().enumerate() {
        for dep in &step.dependencies {
            if let Some(&d) = index.get(dep) {
                in_degree[i] += 1;
                dependents[d].push(i);
            }
        }
    }

    let mut queue: VecDeque<usize> = (0..steps.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(steps.len());

    while let Some(i) = queue.pop_front() {
        order.push(i);
        for &next in &dependents[i] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    if order.len() != steps.len() {
        return Err(ScheduleError::CyclicDependency {
            ids: cycle_members(steps, &in_degree, &dependents),
        });
    }

    Ok(order)
}

/// Narrow the unordered remainder down to steps that sit on a cycle by
/// peeling off steps that only lead out of it.
fn cycle_members(steps: &[Step], in_degree: &[usize], dependents: &[Vec<usize>]) -> Vec<u64> {
    let mut remaining: HashSet<usize> = (0..steps.len()).filter(|&i| in_degree[i] > 0).collect();

    loop {
        let leaves: Vec<usize> = remaining
            .iter()
            .copied()
            .filter(|&i| !dependents[i].iter().any(|d| remaining.contains(d)))
            .collect();
        if leaves.is_empty() {
            break;
        }
        for leaf in leaves {
            remaining.remove(&leaf);
        }
    }

    let mut ids: Vec<u64> = remaining.into_iter().map(|i| steps[i].id).collect();
    ids.sort_unstable();
    ids
}
