//! Tests for the scheduler module.

use super::*;
use crate::{
    error::ScheduleError,
    models::Step,
    params::{PlanRequest, StepInput},
};

fn scheduler() -> Scheduler {
    SchedulerBuilder::new()
        .without_user_config()
        .build()
        .expect("Failed to build scheduler")
}

fn input(id: u64, duration: f64, deps: &[u64], can_parallel: bool) -> StepInput {
    StepInput {
        id: Some(id),
        title: format!("Step {id}"),
        duration: Some(duration),
        dependencies: deps.to_vec(),
        can_parallel,
        ..Default::default()
    }
}

fn described(mut step: StepInput, description: &str, dish: Option<&str>) -> StepInput {
    step.description = description.to_string();
    step.dish_label = dish.map(ToString::to_string);
    step
}

fn start_of(schedule: &crate::models::Schedule, id: u64) -> u64 {
    schedule
        .step(id)
        .map(|s| s.start_time)
        .unwrap_or_else(|| panic!("step {id} missing from schedule"))
}

/// Three steps of one dish sharing eggs, two of them exclusive.
fn egg_plan() -> PlanRequest {
    PlanRequest {
        steps: vec![
            described(input(1, 5.0, &[], false), "Beat the egg", Some("A")),
            described(input(2, 10.0, &[1], true), "Let the custard set", Some("A")),
            described(input(3, 5.0, &[], false), "Whisk egg with sugar", Some("A")),
        ],
    }
}

#[test]
fn test_exclusive_steps_are_serialized_after_dependency_pass() {
    let schedule = scheduler().schedule(&egg_plan()).expect("Failed to schedule");

    // Step 3 conflicts with step 1 and moves to its end; step 2 then has to
    // wait for step 3 because step 3 cannot share time with anything.
    assert_eq!(start_of(&schedule, 1), 0);
    assert_eq!(start_of(&schedule, 3), 5);
    assert_eq!(start_of(&schedule, 2), 10);
    assert_eq!(schedule.optimized_time, 20);
    assert!(schedule.converged);
    assert_eq!(schedule.passes, 2);
    assert!(schedule.advisory.is_none());
}

#[test]
fn test_parallel_steps_of_different_dishes_start_together() {
    let request = PlanRequest {
        steps: vec![
            described(input(1, 8.0, &[], true), "Boil pasta in a pot", Some("A")),
            described(input(2, 12.0, &[], true), "Boil potato in a pot", Some("B")),
        ],
    };
    let schedule = scheduler().schedule(&request).expect("Failed to schedule");

    assert_eq!(start_of(&schedule, 1), 0);
    assert_eq!(start_of(&schedule, 2), 0);
    assert_eq!(schedule.optimized_time, 12);
    assert_eq!(schedule.passes, 1);
}

#[test]
fn test_same_dish_equipment_conflict_serializes() {
    let request = PlanRequest {
        steps: vec![
            described(input(1, 8.0, &[], true), "Bring water to a boil for pasta", Some("A")),
            described(input(2, 6.0, &[], true), "Let the sauce simmer", Some("A")),
        ],
    };
    let schedule = scheduler().schedule(&request).expect("Failed to schedule");

    // Equal start, so the shorter step keeps its place.
    assert_eq!(start_of(&schedule, 2), 0);
    assert_eq!(start_of(&schedule, 1), 6);
    assert_eq!(schedule.optimized_time, 14);
}

#[test]
fn test_dangling_dependency_counts_as_done() {
    let request = PlanRequest {
        steps: vec![
            input(1, 5.0, &[99], true),
            input(2, 3.0, &[1, 42], true),
        ],
    };
    let schedule = scheduler().schedule(&request).expect("Failed to schedule");

    assert_eq!(start_of(&schedule, 1), 0);
    assert_eq!(start_of(&schedule, 2), 5);
    assert_eq!(schedule.step(1).unwrap().dependencies, vec![99]);
}

#[test]
fn test_empty_plan_reports_minimum_duration() {
    let schedule = scheduler()
        .schedule(&PlanRequest::default())
        .expect("Failed to schedule");
    assert!(schedule.steps.is_empty());
    assert_eq!(schedule.optimized_time, 30);
    assert!(schedule.converged);
}

#[test]
fn test_submission_order_and_ids_preserved() {
    let request = PlanRequest {
        steps: vec![
            input(9, 1.0, &[4], true),
            input(4, 2.0, &[], true),
            input(6, 3.0, &[], true),
        ],
    };
    let schedule = scheduler().schedule(&request).expect("Failed to schedule");
    let ids: Vec<u64> = schedule.steps.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![9, 4, 6]);
}

#[test]
fn test_malformed_plan_is_rejected_whole() {
    let request = PlanRequest {
        steps: vec![input(1, 5.0, &[], true), input(2, 0.0, &[1], true)],
    };
    let err = scheduler().schedule(&request).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, ScheduleError::InvalidInput { .. }));
}

#[test]
fn test_cyclic_plan_is_rejected() {
    let request = PlanRequest {
        steps: vec![input(1, 5.0, &[2], true), input(2, 5.0, &[1], true)],
    };
    let err = scheduler().schedule(&request).unwrap_err();
    assert!(matches!(err, ScheduleError::CyclicDependency { ids } if ids == vec![1, 2]));
}

#[test]
fn test_pass_cap_degrades_without_breaking_dependencies() {
    let scheduler = SchedulerBuilder::new()
        .with_config(crate::config::SchedulerConfig {
            max_passes: 1,
            ..Default::default()
        })
        .build()
        .expect("Failed to build scheduler");

    let schedule = scheduler.schedule(&egg_plan()).expect("Failed to schedule");

    assert!(!schedule.converged);
    assert_eq!(schedule.passes, 1);
    assert!(schedule.is_degraded());
    assert!(schedule
        .advisory
        .as_deref()
        .is_some_and(|text| text.contains("1 passes")));
    assert!(start_of(&schedule, 2) >= start_of(&schedule, 1) + 5);
}

#[test]
fn test_fixed_start_times_in_input_are_ignored() {
    let mut step = input(1, 5.0, &[], true);
    step.start_time = Some(45.0);
    let schedule = scheduler()
        .schedule(&PlanRequest { steps: vec![step] })
        .expect("Failed to schedule");
    assert_eq!(start_of(&schedule, 1), 0);
}

/// Treats every pair as conflicting.
struct OneBurner;

impl ConflictClassifier for OneBurner {
    fn classify(&self, a: &Step, _b: &Step) -> Option<ConflictReason> {
        Some(ConflictReason::NotParallel { step: a.id })
    }
}

#[test]
fn test_custom_classifier_replaces_keyword_rules() {
    let scheduler = Scheduler::with_classifier(crate::config::SchedulerConfig::default(), OneBurner);
    let request = PlanRequest {
        steps: vec![
            described(input(1, 4.0, &[], true), "Toast bread", Some("A")),
            described(input(2, 6.0, &[], true), "Brew coffee", Some("B")),
            described(input(3, 2.0, &[], true), "Slice fruit", Some("C")),
        ],
    };
    let schedule = scheduler.schedule(&request).expect("Failed to schedule");

    assert!(schedule.converged);
    assert_eq!(schedule.optimized_time, 12);
    let mut intervals: Vec<_> = schedule.steps.iter().map(Step::interval).collect();
    intervals.sort_by_key(|r| r.start);
    for pair in intervals.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
}

#[test]
fn test_conflicts_lists_pairs_with_reasons() {
    let pairs = scheduler().conflicts(&egg_plan()).expect("Failed to list conflicts");
    let ids: Vec<(u64, u64)> = pairs.iter().map(|p| (p.first, p.second)).collect();
    assert_eq!(ids, vec![(1, 2), (1, 3), (2, 3)]);
    assert_eq!(pairs[0].reason, ConflictReason::NotParallel { step: 1 });
    assert_eq!(pairs[2].reason, ConflictReason::NotParallel { step: 3 });
}

#[test]
fn test_check_reports_dangling_dependencies() {
    let request = PlanRequest {
        steps: vec![input(1, 5.0, &[7], true)],
    };
    let plan = scheduler().check(&request).expect("Failed to check plan");
    assert_eq!(plan.dangling.len(), 1);
    assert_eq!(plan.dangling[0].missing, 7);
}

#[test]
fn test_plan_longer_than_u32_minutes_is_exact() {
    let request = PlanRequest {
        steps: vec![
            input(1, 4_000_000_000.0, &[], false),
            input(2, 4_000_000_000.0, &[], false),
        ],
    };
    let schedule = scheduler().schedule(&request).expect("Failed to schedule");

    assert_eq!(start_of(&schedule, 1), 0);
    assert_eq!(start_of(&schedule, 2), 4_000_000_000);
    assert_eq!(schedule.optimized_time, 8_000_000_000);
    let latest_end = schedule.steps.iter().map(Step::end_time).max();
    assert_eq!(latest_end, Some(schedule.optimized_time));
}
