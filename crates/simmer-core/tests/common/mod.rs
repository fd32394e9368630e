use rand::{rngs::StdRng, Rng, SeedableRng};
use simmer_core::{Scheduler, SchedulerBuilder, StepInput};

/// Helper function to create a scheduler that ignores any user config
pub fn create_test_scheduler() -> Scheduler {
    SchedulerBuilder::new()
        .without_user_config()
        .build()
        .expect("Failed to create scheduler")
}

const DESCRIPTIONS: &[&str] = &[
    "Crack the egg into a bowl",
    "Fry garlic in the pan",
    "Boil water in a pot",
    "Roast the pepper in the oven",
    "Chop the onion",
    "Simmer tomato sauce",
    "Let the dough rest",
    "Steam rice in the steamer",
    "Plate everything",
    "Reheat the soup in the microwave",
];

const DISHES: &[&str] = &["A", "B", "C"];

/// Generate an acyclic plan of `size` steps from a fixed seed.
/// Dependencies only point at lower ids, and occasionally at ids that do
/// not exist.
pub fn random_plan(seed: u64, size: u64) -> Vec<StepInput> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=size)
        .map(|id| {
            let mut dependencies = Vec::new();
            if id > 1 {
                for _ in 0..rng.random_range(0..3) {
                    dependencies.push(rng.random_range(1..id));
                }
            }
            if rng.random_bool(0.1) {
                dependencies.push(1000 + id);
            }

            StepInput {
                id: Some(id),
                title: format!("Step {id}"),
                description: DESCRIPTIONS[rng.random_range(0..DESCRIPTIONS.len())].to_string(),
                duration: Some(f64::from(rng.random_range(1..=15u32))),
                dependencies,
                can_parallel: rng.random_bool(2.0 / 3.0),
                category: None,
                dish_label: Some(DISHES[rng.random_range(0..DISHES.len())].to_string()),
                start_time: None,
            }
        })
        .collect()
}
