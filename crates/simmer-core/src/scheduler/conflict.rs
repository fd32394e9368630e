//! Conflict classification between pairs of steps.
//!
//! The scheduler only ever asks one question: may these two steps overlap in
//! time? [`ConflictClassifier`] answers it. The default
//! [`KeywordClassifier`] uses the declared parallel flag, dish labels and a
//! fixed keyword vocabulary; any other resource model can be plugged in by
//! implementing the trait.

use std::fmt;

use crate::{config::SchedulerConfig, models::Step};

/// Why two steps must not overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictReason {
    /// The named step declared that it cannot run alongside anything
    NotParallel { step: u64 },
    /// Both descriptions mention the same ingredient
    SharedIngredient { term: String },
    /// Both descriptions mention the same kind of appliance
    SharedEquipment { first: String, second: String },
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictReason::NotParallel { step } => {
                write!(f, "step {step} cannot run in parallel")
            }
            ConflictReason::SharedIngredient { term } => write!(f, "both use {term}"),
            ConflictReason::SharedEquipment { first, second } if first == second => {
                write!(f, "both need the {first}")
            }
            ConflictReason::SharedEquipment { first, second } => {
                write!(f, "{first} and {second} need the same appliance")
            }
        }
    }
}

/// Decides whether two distinct steps must be serialized.
pub trait ConflictClassifier {
    /// Return the reason the steps conflict, or `None` if they may overlap.
    fn classify(&self, a: &Step, b: &Step) -> Option<ConflictReason>;

    /// Whether the two steps must not overlap in time.
    fn must_serialize(&self, a: &Step, b: &Step) -> bool {
        self.classify(a, b).is_some()
    }
}

/// Heuristic classifier over fixed vocabulary tables.
///
/// Rules, first match wins:
/// 1. either step is not parallel: conflict
/// 2. both dish labels set and different: no conflict
/// 3. descriptions share an ingredient term: conflict
/// 4. descriptions each match a term from the same equipment group: conflict
/// 5. otherwise no conflict
///
/// Terms are matched as case-sensitive substrings.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    ingredients: Vec<String>,
    equipment_groups: Vec<Vec<String>>,
}

impl KeywordClassifier {
    /// Build a classifier from explicit vocabulary tables.
    pub fn new(ingredients: Vec<String>, equipment_groups: Vec<Vec<String>>) -> Self {
        Self {
            ingredients,
            equipment_groups,
        }
    }

    /// Build a classifier from the vocabulary in a configuration.
    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self::new(config.ingredients.clone(), config.equipment_groups.clone())
    }

    /// Ingredient terms found in `text`, in vocabulary order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simmer_core::scheduler::KeywordClassifier;
    ///
    /// let classifier = KeywordClassifier::default();
    /// let found = classifier.ingredients_in("Whisk the egg into the rice");
    /// assert_eq!(found, vec!["egg", "rice"]);
    /// ```
    pub fn ingredients_in<'a>(&'a self, text: &str) -> Vec<&'a str> {
        self.ingredients
            .iter()
            .filter(|term| text.contains(term.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// First term of `group` found in `text`.
    fn equipment_in<'a>(group: &'a [String], text: &str) -> Option<&'a str> {
        group
            .iter()
            .find(|term| text.contains(term.as_str()))
            .map(String::as_str)
    }

    fn shared_ingredient(&self, a: &Step, b: &Step) -> Option<ConflictReason> {
        let theirs = self.ingredients_in(&b.description);
        self.ingredients_in(&a.description)
            .into_iter()
            .find(|term| theirs.contains(term))
            .map(|term| ConflictReason::SharedIngredient {
                term: term.to_string(),
            })
    }

    fn shared_equipment(&self, a: &Step, b: &Step) -> Option<ConflictReason> {
        self.equipment_groups.iter().find_map(|group| {
            let first = Self::equipment_in(group, &a.description)?;
            let second = Self::equipment_in(group, &b.description)?;
            Some(ConflictReason::SharedEquipment {
                first: first.to_string(),
                second: second.to_string(),
            })
        })
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::from_config(&SchedulerConfig::default())
    }
}

impl ConflictClassifier for KeywordClassifier {
    fn classify(&self, a: &Step, b: &Step) -> Option<ConflictReason> {
        if !a.can_parallel {
            return Some(ConflictReason::NotParallel { step: a.id });
        }
        if !b.can_parallel {
            return Some(ConflictReason::NotParallel { step: b.id });
        }

        if let (Some(dish_a), Some(dish_b)) = (&a.dish_label, &b.dish_label) {
            if dish_a != dish_b {
                return None;
            }
        }

        self.shared_ingredient(a, b)
            .or_else(|| self.shared_equipment(a, b))
    }
}
