//! Non-ML half of the nutrition station: classifier label -> inventory row ->
//! macros for a weighed portion -> journal entry. Inference itself happens
//! outside this crate; it only ever hands us a raw label string.

pub mod inventory;
pub mod journal;
pub mod label;

pub use inventory::{Inventory, Macros, NutritionFacts};
pub use journal::{Journal, JournalEntry};
pub use label::{map_label, UNKNOWN_FOOD};

use crate::error::{Error, Result};

/// A weighed, identified portion.
#[derive(Debug, Clone, PartialEq)]
pub struct Portion {
    pub food: String,
    pub weight_g: f64,
    pub macros: Macros,
}

/// Map a raw classifier label to inventory and scale its facts by `weight_g`.
pub fn estimate(inventory: &Inventory, raw_label: &str, weight_g: f64) -> Result<Portion> {
    let food = map_label(raw_label);
    let facts = match inventory.lookup(food) {
        Some(facts) if food != UNKNOWN_FOOD => facts,
        _ => {
            tracing::warn!(raw_label, mapped = food, "label has no inventory entry");
            return Err(Error::UnknownFood(raw_label.to_string()));
        }
    };
    let macros = facts.scale(weight_g)?;
    Ok(Portion {
        food: facts.name.to_string(),
        weight_g,
        macros,
    })
}
