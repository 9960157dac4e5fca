use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-100 g nutrition values for one inventory item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionFacts {
    pub name: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Macros for a weighed portion, each rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

// Formatting rounds the exact binary value with ties to even, so 0.15 (stored
// just below) becomes 0.1 and 0.25 becomes 0.2. Scaling by ten first would not.
fn round1(v: f64) -> f64 {
    format!("{v:.1}").parse().unwrap_or(v)
}

impl NutritionFacts {
    const fn new(name: &'static str, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name,
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Scale the per-100 g values to `weight_g` grams.
    pub fn scale(&self, weight_g: f64) -> Result<Macros> {
        if !weight_g.is_finite() || weight_g < 0.0 {
            return Err(Error::InvalidWeight(weight_g));
        }
        let factor = weight_g / 100.0;
        Ok(Macros {
            calories: round1(self.calories * factor),
            protein: round1(self.protein * factor),
            carbs: round1(self.carbs * factor),
            fat: round1(self.fat * factor),
        })
    }
}

const BUILTIN: [NutritionFacts; 10] = [
    NutritionFacts::new("Broccoli", 34.0, 2.8, 7.0, 0.4),
    NutritionFacts::new("Cucumber", 15.0, 0.7, 3.6, 0.1),
    NutritionFacts::new("Mushroom", 22.0, 3.1, 3.3, 0.3),
    NutritionFacts::new("Bell Pepper", 31.0, 1.0, 6.0, 0.3),
    NutritionFacts::new("Salt Shaker", 0.0, 0.0, 0.0, 0.0),
    NutritionFacts::new("Strawberry", 24.0, 0.0, 6.0, 0.0),
    NutritionFacts::new("Lemon", 50.0, 0.0, 12.0, 0.0),
    NutritionFacts::new("Bagel", 249.0, 1.0, 80.0, 0.5),
    NutritionFacts::new("Guacamole", 327.0, 5.0, 15.0, 25.0),
    NutritionFacts::new("Unknown", 0.0, 0.0, 0.0, 0.0),
];

/// Fixed food inventory keyed by name.
#[derive(Debug, Clone)]
pub struct Inventory {
    items: Vec<NutritionFacts>,
}

impl Inventory {
    pub fn builtin() -> Self {
        Self {
            items: BUILTIN.to_vec(),
        }
    }

    /// Exact, case-sensitive name lookup.
    pub fn lookup(&self, name: &str) -> Option<&NutritionFacts> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn items(&self) -> &[NutritionFacts] {
        &self.items
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::builtin()
    }
}
