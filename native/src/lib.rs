#[macro_use]
extern crate napi_derive;

pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod nutrition;
pub mod presentation;
pub mod types;

use config::EvaluatorConfig;
use error::{INVALID_COLOR_MESSAGE, INVALID_COLOR_TITLE};
use nutrition::{Inventory, Journal, JournalEntry, Portion};
use types::{
    BatchReport, ColorPairInput, ContrastReport, EvaluateOptions, EvaluationOutcome, HostDefaults,
    JournalEntryJs, PortionReport,
};

#[napi]
pub fn health_check() -> String {
    "contrast-check-native ok".to_string()
}

#[napi]
pub fn host_defaults() -> HostDefaults {
    HostDefaults {
        foreground: config::DEFAULT_FOREGROUND.to_string(),
        background: config::DEFAULT_BACKGROUND.to_string(),
        prompt: config::INITIAL_PROMPT.to_string(),
        preview_caption: config::PREVIEW_CAPTION.to_string(),
        error_title: INVALID_COLOR_TITLE.to_string(),
        error_message: INVALID_COLOR_MESSAGE.to_string(),
    }
}

/// Throws `InvalidArg` with the user-facing message if either color is malformed.
#[napi]
pub fn evaluate_contrast(
    foreground: String,
    background: String,
    options: Option<EvaluateOptions>,
) -> napi::Result<ContrastReport> {
    let config = EvaluatorConfig::from_options(options.as_ref())?;
    Ok(presentation::report(&foreground, &background, &config)?)
}

#[napi]
pub fn try_evaluate_contrast(
    foreground: String,
    background: String,
    options: Option<EvaluateOptions>,
) -> napi::Result<EvaluationOutcome> {
    let config = EvaluatorConfig::from_options(options.as_ref())?;
    Ok(presentation::outcome(&foreground, &background, &config)?)
}

#[napi]
pub fn evaluate_contrast_batch(
    pairs: Vec<ColorPairInput>,
    options: Option<EvaluateOptions>,
) -> napi::Result<BatchReport> {
    let config = EvaluatorConfig::from_options(options.as_ref())?;
    Ok(engine::evaluate_all(&pairs, &config))
}

#[napi]
pub fn map_food_label(raw_label: String) -> String {
    nutrition::map_label(&raw_label).to_string()
}

#[napi]
pub fn estimate_portion(raw_label: String, weight_g: f64) -> napi::Result<PortionReport> {
    let portion = nutrition::estimate(&Inventory::builtin(), &raw_label, weight_g)?;
    Ok(portion.into())
}

impl From<Portion> for PortionReport {
    fn from(p: Portion) -> Self {
        PortionReport {
            food: p.food,
            weight_g: p.weight_g,
            calories: p.macros.calories,
            protein: p.macros.protein,
            carbs: p.macros.carbs,
            fat: p.macros.fat,
        }
    }
}

impl From<&JournalEntry> for JournalEntryJs {
    fn from(e: &JournalEntry) -> Self {
        JournalEntryJs {
            id: e.id,
            date: e.date.clone(),
            food_item: e.food_item.clone(),
            weight_g: e.weight_g,
            calories: e.macros.calories,
            protein: e.macros.protein,
            carbs: e.macros.carbs,
            fat: e.macros.fat,
        }
    }
}

/// Meal log owned by the host page for the lifetime of the session.
#[napi]
pub struct FoodJournal {
    inventory: Inventory,
    journal: Journal,
}

#[napi]
impl FoodJournal {
    #[napi(constructor)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            inventory: Inventory::builtin(),
            journal: Journal::new(),
        }
    }

    /// Scale the named inventory item by `weight_g` and append it.
    #[napi]
    pub fn log_portion(&mut self, food: String, weight_g: f64) -> napi::Result<JournalEntryJs> {
        let facts = self
            .inventory
            .lookup(&food)
            .ok_or_else(|| error::Error::UnknownFood(food.clone()))?;
        let macros = facts.scale(weight_g)?;
        Ok(self.journal.log(&food, weight_g, macros).into())
    }

    /// Newest first.
    #[napi]
    pub fn entries(&self) -> Vec<JournalEntryJs> {
        self.journal.entries().map(JournalEntryJs::from).collect()
    }

    #[napi]
    pub fn to_json(&self) -> napi::Result<String> {
        Ok(self.journal.to_json()?)
    }
}
