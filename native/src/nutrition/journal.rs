use chrono::{DateTime, Local};
use serde::Serialize;

use super::inventory::Macros;
use crate::error::Result;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntry {
    pub id: u32,
    pub date: String,
    pub food_item: String,
    pub weight_g: f64,
    #[serde(flatten)]
    pub macros: Macros,
}

/// Append-only meal log. Entries are never edited or removed.
#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a portion stamped with the current local time.
    pub fn log(&mut self, food: &str, weight_g: f64, macros: Macros) -> &JournalEntry {
        self.log_at(food, weight_g, macros, Local::now())
    }

    pub fn log_at(&mut self, food: &str, weight_g: f64, macros: Macros, at: DateTime<Local>) -> &JournalEntry {
        let id = self.entries.len() as u32 + 1;
        self.entries.push(JournalEntry {
            id,
            date: at.format(DATE_FORMAT).to_string(),
            food_item: food.to_string(),
            weight_g,
            macros,
        });
        tracing::info!(id, food, weight_g, calories = macros.calories, "logged portion");
        &self.entries[self.entries.len() - 1]
    }

    /// Newest first.
    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON array of entries, newest first.
    pub fn to_json(&self) -> Result<String> {
        let newest_first: Vec<&JournalEntry> = self.entries().collect();
        Ok(serde_json::to_string(&newest_first)?)
    }
}
