//! Equipment types for the Lentille catalog.

use serde::{Deserialize, Serialize};

/// Kind of equipment held in the catalog.
///
/// Each kind lives in its own table with identical columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentKind {
    /// Photo camera.
    Camera,
    /// Telescope.
    Telescope,
}

impl EquipmentKind {
    /// Table backing this kind.
    pub fn table(&self) -> &'static str {
        match self {
            EquipmentKind::Camera => "cameras",
            EquipmentKind::Telescope => "telescopes",
        }
    }

    /// Name used in error messages and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentKind::Camera => "camera",
            EquipmentKind::Telescope => "telescope",
        }
    }
}

impl std::fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A camera or telescope row.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct EquipmentItem {
    /// Row ID, unique within its kind.
    pub id: i64,
    /// Manufacturer.
    pub brand: String,
    /// Model name.
    pub model: String,
    /// Release date as free text.
    pub release_date: String,
    /// Rating.
    pub score: f64,
    /// Category label (e.g. "Hybride", "Dobson").
    pub category: String,
    /// Free-text description.
    pub summary: String,
}

/// Data for inserting an item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewEquipmentItem {
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub summary: String,
}

impl NewEquipmentItem {
    /// Create an item with brand and model; other fields are empty.
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            release_date: String::new(),
            score: 0.0,
            category: String::new(),
            summary: String::new(),
        }
    }

    /// Set the release date.
    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = release_date.into();
        self
    }

    /// Set the score.
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// Set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}
