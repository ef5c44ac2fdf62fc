use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};
use crate::models::MacronutrientProfile;

fn default_servings() -> f64 {
    1.0
}

/// A food or logged meal item with its per-serving macronutrients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(flatten)]
    pub per_serving: MacronutrientProfile,

    #[serde(rename = "Servings", default = "default_servings")]
    pub servings: f64,
}

impl FoodRecord {
    pub fn new(name: impl Into<String>, per_serving: MacronutrientProfile) -> Self {
        Self {
            name: name.into(),
            per_serving,
            servings: 1.0,
        }
    }

    pub fn with_servings(mut self, servings: f64) -> Self {
        self.servings = servings;
        self
    }

    /// Validate servings and the per-serving profile.
    pub fn validate(&self) -> Result<()> {
        if !self.servings.is_finite() || self.servings < 0.0 {
            return Err(BalanceError::InvalidServings(self.servings));
        }
        self.per_serving.validate()
    }

    /// Macronutrients eaten: per-serving profile times servings.
    pub fn total_profile(&self) -> MacronutrientProfile {
        self.per_serving.scale(self.servings)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for FoodRecord {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodRecord {}

impl std::hash::Hash for FoodRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
