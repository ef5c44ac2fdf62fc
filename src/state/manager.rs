use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{BalanceError, Result};
use crate::models::{EnergyValue, FoodRecord, MacroRatios, MacronutrientProfile};
use crate::nutrition::constants::{MAX_SUGGESTIONS, SUGGESTION_MIN_SIMILARITY};
use crate::nutrition::{calculate_energy, macro_ratios, meal_profile};

/// Energy line for a single food in a report.
#[derive(Debug, Clone)]
pub struct FoodEnergy {
    pub name: String,
    pub servings: f64,
    pub profile: MacronutrientProfile,
    pub energy: EnergyValue,
}

/// Per-food energy plus totals for a whole catalog.
#[derive(Debug, Clone)]
pub struct EnergyReport {
    pub items: Vec<FoodEnergy>,
    pub total_profile: MacronutrientProfile,
    pub total_energy: EnergyValue,
    pub ratios: MacroRatios,
}

/// Foods keyed by lowercase name.
pub struct FoodCatalog {
    foods: HashMap<String, FoodRecord>,
}

impl FoodCatalog {
    /// Create a catalog from a list of foods (last duplicate wins).
    pub fn new(foods: Vec<FoodRecord>) -> Self {
        let mut map = HashMap::new();
        for food in foods {
            map.insert(food.key(), food);
        }
        Self { foods: map }
    }

    /// Get a food by name (case-insensitive).
    pub fn get_food(&self, name: &str) -> Option<&FoodRecord> {
        self.foods.get(&name.to_lowercase())
    }

    /// Like `get_food`, but a missing name is an error.
    pub fn require_food(&self, name: &str) -> Result<&FoodRecord> {
        self.get_food(name)
            .ok_or_else(|| BalanceError::FoodNotFound(name.to_string()))
    }

    /// Closest food names by Jaro-Winkler similarity, best first.
    pub fn suggest(&self, name: &str) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut candidates: Vec<(&FoodRecord, f64)> = self
            .foods
            .iter()
            .map(|(key, food)| (food, jaro_winkler(key, &needle)))
            .filter(|(_, score)| *score > SUGGESTION_MIN_SIMILARITY)
            .collect();

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.name.cmp(&b.0.name))
        });

        candidates
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(f, _)| f.name.clone())
            .collect()
    }

    /// Energy of one food, servings applied.
    pub fn food_energy(&self, name: &str) -> Result<FoodEnergy> {
        let food = self.require_food(name)?;
        food_energy(food)
    }

    /// Combined macronutrients of every food in the catalog.
    pub fn total_profile(&self) -> Result<MacronutrientProfile> {
        meal_profile(&self.to_foods())
    }

    /// Per-food energy and totals. Fails on the first invalid record.
    pub fn energy_report(&self) -> Result<EnergyReport> {
        let foods = self.to_foods();
        let items = foods.iter().map(food_energy).collect::<Result<Vec<_>>>()?;

        let total_profile = meal_profile(&foods)?;
        let total_energy = calculate_energy(&total_profile)?;
        let ratios = macro_ratios(&total_profile)?;

        Ok(EnergyReport {
            items,
            total_profile,
            total_energy,
            ratios,
        })
    }

    /// All foods sorted by name, for serialization and reports.
    pub fn to_foods(&self) -> Vec<FoodRecord> {
        let mut foods: Vec<FoodRecord> = self.foods.values().cloned().collect();
        foods.sort_by_key(|f| f.key());
        foods
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// Energy of a single record, servings applied.
pub fn food_energy(food: &FoodRecord) -> Result<FoodEnergy> {
    food.validate()?;
    let profile = food.total_profile();
    Ok(FoodEnergy {
        name: food.name.clone(),
        servings: food.servings,
        profile,
        energy: calculate_energy(&profile)?,
    })
}
