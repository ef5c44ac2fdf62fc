pub mod aggregate;
pub mod calculator;
pub mod constants;

pub use aggregate::{aggregate_profiles, meal_profile, total_energy};
pub use calculator::{calculate_energy, energy_from_grams, macro_ratios, NutritionCalculator};
pub use constants::*;
