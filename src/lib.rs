pub mod batch;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod state;

pub use error::{BalanceError, ErrorStatus, Result};
pub use models::{EnergyValue, FoodRecord, MacroRatios, Macronutrient, MacronutrientProfile};
pub use nutrition::{calculate_energy, NutritionCalculator};
