mod energy;
mod food;
mod profile;

pub use energy::{EnergyValue, MacroRatios};
pub use food::FoodRecord;
pub use profile::{Macronutrient, MacronutrientProfile};
