mod manager;
mod persistence;

pub use manager::{food_energy, EnergyReport, FoodCatalog, FoodEnergy};
pub use persistence::{load_foods, save_foods};
