use crate::error::Result;
use crate::models::{EnergyValue, FoodRecord, MacronutrientProfile};
use crate::nutrition::calculator::calculate_energy;

/// Sum profiles, validating each one first.
///
/// The first invalid profile fails the whole call.
pub fn aggregate_profiles<'a, I>(profiles: I) -> Result<MacronutrientProfile>
where
    I: IntoIterator<Item = &'a MacronutrientProfile>,
{
    profiles.into_iter().try_fold(MacronutrientProfile::zero(), |acc, p| {
        p.validate()?;
        Ok(acc + *p)
    })
}

/// Combined macronutrients of every food, servings applied.
pub fn meal_profile(foods: &[FoodRecord]) -> Result<MacronutrientProfile> {
    foods.iter().try_fold(MacronutrientProfile::zero(), |acc, food| {
        food.validate()?;
        Ok(acc + food.total_profile())
    })
}

/// Total energy of a meal.
pub fn total_energy(foods: &[FoodRecord]) -> Result<EnergyValue> {
    calculate_energy(&meal_profile(foods)?)
}
