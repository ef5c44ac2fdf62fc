use crate::error::{BalanceError, Result};
use crate::models::{EnergyValue, MacroRatios, Macronutrient, MacronutrientProfile};

/// Energy contributed by one macronutrient of a validated profile.
#[inline]
fn energy_of(profile: &MacronutrientProfile, nutrient: Macronutrient) -> f64 {
    profile.grams(nutrient) * nutrient.kcal_per_gram()
}

/// Calculate energy from a macronutrient profile using Atwater factors.
///
/// Formula: carbohydrates * 4 + protein * 4 + fat * 9
///
/// Fails with `InvalidInput` if any field is negative, NaN or infinite, and
/// with `EnergyOverflow` if the finite fields sum past `f64::MAX`.
pub fn calculate_energy(profile: &MacronutrientProfile) -> Result<EnergyValue> {
    profile.validate()?;

    let kcal: f64 = Macronutrient::ALL
        .into_iter()
        .map(|n| energy_of(profile, n))
        .sum();

    if !kcal.is_finite() {
        return Err(BalanceError::EnergyOverflow(*profile));
    }

    // -0.0 fields pass validation; adding +0.0 turns a -0.0 sum into 0.0
    Ok(EnergyValue::from_kcal(kcal + 0.0))
}

/// Build a profile from raw grams and calculate its energy.
pub fn energy_from_grams(carbohydrates: f64, protein: f64, fat: f64) -> Result<EnergyValue> {
    calculate_energy(&MacronutrientProfile::new(carbohydrates, protein, fat))
}

/// Calculate the share of energy coming from each macronutrient.
///
/// A zero-energy profile yields all-zero ratios.
pub fn macro_ratios(profile: &MacronutrientProfile) -> Result<MacroRatios> {
    let total = calculate_energy(profile)?;
    if total.is_zero() {
        return Ok(MacroRatios::default());
    }

    let share = |n| energy_of(profile, n) / total.kcal();
    Ok(MacroRatios {
        carbohydrates: share(Macronutrient::Carbohydrate),
        protein: share(Macronutrient::Protein),
        fat: share(Macronutrient::Fat),
    })
}

/// Stateless calculator service.
///
/// Zero-sized; construct once and share freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct NutritionCalculator;

impl NutritionCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn calculate_energy(&self, profile: &MacronutrientProfile) -> Result<EnergyValue> {
        calculate_energy(profile)
    }

    pub fn energy_from_grams(
        &self,
        carbohydrates: f64,
        protein: f64,
        fat: f64,
    ) -> Result<EnergyValue> {
        energy_from_grams(carbohydrates, protein, fat)
    }

    pub fn macro_ratios(&self, profile: &MacronutrientProfile) -> Result<MacroRatios> {
        macro_ratios(profile)
    }
}
