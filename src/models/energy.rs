use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

/// Caloric energy in kilocalories.
///
/// Only the calculator produces these, so a value is always derived from a
/// validated profile and never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct EnergyValue(f64);

impl EnergyValue {
    pub(crate) fn from_kcal(kcal: f64) -> Self {
        debug_assert!(kcal.is_finite() && kcal >= 0.0);
        Self(kcal)
    }

    #[inline]
    pub fn kcal(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Add for EnergyValue {
    type Output = EnergyValue;

    fn add(self, other: EnergyValue) -> EnergyValue {
        EnergyValue(self.0 + other.0)
    }
}

impl Sum for EnergyValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(EnergyValue::default(), |acc, e| acc + e)
    }
}

impl fmt::Display for EnergyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} kcal", p, self.0),
            None => write!(f, "{} kcal", self.0),
        }
    }
}

/// Share of total energy contributed by each macronutrient.
///
/// Fractions sum to 1 when energy is non-zero; all zero otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroRatios {
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
}

impl MacroRatios {
    pub fn sum(&self) -> f64 {
        self.carbohydrates + self.protein + self.fat
    }
}
