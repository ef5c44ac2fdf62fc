use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::{BalanceError, Result};
use crate::nutrition::constants::{
    KCAL_PER_GRAM_CARBOHYDRATE, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};

/// One of the three energy-yielding macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macronutrient {
    Carbohydrate,
    Protein,
    Fat,
}

impl Macronutrient {
    pub const ALL: [Macronutrient; 3] = [
        Macronutrient::Carbohydrate,
        Macronutrient::Protein,
        Macronutrient::Fat,
    ];

    /// Atwater general factor in kcal per gram.
    pub fn kcal_per_gram(self) -> f64 {
        match self {
            Macronutrient::Carbohydrate => KCAL_PER_GRAM_CARBOHYDRATE,
            Macronutrient::Protein => KCAL_PER_GRAM_PROTEIN,
            Macronutrient::Fat => KCAL_PER_GRAM_FAT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Macronutrient::Carbohydrate => "carbohydrates",
            Macronutrient::Protein => "protein",
            Macronutrient::Fat => "fat",
        }
    }
}

impl fmt::Display for Macronutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Carbohydrate/protein/fat composition of a food or meal, in grams.
///
/// Built unchecked by callers from user input or stored records. The
/// calculator validates it before use; `try_new` validates up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientProfile {
    #[serde(rename = "Carbs")]
    pub carbohydrates: f64,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Fat")]
    pub fat: f64,
}

impl MacronutrientProfile {
    pub fn new(carbohydrates: f64, protein: f64, fat: f64) -> Self {
        Self {
            carbohydrates,
            protein,
            fat,
        }
    }

    /// Build a profile, rejecting negative or non-finite amounts.
    pub fn try_new(carbohydrates: f64, protein: f64, fat: f64) -> Result<Self> {
        let profile = Self::new(carbohydrates, protein, fat);
        profile.validate()?;
        Ok(profile)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Grams of the given macronutrient.
    #[inline]
    pub fn grams(&self, nutrient: Macronutrient) -> f64 {
        match nutrient {
            Macronutrient::Carbohydrate => self.carbohydrates,
            Macronutrient::Protein => self.protein,
            Macronutrient::Fat => self.fat,
        }
    }

    /// Check every field in carbohydrate, protein, fat order.
    ///
    /// Reports the first field that is negative, NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        for nutrient in Macronutrient::ALL {
            let value = self.grams(nutrient);
            if !value.is_finite() || value < 0.0 {
                return Err(BalanceError::InvalidInput { nutrient, value });
            }
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Total mass of the three macronutrients.
    #[inline]
    pub fn total_grams(&self) -> f64 {
        self.carbohydrates + self.protein + self.fat
    }

    /// Multiply every field by `factor`, e.g. a number of servings.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            carbohydrates: self.carbohydrates * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
        }
    }
}

impl Add for MacronutrientProfile {
    type Output = MacronutrientProfile;

    fn add(self, other: MacronutrientProfile) -> MacronutrientProfile {
        MacronutrientProfile {
            carbohydrates: self.carbohydrates + other.carbohydrates,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
        }
    }
}

impl Sum for MacronutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacronutrientProfile::zero(), |acc, p| acc + p)
    }
}

impl fmt::Display for MacronutrientProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C:{}g P:{}g F:{}g",
            self.carbohydrates, self.protein, self.fat
        )
    }
}
