//! Atwater general factors and reporting thresholds.

/// Energy per gram of carbohydrate (kcal).
pub const KCAL_PER_GRAM_CARBOHYDRATE: f64 = 4.0;

/// Energy per gram of protein (kcal).
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy per gram of fat (kcal).
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Minimum Jaro-Winkler similarity for a name suggestion.
pub const SUGGESTION_MIN_SIMILARITY: f64 = 0.7;

/// Maximum number of name suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Decimal places used when writing kcal to reports.
pub const KCAL_DECIMALS: usize = 2;
