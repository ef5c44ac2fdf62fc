use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{EnergyValue, FoodRecord, MacronutrientProfile};
use crate::nutrition::calculate_energy;

/// One input row of the recalculation job.
///
/// Kept flat because the csv crate cannot deserialize flattened structs.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRow {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Carbs")]
    pub carbs: f64,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Fat")]
    pub fat: f64,

    #[serde(rename = "Servings", default)]
    pub servings: Option<f64>,
}

impl From<BatchRow> for FoodRecord {
    fn from(row: BatchRow) -> Self {
        FoodRecord::new(
            row.name,
            MacronutrientProfile::new(row.carbs, row.protein, row.fat),
        )
        .with_servings(row.servings.unwrap_or(1.0))
    }
}

/// A row that was recalculated.
#[derive(Debug, Clone)]
pub struct BatchLine {
    pub food: FoodRecord,
    pub energy: EnergyValue,
}

/// A row skipped because its values were invalid.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedRow {
    /// 1-based line number in the input file, header included.
    pub line: usize,
    pub name: String,
    pub reason: String,
}

/// Outcome of a recalculation run.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub lines: Vec<BatchLine>,
    pub rejected: Vec<RejectedRow>,
}

impl BatchSummary {
    pub fn processed(&self) -> usize {
        self.lines.len()
    }

    pub fn total_energy(&self) -> EnergyValue {
        self.lines.iter().map(|l| l.energy).sum()
    }
}

/// Recalculate energy for every food read from `reader`.
///
/// Rows with negative or non-finite values, or energy past `f64::MAX`, are
/// skipped and reported.
/// Unparseable CSV is fatal.
pub fn recalculate<R: std::io::Read>(reader: R) -> Result<BatchSummary> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut summary = BatchSummary::default();

    for (i, result) in rdr.deserialize::<BatchRow>().enumerate() {
        let line = i + 2;
        let food: FoodRecord = result?.into();

        let energy = food
            .validate()
            .and_then(|_| calculate_energy(&food.total_profile()));

        match energy {
            Ok(energy) => summary.lines.push(BatchLine { food, energy }),
            Err(e) => {
                tracing::warn!(line, name = %food.name, error = %e, "skipping invalid row");
                summary.rejected.push(RejectedRow {
                    line,
                    name: food.name,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(summary)
}

/// Read `input`, recalculate, and write the energy report to `output`.
pub fn run_batch(input: &Path, output: &Path) -> Result<BatchSummary> {
    tracing::info!(input = %input.display(), "starting energy recalculation");

    let file = std::fs::File::open(input)?;
    let summary = recalculate(file)?;
    super::output::write_csv(&summary.lines, output)?;

    tracing::info!(
        output = %output.display(),
        processed = summary.processed(),
        rejected = summary.rejected.len(),
        "energy recalculation finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recalculate_valid_rows() {
        let input = "Name,Carbs,Protein,Fat,Servings\nBagel,50,20,10,\nButter,0,0,11,2\n";
        let summary = recalculate(input.as_bytes()).unwrap();

        assert_eq!(summary.processed(), 2);
        assert!(summary.rejected.is_empty());
        assert!((summary.lines[0].energy.kcal() - 370.0).abs() < 1e-9);
        assert!((summary.lines[1].energy.kcal() - 198.0).abs() < 1e-9);
    }

    #[test]
    fn test_servings_column_optional() {
        let input = "Name,Carbs,Protein,Fat\nRice,100,0,0\n";
        let summary = recalculate(input.as_bytes()).unwrap();
        assert_eq!(summary.lines[0].food.servings, 1.0);
        assert!((summary.total_energy().kcal() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_rows_are_rejected() {
        let input = "Name,Carbs,Protein,Fat\nGood,1,1,1\nBad,0,0,-5\nWeird,NaN,0,0\n";
        let summary = recalculate(input.as_bytes()).unwrap();

        assert_eq!(summary.processed(), 1);
        assert_eq!(summary.rejected.len(), 2);
        assert_eq!(summary.rejected[0].line, 3);
        assert_eq!(summary.rejected[0].name, "Bad");
        assert!(summary.rejected[0].reason.contains("fat"));
        assert_eq!(summary.rejected[1].line, 4);
    }

    #[test]
    fn test_overflowing_row_is_rejected() {
        let input = "Name,Carbs,Protein,Fat\nOk,1,1,1\nHuge,1e308,0,0\n";
        let summary = recalculate(input.as_bytes()).unwrap();

        assert_eq!(summary.processed(), 1);
        assert_eq!(summary.lines[0].food.name, "Ok");
        assert_eq!(summary.rejected.len(), 1);
        assert_eq!(summary.rejected[0].line, 3);
        assert!(summary.rejected[0].reason.contains("out of range"));
    }

    #[test]
    fn test_malformed_number_is_fatal() {
        let input = "Name,Carbs,Protein,Fat\nOops,lots,0,0\n";
        assert!(matches!(
            recalculate(input.as_bytes()),
            Err(crate::error::BalanceError::Csv(_))
        ));
    }
}
