use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::batch::job::{BatchLine, BatchSummary};
use crate::error::Result;
use crate::nutrition::constants::KCAL_DECIMALS;

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write recalculated rows to a CSV file.
pub fn write_csv(lines: &[BatchLine], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["Name", "Servings", "Carbs", "Protein", "Fat", "Kcal"])?;

    for line in lines {
        let profile = line.food.total_profile();
        wtr.write_record([
            line.food.name.clone(),
            line.food.servings.to_string(),
            profile.carbohydrates.to_string(),
            profile.protein.to_string(),
            profile.fat.to_string(),
            format!("{:.*}", KCAL_DECIMALS, line.energy.kcal()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write run totals and rejected rows to a JSON file.
pub fn write_summary_json(summary: &BatchSummary, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "processed": summary.processed(),
        "rejected_count": summary.rejected.len(),
        "total_kcal": truncate(summary.total_energy().kcal(), KCAL_DECIMALS as u32),
        "rejected": summary.rejected,
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}
