use crate::batch::BatchSummary;
use crate::models::{EnergyValue, FoodRecord, MacroRatios, MacronutrientProfile};
use crate::state::EnergyReport;

/// Format ratios as percentages of total energy.
pub fn format_ratios(ratios: &MacroRatios) -> String {
    format!(
        "carbs {:.0}% / protein {:.0}% / fat {:.0}%",
        ratios.carbohydrates * 100.0,
        ratios.protein * 100.0,
        ratios.fat * 100.0
    )
}

/// Display a single calculation.
pub fn display_energy(profile: &MacronutrientProfile, energy: EnergyValue, ratios: &MacroRatios) {
    println!("{} => {:.2}", profile, energy);
    if !energy.is_zero() {
        println!("  {}", format_ratios(ratios));
    }
}

/// Display per-food energy with totals.
pub fn display_energy_report(report: &EnergyReport) {
    if report.items.is_empty() {
        println!("No foods to report.");
        return;
    }

    println!();
    println!("=== Energy Report ===");
    println!();

    let max_name_len = report.items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for (i, item) in report.items.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} x{:<4} {:>8.1} kcal | {}",
            i + 1,
            item.name,
            item.servings,
            item.energy.kcal(),
            item.profile,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Total items: {}", report.items.len());
    println!("Total macros: {}", report.total_profile);
    println!("Total energy: {:.1}", report.total_energy);
    println!("Split: {}", format_ratios(&report.ratios));
    println!();
}

/// Display one food record.
pub fn display_food(food: &FoodRecord, energy: EnergyValue) {
    println!(
        "{} - {} per serving, {} serving(s) => {:.1}",
        food.name, food.per_serving, food.servings, energy
    );
}

/// Display suggestions for an unknown food name.
pub fn display_suggestions(name: &str, suggestions: &[String]) {
    if suggestions.is_empty() {
        println!("No food named '{}'.", name);
        return;
    }
    println!("No food named '{}'. Did you mean:", name);
    for s in suggestions {
        println!("  {}", s);
    }
}

/// Display the outcome of a batch run.
pub fn display_batch_summary(summary: &BatchSummary) {
    println!("Processed {} rows, {:.1} total.", summary.processed(), summary.total_energy());
    if summary.rejected.is_empty() {
        return;
    }
    println!("Rejected {} rows:", summary.rejected.len());
    for row in &summary.rejected {
        println!("  line {}: {} ({})", row.line, row.name, row.reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ratios() {
        let ratios = MacroRatios {
            carbohydrates: 0.5,
            protein: 0.25,
            fat: 0.25,
        };
        assert_eq!(format_ratios(&ratios), "carbs 50% / protein 25% / fat 25%");
    }
}
