use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use balance_eat_rs::batch::{run_batch, write_summary_json};
use balance_eat_rs::cli::{Cli, Command};
use balance_eat_rs::error::{BalanceError, Result};
use balance_eat_rs::interface::{
    display_batch_summary, display_energy, display_energy_report, display_food,
    display_suggestions,
};
use balance_eat_rs::models::MacronutrientProfile;
use balance_eat_rs::nutrition::NutritionCalculator;
use balance_eat_rs::state::{food_energy, load_foods, FoodCatalog};

fn main() {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.status().exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let calculator = NutritionCalculator::new();

    match cli.command {
        Command::Calc {
            carbs,
            protein,
            fat,
            json,
        } => cmd_calc(&calculator, MacronutrientProfile::new(carbs, protein, fat), json),
        Command::Report => cmd_report(&cli.file),
        Command::Show { name } => cmd_show(&cli.file, &name),
        Command::Batch {
            input,
            output,
            summary,
        } => cmd_batch(&input, &output, summary.as_deref()),
    }
}

/// Calculate energy for a single profile.
fn cmd_calc(
    calculator: &NutritionCalculator,
    profile: MacronutrientProfile,
    json: bool,
) -> Result<()> {
    let energy = calculator.calculate_energy(&profile)?;
    let ratios = calculator.macro_ratios(&profile)?;

    if json {
        let out = serde_json::json!({
            "profile": profile,
            "kcal": energy,
            "ratios": ratios,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        display_energy(&profile, energy, &ratios);
    }

    Ok(())
}

/// Print per-food energy for the whole food file.
fn cmd_report(file_path: &Path) -> Result<()> {
    let catalog = FoodCatalog::new(load_foods(file_path)?);
    let report = catalog.energy_report()?;
    display_energy_report(&report);
    Ok(())
}

/// Print one food, or suggestions when the name is unknown.
fn cmd_show(file_path: &Path, name: &str) -> Result<()> {
    let catalog = FoodCatalog::new(load_foods(file_path)?);

    match catalog.get_food(name) {
        Some(food) => {
            let line = food_energy(food)?;
            display_food(food, line.energy);
            Ok(())
        }
        None => {
            display_suggestions(name, &catalog.suggest(name));
            Err(BalanceError::FoodNotFound(name.to_string()))
        }
    }
}

/// Run the recalculation job over a CSV file.
fn cmd_batch(input: &Path, output: &Path, summary_path: Option<&Path>) -> Result<()> {
    let summary = run_batch(input, output)?;
    display_batch_summary(&summary);
    println!("Wrote energy report to {:?}", output);

    if let Some(path) = summary_path {
        write_summary_json(&summary, path)?;
        println!("Wrote summary to {:?}", path);
    }

    Ok(())
}
