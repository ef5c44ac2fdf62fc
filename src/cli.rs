use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// BalanceEat: nutrition calculator for the diet tracker.
#[derive(Parser, Debug)]
#[command(name = "balance_eat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the food JSON file.
    #[arg(short, long, global = true, default_value = "foods.json")]
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate energy from grams of carbohydrates, protein and fat.
    Calc {
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        carbs: f64,

        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        protein: f64,

        #[arg(short = 'F', long, default_value = "0", allow_negative_numbers = true)]
        fat: f64,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Per-food energy report with totals for the food file.
    Report,

    /// Show a single food from the food file.
    Show {
        /// Food name (case-insensitive).
        name: String,
    },

    /// Recalculate energy for every row of a CSV file.
    Batch {
        /// Input CSV with Name,Carbs,Protein,Fat[,Servings] columns.
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV with an added Kcal column.
        #[arg(short, long, default_value = "energy_report.csv")]
        output: PathBuf,

        /// Optional JSON summary of processed and rejected rows.
        #[arg(long)]
        summary: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_text() {
        use clap::CommandFactory;

        let about = Cli::command()
            .get_about()
            .map(|s| s.to_string())
            .unwrap_or_default();
        assert!(about.starts_with("BalanceEat: nutrition calculator"));
        assert!(about.is_ascii());
    }

    #[test]
    fn test_parse_calc() {
        let cli = Cli::parse_from(["balance_eat", "calc", "-c", "50", "-p", "20", "-F", "10"]);
        match cli.command {
            Command::Calc {
                carbs,
                protein,
                fat,
                json,
            } => {
                assert_eq!((carbs, protein, fat), (50.0, 20.0, 10.0));
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.file, PathBuf::from("foods.json"));
    }

    #[test]
    fn test_parse_negative_value() {
        let cli = Cli::parse_from(["balance_eat", "calc", "--fat", "-5"]);
        assert!(matches!(cli.command, Command::Calc { fat, .. } if fat == -5.0));
    }

    #[test]
    fn test_parse_batch() {
        let cli = Cli::parse_from(["balance_eat", "batch", "-i", "in.csv", "--file", "x.json"]);
        match cli.command {
            Command::Batch {
                input,
                output,
                summary,
            } => {
                assert_eq!(input, PathBuf::from("in.csv"));
                assert_eq!(output, PathBuf::from("energy_report.csv"));
                assert!(summary.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.file, PathBuf::from("x.json"));
    }
}
