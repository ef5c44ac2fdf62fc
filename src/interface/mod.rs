pub mod render;

pub use render::{
    display_batch_summary, display_energy, display_energy_report, display_food,
    display_suggestions, format_ratios,
};
