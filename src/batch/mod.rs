pub mod job;
pub mod output;

pub use job::{recalculate, run_batch, BatchLine, BatchRow, BatchSummary, RejectedRow};
pub use output::{write_csv, write_summary_json};
