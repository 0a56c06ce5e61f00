//! Movement evaluation, notification formatting and the run pipeline.

mod evaluator;
mod formatter;
mod pipeline;
mod report;

pub use evaluator::{evaluate, Evaluation, DEFAULT_THRESHOLD_PCT};
pub use formatter::{format_notifications, MAX_ARTICLES};
pub use pipeline::{evaluate_latest, Pipeline, PipelineConfig, RunState};
pub use report::RunReport;
