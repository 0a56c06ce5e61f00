//! Run command: evaluate and notify.

use crate::cli::ReportFormat;
use crate::providers;
use alert_config::AppConfig;
use alert_engine::Pipeline;
use anyhow::{Context, Result};
use tracing::info;

pub async fn run(config: &AppConfig, report: Option<ReportFormat>) -> Result<()> {
    let client = providers::http_client(config)?;
    let quotes = providers::quote_source(config, client.clone());
    let news = providers::news_source(config, client.clone());
    let sender = providers::sender(config, client)?;
    let pipeline_config = providers::pipeline_config(config);

    let run_report = Pipeline::new(&pipeline_config, &quotes, &news, sender.as_ref())
        .run()
        .await
        .with_context(|| format!("Alert run for {} failed", pipeline_config.symbol))?;

    info!(
        "Run finished in state {}: {} message(s) sent",
        run_report.state,
        run_report.sent()
    );

    match report {
        Some(ReportFormat::Text) => println!("{}", run_report.summary()),
        Some(ReportFormat::Json) => println!("{}", run_report.to_json()?),
        None => {}
    }

    Ok(())
}
