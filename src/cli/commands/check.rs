//! Check command: evaluate only.

use crate::providers;
use alert_config::AppConfig;
use alert_engine::evaluate_latest;
use anyhow::{Context, Result};

pub async fn run(config: &AppConfig) -> Result<()> {
    let client = providers::http_client(config)?;
    let quotes = providers::quote_source(config, client);
    let pipeline_config = providers::pipeline_config(config);

    let evaluation = evaluate_latest(&quotes, &pipeline_config)
        .await
        .with_context(|| format!("Failed to evaluate {}", pipeline_config.symbol))?;
    let movement = &evaluation.result;

    println!(
        "{}: {}{}%",
        pipeline_config.symbol,
        movement.direction.glyph(),
        movement.abs_percentage()
    );
    println!(
        "  {} ({}) vs {} ({})",
        movement.latest_close, movement.latest_date, movement.previous_close, movement.previous_date
    );
    println!(
        "  Threshold {}%: {}",
        pipeline_config.threshold_pct,
        if evaluation.should_notify {
            "would notify"
        } else {
            "no notification"
        }
    );

    Ok(())
}
