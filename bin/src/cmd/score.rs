//! Score command implementation.

use std::sync::Arc;

use anyhow::{Result, bail};
use serde_json::json;

use bolsa_combine::{Aggregator, WeightedAggregator};
use bolsa_em::{EmClient, Snapshot};
use bolsa_factors::registry;
use bolsa_traits::InstrumentData;

/// Evaluate every registered factor for one instrument and print the
/// aggregated composite.
pub(crate) async fn score_instrument(code: &str, json_output: bool) -> Result<()> {
    let code = code.trim();
    if code.is_empty() {
        bail!("instrument code must not be empty");
    }

    let client = EmClient::from_env();
    let snapshot = Snapshot::fetch(&client, code).await;
    let display_name = snapshot.name().unwrap_or("unknown").to_string();

    let source: Arc<dyn InstrumentData> = Arc::new(snapshot);

    let results: Vec<_> = registry::build_all(code, &source)
        .iter()
        .map(|factor| factor.evaluate())
        .collect();

    let composite = WeightedAggregator::new().aggregate(&results);

    if json_output {
        let payload = json!({
            "code": code,
            "name": display_name,
            "total_score": composite.total_score,
            "details": composite.details,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       Factor Scores                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Instrument: {code} ({display_name})\n");

    println!("{:<14} {:>10} {:>10} {:>10}", "Factor", "Score", "Max", "Weight");
    println!("{}", "─".repeat(48));
    for detail in &composite.details {
        let result = &detail.result;
        println!(
            "{:<14} {:>10.2} {:>10.0} {:>9.0}%",
            result.name,
            result.score,
            result.max_score,
            detail.norm_weight * 100.0
        );
        if let Some(error) = result.meta.get("error") {
            println!("    degraded: {error}");
        } else if let Some(note) = result.meta.get("note") {
            println!("    note: {note}");
        }
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Composite score: {:.2} / 100", composite.total_score);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    Ok(())
}
