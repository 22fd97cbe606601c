//! Single pipeline run command

use anyhow::Result;
use blogsmith_core::BlogPipeline;
use tracing::info;

use crate::config::CliConfigLoader;

/// Run the full pipeline for a topic and print the outcome as JSON
///
/// Exits with code 1 when the pipeline reports an error, matching what
/// scripted consumers expect.
pub async fn run_command(topic: String, config_loader: CliConfigLoader) -> Result<()> {
    info!("Running pipeline for topic: {}", topic);

    let config = config_loader.load().await?;
    let pipeline = BlogPipeline::new(&config);

    let run = pipeline.run(&topic).await;

    println!("{}", serde_json::to_string_pretty(&run.outcome)?);

    if !run.outcome.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
