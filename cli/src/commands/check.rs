//! Configuration check command

use anyhow::Result;
use tracing::info;

use crate::config::CliConfigLoader;

/// Load and validate the configuration, then print a short summary
pub async fn check_command(config_loader: CliConfigLoader) -> Result<()> {
    info!("Checking configuration");

    let config = config_loader.load().await?;

    println!("Configuration OK");
    println!("  blog:        {}", config.blog.title);
    println!("  repository:  {}", config.github_pages.repository);
    println!(
        "  word count:  {}-{}",
        config.content_creation.min_word_count, config.content_creation.max_word_count
    );
    println!(
        "  publishing:  {}",
        if config.publisher.auto_publish {
            "automatic"
        } else {
            "drafts only"
        }
    );

    let unfilled: Vec<&str> = [
        ("serp", config.api_keys.serp.is_empty()),
        ("unsplash", config.api_keys.unsplash.is_empty()),
        ("pexels", config.api_keys.pexels.is_empty()),
        ("language_tool", config.api_keys.language_tool.is_empty()),
        (
            "amazon_affiliate",
            config.api_keys.amazon_affiliate.is_empty(),
        ),
    ]
    .into_iter()
    .filter_map(|(name, empty)| empty.then_some(name))
    .collect();

    if !unfilled.is_empty() {
        println!("  unfilled API keys: {}", unfilled.join(", "));
    }

    Ok(())
}
