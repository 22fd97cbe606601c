//! Stage listing command

use anyhow::Result;
use blogsmith_core::STAGE_NAMES;
use tracing::info;

/// Show the pipeline stages in execution order
pub async fn stages_command() -> Result<()> {
    info!("Listing pipeline stages");

    println!("Pipeline stages, in order:\n");

    for (i, name) in STAGE_NAMES.iter().enumerate() {
        println!("{}. {}", i + 1, name);
        println!("   {}\n", describe(name));
    }

    println!("Each stage is configured by the config.yaml section of the same name.");

    Ok(())
}

fn describe(stage: &str) -> &'static str {
    match stage {
        "keyword_discovery" => "Find low-competition keywords for the topic (cached)",
        "content_creation" => "Draft the post in markdown from the keyword report",
        "grammar_check" => "Normalize the draft and score its readability",
        "visual_generator" => "Plan featured and inline images",
        "publisher" => "Shape the post for Jekyll and derive its URL",
        "monetization" => "Insert affiliate and ad slot markers",
        "social_promotion" => "Draft scheduled posts for each platform",
        "email_drafter" => "Render the newsletter announcement",
        "analytics" => "Record the tracking plan for the page",
        _ => "",
    }
}
