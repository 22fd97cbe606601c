//! End-to-end pipeline run against a complete configuration file

use blogsmith_core::pipeline::PipelineOutcome;
use blogsmith_core::{BlogConfig, BlogPipeline};
use tempfile::tempdir;

fn full_config(cache_dir: &str) -> String {
    format!(
        r##"
blog:
  title: "Field Notes"
  description: "Notes from the field"
  author: "Jo Writer"
  language: "en"
  timezone: "Europe/Berlin"

jekyll:
  theme: "minima"
  permalink: "/:categories/:title/"
  plugins:
    - jekyll-feed
    - jekyll-seo-tag

github_pages:
  repository: "jowriter/field-notes"
  branch: "gh-pages"
  cname: "notes.example.com"

api_keys:
  serp: ""
  unsplash: ""
  pexels: ""
  language_tool: ""
  amazon_affiliate: ""

keyword_discovery:
  cache_dir: "{cache_dir}"
  max_results: 5
  difficulty_threshold: 70

content_creation:
  min_word_count: 10
  max_word_count: 5000
  tone: "informative"
  include_faq: true
  include_toc: true

grammar_check:
  min_readability_score: 0
  check_plagiarism: false
  style_guide: "AP"

visual_generator:
  featured_image_count: 1
  inline_image_count: 2
  image_style: "photorealistic"
  preferred_source: "stock"

publisher:
  auto_publish: true
  schedule_posts: false
  default_category: "engineering"
  default_tags:
    - rust

monetization:
  insert_affiliate_links: true
  max_affiliate_links: 2
  ad_placement: "both"

social_promotion:
  platforms:
    - mastodon
    - bluesky
  schedule_interval: 4
  hashtags:
    - "#rustlang"

email_drafter:
  platform: "buttondown"
  template: ""
  include_preview: true

analytics:
  platform: "ga4"
  track_events: true
  weekly_report: true
"##
    )
}

#[tokio::test]
async fn full_config_runs_end_to_end() {
    let dir = tempdir().unwrap();
    let cache_dir = dir.path().join("cache");
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, full_config(&cache_dir.display().to_string()))
        .await
        .unwrap();

    let config = BlogConfig::load(&config_path).await.unwrap();
    let pipeline = BlogPipeline::new(&config);

    let run = pipeline.run("static site generators").await;

    match run.outcome {
        PipelineOutcome::Success {
            url,
            social_posts,
            email_draft,
        } => {
            // cname wins over the github.io host
            assert!(url.starts_with("https://notes.example.com/engineering/"));
            assert_eq!(social_posts.len(), 2);
            assert!(email_draft.subject.contains("Static Site Generators"));
        }
        PipelineOutcome::Error { message } => panic!("pipeline failed: {message}"),
    }

    // The keyword report was cached under the topic name
    assert!(cache_dir.join("static_site_generators.json").exists());
}

#[tokio::test]
async fn shipped_config_loads_and_runs_end_to_end() {
    let shipped = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("config.yaml");

    let mut config = BlogConfig::load(&shipped).await.unwrap();

    // Keep cache writes out of the repository
    let dir = tempdir().unwrap();
    config.keyword_discovery.cache_dir = dir.path().display().to_string();

    let pipeline = BlogPipeline::new(&config);
    let run = pipeline.run("static site generators").await;

    match run.outcome {
        PipelineOutcome::Success { url, .. } => {
            assert!(url.starts_with("https://username.github.io/"));
        }
        PipelineOutcome::Error { message } => panic!("pipeline failed: {message}"),
    }
}

#[tokio::test]
async fn second_run_reuses_the_keyword_cache() {
    let dir = tempdir().unwrap();
    let cache_dir = dir.path().join("cache");
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, full_config(&cache_dir.display().to_string()))
        .await
        .unwrap();

    let config = BlogConfig::load(&config_path).await.unwrap();
    let pipeline = BlogPipeline::new(&config);

    let first = pipeline.run("static site generators").await;
    let cached = tokio::fs::read_to_string(cache_dir.join("static_site_generators.json"))
        .await
        .unwrap();

    let second = pipeline.run("static site generators").await;
    let cached_again = tokio::fs::read_to_string(cache_dir.join("static_site_generators.json"))
        .await
        .unwrap();

    assert!(first.outcome.is_success());
    assert!(second.outcome.is_success());
    assert_eq!(cached, cached_again);
}
