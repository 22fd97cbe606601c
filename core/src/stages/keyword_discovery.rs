//! Keyword discovery stage
//!
//! Finds low-competition keywords for a seed topic. Results are cached on
//! disk per topic; on a miss, candidate sources are tried in a fixed order
//! and the first one whose difficulty passes the configured threshold wins.
//! A pattern-based fallback always produces something, so discovery cannot
//! fail outright.
//!
//! The external SEO services themselves are out of scope; each source emits
//! its deterministic catalog data, tagged with the source name.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::schema::KeywordDiscoverySection;
use crate::error::{Result, StageError};

/// Search metrics attached to a keyword report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMetrics {
    /// Monthly search volume
    pub search_volume: u64,
    /// Cost per click, USD
    pub cpc: f64,
    /// Competition in [0,1]
    pub competition: f64,
}

impl KeywordMetrics {
    /// Competition scaled to the 0-100 difficulty range
    pub fn difficulty(&self) -> u32 {
        (self.competition * 100.0).round() as u32
    }
}

/// Outcome of keyword discovery for one topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    /// The seed topic itself
    pub primary_keyword: String,
    /// Related queries worth targeting
    pub related_queries: Vec<String>,
    /// Competitor URLs ranking for the topic
    pub top_urls: Vec<String>,
    /// Metrics, absent for fallback results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<KeywordMetrics>,
    /// Which source produced the report
    pub source: String,
    /// Set on fallback results only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

/// Keyword discovery stage
pub struct KeywordDiscovery {
    config: KeywordDiscoverySection,
}

impl KeywordDiscovery {
    pub fn new(config: KeywordDiscoverySection) -> Self {
        Self { config }
    }

    /// Discover keywords for a topic, consulting the cache first
    pub async fn discover(&self, topic: &str) -> Result<KeywordReport> {
        let cache_path = self.cache_path(topic);

        if let Some(cached) = self.read_cache(&cache_path).await {
            info!("Using cached keyword data for '{}'", topic);
            return Ok(cached);
        }

        info!("Discovering keywords for topic: {}", topic);

        let candidates = [
            serpapi_source(topic),
            keywordsurfer_source(topic),
            google_trends_source(topic),
        ];

        let mut report = None;
        for candidate in candidates {
            if self.accepts(&candidate) {
                report = Some(candidate);
                break;
            }
            warn!(
                "Source '{}' rejected: difficulty above threshold {}",
                candidate.source, self.config.difficulty_threshold
            );
        }

        let mut report = report.unwrap_or_else(|| {
            warn!("All sources rejected, using fallback method");
            fallback_source(topic)
        });

        report.related_queries.truncate(self.config.max_results);

        self.write_cache(&cache_path, &report).await?;

        Ok(report)
    }

    /// Cache file for a topic: spaces and path separators become
    /// underscores so the file always lands inside `cache_dir`
    fn cache_path(&self, topic: &str) -> PathBuf {
        let dir = shellexpand::tilde(&self.config.cache_dir).into_owned();
        let key: String = topic
            .chars()
            .map(|c| {
                if c == ' ' || std::path::is_separator(c) {
                    '_'
                } else {
                    c
                }
            })
            .collect();
        PathBuf::from(dir).join(format!("{key}.json"))
    }

    async fn read_cache(&self, path: &PathBuf) -> Option<KeywordReport> {
        let content = fs::read_to_string(path).await.ok()?;
        match serde_json::from_str(&content) {
            Ok(report) => Some(report),
            Err(e) => {
                // Treat a corrupt cache entry as a miss; it gets rewritten
                warn!("Ignoring unreadable cache entry {}: {}", path.display(), e);
                None
            }
        }
    }

    async fn write_cache(&self, path: &PathBuf, report: &KeywordReport) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| StageError::Cache {
                message: format!("failed to create {}: {}", parent.display(), e),
            })?;
        }

        let content = serde_json::to_string_pretty(report)?;
        fs::write(path, content).await.map_err(|e| StageError::Cache {
            message: format!("failed to write {}: {}", path.display(), e),
        })?;

        debug!("Cached keyword report at {}", path.display());
        Ok(())
    }

    /// A source result is usable when its difficulty does not exceed the
    /// configured threshold; results without metrics always pass.
    fn accepts(&self, report: &KeywordReport) -> bool {
        report
            .metrics
            .as_ref()
            .map(|m| m.difficulty() <= self.config.difficulty_threshold)
            .unwrap_or(true)
    }
}

fn slugify(topic: &str, separator: char) -> String {
    topic.replace(' ', &separator.to_string())
}

fn serpapi_source(topic: &str) -> KeywordReport {
    debug!("Consulting SerpApi catalog for '{}'", topic);
    let dash = slugify(topic, '-');
    let under = slugify(topic, '_');

    KeywordReport {
        primary_keyword: topic.to_string(),
        related_queries: vec![
            format!("{topic} best practices"),
            format!("{topic} examples"),
            format!("how to {topic}"),
            format!("{topic} tutorial"),
            format!("{topic} for beginners"),
        ],
        top_urls: vec![
            format!("https://example.com/{dash}-guide"),
            format!("https://example.org/learn-{dash}"),
            format!("https://tutorial.com/{under}_101"),
        ],
        metrics: Some(KeywordMetrics {
            search_volume: 1200,
            cpc: 0.75,
            competition: 0.65,
        }),
        source: "serpapi".to_string(),
        generated_at: None,
    }
}

fn keywordsurfer_source(topic: &str) -> KeywordReport {
    debug!("Consulting KeywordSurfer catalog for '{}'", topic);
    let dash = slugify(topic, '-');
    let under = slugify(topic, '_');

    KeywordReport {
        primary_keyword: topic.to_string(),
        related_queries: vec![
            format!("{topic} guide"),
            format!("best {topic} practices"),
            format!("{topic} tips and tricks"),
            format!("{topic} for professionals"),
            format!("advanced {topic}"),
        ],
        top_urls: vec![
            format!("https://guide.com/complete-{dash}-guide"),
            format!("https://blog.example.com/mastering-{dash}"),
            format!("https://academy.example.org/{under}_masterclass"),
        ],
        metrics: Some(KeywordMetrics {
            search_volume: 980,
            cpc: 0.82,
            competition: 0.58,
        }),
        source: "keywordsurfer".to_string(),
        generated_at: None,
    }
}

fn google_trends_source(topic: &str) -> KeywordReport {
    debug!("Consulting Google Trends catalog for '{}'", topic);
    let year = Utc::now().year();
    let dash = slugify(topic, '-');
    let encoded = topic.replace(' ', "%20");

    KeywordReport {
        primary_keyword: topic.to_string(),
        related_queries: vec![
            format!("{topic} {year}"),
            format!("latest {topic} trends"),
            format!("{topic} innovations"),
            format!("future of {topic}"),
            format!("{topic} industry insights"),
        ],
        top_urls: vec![
            format!("https://trends.google.com/trends/explore?q={encoded}"),
            format!("https://news.example.com/{dash}-trends-{year}"),
            format!("https://research.example.org/future-of-{dash}"),
        ],
        metrics: Some(KeywordMetrics {
            search_volume: 850,
            cpc: 0.65,
            competition: 0.72,
        }),
        source: "google_trends".to_string(),
        generated_at: None,
    }
}

/// Pattern-based generation used when every source is rejected
fn fallback_source(topic: &str) -> KeywordReport {
    info!("Using fallback method for keyword discovery");
    let year = Utc::now().year();

    KeywordReport {
        primary_keyword: topic.to_string(),
        related_queries: vec![
            format!("{topic} guide"),
            format!("how to {topic}"),
            format!("best {topic} practices"),
            format!("{topic} examples"),
            format!("{topic} tutorial"),
            format!("{topic} for beginners"),
            format!("advanced {topic}"),
            format!("{topic} tips"),
            format!("{topic} {year}"),
            format!("{topic} tools"),
        ],
        top_urls: Vec::new(),
        metrics: None,
        source: "fallback".to_string(),
        generated_at: Some(Utc::now()),
    }
}
