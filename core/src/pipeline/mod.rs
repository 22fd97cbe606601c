//! Pipeline orchestration
//!
//! [`BlogPipeline`] owns one instance of every stage, built from the loaded
//! configuration, and runs them in a fixed order: keyword discovery,
//! content creation, grammar check, visual generation, publishing,
//! monetization, social promotion, email drafting, analytics. The
//! configuration is read-only for the whole run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::config::schema::BlogConfig;
use crate::error::Result;
use crate::stages::{
    Analytics, ContentCreation, EmailDraft, EmailDrafter, GrammarCheck, KeywordDiscovery,
    Monetization, Publisher, SocialPost, SocialPromotion, VisualGenerator,
};

/// Stage names in execution order
pub const STAGE_NAMES: [&str; 9] = [
    "keyword_discovery",
    "content_creation",
    "grammar_check",
    "visual_generator",
    "publisher",
    "monetization",
    "social_promotion",
    "email_drafter",
    "analytics",
];

/// Result of a pipeline run, in the JSON shape consumers script against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PipelineOutcome {
    Success {
        url: String,
        social_posts: Vec<SocialPost>,
        email_draft: EmailDraft,
    },
    Error {
        message: String,
    },
}

impl PipelineOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineOutcome::Success { .. })
    }
}

/// Metadata wrapper around one pipeline invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRun {
    /// Unique identifier for this run
    pub id: String,
    /// The topic the run was started with
    pub topic: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub outcome: PipelineOutcome,
}

/// The full blogging pipeline
pub struct BlogPipeline {
    keyword: KeywordDiscovery,
    content: ContentCreation,
    grammar: GrammarCheck,
    visual: VisualGenerator,
    publisher: Publisher,
    monetization: Monetization,
    social: SocialPromotion,
    email: EmailDrafter,
    analytics: Analytics,
}

impl BlogPipeline {
    /// Build every stage from its configuration section
    pub fn new(config: &BlogConfig) -> Self {
        Self {
            keyword: KeywordDiscovery::new(config.keyword_discovery.clone()),
            content: ContentCreation::new(config.content_creation.clone()),
            grammar: GrammarCheck::new(config.grammar_check.clone()),
            visual: VisualGenerator::new(config.visual_generator.clone()),
            publisher: Publisher::new(
                config.jekyll.clone(),
                config.github_pages.clone(),
                config.publisher.clone(),
            ),
            monetization: Monetization::new(config.monetization.clone()),
            social: SocialPromotion::new(config.social_promotion.clone()),
            email: EmailDrafter::new(config.email_drafter.clone()),
            analytics: Analytics::new(config.analytics.clone()),
        }
    }

    /// Run the full pipeline for a topic
    ///
    /// Stage failures are captured in the outcome rather than propagated;
    /// the run record always comes back.
    pub async fn run(&self, topic: &str) -> PipelineRun {
        info!("Starting pipeline for topic: {}", topic);
        let started_at = Utc::now();

        let outcome = match self.execute(topic).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Pipeline failed: {}", e);
                PipelineOutcome::Error {
                    message: e.to_string(),
                }
            }
        };

        PipelineRun {
            id: Uuid::new_v4().to_string(),
            topic: topic.to_string(),
            started_at,
            completed_at: Utc::now(),
            outcome,
        }
    }

    async fn execute(&self, topic: &str) -> Result<PipelineOutcome> {
        // 1. Keyword discovery
        let keywords = self.keyword.discover(topic).await?;
        info!(
            "Keywords discovered: {} related queries from '{}'",
            keywords.related_queries.len(),
            keywords.source
        );

        // 2. Content creation
        let draft = self.content.create(&keywords);
        info!("Content created successfully");

        // 3. Grammar and style check
        let (draft, grammar) = self.grammar.check(draft);
        info!(
            "Grammar and style check completed (readability {})",
            grammar.readability_score
        );

        // 4. Visual generation
        let images = self.visual.generate(&draft);
        info!("Planned {} images", images.len());

        // 5. Publishing
        let mut post = self.publisher.publish(&draft, &images);
        info!("Publishing to: {}", post.url);

        // 6. Monetization
        post.body = self.monetization.apply(&post);
        info!("Monetization applied");

        // 7. Social promotion
        let social_posts = self.social.promote(&post.url, &draft);
        info!("Created {} social media posts", social_posts.len());

        // 8. Email draft
        let email_draft = self.email.draft(&post.url, &draft)?;
        info!("Email newsletter draft created");

        // 9. Analytics setup
        let _tracking = self.analytics.setup_tracking(&post.url);
        info!("Analytics tracking configured");

        Ok(PipelineOutcome::Success {
            url: post.url,
            social_posts,
            email_draft,
        })
    }
}
