//! Visual generation stage
//!
//! Plans the images for a post: how many, in which role, what style, and
//! which kind of source should produce them. Fetching or generating actual
//! image bytes is the job of whatever consumes the plan.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::schema::{ImageSource, VisualGeneratorSection};
use crate::stages::content_creation::Draft;

/// Where an image sits in the post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageRole {
    Featured,
    Inline,
}

/// One planned image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePlan {
    pub role: ImageRole,
    /// Search/generation query for the image
    pub query: String,
    /// Visual style hint
    pub style: String,
    pub source: ImageSource,
}

/// Visual generation stage
pub struct VisualGenerator {
    config: VisualGeneratorSection,
}

impl VisualGenerator {
    pub fn new(config: VisualGeneratorSection) -> Self {
        Self { config }
    }

    /// Plan featured and inline images for a draft
    pub fn generate(&self, draft: &Draft) -> Vec<ImagePlan> {
        let mut plans = Vec::new();

        for _ in 0..self.config.featured_image_count {
            plans.push(ImagePlan {
                role: ImageRole::Featured,
                query: draft.title.clone(),
                style: self.config.image_style.clone(),
                source: self.config.preferred_source,
            });
        }

        for i in 0..self.config.inline_image_count {
            plans.push(ImagePlan {
                role: ImageRole::Inline,
                query: format!("{} detail {}", draft.title, i + 1),
                style: self.config.image_style.clone(),
                source: self.config.preferred_source,
            });
        }

        info!("Planned {} images for '{}'", plans.len(), draft.title);
        plans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ImageSource, VisualGeneratorSection};

    fn draft() -> Draft {
        Draft {
            title: "Static Sites".to_string(),
            body: String::new(),
            tone: "informative".to_string(),
            word_count: 0,
        }
    }

    #[test]
    fn plan_counts_follow_config() {
        let stage = VisualGenerator::new(VisualGeneratorSection {
            featured_image_count: 1,
            inline_image_count: 3,
            image_style: "line art".to_string(),
            preferred_source: ImageSource::Generation,
        });

        let plans = stage.generate(&draft());
        assert_eq!(plans.len(), 4);
        assert_eq!(
            plans.iter().filter(|p| p.role == ImageRole::Featured).count(),
            1
        );
        assert!(plans.iter().all(|p| p.source == ImageSource::Generation));
        assert!(plans.iter().all(|p| p.style == "line art"));
    }

    #[test]
    fn zero_counts_plan_nothing() {
        let stage = VisualGenerator::new(VisualGeneratorSection {
            featured_image_count: 0,
            inline_image_count: 0,
            ..Default::default()
        });
        assert!(stage.generate(&draft()).is_empty());
    }
}
