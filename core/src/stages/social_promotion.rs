//! Social promotion stage
//!
//! Drafts one post per configured platform, spaced `schedule_interval`
//! hours apart so a new article does not land everywhere at once.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::schema::SocialPromotionSection;
use crate::stages::content_creation::Draft;

/// A drafted social media post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    pub platform: String,
    pub message: String,
    pub hashtags: Vec<String>,
    pub scheduled_at: DateTime<Utc>,
}

/// Social promotion stage
pub struct SocialPromotion {
    config: SocialPromotionSection,
}

impl SocialPromotion {
    pub fn new(config: SocialPromotionSection) -> Self {
        Self { config }
    }

    /// Draft scheduled posts announcing the article
    pub fn promote(&self, url: &str, draft: &Draft) -> Vec<SocialPost> {
        self.promote_from(url, draft, Utc::now())
    }

    /// Draft posts with schedules starting at a given time
    pub fn promote_from(
        &self,
        url: &str,
        draft: &Draft,
        start: DateTime<Utc>,
    ) -> Vec<SocialPost> {
        let interval = Duration::hours(i64::from(self.config.schedule_interval));

        let posts: Vec<SocialPost> = self
            .config
            .platforms
            .iter()
            .enumerate()
            .map(|(i, platform)| SocialPost {
                platform: platform.clone(),
                message: format!("New post: {} {}", draft.title, url),
                hashtags: self.config.hashtags.clone(),
                scheduled_at: start + interval * i as i32,
            })
            .collect();

        info!("Drafted {} social media posts", posts.len());
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> Draft {
        Draft {
            title: "Static Sites".to_string(),
            body: String::new(),
            tone: "informative".to_string(),
            word_count: 0,
        }
    }

    #[test]
    fn one_post_per_platform_spaced_by_interval() {
        let stage = SocialPromotion::new(SocialPromotionSection {
            platforms: vec!["mastodon".to_string(), "bluesky".to_string()],
            schedule_interval: 4,
            hashtags: vec!["#rustlang".to_string()],
        });
        let start = Utc.with_ymd_and_hms(2026, 8, 28, 9, 0, 0).unwrap();

        let posts = stage.promote_from("https://example.com/p/", &draft(), start);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].scheduled_at, start);
        assert_eq!(posts[1].scheduled_at, start + Duration::hours(4));
        assert_eq!(posts[1].platform, "bluesky");
        assert!(posts[0].message.contains("https://example.com/p/"));
        assert_eq!(posts[0].hashtags, vec!["#rustlang"]);
    }

    #[test]
    fn no_platforms_means_no_posts() {
        let stage = SocialPromotion::new(SocialPromotionSection::default());
        assert!(stage.promote("https://example.com/", &draft()).is_empty());
    }
}
