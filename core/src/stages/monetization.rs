//! Monetization stage
//!
//! Inserts affiliate link placeholders and ad slot markers into a published
//! post body. Placeholders are HTML comments so an unfilled slot never
//! renders; the affiliate program fills them in a later editing pass.

use tracing::info;

use crate::config::schema::{AdPlacement, MonetizationSection};
use crate::stages::publisher::PublishedPost;

/// Marker comment for an affiliate link slot
const AFFILIATE_SLOT: &str = "<!-- affiliate-link -->";
/// Marker comment for an inline ad slot
const INLINE_AD_SLOT: &str = "<!-- ad-slot: inline -->";
/// Marker comment for the sidebar ad slot
const SIDEBAR_AD_SLOT: &str = "<!-- ad-slot: sidebar -->";

/// Monetization stage
pub struct Monetization {
    config: MonetizationSection,
}

impl Monetization {
    pub fn new(config: MonetizationSection) -> Self {
        Self { config }
    }

    /// Return the post body with monetization markers applied
    pub fn apply(&self, post: &PublishedPost) -> String {
        let mut body = post.body.clone();
        let mut inserted = 0u32;

        if self.config.insert_affiliate_links {
            // One slot after each section heading, up to the cap
            let mut lines: Vec<String> = Vec::new();
            for line in body.lines() {
                lines.push(line.to_string());
                if line.starts_with("## ") && inserted < self.config.max_affiliate_links {
                    lines.push(String::new());
                    lines.push(AFFILIATE_SLOT.to_string());
                    inserted += 1;
                }
            }
            body = lines.join("\n");
        }

        match self.config.ad_placement {
            AdPlacement::None => {}
            AdPlacement::Sidebar => {
                body = format!("{SIDEBAR_AD_SLOT}\n{body}");
            }
            AdPlacement::Inline => {
                body.push('\n');
                body.push_str(INLINE_AD_SLOT);
            }
            AdPlacement::Both => {
                body = format!("{SIDEBAR_AD_SLOT}\n{body}\n{INLINE_AD_SLOT}");
            }
        }

        info!(
            "Applied monetization: {} affiliate slots, ad placement '{}'",
            inserted,
            self.config.ad_placement.as_str()
        );

        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{AdPlacement, MonetizationSection};

    fn post(body: &str) -> PublishedPost {
        PublishedPost {
            slug: "s".to_string(),
            path: "_posts/2026-08-28-s.md".to_string(),
            url: "https://example.com/s/".to_string(),
            front_matter: "---\n---\n".to_string(),
            body: body.to_string(),
            is_draft: false,
        }
    }

    #[test]
    fn placement_none_leaves_body_untouched() {
        let stage = Monetization::new(MonetizationSection {
            insert_affiliate_links: false,
            max_affiliate_links: 3,
            ad_placement: AdPlacement::None,
        });
        let body = "## A\n\ntext\n";
        assert_eq!(stage.apply(&post(body)), body);
    }

    #[test]
    fn affiliate_slots_stop_at_the_cap() {
        let stage = Monetization::new(MonetizationSection {
            insert_affiliate_links: true,
            max_affiliate_links: 2,
            ad_placement: AdPlacement::None,
        });
        let body = "## A\n## B\n## C\n";
        let out = stage.apply(&post(body));
        assert_eq!(out.matches(AFFILIATE_SLOT).count(), 2);
    }

    #[test]
    fn both_placement_brackets_the_body() {
        let stage = Monetization::new(MonetizationSection {
            insert_affiliate_links: false,
            max_affiliate_links: 0,
            ad_placement: AdPlacement::Both,
        });
        let out = stage.apply(&post("text"));
        assert!(out.starts_with(SIDEBAR_AD_SLOT));
        assert!(out.ends_with(INLINE_AD_SLOT));
    }
}
