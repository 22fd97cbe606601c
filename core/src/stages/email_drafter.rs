//! Email drafting stage
//!
//! Renders a newsletter draft announcing the new post. The body comes from
//! a Handlebars template with `title`, `url` and `preview` fields; the
//! configured template wins, with a built-in one as the default.

use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::config::schema::{EmailDrafterSection, EmailPlatform};
use crate::error::{Result, StageError};
use crate::stages::content_creation::Draft;

const DEFAULT_TEMPLATE: &str = "\
Hi there,

{{title}} just went up on the blog.

{{#if preview}}{{preview}}

{{/if}}Read it here: {{url}}
";

/// A newsletter draft for the configured platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub platform: EmailPlatform,
    pub subject: String,
    pub body: String,
}

/// Email drafting stage
pub struct EmailDrafter {
    config: EmailDrafterSection,
}

impl EmailDrafter {
    pub fn new(config: EmailDrafterSection) -> Self {
        Self { config }
    }

    /// Render the newsletter draft for a published post
    pub fn draft(&self, url: &str, draft: &Draft) -> Result<EmailDraft> {
        let template = if self.config.template.is_empty() {
            DEFAULT_TEMPLATE
        } else {
            &self.config.template
        };

        let preview = if self.config.include_preview {
            preview_of(&draft.body)
        } else {
            String::new()
        };

        let handlebars = Handlebars::new();
        let body = handlebars
            .render_template(
                template,
                &json!({
                    "title": draft.title,
                    "url": url,
                    "preview": preview,
                }),
            )
            .map_err(StageError::Template)?;

        info!(
            "Drafted newsletter for {} ({} chars)",
            self.config.platform.as_str(),
            body.len()
        );

        Ok(EmailDraft {
            platform: self.config.platform,
            subject: format!("New post: {}", draft.title),
            body,
        })
    }
}

/// First prose paragraph of the body, for the preview field
fn preview_of(body: &str) -> String {
    body.split("\n\n")
        .map(str::trim)
        .find(|p| !p.is_empty() && !p.starts_with('#') && !p.starts_with('-'))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{EmailDrafterSection, EmailPlatform};

    fn draft() -> Draft {
        Draft {
            title: "Static Sites".to_string(),
            body: "## Contents\n\n- [A](#a)\n\nAn opening paragraph.\n\n## A\n\nMore.\n"
                .to_string(),
            tone: "informative".to_string(),
            word_count: 10,
        }
    }

    #[test]
    fn default_template_renders_title_and_url() {
        let stage = EmailDrafter::new(EmailDrafterSection::default());
        let email = stage.draft("https://example.com/p/", &draft()).unwrap();

        assert_eq!(email.subject, "New post: Static Sites");
        assert!(email.body.contains("Static Sites just went up"));
        assert!(email.body.contains("https://example.com/p/"));
        assert!(email.body.contains("An opening paragraph."));
    }

    #[test]
    fn configured_template_wins() {
        let stage = EmailDrafter::new(EmailDrafterSection {
            platform: EmailPlatform::Beehiiv,
            template: "{{title}} -> {{url}}".to_string(),
            include_preview: false,
        });
        let email = stage.draft("https://example.com/p/", &draft()).unwrap();

        assert_eq!(email.body, "Static Sites -> https://example.com/p/");
        assert_eq!(email.platform, EmailPlatform::Beehiiv);
    }

    #[test]
    fn preview_skips_headings_and_lists() {
        assert_eq!(
            preview_of("## H\n\n- item\n\nReal text here.\n"),
            "Real text here."
        );
    }

    #[test]
    fn include_preview_off_renders_without_preview() {
        let stage = EmailDrafter::new(EmailDrafterSection {
            include_preview: false,
            ..Default::default()
        });
        let email = stage.draft("https://example.com/p/", &draft()).unwrap();
        assert!(!email.body.contains("An opening paragraph."));
    }
}
