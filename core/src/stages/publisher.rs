//! Publishing stage
//!
//! Shapes a checked draft into a Jekyll post: slug, `_posts/` filename,
//! front matter, and the canonical URL derived from the GitHub Pages host
//! and the permalink pattern. Nothing is written to disk or pushed
//! anywhere; deployment belongs to the site repository's own tooling.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::schema::{GithubPagesSection, JekyllSection, PublisherSection};
use crate::stages::content_creation::Draft;
use crate::stages::visual_generator::ImagePlan;

/// A post ready for the site repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedPost {
    pub slug: String,
    /// Path relative to the site root, e.g. `_posts/2026-08-28-slug.md`
    pub path: String,
    /// Canonical URL the post will live at
    pub url: String,
    /// YAML front matter block, delimiters included
    pub front_matter: String,
    /// Markdown body following the front matter
    pub body: String,
    /// True when `auto_publish` is off and the post stays unpublished
    pub is_draft: bool,
}

/// Publishing stage
pub struct Publisher {
    jekyll: JekyllSection,
    pages: GithubPagesSection,
    config: PublisherSection,
}

impl Publisher {
    pub fn new(
        jekyll: JekyllSection,
        pages: GithubPagesSection,
        config: PublisherSection,
    ) -> Self {
        Self {
            jekyll,
            pages,
            config,
        }
    }

    /// Assemble the post for the current date
    pub fn publish(&self, draft: &Draft, images: &[ImagePlan]) -> PublishedPost {
        self.publish_at(draft, images, Utc::now())
    }

    /// Assemble the post for a given date (the date is part of the filename
    /// and of date-based permalinks)
    pub fn publish_at(
        &self,
        draft: &Draft,
        images: &[ImagePlan],
        date: DateTime<Utc>,
    ) -> PublishedPost {
        let slug = slugify(&draft.title);
        let path = format!("_posts/{}-{}.md", date.format("%Y-%m-%d"), slug);
        let url = format!("{}{}", self.base_url(), self.permalink(&slug, date));
        let is_draft = !self.config.auto_publish;

        let mut front_matter = String::from("---\n");
        front_matter.push_str("layout: post\n");
        front_matter.push_str(&format!("title: \"{}\"\n", draft.title));
        front_matter.push_str(&format!("category: {}\n", self.config.default_category));
        if !self.config.default_tags.is_empty() {
            front_matter.push_str(&format!(
                "tags: [{}]\n",
                self.config.default_tags.join(", ")
            ));
        }
        if !images.is_empty() {
            front_matter.push_str(&format!("image_count: {}\n", images.len()));
        }
        if is_draft {
            front_matter.push_str("published: false\n");
        }
        front_matter.push_str("---\n");

        info!(
            "Prepared {} post '{}' at {}",
            if is_draft { "draft" } else { "published" },
            draft.title,
            url
        );

        PublishedPost {
            slug,
            path,
            url,
            front_matter,
            body: draft.body.clone(),
            is_draft,
        }
    }

    /// Site host: the custom domain when set, otherwise `owner.github.io`
    fn base_url(&self) -> String {
        if !self.pages.cname.is_empty() {
            return format!("https://{}", self.pages.cname);
        }

        let owner = self
            .pages
            .repository
            .split('/')
            .next()
            .unwrap_or_default();
        format!("https://{}.github.io", owner)
    }

    /// Substitute the Jekyll permalink variables
    fn permalink(&self, slug: &str, date: DateTime<Utc>) -> String {
        let pattern = if self.jekyll.permalink.is_empty() {
            "/:categories/:title/"
        } else {
            &self.jekyll.permalink
        };

        pattern
            .replace(":categories", &self.config.default_category)
            .replace(":year", &format!("{:04}", date.year()))
            .replace(":month", &format!("{:02}", date.month()))
            .replace(":day", &format!("{:02}", date.day()))
            .replace(":title", slug)
    }
}

/// Lowercase the title into a URL slug
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_dash = true;
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}
