//! Content creation stage
//!
//! Turns a keyword report into a markdown draft: a section per related
//! query, with optional table of contents and FAQ blocks. The draft records
//! the configured tone so downstream stages (and any human editor) see what
//! register the text targets.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::schema::ContentCreationSection;
use crate::stages::keyword_discovery::KeywordReport;

/// A markdown draft produced from a keyword report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    /// Markdown body, without front matter
    pub body: String,
    /// Writing tone the draft targets
    pub tone: String,
    pub word_count: usize,
}

/// Content creation stage
pub struct ContentCreation {
    config: ContentCreationSection,
}

impl ContentCreation {
    pub fn new(config: ContentCreationSection) -> Self {
        Self { config }
    }

    /// Build a draft from the discovered keywords
    pub fn create(&self, keywords: &KeywordReport) -> Draft {
        let title = title_case(&keywords.primary_keyword);
        let mut body = String::new();

        if self.config.include_toc {
            body.push_str("## Contents\n\n");
            for query in &keywords.related_queries {
                let heading = title_case(query);
                body.push_str(&format!("- [{}](#{})\n", heading, anchor(&heading)));
            }
            if self.config.include_faq {
                body.push_str("- [FAQ](#faq)\n");
            }
            body.push('\n');
        }

        body.push_str(&format!(
            "{} is easier to get right with a plan. This post walks through \
             the angles readers search for most, in a {} tone.\n\n",
            title, self.config.tone
        ));

        for query in &keywords.related_queries {
            let heading = title_case(query);
            body.push_str(&format!("## {}\n\n", heading));
            body.push_str(&format!(
                "Notes on {} go here, expanded from the outline before \
                 publishing.\n\n",
                query
            ));
        }

        if self.config.include_faq {
            body.push_str("## FAQ\n\n");
            body.push_str(&format!(
                "### What is {}?\n\nA short definition goes here.\n\n",
                keywords.primary_keyword
            ));
            body.push_str(&format!(
                "### How do I get started with {}?\n\nA pointer to the first \
                 section goes here.\n\n",
                keywords.primary_keyword
            ));
        }

        let word_count = body.split_whitespace().count();
        if (word_count as u32) < self.config.min_word_count {
            warn!(
                "Draft is {} words, below the configured minimum of {}",
                word_count, self.config.min_word_count
            );
        } else if (word_count as u32) > self.config.max_word_count {
            warn!(
                "Draft is {} words, above the configured maximum of {}",
                word_count, self.config.max_word_count
            );
        }

        info!("Drafted '{}' ({} words)", title, word_count);

        Draft {
            title,
            body,
            tone: self.config.tone.clone(),
            word_count,
        }
    }
}

/// Uppercase the first letter of every word
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// GitHub-style anchor for a heading
fn anchor(heading: &str) -> String {
    heading
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c == ' ' {
                Some('-')
            } else {
                None
            }
        })
        .collect()
}
