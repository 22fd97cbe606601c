//! Grammar and style check stage
//!
//! Normalizes draft whitespace and scores readability on a 0-100 scale from
//! average sentence and word length. The score is a heuristic gate, not a
//! substitute for the external grammar service the `language_tool` API key
//! is reserved for.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::schema::GrammarCheckSection;
use crate::stages::content_creation::Draft;

/// Result of the grammar and style pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarReport {
    /// Readability in [0,100], higher is easier to read
    pub readability_score: u32,
    /// Whether the score meets the configured minimum
    pub passed: bool,
    /// Style guide the check was run against
    pub style_guide: String,
    /// Whether plagiarism checking was requested
    pub plagiarism_checked: bool,
}

/// Grammar and style check stage
pub struct GrammarCheck {
    config: GrammarCheckSection,
}

impl GrammarCheck {
    pub fn new(config: GrammarCheckSection) -> Self {
        Self { config }
    }

    /// Normalize the draft and score its readability
    pub fn check(&self, mut draft: Draft) -> (Draft, GrammarReport) {
        draft.body = normalize_whitespace(&draft.body);
        draft.word_count = draft.body.split_whitespace().count();

        let readability_score = readability(&draft.body);
        let passed = readability_score >= self.config.min_readability_score;

        if passed {
            info!(
                "Readability {} meets minimum {} ({} style)",
                readability_score, self.config.min_readability_score, self.config.style_guide
            );
        } else {
            warn!(
                "Readability {} is below minimum {}",
                readability_score, self.config.min_readability_score
            );
        }

        let report = GrammarReport {
            readability_score,
            passed,
            style_guide: self.config.style_guide.clone(),
            plagiarism_checked: self.config.check_plagiarism,
        };

        (draft, report)
    }
}

/// Collapse runs of spaces and strip trailing whitespace per line
fn normalize_whitespace(body: &str) -> String {
    body.lines()
        .map(|line| {
            let mut out = String::with_capacity(line.len());
            let mut last_was_space = false;
            for c in line.trim_end().chars() {
                if c == ' ' {
                    if !last_was_space {
                        out.push(c);
                    }
                    last_was_space = true;
                } else {
                    out.push(c);
                    last_was_space = false;
                }
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Readability heuristic in [0,100]
///
/// Penalizes long sentences and long words; tuned so plain prose lands in
/// the 60-90 band.
fn readability(body: &str) -> u32 {
    let words: Vec<&str> = body.split_whitespace().collect();
    if words.is_empty() {
        return 0;
    }

    let sentences = body
        .matches(|c| c == '.' || c == '!' || c == '?')
        .count()
        .max(1);
    let avg_sentence_len = words.len() as f64 / sentences as f64;
    let avg_word_len =
        words.iter().map(|w| w.len()).sum::<usize>() as f64 / words.len() as f64;

    let score = 120.0 - 1.5 * avg_sentence_len - 5.0 * avg_word_len;
    score.clamp(0.0, 100.0).round() as u32
}
