//! Pipeline stages
//!
//! Each stage is constructed from its own configuration section and exposes
//! one operation; the pipeline module wires them together in order.

pub mod analytics;
pub mod content_creation;
pub mod email_drafter;
pub mod grammar_check;
pub mod keyword_discovery;
pub mod monetization;
pub mod publisher;
pub mod social_promotion;
pub mod visual_generator;

pub use analytics::{Analytics, TrackingPlan};
pub use content_creation::{ContentCreation, Draft};
pub use email_drafter::{EmailDraft, EmailDrafter};
pub use grammar_check::{GrammarCheck, GrammarReport};
pub use keyword_discovery::{KeywordDiscovery, KeywordMetrics, KeywordReport};
pub use monetization::Monetization;
pub use publisher::{PublishedPost, Publisher};
pub use social_promotion::{SocialPost, SocialPromotion};
pub use visual_generator::{ImagePlan, ImageRole, VisualGenerator};
