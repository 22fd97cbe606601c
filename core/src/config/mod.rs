//! Configuration schema, loading, and lookup
//!
//! The schema lives in [`schema`]; loading and serialization in [`loader`];
//! dotted-path access in [`lookup`].

pub mod loader;
pub mod lookup;
pub mod schema;

pub use lookup::lookup;
pub use schema::{
    AdPlacement, AnalyticsPlatform, AnalyticsSection, ApiKeysSection, BlogConfig, BlogSection,
    ContentCreationSection, EmailDrafterSection, EmailPlatform, GithubPagesSection,
    GrammarCheckSection, ImageSource, JekyllSection, KeywordDiscoverySection, MonetizationSection,
    PublisherSection, SocialPromotionSection, VisualGeneratorSection,
};
