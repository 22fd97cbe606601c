//! Typed configuration schema for the blogging pipeline
//!
//! One section per pipeline stage plus the blog/site identity groups. Field
//! names and enum literals are the wire contract with `config.yaml`; any
//! script that consumes the same file relies on them verbatim.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Blog identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogSection {
    /// Blog title
    pub title: String,
    /// Short description used in feeds and meta tags
    pub description: String,
    /// Author name
    pub author: String,
    /// Content language code (e.g. "en")
    pub language: String,
    /// IANA timezone name
    pub timezone: String,
}

impl Default for BlogSection {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: String::new(),
            language: "en".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

/// Jekyll site settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JekyllSection {
    /// Theme name
    pub theme: String,
    /// Permalink pattern (`:year`, `:month`, `:day`, `:categories`, `:title`)
    pub permalink: String,
    /// Jekyll plugins, in load order
    pub plugins: Vec<String>,
}

impl Default for JekyllSection {
    fn default() -> Self {
        Self {
            theme: "minima".to_string(),
            permalink: "/:categories/:title/".to_string(),
            plugins: Vec::new(),
        }
    }
}

/// GitHub Pages hosting settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubPagesSection {
    /// Repository in `owner/name` form
    pub repository: String,
    /// Branch the site deploys from
    pub branch: String,
    /// Custom domain; empty when the default `owner.github.io` host is used
    pub cname: String,
}

/// Third-party API credentials
///
/// Every key may be an empty string. An unfilled key is not a load error;
/// whichever stage actually calls the corresponding service is responsible
/// for rejecting it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKeysSection {
    pub serp: String,
    pub unsplash: String,
    pub pexels: String,
    pub language_tool: String,
    pub amazon_affiliate: String,
}

/// Keyword discovery stage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordDiscoverySection {
    /// Directory for cached keyword reports
    pub cache_dir: String,
    /// Cap on related queries per report
    pub max_results: usize,
    /// Maximum acceptable keyword difficulty, 0-100
    pub difficulty_threshold: u32,
}

impl Default for KeywordDiscoverySection {
    fn default() -> Self {
        Self {
            cache_dir: "cache/keywords".to_string(),
            max_results: 10,
            difficulty_threshold: 70,
        }
    }
}

/// Content creation stage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentCreationSection {
    pub min_word_count: u32,
    pub max_word_count: u32,
    /// Writing tone, free-form (e.g. "informative", "conversational")
    pub tone: String,
    pub include_faq: bool,
    pub include_toc: bool,
}

impl Default for ContentCreationSection {
    fn default() -> Self {
        Self {
            min_word_count: 1200,
            max_word_count: 2500,
            tone: "informative".to_string(),
            include_faq: true,
            include_toc: true,
        }
    }
}

/// Grammar and style check stage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarCheckSection {
    /// Minimum acceptable readability score, 0-100
    pub min_readability_score: u32,
    pub check_plagiarism: bool,
    /// Style guide name, free-form
    pub style_guide: String,
}

impl Default for GrammarCheckSection {
    fn default() -> Self {
        Self {
            min_readability_score: 60,
            check_plagiarism: false,
            style_guide: "AP".to_string(),
        }
    }
}

/// Where featured/inline images come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    /// AI image generation
    #[serde(rename = "generation")]
    Generation,
    /// Stock photo services
    #[serde(rename = "stock")]
    Stock,
}

impl ImageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSource::Generation => "generation",
            ImageSource::Stock => "stock",
        }
    }
}

/// Visual generation stage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualGeneratorSection {
    pub featured_image_count: u32,
    pub inline_image_count: u32,
    /// Visual style hint passed to the image source, free-form
    pub image_style: String,
    pub preferred_source: ImageSource,
}

impl Default for VisualGeneratorSection {
    fn default() -> Self {
        Self {
            featured_image_count: 1,
            inline_image_count: 2,
            image_style: "photorealistic".to_string(),
            preferred_source: ImageSource::Stock,
        }
    }
}

/// Publishing stage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherSection {
    pub auto_publish: bool,
    pub schedule_posts: bool,
    pub default_category: String,
    pub default_tags: Vec<String>,
}

impl Default for PublisherSection {
    fn default() -> Self {
        Self {
            auto_publish: false,
            schedule_posts: false,
            default_category: "general".to_string(),
            default_tags: Vec::new(),
        }
    }
}

/// Where ad slots are placed in a monetized post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdPlacement {
    #[serde(rename = "sidebar")]
    Sidebar,
    #[serde(rename = "inline")]
    Inline,
    #[serde(rename = "both")]
    Both,
    #[serde(rename = "none")]
    None,
}

impl AdPlacement {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdPlacement::Sidebar => "sidebar",
            AdPlacement::Inline => "inline",
            AdPlacement::Both => "both",
            AdPlacement::None => "none",
        }
    }
}

/// Monetization stage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonetizationSection {
    pub insert_affiliate_links: bool,
    pub max_affiliate_links: u32,
    pub ad_placement: AdPlacement,
}

impl Default for MonetizationSection {
    fn default() -> Self {
        Self {
            insert_affiliate_links: false,
            max_affiliate_links: 3,
            ad_placement: AdPlacement::None,
        }
    }
}

/// Social promotion stage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialPromotionSection {
    /// Target platforms; duplicates carry no meaning
    pub platforms: Vec<String>,
    /// Hours between consecutive scheduled posts
    pub schedule_interval: u32,
    pub hashtags: Vec<String>,
}

impl Default for SocialPromotionSection {
    fn default() -> Self {
        Self {
            platforms: Vec::new(),
            schedule_interval: 4,
            hashtags: Vec::new(),
        }
    }
}

/// Supported newsletter platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailPlatform {
    #[serde(rename = "beehiiv")]
    Beehiiv,
    #[serde(rename = "convertkit")]
    Convertkit,
    #[serde(rename = "buttondown")]
    Buttondown,
}

impl EmailPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailPlatform::Beehiiv => "beehiiv",
            EmailPlatform::Convertkit => "convertkit",
            EmailPlatform::Buttondown => "buttondown",
        }
    }
}

/// Email drafting stage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailDrafterSection {
    pub platform: EmailPlatform,
    /// Handlebars template with `title`, `url` and `preview` fields; empty
    /// selects the built-in template
    pub template: String,
    pub include_preview: bool,
}

impl Default for EmailDrafterSection {
    fn default() -> Self {
        Self {
            platform: EmailPlatform::Buttondown,
            template: String::new(),
            include_preview: true,
        }
    }
}

/// Supported analytics platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalyticsPlatform {
    #[serde(rename = "ga4")]
    Ga4,
    #[serde(rename = "ezoic")]
    Ezoic,
}

impl AnalyticsPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsPlatform::Ga4 => "ga4",
            AnalyticsPlatform::Ezoic => "ezoic",
        }
    }
}

/// Analytics stage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSection {
    pub platform: AnalyticsPlatform,
    pub track_events: bool,
    pub weekly_report: bool,
}

impl Default for AnalyticsSection {
    fn default() -> Self {
        Self {
            platform: AnalyticsPlatform::Ga4,
            track_events: true,
            weekly_report: true,
        }
    }
}

/// Fully loaded pipeline configuration
///
/// Created once by the loader, held immutably for the duration of a pipeline
/// run. The raw document is retained alongside the typed sections so that
/// keys unknown to the schema stay addressable through [`BlogConfig::get`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlogConfig {
    pub blog: BlogSection,
    pub jekyll: JekyllSection,
    pub github_pages: GithubPagesSection,
    pub api_keys: ApiKeysSection,
    pub keyword_discovery: KeywordDiscoverySection,
    pub content_creation: ContentCreationSection,
    pub grammar_check: GrammarCheckSection,
    pub visual_generator: VisualGeneratorSection,
    pub publisher: PublisherSection,
    pub monetization: MonetizationSection,
    pub social_promotion: SocialPromotionSection,
    pub email_drafter: EmailDrafterSection,
    pub analytics: AnalyticsSection,

    /// The document as parsed, before typing
    #[serde(skip)]
    pub(crate) document: serde_yaml::Value,
}

impl BlogConfig {
    /// Validate cross-field constraints and numeric ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_creation.min_word_count > self.content_creation.max_word_count {
            return Err(ConfigError::Validation {
                field: "content_creation.min_word_count".to_string(),
                message: format!(
                    "min_word_count ({}) exceeds max_word_count ({})",
                    self.content_creation.min_word_count, self.content_creation.max_word_count
                ),
            });
        }

        if self.keyword_discovery.difficulty_threshold > 100 {
            return Err(ConfigError::Validation {
                field: "keyword_discovery.difficulty_threshold".to_string(),
                message: format!(
                    "must be in 0-100, got {}",
                    self.keyword_discovery.difficulty_threshold
                ),
            });
        }

        if self.grammar_check.min_readability_score > 100 {
            return Err(ConfigError::Validation {
                field: "grammar_check.min_readability_score".to_string(),
                message: format!(
                    "must be in 0-100, got {}",
                    self.grammar_check.min_readability_score
                ),
            });
        }

        Ok(())
    }
}
