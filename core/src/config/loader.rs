//! Configuration loading
//!
//! Loading is two-phase so the error kinds stay distinct: the text is first
//! parsed into a raw YAML value (syntax problems surface as
//! [`ConfigError::Parse`]), then each known section is typed and checked
//! (schema problems surface as [`ConfigError::Validation`]). A missing file
//! is [`ConfigError::NotFound`].

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::path::Path;
use tokio::fs;

use crate::config::schema::BlogConfig;
use crate::error::{ConfigError, Result};

impl BlogConfig {
    /// Load and validate a configuration file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(path).await?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a configuration document from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        Self::from_document(document)
    }

    /// Type and validate an already-parsed document
    pub fn from_document(document: Value) -> Result<Self> {
        // A scalar or sequence at the top level is not a config document
        if !document.is_mapping() && !document.is_null() {
            return Err(ConfigError::Validation {
                field: "<root>".to_string(),
                message: "expected a mapping of configuration sections".to_string(),
            }
            .into());
        }

        let config = Self {
            blog: section(&document, "blog")?,
            jekyll: section(&document, "jekyll")?,
            github_pages: section(&document, "github_pages")?,
            api_keys: section(&document, "api_keys")?,
            keyword_discovery: section(&document, "keyword_discovery")?,
            content_creation: section(&document, "content_creation")?,
            grammar_check: section(&document, "grammar_check")?,
            visual_generator: section(&document, "visual_generator")?,
            publisher: section(&document, "publisher")?,
            monetization: section(&document, "monetization")?,
            social_promotion: section(&document, "social_promotion")?,
            email_drafter: section(&document, "email_drafter")?,
            analytics: section(&document, "analytics")?,
            document,
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize the typed configuration back to YAML
    ///
    /// Reloading the output yields a configuration equal in all sections.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ConfigError::Parse {
                message: e.to_string(),
            }
            .into()
        })
    }
}

/// Deserialize one named section, falling back to its defaults when absent
fn section<T>(document: &Value, name: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match document.get(name) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => {
            serde_yaml::from_value(value.clone()).map_err(|e| {
                ConfigError::Validation {
                    field: name.to_string(),
                    message: e.to_string(),
                }
                .into()
            })
        }
    }
}
