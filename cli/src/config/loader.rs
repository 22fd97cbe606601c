//! CLI configuration discovery
//!
//! Single-source priority loading:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./config.yaml or ./.blogsmith/config.yaml
//! 3. Git repository root: <repo_root>/.blogsmith/config.yaml
//! 4. XDG config: ~/.config/blogsmith/config.yaml
//!
//! The first document found wins; there is no merging.

use anyhow::{anyhow, Context, Result};
use blogsmith_core::BlogConfig;
use std::path::{Path, PathBuf};

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Find and load the configuration
    pub async fn load(&self) -> Result<BlogConfig> {
        if let Some(override_path) = &self.config_override {
            return self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            });
        }

        if let Some(path) = self.search()? {
            return BlogConfig::load(&path)
                .await
                .with_context(|| format!("Failed to load config: {}", path.display()));
        }

        Err(anyhow!(
            "No configuration found. Create a config.yaml in the current \
             directory, in .blogsmith/, or in ~/.config/blogsmith/"
        ))
    }

    /// Load from an explicit path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<BlogConfig> {
        if path.is_dir() {
            let config_file = path.join("config.yaml");
            if !config_file.exists() {
                return Err(anyhow!(
                    "No config.yaml found in directory: {}",
                    path.display()
                ));
            }
            return Ok(BlogConfig::load(&config_file).await?);
        }

        Ok(BlogConfig::load(path).await?)
    }

    /// Search for a config file in priority order
    fn search(&self) -> Result<Option<PathBuf>> {
        let cwd = std::env::current_dir()?;

        let candidates = [
            cwd.join("config.yaml"),
            cwd.join(".blogsmith").join("config.yaml"),
        ];
        for candidate in candidates {
            if candidate.exists() {
                return Ok(Some(candidate));
            }
        }

        if let Some(git_root) = find_git_root(&cwd) {
            let candidate = git_root.join(".blogsmith").join("config.yaml");
            if candidate.exists() {
                return Ok(Some(candidate));
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let candidate = config_dir.join("blogsmith").join("config.yaml");
            if candidate.exists() {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk up from a directory to the nearest git repository root
fn find_git_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}
