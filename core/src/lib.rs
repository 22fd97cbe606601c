//! # blogsmith Core
//!
//! Core library for blogsmith - an autonomous blogging pipeline.
//!
//! This library provides the typed configuration schema and loader for the
//! pipeline's `config.yaml`, the individual pipeline stages (keyword
//! discovery through analytics), and the orchestrator that runs them in
//! order for a topic.

// Core modules
pub mod config;
pub mod error;
pub mod pipeline;
pub mod stages;

// Re-export commonly used types
pub use config::{AdPlacement, AnalyticsPlatform, BlogConfig, EmailPlatform, ImageSource};
pub use error::{ConfigError, Error, Result, StageError};
pub use pipeline::{BlogPipeline, PipelineOutcome, PipelineRun, STAGE_NAMES};

/// Current version of the blogsmith-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
///
/// Logs go to stderr so pipeline JSON output on stdout stays parseable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
