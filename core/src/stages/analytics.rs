//! Analytics stage
//!
//! Records what tracking the published page should get. The plan only
//! names the platform and flags; embedding the actual tag belongs to the
//! site template.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::schema::{AnalyticsPlatform, AnalyticsSection};

/// Tracking configuration for one published page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingPlan {
    pub platform: AnalyticsPlatform,
    pub page_url: String,
    pub track_events: bool,
    pub weekly_report: bool,
}

/// Analytics stage
pub struct Analytics {
    config: AnalyticsSection,
}

impl Analytics {
    pub fn new(config: AnalyticsSection) -> Self {
        Self { config }
    }

    /// Build the tracking plan for a page
    pub fn setup_tracking(&self, page_url: &str) -> TrackingPlan {
        info!(
            "Configured {} tracking for {}",
            self.config.platform.as_str(),
            page_url
        );

        TrackingPlan {
            platform: self.config.platform,
            page_url: page_url.to_string(),
            track_events: self.config.track_events,
            weekly_report: self.config.weekly_report,
        }
    }
}
