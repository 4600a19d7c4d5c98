use std::time::Duration;

use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};

/// Fraction of an element's area that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Vertical scroll offset (px) past which the navigation bar switches style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
/// Maximum parallax translation (px) for a layer with speed 1.0 at the region edge.
pub const PARALLAX_SCALE: f64 = 20.0;

/// Tunables for the page's effects and the contact flow.
///
/// Every field has a default, so the `settings` block of the content file may
/// override any subset of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav_scroll_threshold: f64,
    pub parallax_scale: f64,
    pub submit_delay_ms: u64,
    pub notice_duration_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_scroll_threshold: NAV_SCROLL_THRESHOLD,
            parallax_scale: PARALLAX_SCALE,
            submit_delay_ms: 1500,
            notice_duration_ms: 5000,
        }
    }
}

impl SiteConfig {
    /// How long the contact server function "processes" a message.
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// How long the success notice stays visible after a submission.
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

/// Year the site was built, stamped by the build script.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}
