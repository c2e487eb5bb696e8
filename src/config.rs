//! Drawer gesture configuration
//!
//! Defaults are the tuned constants; `config.yaml` in the sidedrawer config
//! directory (see [`crate::paths`]) may override individual fields. Missing
//! fields keep their defaults.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Width of the activation strip along the leading edge (closed panel)
pub const DEFAULT_EDGE_ZONE: f64 = 24.0;
/// Horizontal travel before a pending gesture becomes a drag
pub const DEFAULT_DRAG_START: f64 = 10.0;
/// Vertical travel that abandons a pending gesture when it dominates
pub const DEFAULT_VERTICAL_CANCEL: f64 = 40.0;
/// Fraction of the width past which a release opens the panel
pub const DEFAULT_COMMIT_RATIO: f64 = 0.5;
/// Settle transition length; matches the host stylesheet transition
pub const DEFAULT_SETTLE_DURATION_MS: u64 = 220;

/// Gesture thresholds and settle timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerConfig {
    #[serde(default = "default_edge_zone")]
    pub edge_zone: f64,

    #[serde(default = "default_drag_start")]
    pub drag_start: f64,

    #[serde(default = "default_vertical_cancel")]
    pub vertical_cancel: f64,

    #[serde(default = "default_commit_ratio")]
    pub commit_ratio: f64,

    #[serde(default = "default_settle_duration_ms")]
    pub settle_duration_ms: u64,
}

fn default_edge_zone() -> f64 {
    DEFAULT_EDGE_ZONE
}

fn default_drag_start() -> f64 {
    DEFAULT_DRAG_START
}

fn default_vertical_cancel() -> f64 {
    DEFAULT_VERTICAL_CANCEL
}

fn default_commit_ratio() -> f64 {
    DEFAULT_COMMIT_RATIO
}

fn default_settle_duration_ms() -> u64 {
    DEFAULT_SETTLE_DURATION_MS
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            edge_zone: default_edge_zone(),
            drag_start: default_drag_start(),
            vertical_cancel: default_vertical_cancel(),
            commit_ratio: default_commit_ratio(),
            settle_duration_ms: default_settle_duration_ms(),
        }
    }
}

impl DrawerConfig {
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    /// Parse from YAML, normalizing out-of-range values
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("Invalid drawer config")?;
        Ok(config.normalized())
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize drawer config")
    }

    /// Replace nonsensical values with defaults
    ///
    /// Thresholds must be finite and non-negative, the commit ratio must lie
    /// in `[0, 1]`.
    pub fn normalized(mut self) -> Self {
        fn distance(value: f64, fallback: f64) -> f64 {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                fallback
            }
        }

        self.edge_zone = distance(self.edge_zone, DEFAULT_EDGE_ZONE);
        self.drag_start = distance(self.drag_start, DEFAULT_DRAG_START);
        self.vertical_cancel = distance(self.vertical_cancel, DEFAULT_VERTICAL_CANCEL);
        if !(0.0..=1.0).contains(&self.commit_ratio) {
            tracing::warn!(
                "commit_ratio {} out of range, using {}",
                self.commit_ratio,
                DEFAULT_COMMIT_RATIO
            );
            self.commit_ratio = DEFAULT_COMMIT_RATIO;
        }
        self
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {:#}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
