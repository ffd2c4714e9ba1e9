// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tunables for the live color-table previewer.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Config key under which [`PreviewSettings`] are stored.
pub const PREVIEW_SETTINGS_KEY: &str = "preview";

/// Saved settings for the live previewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Number of distinct hues in one animation cycle.
    pub hue_steps: u32,
    /// Frames each hue is held for.
    pub frame_length: u32,
    /// Emissive color is the highlight color divided by this.
    pub emissive_divisor: f32,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            hue_steps: 64,
            frame_length: 1,
            emissive_divisor: 8.0,
        }
    }
}

impl PreviewSettings {
    /// Replace values that would break the animation with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.hue_steps == 0 {
            warn!("hue_steps must be positive, using {}", defaults.hue_steps);
            self.hue_steps = defaults.hue_steps;
        }
        if self.frame_length == 0 {
            warn!(
                "frame_length must be positive, using {}",
                defaults.frame_length
            );
            self.frame_length = defaults.frame_length;
        }
        if !self.emissive_divisor.is_finite() || self.emissive_divisor <= 0.0 {
            warn!(
                divisor = self.emissive_divisor,
                "emissive_divisor must be finite and positive, using {}", defaults.emissive_divisor
            );
            self.emissive_divisor = defaults.emissive_divisor;
        }
        self
    }
}
