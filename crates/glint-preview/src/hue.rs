// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hue cycle used as the highlight color.

use glint_app_core::PreviewSettings;
use glint_port::Rgb;

/// Distinct hues in one default cycle.
pub const DEFAULT_HUE_STEPS: u32 = 64;

/// A full-saturation, full-value hue cycle indexed by frame number.
///
/// With the defaults the hue advances one step per frame and repeats every
/// 64 frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HueCycle {
    steps: u32,
    frame_length: u32,
}

impl Default for HueCycle {
    fn default() -> Self {
        Self {
            steps: DEFAULT_HUE_STEPS,
            frame_length: 1,
        }
    }
}

impl From<&PreviewSettings> for HueCycle {
    fn from(settings: &PreviewSettings) -> Self {
        Self::new(settings.hue_steps, settings.frame_length)
    }
}

impl HueCycle {
    /// Cycle with `steps` hues, each held for `frame_length` frames.
    ///
    /// Zero values are clamped to one.
    pub fn new(steps: u32, frame_length: u32) -> Self {
        Self {
            steps: steps.max(1),
            frame_length: frame_length.max(1),
        }
    }

    /// Number of hues in the cycle.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Frames each hue is held for.
    pub fn frame_length(&self) -> u32 {
        self.frame_length
    }

    /// Frames until the cycle repeats.
    pub fn period(&self) -> u64 {
        u64::from(self.steps) * u64::from(self.frame_length)
    }

    /// Hue in `[0, 1)` for `frame`.
    pub fn hue_at(&self, frame: u64) -> f32 {
        let index = (frame % self.period()) / u64::from(self.frame_length);
        index as f32 / self.steps as f32
    }

    /// Highlight color for `frame`.
    pub fn color_at(&self, frame: u64) -> Rgb {
        hsv_to_rgb(self.hue_at(frame), 1.0, 1.0)
    }
}

/// Highlight color for `frame` using the default 64-step cycle.
pub fn hue_cycle(frame: u64) -> Rgb {
    HueCycle::default().color_at(frame)
}

/// Convert HSV (all components in `[0, 1]`) to RGB.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    if s <= 0.0 {
        return [v, v, v];
    }

    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let rgb = match sector as u32 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };
    rgb.map(|c| c.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-6)
    }

    #[test]
    fn primaries_land_on_sector_boundaries() {
        assert!(close(hue_cycle(0), [1.0, 0.0, 0.0]));
        // 64 / 3 is not integral; check the exact sixths instead.
        assert!(close(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), [0.0, 1.0, 0.0]));
        assert!(close(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), [0.0, 0.0, 1.0]));
        assert!(close(hue_cycle(32), [0.0, 1.0, 1.0]));
    }

    #[test]
    fn cycle_repeats_every_period() {
        let cycle = HueCycle::default();
        assert_eq!(cycle.period(), 64);
        for frame in [0_u64, 1, 17, 63, 64, 1_000_003] {
            assert_eq!(cycle.color_at(frame), cycle.color_at(frame + 64));
        }
    }

    #[test]
    fn frame_length_holds_each_hue() {
        let cycle = HueCycle::new(4, 3);
        assert_eq!(cycle.period(), 12);
        assert!((cycle.hue_at(0) - 0.0).abs() < f32::EPSILON);
        assert!((cycle.hue_at(2) - 0.0).abs() < f32::EPSILON);
        assert!((cycle.hue_at(3) - 0.25).abs() < f32::EPSILON);
        assert!((cycle.hue_at(11) - 0.75).abs() < f32::EPSILON);
        assert!((cycle.hue_at(12) - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_parameters_are_clamped() {
        let cycle = HueCycle::new(0, 0);
        assert_eq!(cycle.steps(), 1);
        assert_eq!(cycle.frame_length(), 1);
        assert!(close(cycle.color_at(99), [1.0, 0.0, 0.0]));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(0.4, 0.0, 0.5), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn settings_build_matching_cycle() {
        let settings = PreviewSettings {
            hue_steps: 8,
            frame_length: 2,
            emissive_divisor: 8.0,
        };
        let cycle = HueCycle::from(&settings);
        assert_eq!(cycle, HueCycle::new(8, 2));
    }
}
