// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Glint tools (config store, preview settings).
//! Keeps host adapters thin and framework-agnostic.

pub mod config;
pub mod settings;

pub use config::{ConfigError, ConfigService, ConfigStore};
pub use settings::{PreviewSettings, PREVIEW_SETTINGS_KEY};
