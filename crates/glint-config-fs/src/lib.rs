// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `ConfigStore` for Glint tools (uses platform config dir).

use directories::ProjectDirs;
use glint_app_core::config::{ConfigError, ConfigStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Store configs as JSON files under a base directory.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Create a store rooted at the user config directory (e.g., `~/.config/glint`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "Glint")
            .ok_or_else(|| ConfigError::Other("could not resolve config dir".into()))?;
        Self::with_base(proj.config_dir())
    }

    /// Create a store rooted at `base`, creating the directory if needed.
    pub fn with_base(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base = base.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Directory the store writes into.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, ConfigError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(ConfigError::Other(format!("invalid config key {key:?}")));
        }
        Ok(self.base.join(format!("{key}.json")))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let path = self.path_for(key)?;
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_app_core::{ConfigService, PreviewSettings, PREVIEW_SETTINGS_KEY};

    #[test]
    fn missing_key_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::with_base(dir.path()).unwrap();
        assert!(matches!(store.load_raw("preview"), Err(ConfigError::NotFound)));
    }

    #[test]
    fn saved_blob_lands_in_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::with_base(dir.path().join("nested")).unwrap();
        store.save_raw("preview", b"{}").unwrap();
        assert!(dir.path().join("nested").join("preview.json").is_file());
        assert_eq!(store.load_raw("preview").unwrap(), b"{}");
    }

    #[test]
    fn path_like_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::with_base(dir.path()).unwrap();
        assert!(matches!(
            store.save_raw("../escape", b"x"),
            Err(ConfigError::Other(_))
        ));
        assert!(matches!(store.load_raw(""), Err(ConfigError::Other(_))));
    }

    #[test]
    fn settings_persist_through_service() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(FsConfigStore::with_base(dir.path()).unwrap());
        let settings = PreviewSettings {
            hue_steps: 32,
            frame_length: 2,
            emissive_divisor: 4.0,
        };
        service.save(PREVIEW_SETTINGS_KEY, &settings).unwrap();
        let loaded: PreviewSettings = service.load_or_default(PREVIEW_SETTINGS_KEY);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::with_base(dir.path()).unwrap();
        store.save_raw(PREVIEW_SETTINGS_KEY, b"not json").unwrap();
        let service = ConfigService::new(store);
        assert!(service.load::<PreviewSettings>(PREVIEW_SETTINGS_KEY).is_err());
        let loaded: PreviewSettings = service.load_or_default(PREVIEW_SETTINGS_KEY);
        assert_eq!(loaded, PreviewSettings::default());
    }
}
