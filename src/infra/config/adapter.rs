use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

/// Loads `AppConfig` from a TOML file, falling back to defaults when it is absent.
#[derive(Debug, Clone, Default)]
pub struct FileConfigAdapter {
    path: Option<PathBuf>,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        load(self.path.as_deref()).context("config could not be loaded")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let adapter = FileConfigAdapter::new(Some(Path::new("./no-such-cipherteams.toml")));

        let config = adapter.load().expect("defaults should load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn parse_failure_keeps_context() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging\nlevel=").expect("fixture should be writable");

        let err = FileConfigAdapter::new(Some(&path))
            .load()
            .expect_err("broken toml must fail");

        assert!(err.to_string().contains("config could not be loaded"));
    }
}
