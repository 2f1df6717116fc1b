use std::fs;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "facesync";

#[derive(Debug, Clone)]
pub struct AppPaths {
    environments_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;

        Self::at(config_root.join(APP_DIR))
    }

    pub fn at(config_dir: PathBuf) -> AppResult<Self> {
        let environments_dir = config_dir.join("environments");
        fs::create_dir_all(&environments_dir)?;

        Ok(Self { environments_dir })
    }

    pub fn settings_file(&self, environment: &str) -> PathBuf {
        self.environments_dir.join(format!("{environment}.json"))
    }
}
