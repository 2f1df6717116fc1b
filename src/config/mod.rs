pub mod environment;
pub mod paths;
pub mod settings;

pub use environment::resolve_environment;
pub use paths::AppPaths;
pub use settings::Settings;

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths, environment: &str) -> AppResult<Settings> {
    settings::load(paths.settings_file(environment))
}

pub fn save_settings(paths: &AppPaths, environment: &str, settings: &Settings) -> AppResult<()> {
    settings::save(paths.settings_file(environment), settings)
}
