use crate::api::ProfileClient;
use crate::auth::{self, ApiKey};
use crate::config::{self, AppPaths, Settings};
use crate::error::{AppError, AppResult};
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub environment: String,
    pub verbose: u8,
    pub paths: AppPaths,
    pub settings: Settings,
    pub output: Output,
    base_url: String,
    api_key: Option<ApiKey>,
}

impl AppContext {
    pub fn bootstrap(
        environment: String,
        base_url: Option<String>,
        api_key: Option<String>,
        json: bool,
        verbose: u8,
    ) -> AppResult<Self> {
        let environment = config::resolve_environment(&environment);
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, &environment)?;
        let api_key = auth::resolve_api_key(api_key.as_deref(), &settings);
        let base_url = base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| settings.base_url());
        let output = Output::new(json);

        Ok(Self {
            environment,
            verbose,
            paths,
            settings,
            output,
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn client(&self) -> AppResult<ProfileClient> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            AppError::Config(
                "FACE_RECOGNITION_API_KEY is not set. add it to .env or run `facesync auth login`"
                    .to_string(),
            )
        })?;

        ProfileClient::new(&self.base_url, api_key.value(), self.settings.timeout())
    }
}
