use std::io::{self, IsTerminal, Write};

use serde::Serialize;

use crate::api::{ProfileApi, ProfileClient};
use crate::auth::KeySource;
use crate::cli::AuthCommand;
use crate::config;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
struct AuthStatus {
    environment: String,
    base_url: String,
    configured: bool,
    source: Option<KeySource>,
    key: Option<String>,
}

pub async fn run(ctx: &AppContext, command: AuthCommand) -> AppResult<()> {
    match command {
        AuthCommand::Login => login(ctx).await,
        AuthCommand::Status => {
            let status = AuthStatus {
                environment: ctx.environment.clone(),
                base_url: ctx.base_url().to_string(),
                configured: ctx.api_key().is_some(),
                source: ctx.api_key().map(|key| key.source()),
                key: ctx.api_key().map(|key| key.masked()),
            };

            let text = match (&status.key, status.source) {
                (Some(key), Some(KeySource::Environment)) => format!(
                    "{}: api key {key} from environment ({})",
                    status.environment, status.base_url
                ),
                (Some(key), _) => format!(
                    "{}: api key {key} from {} ({})",
                    status.environment,
                    ctx.paths.settings_file(&ctx.environment).display(),
                    status.base_url
                ),
                (None, _) => format!("{}: no api key configured", status.environment),
            };
            ctx.output.emit(&text, &status)
        }
        AuthCommand::Logout => {
            let mut settings = ctx.settings.clone();
            settings.api_key = None;
            config::save_settings(&ctx.paths, &ctx.environment, &settings)?;

            let text = format!("{}: stored api key removed", ctx.environment);
            ctx.output.emit(&text, &serde_json::json!({
                "environment": ctx.environment,
                "removed": true,
            }))
        }
    }
}

async fn login(ctx: &AppContext) -> AppResult<()> {
    let settings_path = ctx.paths.settings_file(&ctx.environment);
    if !io::stdin().is_terminal() {
        return Err(AppError::Config(format!(
            "cannot prompt for an api key without a terminal. set FACE_RECOGNITION_API_KEY or add api_key to {}",
            settings_path.display()
        )));
    }

    let api_key = prompt_required("API key: ")?;

    // Reject keys the service refuses before persisting them.
    let client = ProfileClient::new(ctx.base_url(), &api_key, ctx.settings.timeout())?;
    let profiles = client.list_profiles().await?;

    let mut settings = ctx.settings.clone();
    settings.api_key = Some(api_key);
    if settings.base_url.is_none() {
        settings.base_url = Some(ctx.base_url().to_string());
    }
    config::save_settings(&ctx.paths, &ctx.environment, &settings)?;

    let text = format!(
        "{}: api key saved to {} ({} profiles visible)",
        ctx.environment,
        settings_path.display(),
        profiles.len()
    );
    ctx.output.emit(&text, &serde_json::json!({
        "environment": ctx.environment,
        "settings_file": settings_path.display().to_string(),
        "profiles": profiles.len(),
    }))
}

fn prompt_required(prompt: &str) -> AppResult<String> {
    loop {
        let value = prompt_line(prompt)?;
        if !value.is_empty() {
            return Ok(value);
        }
        eprintln!("value is required");
    }
}

fn prompt_line(prompt: &str) -> AppResult<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut value = String::new();
    if io::stdin().read_line(&mut value)? == 0 {
        return Err(AppError::InvalidInput("no input provided".to_string()));
    }
    Ok(value.trim().to_string())
}
