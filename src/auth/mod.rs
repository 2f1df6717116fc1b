use serde::Serialize;

use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySource {
    /// `--api-key` or `FACE_RECOGNITION_API_KEY`.
    Environment,
    Settings,
}

#[derive(Clone)]
pub struct ApiKey {
    value: String,
    source: KeySource,
}

impl ApiKey {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> KeySource {
        self.source
    }

    /// Masked form for status output, e.g. `sk_l…3f9a`.
    pub fn masked(&self) -> String {
        let chars = self.value.chars().collect::<Vec<_>>();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }

        let head = chars[..4].iter().collect::<String>();
        let tail = chars[chars.len() - 4..].iter().collect::<String>();
        format!("{head}…{tail}")
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("value", &self.masked())
            .field("source", &self.source)
            .finish()
    }
}

pub fn resolve_api_key(explicit: Option<&str>, settings: &Settings) -> Option<ApiKey> {
    if let Some(value) = explicit.map(str::trim).filter(|value| !value.is_empty()) {
        return Some(ApiKey {
            value: value.to_string(),
            source: KeySource::Environment,
        });
    }

    settings.api_key().map(|value| ApiKey {
        value: value.to_string(),
        source: KeySource::Settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_key(key: &str) -> Settings {
        Settings {
            api_key: Some(key.to_string()),
            ..Settings::default()
        }
    }

    #[test]
    fn explicit_key_wins_over_settings() {
        let key = resolve_api_key(Some("from-env"), &settings_with_key("stored"))
            .expect("key resolves");
        assert_eq!(key.value(), "from-env");
        assert_eq!(key.source(), KeySource::Environment);
    }

    #[test]
    fn blank_explicit_key_falls_back_to_settings() {
        let key = resolve_api_key(Some("  "), &settings_with_key("stored")).expect("key resolves");
        assert_eq!(key.value(), "stored");
        assert_eq!(key.source(), KeySource::Settings);
    }

    #[test]
    fn no_key_anywhere() {
        assert!(resolve_api_key(None, &Settings::default()).is_none());
    }

    #[test]
    fn masks_long_and_short_keys() {
        let long = resolve_api_key(Some("sk_live_12343f9a"), &Settings::default()).expect("key");
        assert_eq!(long.masked(), "sk_l…3f9a");
        assert!(!format!("{long:?}").contains("live"));

        let short = resolve_api_key(Some("abc"), &Settings::default()).expect("key");
        assert_eq!(short.masked(), "***");
    }
}
