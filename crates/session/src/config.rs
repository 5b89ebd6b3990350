use std::time::Duration;

use oratory_imagegen::api::GeminiConfig;

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_ART_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected} (got '{value}')")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Session configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Image service settings. `None` when no API key is configured, in
    /// which case art generation is unavailable.
    pub gemini: Option<GeminiConfig>,
}

impl SessionConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                                     |
    /// |-----------------------------|---------------------------------------------|
    /// | `GEMINI_API_KEY`            | falls back to `API_KEY`, else disabled      |
    /// | `GEMINI_API_URL`            | `https://generativelanguage.googleapis.com` |
    /// | `GEMINI_IMAGE_MODEL`        | `gemini-2.5-flash-image`                    |
    /// | `ART_REQUEST_TIMEOUT_SECS`  | `60`                                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`SessionConfig::from_env`] but reading variables through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let timeout_secs = match lookup("ART_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: "ART_REQUEST_TIMEOUT_SECS",
                expected: "u64",
                value: raw.clone(),
            })?,
            None => DEFAULT_ART_REQUEST_TIMEOUT_SECS,
        };

        let gemini = api_key.map(|api_key| GeminiConfig {
            api_url: lookup("GEMINI_API_URL").unwrap_or_else(|| DEFAULT_GEMINI_API_URL.into()),
            api_key,
            model: lookup("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_IMAGE_MODEL.into()),
            request_timeout: Duration::from_secs(timeout_secs),
        });

        Ok(Self { gemini })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_key_disables_generation() {
        let config = SessionConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.gemini.is_none());
    }

    #[test]
    fn defaults_apply_when_key_present() {
        let config = SessionConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "abc")])).unwrap();
        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key, "abc");
        assert_eq!(gemini.api_url, DEFAULT_GEMINI_API_URL);
        assert_eq!(gemini.model, DEFAULT_GEMINI_IMAGE_MODEL);
        assert_eq!(gemini.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn api_key_falls_back_to_generic_variable() {
        let config = SessionConfig::from_lookup(lookup(&[
            ("API_KEY", "fallback"),
            ("GEMINI_IMAGE_MODEL", "custom-model"),
            ("ART_REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key, "fallback");
        assert_eq!(gemini.model, "custom-model");
        assert_eq!(gemini.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let result = SessionConfig::from_lookup(lookup(&[("ART_REQUEST_TIMEOUT_SECS", "soon")]));
        assert_matches!(
            result,
            Err(ConfigError::InvalidValue { var: "ART_REQUEST_TIMEOUT_SECS", .. })
        );
    }
}
