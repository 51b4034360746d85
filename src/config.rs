use crate::error::AppError;

/// OpenWeatherMap current-weather endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

pub const API_KEY_VAR: &str = "WEATHER_API_KEY";
pub const BASE_URL_VAR: &str = "WEATHER_BASE_URL";

/// Connection settings injected into [`crate::weather::WeatherClient`].
#[derive(Clone)]
pub struct WeatherConfig {
    pub base_url: String,
    pub api_key: String,
}

impl WeatherConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// The API key is required and must not be blank. The base URL override
    /// is optional but has to be an http(s) URL when given.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::EnvVarNotSet(API_KEY_VAR.to_string()))?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            let base_url = base_url.trim();
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(AppError::InvalidConfig(format!(
                    "{BASE_URL_VAR} must be an http(s) URL, got {base_url}"
                )));
            }
            config = config.with_base_url(base_url);
        }

        Ok(config)
    }
}

// the key never shows up in logs
impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_to_openweathermap() {
        let env = vars(&[(API_KEY_VAR, "secret")]);
        let config = WeatherConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "secret");
    }

    #[test]
    fn missing_key_is_an_error() {
        let env = vars(&[]);
        let err = WeatherConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, AppError::EnvVarNotSet(ref name) if name == API_KEY_VAR));
    }

    #[test]
    fn blank_key_is_an_error() {
        let env = vars(&[(API_KEY_VAR, "   ")]);
        let err = WeatherConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, AppError::EnvVarNotSet(_)));
    }

    #[test]
    fn base_url_override() {
        let env = vars(&[
            (API_KEY_VAR, "secret"),
            (BASE_URL_VAR, "http://localhost:8080/weather"),
        ]);
        let config = WeatherConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/weather");
    }

    #[test]
    fn base_url_must_be_http() {
        let env = vars(&[(API_KEY_VAR, "secret"), (BASE_URL_VAR, "ftp://example.com")]);
        let err = WeatherConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn debug_hides_api_key() {
        let config = WeatherConfig::new("secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("secret"));
    }
}
