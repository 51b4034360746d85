use tracing::{debug, error, info};

use crate::config::WeatherConfig;
use crate::error::LookupError;

mod reading;
mod response;

pub use reading::WeatherReading;

const UNITS: &str = "metric";
const LANG: &str = "es";

/// Client for the current-weather endpoint.
///
/// Holds no mutable state; clones share the underlying connection pool, so
/// concurrent lookups never observe each other.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Fetches the current weather for `place`.
    ///
    /// # Arguments
    /// * `place` - Free-form place name, passed to the service untouched (e.g., "Medellin")
    ///
    /// # Returns
    /// * `WeatherReading` with all five fields populated
    /// * `LookupError::Transport` if the service could not be reached
    /// * `LookupError::Service` if it answered with a non-success status
    /// * `LookupError::MalformedResponse` if the payload did not match the expected shape
    pub async fn lookup_weather(&self, place: &str) -> Result<WeatherReading, LookupError> {
        info!("Fetching weather data for location: {}", place);

        let result = self.fetch(place).await;
        if let Err(e) = &result {
            error!(place, "Failed to fetch weather data: {}", e);
        }
        result
    }

    // An unparsable base URL also surfaces as `Transport`; `WeatherConfig::from_lookup`
    // only admits http(s) URLs.
    async fn fetch(&self, place: &str) -> Result<WeatherReading, LookupError> {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("q", place),
                ("appid", self.config.api_key.as_str()),
                ("units", UNITS),
                ("lang", LANG),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Service {
                status_code: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let weather_response: response::WeatherResponse = serde_json::from_slice(&body)
            .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

        let reading = WeatherReading::try_from(weather_response)?;
        debug!("Weather data fetched successfully: {:?}", reading);
        Ok(reading)
    }
}
