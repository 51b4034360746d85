use super::response::WeatherResponse;
use crate::error::LookupError;

/// Normalized result of a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Location name as reported by the service
    pub place: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    /// Relative humidity, always within 0-100
    pub humidity_pct: f64,
    /// Short condition summary
    pub description: String,
}

impl TryFrom<WeatherResponse> for WeatherReading {
    type Error = LookupError;

    fn try_from(response: WeatherResponse) -> Result<Self, Self::Error> {
        let WeatherResponse {
            name,
            main,
            weather,
        } = response;

        if !(0.0..=100.0).contains(&main.humidity) {
            return Err(LookupError::MalformedResponse(format!(
                "humidity out of range: {}",
                main.humidity
            )));
        }

        let description = weather
            .into_iter()
            .next()
            .map(|condition| condition.description)
            .ok_or_else(|| LookupError::MalformedResponse("empty weather list".to_string()))?;

        Ok(WeatherReading {
            place: name,
            temperature_c: main.temp,
            feels_like_c: main.feels_like,
            humidity_pct: main.humidity,
            description,
        })
    }
}
