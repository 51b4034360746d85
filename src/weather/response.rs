/// Response structure for the OpenWeatherMap current weather endpoint
/// Only the fields the reading is built from are declared; everything else is ignored
#[derive(serde::Deserialize, Debug)]
pub struct WeatherResponse {
    /// Location name as resolved by the service
    pub name: String,
    /// Temperature and humidity block
    pub main: MainReadings,
    /// Condition list, the first entry is the primary condition
    pub weather: Vec<Condition>,
}

/// Measurements under the `main` key (metric units)
#[derive(serde::Deserialize, Debug)]
pub struct MainReadings {
    /// Temperature in Celsius
    pub temp: f64,
    /// Perceived temperature in Celsius
    pub feels_like: f64,
    /// Humidity percentage (0-100), integral in practice but any number is accepted
    pub humidity: f64,
}

/// Weather condition description
#[derive(serde::Deserialize, Debug)]
pub struct Condition {
    /// Localized description (e.g., "cielo claro")
    pub description: String,
}
