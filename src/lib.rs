//! Current-weather lookup against the OpenWeatherMap API.

pub mod config;
pub mod error;
pub mod render;
pub mod weather;

pub use config::WeatherConfig;
pub use error::{AppError, LookupError};
pub use weather::{WeatherClient, WeatherReading};
