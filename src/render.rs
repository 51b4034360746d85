//! Terminal rendering of lookup results.

use chrono::{DateTime, Datelike, TimeZone, Weekday};
use std::fmt::Display;

use crate::error::LookupError;
use crate::weather::WeatherReading;

pub fn spanish_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miercoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sabado",
        Weekday::Sun => "Domingo",
    }
}

pub fn upper_case(text: &str) -> String {
    text.to_uppercase()
}

/// Formats a reading under a "<weekday> <date> <time>" header taken from `now`.
pub fn render_reading<Tz>(reading: &WeatherReading, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} {}\n{}\n  Temperatura: {:.1} °C\n  Sensacion termica: {:.1} °C\n  Humedad: {}%\n  {}",
        spanish_weekday(now.weekday()),
        now.format("%d/%m/%Y %H:%M:%S"),
        upper_case(&reading.place),
        reading.temperature_c,
        reading.feels_like_c,
        reading.humidity_pct,
        reading.description,
    )
}

/// User-facing message for a failed lookup.
pub fn render_error(place: &str, err: &LookupError) -> String {
    match err {
        LookupError::Service { status_code: 404 } => {
            format!("No se encontro el lugar \"{place}\"")
        }
        LookupError::Service { status_code } => {
            format!("El servicio de clima respondio con error (HTTP {status_code}) para \"{place}\"")
        }
        LookupError::Transport(_) => {
            format!("No se pudo contactar el servicio de clima para \"{place}\"")
        }
        LookupError::MalformedResponse(_) => {
            format!("Respuesta inesperada del servicio de clima para \"{place}\"")
        }
    }
}
