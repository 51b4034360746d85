use std::{env, io::Write};

use chrono::Local;
use futures::stream::{self, StreamExt};
use tracing::{Instrument, info, span};
use tracing_subscriber::EnvFilter;
use weather_lookup::{AppError, WeatherClient, WeatherConfig, render};

const MAX_IN_FLIGHT: usize = 4;

/// Initializes tracing, reads the configuration from the environment and looks up weather.
/// Place names given as arguments are looked up concurrently; without arguments the program
/// reads one place name per line until the user inputs "exit".
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = WeatherClient::new(WeatherConfig::from_env()?);
    info!("Using weather endpoint {}", client.config().base_url);

    let places: Vec<String> = env::args().skip(1).collect();
    if places.is_empty() {
        interactive(&client).await?;
    } else {
        lookup_all(&client, places).await;
    }
    Ok(())
}

/// Look up every place concurrently and print each result as it arrives.
async fn lookup_all(client: &WeatherClient, places: Vec<String>) {
    stream::iter(places)
        .map(|place| async move {
            lookup_and_render(client, &place)
                .instrument(span!(tracing::Level::INFO, "lookup", place = %place))
                .await
        })
        .buffer_unordered(MAX_IN_FLIGHT)
        .for_each(|output| async move {
            println!("{output}\n");
        })
        .await;
}

/// Read place names from stdin until `exit`.
async fn interactive(client: &WeatherClient) -> Result<(), AppError> {
    info!("Type a place name to get its current weather. Send `exit` to stop");

    let mut buffer = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        buffer.clear();
        // EOF
        if std::io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let place = buffer.trim();
        if place.is_empty() {
            continue;
        }
        if place == "exit" {
            info!("User wants to exit");
            break;
        }

        let output = lookup_and_render(client, place)
            .instrument(span!(tracing::Level::INFO, "lookup", place = %place))
            .await;
        println!("{output}");
    }

    Ok(())
}

async fn lookup_and_render(client: &WeatherClient, place: &str) -> String {
    match client.lookup_weather(place).await {
        Ok(reading) => render::render_reading(&reading, &Local::now()),
        Err(e) => render::render_error(place, &e),
    }
}
