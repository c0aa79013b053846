//! Fetches the configuration for a platform / version and prints it.
//!
//! CONNECT_API_ROOT=http://localhost:8080 CONNECT_PLATFORM=ios CONNECT_VERSION=3.2.1 cargo run

use connect_http::{ConfigFetcher, Http, HttpError};
use connect_models::config::Config;

const DEFAULT_API_ROOT: &str = "http://localhost:8080"; // without the /

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let api_root = std::env::var("CONNECT_API_ROOT").unwrap_or_else(|_| DEFAULT_API_ROOT.to_string());
    let platform = std::env::var("CONNECT_PLATFORM")
        .expect("Cannot get platform; set environment variable CONNECT_PLATFORM=... and run again");
    let version = std::env::var("CONNECT_VERSION")
        .expect("Cannot get version; set environment variable CONNECT_VERSION=... and run again");

    let http = Http::new(api_root)?;

    match http.fetch_config(&platform, &version).await {
        Ok(config) => print_config(&config)?,
        Err(HttpError::Server { status, body }) => {
            tracing::error!("Server refused the request with {}: {}", status, body);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn print_config(config: &Config) -> serde_json::Result<()> {
    tracing::info!("Got {} keys", config.len());
    println!("{}", serde_json::to_string_pretty(config)?);

    Ok(())
}
