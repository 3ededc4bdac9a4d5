use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Artificial latency applied to scrape requests.
    pub scrape_delay: Duration,
    /// Artificial latency applied to extraction requests.
    pub extract_delay: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        // Simulated processing latencies, overridable so tests can run without them
        let scrape_delay = delay_from_env("SCRAPE_DELAY_MS", 2000)?;
        let extract_delay = delay_from_env("EXTRACT_DELAY_MS", 3000)?;

        Ok(Config {
            server_addr,
            scrape_delay,
            extract_delay,
        })
    }
}

fn delay_from_env(key: &str, default_ms: u64) -> Result<Duration> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| AppError::ConfigError(format!("Invalid {}: {}", key, e))),
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}
