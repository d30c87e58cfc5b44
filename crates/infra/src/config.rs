//! Process configuration, read once at startup from the environment.
//!
//! Credentials are optional here: a missing token only disables the endpoint
//! that needs it (the API answers 503 for it), it does not stop the process.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use pulse_core::CurrencyDivisor;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_POST_LIMIT: u32 = 50;
pub const DEFAULT_SQUARE_API_BASE: &str = "https://connect.squareup.com";
pub const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com";
pub const DEFAULT_SCRAPER_API_BASE: &str = "https://api.apify.com";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Payments platform (orders search) settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub location_id: Option<String>,
}

/// Video platform settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub channel_id: Option<String>,
}

/// Social scraping service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub actor_id: Option<String>,
    pub post_limit: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub upstream_timeout: Duration,
    /// Applied when rendering order totals; sums stay in minor units.
    pub currency_divisor: CurrencyDivisor,
    pub square: SquareConfig,
    pub youtube: YoutubeConfig,
    pub scraper: ScraperConfig,
}

impl AppConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let divisor: u32 = parse_or("CURRENCY_DIVISOR", get("CURRENCY_DIVISOR"), 100)?;
        let currency_divisor = CurrencyDivisor::new(divisor).map_err(|e| ConfigError::Invalid {
            key: "CURRENCY_DIVISOR",
            reason: e.to_string(),
        })?;

        let timeout_secs: u64 =
            parse_or("UPSTREAM_TIMEOUT_SECS", get("UPSTREAM_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "UPSTREAM_TIMEOUT_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            bind_addr: parse_or("BIND_ADDR", get("BIND_ADDR"), IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            upstream_timeout: Duration::from_secs(timeout_secs),
            currency_divisor,
            square: SquareConfig {
                base_url: get("SQUARE_API_BASE")
                    .unwrap_or_else(|| DEFAULT_SQUARE_API_BASE.to_string()),
                access_token: get("SQUARE_ACCESS_TOKEN"),
                location_id: get("LOCATION_ID"),
            },
            youtube: YoutubeConfig {
                base_url: get("YOUTUBE_API_BASE")
                    .unwrap_or_else(|| DEFAULT_YOUTUBE_API_BASE.to_string()),
                api_key: get("YOUTUBE_API_KEY"),
                channel_id: get("YOUTUBE_CHANNEL_ID"),
            },
            scraper: ScraperConfig {
                base_url: get("SCRAPER_API_BASE")
                    .unwrap_or_else(|| DEFAULT_SCRAPER_API_BASE.to_string()),
                api_token: get("SCRAPER_API_TOKEN"),
                actor_id: get("SCRAPER_ACTOR_ID"),
                post_limit: parse_or("SCRAPER_POST_LIMIT", get("SCRAPER_POST_LIMIT"), DEFAULT_POST_LIMIT)?,
            },
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Names of settings whose absence disables an endpoint.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let checks = [
            ("SQUARE_ACCESS_TOKEN", self.square.access_token.is_none()),
            ("LOCATION_ID", self.square.location_id.is_none()),
            ("YOUTUBE_API_KEY", self.youtube.api_key.is_none()),
            ("YOUTUBE_CHANNEL_ID", self.youtube.channel_id.is_none()),
            ("SCRAPER_API_TOKEN", self.scraper.api_token.is_none()),
            ("SCRAPER_ACTOR_ID", self.scraper.actor_id.is_none()),
        ];
        checks
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(key, _)| key)
            .collect()
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(v) => v.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("{v:?}: {e}"),
        }),
    }
}
