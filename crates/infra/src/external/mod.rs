//! Outbound HTTP clients for the three upstream services.
//!
//! Each service sits behind a small async trait so the HTTP layer can be wired
//! to fakes in tests. One request per call, no retries.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use pulse_media::{ChannelStats, SocialPost};
use pulse_sales::OrderRecord;

pub mod error;
pub mod scraper;
pub mod square;
pub mod youtube;

pub use error::{Service, UpstreamError, UpstreamResult};
pub use scraper::ScraperClient;
pub use square::SquareClient;
pub use youtube::YoutubeClient;

/// Orders from the payments platform, already filtered to open and completed.
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn search_orders(&self) -> UpstreamResult<Vec<OrderRecord>>;
}

/// Counters of the configured video channel.
#[async_trait]
pub trait ChannelSource: Send + Sync {
    async fn channel_stats(&self) -> UpstreamResult<ChannelStats>;
}

/// Recent posts collected by the scraping service.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn recent_posts(&self) -> UpstreamResult<Vec<SocialPost>>;
}

/// Build the HTTP client shared by all upstream clients.
pub fn http_client(timeout: Duration) -> UpstreamResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("pulse/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| UpstreamError::Network(e.to_string()))
}

/// Check the status, then decode the body as JSON.
///
/// Non-2xx responses keep the upstream status and body so the API can pass
/// them through.
pub(crate) async fn read_json<T>(service: Service, resp: reqwest::Response) -> UpstreamResult<T>
where
    T: DeserializeOwned,
{
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(service = %service, status = status.as_u16(), "upstream returned an error status");
        return Err(UpstreamError::Api {
            service,
            status: status.as_u16(),
            body,
        });
    }

    let bytes = resp.bytes().await.map_err(|e| {
        tracing::error!(service = %service, error = %e, "failed to read upstream body");
        UpstreamError::Network(e.to_string())
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::error!(service = %service, error = %e, "failed to decode upstream body");
        UpstreamError::Parse(format!("{service}: {e}"))
    })
}

/// Map a transport failure, logging it once.
pub(crate) fn network_error(service: Service, err: reqwest::Error) -> UpstreamError {
    tracing::error!(service = %service, error = %err, "upstream request failed");
    UpstreamError::Network(err.to_string())
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
