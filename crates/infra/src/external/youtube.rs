//! Video platform: channel statistics.

use async_trait::async_trait;
use serde::Deserialize;

use pulse_core::deserialize_null_default;
use pulse_media::{ChannelStatistics, ChannelStats};

use super::{ChannelSource, Service, UpstreamError, UpstreamResult, endpoint, network_error, read_json};
use crate::config::YoutubeConfig;

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
struct ChannelItem {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    id: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    statistics: ChannelStatistics,
}

#[derive(Debug, Clone)]
pub struct YoutubeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    channel_id: Option<String>,
}

impl YoutubeClient {
    pub fn new(http: reqwest::Client, config: &YoutubeConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            channel_id: config.channel_id.clone(),
        }
    }
}

#[async_trait]
impl ChannelSource for YoutubeClient {
    async fn channel_stats(&self) -> UpstreamResult<ChannelStats> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::NotConfigured("YOUTUBE_API_KEY"))?;
        let channel_id = self
            .channel_id
            .as_deref()
            .ok_or(UpstreamError::NotConfigured("YOUTUBE_CHANNEL_ID"))?;

        let url = endpoint(&self.base_url, "/youtube/v3/channels");
        let resp = self
            .http
            .get(&url)
            .query(&[("part", "statistics"), ("id", channel_id), ("key", key)])
            .send()
            .await
            .map_err(|e| network_error(Service::Youtube, e))?;

        let body: ChannelListResponse = read_json(Service::Youtube, resp).await?;
        let item = body
            .items
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::NotFound(format!("channel {channel_id}")))?;

        let id = if item.id.is_empty() { channel_id.to_string() } else { item.id };
        tracing::info!(channel_id = %id, "fetched channel statistics");
        Ok(ChannelStats::from_statistics(id, item.statistics))
    }
}
