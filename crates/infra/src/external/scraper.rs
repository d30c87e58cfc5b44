//! Social scraping service: dataset items of the last actor run.

use async_trait::async_trait;

use pulse_media::SocialPost;

use super::{PostSource, Service, UpstreamError, UpstreamResult, endpoint, network_error, read_json};
use crate::config::ScraperConfig;

#[derive(Debug, Clone)]
pub struct ScraperClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
    actor_id: Option<String>,
    post_limit: u32,
}

impl ScraperClient {
    pub fn new(http: reqwest::Client, config: &ScraperConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_token: config.api_token.clone(),
            actor_id: config.actor_id.clone(),
            post_limit: config.post_limit,
        }
    }
}

#[async_trait]
impl PostSource for ScraperClient {
    async fn recent_posts(&self) -> UpstreamResult<Vec<SocialPost>> {
        let token = self
            .api_token
            .as_deref()
            .ok_or(UpstreamError::NotConfigured("SCRAPER_API_TOKEN"))?;
        let actor = self
            .actor_id
            .as_deref()
            .ok_or(UpstreamError::NotConfigured("SCRAPER_ACTOR_ID"))?;

        let url = endpoint(
            &self.base_url,
            &format!("/v2/acts/{actor}/runs/last/dataset/items"),
        );
        let limit = self.post_limit.to_string();
        let resp = self
            .http
            .get(&url)
            .query(&[("token", token), ("limit", limit.as_str()), ("clean", "true")])
            .send()
            .await
            .map_err(|e| network_error(Service::Scraper, e))?;

        let posts: Vec<SocialPost> = read_json(Service::Scraper, resp).await?;
        tracing::info!(posts = posts.len(), actor, "fetched posts from scraper");
        Ok(posts)
    }
}
