//! Payments platform: orders search.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use pulse_core::deserialize_null_default;
use pulse_sales::OrderRecord;

use super::{OrderSource, Service, UpstreamError, UpstreamResult, endpoint, network_error, read_json};
use crate::config::SquareConfig;

/// States requested from upstream; the aggregator relies on this filter.
pub const TRACKED_STATES: [&str; 2] = ["OPEN", "COMPLETED"];

#[derive(Debug, Deserialize)]
struct SearchOrdersResponse {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    orders: Vec<OrderRecord>,
}

#[derive(Debug, Clone)]
pub struct SquareClient {
    http: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
    location_id: Option<String>,
}

impl SquareClient {
    pub fn new(http: reqwest::Client, config: &SquareConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            access_token: config.access_token.clone(),
            location_id: config.location_id.clone(),
        }
    }

    fn search_body(location_id: &str) -> serde_json::Value {
        json!({
            "location_ids": [location_id],
            "query": {
                "filter": {
                    "state_filter": { "states": TRACKED_STATES }
                }
            }
        })
    }
}

#[async_trait]
impl OrderSource for SquareClient {
    async fn search_orders(&self) -> UpstreamResult<Vec<OrderRecord>> {
        let token = self
            .access_token
            .as_deref()
            .ok_or(UpstreamError::NotConfigured("SQUARE_ACCESS_TOKEN"))?;
        let location_id = self
            .location_id
            .as_deref()
            .ok_or(UpstreamError::NotConfigured("LOCATION_ID"))?;

        let url = endpoint(&self.base_url, "/v2/orders/search");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&Self::search_body(location_id))
            .send()
            .await
            .map_err(|e| network_error(Service::Square, e))?;

        let body: SearchOrdersResponse = read_json(Service::Square, resp).await?;
        tracing::info!(orders = body.orders.len(), "fetched orders from Square");
        Ok(body.orders)
    }
}
