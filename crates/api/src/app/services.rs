use std::sync::Arc;

use pulse_core::CurrencyDivisor;
use pulse_infra::{
    AppConfig, ChannelSource, OrderSource, PostSource, UpstreamResult,
    external::{ScraperClient, SquareClient, YoutubeClient, http_client},
};

/// Upstream sources and presentation settings shared by all handlers.
#[derive(Clone)]
pub struct AppServices {
    pub orders: Arc<dyn OrderSource>,
    pub channel: Arc<dyn ChannelSource>,
    pub posts: Arc<dyn PostSource>,
    pub currency_divisor: CurrencyDivisor,
}

impl AppServices {
    pub fn new(
        orders: Arc<dyn OrderSource>,
        channel: Arc<dyn ChannelSource>,
        posts: Arc<dyn PostSource>,
        currency_divisor: CurrencyDivisor,
    ) -> Self {
        Self {
            orders,
            channel,
            posts,
            currency_divisor,
        }
    }
}

/// Wire the real HTTP clients from configuration (one shared connection pool).
pub fn build_services(config: &AppConfig) -> UpstreamResult<AppServices> {
    let http = http_client(config.upstream_timeout)?;

    Ok(AppServices::new(
        Arc::new(SquareClient::new(http.clone(), &config.square)),
        Arc::new(YoutubeClient::new(http.clone(), &config.youtube)),
        Arc::new(ScraperClient::new(http, &config.scraper)),
        config.currency_divisor,
    ))
}
