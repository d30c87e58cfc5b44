use chrono::{DateTime, Utc};
use serde::Serialize;

use pulse_core::{CurrencyDivisor, Money};
use pulse_media::{ChannelStats, EngagementSummary};
use pulse_sales::{OrderSummary, PopularItem};

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct TotalResponse {
    /// Major units (e.g. dollars).
    pub total: f64,
    pub total_minor: i64,
}

#[derive(Debug, Serialize)]
pub struct PopularItemResponse {
    pub item: String,
    pub sold: u64,
}

#[derive(Debug, Serialize)]
pub struct OrderSummaryResponse {
    pub count: usize,
    pub total: f64,
    pub total_minor: i64,
    pub popular: PopularItemResponse,
}

#[derive(Debug, Serialize)]
pub struct ChannelStatsResponse {
    pub channel_id: String,
    pub subscribers: u64,
    pub views: u64,
    pub videos: u64,
    pub hidden_subscribers: bool,
}

#[derive(Debug, Serialize)]
pub struct HashtagResponse {
    pub item: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct EngagementResponse {
    pub posts: usize,
    pub likes: u64,
    pub comments: u64,
    pub top_hashtag: HashtagResponse,
    pub latest_post_at: Option<DateTime<Utc>>,
}

// -------------------------
// Mapping helpers
// -------------------------

pub fn total_to_response(total: Money, divisor: CurrencyDivisor) -> TotalResponse {
    TotalResponse {
        total: total.to_major(divisor),
        total_minor: total.minor(),
    }
}

pub fn popular_to_response(popular: PopularItem) -> PopularItemResponse {
    PopularItemResponse {
        item: popular.name,
        sold: popular.quantity,
    }
}

pub fn summary_to_response(summary: OrderSummary, divisor: CurrencyDivisor) -> OrderSummaryResponse {
    let total = total_to_response(summary.total, divisor);
    OrderSummaryResponse {
        count: summary.count,
        total: total.total,
        total_minor: total.total_minor,
        popular: popular_to_response(summary.popular),
    }
}

pub fn channel_to_response(stats: ChannelStats) -> ChannelStatsResponse {
    ChannelStatsResponse {
        channel_id: stats.channel_id,
        subscribers: stats.subscribers,
        views: stats.views,
        videos: stats.videos,
        hidden_subscribers: stats.hidden_subscribers,
    }
}

pub fn engagement_to_response(summary: EngagementSummary) -> EngagementResponse {
    EngagementResponse {
        posts: summary.posts,
        likes: summary.likes,
        comments: summary.comments,
        top_hashtag: HashtagResponse {
            item: summary.top_hashtag.tag,
            count: summary.top_hashtag.count,
        },
        latest_post_at: summary.latest_post_at,
    }
}
