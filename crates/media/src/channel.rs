use serde::Deserialize;

use pulse_core::{deserialize_null_default, deserialize_quantity};

/// `statistics` object of a channel resource. Counts arrive as decimal strings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub subscriber_count: u64,
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub video_count: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub hidden_subscriber_count: bool,
}

/// Public counters for one video channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelStats {
    pub channel_id: String,
    pub subscribers: u64,
    pub views: u64,
    pub videos: u64,
    /// When set, the platform hides the real subscriber count and `subscribers` is 0.
    pub hidden_subscribers: bool,
}

impl ChannelStats {
    pub fn from_statistics(channel_id: impl Into<String>, stats: ChannelStatistics) -> Self {
        let subscribers = if stats.hidden_subscriber_count {
            0
        } else {
            stats.subscriber_count
        };

        Self {
            channel_id: channel_id.into(),
            subscribers,
            views: stats.view_count,
            videos: stats.video_count,
            hidden_subscribers: stats.hidden_subscriber_count,
        }
    }
}
