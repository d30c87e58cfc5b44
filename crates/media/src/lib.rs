//! Video channel and social post summaries.
//!
//! Same shape as the orders module: typed records deserialized from upstream
//! payloads, and pure summaries over them.

pub mod channel;
pub mod posts;

pub use channel::{ChannelStatistics, ChannelStats};
pub use posts::{EngagementSummary, HashtagCount, SocialPost, engagement_summary};
