use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use pulse_core::{ItemTally, NO_DATA, deserialize_null_default, deserialize_quantity};

/// One post as returned by the scraping service's dataset endpoint.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "likesCount", deserialize_with = "deserialize_quantity")]
    pub likes: u64,
    #[serde(default, rename = "commentsCount", deserialize_with = "deserialize_quantity")]
    pub comments: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub hashtags: Vec<String>,
    /// Unparseable timestamps are treated as absent.
    #[serde(default, rename = "timestamp", deserialize_with = "deserialize_timestamp")]
    pub posted_at: Option<DateTime<Utc>>,
}

/// Most used hashtag and how many posts carried it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashtagCount {
    pub tag: String,
    pub count: u64,
}

impl HashtagCount {
    pub fn no_data() -> Self {
        Self {
            tag: NO_DATA.0.to_string(),
            count: NO_DATA.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngagementSummary {
    pub posts: usize,
    pub likes: u64,
    pub comments: u64,
    pub top_hashtag: HashtagCount,
    pub latest_post_at: Option<DateTime<Utc>>,
}

/// Totals likes and comments and finds the most frequent hashtag.
///
/// Hashtags are compared case-insensitively without their leading `#`, and a
/// tag repeated within one post counts once. Ties go to the tag seen first.
pub fn engagement_summary(posts: &[SocialPost]) -> EngagementSummary {
    let mut tags = ItemTally::new();
    let mut likes = 0u64;
    let mut comments = 0u64;
    let mut latest_post_at: Option<DateTime<Utc>> = None;

    for post in posts {
        likes = likes.saturating_add(post.likes);
        comments = comments.saturating_add(post.comments);
        latest_post_at = latest_post_at.max(post.posted_at);

        let mut seen = HashSet::new();
        for tag in &post.hashtags {
            let tag = normalize_hashtag(tag);
            if !tag.is_empty() && seen.insert(tag.clone()) {
                tags.record(&tag, 1);
            }
        }
    }

    let top_hashtag = match tags.top() {
        Some((tag, count)) => HashtagCount {
            tag: tag.to_string(),
            count,
        },
        None => HashtagCount::no_data(),
    };

    EngagementSummary {
        posts: posts.len(),
        likes,
        comments,
        top_hashtag,
        latest_post_at,
    }
}

fn normalize_hashtag(raw: &str) -> String {
    raw.trim().trim_start_matches('#').to_lowercase()
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}
