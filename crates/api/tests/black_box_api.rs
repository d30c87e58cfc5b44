use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::StatusCode;

use pulse_api::app::{AppServices, build_router};
use pulse_core::CurrencyDivisor;
use pulse_infra::{ChannelSource, OrderSource, PostSource, Service, UpstreamError, UpstreamResult};
use pulse_media::{ChannelStats, SocialPost};
use pulse_sales::{OrderRecord, OrderState};

struct FakeOrders {
    result: UpstreamResult<Vec<OrderRecord>>,
    calls: AtomicUsize,
}

#[async_trait]
impl OrderSource for FakeOrders {
    async fn search_orders(&self) -> UpstreamResult<Vec<OrderRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

struct FakeChannel(UpstreamResult<ChannelStats>);

#[async_trait]
impl ChannelSource for FakeChannel {
    async fn channel_stats(&self) -> UpstreamResult<ChannelStats> {
        self.0.clone()
    }
}

struct FakePosts(UpstreamResult<Vec<SocialPost>>);

#[async_trait]
impl PostSource for FakePosts {
    async fn recent_posts(&self) -> UpstreamResult<Vec<SocialPost>> {
        self.0.clone()
    }
}

struct TestServer {
    base_url: String,
    orders: Arc<FakeOrders>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(
        orders: UpstreamResult<Vec<OrderRecord>>,
        channel: UpstreamResult<ChannelStats>,
        posts: UpstreamResult<Vec<SocialPost>>,
    ) -> Self {
        let orders = Arc::new(FakeOrders {
            result: orders,
            calls: AtomicUsize::new(0),
        });
        let services = AppServices::new(
            orders.clone(),
            Arc::new(FakeChannel(channel)),
            Arc::new(FakePosts(posts)),
            CurrencyDivisor::CENTS,
        );

        // Same router as prod, but with fake upstreams and an ephemeral port.
        let app = build_router(Arc::new(services));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            orders,
            handle,
        }
    }

    async fn with_orders(orders: Vec<OrderRecord>) -> Self {
        Self::spawn(
            Ok(orders),
            Err(UpstreamError::NotConfigured("YOUTUBE_API_KEY")),
            Err(UpstreamError::NotConfigured("SCRAPER_API_TOKEN")),
        )
        .await
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn cafe_orders() -> Vec<OrderRecord> {
    vec![
        OrderRecord::new("o1", OrderState::Open)
            .with_total(1_250)
            .with_line_item("Latte", 3),
        OrderRecord::new("o2", OrderState::Completed)
            .with_total(799)
            .with_line_item("Tea", 3)
            .with_line_item("Scone", 1),
        OrderRecord::new("o3", OrderState::Completed),
    ]
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::with_orders(vec![]).await;
    let res = srv.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn order_count_reports_number_of_orders() {
    let srv = TestServer::with_orders(cafe_orders()).await;
    let res = srv.get("/orders").await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "count": 3 }));
    assert_eq!(srv.orders.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn order_total_is_rendered_in_major_units() {
    let srv = TestServer::with_orders(cafe_orders()).await;
    let res = srv.get("/orders/total").await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["total"].as_f64().unwrap(), 20.49);
    assert_eq!(body["total_minor"], 2_049);
}

#[tokio::test]
async fn popular_item_uses_first_seen_tie_break() {
    let srv = TestServer::with_orders(cafe_orders()).await;
    let res = srv.get("/orders/popular").await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "item": "Latte", "sold": 3 }));
}

#[tokio::test]
async fn popular_item_without_line_items_is_sentinel() {
    let srv = TestServer::with_orders(vec![OrderRecord::new("o1", OrderState::Open)]).await;
    let body: serde_json::Value = srv.get("/orders/popular").await.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "item": "N/A", "sold": 0 }));
}

#[tokio::test]
async fn order_summary_combines_all_three() {
    let srv = TestServer::with_orders(cafe_orders()).await;
    let body: serde_json::Value = srv.get("/orders/summary").await.json().await.unwrap();

    assert_eq!(body["count"], 3);
    assert_eq!(body["total_minor"], 2_049);
    assert_eq!(body["popular"], serde_json::json!({ "item": "Latte", "sold": 3 }));
}

#[tokio::test]
async fn upstream_error_status_is_passed_through() {
    let srv = TestServer::spawn(
        Err(UpstreamError::Api {
            service: Service::Square,
            status: 401,
            body: "UNAUTHORIZED".into(),
        }),
        Err(UpstreamError::NotConfigured("YOUTUBE_API_KEY")),
        Ok(vec![]),
    )
    .await;

    let res = srv.get("/orders").await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "upstream_error");
    assert_eq!(body["message"], "Square API error: UNAUTHORIZED");
}

#[tokio::test]
async fn network_failure_is_internal_server_error() {
    let srv = TestServer::spawn(
        Err(UpstreamError::Network("connection reset".into())),
        Err(UpstreamError::NotConfigured("YOUTUBE_API_KEY")),
        Ok(vec![]),
    )
    .await;

    let res = srv.get("/orders/total").await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Internal Server Error");
}

#[tokio::test]
async fn missing_credentials_answer_service_unavailable() {
    let srv = TestServer::with_orders(vec![]).await;

    let res = srv.get("/youtube/stats").await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_configured");
}

#[tokio::test]
async fn youtube_stats_are_reshaped() {
    let srv = TestServer::spawn(
        Ok(vec![]),
        Ok(ChannelStats {
            channel_id: "UC42".into(),
            subscribers: 120,
            views: 9_001,
            videos: 12,
            hidden_subscribers: false,
        }),
        Ok(vec![]),
    )
    .await;

    let res = srv.get("/youtube/stats").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "channel_id": "UC42",
            "subscribers": 120,
            "views": 9001,
            "videos": 12,
            "hidden_subscribers": false
        })
    );
}

#[tokio::test]
async fn social_engagement_is_summarized() {
    let posted = Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap();
    let posts = vec![
        SocialPost {
            likes: 10,
            comments: 2,
            hashtags: vec!["coffee".into(), "tea".into()],
            posted_at: Some(posted),
            ..SocialPost::default()
        },
        SocialPost {
            likes: 5,
            comments: 1,
            hashtags: vec!["#Coffee".into()],
            ..SocialPost::default()
        },
    ];
    let srv = TestServer::spawn(
        Ok(vec![]),
        Err(UpstreamError::NotConfigured("YOUTUBE_API_KEY")),
        Ok(posts),
    )
    .await;

    let res = srv.get("/social/engagement").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["posts"], 2);
    assert_eq!(body["likes"], 15);
    assert_eq!(body["comments"], 3);
    assert_eq!(body["top_hashtag"], serde_json::json!({ "item": "coffee", "count": 2 }));
    assert_eq!(body["latest_post_at"], "2024-05-04T12:00:00Z");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let srv = TestServer::with_orders(vec![]).await;

    let res = srv.get("/orders").await;
    let generated = res
        .headers()
        .get("x-request-id")
        .expect("missing x-request-id")
        .to_str()
        .unwrap()
        .to_string();
    assert!(uuid::Uuid::parse_str(&generated).is_ok());

    let res = reqwest::Client::new()
        .get(format!("{}/orders", srv.base_url))
        .header("x-request-id", "trace-abc-1")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers().get("x-request-id").unwrap(), "trace-abc-1");
}
