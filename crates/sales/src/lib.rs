//! Orders domain module.
//!
//! Typed order records as returned by the payments platform, plus the
//! aggregations the API reports over them. Pure logic: no IO, no HTTP.

pub mod aggregator;
pub mod order;

pub use aggregator::{
    OrderSummary, PopularItem, count_open_and_completed, most_popular_item, sum_totals, summarize,
};
pub use order::{LineItem, OrderRecord, OrderState};
