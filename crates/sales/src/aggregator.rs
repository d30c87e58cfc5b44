//! Summaries over a fetched list of orders.
//!
//! All functions are pure and take the records by shared reference, so calling
//! them repeatedly on the same input always yields the same result.

use pulse_core::{ItemTally, Money, NO_DATA};

use crate::order::OrderRecord;

/// Best-selling line item across a set of orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularItem {
    pub name: String,
    pub quantity: u64,
}

impl PopularItem {
    /// Reported when the orders contain no line items at all.
    pub fn no_data() -> Self {
        Self {
            name: NO_DATA.0.to_string(),
            quantity: NO_DATA.1,
        }
    }
}

/// All three order summaries over the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub count: usize,
    pub total: Money,
    pub popular: PopularItem,
}

/// Number of orders.
///
/// The upstream query already restricts results to open and completed orders,
/// so no state filtering happens here.
pub fn count_open_and_completed(records: &[OrderRecord]) -> usize {
    records.len()
}

/// Sum of order totals in minor units. Orders without a total count as zero.
pub fn sum_totals(records: &[OrderRecord]) -> Money {
    records
        .iter()
        .map(|r| r.total_money_amount.unwrap_or(Money::ZERO))
        .sum()
}

/// The line item with the highest cumulative quantity.
///
/// Ties go to the item name encountered first. With no line items at all, the
/// [`PopularItem::no_data`] sentinel is returned.
pub fn most_popular_item(records: &[OrderRecord]) -> PopularItem {
    let tally = tally_line_items(records);
    match tally.top() {
        Some((name, quantity)) => PopularItem {
            name: name.to_string(),
            quantity,
        },
        None => PopularItem::no_data(),
    }
}

pub fn summarize(records: &[OrderRecord]) -> OrderSummary {
    OrderSummary {
        count: count_open_and_completed(records),
        total: sum_totals(records),
        popular: most_popular_item(records),
    }
}

fn tally_line_items(records: &[OrderRecord]) -> ItemTally {
    records
        .iter()
        .flat_map(|r| r.line_items.iter())
        .map(|item| (item.name.as_str(), item.quantity))
        .collect()
}
