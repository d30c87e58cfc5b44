use serde::{Deserialize, Deserializer};

use pulse_core::{Money, deserialize_null_default, deserialize_quantity};

/// Order state as reported upstream. Anything other than open/completed folds
/// into `Other`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Open,
    Completed,
    #[default]
    #[serde(other)]
    Other,
}

/// One purchased product entry within an order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LineItem {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub name: String,
    /// Upstream sends this as a decimal string; malformed values become 0.
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub quantity: u64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// One order returned by the payments platform search API.
///
/// Transient: built from a single upstream response and dropped once the
/// summary for that request is computed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRecord {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub state: OrderState,
    /// Order total in minor units, if upstream reported one.
    #[serde(default, rename = "total_money", deserialize_with = "deserialize_total_money")]
    pub total_money_amount: Option<Money>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub line_items: Vec<LineItem>,
}

impl OrderRecord {
    pub fn new(id: impl Into<String>, state: OrderState) -> Self {
        Self {
            id: id.into(),
            state,
            total_money_amount: None,
            line_items: Vec::new(),
        }
    }

    pub fn with_total(mut self, minor: i64) -> Self {
        self.total_money_amount = Some(Money::from_minor(minor));
        self
    }

    pub fn with_line_item(mut self, name: impl Into<String>, quantity: u64) -> Self {
        self.line_items.push(LineItem::new(name, quantity));
        self
    }
}

/// `{"amount": 1250, "currency": "USD"}` -> `Some(Money(1250))`.
fn deserialize_total_money<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wire {
        amount: Option<i64>,
    }

    let wire = Option::<Wire>::deserialize(deserializer)?;
    Ok(wire.and_then(|w| w.amount).map(Money::from_minor))
}
