//! Wire types shared by the HTTP client, the screen, and the stub service.
//!
//! These mirror the JSON bodies of the storefront API:
//! `GET /boxes`, `POST /orders`, `GET /orders`, and `GET /health`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A purchasable gift box. Read-only on the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GiftBox {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Price in rubles.
    #[serde(deserialize_with = "price_from_number_or_string")]
    pub price: f64,
    pub image_url: String,
    pub created_at: String,
}

impl GiftBox {
    /// Price as shown on cards, e.g. `"1500 ₽"`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("{} ₽", self.price)
    }
}

/// Order form contents, posted verbatim as the `POST /orders` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderForm {
    pub box_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

/// A stored order as echoed back by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    pub box_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub created_at: String,
}

/// Success body of `POST /orders`. Optional on the client side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub order: Option<OrderRecord>,
}

/// Row of `GET /orders`: an order joined with its box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    #[serde(flatten)]
    pub order: OrderRecord,
    #[serde(default)]
    pub box_title: Option<String>,
    #[serde(default, deserialize_with = "optional_price")]
    pub box_price: Option<f64>,
}

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// `numeric` columns arrive as strings from some backends.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid price: {s:?}"))),
        }
    }
}

fn price_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    RawPrice::deserialize(deserializer)?.into_f64()
}

fn optional_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawPrice>::deserialize(deserializer)?
        .map(RawPrice::into_f64)
        .transpose()
}
