use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Scalar;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRecord {
    pub id: Option<Scalar>,
    pub created_at: Option<Timestamp>,
    pub payment_method: Option<String>,
    pub is_paid: Option<bool>,
    pub status: Option<String>,
    pub order_items: Option<Vec<OrderItem>>,
    pub address: Option<OrderAddress>,
    pub shipping_fee: Option<f64>,
    pub shipping: Option<f64>,
    pub is_coupon_used: Option<bool>,
    pub coupon: Option<Coupon>,
    pub tracking_id: Option<Scalar>,
    pub tracking_url: Option<Scalar>,
    pub courier: Option<Scalar>,
    pub total: Option<f64>,
}

impl OrderRecord {
    pub fn items(&self) -> &[OrderItem] {
        self.order_items.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderItem {
    pub product: Option<Product>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
}

impl OrderItem {
    pub fn price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    pub fn quantity(&self) -> f64 {
        self.quantity.unwrap_or(0.0)
    }

    pub fn line_total(&self) -> f64 {
        self.price() * self.quantity()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderAddress {
    pub name: Option<Scalar>,
    pub street: Option<Scalar>,
    pub city: Option<Scalar>,
    pub state: Option<Scalar>,
    pub zip: Option<Scalar>,
    pub country: Option<Scalar>,
    pub phone: Option<Scalar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiscountType {
    Percentage,
    Flat(String),
}

impl From<String> for DiscountType {
    fn from(value: String) -> Self {
        if value == "percentage" {
            DiscountType::Percentage
        } else {
            DiscountType::Flat(value)
        }
    }
}

impl From<DiscountType> for String {
    fn from(value: DiscountType) -> Self {
        match value {
            DiscountType::Percentage => "percentage".to_string(),
            DiscountType::Flat(other) => other,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Coupon {
    pub discount_type: Option<DiscountType>,
    pub discount: Option<f64>,
}

impl Coupon {
    /// Monto descontado sobre el subtotal dado.
    pub fn amount_for(&self, subtotal: f64) -> f64 {
        let discount = self.discount.unwrap_or(0.0);
        match self.discount_type {
            Some(DiscountType::Percentage) => (discount / 100.0) * subtotal,
            _ => discount,
        }
    }
}

/// Marca de tiempo en milisegundos desde época o como texto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
}

impl Timestamp {
    pub fn is_present(&self) -> bool {
        match self {
            Timestamp::Millis(ms) => *ms != 0,
            Timestamp::FractionalMillis(ms) => *ms != 0.0 && !ms.is_nan(),
            Timestamp::Text(text) => !text.is_empty(),
        }
    }

    /// Fecha local de la marca, o `None` si el texto no es una fecha válida.
    pub fn local_date(&self) -> Option<NaiveDate> {
        match self {
            Timestamp::Millis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms)
                .map(|dt| dt.with_timezone(&Local).date_naive()),
            Timestamp::FractionalMillis(ms) if ms.is_finite() => {
                Timestamp::Millis(ms.trunc() as i64).local_date()
            }
            Timestamp::FractionalMillis(_) => None,
            Timestamp::Text(text) => parse_date_text(text),
        }
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.with_timezone(&Local).date_naive());
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }

    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|datetime| datetime.date())
}
