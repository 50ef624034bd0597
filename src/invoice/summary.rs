use chrono::NaiveDate;

use crate::core::format_short_date;
use crate::models::{present, text_or, OrderRecord, Timestamp};

/// Todos los valores por defecto y derivados de una orden, resueltos una
/// sola vez antes de construir el documento.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSummary {
    pub order_id_short: String,
    pub invoice_date: String,
    pub payment_method: String,
    pub paid: bool,
    pub status: String,
    pub customer: CustomerLines,
    pub tracking: Option<TrackingInfo>,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub shipping_fee: f64,
    pub discount: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerLines {
    pub name: String,
    pub street: String,
    pub city_line: String,
    pub country: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackingInfo {
    pub tracking_id: String,
    pub courier: Option<String>,
    pub tracking_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub position: usize,
    pub name: String,
    pub quantity: f64,
    pub price: f64,
    pub line_total: f64,
}

impl InvoiceSummary {
    pub fn from_order(order: &OrderRecord, today: NaiveDate) -> Self {
        let subtotal = subtotal(order);
        let shipping_fee = shipping_fee(order);
        let discount = discount(order, subtotal);

        InvoiceSummary {
            order_id_short: order_id_short(order),
            invoice_date: invoice_date(order.created_at.as_ref(), today),
            payment_method: order.payment_method.as_deref().unwrap_or("").to_uppercase(),
            paid: is_paid(order),
            status: order.status.as_deref().unwrap_or("").replace('_', " ").to_uppercase(),
            customer: customer_lines(order),
            tracking: tracking(order),
            items: line_items(order),
            subtotal,
            shipping_fee,
            discount,
            total: order
                .total
                .unwrap_or(subtotal + shipping_fee - discount),
        }
    }
}

/// Primeros 8 caracteres del id, en mayúsculas.
pub fn order_id_short(order: &OrderRecord) -> String {
    text_or(&order.id, "")
        .chars()
        .take(8)
        .collect::<String>()
        .to_uppercase()
}

/// Un `isPaid` explícito siempre gana; si falta, solo los pagos con
/// Stripe se consideran pagados.
pub fn is_paid(order: &OrderRecord) -> bool {
    let stripe = order
        .payment_method
        .as_deref()
        .unwrap_or("")
        .to_uppercase()
        == "STRIPE";

    order.is_paid.unwrap_or(stripe)
}

pub fn subtotal(order: &OrderRecord) -> f64 {
    order.items().iter().map(|item| item.line_total()).sum()
}

pub fn shipping_fee(order: &OrderRecord) -> f64 {
    order.shipping_fee.or(order.shipping).unwrap_or(0.0)
}

pub fn discount(order: &OrderRecord, subtotal: f64) -> f64 {
    match (&order.coupon, order.is_coupon_used) {
        (Some(coupon), Some(true)) => coupon.amount_for(subtotal),
        _ => 0.0,
    }
}

fn invoice_date(created_at: Option<&Timestamp>, today: NaiveDate) -> String {
    match created_at.filter(|ts| ts.is_present()) {
        None => format_short_date(today),
        Some(ts) => ts
            .local_date()
            .map(format_short_date)
            .unwrap_or_else(|| "Invalid Date".to_string()),
    }
}

fn customer_lines(order: &OrderRecord) -> CustomerLines {
    let address = order.address.clone().unwrap_or_default();

    CustomerLines {
        name: text_or(&address.name, "Customer"),
        street: text_or(&address.street, ""),
        city_line: format!(
            "{}, {} - {}",
            text_or(&address.city, ""),
            text_or(&address.state, ""),
            text_or(&address.zip, "")
        ),
        country: text_or(&address.country, "India"),
        phone: text_or(&address.phone, "N/A"),
    }
}

fn tracking(order: &OrderRecord) -> Option<TrackingInfo> {
    present(&order.tracking_id).map(|tracking_id| TrackingInfo {
        tracking_id,
        courier: present(&order.courier),
        tracking_url: present(&order.tracking_url),
    })
}

fn line_items(order: &OrderRecord) -> Vec<LineItem> {
    order
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| LineItem {
            position: i + 1,
            name: item
                .product
                .as_ref()
                .and_then(|product| present(&product.name))
                .unwrap_or_else(|| "Product".to_string()),
            quantity: item.quantity(),
            price: item.price(),
            line_total: item.line_total(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coupon, DiscountType, OrderItem, Product, Scalar};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn item(price: f64, quantity: f64) -> OrderItem {
        OrderItem {
            product: None,
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    fn sample_order() -> OrderRecord {
        OrderRecord {
            order_items: Some(vec![item(100.0, 2.0), item(50.0, 1.0)]),
            shipping_fee: Some(20.0),
            ..OrderRecord::default()
        }
    }

    #[test]
    fn totals_without_coupon() {
        let summary = InvoiceSummary::from_order(&sample_order(), today());
        assert_eq!(summary.subtotal, 250.0);
        assert_eq!(summary.discount, 0.0);
        assert_eq!(summary.total, 270.0);
    }

    #[test]
    fn percentage_and_flat_coupons() {
        let mut order = sample_order();
        order.is_coupon_used = Some(true);
        order.coupon = Some(Coupon {
            discount_type: Some(DiscountType::Percentage),
            discount: Some(10.0),
        });
        assert_eq!(InvoiceSummary::from_order(&order, today()).discount, 25.0);
        assert_eq!(InvoiceSummary::from_order(&order, today()).total, 245.0);

        order.coupon = Some(Coupon {
            discount_type: Some(DiscountType::Flat("flat".to_string())),
            discount: Some(30.0),
        });
        assert_eq!(InvoiceSummary::from_order(&order, today()).discount, 30.0);
    }

    #[test]
    fn coupon_ignored_unless_used() {
        let mut order = sample_order();
        order.coupon = Some(Coupon {
            discount_type: Some(DiscountType::Percentage),
            discount: Some(10.0),
        });
        assert_eq!(InvoiceSummary::from_order(&order, today()).discount, 0.0);

        order.is_coupon_used = Some(true);
        order.coupon = None;
        assert_eq!(InvoiceSummary::from_order(&order, today()).discount, 0.0);
    }

    #[test]
    fn explicit_total_and_shipping_fallback() {
        let order = OrderRecord {
            order_items: Some(vec![item(100.0, 2.0)]),
            shipping: Some(15.0),
            total: Some(999.0),
            ..OrderRecord::default()
        };
        let summary = InvoiceSummary::from_order(&order, today());
        assert_eq!(summary.shipping_fee, 15.0);
        assert_eq!(summary.total, 999.0);
    }

    #[test]
    fn paid_flag_defaults_by_payment_method() {
        let mut order = OrderRecord {
            payment_method: Some("stripe".to_string()),
            ..OrderRecord::default()
        };
        assert!(is_paid(&order));

        order.is_paid = Some(false);
        assert!(!is_paid(&order));

        order.payment_method = Some("cod".to_string());
        order.is_paid = None;
        assert!(!is_paid(&order));

        order.is_paid = Some(true);
        assert!(is_paid(&order));
    }

    #[test]
    fn short_order_id() {
        let order = OrderRecord {
            id: Some(Scalar::from("abcdefghij")),
            ..OrderRecord::default()
        };
        assert_eq!(order_id_short(&order), "ABCDEFGH");
        assert_eq!(order_id_short(&OrderRecord::default()), "");
    }

    #[test]
    fn defaults_for_missing_fields() {
        let summary = InvoiceSummary::from_order(&OrderRecord::default(), today());

        assert_eq!(summary.invoice_date, "19/10/2026");
        assert_eq!(summary.customer.name, "Customer");
        assert_eq!(summary.customer.city_line, ",  - ");
        assert_eq!(summary.customer.country, "India");
        assert_eq!(summary.customer.phone, "N/A");
        assert_eq!(summary.tracking, None);
        assert!(summary.items.is_empty());
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn status_and_item_rows() {
        let order = OrderRecord {
            status: Some("out_for_delivery".to_string()),
            order_items: Some(vec![
                OrderItem {
                    product: Some(Product {
                        name: Some(Scalar::from("Mug")),
                    }),
                    price: Some(120.0),
                    quantity: Some(3.0),
                },
                OrderItem::default(),
            ]),
            ..OrderRecord::default()
        };
        let summary = InvoiceSummary::from_order(&order, today());

        assert_eq!(summary.status, "OUT FOR DELIVERY");
        assert_eq!(summary.items[0].position, 1);
        assert_eq!(summary.items[0].line_total, 360.0);
        assert_eq!(summary.items[1].name, "Product");
        assert_eq!(summary.items[1].quantity, 0.0);
    }

    #[test]
    fn tracking_lines_are_optional() {
        let order = OrderRecord {
            tracking_id: Some(Scalar::from("TRK123")),
            courier: Some(Scalar::from("")),
            ..OrderRecord::default()
        };
        let tracking = InvoiceSummary::from_order(&order, today()).tracking.unwrap();

        assert_eq!(tracking.tracking_id, "TRK123");
        assert_eq!(tracking.courier, None);
        assert_eq!(tracking.tracking_url, None);
    }

    #[test]
    fn invalid_created_at() {
        let order = OrderRecord {
            created_at: Some(Timestamp::Text("not a date".to_string())),
            ..OrderRecord::default()
        };
        let summary = InvoiceSummary::from_order(&order, today());
        assert_eq!(summary.invoice_date, "Invalid Date");
    }
}
