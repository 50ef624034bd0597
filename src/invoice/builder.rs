use chrono::{Local, NaiveDate};

use super::config::InvoiceConfig;
use super::document::*;
use super::html;
use super::summary::InvoiceSummary;
use crate::core::DocumentResult;
use crate::models::OrderRecord;

pub struct InvoiceBuilder {
    config: InvoiceConfig,
}

impl InvoiceBuilder {
    pub fn new(config: InvoiceConfig) -> Self {
        InvoiceBuilder { config }
    }

    pub fn build(&self, order: &OrderRecord) -> InvoiceDocument {
        self.build_on(order, Local::now().date_naive())
    }

    /// Construye el árbol con `today` como fecha para órdenes sin `createdAt`.
    pub fn build_on(&self, order: &OrderRecord, today: NaiveDate) -> InvoiceDocument {
        let summary = InvoiceSummary::from_order(order, today);
        self.document_from(&summary)
    }

    pub fn render_html(&self, order: &OrderRecord) -> DocumentResult<String> {
        html::render_invoice(&self.build(order))
    }

    pub fn render_html_on(&self, order: &OrderRecord, today: NaiveDate) -> DocumentResult<String> {
        html::render_invoice(&self.build_on(order, today))
    }

    fn document_from(&self, summary: &InvoiceSummary) -> InvoiceDocument {
        let config = &self.config;
        let money = |amount: f64| config.format_currency(amount);

        let header = Header {
            company_name: config.company_name.clone(),
            address_line: format!("{}, {}", config.address_line1, config.address_line2),
            contact: config.contact.clone(),
            invoice_number: format!("#{}", summary.order_id_short),
        };

        let meta = [
            vec![
                MetaItem::new("Invoice Date:", summary.invoice_date.clone()),
                MetaItem::new("Payment Method:", summary.payment_method.clone()),
            ],
            vec![
                MetaItem::new("Payment Status:", if summary.paid { "PAID" } else { "UNPAID" }),
                MetaItem::new("Order Status:", summary.status.clone()),
            ],
        ];

        let customer = &summary.customer;
        let bill_to = BillTo {
            name: customer.name.clone(),
            lines: vec![
                customer.street.clone(),
                customer.city_line.clone(),
                customer.country.clone(),
            ],
            phone: customer.phone.clone(),
        };

        let tracking = summary.tracking.as_ref().map(|info| TrackingSection {
            tracking_id: info.tracking_id.clone(),
            courier: info.courier.clone(),
            link: info.tracking_url.clone(),
        });

        let mut table = ItemTable::new(vec![
            column("#", Some(40)),
            column("Product Name", None),
            column("Qty", Some(60)),
            column("Price", Some(90)),
            column("Total", Some(100)),
        ]);
        for item in &summary.items {
            table.add_row(vec![
                item.position.to_string(),
                item.name.clone(),
                item.quantity.to_string(),
                money(item.price),
                money(item.line_total),
            ]);
        }

        let mut totals = vec![
            total("Subtotal:", money(summary.subtotal), TotalKind::Regular),
            total("Shipping:", money(summary.shipping_fee), TotalKind::Regular),
        ];
        if summary.discount > 0.0 {
            totals.push(total(
                "Discount:",
                format!("-{}", money(summary.discount)),
                TotalKind::Discount,
            ));
        }
        totals.push(total("TOTAL:", money(summary.total), TotalKind::Grand));

        InvoiceDocument {
            title: format!("Invoice #{}", summary.order_id_short),
            header,
            meta,
            bill_to,
            tracking,
            table,
            totals,
            footer: config.closing_message.clone(),
        }
    }
}

impl Default for InvoiceBuilder {
    fn default() -> Self {
        Self::new(InvoiceConfig::default())
    }
}

fn column(label: &str, width_px: Option<u32>) -> Column {
    Column {
        label: label.to_string(),
        width_px,
    }
}

fn total(label: &str, value: String, kind: TotalKind) -> TotalRow {
    TotalRow {
        label: label.to_string(),
        value,
        kind,
    }
}

/// Genera el HTML completo de la factura de una orden.
pub fn generate_invoice_html(order: &OrderRecord, config: &InvoiceConfig) -> DocumentResult<String> {
    InvoiceBuilder::new(config.clone()).render_html(order)
}
