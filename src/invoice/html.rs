use minijinja::{context, Environment};
use once_cell::sync::OnceCell;

use super::document::InvoiceDocument;
use crate::core::DocumentResult;

const INVOICE_TEMPLATE: &str = "invoice.html";
const PRINT_TEMPLATE: &str = "print.html";

static ENVIRONMENT: OnceCell<Environment<'static>> = OnceCell::new();

fn environment() -> DocumentResult<&'static Environment<'static>> {
    ENVIRONMENT.get_or_try_init(|| -> DocumentResult<Environment<'static>> {
        let mut env = Environment::new();
        env.add_template(INVOICE_TEMPLATE, include_str!("templates/invoice.html"))?;
        env.add_template(PRINT_TEMPLATE, include_str!("templates/print.html"))?;
        Ok(env)
    })
}

pub fn render_invoice(document: &InvoiceDocument) -> DocumentResult<String> {
    let template = environment()?.get_template(INVOICE_TEMPLATE)?;
    Ok(template.render(context! { doc => document })?)
}

/// Página que muestra un PDF embebido y abre el diálogo de impresión.
pub fn render_print_page(title: &str, data_url: &str) -> DocumentResult<String> {
    let template = environment()?.get_template(PRINT_TEMPLATE)?;
    Ok(template.render(context! { title => title, data_url => data_url })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::{InvoiceBuilder, InvoiceConfig};
    use crate::models::{OrderItem, OrderRecord, Product, Scalar};
    use chrono::NaiveDate;

    fn render(order: &OrderRecord) -> String {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        InvoiceBuilder::new(InvoiceConfig::default())
            .render_html_on(order, today)
            .unwrap()
    }

    #[test]
    fn renders_complete_document() {
        let html = render(&OrderRecord {
            id: Some(Scalar::from("abcdefghij")),
            ..OrderRecord::default()
        });

        assert!(html.trim_start().starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Invoice #ABCDEFGH</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<h1>Qui</h1>"));
        assert!(html.contains("<p>Dubai, UAE, </p>"));
        assert!(html.contains("<p>#ABCDEFGH</p>"));
        assert!(html.contains("<strong>Customer</strong>"));
        assert!(html.contains("Phone: N&#x2f;A"));
        assert!(html.contains("We hope you love your purchase!"));
        assert!(!html.contains("TRACKING DETAILS"));
    }

    #[test]
    fn escapes_user_supplied_text() {
        let html = render(&OrderRecord {
            order_items: Some(vec![OrderItem {
                product: Some(Product {
                    name: Some(Scalar::from("<b>Tea & Cups</b>")),
                }),
                price: Some(1.0),
                quantity: Some(1.0),
            }]),
            ..OrderRecord::default()
        });

        assert!(html.contains("&lt;b&gt;Tea &amp; Cups&lt;&#x2f;b&gt;"));
        assert!(!html.contains("<b>Tea"));
    }

    #[test]
    fn print_page_embeds_data_url() {
        let page = render_print_page("Invoice #ABC", "data:application/pdf;base64,JVBERi0=").unwrap();

        assert!(page.contains("src=\"data:application&#x2f;pdf;base64,JVBERi0=\""));
        assert!(page.contains("print()"));
        assert!(page.contains("<title>Invoice #ABC</title>"));
    }
}
