pub mod builder;
pub mod config;
pub mod document;
pub mod html;
pub mod summary;

pub use builder::{generate_invoice_html, InvoiceBuilder};
pub use config::InvoiceConfig;
pub use document::InvoiceDocument;
pub use summary::{order_id_short, InvoiceSummary};
