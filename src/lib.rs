pub mod actions;
pub mod api;
pub mod awb;
pub mod core;
pub mod generators;
pub mod invoice;
pub mod models;

// Re-export commonly used types
pub use models::{OrderRecord, ShipmentRecord};

pub use actions::{download_awb_bill, download_invoice, print_invoice, Download, PrintView};
pub use awb::{generate_awb_bill, AwbBillBuilder, AwbDocument};
pub use crate::core::{format_currency, DocumentError, DocumentResult};
pub use invoice::{generate_invoice_html, InvoiceBuilder, InvoiceConfig};
