//! Acciones de descarga e impresión: construyen el documento y lo entregan
//! al colaborador de renderizado correspondiente.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, IntCounterVec};

use crate::awb::AwbBillBuilder;
use crate::core::DocumentResult;
use crate::generators::{ConversionOptions, HtmlToPdf, TypstRenderer};
use crate::invoice::{html, order_id_short, InvoiceBuilder, InvoiceConfig};
use crate::models::{present, OrderRecord, ShipmentRecord};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

static DOCUMENTS_GENERATED: Lazy<Option<IntCounterVec>> = Lazy::new(|| {
    register_int_counter_vec!(
        "documents_generated_total",
        "Documentos generados por tipo",
        &["kind"]
    )
    .ok()
});

fn record_generated(kind: &str) {
    if let Some(counter) = DOCUMENTS_GENERATED.as_ref() {
        counter.with_label_values(&[kind]).inc();
    }
}

/// Documento listo para entregarse como descarga.
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Resultado de la acción de impresión: el PDF como data URL más la
/// página que lo muestra e invoca el diálogo de impresión.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintView {
    pub title: String,
    pub data_url: String,
}

impl PrintView {
    pub fn from_pdf(title: impl Into<String>, pdf: &[u8]) -> Self {
        PrintView {
            title: title.into(),
            data_url: format!("data:{};base64,{}", PDF_CONTENT_TYPE, BASE64.encode(pdf)),
        }
    }

    pub fn page(&self) -> DocumentResult<String> {
        html::render_print_page(&self.title, &self.data_url)
    }
}

/// `AWB_{awbNumber|orderId|bill}.pdf`
pub fn awb_filename(record: &ShipmentRecord) -> String {
    let stem = present(&record.awb_number)
        .or_else(|| present(&record.order_id))
        .unwrap_or_else(|| "bill".to_string());
    format!("AWB_{}.pdf", stem)
}

/// `Invoice_{primeros 8 caracteres del id en mayúsculas}.pdf`
pub fn invoice_filename(order: &OrderRecord) -> String {
    format!("Invoice_{}.pdf", order_id_short(order))
}

pub async fn download_awb_bill(
    renderer: &dyn TypstRenderer,
    record: &ShipmentRecord,
) -> DocumentResult<Download> {
    let filename = awb_filename(record);
    tracing::info!("Generating AWB bill {}", filename);

    let document = AwbBillBuilder::new().build(record);
    let bytes = renderer.render(&document.to_typst()).await?;
    record_generated("awb");

    Ok(Download {
        filename,
        content_type: PDF_CONTENT_TYPE,
        bytes,
    })
}

pub async fn download_invoice(
    converter: &dyn HtmlToPdf,
    config: &InvoiceConfig,
    order: &OrderRecord,
) -> DocumentResult<Download> {
    let filename = invoice_filename(order);
    tracing::info!("Generating invoice {}", filename);

    let html = InvoiceBuilder::new(config.clone()).render_html(order)?;
    let bytes = converter.convert(&html, &ConversionOptions::default()).await?;
    record_generated("invoice");

    Ok(Download {
        filename,
        content_type: PDF_CONTENT_TYPE,
        bytes,
    })
}

/// Renderiza la factura, espera la conversión y devuelve la vista de
/// impresión. Un fallo de conversión se devuelve como error.
pub async fn print_invoice(
    converter: &dyn HtmlToPdf,
    config: &InvoiceConfig,
    order: &OrderRecord,
) -> DocumentResult<PrintView> {
    let builder = InvoiceBuilder::new(config.clone());
    let document = builder.build(order);
    let markup = html::render_invoice(&document)?;

    let pdf = converter
        .convert(&markup, &ConversionOptions::default())
        .await
        .map_err(|e| {
            tracing::error!("Invoice print conversion failed: {}", e);
            e
        })?;
    record_generated("invoice_print");

    Ok(PrintView::from_pdf(document.title, &pdf))
}
