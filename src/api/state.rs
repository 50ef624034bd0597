use std::sync::Arc;

use crate::generators::{HtmlToPdf, TypstRenderer, WkHtmlToPdf, TypstCli};
use crate::invoice::InvoiceConfig;

#[derive(Clone)]
pub struct ApiState {
    pub typst: Arc<dyn TypstRenderer>,
    pub html_converter: Arc<dyn HtmlToPdf>,
    pub invoice_config: Arc<InvoiceConfig>,
}

impl ApiState {
    pub fn new(
        typst: Arc<dyn TypstRenderer>,
        html_converter: Arc<dyn HtmlToPdf>,
        invoice_config: InvoiceConfig,
    ) -> Self {
        ApiState {
            typst,
            html_converter,
            invoice_config: Arc::new(invoice_config),
        }
    }

    /// Estado con los colaboradores de línea de comandos y la configuración
    /// de factura tomada del entorno.
    pub fn from_env() -> Self {
        Self::new(
            Arc::new(TypstCli::from_env()),
            Arc::new(WkHtmlToPdf::from_env()),
            InvoiceConfig::from_env(),
        )
    }
}
