use std::env;

use crate::core::{CurrencyFormat, NumberFormat};

/// Datos de la empresa y textos configurables de la factura.
///
/// Los valores se resuelven en el borde de la aplicación (ver
/// [`InvoiceConfig::from_env`]); los constructores de documentos solo
/// reciben la estructura ya resuelta.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceConfig {
    pub company_name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub contact: String,
    pub currency: CurrencyFormat,
    pub closing_message: String,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        InvoiceConfig {
            company_name: "Qui".to_string(),
            address_line1: "Dubai, UAE".to_string(),
            address_line2: String::new(),
            contact: "Email: support@qui.ae".to_string(),
            currency: CurrencyFormat::default(),
            closing_message: "We hope you love your purchase!".to_string(),
        }
    }
}

impl InvoiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resuelve la configuración con una función de búsqueda arbitraria.
    /// Las variables vacías cuentan como ausentes.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = InvoiceConfig::default();
        let get = |key: &str, fallback: String| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
        };

        let number_format = lookup("INVOICE_LOCALE")
            .filter(|value| !value.is_empty())
            .map(|locale| NumberFormat::from_locale(&locale))
            .unwrap_or(default.currency.number_format);

        InvoiceConfig {
            company_name: get("INVOICE_COMPANY_NAME", default.company_name),
            address_line1: get("INVOICE_ADDRESS_LINE1", default.address_line1),
            address_line2: get("INVOICE_ADDRESS_LINE2", default.address_line2),
            contact: get("INVOICE_CONTACT", default.contact),
            currency: CurrencyFormat::new(
                get("CURRENCY_SYMBOL", default.currency.symbol),
                number_format,
            ),
            closing_message: get("INVOICE_QUOTE2", default.closing_message),
        }
    }

    pub fn format_currency(&self, amount: f64) -> String {
        self.currency.format(amount)
    }
}
