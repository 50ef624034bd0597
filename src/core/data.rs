use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Estilo de agrupación de miles y separador decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    English,    // 1,234,567.89
    European,   // 1.234.567,89
    Indian,     // 12,34,567.89
}

impl NumberFormat {
    /// Resuelve el estilo a partir de una etiqueta de idioma ("en-IN", "de-DE").
    pub fn from_locale(locale: &str) -> Self {
        let mut parts = locale.split(&['-', '_'][..]);
        let language = parts.next().unwrap_or("").to_ascii_lowercase();
        let region = parts.next().unwrap_or("").to_ascii_uppercase();

        if region == "IN" {
            return NumberFormat::Indian;
        }

        match language.as_str() {
            "de" | "es" | "it" | "pt" | "nl" | "id" | "tr" | "da" => NumberFormat::European,
            _ => NumberFormat::English,
        }
    }

    fn separators(&self) -> (char, char) {
        match self {
            NumberFormat::English | NumberFormat::Indian => (',', '.'),
            NumberFormat::European => ('.', ','),
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::Indian
    }
}

/// Símbolo de moneda más estilo numérico.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub number_format: NumberFormat,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: "₹".to_string(),
            number_format: NumberFormat::Indian,
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, number_format: NumberFormat) -> Self {
        CurrencyFormat {
            symbol: symbol.into(),
            number_format,
        }
    }

    pub fn format(&self, amount: f64) -> String {
        format!(
            "{}{}",
            self.symbol,
            format_number_with_separators(amount, 2, self.number_format)
        )
    }
}

/// Formatea un monto con el símbolo y estilo por defecto (₹, en-IN).
pub fn format_currency(amount: f64) -> String {
    CurrencyFormat::default().format(amount)
}

pub fn format_number_with_separators(num: f64, decimals: usize, style: NumberFormat) -> String {
    if num.is_nan() {
        return "NaN".to_string();
    }
    if num.is_infinite() {
        return if num > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let (group_sep, decimal_sep) = style.separators();
    let formatted = format!("{:.decimals$}", num.abs(), decimals = decimals);
    let (integer, decimal) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    if num < 0.0 {
        result.push('-');
    }
    result.push_str(&group_integer(integer, group_sep, style));
    if let Some(decimal) = decimal {
        result.push(decimal_sep);
        result.push_str(decimal);
    }
    result
}

fn group_integer(integer: &str, sep: char, style: NumberFormat) -> String {
    let digits: Vec<char> = integer.chars().collect();
    if digits.len() <= 3 {
        return integer.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_group = match style {
        NumberFormat::Indian => 2,
        _ => 3,
    };

    let mut groups: Vec<String> = head
        .rchunks(head_group)
        .map(|chunk| chunk.iter().collect())
        .collect();
    groups.reverse();
    groups.push(tail.iter().collect());

    groups.join(&sep.to_string())
}

/// Fecha corta día/mes/año sin ceros a la izquierda ("9/1/2026").
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_currency_matches_indian_locale() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(1234.5), "₹1,234.50");
        assert_eq!(format_currency(1234567.0), "₹12,34,567.00");
        assert_eq!(format_currency(999.999), "₹1,000.00");
    }

    #[test]
    fn english_and_european_grouping() {
        assert_eq!(
            format_number_with_separators(1234567.891, 2, NumberFormat::English),
            "1,234,567.89"
        );
        assert_eq!(
            format_number_with_separators(1234567.891, 2, NumberFormat::European),
            "1.234.567,89"
        );
    }

    #[test]
    fn negative_and_non_finite_amounts() {
        assert_eq!(format_currency(-5.0), "₹-5.00");
        assert_eq!(format_currency(-1234.5), "₹-1,234.50");
        assert_eq!(format_currency(f64::NAN), "₹NaN");
    }

    #[test]
    fn custom_symbol() {
        let aed = CurrencyFormat::new("AED ", NumberFormat::English);
        assert_eq!(aed.format(1500.0), "AED 1,500.00");
    }

    #[test]
    fn locale_resolution() {
        assert_eq!(NumberFormat::from_locale("en-IN"), NumberFormat::Indian);
        assert_eq!(NumberFormat::from_locale("en-US"), NumberFormat::English);
        assert_eq!(NumberFormat::from_locale("de-DE"), NumberFormat::European);
        assert_eq!(NumberFormat::from_locale(""), NumberFormat::English);
    }

    #[test]
    fn short_date_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        assert_eq!(format_short_date(date), "9/1/2026");
    }
}
