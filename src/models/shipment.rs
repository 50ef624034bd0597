use serde::{Deserialize, Serialize};

use super::Scalar;
use crate::core::PageSize;

/// Tamaño de página pedido para la guía aérea. Cualquier valor distinto
/// de "a5" se trata como A4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PdfSize {
    #[default]
    A4,
    A5,
}

impl From<String> for PdfSize {
    fn from(value: String) -> Self {
        if value == "a5" {
            PdfSize::A5
        } else {
            PdfSize::A4
        }
    }
}

impl From<PdfSize> for String {
    fn from(value: PdfSize) -> Self {
        match value {
            PdfSize::A4 => "a4".to_string(),
            PdfSize::A5 => "a5".to_string(),
        }
    }
}

impl From<PdfSize> for PageSize {
    fn from(value: PdfSize) -> Self {
        match value {
            PdfSize::A4 => PageSize::A4,
            PdfSize::A5 => PageSize::A5,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentRecord {
    pub awb_number: Option<Scalar>,
    pub order_id: Option<Scalar>,
    pub courier: Option<Scalar>,
    pub date: Option<Scalar>,

    pub sender_name: Option<Scalar>,
    pub sender_address: Option<Scalar>,
    pub sender_phone: Option<Scalar>,

    pub receiver_name: Option<Scalar>,
    pub receiver_address: Option<Scalar>,
    pub receiver_phone: Option<Scalar>,

    pub weight: Option<Scalar>,
    pub dimensions: Option<Scalar>,
    pub contents: Option<Scalar>,

    pub pdf_size: Option<PdfSize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_with_mixed_types() {
        let record: ShipmentRecord = serde_json::from_str(
            r#"{"awbNumber": "AWB123", "weight": 1.5, "senderPhone": 9876543210, "pdfSize": "a5"}"#,
        )
        .unwrap();

        assert_eq!(record.awb_number, Some(Scalar::from("AWB123")));
        assert_eq!(record.weight, Some(Scalar::from(1.5)));
        assert_eq!(record.sender_phone.unwrap().to_string(), "9876543210");
        assert_eq!(record.pdf_size, Some(PdfSize::A5));
    }

    #[test]
    fn unknown_pdf_size_is_a4() {
        let record: ShipmentRecord = serde_json::from_str(r#"{"pdfSize": "letter"}"#).unwrap();
        assert_eq!(record.pdf_size, Some(PdfSize::A4));

        let record: ShipmentRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.pdf_size, None);
    }
}
