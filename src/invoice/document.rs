use serde::Serialize;

/// Árbol del documento de factura. Decide qué contenido aparece; el
/// renderizador HTML decide cómo se escribe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDocument {
    pub title: String,
    pub header: Header,
    pub meta: [Vec<MetaItem>; 2],
    pub bill_to: BillTo,
    pub tracking: Option<TrackingSection>,
    pub table: ItemTable,
    pub totals: Vec<TotalRow>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub company_name: String,
    pub address_line: String,
    pub contact: String,
    pub invoice_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaItem {
    pub label: String,
    pub value: String,
}

impl MetaItem {
    pub fn new(label: &str, value: impl Into<String>) -> Self {
        MetaItem {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillTo {
    pub name: String,
    pub lines: Vec<String>,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingSection {
    pub tracking_id: String,
    pub courier: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub label: String,
    pub width_px: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl ItemTable {
    pub fn new(columns: Vec<Column>) -> Self {
        ItemTable {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalKind {
    Regular,
    Discount,
    Grand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalRow {
    pub label: String,
    pub value: String,
    pub kind: TotalKind,
}

impl InvoiceDocument {
    pub fn total_row(&self, label: &str) -> Option<&TotalRow> {
        self.totals.iter().find(|row| row.label == label)
    }

    pub fn meta_value(&self, label: &str) -> Option<&str> {
        self.meta
            .iter()
            .flatten()
            .find(|item| item.label == label)
            .map(|item| item.value.as_str())
    }
}
