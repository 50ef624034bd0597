use chrono::{Local, NaiveDate};

use crate::core::{format_short_date, PdfConfig};
use crate::models::{text_or, ShipmentRecord};

const TITLE: &str = "AIR WAYBILL (AWB)";
const FOOTER: &str = "This is a system-generated AWB bill.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Texto posicionado en coordenadas absolutas (mm, origen arriba a la
/// izquierda). `y` es la línea base.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub weight: FontWeight,
    pub align: Align,
    pub gray: u8,
}

/// Guía aérea de una sola página, lista para serializar.
#[derive(Debug, Clone)]
pub struct AwbDocument {
    config: PdfConfig,
    ops: Vec<TextOp>,
}

impl AwbDocument {
    pub fn config(&self) -> &PdfConfig {
        &self.config
    }

    pub fn ops(&self) -> &[TextOp] {
        &self.ops
    }

    pub fn page_width(&self) -> f32 {
        self.config.page_dimensions().0
    }

    pub fn page_height(&self) -> f32 {
        self.config.page_dimensions().1
    }

    /// Busca la primera operación cuyo texto empieza con `prefix`.
    pub fn find(&self, prefix: &str) -> Option<&TextOp> {
        self.ops.iter().find(|op| op.text.starts_with(prefix))
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.ops.iter().any(|op| op.text == text)
    }
}

/// Estado de pluma estilo API de dibujo imperativa.
struct Canvas {
    ops: Vec<TextOp>,
    size: f32,
    weight: FontWeight,
    gray: u8,
}

impl Canvas {
    fn new() -> Self {
        Canvas {
            ops: Vec::new(),
            size: 11.0,
            weight: FontWeight::Normal,
            gray: 0,
        }
    }

    fn set_font_size(&mut self, size: f32) -> &mut Self {
        self.size = size;
        self
    }

    fn set_font_weight(&mut self, weight: FontWeight) -> &mut Self {
        self.weight = weight;
        self
    }

    fn set_text_gray(&mut self, gray: u8) -> &mut Self {
        self.gray = gray;
        self
    }

    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, align: Align) -> &mut Self {
        self.ops.push(TextOp {
            text: text.into(),
            x,
            y,
            size: self.size,
            weight: self.weight,
            align,
            gray: self.gray,
        });
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AwbBillBuilder;

impl AwbBillBuilder {
    pub fn new() -> Self {
        AwbBillBuilder
    }

    /// Construye la guía usando la fecha de hoy cuando el registro no trae fecha.
    pub fn build(&self, record: &ShipmentRecord) -> AwbDocument {
        self.build_on(record, Local::now().date_naive())
    }

    pub fn build_on(&self, record: &ShipmentRecord, today: NaiveDate) -> AwbDocument {
        let config = PdfConfig::builder()
            .page_size(record.pdf_size.unwrap_or_default().into())
            .build();

        let (page_width, page_height) = config.page_dimensions();
        let margin = config.margin.clone();
        let right = page_width - margin.right;
        let mut canvas = Canvas::new();
        let mut y = margin.top;

        canvas
            .set_font_size(18.0)
            .set_font_weight(FontWeight::Bold)
            .text(TITLE, page_width / 2.0, y, Align::Center);
        y += 12.0;

        canvas.set_font_size(11.0).set_font_weight(FontWeight::Normal);
        canvas
            .text(
                format!("AWB Number: {}", text_or(&record.awb_number, "N/A")),
                margin.left,
                y,
                Align::Left,
            )
            .text(
                format!("Order ID: {}", text_or(&record.order_id, "N/A")),
                right,
                y,
                Align::Right,
            );
        y += 8.0;

        let date = text_or(&record.date, &format_short_date(today));
        canvas
            .text(
                format!("Courier: {}", text_or(&record.courier, "N/A")),
                margin.left,
                y,
                Align::Left,
            )
            .text(format!("Date: {}", date), right, y, Align::Right);
        y += 8.0;

        let blocks = [
            (
                "Sender Details:",
                [
                    format!("Name: {}", text_or(&record.sender_name, "")),
                    format!("Address: {}", text_or(&record.sender_address, "")),
                    format!("Phone: {}", text_or(&record.sender_phone, "")),
                ],
            ),
            (
                "Receiver Details:",
                [
                    format!("Name: {}", text_or(&record.receiver_name, "")),
                    format!("Address: {}", text_or(&record.receiver_address, "")),
                    format!("Phone: {}", text_or(&record.receiver_phone, "")),
                ],
            ),
            (
                "Shipment Details:",
                [
                    format!("Weight: {} kg", text_or(&record.weight, "")),
                    format!("Dimensions: {}", text_or(&record.dimensions, "")),
                    format!("Contents: {}", text_or(&record.contents, "")),
                ],
            ),
        ];

        for (heading, lines) in blocks {
            canvas
                .set_font_weight(FontWeight::Bold)
                .text(heading, margin.left, y, Align::Left)
                .set_font_weight(FontWeight::Normal);
            y += 6.0;

            for (i, line) in lines.into_iter().enumerate() {
                canvas.text(line, margin.left, y + 6.0 * i as f32, Align::Left);
            }
            y += 18.0;
        }

        canvas
            .set_font_size(9.0)
            .set_text_gray(120)
            .text(FOOTER, page_width / 2.0, page_height - 10.0, Align::Center);

        AwbDocument {
            config,
            ops: canvas.ops,
        }
    }
}

/// Construye la guía aérea de un envío.
pub fn generate_awb_bill(record: &ShipmentRecord) -> AwbDocument {
    AwbBillBuilder::new().build(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PdfSize, Scalar};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn full_record() -> ShipmentRecord {
        ShipmentRecord {
            awb_number: Some(Scalar::from("AWB-778812")),
            order_id: Some(Scalar::from("ORD-42")),
            courier: Some(Scalar::from("BlueDart")),
            date: Some(Scalar::from("2026-10-01")),
            sender_name: Some(Scalar::from("Qui Warehouse")),
            sender_address: Some(Scalar::from("Al Quoz, Dubai")),
            sender_phone: Some(Scalar::from("+971 4 000 0000")),
            receiver_name: Some(Scalar::from("Asha Rao")),
            receiver_address: Some(Scalar::from("12 MG Road, Bengaluru")),
            receiver_phone: Some(Scalar::from(9876543210.0)),
            weight: Some(Scalar::from(1.5)),
            dimensions: Some(Scalar::from("30x20x10 cm")),
            contents: Some(Scalar::from("Ceramic mugs")),
            pdf_size: None,
        }
    }

    #[test]
    fn full_record_places_every_field() {
        let doc = AwbBillBuilder::new().build_on(&full_record(), today());

        for expected in [
            "AWB Number: AWB-778812",
            "Order ID: ORD-42",
            "Courier: BlueDart",
            "Date: 2026-10-01",
            "Name: Qui Warehouse",
            "Address: Al Quoz, Dubai",
            "Phone: +971 4 000 0000",
            "Name: Asha Rao",
            "Address: 12 MG Road, Bengaluru",
            "Phone: 9876543210",
            "Weight: 1.5 kg",
            "Dimensions: 30x20x10 cm",
            "Contents: Ceramic mugs",
        ] {
            assert!(doc.contains_text(expected), "missing {expected}");
        }
    }

    #[test]
    fn empty_record_uses_defaults() {
        let doc = AwbBillBuilder::new().build_on(&ShipmentRecord::default(), today());

        for expected in [
            "AWB Number: N/A",
            "Order ID: N/A",
            "Courier: N/A",
            "Date: 19/10/2026",
            "Name: ",
            "Address: ",
            "Phone: ",
            "Weight:  kg",
            "Dimensions: ",
            "Contents: ",
        ] {
            assert!(doc.contains_text(expected), "missing {expected}");
        }
    }

    #[test]
    fn layout_follows_fixed_cursor() {
        let doc = AwbBillBuilder::new().build_on(&full_record(), today());

        let title = doc.find("AIR WAYBILL").unwrap();
        assert_eq!((title.x, title.y, title.size), (105.0, 15.0, 18.0));
        assert_eq!(title.align, Align::Center);
        assert_eq!(title.weight, FontWeight::Bold);

        let order = doc.find("Order ID:").unwrap();
        assert_eq!((order.x, order.y), (195.0, 27.0));
        assert_eq!(order.align, Align::Right);

        assert_eq!(doc.find("Courier:").unwrap().y, 35.0);
        assert_eq!(doc.find("Sender Details:").unwrap().y, 43.0);
        assert_eq!(doc.find("Receiver Details:").unwrap().y, 67.0);
        assert_eq!(doc.find("Shipment Details:").unwrap().y, 91.0);
        assert_eq!(doc.find("Contents:").unwrap().y, 109.0);

        let footer = doc.find("This is a system-generated").unwrap();
        assert_eq!((footer.y, footer.size, footer.gray), (287.0, 9.0, 120));
    }

    #[test]
    fn a5_changes_page_geometry() {
        let record = ShipmentRecord {
            pdf_size: Some(PdfSize::A5),
            ..ShipmentRecord::default()
        };
        let doc = AwbBillBuilder::new().build_on(&record, today());

        assert_eq!((doc.page_width(), doc.page_height()), (148.0, 210.0));
        assert_eq!(doc.find("Order ID:").unwrap().x, 133.0);
        assert_eq!(doc.find("This is a system-generated").unwrap().y, 200.0);
    }
}
