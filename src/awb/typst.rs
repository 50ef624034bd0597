use super::builder::{Align, AwbDocument, FontWeight, TextOp};
use crate::core::PT_TO_MM;

/// Fracción del tamaño de fuente entre el borde superior y la línea base.
const ASCENT: f32 = 0.75;

/// Escapa un texto para usarlo como literal de cadena Typst.
pub fn escape_typst_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

impl AwbDocument {
    /// Serializa la guía a código Typst con posicionamiento absoluto.
    pub fn to_typst(&self) -> String {
        let mut typst = self.config().to_typst_header();
        typst.push_str("\n\n");

        for op in self.ops() {
            typst.push_str(&self.place(op));
            typst.push('\n');
        }

        typst
    }

    fn place(&self, op: &TextOp) -> String {
        let (anchor, dx) = match op.align {
            Align::Left => ("left", op.x),
            Align::Center => ("center", op.x - self.page_width() / 2.0),
            Align::Right => ("right", op.x - self.page_width()),
        };
        let dy = op.y - op.size * ASCENT * PT_TO_MM;

        let weight = match op.weight {
            FontWeight::Normal => "regular",
            FontWeight::Bold => "bold",
        };

        format!(
            "#place(top + {}, dx: {:.2}mm, dy: {:.2}mm, text(size: {}pt, weight: \"{}\", fill: rgb({}, {}, {}), \"{}\"))",
            anchor,
            dx,
            dy,
            op.size,
            weight,
            op.gray,
            op.gray,
            op.gray,
            escape_typst_string(&op.text)
        )
    }
}
