use std::fmt;

/// Milímetros por punto tipográfico.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageSize {
    A4,
    A5,
}

impl PageSize {
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::A5 => (148.0, 210.0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::A5 => "A5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "Portrait"),
            Orientation::Landscape => write!(f, "Landscape"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin::uniform(15.0)
    }
}

impl Margin {
    pub fn uniform(size: f32) -> Self {
        Margin {
            top: size,
            bottom: size,
            left: size,
            right: size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfConfig {
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub margin: Margin,
    pub font_family: String,
}

impl Default for PdfConfig {
    fn default() -> Self {
        PdfConfig {
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            margin: Margin::default(),
            font_family: "Helvetica".to_string(),
        }
    }
}

impl PdfConfig {
    pub fn builder() -> PdfConfigBuilder {
        PdfConfigBuilder::default()
    }

    /// Ancho y alto efectivos de la página en mm, según la orientación.
    pub fn page_dimensions(&self) -> (f32, f32) {
        let (w, h) = self.page_size.dimensions();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Cabecera Typst: página sin márgenes propios, ya que todo el
    /// contenido se posiciona de forma absoluta desde el borde.
    pub fn to_typst_header(&self) -> String {
        let (width, height) = self.page_dimensions();
        format!(
            r#"#set page(
  width: {}mm,
  height: {}mm,
  margin: 0mm
)
#set text(
  font: ("{}", "Arial", "Liberation Sans")
)"#,
            width, height, self.font_family
        )
    }
}

#[derive(Default)]
pub struct PdfConfigBuilder {
    page_size: Option<PageSize>,
}

impl PdfConfigBuilder {
    pub fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn build(self) -> PdfConfig {
        let default = PdfConfig::default();
        PdfConfig {
            page_size: self.page_size.unwrap_or(default.page_size),
            ..default
        }
    }
}
