pub mod html;
pub mod pdf;

pub use html::{ConversionOptions, HtmlToPdf, WkHtmlToPdf};
pub use pdf::{TypstCli, TypstRenderer};
