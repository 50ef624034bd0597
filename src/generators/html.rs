use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Command;
use uuid::Uuid;

use super::pdf::run_removing_input;
use crate::core::{DocumentError, DocumentResult, Orientation, PageSize};

/// Opciones de conversión HTML → PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOptions {
    pub margin_mm: f32,
    pub image_quality: f32,
    pub scale: f32,
    pub page_size: PageSize,
    pub orientation: Orientation,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            margin_mm: 0.0,
            image_quality: 0.98,
            scale: 2.0,
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
        }
    }
}

impl ConversionOptions {
    /// Argumentos equivalentes para `wkhtmltopdf`.
    pub fn to_args(&self) -> Vec<String> {
        let margin = format!("{}mm", self.margin_mm);
        vec![
            "--quiet".to_string(),
            "--page-size".to_string(),
            self.page_size.name().to_string(),
            "--orientation".to_string(),
            self.orientation.to_string(),
            "--margin-top".to_string(),
            margin.clone(),
            "--margin-bottom".to_string(),
            margin.clone(),
            "--margin-left".to_string(),
            margin.clone(),
            "--margin-right".to_string(),
            margin,
            "--image-quality".to_string(),
            format!("{}", (self.image_quality * 100.0).round() as u32),
            "--dpi".to_string(),
            format!("{}", (96.0 * self.scale).round() as u32),
        ]
    }
}

/// Colaborador que convierte un documento HTML en bytes PDF.
#[async_trait]
pub trait HtmlToPdf: Send + Sync {
    async fn convert(&self, html: &str, options: &ConversionOptions) -> DocumentResult<Vec<u8>>;
}

pub struct WkHtmlToPdf {
    binary: String,
    temp_dir: PathBuf,
}

impl WkHtmlToPdf {
    pub fn new(binary: impl Into<String>, temp_dir: impl Into<PathBuf>) -> Self {
        WkHtmlToPdf {
            binary: binary.into(),
            temp_dir: temp_dir.into(),
        }
    }

    pub fn from_env() -> Self {
        let binary = std::env::var("WKHTMLTOPDF_BIN").unwrap_or_else(|_| "wkhtmltopdf".to_string());
        let temp_dir = std::env::var("TEMP_DIR").unwrap_or_else(|_| "/tmp".to_string());
        Self::new(binary, temp_dir)
    }
}

#[async_trait]
impl HtmlToPdf for WkHtmlToPdf {
    async fn convert(&self, html: &str, options: &ConversionOptions) -> DocumentResult<Vec<u8>> {
        let temp_id = Uuid::new_v4();
        let html_path = self.temp_dir.join(format!("invoice_{}.html", temp_id));
        let pdf_path = self.temp_dir.join(format!("invoice_{}.pdf", temp_id));

        tokio::fs::write(&html_path, html).await?;

        let output = run_removing_input(&html_path, {
            let binary = self.binary.clone();
            let args = options.to_args();
            let html_path = html_path.clone();
            let pdf_path = pdf_path.clone();
            move || {
                Command::new(binary)
                    .args(&args)
                    .arg(&html_path)
                    .arg(&pdf_path)
                    .output()
            }
        })
        .await
        .map_err(|e| DocumentError::Conversion(format!("Tarea de conversión abortada: {}", e)))?
        .map_err(|e| {
            DocumentError::Conversion(format!("Error ejecutando wkhtmltopdf: {}", e))
        })?;

        if !output.status.success() {
            let _ = tokio::fs::remove_file(&pdf_path).await;
            return Err(DocumentError::Conversion(format!(
                "HTML conversion failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let pdf_bytes = tokio::fs::read(&pdf_path).await?;
        let _ = tokio::fs::remove_file(&pdf_path).await;

        tracing::debug!(bytes = pdf_bytes.len(), "HTML document converted");
        Ok(pdf_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_map_to_a4_portrait_at_double_scale() {
        let args = ConversionOptions::default().to_args();
        let joined = args.join(" ");

        assert!(joined.contains("--page-size A4"));
        assert!(joined.contains("--orientation Portrait"));
        assert!(joined.contains("--margin-top 0mm"));
        assert!(joined.contains("--image-quality 98"));
        assert!(joined.contains("--dpi 192"));
    }

    #[tokio::test]
    async fn missing_binary_is_a_conversion_error() {
        let converter = WkHtmlToPdf::new("definitely-not-wkhtmltopdf", std::env::temp_dir());
        let err = converter
            .convert("<p>hola</p>", &ConversionOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DocumentError::Conversion(_)));
    }

    #[tokio::test]
    async fn failed_conversion_leaves_no_temp_files() {
        let dir = std::env::temp_dir().join(format!("invoice_test_{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();

        let converter = WkHtmlToPdf::new("definitely-not-wkhtmltopdf", dir.clone());
        assert!(converter
            .convert("<p>hola</p>", &ConversionOptions::default())
            .await
            .is_err());

        let mut entries = tokio::fs::read_dir(&dir).await.unwrap();
        assert!(entries.next_entry().await.unwrap().is_none());
        tokio::fs::remove_dir(&dir).await.unwrap();
    }
}
