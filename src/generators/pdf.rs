use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tokio::task::JoinError;
use uuid::Uuid;

use crate::core::{DocumentError, DocumentResult};

/// Ejecuta `job` en el pool bloqueante y borra `input` antes de devolver,
/// incluso si la tarea no pudo completarse.
pub(crate) async fn run_removing_input<F>(
    input: &Path,
    job: F,
) -> Result<io::Result<Output>, JoinError>
where
    F: FnOnce() -> io::Result<Output> + Send + 'static,
{
    let joined = tokio::task::spawn_blocking(job).await;
    let _ = tokio::fs::remove_file(input).await;
    joined
}

/// Colaborador que convierte código Typst en bytes PDF.
#[async_trait]
pub trait TypstRenderer: Send + Sync {
    async fn render(&self, typst_source: &str) -> DocumentResult<Vec<u8>>;
}

/// Renderizador que invoca el binario `typst` sobre archivos temporales.
pub struct TypstCli {
    binary: String,
    temp_dir: PathBuf,
}

impl TypstCli {
    pub fn new(binary: impl Into<String>, temp_dir: impl Into<PathBuf>) -> Self {
        TypstCli {
            binary: binary.into(),
            temp_dir: temp_dir.into(),
        }
    }

    pub fn from_env() -> Self {
        let binary = std::env::var("TYPST_BIN").unwrap_or_else(|_| "typst".to_string());
        let temp_dir = std::env::var("TEMP_DIR").unwrap_or_else(|_| "/tmp".to_string());
        Self::new(binary, temp_dir)
    }
}

#[async_trait]
impl TypstRenderer for TypstCli {
    async fn render(&self, typst_source: &str) -> DocumentResult<Vec<u8>> {
        let temp_id = Uuid::new_v4();
        let typ_path = self.temp_dir.join(format!("awb_{}.typ", temp_id));
        let pdf_path = self.temp_dir.join(format!("awb_{}.pdf", temp_id));

        tokio::fs::write(&typ_path, typst_source).await?;

        let output = run_removing_input(&typ_path, {
            let binary = self.binary.clone();
            let typ_path = typ_path.clone();
            let pdf_path = pdf_path.clone();
            move || {
                Command::new(binary)
                    .arg("compile")
                    .arg(&typ_path)
                    .arg(&pdf_path)
                    .output()
            }
        })
        .await
        .map_err(|e| DocumentError::Generation(format!("Tarea de typst abortada: {}", e)))?
        .map_err(|e| {
            DocumentError::Generation(format!("Error ejecutando typst: {}", e))
        })?;

        if !output.status.success() {
            let _ = tokio::fs::remove_file(&pdf_path).await;
            return Err(DocumentError::Generation(format!(
                "Typst compilation failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let pdf_bytes = tokio::fs::read(&pdf_path).await?;
        let _ = tokio::fs::remove_file(&pdf_path).await;

        tracing::debug!(bytes = pdf_bytes.len(), "Typst document compiled");
        Ok(pdf_bytes)
    }
}
