use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error de generación: {0}")]
    Generation(String),

    #[error("Error de plantilla: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Error de conversión: {0}")]
    Conversion(String),
}

pub type DocumentResult<T> = Result<T, DocumentError>;
