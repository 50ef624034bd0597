use serde::{Deserialize, Serialize};
use std::fmt;

/// Valor de campo que puede llegar como texto o como número.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl Scalar {
    /// Un campo vacío, `0` o `NaN` se considera ausente.
    pub fn is_present(&self) -> bool {
        match self {
            Scalar::Text(text) => !text.is_empty(),
            Scalar::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => write!(f, "{}", text),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

/// Texto del campo si está presente.
pub fn present(field: &Option<Scalar>) -> Option<String> {
    field
        .as_ref()
        .filter(|value| value.is_present())
        .map(|value| value.to_string())
}

/// Texto del campo, o `default` si está ausente.
pub fn text_or(field: &Option<Scalar>, default: &str) -> String {
    present(field).unwrap_or_else(|| default.to_string())
}
