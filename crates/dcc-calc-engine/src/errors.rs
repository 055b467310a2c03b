//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "module"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "Error types and the zero-divisor fallback shared by every formula."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use thiserror::Error;
use tracing::debug;

pub type Result<T> = std::result::Result<T, CalcEngineError>;

#[derive(Debug, Error)]
pub enum CalcEngineError {
    #[error("resistor set must hold between 2 and 5 values, got {0}")]
    InvalidResistorCount(usize),
    #[error("resistor {index} has negative resistance {value}")]
    NegativeResistance { index: usize, value: f64 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    SerializationFailed(#[from] serde_json::Error),
    #[error("yaml serialization error: {0}")]
    YamlSerializationFailed(#[from] serde_yaml::Error),
}

impl CalcEngineError {
    /// True when the error stems from the shape of a request rather than the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CalcEngineError::InvalidResistorCount(_) | CalcEngineError::NegativeResistance { .. }
        )
    }
}

/// The single recoverable condition of the formula layer.
///
/// It never reaches callers of the public formulas: [`ratio_or_zero`] turns it into a
/// zero output, which is what every calculator reports for a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("division by zero in {formula}")]
pub struct DivisionByZero {
    pub formula: &'static str,
}

/// Divides `numerator` by `denominator`, failing only when the divisor is exactly zero.
pub fn checked_ratio(
    formula: &'static str,
    numerator: f64,
    denominator: f64,
) -> std::result::Result<f64, DivisionByZero> {
    if denominator == 0.0 {
        return Err(DivisionByZero { formula });
    }
    Ok(numerator / denominator)
}

/// Divides `numerator` by `denominator`, substituting `0.0` for a zero divisor.
pub fn ratio_or_zero(formula: &'static str, numerator: f64, denominator: f64) -> f64 {
    checked_ratio(formula, numerator, denominator).unwrap_or_else(|err| {
        debug!(%err, "substituting zero for undefined ratio");
        0.0
    })
}
