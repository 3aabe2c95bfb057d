use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransientError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input length mismatch for `{name}`: expected {expected}, got {got}")]
    InputMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error(
        "Wavelength {wavelength_angstrom} Å outside extinction law range [{min}, {max}] Å"
    )]
    WavelengthOutOfRange {
        wavelength_angstrom: f64,
        min: f64,
        max: f64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TransientResult<T> = Result<T, TransientError>;
