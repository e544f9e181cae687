use thiserror::Error;

/// Unified error type for the entire stock-calc-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Calculator outcomes such as "Invalid" or "Not possible" are NOT errors;
/// see [`crate::models::results::RequiredQuantity`].
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Instances ───────────────────────────────────────────────────
    #[error("Maximum {max} calculators allowed")]
    CapacityExceeded { max: usize },

    #[error("Calculator not found: {0}")]
    InstanceNotFound(u8),

    // ── Parsing of enumerated values ────────────────────────────────
    #[error("Unknown calculator mode: {0}")]
    UnknownMode(String),

    #[error("Unknown number format: {0}")]
    UnknownDisplayFormat(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    // ── Preference storage ──────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
