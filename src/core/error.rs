use thiserror::Error;

/// Errors that can occur while parsing, constructing, or aggregating CNPJs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CnpjError {
    /// Input is not a well-formed 14-digit CNPJ numeral.
    #[error("invalid CNPJ '{value}': {reason}")]
    Format {
        /// The offending input, as received.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Value exceeds the 14-digit numeric capacity.
    #[error("CNPJ {0} exceeds 14-digit numeric capacity")]
    Range(u64),

    /// Aggregation was requested over an empty region batch.
    #[error("cannot compute statistics over an empty batch")]
    EmptyBatch,
}

impl CnpjError {
    pub(crate) fn format(value: impl ToString, reason: impl Into<String>) -> Self {
        Self::Format {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
