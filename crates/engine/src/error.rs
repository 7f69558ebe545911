//! Engine-level error type.

use ledger_core::LedgerError;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors surfaced by the game engine and scenario setup.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A ledger operation failed.
    #[error("ledger: {0}")]
    Ledger(#[from] LedgerError),

    /// Scenario construction failed.
    #[error("scenario: {0}")]
    Scenario(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_ledger_error() {
        let err: GameError = LedgerError::EmptyRegistry.into();
        assert_eq!(err.to_string(), "ledger: no actors registered");
    }
}
