//! Error types for ledger operations.

use std::fmt;
use types::{AssetId, Cash};

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur during ledger operations.
///
/// All variants are recoverable domain errors; none is process-fatal. Each
/// carries the actor/asset names and amounts a caller needs to render a
/// message or re-prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// An actor with this name already exists in the registry.
    DuplicateActor { name: String },
    /// No actor with this name exists in the registry.
    UnknownActor { name: String },
    /// The registry has no actors to advance through.
    EmptyRegistry,
    /// Requested share percentage is not positive.
    InvalidShare { share_pct: f64 },
    /// The seller holds less of the company than the requested share.
    InsufficientShare {
        company: String,
        seller: String,
        requested: f64,
        held: f64,
    },
    /// The paying actor cannot cover the required amount.
    InsufficientFunds {
        actor: String,
        required: Cash,
        available: Cash,
    },
    /// The named actor does not hold the referenced asset.
    AssetNotOwned { actor: String, asset: AssetId },
    /// No actor holds an asset with this name.
    AssetNotFound { name: String },
    /// Transfer amount is not positive.
    InvalidAmount { amount: Cash },
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::DuplicateActor { name } => {
                write!(f, "actor already exists: {}", name)
            }
            LedgerError::UnknownActor { name } => {
                write!(f, "unknown actor: {}", name)
            }
            LedgerError::EmptyRegistry => write!(f, "no actors registered"),
            LedgerError::InvalidShare { share_pct } => {
                write!(f, "share must be positive, got {}%", share_pct)
            }
            LedgerError::InsufficientShare {
                company,
                seller,
                requested,
                held,
            } => write!(
                f,
                "{} holds {:.4}% of {}, cannot sell {:.4}%",
                seller, held, company, requested
            ),
            LedgerError::InsufficientFunds {
                actor,
                required,
                available,
            } => write!(
                f,
                "{} cannot cover {} (balance {})",
                actor, required, available
            ),
            LedgerError::AssetNotOwned { actor, asset } => {
                write!(f, "{} does not own {}", actor, asset)
            }
            LedgerError::AssetNotFound { name } => {
                write!(f, "no actor owns an asset named {}", name)
            }
            LedgerError::InvalidAmount { amount } => {
                write!(f, "amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for LedgerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::InsufficientFunds {
            actor: "Alva".to_string(),
            required: Cash::from_float(300.0),
            available: Cash::from_float(200.0),
        };
        assert_eq!(err.to_string(), "Alva cannot cover 300.00 kr (balance 200.00 kr)");

        let err = LedgerError::InvalidShare { share_pct: -5.0 };
        assert_eq!(err.to_string(), "share must be positive, got -5%");
    }
}
