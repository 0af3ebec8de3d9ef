//! Teller layer errors

use minibank_core::{AccountNo, CoreError};
use thiserror::Error;

/// Teller operation errors
#[derive(Debug, Error)]
pub enum TellerError {
    // === Lookup / access errors ===
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNo),

    #[error("Verification failed for customer {0}")]
    VerificationFailed(String),

    #[error("Authentication failed for customer {0}")]
    AuthenticationFailed(String),

    // === Session errors ===
    #[error("Invalid session transition: {action} while {state}")]
    InvalidTransition { action: String, state: String },

    // === Configuration errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    // === Wrapped errors ===
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

/// Result type alias for teller operations
pub type TellerResult<T> = Result<T, TellerError>;

impl TellerError {
    /// Create invalid transition error
    pub fn invalid_transition(action: &str, state: impl ToString) -> Self {
        Self::InvalidTransition {
            action: action.to_string(),
            state: state.to_string(),
        }
    }

    /// Create configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the operator should see "Verification or authentication failed."
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self,
            TellerError::VerificationFailed(_) | TellerError::AuthenticationFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_not_found_error() {
        let err = TellerError::AccountNotFound(30);
        assert_eq!(err.to_string(), "Account not found: 30");
        assert!(!err.is_access_denied());
    }

    #[test]
    fn test_access_denied_errors() {
        let err = TellerError::VerificationFailed("Alice".to_string());
        assert!(err.is_access_denied());
        assert_eq!(err.to_string(), "Verification failed for customer Alice");

        let err = TellerError::AuthenticationFailed("Alice".to_string());
        assert!(err.is_access_denied());
        assert_eq!(err.to_string(), "Authentication failed for customer Alice");

        assert!(!TellerError::config("bad").is_access_denied());
    }

    #[test]
    fn test_wrapped_core_error() {
        let err: TellerError = CoreError::InsufficientFunds {
            requested: dec!(2000),
            available: dec!(1500),
        }
        .into();
        assert!(err.to_string().starts_with("Core error: Insufficient balance"));
    }

    #[test]
    fn test_invalid_transition_error() {
        let err = TellerError::invalid_transition("select account", "closed");
        assert!(err.to_string().contains("select account"));
        assert!(err.to_string().contains("closed"));
    }
}
