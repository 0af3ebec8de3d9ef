//! # Error Module
//!
//! Domain errors for Minibank accounts and transactions, built with thiserror.

use crate::account::AccountNo;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Core domain errors.
///
/// None of these are fatal: a failed withdrawal leaves the account untouched
/// and the caller decides how to report it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum CoreError {
    // === Balance errors ===
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error(
        "Overdraft limit exceeded: requested {requested}, balance {balance}, limit {overdraft_limit}"
    )]
    OverdraftExceeded {
        requested: Decimal,
        balance: Decimal,
        overdraft_limit: Decimal,
    },

    #[error("Amount out of range: balance {balance}, amount {amount}")]
    Overflow { balance: Decimal, amount: Decimal },

    // === Account errors ===
    #[error("Transaction targets account {expected}, got account {actual}")]
    AccountMismatch { expected: AccountNo, actual: AccountNo },

    #[error("Account {account_no} is not a savings account")]
    NotASavingsAccount { account_no: AccountNo },

    #[error("Account {account_no} is not a checking account")]
    NotACheckingAccount { account_no: AccountNo },
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Strict-withdrawal decline
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, CoreError::InsufficientFunds { .. })
    }

    /// Overdraft-path decline
    pub fn is_overdraft_exceeded(&self) -> bool {
        matches!(self, CoreError::OverdraftExceeded { .. })
    }

    /// Result would not fit in a Decimal
    pub fn is_overflow(&self) -> bool {
        matches!(self, CoreError::Overflow { .. })
    }

    /// True for errors that decline a transaction without mutating anything.
    pub fn is_decline(&self) -> bool {
        self.is_insufficient_funds() || self.is_overdraft_exceeded() || self.is_overflow()
    }
}
