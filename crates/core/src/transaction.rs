//! # Transaction Module
//!
//! One-shot, timestamped requests to move money against a single account.
//!
//! A Transaction names its target by account number instead of holding a
//! reference, so the caller resolves the account through its owner first.
//! Nothing keeps a transaction after it has been executed.

use crate::account::{Account, AccountNo, AccountOps};
use crate::error::{CoreError, CoreResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Always succeeds
    Deposit,
    /// Strict withdrawal, declined when funds are short
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What happened when a transaction was executed.
///
/// A declined transaction has still been executed; it just had no effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum TransactionOutcome {
    Completed,
    Declined(CoreError),
}

impl TransactionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TransactionOutcome::Completed)
    }

    pub fn decline_reason(&self) -> Option<&CoreError> {
        match self {
            TransactionOutcome::Completed => None,
            TransactionOutcome::Declined(reason) => Some(reason),
        }
    }
}

impl From<CoreResult<()>> for TransactionOutcome {
    fn from(result: CoreResult<()>) -> Self {
        match result {
            Ok(()) => TransactionOutcome::Completed,
            Err(reason) => TransactionOutcome::Declined(reason),
        }
    }
}

/// A deposit or withdrawal request.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: Uuid,
    date: DateTime<Utc>,
    kind: TransactionKind,
    account_no: AccountNo,
    amount: Decimal,
}

impl Transaction {
    /// Create a transaction stamped with the current time.
    pub fn new(kind: TransactionKind, account_no: AccountNo, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            kind,
            account_no,
            amount,
        }
    }

    pub fn deposit(account_no: AccountNo, amount: Decimal) -> Self {
        Self::new(TransactionKind::Deposit, account_no, amount)
    }

    pub fn withdrawal(account_no: AccountNo, amount: Decimal) -> Self {
        Self::new(TransactionKind::Withdrawal, account_no, amount)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn account_no(&self) -> AccountNo {
        self.account_no
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Compute the account state after this transaction, without touching
    /// the input.
    pub fn apply(&self, account: &Account) -> CoreResult<(Account, TransactionOutcome)> {
        if account.account_no() != self.account_no {
            return Err(CoreError::AccountMismatch {
                expected: self.account_no,
                actual: account.account_no(),
            });
        }

        let mut next = account.clone();
        let outcome = match self.kind {
            TransactionKind::Deposit => next.deposit(self.amount).into(),
            TransactionKind::Withdrawal => next.withdraw(self.amount).into(),
        };

        Ok((next, outcome))
    }

    /// Apply this transaction to `account` in place.
    pub fn execute(&self, account: &mut Account) -> CoreResult<TransactionOutcome> {
        let (next, outcome) = self.apply(account)?;
        *account = next;
        Ok(outcome)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} on account {}",
            self.kind,
            self.amount.normalize(),
            self.account_no
        )
    }
}
