//! Receipt - summary of one executed transaction
//!
//! Receipts are derived data and are never stored.

use chrono::{DateTime, Local, TimeZone, Utc};
use minibank_core::{Account, AccountNo, AccountOps, Transaction, TransactionKind, TransactionOutcome};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// ctime-style timestamp, e.g. `Fri Oct 16 09:41:07 2026`
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Receipt data for a deposit or withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub transaction_id: Uuid,
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
    pub account_no: AccountNo,
    /// Amount requested, whether or not it was applied
    pub amount: Decimal,
    /// Balance after execution
    pub new_balance: Decimal,
    pub outcome: TransactionOutcome,
}

impl Receipt {
    /// Build a receipt from an executed transaction and the account after it.
    pub fn new(transaction: &Transaction, account: &Account, outcome: TransactionOutcome) -> Self {
        Self {
            transaction_id: transaction.id(),
            kind: transaction.kind(),
            date: transaction.date(),
            account_no: account.account_no(),
            amount: transaction.amount(),
            new_balance: account.balance(),
            outcome,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.outcome.is_completed()
    }

    /// The five-line receipt block with the date shown in `tz`.
    pub fn render<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        format!(
            "Receipt:\nDate: {}\nAccount Number: {}\nAmount: {}\nNew Balance: {}",
            self.date.with_timezone(tz).format(DATE_FORMAT),
            self.account_no,
            self.amount.normalize(),
            self.new_balance.normalize()
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Local))
    }
}
