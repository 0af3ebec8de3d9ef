//! # Minibank Core
//!
//! Domain types for the Minibank teller:
//! - `Account`: savings and checking accounts behind the `AccountOps` trait
//! - `Customer`: owner of an ordered list of accounts
//! - `Transaction`: one-shot deposit or withdrawal against one account
//! - `CoreError`: declines and lookup mismatches

pub mod account;
pub mod customer;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountKind, AccountNo, AccountOps, CheckingAccount, SavingsAccount};
pub use customer::Customer;
pub use error::{CoreError, CoreResult};
pub use transaction::{Transaction, TransactionKind, TransactionOutcome};
