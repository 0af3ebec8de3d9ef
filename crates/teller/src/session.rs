//! Interactive session model
//!
//! `Idle -> AccountSelected -> Idle`, repeated until the operator exits.
//! There are no locked or pending states.

use crate::error::{TellerError, TellerResult};
use minibank_core::{AccountNo, TransactionKind};
use std::fmt;

/// Menu option chosen by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Deposit,
    Withdraw,
    CheckBalance,
    Exit,
    Invalid(i64),
}

impl MenuChoice {
    pub fn parse(value: i64) -> Self {
        match value {
            1 => MenuChoice::Deposit,
            2 => MenuChoice::Withdraw,
            3 => MenuChoice::CheckBalance,
            4 => MenuChoice::Exit,
            other => MenuChoice::Invalid(other),
        }
    }

    /// Transaction to build for this choice, if any
    pub fn transaction_kind(&self) -> Option<TransactionKind> {
        match self {
            MenuChoice::Deposit => Some(TransactionKind::Deposit),
            MenuChoice::Withdraw => Some(TransactionKind::Withdrawal),
            _ => None,
        }
    }
}

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AccountSelected(AccountNo),
    Closed,
}

impl SessionState {
    /// Idle -> AccountSelected, after the account passed validation
    pub fn select_account(self, account_no: AccountNo) -> TellerResult<Self> {
        match self {
            SessionState::Idle => Ok(SessionState::AccountSelected(account_no)),
            other => Err(TellerError::invalid_transition("select account", other)),
        }
    }

    /// AccountSelected -> Idle, once the chosen operation has run
    pub fn complete(self) -> TellerResult<Self> {
        match self {
            SessionState::AccountSelected(_) => Ok(SessionState::Idle),
            other => Err(TellerError::invalid_transition("complete", other)),
        }
    }

    /// Idle -> Closed on the exit signal
    pub fn close(self) -> TellerResult<Self> {
        match self {
            SessionState::Idle => Ok(SessionState::Closed),
            other => Err(TellerError::invalid_transition("close", other)),
        }
    }

    pub fn selected_account(&self) -> Option<AccountNo> {
        match self {
            SessionState::AccountSelected(account_no) => Some(*account_no),
            _ => None,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, SessionState::Closed)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::AccountSelected(no) => write!(f, "account {} selected", no),
            SessionState::Closed => write!(f, "closed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_parse() {
        assert_eq!(MenuChoice::parse(1), MenuChoice::Deposit);
        assert_eq!(MenuChoice::parse(2), MenuChoice::Withdraw);
        assert_eq!(MenuChoice::parse(3), MenuChoice::CheckBalance);
        assert_eq!(MenuChoice::parse(4), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse(0), MenuChoice::Invalid(0));
        assert_eq!(MenuChoice::parse(-7), MenuChoice::Invalid(-7));
    }

    #[test]
    fn test_menu_transaction_kind() {
        assert_eq!(
            MenuChoice::Deposit.transaction_kind(),
            Some(TransactionKind::Deposit)
        );
        assert_eq!(
            MenuChoice::Withdraw.transaction_kind(),
            Some(TransactionKind::Withdrawal)
        );
        assert_eq!(MenuChoice::CheckBalance.transaction_kind(), None);
    }

    #[test]
    fn test_session_round_trip() {
        let state = SessionState::default();
        let state = state.select_account(10).unwrap();
        assert_eq!(state.selected_account(), Some(10));

        let state = state.complete().unwrap();
        assert_eq!(state, SessionState::Idle);

        let state = state.close().unwrap();
        assert!(state.is_closed());
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(SessionState::Idle.complete().is_err());
        assert!(SessionState::AccountSelected(10).select_account(20).is_err());
        assert!(SessionState::AccountSelected(10).close().is_err());
        assert!(SessionState::Closed.select_account(10).is_err());
    }
}
