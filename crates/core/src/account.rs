//! # Account Module
//!
//! Accounts held by a Customer. Two kinds exist:
//! - `SavingsAccount`: accrues interest on demand
//! - `CheckingAccount`: may go negative, but only through the overdraft path
//!
//! Both share the `AccountOps` capability set. `Account` is the closed set of
//! kinds that a Customer actually stores.

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account identifier, unique within one Customer (not enforced).
pub type AccountNo = i64;

/// Capabilities shared by every kind of account.
pub trait AccountOps {
    fn account_no(&self) -> AccountNo;

    fn balance(&self) -> Decimal;

    /// Adds `amount` to the balance. Amounts are not validated; the only
    /// failure is a result outside the Decimal range, which leaves the
    /// balance unchanged.
    fn deposit(&mut self, amount: Decimal) -> CoreResult<()>;

    /// Strict withdrawal: succeeds only when `amount <= balance`.
    ///
    /// On failure the balance is left unchanged.
    fn withdraw(&mut self, amount: Decimal) -> CoreResult<()>;
}

/// Identity and balance common to all account kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Holding {
    account_no: AccountNo,
    balance: Decimal,
}

impl Holding {
    fn new(account_no: AccountNo, balance: Decimal) -> Self {
        Self {
            account_no,
            balance,
        }
    }

    fn overflow(&self, amount: Decimal) -> CoreError {
        CoreError::Overflow {
            balance: self.balance,
            amount,
        }
    }

    fn deposit(&mut self, amount: Decimal) -> CoreResult<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| self.overflow(amount))?;
        Ok(())
    }

    fn withdraw(&mut self, amount: Decimal) -> CoreResult<()> {
        if amount > self.balance {
            return Err(CoreError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.debit(amount)
    }

    fn debit(&mut self, amount: Decimal) -> CoreResult<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| self.overflow(amount))?;
        Ok(())
    }
}

/// Kind of account, as shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Savings,
    Checking,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "savings",
            AccountKind::Checking => "checking",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Savings account with a percentage interest rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsAccount {
    #[serde(flatten)]
    holding: Holding,
    /// Percentage, e.g. `3.0` for 3%
    interest_rate: Decimal,
}

impl SavingsAccount {
    pub fn new(account_no: AccountNo, balance: Decimal, interest_rate: Decimal) -> Self {
        Self {
            holding: Holding::new(account_no, balance),
            interest_rate,
        }
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Credits `balance * rate / 100` and returns the amount credited.
    ///
    /// Nothing calls this automatically. Repeated calls compound.
    pub fn calculate_interest(&mut self) -> CoreResult<Decimal> {
        let interest = self
            .interest_rate
            .checked_div(Decimal::ONE_HUNDRED)
            .and_then(|rate| self.holding.balance.checked_mul(rate))
            .ok_or_else(|| self.holding.overflow(self.interest_rate))?;
        self.holding.deposit(interest)?;
        Ok(interest)
    }
}

impl AccountOps for SavingsAccount {
    fn account_no(&self) -> AccountNo {
        self.holding.account_no
    }

    fn balance(&self) -> Decimal {
        self.holding.balance
    }

    fn deposit(&mut self, amount: Decimal) -> CoreResult<()> {
        self.holding.deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> CoreResult<()> {
        self.holding.withdraw(amount)
    }
}

/// Checking account with a non-negative overdraft limit.
///
/// Two withdrawal policies coexist here: the inherited strict `withdraw`
/// and the overdraft-aware `check_overdraft`. They are not unified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckingAccount {
    #[serde(flatten)]
    holding: Holding,
    overdraft_limit: Decimal,
}

impl CheckingAccount {
    pub fn new(account_no: AccountNo, balance: Decimal, overdraft_limit: Decimal) -> Self {
        Self {
            holding: Holding::new(account_no, balance),
            overdraft_limit,
        }
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    /// Overdraft-aware withdrawal: succeeds iff `balance + limit >= amount`.
    pub fn check_overdraft(&mut self, amount: Decimal) -> CoreResult<()> {
        // Headroom past Decimal::MAX covers any representable amount
        let covered = match self.holding.balance.checked_add(self.overdraft_limit) {
            Some(headroom) => headroom >= amount,
            None => true,
        };
        if !covered {
            return Err(CoreError::OverdraftExceeded {
                requested: amount,
                balance: self.holding.balance,
                overdraft_limit: self.overdraft_limit,
            });
        }
        self.holding.debit(amount)
    }
}

impl AccountOps for CheckingAccount {
    fn account_no(&self) -> AccountNo {
        self.holding.account_no
    }

    fn balance(&self) -> Decimal {
        self.holding.balance
    }

    fn deposit(&mut self, amount: Decimal) -> CoreResult<()> {
        self.holding.deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> CoreResult<()> {
        self.holding.withdraw(amount)
    }
}

/// An account owned by a Customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Account {
    Savings(SavingsAccount),
    Checking(CheckingAccount),
}

impl Account {
    /// Open a savings account
    pub fn savings(account_no: AccountNo, balance: Decimal, interest_rate: Decimal) -> Self {
        Account::Savings(SavingsAccount::new(account_no, balance, interest_rate))
    }

    /// Open a checking account
    pub fn checking(account_no: AccountNo, balance: Decimal, overdraft_limit: Decimal) -> Self {
        Account::Checking(CheckingAccount::new(account_no, balance, overdraft_limit))
    }

    pub fn kind(&self) -> AccountKind {
        match self {
            Account::Savings(_) => AccountKind::Savings,
            Account::Checking(_) => AccountKind::Checking,
        }
    }

    pub fn as_savings(&self) -> Option<&SavingsAccount> {
        match self {
            Account::Savings(savings) => Some(savings),
            Account::Checking(_) => None,
        }
    }

    pub fn as_savings_mut(&mut self) -> Option<&mut SavingsAccount> {
        match self {
            Account::Savings(savings) => Some(savings),
            Account::Checking(_) => None,
        }
    }

    pub fn as_checking(&self) -> Option<&CheckingAccount> {
        match self {
            Account::Checking(checking) => Some(checking),
            Account::Savings(_) => None,
        }
    }

    pub fn as_checking_mut(&mut self) -> Option<&mut CheckingAccount> {
        match self {
            Account::Checking(checking) => Some(checking),
            Account::Savings(_) => None,
        }
    }

    /// Accrue interest on a savings account.
    pub fn calculate_interest(&mut self) -> CoreResult<Decimal> {
        let account_no = self.account_no();
        match self.as_savings_mut() {
            Some(savings) => savings.calculate_interest(),
            None => Err(CoreError::NotASavingsAccount { account_no }),
        }
    }

    /// Overdraft-aware withdrawal on a checking account.
    pub fn check_overdraft(&mut self, amount: Decimal) -> CoreResult<()> {
        let account_no = self.account_no();
        match self.as_checking_mut() {
            Some(checking) => checking.check_overdraft(amount),
            None => Err(CoreError::NotACheckingAccount { account_no }),
        }
    }
}

impl AccountOps for Account {
    fn account_no(&self) -> AccountNo {
        match self {
            Account::Savings(a) => a.account_no(),
            Account::Checking(a) => a.account_no(),
        }
    }

    fn balance(&self) -> Decimal {
        match self {
            Account::Savings(a) => a.balance(),
            Account::Checking(a) => a.balance(),
        }
    }

    fn deposit(&mut self, amount: Decimal) -> CoreResult<()> {
        match self {
            Account::Savings(a) => a.deposit(amount),
            Account::Checking(a) => a.deposit(amount),
        }
    }

    fn withdraw(&mut self, amount: Decimal) -> CoreResult<()> {
        match self {
            Account::Savings(a) => a.withdraw(amount),
            Account::Checking(a) => a.withdraw(amount),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} ({}, balance: {})",
            self.account_no(),
            self.kind(),
            self.balance().normalize()
        )
    }
}
