//! # Customer Module
//!
//! A Customer owns an ordered list of accounts, in opening order.

use crate::account::{Account, AccountNo, AccountOps};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer and the accounts they own.
///
/// Account numbers are expected to be unique per customer but this is not
/// checked. Lookups return the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    accounts: Vec<Account>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an account. Duplicated numbers are accepted.
    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn find_account(&self, account_no: AccountNo) -> Option<&Account> {
        self.accounts.iter().find(|a| a.account_no() == account_no)
    }

    pub fn find_account_mut(&mut self, account_no: AccountNo) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.account_no() == account_no)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer {} (accounts: {})", self.name, self.accounts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new("Alice");
        assert_eq!(customer.name(), "Alice");
        assert!(customer.accounts().is_empty());
        assert!(customer.find_account(10).is_none());
    }

    #[test]
    fn test_accounts_keep_opening_order() {
        let mut customer = Customer::new("Alice");
        customer.add_account(Account::savings(10, dec!(1000), dec!(3.0)));
        customer.add_account(Account::checking(20, dec!(100), dec!(200)));

        let numbers: Vec<_> = customer.accounts().iter().map(|a| a.account_no()).collect();
        assert_eq!(numbers, vec![10, 20]);
        assert_eq!(customer.to_string(), "Customer Alice (accounts: 2)");
    }

    #[test]
    fn test_duplicate_number_first_match_wins() {
        let mut customer = Customer::new("Bob");
        customer.add_account(Account::savings(10, dec!(1), dec!(3.0)));
        customer.add_account(Account::checking(10, dec!(2), dec!(200)));
        assert_eq!(customer.accounts().len(), 2);

        let found = customer.find_account(10).unwrap();
        assert!(found.as_savings().is_some());

        customer.find_account_mut(10).unwrap().deposit(dec!(5)).unwrap();
        assert_eq!(customer.accounts()[0].balance(), dec!(6));
        assert_eq!(customer.accounts()[1].balance(), dec!(2));
    }
}
