//! Teller - validates account ownership and dispatches transactions
//!
//! Every dispatch scans the customer's accounts twice: once to validate the
//! number and once to resolve the account. Validation does not cache the
//! account it found.

use crate::config::TellerConfig;
use crate::error::{TellerError, TellerResult};
use crate::receipt::Receipt;
use minibank_core::{
    Account, AccountNo, AccountOps, Customer, Transaction, TransactionKind, TransactionOutcome,
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Teller - front desk for a single customer session
#[derive(Debug, Clone, Default)]
pub struct Teller {
    config: TellerConfig,
}

impl Teller {
    pub fn new(config: TellerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TellerConfig {
        &self.config
    }

    /// Open a savings account at the configured interest rate
    pub fn open_savings(&self, customer: &mut Customer, account_no: AccountNo, balance: Decimal) {
        let account = Account::savings(account_no, balance, self.config.savings_interest_rate);
        info!(customer = customer.name(), %account, "Opened account");
        customer.add_account(account);
    }

    /// Open a checking account with the configured overdraft limit
    pub fn open_checking(&self, customer: &mut Customer, account_no: AccountNo, balance: Decimal) {
        let account = Account::checking(account_no, balance, self.config.checking_overdraft_limit);
        info!(customer = customer.name(), %account, "Opened account");
        customer.add_account(account);
    }

    /// True iff the customer holds an account with this number.
    pub fn validate(&self, customer: &Customer, account_no: AccountNo) -> bool {
        customer
            .accounts()
            .iter()
            .any(|account| account.account_no() == account_no)
    }

    /// Customer verification hook. Always passes.
    pub fn verify(&self, _customer: &Customer) -> bool {
        true
    }

    /// Customer authentication hook. Always passes.
    pub fn authenticate(&self, _customer: &Customer) -> bool {
        true
    }

    /// Run validate, verify and authenticate in protocol order.
    pub fn authorize(&self, customer: &Customer, account_no: AccountNo) -> TellerResult<()> {
        if !self.validate(customer, account_no) {
            warn!(customer = customer.name(), account_no, "Account not found");
            return Err(TellerError::AccountNotFound(account_no));
        }
        if !self.verify(customer) {
            return Err(TellerError::VerificationFailed(customer.name().to_string()));
        }
        if !self.authenticate(customer) {
            return Err(TellerError::AuthenticationFailed(customer.name().to_string()));
        }
        debug!(customer = customer.name(), account_no, "Account authorized");
        Ok(())
    }

    pub fn deposit(
        &self,
        customer: &mut Customer,
        account_no: AccountNo,
        amount: Decimal,
    ) -> TellerResult<Receipt> {
        self.execute(customer, TransactionKind::Deposit, account_no, amount)
    }

    /// Strict withdrawal. Checking accounts do not get their overdraft here.
    pub fn withdraw(
        &self,
        customer: &mut Customer,
        account_no: AccountNo,
        amount: Decimal,
    ) -> TellerResult<Receipt> {
        self.execute(customer, TransactionKind::Withdrawal, account_no, amount)
    }

    /// Authorize, resolve, execute and produce a receipt.
    ///
    /// A declined withdrawal is not an error: the receipt carries the
    /// decline and the unchanged balance.
    pub fn execute(
        &self,
        customer: &mut Customer,
        kind: TransactionKind,
        account_no: AccountNo,
        amount: Decimal,
    ) -> TellerResult<Receipt> {
        self.authorize(customer, account_no)?;

        let account = customer
            .find_account_mut(account_no)
            .ok_or(TellerError::AccountNotFound(account_no))?;

        let transaction = Transaction::new(kind, account_no, amount);
        let outcome = transaction.execute(account)?;

        match &outcome {
            TransactionOutcome::Completed => info!(
                txn_id = %transaction.id(),
                %kind,
                account_no,
                %amount,
                balance = %account.balance(),
                "Transaction completed"
            ),
            TransactionOutcome::Declined(reason) => warn!(
                txn_id = %transaction.id(),
                %kind,
                account_no,
                %amount,
                %reason,
                "Transaction declined"
            ),
        }

        Ok(Receipt::new(&transaction, account, outcome))
    }

    /// Balance inquiry, with the same checks as a transaction.
    pub fn balance(&self, customer: &Customer, account_no: AccountNo) -> TellerResult<Decimal> {
        self.authorize(customer, account_no)?;
        customer
            .find_account(account_no)
            .map(|account| account.balance())
            .ok_or(TellerError::AccountNotFound(account_no))
    }
}
