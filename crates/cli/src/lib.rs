//! Minibank console - the interactive teller protocol
//!
//! Reads whitespace-separated tokens the way a stream extractor would, so
//! several answers may share one line. Works over any `BufRead`/`Write` pair.

use anyhow::Result;
use minibank_core::{AccountNo, CoreError, Customer};
use minibank_teller::{MenuChoice, Receipt, SessionState, Teller, TellerError};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::info;

pub const MENU: &str = "\n1. Deposit\n2. Withdraw\n3. Check Balance\n4. Exit\nChoose an option: ";

/// One token read from the operator
enum Input<T> {
    Value(T),
    Invalid(String),
    Eof,
}

/// Interactive console for one customer session
pub struct Console<R, W> {
    input: R,
    output: W,
    teller: Teller,
    pending: VecDeque<String>,
    /// A prompt was written and its line is not terminated yet
    line_open: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, teller: Teller) -> Self {
        Self {
            input,
            output,
            teller,
            pending: VecDeque::new(),
            line_open: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run a full session: open the customer, then serve the menu until exit
    /// or end of input. Returns `None` if input ended during setup.
    pub fn run(&mut self) -> Result<Option<Customer>> {
        let Some(mut customer) = self.open_customer()? else {
            return Ok(None);
        };
        self.serve(&mut customer)?;
        info!(customer = customer.name(), "Session closed");
        Ok(Some(customer))
    }

    /// Startup prompts: name, then savings and checking accounts.
    pub fn open_customer(&mut self) -> Result<Option<Customer>> {
        self.prompt("Enter customer name: ")?;
        let Some(name) = self.next_token()? else {
            return Ok(None);
        };
        let mut customer = Customer::new(name);

        let Some(savings_no) = self.ask::<AccountNo>("Enter savings account number: ")? else {
            return Ok(None);
        };
        let Some(savings_balance) =
            self.ask::<Decimal>("Enter initial balance for savings account: ")?
        else {
            return Ok(None);
        };
        self.teller
            .open_savings(&mut customer, savings_no, savings_balance);

        let Some(checking_no) = self.ask::<AccountNo>("Enter checking account number: ")? else {
            return Ok(None);
        };
        let Some(checking_balance) =
            self.ask::<Decimal>("Enter initial balance for checking account: ")?
        else {
            return Ok(None);
        };
        self.teller
            .open_checking(&mut customer, checking_no, checking_balance);

        Ok(Some(customer))
    }

    /// Menu loop. Ends on choice 4 or end of input.
    pub fn serve(&mut self, customer: &mut Customer) -> Result<()> {
        let mut state = SessionState::Idle;

        loop {
            self.prompt(MENU)?;
            let choice = match self.read::<i64>()? {
                Input::Value(value) => MenuChoice::parse(value),
                Input::Invalid(_) => {
                    self.say("Invalid input.")?;
                    continue;
                }
                Input::Eof => break,
            };
            if choice == MenuChoice::Exit {
                state = state.close()?;
                break;
            }

            self.prompt("Enter account number: ")?;
            let account_no = match self.read::<AccountNo>()? {
                Input::Value(value) => value,
                Input::Invalid(_) => {
                    self.say("Invalid input.")?;
                    continue;
                }
                Input::Eof => break,
            };

            match self.teller.authorize(customer, account_no) {
                Ok(()) => {}
                Err(TellerError::AccountNotFound(_)) => {
                    self.say("Account not found.")?;
                    continue;
                }
                Err(e) if e.is_access_denied() => {
                    self.say("Verification or authentication failed.")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
            state = state.select_account(account_no)?;

            let keep_going = self.dispatch(customer, choice, account_no)?;
            state = state.complete()?;
            if !keep_going {
                break;
            }
        }

        debug_assert!(!matches!(state, SessionState::AccountSelected(_)));
        Ok(())
    }

    /// Run the chosen operation on a validated account. Returns false when
    /// input ended mid-operation.
    fn dispatch(
        &mut self,
        customer: &mut Customer,
        choice: MenuChoice,
        account_no: AccountNo,
    ) -> Result<bool> {
        match choice {
            MenuChoice::Deposit | MenuChoice::Withdraw => {
                let question = if choice == MenuChoice::Deposit {
                    "Enter amount to deposit: "
                } else {
                    "Enter amount to withdraw: "
                };
                self.prompt(question)?;
                let amount = match self.read::<Decimal>()? {
                    Input::Value(value) => value,
                    Input::Invalid(_) => {
                        self.say("Invalid input.")?;
                        return Ok(true);
                    }
                    Input::Eof => return Ok(false),
                };

                let receipt = match choice.transaction_kind() {
                    Some(kind) => self.teller.execute(customer, kind, account_no, amount)?,
                    None => return Ok(true),
                };
                if let Some(reason) = receipt.outcome.decline_reason() {
                    self.say(decline_notice(reason))?;
                }
                self.print_receipt(&receipt)?;
            }
            MenuChoice::CheckBalance => {
                let balance = self.teller.balance(customer, account_no)?;
                self.say(&format!("Balance: {}", balance.normalize()))?;
            }
            MenuChoice::Invalid(_) => self.say("Invalid choice.")?,
            MenuChoice::Exit => {}
        }
        Ok(true)
    }

    fn print_receipt(&mut self, receipt: &Receipt) -> Result<()> {
        if self.teller.config().json_receipts {
            let line = receipt.to_json()?;
            if self.line_open {
                writeln!(self.output)?;
            }
            self.say(&line)
        } else {
            self.say(&receipt.to_string())
        }
    }

    /// Prompt until a parsable value arrives. `None` on end of input.
    fn ask<T: FromStr>(&mut self, question: &str) -> Result<Option<T>> {
        loop {
            self.prompt(question)?;
            match self.read::<T>()? {
                Input::Value(value) => return Ok(Some(value)),
                Input::Invalid(_) => self.say("Invalid input.")?,
                Input::Eof => return Ok(None),
            }
        }
    }

    fn read<T: FromStr>(&mut self) -> Result<Input<T>> {
        Ok(match self.next_token()? {
            Some(token) => match token.parse() {
                Ok(value) => Input::Value(value),
                Err(_) => Input::Invalid(token),
            },
            None => Input::Eof,
        })
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.line_open = true;
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.line_open = false;
        Ok(())
    }
}

/// Operator-facing text for a declined withdrawal
pub fn decline_notice(reason: &CoreError) -> &'static str {
    match reason {
        CoreError::InsufficientFunds { .. } => "Insufficient balance.",
        CoreError::OverdraftExceeded { .. } => "Overdraft limit exceeded.",
        CoreError::Overflow { .. } => "Amount out of range.",
        _ => "Transaction declined.",
    }
}
