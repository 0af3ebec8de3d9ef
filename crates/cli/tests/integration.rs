//! Scripted console sessions

use std::io::Cursor;

use rust_decimal_macros::dec;

use minibank_cli::{Console, MENU};
use minibank_core::{AccountOps, Customer};
use rust_decimal::Decimal;
use minibank_teller::{Teller, TellerConfig};

const SETUP: &str = "Alice\n10\n1000\n20\n100\n";

fn run_script(teller: Teller, commands: &str) -> (Option<Customer>, String) {
    let script = format!("{}{}", SETUP, commands);
    let mut console = Console::new(Cursor::new(script.into_bytes()), Vec::new(), teller);
    let customer = console.run().expect("session should not fail");
    let output = String::from_utf8(console.into_output()).unwrap();
    (customer, output)
}

#[test]
fn test_full_session() {
    let (customer, output) = run_script(
        Teller::default(),
        "1\n10\n500\n2\n10\n2000\n3\n10\n1\n30\n7\n10\n4\n",
    );
    let customer = customer.unwrap();

    assert!(output.starts_with("Enter customer name: Enter savings account number: "));
    assert_eq!(output.matches("Receipt:").count(), 2);
    assert!(output.contains("Account Number: 10\nAmount: 500\nNew Balance: 1500"));
    assert!(output.contains("Insufficient balance.\nReceipt:"));
    assert!(output.contains("Amount: 2000\nNew Balance: 1500"));
    assert!(output.contains("Balance: 1500\n"));
    assert!(output.contains("Account not found.\n"));
    assert!(output.contains("Invalid choice.\n"));
    // Six menus: deposit, withdraw, balance, unknown account, invalid choice, exit
    assert_eq!(output.matches(MENU).count(), 6);

    assert_eq!(customer.find_account(10).unwrap().balance(), dec!(1500));
    assert_eq!(customer.find_account(20).unwrap().balance(), dec!(100));
}

#[test]
fn test_receipt_has_date_line() {
    let (_, output) = run_script(Teller::default(), "1\n20\n50\n4\n");

    let receipt: Vec<&str> = output
        .lines()
        .skip_while(|line| !line.ends_with("Receipt:"))
        .take(5)
        .collect();
    assert_eq!(receipt.len(), 5);
    assert!(receipt[1].starts_with("Date: "));
    assert_eq!(receipt[2], "Account Number: 20");
    assert_eq!(receipt[3], "Amount: 50");
    assert_eq!(receipt[4], "New Balance: 150");
}

#[test]
fn test_checking_withdraw_is_strict() {
    let (customer, output) = run_script(Teller::default(), "2\n20\n250\n4\n");

    assert!(output.contains("Insufficient balance."));
    assert!(output.contains("New Balance: 100"));
    assert_eq!(
        customer.unwrap().find_account(20).unwrap().balance(),
        dec!(100)
    );
}

#[test]
fn test_json_receipts() {
    let teller = Teller::new(TellerConfig {
        json_receipts: true,
        ..TellerConfig::default()
    });
    let (_, output) = run_script(teller, "1\n10\n25.50\n4\n");

    let line = output
        .lines()
        .find(|line| line.starts_with('{'))
        .expect("json receipt line");
    let json: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(json["kind"], "deposit");
    assert_eq!(json["account_no"], 10);
    assert_eq!(json["new_balance"], "1025.50");
    assert_eq!(json["outcome"]["status"], "completed");
    assert!(!output.contains("Receipt:"));
    assert!(output.contains("Enter amount to deposit: \n{"));
}

#[test]
fn test_bad_input_and_eof() {
    let (customer, output) = run_script(Teller::default(), "abc\n1\nxyz\n1\n10\nlots\n");

    assert_eq!(output.matches("Invalid input.").count(), 3);
    assert!(!output.contains("Receipt:"));
    // Input ran out without choosing Exit; the session still ends cleanly
    assert_eq!(
        customer.unwrap().find_account(10).unwrap().balance(),
        dec!(1000)
    );
}

#[test]
fn test_overflowing_deposit_keeps_session_alive() {
    let script = "Alice\n10\n79228162514264337593543950335\n20\n100\n1\n10\n1\n3\n10\n4\n";
    let mut console = Console::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        Teller::default(),
    );
    let customer = console.run().unwrap().unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();

    assert!(output.contains("Amount out of range.\nReceipt:"));
    assert!(output.contains("Balance: 79228162514264337593543950335\n"));
    assert_eq!(customer.find_account(10).unwrap().balance(), Decimal::MAX);
}

#[test]
fn test_json_receipt_is_its_own_line() {
    let teller = Teller::new(TellerConfig {
        json_receipts: true,
        ..TellerConfig::default()
    });
    let (_, output) = run_script(teller, "2\n10\n5000\n4\n");

    assert!(output.contains("Enter amount to withdraw: Insufficient balance.\n{"));
    let line = output
        .lines()
        .find(|line| line.starts_with('{'))
        .expect("json receipt line");
    let json: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(json["outcome"]["status"], "declined");
    assert_eq!(json["outcome"]["reason"]["error"], "insufficient_funds");
}
