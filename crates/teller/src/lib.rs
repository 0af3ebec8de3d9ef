//! # Minibank Teller
//!
//! Validation and dispatch layer between an operator front-end and the core
//! account model: validate, verify, authenticate, resolve, execute, receipt.

pub mod config;
pub mod error;
pub mod receipt;
pub mod session;
pub mod teller;

pub use config::TellerConfig;
pub use error::{TellerError, TellerResult};
pub use receipt::Receipt;
pub use session::{MenuChoice, SessionState};
pub use teller::Teller;
