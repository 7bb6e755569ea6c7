//! ATM withdrawal controller.
//!
//! A cash withdrawal is a single decision made against a banking service:
//! open a session, read the balance, debit when the balance covers the
//! amount, close the session.
//!
//! # Architecture
//!
//! - **Seam**: [`BankingService`](services::banking_service::BankingService), six synchronous operations
//! - **Decision**: [`WithdrawalController`](services::withdrawal_service::WithdrawalController)
//! - **Session bracketing**: [`Session`](services::session::Session) guard, closes on every exit path
//! - **Stand-in backend**: [`InMemoryBankingService`](services::memory_bank::InMemoryBankingService)
//!
//! ```
//! use atm_withdrawal::services::{
//!     memory_bank::InMemoryBankingService, withdrawal_service::WithdrawalController,
//! };
//!
//! let bank = InMemoryBankingService::new().with_account(1234, 2000);
//! let atm = WithdrawalController::new(&bank);
//!
//! assert_eq!(atm.withdraw(1234, 1000), Ok(true));
//! assert_eq!(atm.withdraw(1234, 1001), Ok(false));
//! assert_eq!(bank.balance_of(1234), Some(1000));
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;
