//! Business logic services.
//!
//! Services contain the withdrawal decision and the banking-service seam it
//! depends on, separated from the binary's startup code.

pub mod banking_service;
pub mod memory_bank;
pub mod session;
pub mod withdrawal_service;
