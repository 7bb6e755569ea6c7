//! Data models shared by the withdrawal controller and its collaborators.

/// Account and amount types
pub mod account;
/// Withdrawal outcome and receipt
pub mod withdrawal;
