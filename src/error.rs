//! Error types returned by banking-service collaborators.
//!
//! Every [`BankingService`](crate::services::banking_service::BankingService)
//! operation returns `Result<_, BankingError>`. The withdrawal controller never
//! translates these errors: whatever the collaborator reports is handed back to
//! the caller unchanged.

use crate::models::account::AccountId;

/// Banking-service error type.
///
/// # Error Categories
///
/// - **Resource Errors**: the account does not exist
/// - **Business Logic Errors**: operations that violate ledger rules
/// - **Session Errors**: calls made outside of (or on top of) a session
/// - **Availability Errors**: the backing service cannot be reached
///
/// The enum is `Clone` so a test double can hand out the same error on every
/// call it answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankingError {
    /// Requested account does not exist.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Account has insufficient balance for the requested operation.
    #[error("Insufficient balance")]
    InsufficientBalance,

    /// Operation arguments are invalid (e.g., arithmetic overflow).
    ///
    /// The String contains details about what was invalid.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// An account operation was attempted without an open session.
    #[error("No session is open")]
    SessionNotOpen,

    /// A session was opened while another one was still open.
    #[error("A session is already open")]
    SessionAlreadyOpen,

    /// The banking service could not be reached or is in a broken state.
    #[error("Banking service unavailable: {0}")]
    Unavailable(String),
}
