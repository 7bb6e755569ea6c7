//! Withdrawal results.
//!
//! This module defines:
//! - `WithdrawalOutcome`: what the controller decided for one withdrawal
//! - `WithdrawalReceipt`: serializable record of that decision, printed by the `atm` binary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::{AccountId, Amount};

/// Result of a withdrawal that reached a decision.
///
/// Collaborator failures are not outcomes; they are returned as
/// [`BankingError`](crate::error::BankingError) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WithdrawalOutcome {
    /// The balance covered the amount and the account was debited.
    Dispensed { account: AccountId, amount: Amount },

    /// The balance was lower than the amount; nothing was debited.
    InsufficientFunds {
        account: AccountId,
        requested: Amount,
        available: Amount,
    },
}

impl WithdrawalOutcome {
    /// Collapse the outcome to the boolean withdrawal contract.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Dispensed { .. })
    }

    pub fn account(&self) -> AccountId {
        match *self {
            Self::Dispensed { account, .. } | Self::InsufficientFunds { account, .. } => account,
        }
    }

    /// Amount the customer asked for.
    pub fn requested(&self) -> Amount {
        match *self {
            Self::Dispensed { amount, .. } => amount,
            Self::InsufficientFunds { requested, .. } => requested,
        }
    }
}

impl From<WithdrawalOutcome> for bool {
    fn from(outcome: WithdrawalOutcome) -> Self {
        outcome.is_success()
    }
}

/// Record of one withdrawal.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "account": 1234,
///   "amount": 1000,
///   "status": "insufficient_funds",
///   "available": 999,
///   "completed_at": "2025-12-20T10:00:00Z"
/// }
/// ```
///
/// `available` is only present when the withdrawal was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalReceipt {
    /// Unique identifier for this receipt
    pub id: Uuid,

    pub account: AccountId,

    /// Amount requested
    pub amount: Amount,

    /// "dispensed" or "insufficient_funds"
    pub status: String,

    /// Balance seen when the withdrawal was refused
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub available: Option<Amount>,

    /// When the controller reached its decision
    pub completed_at: DateTime<Utc>,
}

/// Stamp an outcome with a fresh id and the current time.
impl From<WithdrawalOutcome> for WithdrawalReceipt {
    fn from(outcome: WithdrawalOutcome) -> Self {
        let (status, available) = match outcome {
            WithdrawalOutcome::Dispensed { .. } => ("dispensed", None),
            WithdrawalOutcome::InsufficientFunds { available, .. } => {
                ("insufficient_funds", Some(available))
            }
        };

        Self {
            id: Uuid::new_v4(),
            account: outcome.account(),
            amount: outcome.requested(),
            status: status.to_string(),
            available,
            completed_at: Utc::now(),
        }
    }
}
