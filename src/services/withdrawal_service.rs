//! Withdrawal service - the balance-check-then-debit decision.
//!
//! This service handles:
//! - Session bracketing around every withdrawal
//! - Balance validation
//! - Conditional debit
//!
//! # Session Guarantee
//!
//! The session is held by a [`Session`] guard. Whatever path `withdraw` takes
//! after the session opened (success, refusal, or a collaborator error), the
//! session is closed before control returns to the caller.

use tracing::{debug, info};

use crate::{
    error::BankingError,
    models::{
        account::{AccountId, Amount},
        withdrawal::WithdrawalOutcome,
    },
    services::{banking_service::BankingService, session::Session},
};

/// Decides and executes cash withdrawals against a banking service.
///
/// The controller owns the handle it was built with for its whole lifetime.
/// Pass `&bank` to borrow a service, or an `Arc`/`Box` to own one.
#[derive(Debug)]
pub struct WithdrawalController<S> {
    bank: S,
}

impl<S: BankingService> WithdrawalController<S> {
    pub fn new(bank: S) -> Self {
        Self { bank }
    }

    /// The banking service this controller talks to.
    pub fn bank(&self) -> &S {
        &self.bank
    }

    /// Withdraw `amount` from `account`.
    ///
    /// Returns `Ok(true)` when the account was debited and `Ok(false)` when the
    /// balance was too low. See [`withdraw_outcome`](Self::withdraw_outcome)
    /// for the details behind the boolean.
    ///
    /// # Errors
    ///
    /// Any error reported by the banking service, unchanged.
    pub fn withdraw(&self, account: AccountId, amount: Amount) -> Result<bool, BankingError> {
        self.withdraw_outcome(account, amount)
            .map(|outcome| outcome.is_success())
    }

    /// Withdraw `amount` from `account`, reporting what was decided.
    ///
    /// # Process
    ///
    /// 1. Open session
    /// 2. Read balance
    /// 3. Debit if balance >= amount (equality counts as sufficient)
    /// 4. Close session
    ///
    /// # Arguments
    ///
    /// * `account` - Account to withdraw from; not validated here
    /// * `amount` - Amount to withdraw; not validated here
    ///
    /// # Errors
    ///
    /// Any error reported by the banking service, unchanged. If the session
    /// was opened it is still closed before the error is returned. If opening
    /// the session fails, no close is attempted.
    pub fn withdraw_outcome(
        &self,
        account: AccountId,
        amount: Amount,
    ) -> Result<WithdrawalOutcome, BankingError> {
        let session = Session::open(&self.bank)?;

        let available = self.bank.get_balance(account)?;
        debug!(account, available, "balance read");

        let outcome = if available >= amount {
            self.bank.debit(account, amount)?;
            WithdrawalOutcome::Dispensed { account, amount }
        } else {
            WithdrawalOutcome::InsufficientFunds {
                account,
                requested: amount,
                available,
            }
        };

        session.close()?;

        info!(account, amount, success = outcome.is_success(), "withdrawal decided");
        Ok(outcome)
    }
}
