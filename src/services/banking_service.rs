//! Banking service capability.
//!
//! The withdrawal controller talks to the bank only through this trait. A real
//! backend (network client, database) and a test double are interchangeable:
//! both implement [`BankingService`] and nothing else changes.

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::{
    error::BankingError,
    models::account::{AccountId, Amount},
};

/// Operations offered by the system of record for account balances.
///
/// Every call is synchronous and blocks until the service answers. Errors
/// are the service's own; callers decide whether to propagate them.
#[cfg_attr(test, automock)]
pub trait BankingService {
    /// Establish the connection context for a sequence of calls.
    fn open_session(&self) -> Result<(), BankingError>;

    /// Tear down the connection context opened by [`open_session`](Self::open_session).
    fn close_session(&self) -> Result<(), BankingError>;

    /// Increase the account balance by `amount`.
    fn credit(&self, account: AccountId, amount: Amount) -> Result<(), BankingError>;

    /// Decrease the account balance by `amount`.
    fn debit(&self, account: AccountId, amount: Amount) -> Result<(), BankingError>;

    /// Apply a combined two-value operation and return its result.
    fn double_transaction(
        &self,
        account: AccountId,
        first: Amount,
        second: Amount,
    ) -> Result<Amount, BankingError>;

    /// Read the current balance. Never mutates the account.
    fn get_balance(&self, account: AccountId) -> Result<Amount, BankingError>;
}

macro_rules! forward_banking_service {
    ($($ptr:ty),+ $(,)?) => {$(
        impl<T: BankingService + ?Sized> BankingService for $ptr {
            fn open_session(&self) -> Result<(), BankingError> {
                (**self).open_session()
            }

            fn close_session(&self) -> Result<(), BankingError> {
                (**self).close_session()
            }

            fn credit(&self, account: AccountId, amount: Amount) -> Result<(), BankingError> {
                (**self).credit(account, amount)
            }

            fn debit(&self, account: AccountId, amount: Amount) -> Result<(), BankingError> {
                (**self).debit(account, amount)
            }

            fn double_transaction(
                &self,
                account: AccountId,
                first: Amount,
                second: Amount,
            ) -> Result<Amount, BankingError> {
                (**self).double_transaction(account, first, second)
            }

            fn get_balance(&self, account: AccountId) -> Result<Amount, BankingError> {
                (**self).get_balance(account)
            }
        }
    )+};
}

forward_banking_service!(&T, Box<T>, Arc<T>);
