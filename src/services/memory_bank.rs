//! In-process banking service.
//!
//! [`InMemoryBankingService`] keeps balances in a map behind a mutex. It
//! enforces session discipline so that code driving it can be checked for
//! balanced open/close calls, and it backs the `atm` demo binary.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use tracing::debug;

use crate::{
    error::BankingError,
    models::account::{AccountId, Amount},
    services::banking_service::BankingService,
};

#[derive(Debug, Default)]
struct Ledger {
    balances: HashMap<AccountId, Amount>,
    session_open: bool,
    sessions_opened: u64,
}

impl Ledger {
    fn require_session(&self) -> Result<(), BankingError> {
        if self.session_open {
            Ok(())
        } else {
            Err(BankingError::SessionNotOpen)
        }
    }

    fn balance_mut(&mut self, account: AccountId) -> Result<&mut Amount, BankingError> {
        self.balances
            .get_mut(&account)
            .ok_or(BankingError::AccountNotFound(account))
    }
}

/// Banking service holding every balance in memory.
///
/// # Rules
///
/// - Account operations fail with `SessionNotOpen` outside a session
/// - Unknown accounts fail with `AccountNotFound`
/// - Debits never overdraw; they fail with `InsufficientBalance`
/// - Overflowing arithmetic fails with `InvalidRequest`
#[derive(Debug, Default)]
pub struct InMemoryBankingService {
    ledger: Mutex<Ledger>,
}

impl InMemoryBankingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `account` with `balance`, replacing any earlier seed.
    pub fn with_account(mut self, account: AccountId, balance: Amount) -> Self {
        self.ledger
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .balances
            .insert(account, balance);
        self
    }

    /// Current balance, read without a session. `None` for unknown accounts.
    pub fn balance_of(&self, account: AccountId) -> Option<Amount> {
        self.lock().ok()?.balances.get(&account).copied()
    }

    pub fn is_session_open(&self) -> bool {
        self.lock().map(|ledger| ledger.session_open).unwrap_or(false)
    }

    /// Number of sessions opened since construction.
    pub fn sessions_opened(&self) -> u64 {
        self.lock().map(|ledger| ledger.sessions_opened).unwrap_or(0)
    }

    /// Nothing in this module panics while holding the lock; a poisoned lock
    /// only comes from a caller's thread dying mid-operation, and is reported
    /// as `Unavailable` rather than propagating the panic.
    fn lock(&self) -> Result<MutexGuard<'_, Ledger>, BankingError> {
        self.ledger
            .lock()
            .map_err(|_| BankingError::Unavailable("ledger lock poisoned".to_string()))
    }
}

fn overflow(account: AccountId) -> BankingError {
    BankingError::InvalidRequest(format!("balance overflow on account {account}"))
}

impl BankingService for InMemoryBankingService {
    fn open_session(&self) -> Result<(), BankingError> {
        let mut ledger = self.lock()?;
        if ledger.session_open {
            return Err(BankingError::SessionAlreadyOpen);
        }

        ledger.session_open = true;
        ledger.sessions_opened += 1;
        Ok(())
    }

    fn close_session(&self) -> Result<(), BankingError> {
        let mut ledger = self.lock()?;
        ledger.require_session()?;

        ledger.session_open = false;
        Ok(())
    }

    fn credit(&self, account: AccountId, amount: Amount) -> Result<(), BankingError> {
        let mut ledger = self.lock()?;
        ledger.require_session()?;

        let balance = ledger.balance_mut(account)?;
        *balance = balance.checked_add(amount).ok_or_else(|| overflow(account))?;
        debug!(account, amount, "account credited");
        Ok(())
    }

    fn debit(&self, account: AccountId, amount: Amount) -> Result<(), BankingError> {
        let mut ledger = self.lock()?;
        ledger.require_session()?;

        let balance = ledger.balance_mut(account)?;
        if *balance < amount {
            return Err(BankingError::InsufficientBalance);
        }
        *balance = balance.checked_sub(amount).ok_or_else(|| overflow(account))?;
        debug!(account, amount, "account debited");
        Ok(())
    }

    /// Credit `first`, then debit `second`, as one step.
    ///
    /// Nothing changes unless both legs succeed. Returns the resulting balance.
    fn double_transaction(
        &self,
        account: AccountId,
        first: Amount,
        second: Amount,
    ) -> Result<Amount, BankingError> {
        let mut ledger = self.lock()?;
        ledger.require_session()?;

        let balance = ledger.balance_mut(account)?;
        let credited = balance.checked_add(first).ok_or_else(|| overflow(account))?;
        if credited < second {
            return Err(BankingError::InsufficientBalance);
        }
        *balance = credited.checked_sub(second).ok_or_else(|| overflow(account))?;
        debug!(account, first, second, "double transaction applied");
        Ok(*balance)
    }

    fn get_balance(&self, account: AccountId) -> Result<Amount, BankingError> {
        let ledger = self.lock()?;
        ledger.require_session()?;

        ledger
            .balances
            .get(&account)
            .copied()
            .ok_or(BankingError::AccountNotFound(account))
    }
}
