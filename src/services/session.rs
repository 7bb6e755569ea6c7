//! Scoped banking sessions.
//!
//! [`Session`] opens a session when it is created and closes it when it goes
//! away, so an early return through `?` cannot leave a session open. A panic
//! is the exception: see [`Session`].

use tracing::{debug, warn};

use crate::{error::BankingError, services::banking_service::BankingService};

/// An open session on a banking service.
///
/// Call [`close`](Session::close) on the success path to observe a failing
/// close. If the guard is dropped instead, the close still happens and a
/// failure is logged.
///
/// A guard dropped while its thread is panicking does not call
/// `close_session`, and the session stays open on the service.
#[must_use = "dropping the session closes it immediately"]
pub struct Session<'a, S: BankingService + ?Sized> {
    bank: &'a S,
    open: bool,
}

impl<'a, S: BankingService + ?Sized> Session<'a, S> {
    /// Open a session on `bank`.
    ///
    /// # Errors
    ///
    /// Returns the service's error if the session cannot be opened. No close
    /// call is made in that case.
    pub fn open(bank: &'a S) -> Result<Self, BankingError> {
        bank.open_session()?;
        debug!("banking session opened");

        Ok(Self { bank, open: true })
    }

    /// Close the session, reporting the service's answer.
    pub fn close(mut self) -> Result<(), BankingError> {
        self.open = false;
        self.bank.close_session()?;
        debug!("banking session closed");

        Ok(())
    }
}

impl<S: BankingService + ?Sized> Drop for Session<'_, S> {
    fn drop(&mut self) {
        // Calling into the collaborator while unwinding risks a double panic.
        if !self.open || std::thread::panicking() {
            return;
        }

        match self.bank.close_session() {
            Ok(()) => debug!("banking session closed on early exit"),
            Err(error) => warn!(%error, "failed to close banking session"),
        }
    }
}
