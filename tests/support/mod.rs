//! Shared test doubles and helpers for the integration tests.
#![allow(dead_code)]

use atm_withdrawal::{
    error::BankingError,
    models::account::{AccountId, Amount},
    services::banking_service::BankingService,
};
use mockall::mock;

pub const ACCOUNT: AccountId = 1234;
pub const OTHER_ACCOUNT: AccountId = 5678;
pub const AMOUNT: Amount = 1000;

mock! {
    pub BankServer {}

    impl BankingService for BankServer {
        fn open_session(&self) -> Result<(), BankingError>;
        fn close_session(&self) -> Result<(), BankingError>;
        fn credit(&self, account: AccountId, amount: Amount) -> Result<(), BankingError>;
        fn debit(&self, account: AccountId, amount: Amount) -> Result<(), BankingError>;
        fn double_transaction(
            &self,
            account: AccountId,
            first: Amount,
            second: Amount,
        ) -> Result<Amount, BankingError>;
        fn get_balance(&self, account: AccountId) -> Result<Amount, BankingError>;
    }
}

/// Marks that a test reached a given step, so steps can be ordered against
/// banking calls.
pub trait Checkpoint {
    fn reached(&self, step: u32);
}

mock! {
    pub Marker {}

    impl Checkpoint for Marker {
        fn reached(&self, step: u32);
    }
}

/// Mock that accepts any number of session open/close calls.
///
/// Use it when a test only cares about balance and debit calls.
pub fn lenient_sessions() -> MockBankServer {
    let mut mock = MockBankServer::new();
    mock.expect_open_session().returning(|| Ok(()));
    mock.expect_close_session().returning(|| Ok(()));
    mock
}

/// Lenient mock that also accepts any debit.
pub fn lenient_bank() -> MockBankServer {
    let mut mock = lenient_sessions();
    mock.expect_debit().returning(|_, _| Ok(()));
    mock
}
