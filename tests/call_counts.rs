//! Verifying how many times the banking service is consulted.

mod support;

use atm_withdrawal::{error::BankingError, services::withdrawal_service::WithdrawalController};
use mockall::predicate::eq;
use support::{ACCOUNT, AMOUNT, lenient_bank, lenient_sessions};

/// Three withdrawals against a balance that shrinks 2000 -> 1000 -> 0.
#[test]
fn consecutive_answers_drain_the_account() {
    let mut mock = lenient_bank();
    let mut balances = [2000, 1000, 0].into_iter();
    mock.expect_get_balance()
        .with(eq(ACCOUNT))
        .times(3)
        .returning(move |_| Ok(balances.next().unwrap_or_default()));

    let atm = WithdrawalController::new(&mock);

    assert_eq!(atm.withdraw(ACCOUNT, AMOUNT), Ok(true));
    assert_eq!(atm.withdraw(ACCOUNT, AMOUNT), Ok(true));
    assert_eq!(atm.withdraw(ACCOUNT, AMOUNT), Ok(false));
}

/// Once-only expectations are used in the order they were declared.
#[test]
fn once_expectations_are_consumed_in_order() {
    let mut mock = lenient_bank();
    mock.expect_get_balance().times(1).returning(|_| Ok(5000));
    mock.expect_get_balance().times(1).returning(|_| Ok(4000));
    mock.expect_get_balance().times(1).returning(|_| Ok(0));

    let atm = WithdrawalController::new(&mock);

    assert_eq!(atm.withdraw(ACCOUNT, AMOUNT), Ok(true));
    assert_eq!(atm.withdraw(ACCOUNT, AMOUNT), Ok(true));
    assert_eq!(atm.withdraw(ACCOUNT, AMOUNT), Ok(false));
}

/// One specific first answer, then a fallback for every later read.
#[test]
fn first_answer_then_repeated_fallback() {
    let mut mock = lenient_bank();
    mock.expect_get_balance().times(1).returning(|_| Ok(5000));
    mock.expect_get_balance().times(..=10).returning(|_| Ok(4000));

    let atm = WithdrawalController::new(&mock);

    for _ in 0..3 {
        assert_eq!(atm.withdraw(ACCOUNT, AMOUNT), Ok(true));
    }
}

#[test]
#[should_panic(expected = "more than the expected")]
fn exceeding_the_expected_count_fails() {
    let mut mock = lenient_bank();
    mock.expect_get_balance().times(1).returning(|_| Ok(5000));

    let atm = WithdrawalController::new(&mock);
    let _ = atm.withdraw(ACCOUNT, AMOUNT);
    let _ = atm.withdraw(ACCOUNT, AMOUNT);
}

#[test]
fn repeated_answer_allows_any_number_of_reads() {
    let mut mock = lenient_bank();
    mock.expect_get_balance().returning(|_| Ok(AMOUNT));

    let atm = WithdrawalController::new(&mock);

    assert_eq!(atm.withdraw(ACCOUNT, AMOUNT), Ok(true));
    assert_eq!(atm.withdraw(ACCOUNT, AMOUNT), Ok(true));
}

/// An empty account must never be debited.
#[test]
fn empty_account_is_never_debited() {
    let mut mock = lenient_sessions();
    mock.expect_get_balance()
        .with(eq(ACCOUNT))
        .times(1)
        .returning(|_| Ok(0));
    mock.expect_debit().never();

    let atm = WithdrawalController::new(&mock);

    assert_eq!(atm.withdraw(ACCOUNT, AMOUNT), Ok(false));
}

#[test]
fn sessions_are_opened_and_closed_once_per_withdrawal() {
    let mut mock = support::MockBankServer::new();
    mock.expect_open_session().times(3).returning(|| Ok(()));
    mock.expect_close_session().times(3).returning(|| Ok(()));
    mock.expect_get_balance().times(3).returning(|_| Ok(500));
    mock.expect_debit().never();

    let atm = WithdrawalController::new(&mock);

    for _ in 0..3 {
        assert_eq!(atm.withdraw(ACCOUNT, AMOUNT), Ok(false));
    }
}

#[test]
fn failed_reads_still_close_every_session() {
    let mut mock = support::MockBankServer::new();
    mock.expect_open_session().times(2).returning(|| Ok(()));
    mock.expect_close_session().times(2).returning(|| Ok(()));
    mock.expect_get_balance()
        .times(2)
        .returning(|_| Err(BankingError::Unavailable("timeout".to_string())));

    let atm = WithdrawalController::new(&mock);

    assert!(atm.withdraw(ACCOUNT, AMOUNT).is_err());
    assert!(atm.withdraw(ACCOUNT, AMOUNT).is_err());
}
