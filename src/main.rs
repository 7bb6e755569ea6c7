//! ATM demo - command-line entry point
//!
//! Seeds an in-memory ledger with one account and runs each requested
//! withdrawal against it, printing one JSON receipt per line.
//!
//! # Startup Flow
//!
//! 1. Initialize logging (stderr, so stdout stays machine-readable)
//! 2. Load configuration from environment variables
//! 3. Apply command-line overrides
//! 4. Seed the ledger and run the withdrawals in order

use std::io::Write;

use anyhow::Context;
use atm_withdrawal::{
    config::Config,
    models::{
        account::{AccountId, Amount},
        withdrawal::WithdrawalReceipt,
    },
    services::{memory_bank::InMemoryBankingService, withdrawal_service::WithdrawalController},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "atm", version, about = "Withdraw cash from a simulated account", long_about = None)]
struct Cli {
    /// Account to withdraw from (overrides ATM_ACCOUNT_NUMBER)
    #[arg(short, long, value_name = "ID", allow_negative_numbers = true)]
    account: Option<AccountId>,

    /// Opening balance of the account (overrides ATM_OPENING_BALANCE)
    #[arg(short, long, value_name = "AMOUNT", allow_negative_numbers = true)]
    balance: Option<Amount>,

    /// Amounts to withdraw, in order
    #[arg(value_name = "AMOUNT", required = true, allow_negative_numbers = true)]
    amounts: Vec<Amount>,
}

fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info")
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("invalid ATM_* configuration")?;

    run(cli, config, &mut std::io::stdout().lock())
}

/// Run every requested withdrawal in order, writing one receipt per line.
///
/// Stops at the first collaborator error. Receipts already written stay written.
fn run(cli: Cli, config: Config, out: &mut impl Write) -> anyhow::Result<()> {
    let account = cli.account.unwrap_or(config.account_number);
    let opening_balance = cli.balance.unwrap_or(config.opening_balance);
    tracing::info!(account, opening_balance, "Configuration loaded");

    let bank = InMemoryBankingService::new().with_account(account, opening_balance);
    let atm = WithdrawalController::new(&bank);

    for amount in cli.amounts {
        let outcome = atm
            .withdraw_outcome(account, amount)
            .with_context(|| format!("withdrawal of {amount} from account {account} failed"))?;

        let receipt = WithdrawalReceipt::from(outcome);
        writeln!(out, "{}", serde_json::to_string(&receipt)?)?;
    }

    tracing::info!(
        account,
        closing_balance = ?bank.balance_of(account),
        "All withdrawals processed"
    );

    Ok(())
}
