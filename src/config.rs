//! Application configuration management.
//!
//! This module handles loading configuration for the `atm` binary from
//! environment variables. It uses the `envy` crate to deserialize
//! `ATM_`-prefixed variables into a type-safe struct.

use serde::Deserialize;

use crate::models::account::{AccountId, Amount};

/// Prefix shared by every configuration variable.
const ENV_PREFIX: &str = "ATM_";

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `ATM_ACCOUNT_NUMBER` (optional): account the demo ledger is seeded with, defaults to 1234
/// - `ATM_OPENING_BALANCE` (optional): starting balance of that account, defaults to 0
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_account_number")]
    pub account_number: AccountId,

    #[serde(default)]
    pub opening_balance: Amount,
}

/// Default account if ATM_ACCOUNT_NUMBER is not set.
fn default_account_number() -> AccountId {
    1234
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_number: default_account_number(),
            opening_balance: 0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed into the
    /// expected type.
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of variables.
    ///
    /// Field names are converted after stripping the prefix:
    /// `ATM_OPENING_BALANCE` -> `opening_balance`.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }
}
