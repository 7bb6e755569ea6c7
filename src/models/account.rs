//! Account identifiers and monetary amounts.
//!
//! Both are plain integers. The withdrawal controller applies no validation
//! to either: negative, zero or unknown accounts and negative amounts are
//! passed through to the banking service, which decides what they mean.

/// Opaque account key.
///
/// Any integer is accepted, including zero and negative values.
pub type AccountId = i64;

/// Monetary quantity with no currency and no fractional part.
///
/// Balances and withdrawal amounts share this type so the sufficiency check
/// is a single integer comparison.
pub type Amount = i64;
