//! Error types for the wallet engine
//!
//! One error enum covers the store preconditions, the dump codec, and file
//! I/O. Two broad categories:
//!
//! - **Precondition errors** (`AccountNotFound`, `NotEnoughBalance`, ...):
//!   returned to the caller, the store is left unchanged.
//! - **Recoverable decode errors** (`MalformedRecord`): logged and skipped
//!   during import so a partially corrupt dump yields a partially populated
//!   store instead of a hard failure.

use thiserror::Error;

/// Main error type for the wallet engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No account with the requested ID exists
    ///
    /// Also signalled by predicate filtering when nothing matched.
    #[error("account not found")]
    AccountNotFound,

    /// No payment with the requested ID exists
    #[error("payment not found")]
    PaymentNotFound,

    /// No favorite with the requested ID exists
    #[error("favorite payment not found")]
    FavoriteNotFound,

    /// The phone number is already attached to another account
    #[error("phone already registered")]
    PhoneRegistered,

    /// Deposits and payments require a strictly positive amount
    #[error("amount must be greater than 0")]
    AmountMustBePositive,

    /// The account balance does not cover the requested amount
    #[error("account balance is less than the requested amount")]
    NotEnoughBalance,

    /// Chunked history export requires at least one record per file
    #[error("minimum records per file is 1")]
    MinimumRecords,

    /// A dump record failed to decode
    ///
    /// Recoverable: the importer logs the record and continues.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// I/O failure while reading or writing a dump file
    ///
    /// Fatal to the export/import call that hit it.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for WalletError {
    fn from(error: std::io::Error) -> Self {
        WalletError::Io(error.to_string())
    }
}

impl From<csv::Error> for WalletError {
    fn from(error: csv::Error) -> Self {
        // Underlying I/O failures are fatal; anything else is a per-record
        // decode problem the importer may skip.
        if error.is_io_error() {
            WalletError::Io(error.to_string())
        } else {
            WalletError::MalformedRecord(error.to_string())
        }
    }
}
