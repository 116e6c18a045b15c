//! Wallet Engine Library
//! # Overview
//!
//! An in-process ledger tracking accounts, payments, and favorite payment
//! templates, persisted to a custom delimited text format.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Payment, Favorite, Progress)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::store`] - The in-memory ledger and its validated mutations
//!   - [`core::aggregate`] - Partitioned concurrent aggregation over payments
//! - [`io`] - Dump file handling:
//!   - [`io::record`] - The delimited record codec
//!   - [`io::dump`] - Flat, directory, and chunked-history file modes
//!
//! # Aggregation
//!
//! The aggregation operations split the payment collection into contiguous
//! partitions, one worker thread per partition, with the caller choosing the
//! worker count:
//!
//! - **sum_payments**: grand total over all payment amounts
//! - **filter_payments**: one account's payments
//! - **filter_payments_by**: payments matching a caller-supplied predicate
//! - **sum_payments_with_progress**: streaming partial sums over fixed-size
//!   batches, consumed from a channel
//!
//! # Dump formats
//!
//! Records are `;`-delimited. The flat single-file account format terminates
//! records with `|`; the directory dump files (`accounts.dump`,
//! `payments.dump`, `favorites.dump`) terminate records with CRLF. Malformed
//! records are skipped on import, not fatal.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::WalletStore;
pub use crate::io::{
    export_accounts_flat, export_dump, history_to_files, import_accounts_flat, import_dump,
};
pub use crate::types::{
    Account, AccountId, Favorite, Money, Payment, PaymentCategory, PaymentStatus, Phone, Progress,
    WalletError,
};
