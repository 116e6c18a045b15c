//! Core business logic module
//!
//! - `store` - the in-memory ledger (accounts, payments, favorites)
//! - `aggregate` - partitioned concurrent aggregation over payments

pub mod aggregate;
pub mod store;

pub use store::WalletStore;
