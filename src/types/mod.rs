//! Types module
//!
//! Contains core data structures used throughout the application:
//! - `account`: accounts and the scalar aliases (IDs, money, phones)
//! - `payment`: payments, favorites, and aggregation progress units
//! - `error`: the wallet error enum

pub mod account;
pub mod error;
pub mod payment;

pub use account::{Account, AccountId, Money, Phone};
pub use error::WalletError;
pub use payment::{Favorite, Payment, PaymentCategory, PaymentStatus, Progress};
