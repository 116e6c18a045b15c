//! Account-related types for the wallet engine
//!
//! This module defines the Account structure and the scalar aliases
//! shared across the crate.

use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Assigned monotonically by the store, starting at 1.
pub type AccountId = i64;

/// Monetary amount in the smallest currency unit
///
/// Signed so that intermediate arithmetic (refunds, partial sums) can be
/// expressed directly; the store never commits a negative balance.
pub type Money = i64;

/// Phone number used as the external account identifier
///
/// Unique across all registered accounts.
pub type Phone = String;

/// A wallet account
///
/// Field order matches the dump record layout (`id;phone;balance`), which is
/// what the headerless csv (de)serialization relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique, monotonically assigned identifier
    pub id: AccountId,

    /// Phone number; uniqueness is enforced at registration
    pub phone: Phone,

    /// Current balance in the smallest currency unit
    ///
    /// Never negative after a committed operation.
    pub balance: Money,
}
