//! Payment-related types for the wallet engine
//!
//! Defines payments, favorite payment templates, and the progress unit
//! emitted by the streaming aggregation.

use super::account::{AccountId, Money};
use serde::{Deserialize, Serialize};

/// Free-form category tag attached to a payment
///
/// The engine imposes no validation on categories; they round-trip through
/// the dump format verbatim.
pub type PaymentCategory = String;

/// Lifecycle status of a payment
///
/// Serialized as `OK`, `FAIL`, `INPROGRESS` in dump records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    /// Payment completed successfully
    Ok,

    /// Payment was rejected; its amount is forced to zero
    Fail,

    /// Payment created but not yet settled
    ///
    /// The amount stays positive while a payment is in progress.
    InProgress,
}

impl PaymentStatus {
    /// The status tag as it appears in dump records
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Ok => "OK",
            PaymentStatus::Fail => "FAIL",
            PaymentStatus::InProgress => "INPROGRESS",
        }
    }
}

/// A single payment
///
/// Field order matches the dump record layout
/// (`id;accountID;amount;category;status`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Globally unique generated identifier (UUID v4)
    pub id: String,

    /// Owning account; must exist when the payment is created
    pub account_id: AccountId,

    /// Payment amount; positive unless the payment failed
    pub amount: Money,

    /// Free-form category tag
    pub category: PaymentCategory,

    /// Current lifecycle status
    pub status: PaymentStatus,
}

/// A favorite payment template
///
/// Derived once from an existing payment and independent afterwards: editing
/// the source payment does not affect the favorite. Field order matches the
/// dump record layout (`id;accountID;name;amount;category`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Globally unique generated identifier (UUID v4)
    pub id: String,

    /// Owning account
    pub account_id: AccountId,

    /// Display name chosen when the favorite was created
    pub name: String,

    /// Template amount
    pub amount: Money,

    /// Template category
    pub category: PaymentCategory,
}

/// One worker's report during streaming summation
///
/// Every report carries the total collection length, not the worker's own
/// partition size; only the partial sum differs per report. Transient, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Total number of payments in the collection being summed
    pub part: usize,

    /// Partial sum over this worker's partition
    pub result: Money,
}
