//! Dump file export and import
//!
//! Persists and restores the store's collections in the two supported modes:
//!
//! - **Flat single-file mode**: accounts only, `|`-terminated records.
//!   Importing re-registers each decoded phone as a brand-new account; IDs
//!   and balances are not restored, and phone conflicts are logged and
//!   skipped, so re-importing onto a populated store is not idempotent.
//! - **Directory mode**: up to three CRLF-terminated files
//!   (`accounts.dump`, `payments.dump`, `favorites.dump`), one per non-empty
//!   collection, each entity restored verbatim including its original ID and
//!   status.
//!
//! All file I/O here is synchronous and single-threaded. A write failure
//! mid-export can leave a truncated file behind; there is no rollback.

use crate::core::store::WalletStore;
use crate::io::record;
use crate::types::{Account, Favorite, Payment, WalletError};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

/// Directory-mode file name for the account collection
pub const ACCOUNTS_DUMP: &str = "accounts.dump";

/// Directory-mode file name for the payment collection
pub const PAYMENTS_DUMP: &str = "payments.dump";

/// Directory-mode file name for the favorite collection
pub const FAVORITES_DUMP: &str = "favorites.dump";

/// Write all accounts to `path` in the flat `|`-terminated format
pub fn export_accounts_flat(store: &WalletStore, path: &Path) -> Result<(), WalletError> {
    let file = File::create(path)?;
    let mut writer = record::flat_writer(file);
    record::encode_records(&mut writer, store.accounts())
}

/// Re-register the phones found in a flat account dump
///
/// Only the phone field of each record is reused; IDs and balances are
/// assigned fresh by registration. Malformed records and already-registered
/// phones are logged and skipped. A missing file is a hard error.
pub fn import_accounts_flat(store: &mut WalletStore, path: &Path) -> Result<(), WalletError> {
    let file = File::open(path)?;
    let mut reader = record::flat_reader(file);
    for account in record::decode_records::<Account, _>(&mut reader)? {
        if let Err(error) = store.register_account(&account.phone) {
            warn!("skipping account '{}': {}", account.phone, error);
        }
    }
    Ok(())
}

/// Write every non-empty collection into `dir`, one dump file each
///
/// The directory is created if missing. An empty collection produces no
/// file.
pub fn export_dump(store: &WalletStore, dir: &Path) -> Result<(), WalletError> {
    fs::create_dir_all(dir)?;
    if !store.accounts().is_empty() {
        write_dump_file(&dir.join(ACCOUNTS_DUMP), store.accounts())?;
    }
    if !store.payments().is_empty() {
        write_dump_file(&dir.join(PAYMENTS_DUMP), store.payments())?;
    }
    if !store.favorites().is_empty() {
        write_dump_file(&dir.join(FAVORITES_DUMP), store.favorites())?;
    }
    Ok(())
}

/// Restore a directory dump into `store`, entities verbatim
///
/// `accounts.dump` and `payments.dump` must exist; a missing
/// `favorites.dump` is tolerated. Malformed records within a file are
/// logged and skipped, so a partially corrupt dump yields a partially
/// populated store.
pub fn import_dump(store: &mut WalletStore, dir: &Path) -> Result<(), WalletError> {
    for account in read_dump_file::<Account>(&dir.join(ACCOUNTS_DUMP))? {
        store.restore_account(account);
    }
    for payment in read_dump_file::<Payment>(&dir.join(PAYMENTS_DUMP))? {
        store.restore_payment(payment);
    }

    let favorites_path = dir.join(FAVORITES_DUMP);
    if favorites_path.exists() {
        for favorite in read_dump_file::<Favorite>(&favorites_path)? {
            store.restore_favorite(favorite);
        }
    }
    Ok(())
}

/// Split a payment history into chunked dump files under `dir`
///
/// `records` is the maximum record count per file and must be at least 1.
/// A non-empty history that fits into a single chunk snapshots the store's
/// full payment log to `payments.dump`; larger histories are split into
/// disjoint, consecutive chunks written to `payments1.dump`,
/// `payments2.dump`, ... in original order.
pub fn history_to_files(
    store: &WalletStore,
    payments: &[Payment],
    dir: &Path,
    records: usize,
) -> Result<(), WalletError> {
    if records == 0 {
        return Err(WalletError::MinimumRecords);
    }
    fs::create_dir_all(dir)?;

    if !payments.is_empty() && payments.len() <= records {
        return write_dump_file(&dir.join(PAYMENTS_DUMP), store.payments());
    }

    for (index, chunk) in payments.chunks(records).enumerate() {
        let name = format!("payments{}.dump", index + 1);
        write_dump_file(&dir.join(name), chunk)?;
    }
    Ok(())
}

fn write_dump_file<T: Serialize>(path: &Path, records: &[T]) -> Result<(), WalletError> {
    let file = File::create(path)?;
    let mut writer = record::dump_writer(file);
    record::encode_records(&mut writer, records)
}

fn read_dump_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, WalletError> {
    let file = File::open(path)?;
    let mut reader = record::dump_reader(file);
    record::decode_records(&mut reader)
}
