//! I/O module
//!
//! Handles dump file reading and writing.
//!
//! # Components
//!
//! - `record` - dump record format handling (delimiters, encode/decode)
//! - `dump` - file-level export/import in flat, directory, and chunked modes

pub mod dump;
pub mod record;

pub use dump::{
    export_accounts_flat, export_dump, history_to_files, import_accounts_flat, import_dump,
};
