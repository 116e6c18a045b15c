//! Dump record format handling
//!
//! Centralizes the delimited record format shared by every dump file:
//! `;`-separated fields, no quoting in either direction, no header row.
//! Two record terminators are in use:
//!
//! - the flat single-file account format terminates records with `|`
//! - the directory dump files terminate records with CRLF
//!
//! The record structs are the domain types themselves; their field order
//! defines the field order on disk. Decoding is lenient per record: a
//! malformed row (wrong field count, non-numeric field) is logged and
//! skipped, never aborting the rest of the file.

use crate::types::WalletError;
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// Field delimiter shared by all dump formats
pub const FIELD_DELIMITER: u8 = b';';

/// Record terminator of the flat single-file account format
pub const FLAT_TERMINATOR: u8 = b'|';

/// Reader buffer size
///
/// Deliberately small so that decoding a file is exercised across many
/// bounded reads rather than one slurp; dump files written in arbitrarily
/// small chunks decode identically.
const READ_BUFFER_CAPACITY: usize = 256;

/// Reader for the flat `|`-terminated account format
pub fn flat_reader<R: Read>(input: R) -> csv::Reader<R> {
    reader_builder(Terminator::Any(FLAT_TERMINATOR)).from_reader(input)
}

/// Writer for the flat `|`-terminated account format
pub fn flat_writer<W: Write>(output: W) -> csv::Writer<W> {
    writer_builder(Terminator::Any(FLAT_TERMINATOR)).from_writer(output)
}

/// Reader for the CRLF-terminated directory dump format
pub fn dump_reader<R: Read>(input: R) -> csv::Reader<R> {
    reader_builder(Terminator::CRLF).from_reader(input)
}

/// Writer for the CRLF-terminated directory dump format
pub fn dump_writer<W: Write>(output: W) -> csv::Writer<W> {
    writer_builder(Terminator::CRLF).from_writer(output)
}

fn reader_builder(terminator: Terminator) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(FIELD_DELIMITER)
        .terminator(terminator)
        .quoting(false)
        .has_headers(false)
        .flexible(true)
        .buffer_capacity(READ_BUFFER_CAPACITY);
    builder
}

fn writer_builder(terminator: Terminator) -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(FIELD_DELIMITER)
        .terminator(terminator)
        .quote_style(QuoteStyle::Never)
        .has_headers(false);
    builder
}

/// Serialize `records` through `writer`, terminating every record
///
/// Encoding is total for well-formed entities; any failure here is an I/O
/// problem and is fatal to the surrounding export.
pub fn encode_records<T, W>(writer: &mut csv::Writer<W>, records: &[T]) -> Result<(), WalletError>
where
    T: Serialize,
    W: Write,
{
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Deserialize every well-formed record from `reader`
///
/// Malformed records are logged and skipped; previously decoded records are
/// kept. Only an underlying I/O failure aborts the read.
pub fn decode_records<T, R>(reader: &mut csv::Reader<R>) -> Result<Vec<T>, WalletError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut decoded = Vec::new();
    for (index, row) in reader.deserialize::<T>().enumerate() {
        match row {
            Ok(record) => decoded.push(record),
            Err(error) if error.is_io_error() => return Err(error.into()),
            Err(error) => warn!("skipping malformed record {}: {}", index + 1, error),
        }
    }
    Ok(decoded)
}
