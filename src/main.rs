//! Wallet Engine CLI
//!
//! Loads a ledger from a directory of dump files, then runs one query or
//! export command against it.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data sum --workers 4
//! cargo run -- data filter --account 1
//! cargo run -- data export-accounts accounts.txt
//! cargo run -- data history --account 1 --out chunks --records 50
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing dump files, unknown account, I/O failure, etc.)

use wallet_engine::cli::{self, Command};
use wallet_engine::{
    export_accounts_flat, history_to_files, import_dump, WalletError, WalletStore,
};
use std::process;

fn main() {
    env_logger::init();
    let args = cli::parse_args();

    if let Err(error) = run(&args.data_dir, args.command) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run(data_dir: &std::path::Path, command: Command) -> Result<(), WalletError> {
    let mut store = WalletStore::new();
    import_dump(&mut store, data_dir)?;

    match command {
        Command::Sum { workers } => {
            println!("{}", store.sum_payments(workers));
        }
        Command::Filter { account, workers } => {
            for payment in store.filter_payments(account, workers)? {
                println!(
                    "{};{};{};{}",
                    payment.id,
                    payment.amount,
                    payment.category,
                    payment.status.as_str()
                );
            }
        }
        Command::ExportAccounts { output } => {
            export_accounts_flat(&store, &output)?;
        }
        Command::History {
            account,
            out,
            records,
        } => {
            let history = store.export_account_history(account)?;
            history_to_files(&store, &history, &out, records)?;
        }
    }
    Ok(())
}
