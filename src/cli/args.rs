use crate::types::AccountId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query and export a wallet ledger persisted as dump files
#[derive(Parser, Debug)]
#[command(name = "wallet-engine")]
#[command(about = "Query and export a wallet ledger persisted as dump files", long_about = None)]
pub struct CliArgs {
    /// Directory holding accounts.dump, payments.dump and favorites.dump
    #[arg(value_name = "DATA_DIR", help = "Directory holding the dump files")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available ledger operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sum all payment amounts across parallel worker partitions
    Sum {
        /// Number of parallel workers (default: CPU cores)
        #[arg(long, value_name = "COUNT", default_value_t = num_cpus::get())]
        workers: usize,
    },

    /// List the payments belonging to one account
    Filter {
        /// Account to filter by
        #[arg(long, value_name = "ID")]
        account: AccountId,

        /// Number of parallel workers (default: CPU cores)
        #[arg(long, value_name = "COUNT", default_value_t = num_cpus::get())]
        workers: usize,
    },

    /// Write the flat `|`-terminated account dump
    ExportAccounts {
        /// Output file path
        #[arg(value_name = "FILE")]
        output: PathBuf,
    },

    /// Export one account's payment history as chunked dump files
    History {
        /// Account whose history to export
        #[arg(long, value_name = "ID")]
        account: AccountId,

        /// Target directory for the chunk files
        #[arg(long, value_name = "DIR")]
        out: PathBuf,

        /// Maximum records per chunk file
        #[arg(long, value_name = "COUNT", default_value_t = 50)]
        records: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_sum_defaults_to_cpu_count() {
        let parsed = CliArgs::try_parse_from(["wallet-engine", "data", "sum"]).unwrap();
        match parsed.command {
            Command::Sum { workers } => assert_eq!(workers, num_cpus::get()),
            other => panic!("expected Sum, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_parses_account_and_workers() {
        let parsed = CliArgs::try_parse_from([
            "wallet-engine",
            "data",
            "filter",
            "--account",
            "7",
            "--workers",
            "3",
        ])
        .unwrap();

        assert_eq!(parsed.data_dir, PathBuf::from("data"));
        match parsed.command {
            Command::Filter { account, workers } => {
                assert_eq!(account, 7);
                assert_eq!(workers, 3);
            }
            other => panic!("expected Filter, got {:?}", other),
        }
    }

    #[test]
    fn test_history_defaults_records() {
        let parsed = CliArgs::try_parse_from([
            "wallet-engine",
            "data",
            "history",
            "--account",
            "1",
            "--out",
            "chunks",
        ])
        .unwrap();

        match parsed.command {
            Command::History { records, .. } => assert_eq!(records, 50),
            other => panic!("expected History, got {:?}", other),
        }
    }

    #[rstest]
    #[case::missing_data_dir(&["wallet-engine"])]
    #[case::missing_subcommand(&["wallet-engine", "data"])]
    #[case::filter_without_account(&["wallet-engine", "data", "filter"])]
    #[case::non_numeric_account(&["wallet-engine", "data", "filter", "--account", "abc"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
