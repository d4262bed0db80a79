//! Payment ledger commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use hostel_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for ledger commands
#[derive(Debug, Args)]
pub struct LedgerArgs {
    /// Ledger subcommand
    #[command(subcommand)]
    pub command: LedgerCommand,
}

/// Ledger subcommands
#[derive(Debug, Subcommand)]
pub enum LedgerCommand {
    /// List confirmed payments, newest first
    List {
        /// Only payments by this student
        #[arg(short, long)]
        student: Option<String>,
    },
}

/// Ledger display row for table output
#[derive(Debug, Serialize, Tabled)]
struct TransactionRow {
    /// Student
    sid: String,
    /// Room
    room: String,
    /// Payment reference
    tx_hash: String,
    /// Confirmed at (UTC)
    created_at: String,
}

/// Execute ledger commands
pub async fn execute(
    args: &LedgerArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let repos = super::open_repositories(&config).await?;

    match &args.command {
        LedgerCommand::List { student } => {
            let txs = match student {
                Some(sid) => repos.transactions.find_by_student(sid).await?,
                None => repos.transactions.find_all().await?,
            };

            let rows: Vec<TransactionRow> = txs
                .into_iter()
                .map(|t| TransactionRow {
                    sid: t.sid,
                    room: t.room,
                    tx_hash: t.tx_hash,
                    created_at: t.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    repos.close().await;
    Ok(())
}
