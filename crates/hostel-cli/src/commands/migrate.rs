//! Database migration commands.

use clap::{Args, Subcommand};

use hostel_core::config::DatabaseProvider;
use hostel_core::error::AppError;
use hostel_database::DatabasePool;
use hostel_database::migration::run_migrations;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    if config.database.provider != DatabaseProvider::Postgres {
        return Err(AppError::configuration(format!(
            "Migrations need database.provider = \"postgres\" (configured: {})",
            config.database.provider
        )));
    }

    match &args.command {
        MigrateCommand::Run => {
            let pool = DatabasePool::connect(&config.database).await?;
            println!("Running database migrations...");
            run_migrations(pool.pool()).await?;
            pool.close().await;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
