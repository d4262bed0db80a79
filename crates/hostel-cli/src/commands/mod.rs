//! CLI command definitions and dispatch.

pub mod admin;
pub mod ledger;
pub mod migrate;
pub mod room;
pub mod student;

use clap::{Parser, Subcommand};

use hostel_core::config::AppConfig;
use hostel_core::error::AppError;
use hostel_database::Repositories;

use crate::output::OutputFormat;

/// Hostel room allotment: operator tools
#[derive(Debug, Parser)]
#[command(name = "hostel-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Seed and list students
    Student(student::StudentArgs),
    /// Seed, list and revoke rooms
    Room(room::RoomArgs),
    /// Inspect the payment ledger
    Ledger(ledger::LedgerArgs),
    /// Administrator credential tools
    Admin(admin::AdminArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Student(args) => student::execute(args, &self.config, self.format).await,
            Commands::Room(args) => room::execute(args, &self.config, self.format).await,
            Commands::Ledger(args) => ledger::execute(args, &self.config, self.format).await,
            Commands::Admin(args) => admin::execute(args),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_file(config_path)
}

/// Helper: open the configured storage engine
pub async fn open_repositories(config: &AppConfig) -> Result<Repositories, AppError> {
    Repositories::connect(&config.database).await
}

/// Helper: read a password from the terminal, with confirmation
pub fn prompt_password(prompt: &str) -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
