//! Administrator credential commands.

use clap::{Args, Subcommand};

use hostel_auth::PasswordHasher;
use hostel_core::error::AppError;

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Print an Argon2 hash for `admin.password_hash`
    HashPassword {
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub fn execute(args: &AdminArgs) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::HashPassword { password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => super::prompt_password("Admin password")?,
            };
            if password.is_empty() {
                return Err(AppError::validation("Password cannot be empty"));
            }

            let hash = PasswordHasher::new().hash_password(&password)?;

            println!("{hash}");
            output::print_kv("config key", "admin.password_hash");
            output::print_kv("environment", "HOSTEL__ADMIN__PASSWORD_HASH");
        }
    }

    Ok(())
}
