//! Student seeding commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use hostel_auth::PasswordHasher;
use hostel_core::error::AppError;
use hostel_entity::Student;

use crate::output::{self, OutputFormat};

/// Arguments for student commands
#[derive(Debug, Args)]
pub struct StudentArgs {
    /// Student subcommand
    #[command(subcommand)]
    pub command: StudentCommand,
}

/// Student subcommands
#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// Add a student who may log in
    Add {
        /// Student ID
        sid: String,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// List all students
    List,
}

/// Student display row for table output
#[derive(Debug, Serialize, Tabled)]
struct StudentRow {
    /// Student ID
    sid: String,
    /// Created at
    created_at: String,
}

/// Execute student commands
pub async fn execute(
    args: &StudentArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let repos = super::open_repositories(&config).await?;

    match &args.command {
        StudentCommand::Add { sid, password } => {
            let sid = sid.trim();
            if sid.is_empty() {
                return Err(AppError::validation("Student ID cannot be empty"));
            }

            let password = match password {
                Some(p) => p.clone(),
                None => super::prompt_password(&format!("Password for {sid}"))?,
            };
            if password.is_empty() {
                return Err(AppError::validation("Password cannot be empty"));
            }

            let hash = PasswordHasher::new().hash_password(&password)?;
            repos.students.create(Student::new(sid, hash)).await?;

            output::print_success(&format!("Student '{sid}' added"));
        }
        StudentCommand::List => {
            let rows: Vec<StudentRow> = repos
                .students
                .find_all()
                .await?
                .into_iter()
                .map(|s| StudentRow {
                    sid: s.sid,
                    created_at: s.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    repos.close().await;
    Ok(())
}
