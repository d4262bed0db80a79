//! Room directory commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use hostel_core::error::{AppError, ErrorKind};
use hostel_service::{AllotmentService, RequestContext};

use crate::output::{self, OutputFormat};

/// Arguments for room commands
#[derive(Debug, Args)]
pub struct RoomArgs {
    /// Room subcommand
    #[command(subcommand)]
    pub command: RoomCommand,
}

/// Room subcommands
#[derive(Debug, Subcommand)]
pub enum RoomCommand {
    /// Seed one or more available rooms
    Add {
        /// Room identifiers
        #[arg(required = true)]
        rooms: Vec<String>,
    },
    /// List rooms
    List {
        /// Only occupied rooms
        #[arg(long)]
        occupied: bool,
    },
    /// Free an occupied room
    Revoke {
        /// Room identifier
        room: String,
    },
}

/// Room display row for table output
#[derive(Debug, Serialize, Tabled)]
struct RoomRow {
    /// Room
    room: String,
    /// Status
    status: String,
    /// Assigned student
    assigned_sid: String,
}

/// Execute room commands
pub async fn execute(
    args: &RoomArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let repos = super::open_repositories(&config).await?;

    match &args.command {
        RoomCommand::Add { rooms } => {
            for room in rooms.iter().map(|r| r.trim()).filter(|r| !r.is_empty()) {
                match repos.rooms.create(room).await {
                    Ok(_) => output::print_success(&format!("Room '{room}' added")),
                    Err(e) if e.kind == ErrorKind::Conflict => output::print_warning(&e.message),
                    Err(e) => return Err(e),
                }
            }
        }
        RoomCommand::List { occupied } => {
            let rooms = if *occupied {
                repos.rooms.find_occupied().await?
            } else {
                repos.rooms.find_all().await?
            };

            let rows: Vec<RoomRow> = rooms
                .into_iter()
                .map(|r| RoomRow {
                    room: r.room,
                    status: r.status.to_string(),
                    assigned_sid: r.assigned_sid.unwrap_or_default(),
                })
                .collect();

            output::print_list(&rows, format);
        }
        RoomCommand::Revoke { room } => {
            let service = AllotmentService::new(repos.rooms.clone(), repos.transactions.clone());
            service
                .revoke_room(&RequestContext::admin("hostel-cli"), room)
                .await?;
            output::print_success(&format!("Room '{room}' is available again"));
        }
    }

    repos.close().await;
    Ok(())
}
