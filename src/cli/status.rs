//! Status CLI commands

use clap::Subcommand;

use crate::display::status::format_status_list;
use crate::error::ContaResult;
use crate::services::StatusService;
use crate::storage::Storage;

/// Status subcommands
#[derive(Subcommand)]
pub enum StatusCommands {
    /// List statuses available to accounts
    List,
}

/// Handle a status command
pub fn handle_status_command(storage: &Storage, cmd: StatusCommands) -> ContaResult<()> {
    let service = StatusService::new(storage);

    match cmd {
        StatusCommands::List => {
            print!("{}", format_status_list(&service.picker()?));
        }
    }

    Ok(())
}
