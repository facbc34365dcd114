use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use services::storage::load_state;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut state = load_state()?;

    match &cli.command {
        Commands::Agent { command } => {
            commands::handle_agent_commands(cli.json, command, &mut state)?
        }
        Commands::Item { command } => commands::handle_item_commands(cli.json, command, &mut state)?,
        Commands::Exchange { command } => {
            commands::handle_exchange_commands(cli.json, command, &mut state)?
        }
        Commands::Prize { command } => {
            commands::handle_prize_commands(cli.json, command, &mut state)?
        }
        Commands::Login { code } => commands::handle_login(cli.json, code)?,
        Commands::Logout => commands::handle_logout(cli.json)?,
        Commands::Session => commands::handle_session_command(cli.json)?,
        Commands::Data { command } => commands::handle_data_commands(cli.json, command)?,
    }
    Ok(())
}
