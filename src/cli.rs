use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "firstsat", version, about = "Event-support CLI: roster, exchange matching, prize draws")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Agent {
        #[command(subcommand)]
        command: AgentCommands,
    },
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    Exchange {
        #[command(subcommand)]
        command: ExchangeCommands,
    },
    Prize {
        #[command(subcommand)]
        command: PrizeCommands,
    },
    Login {
        code: String,
    },
    Logout,
    Session,
    Data {
        #[command(subcommand)]
        command: DataCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AgentCommands {
    Add {
        name: String,
        #[arg(long, value_enum)]
        faction: Faction,
    },
    List {
        query: Option<String>,
    },
    Remove {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    Add {
        name: String,
        #[arg(long)]
        agent: String,
        #[arg(long, default_value_t = 1)]
        qty: u32,
        #[arg(long, value_enum, default_value_t = Direction::Have)]
        direction: Direction,
    },
    List,
    Remove {
        id: String,
    },
    Catalog,
}

#[derive(Subcommand, Debug)]
pub enum ExchangeCommands {
    Board,
    Toggle {
        match_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrizeCommands {
    Add {
        name: String,
        #[arg(long)]
        donor: Option<String>,
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    List,
    Remove {
        id: String,
    },
    Draw {
        id: String,
    },
    DrawAll,
    Reset {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    Clear,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum Faction {
    Enlightened,
    Resistance,
}

impl Faction {
    pub fn label(self) -> &'static str {
        match self {
            Faction::Enlightened => "Enlightened (ENL)",
            Faction::Resistance => "Resistance (RES)",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Have,
    Need,
}
