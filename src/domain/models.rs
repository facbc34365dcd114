use crate::cli::{Direction, Faction};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Full application state, assembled from the four persisted collections.
/// Matching and drawing take this (or slices of it) as parameters; nothing
/// reads the store behind its back.
#[derive(Debug, Default)]
pub struct State {
    pub agents: Vec<Agent>,
    pub inventory: Vec<InventoryItem>,
    pub exchanges: Vec<Exchange>,
    pub prizes: Vec<Prize>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Agent {
    pub id: Uuid,
    pub name: String,
    pub faction: Faction,
    /// Registration time, epoch milliseconds.
    pub created_at: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InventoryItem {
    pub id: Uuid,
    pub agent_id: Uuid,
    pub item_name: String,
    pub quantity: u32,
    pub direction: Direction,
    /// Persisted but never consulted by matching; exchange progress is
    /// tracked on `Exchange` records instead.
    #[serde(default)]
    pub status: ExchangeStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Exchange {
    pub id: Uuid,
    pub from_agent_id: Uuid,
    pub to_agent_id: Uuid,
    pub item_name: String,
    pub status: ExchangeStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Prize {
    pub id: Uuid,
    pub name: String,
    pub donor_name: String,
    pub quantity: u32,
    /// Winning agent ids, at most `quantity` of them. Empty means undrawn.
    #[serde(default)]
    pub winners: Vec<Uuid>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExchangeStatus {
    #[default]
    Pending,
    Completed,
}

impl ExchangeStatus {
    pub fn flipped(self) -> Self {
        match self {
            ExchangeStatus::Pending => ExchangeStatus::Completed,
            ExchangeStatus::Completed => ExchangeStatus::Pending,
        }
    }
}

/// One candidate exchange derived from a (have, need) inventory pair.
/// Not persisted; rebuilt from the collections on every `exchange board`.
#[derive(Debug, Serialize, Clone)]
pub struct MatchRecord {
    /// Derived key: `{have.id}-{need.id}`.
    pub id: String,
    pub from_agent: Agent,
    pub to_agent: Agent,
    pub item_name: String,
    pub from_qty: u32,
    pub to_qty: u32,
    pub status: ExchangeStatus,
}

#[derive(Serialize)]
pub struct SessionReport {
    pub authenticated: bool,
}

#[derive(Serialize)]
pub struct DrawReport {
    pub prize: String,
    pub status: String,
    pub winners: Vec<String>,
}
