use crate::domain::models::{Agent, Exchange, InventoryItem, Prize, State};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub fn data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("firstsat"))
}

fn agents_path() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join("agents.json"))
}

fn inventory_path() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join("inventory.json"))
}

fn exchanges_path() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join("exchanges.json"))
}

fn prizes_path() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join("prizes.json"))
}

fn auth_flag_path() -> anyhow::Result<PathBuf> {
    Ok(data_dir()?.join("auth"))
}

/// Missing file and malformed content both read as an empty collection;
/// there is no schema versioning to tell them apart.
fn read_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let Ok(raw) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(items)?)?;
    Ok(())
}

/// Full snapshot of every collection. Each command loads once, mutates in
/// memory, and persists the touched collection explicitly.
pub fn load_state() -> anyhow::Result<State> {
    Ok(State {
        agents: read_collection(&agents_path()?),
        inventory: read_collection(&inventory_path()?),
        exchanges: read_collection(&exchanges_path()?),
        prizes: read_collection(&prizes_path()?),
    })
}

pub fn save_agents(agents: &[Agent]) -> anyhow::Result<()> {
    write_collection(&agents_path()?, agents)
}

pub fn save_inventory(items: &[InventoryItem]) -> anyhow::Result<()> {
    write_collection(&inventory_path()?, items)
}

pub fn save_exchanges(exchanges: &[Exchange]) -> anyhow::Result<()> {
    write_collection(&exchanges_path()?, exchanges)
}

pub fn save_prizes(prizes: &[Prize]) -> anyhow::Result<()> {
    write_collection(&prizes_path()?, prizes)
}

pub fn set_authenticated(value: bool) -> anyhow::Result<()> {
    let path = auth_flag_path()?;
    if value {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, "true")?;
    } else if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

pub fn is_authenticated() -> bool {
    auth_flag_path()
        .map(|p| std::fs::read_to_string(p).map(|v| v.trim() == "true").unwrap_or(false))
        .unwrap_or(false)
}

/// Removes every stored collection and the auth flag. Irreversible; the
/// event workflow ends with a physical wipe of all recorded data.
pub fn clear_all() -> anyhow::Result<()> {
    let dir = data_dir()?;
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    Ok(())
}

/// Append-only JSONL trail of mutating commands. Best effort: audit must
/// never fail the command that triggered it.
pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/firstsat/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}
