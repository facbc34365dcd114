use crate::cli::{AgentCommands, Direction, Faction, ItemCommands};
use crate::domain::constants::ITEM_CATALOG;
use crate::domain::models::{Agent, ExchangeStatus, InventoryItem, JsonOut, State};
use crate::services::output::{print_one, print_out};
use crate::services::storage::{audit, save_agents, save_inventory};
use uuid::Uuid;

pub fn handle_agent_commands(
    json: bool,
    command: &AgentCommands,
    state: &mut State,
) -> anyhow::Result<()> {
    match command {
        AgentCommands::Add { name, faction } => {
            let name = name.trim();
            if name.is_empty() {
                // blank submit is ignored, same as every other form here
                return Ok(());
            }
            let agent = Agent {
                id: Uuid::new_v4(),
                name: name.to_string(),
                faction: *faction,
                created_at: chrono::Utc::now().timestamp_millis(),
            };
            state.agents.push(agent.clone());
            audit(
                "agent_add",
                serde_json::json!({"id": agent.id, "name": agent.name, "faction": agent.faction}),
            );
            save_agents(&state.agents)?;
            print_one(json, agent, |a| {
                format!("registered {} ({})", a.name, a.faction.label())
            })?;
        }
        AgentCommands::List { query } => {
            let needle = query.as_deref().unwrap_or("").to_lowercase();
            let filtered: Vec<Agent> = state
                .agents
                .iter()
                .filter(|a| a.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: filtered
                    })?
                );
            } else {
                for faction in [Faction::Enlightened, Faction::Resistance] {
                    let group: Vec<&Agent> =
                        filtered.iter().filter(|a| a.faction == faction).collect();
                    println!("{} — {} agent(s)", faction.label(), group.len());
                    for a in group {
                        println!("  {}\t{}", a.id, a.name);
                    }
                }
            }
        }
        AgentCommands::Remove { id } => {
            let Ok(id) = id.parse::<Uuid>() else {
                return Ok(());
            };
            // No cascade: inventory and exchange records referencing the
            // agent stay behind as dangling data.
            state.agents.retain(|a| a.id != id);
            audit("agent_remove", serde_json::json!({"id": id}));
            save_agents(&state.agents)?;
        }
    }
    Ok(())
}

pub fn handle_item_commands(
    json: bool,
    command: &ItemCommands,
    state: &mut State,
) -> anyhow::Result<()> {
    match command {
        ItemCommands::Add {
            name,
            agent,
            qty,
            direction,
        } => {
            let name = name.trim();
            let Ok(agent_id) = agent.parse::<Uuid>() else {
                return Ok(());
            };
            if name.is_empty() || !state.agents.iter().any(|a| a.id == agent_id) {
                return Ok(());
            }
            let item = InventoryItem {
                id: Uuid::new_v4(),
                agent_id,
                item_name: name.to_string(),
                quantity: (*qty).max(1),
                direction: *direction,
                status: ExchangeStatus::Pending,
            };
            // newest listings first
            state.inventory.insert(0, item.clone());
            audit(
                "item_add",
                serde_json::json!({"id": item.id, "agent": agent_id, "item": item.item_name, "direction": item.direction}),
            );
            save_inventory(&state.inventory)?;
            print_one(json, item, |i| {
                format!("listed {} × {} ({:?})", i.quantity, i.item_name, i.direction)
            })?;
        }
        ItemCommands::List => {
            let agents = &state.agents;
            print_out(json, &state.inventory, |i| {
                let owner = agents
                    .iter()
                    .find(|a| a.id == i.agent_id)
                    .map(|a| a.name.as_str())
                    .unwrap_or("unknown");
                let tag = match i.direction {
                    Direction::Have => "HAVE",
                    Direction::Need => "NEED",
                };
                format!("{}\t{}\t{} × {}\t{}", i.id, tag, i.quantity, i.item_name, owner)
            })?;
        }
        ItemCommands::Remove { id } => {
            let Ok(id) = id.parse::<Uuid>() else {
                return Ok(());
            };
            state.inventory.retain(|i| i.id != id);
            audit("item_remove", serde_json::json!({"id": id}));
            save_inventory(&state.inventory)?;
        }
        ItemCommands::Catalog => {
            let names: Vec<String> = ITEM_CATALOG.iter().map(|s| s.to_string()).collect();
            print_out(json, &names, |n| n.clone())?;
        }
    }
    Ok(())
}
