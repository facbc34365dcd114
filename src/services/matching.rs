use crate::cli::Direction;
use crate::domain::models::{Agent, Exchange, InventoryItem, MatchRecord, State};
use uuid::Uuid;

/// Cross-joins HAVE entries against NEED entries on item name, excluding
/// self-matches, and overlays any recorded exchange status. One match per
/// (have, need) pair regardless of quantities; there is no splitting or
/// partial fulfillment. Entries whose agent has been deleted are skipped.
pub fn find_matches(
    agents: &[Agent],
    inventory: &[InventoryItem],
    exchanges: &[Exchange],
) -> Vec<MatchRecord> {
    let haves: Vec<&InventoryItem> = inventory
        .iter()
        .filter(|i| i.direction == Direction::Have)
        .collect();
    let needs: Vec<&InventoryItem> = inventory
        .iter()
        .filter(|i| i.direction == Direction::Need)
        .collect();

    let mut found = Vec::new();
    for have in &haves {
        for need in &needs {
            if have.item_name != need.item_name || have.agent_id == need.agent_id {
                continue;
            }
            let (Some(from), Some(to)) = (
                agents.iter().find(|a| a.id == have.agent_id),
                agents.iter().find(|a| a.id == need.agent_id),
            ) else {
                continue;
            };
            let status = exchanges
                .iter()
                .find(|e| {
                    e.from_agent_id == have.agent_id
                        && e.to_agent_id == need.agent_id
                        && e.item_name == have.item_name
                })
                .map(|e| e.status)
                .unwrap_or_default();
            found.push(MatchRecord {
                id: format!("{}-{}", have.id, need.id),
                from_agent: from.clone(),
                to_agent: to.clone(),
                item_name: have.item_name.clone(),
                from_qty: have.quantity,
                to_qty: need.quantity,
                status,
            });
        }
    }
    found
}

/// Flips a match between PENDING and COMPLETED. Updates the exchange record
/// with the matching (from, to, item) key in place, or appends a new one.
/// The caller persists the exchange collection afterwards; between two
/// viewers this is a blind read-modify-write, last write wins.
pub fn toggle_match(state: &mut State, match_id: &str) -> anyhow::Result<MatchRecord> {
    let matches = find_matches(&state.agents, &state.inventory, &state.exchanges);
    let mut record = matches
        .into_iter()
        .find(|m| m.id == match_id)
        .ok_or_else(|| anyhow::anyhow!("no match with id {match_id}"))?;

    let new_status = record.status.flipped();
    let existing = state.exchanges.iter_mut().find(|e| {
        e.from_agent_id == record.from_agent.id
            && e.to_agent_id == record.to_agent.id
            && e.item_name == record.item_name
    });
    match existing {
        Some(exchange) => exchange.status = new_status,
        None => state.exchanges.push(Exchange {
            id: Uuid::new_v4(),
            from_agent_id: record.from_agent.id,
            to_agent_id: record.to_agent.id,
            item_name: record.item_name.clone(),
            status: new_status,
        }),
    }
    record.status = new_status;
    Ok(record)
}
