use crate::cli::{DataCommands, ExchangeCommands, PrizeCommands};
use crate::domain::constants::DEFAULT_DONOR;
use crate::domain::models::{DrawReport, ExchangeStatus, Prize, SessionReport, State};
use crate::services::auth::{now_unix_secs, verify_code};
use crate::services::draw::{draw_all, draw_prize, reset_winners};
use crate::services::matching::{find_matches, toggle_match};
use crate::services::output::{print_one, print_out, print_status};
use crate::services::storage::{
    audit, clear_all, is_authenticated, save_exchanges, save_prizes, set_authenticated,
};
use uuid::Uuid;

pub fn handle_exchange_commands(
    json: bool,
    command: &ExchangeCommands,
    state: &mut State,
) -> anyhow::Result<()> {
    match command {
        ExchangeCommands::Board => {
            let matches = find_matches(&state.agents, &state.inventory, &state.exchanges);
            print_out(json, &matches, |m| {
                let tag = match m.status {
                    ExchangeStatus::Pending => "PENDING",
                    ExchangeStatus::Completed => "COMPLETED",
                };
                format!(
                    "{}\t{} ({}×{}) -> {} ({}×{})\t{}",
                    m.id, m.from_agent.name, m.from_qty, m.item_name, m.to_agent.name, m.to_qty,
                    m.item_name, tag
                )
            })?;
        }
        ExchangeCommands::Toggle { match_id } => {
            let record = toggle_match(state, match_id)?;
            audit(
                "exchange_toggle",
                serde_json::json!({"match": match_id, "status": record.status}),
            );
            save_exchanges(&state.exchanges)?;
            print_one(json, record, |r| {
                format!(
                    "{} -> {}: {}",
                    r.from_agent.name,
                    r.to_agent.name,
                    match r.status {
                        ExchangeStatus::Pending => "pending",
                        ExchangeStatus::Completed => "completed",
                    }
                )
            })?;
        }
    }
    Ok(())
}

pub fn handle_prize_commands(
    json: bool,
    command: &PrizeCommands,
    state: &mut State,
) -> anyhow::Result<()> {
    match command {
        PrizeCommands::Add { name, donor, qty } => {
            let name = name.trim();
            if name.is_empty() {
                return Ok(());
            }
            let donor = donor
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .unwrap_or(DEFAULT_DONOR);
            let prize = Prize {
                id: Uuid::new_v4(),
                name: name.to_string(),
                donor_name: donor.to_string(),
                quantity: (*qty).max(1),
                winners: vec![],
            };
            state.prizes.push(prize.clone());
            audit(
                "prize_add",
                serde_json::json!({"id": prize.id, "name": prize.name, "qty": prize.quantity}),
            );
            save_prizes(&state.prizes)?;
            print_one(json, prize, |p| {
                format!("added {} × {} (donated by {})", p.quantity, p.name, p.donor_name)
            })?;
        }
        PrizeCommands::List => {
            let agents = &state.agents;
            print_out(json, &state.prizes, |p| {
                let winners: Vec<&str> = p
                    .winners
                    .iter()
                    .map(|id| {
                        agents
                            .iter()
                            .find(|a| a.id == *id)
                            .map(|a| a.name.as_str())
                            .unwrap_or("unknown")
                    })
                    .collect();
                let outcome = if winners.is_empty() {
                    "undrawn".to_string()
                } else {
                    winners.join(", ")
                };
                format!(
                    "{}\t{} × {}\tby {}\t{}",
                    p.id, p.quantity, p.name, p.donor_name, outcome
                )
            })?;
        }
        PrizeCommands::Remove { id } => {
            let Ok(id) = id.parse::<Uuid>() else {
                return Ok(());
            };
            state.prizes.retain(|p| p.id != id);
            audit("prize_remove", serde_json::json!({"id": id}));
            save_prizes(&state.prizes)?;
        }
        PrizeCommands::Draw { id } => {
            let id: Uuid = id
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid prize id {id}"))?;
            if state.agents.is_empty() {
                return print_status(json, "no agents registered; nothing to draw");
            }
            let agents = state.agents.clone();
            let prize = state
                .prizes
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| anyhow::anyhow!("no prize with id {id}"))?;
            if !draw_prize(&agents, prize) {
                return print_status(json, "already drawn; reset it first to re-draw");
            }
            let report = draw_report(prize, &agents);
            audit(
                "prize_draw",
                serde_json::json!({"id": id, "winners": prize.winners}),
            );
            save_prizes(&state.prizes)?;
            print_one(json, report, |r| {
                format!("{}: {}", r.prize, r.winners.join(", "))
            })?;
        }
        PrizeCommands::DrawAll => {
            if state.agents.is_empty() || state.prizes.is_empty() {
                return print_status(json, "nothing to draw");
            }
            let agents = state.agents.clone();
            let drawn = draw_all(&agents, &mut state.prizes);
            audit("prize_draw_all", serde_json::json!({"drawn": drawn}));
            save_prizes(&state.prizes)?;
            let reports: Vec<DrawReport> = state
                .prizes
                .iter()
                .map(|p| draw_report(p, &agents))
                .collect();
            print_out(json, &reports, |r| {
                format!("{}\t{}\t{}", r.prize, r.status, r.winners.join(", "))
            })?;
        }
        PrizeCommands::Reset { id } => {
            let id: Uuid = id
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid prize id {id}"))?;
            let prize = state
                .prizes
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| anyhow::anyhow!("no prize with id {id}"))?;
            reset_winners(prize);
            audit("prize_reset", serde_json::json!({"id": id}));
            save_prizes(&state.prizes)?;
            print_status(json, "winners cleared")?;
        }
    }
    Ok(())
}

fn draw_report(prize: &Prize, agents: &[crate::domain::models::Agent]) -> DrawReport {
    DrawReport {
        prize: prize.name.clone(),
        status: if prize.winners.is_empty() {
            "undrawn".to_string()
        } else {
            "drawn".to_string()
        },
        winners: prize
            .winners
            .iter()
            .map(|id| {
                agents
                    .iter()
                    .find(|a| a.id == *id)
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| "unknown".to_string())
            })
            .collect(),
    }
}

pub fn handle_login(json: bool, code: &str) -> anyhow::Result<()> {
    if verify_code(code, now_unix_secs())? {
        set_authenticated(true)?;
        audit("login", serde_json::json!({"ok": true}));
        print_status(json, "session opened")
    } else {
        audit("login", serde_json::json!({"ok": false}));
        anyhow::bail!("invalid code");
    }
}

pub fn handle_logout(json: bool) -> anyhow::Result<()> {
    set_authenticated(false)?;
    audit("logout", serde_json::json!({}));
    print_status(json, "session closed")
}

pub fn handle_session_command(json: bool) -> anyhow::Result<()> {
    let report = SessionReport {
        authenticated: is_authenticated(),
    };
    print_one(json, report, |r| {
        if r.authenticated {
            "session open".to_string()
        } else {
            "no session".to_string()
        }
    })
}

pub fn handle_data_commands(json: bool, command: &DataCommands) -> anyhow::Result<()> {
    match command {
        DataCommands::Clear => {
            clear_all()?;
            audit("data_clear", serde_json::json!({}));
            print_status(json, "all event data cleared")
        }
    }
}
