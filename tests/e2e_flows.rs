use predicates::str::contains;
use serde_json::Value;
use std::collections::HashSet;

mod common;
use common::TestEnv;

#[test]
fn matching_and_toggle_flow() {
    let env = TestEnv::new();
    let alpha = env.add_agent("alpha", "enlightened");
    let bravo = env.add_agent("bravo", "resistance");

    env.add_item(&alpha, "Resonator", "3", "have");
    env.add_item(&bravo, "Resonator", "2", "need");

    // one match per (have, need) pair, quantities preserved
    let board = env.board();
    assert_eq!(board.len(), 1);
    let m = &board[0];
    assert_eq!(m["from_agent"]["name"], "alpha");
    assert_eq!(m["to_agent"]["name"], "bravo");
    assert_eq!(m["from_qty"], 3);
    assert_eq!(m["to_qty"], 2);
    assert_eq!(m["status"], "PENDING");

    let match_id = m["id"].as_str().expect("match id").to_string();
    let toggled = env.run_json(&["exchange", "toggle", &match_id]);
    assert_eq!(toggled["data"]["status"], "COMPLETED");

    // status survives a fresh board read
    assert_eq!(env.board()[0]["status"], "COMPLETED");

    // toggling twice is an involution
    env.run_json(&["exchange", "toggle", &match_id]);
    assert_eq!(env.board()[0]["status"], "PENDING");
}

#[test]
fn toggle_unknown_match_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["exchange", "toggle", "bogus-id"])
        .assert()
        .failure()
        .stderr(contains("no match"));
}

#[test]
fn deleting_an_agent_drops_their_matches() {
    let env = TestEnv::new();
    let alpha = env.add_agent("alpha", "enlightened");
    let bravo = env.add_agent("bravo", "resistance");
    env.add_item(&alpha, "Hyper Cube", "1", "have");
    env.add_item(&bravo, "Hyper Cube", "1", "need");
    assert_eq!(env.board().len(), 1);

    env.run_json(&["agent", "remove", &bravo]);
    // the need listing dangles, the board just skips it
    assert_eq!(env.board().len(), 0);
    let items = env.run_json(&["item", "list"]);
    assert_eq!(items["data"].as_array().expect("array").len(), 2);
}

#[test]
fn draw_selects_distinct_winners_from_pool() {
    let env = TestEnv::new();
    let mut pool = HashSet::new();
    for i in 0..5 {
        pool.insert(env.add_agent(&format!("agent{i}"), "enlightened"));
    }
    let prize = env.add_prize("Badge", "2");
    env.run_json(&["prize", "draw", &prize]);

    let winners = prize_winners(&env.prizes(), &prize);
    assert_eq!(winners.len(), 2);
    let unique: HashSet<&String> = winners.iter().collect();
    assert_eq!(unique.len(), 2);
    assert!(winners.iter().all(|w| pool.contains(w)));
}

#[test]
fn draw_caps_at_pool_size() {
    let env = TestEnv::new();
    for i in 0..3 {
        env.add_agent(&format!("agent{i}"), "resistance");
    }
    let prize = env.add_prize("Capsule Pack", "10");
    env.run_json(&["prize", "draw", &prize]);
    assert_eq!(prize_winners(&env.prizes(), &prize).len(), 3);
}

#[test]
fn redraw_requires_reset() {
    let env = TestEnv::new();
    for i in 0..4 {
        env.add_agent(&format!("agent{i}"), "enlightened");
    }
    let prize = env.add_prize("Badge", "1");
    env.run_json(&["prize", "draw", &prize]);
    let before = prize_winners(&env.prizes(), &prize);

    env.cmd()
        .args(["prize", "draw", &prize])
        .assert()
        .success()
        .stdout(contains("already drawn"));
    assert_eq!(prize_winners(&env.prizes(), &prize), before);

    env.run_json(&["prize", "reset", &prize]);
    assert!(prize_winners(&env.prizes(), &prize).is_empty());
    env.run_json(&["prize", "draw", &prize]);
    assert_eq!(prize_winners(&env.prizes(), &prize).len(), 1);
}

#[test]
fn bulk_draw_is_idempotent_and_fills_gaps() {
    let env = TestEnv::new();
    for i in 0..4 {
        env.add_agent(&format!("agent{i}"), "resistance");
    }
    let first = env.add_prize("Badge", "1");
    let second = env.add_prize("Sticker", "2");
    env.run_json(&["prize", "draw-all"]);

    let decided_first = prize_winners(&env.prizes(), &first);
    let decided_second = prize_winners(&env.prizes(), &second);
    assert_eq!(decided_first.len(), 1);
    assert_eq!(decided_second.len(), 2);

    // a prize added between bulk draws is the only one affected
    let third = env.add_prize("Keychain", "1");
    env.run_json(&["prize", "draw-all"]);
    assert_eq!(prize_winners(&env.prizes(), &first), decided_first);
    assert_eq!(prize_winners(&env.prizes(), &second), decided_second);
    assert_eq!(prize_winners(&env.prizes(), &third).len(), 1);
}

#[test]
fn draw_with_no_agents_is_a_no_op() {
    let env = TestEnv::new();
    let prize = env.add_prize("Badge", "1");
    env.cmd()
        .args(["prize", "draw", &prize])
        .assert()
        .success()
        .stdout(contains("no agents"));
    env.cmd()
        .args(["prize", "draw-all"])
        .assert()
        .success()
        .stdout(contains("nothing to draw"));
    assert!(prize_winners(&env.prizes(), &prize).is_empty());
}

#[test]
fn session_flow() {
    let env = TestEnv::new();
    let before = env.run_json(&["session"]);
    assert_eq!(before["data"]["authenticated"], false);

    env.run_json(&["login", "000000"]);
    let during = env.run_json(&["session"]);
    assert_eq!(during["data"]["authenticated"], true);

    env.run_json(&["logout"]);
    let after = env.run_json(&["session"]);
    assert_eq!(after["data"]["authenticated"], false);
}

#[test]
fn data_clear_wipes_every_collection() {
    let env = TestEnv::new();
    let alpha = env.add_agent("alpha", "enlightened");
    env.add_item(&alpha, "Heat Sink", "1", "have");
    env.add_prize("Badge", "1");
    env.run_json(&["login", "000000"]);

    env.run_json(&["data", "clear"]);

    assert_eq!(env.run_json(&["agent", "list"])["data"].as_array().expect("array").len(), 0);
    assert_eq!(env.run_json(&["item", "list"])["data"].as_array().expect("array").len(), 0);
    assert_eq!(env.prizes().len(), 0);
    assert_eq!(env.run_json(&["session"])["data"]["authenticated"], false);
}

fn prize_winners(prizes: &[Value], id: &str) -> Vec<String> {
    prizes
        .iter()
        .find(|p| p["id"] == id)
        .expect("prize present")
        ["winners"]
        .as_array()
        .expect("winners array")
        .iter()
        .map(|w| w.as_str().expect("winner id").to_string())
        .collect()
}
