use crate::domain::models::{Agent, Prize};
use rand::seq::SliceRandom;

/// Uniform selection without replacement: shuffle a copy of the pool and
/// take a prefix. Winner count caps at the pool size; an agent can hold at
/// most one slot of a given prize, but nothing stops the same agent from
/// winning several distinct prizes.
fn pick_winners(agents: &[Agent], quantity: u32) -> Vec<uuid::Uuid> {
    let mut pool: Vec<&Agent> = agents.iter().collect();
    pool.shuffle(&mut rand::thread_rng());
    pool.iter()
        .take((quantity as usize).min(pool.len()))
        .map(|a| a.id)
        .collect()
}

/// Draws a single prize. Returns false without touching the prize when the
/// agent pool is empty or the prize already has winners; callers reset
/// first to re-draw.
pub fn draw_prize(agents: &[Agent], prize: &mut Prize) -> bool {
    if agents.is_empty() || !prize.winners.is_empty() {
        return false;
    }
    prize.winners = pick_winners(agents, prize.quantity);
    true
}

/// Draws every prize whose winners list is empty, leaving decided prizes
/// untouched. Repeated calls are idempotent for prizes that already have a
/// result and only fill in the gaps. Returns the number of prizes drawn.
pub fn draw_all(agents: &[Agent], prizes: &mut [Prize]) -> usize {
    if agents.is_empty() || prizes.is_empty() {
        return 0;
    }
    let mut drawn = 0;
    for prize in prizes.iter_mut() {
        if draw_prize(agents, prize) {
            drawn += 1;
        }
    }
    drawn
}

/// Back to UNDRAWN; the next draw starts from scratch.
pub fn reset_winners(prize: &mut Prize) {
    prize.winners.clear();
}
