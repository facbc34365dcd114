//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `roster.rs` — agent registration and inventory listings.
//! - `event.rs` — exchange board, prize draws, session, data admin.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Mutate state in memory, audit, then persist the touched collection.

pub mod event;
pub mod roster;

pub use event::{
    handle_data_commands, handle_exchange_commands, handle_login, handle_logout,
    handle_prize_commands, handle_session_command,
};
pub use roster::{handle_agent_commands, handle_item_commands};
