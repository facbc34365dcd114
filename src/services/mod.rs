//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `storage.rs` — per-collection persistence, auth flag, audit log.
//! - `matching.rs` — have/need cross-join and status toggling.
//! - `draw.rs` — random winner selection and prize resets.
//! - `auth.rs` — TOTP validation for the login gate.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible; matching and drawing take the
//!   collections as parameters and never touch the store themselves.
//! - Side effects (writes, audit) should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod auth;
pub mod draw;
pub mod matching;
pub mod output;
pub mod storage;
