//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep persisted and report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — persisted collections, match records, output envelope.
//! - `constants.rs` — stable constants (item catalog, TOTP parameters).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or randomness side effects.
//!
//! ## Compatibility note
//! The persisted structs define the on-disk JSON schema. There is no
//! versioning or migration path; an incompatible shape change requires
//! `data clear`.

pub mod constants;
pub mod models;
