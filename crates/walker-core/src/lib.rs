//! `walker-core` — foundational types for the walker population manager.
//!
//! This crate is a dependency of every other `walker-*` crate.  It
//! intentionally has no `walker-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`ids`]    | `SpawnPointId`                                   |
//! | [`world`]  | `WorldPoint`, `Transform`, Euclidean distance    |
//! | [`time`]   | `Tick`                                           |
//! | [`rng`]    | `SpawnRng` (seedable, reproducible)              |
//! | [`config`] | `PopulationConfig`, `RecoveredPolicy`            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod ids;
pub mod rng;
pub mod time;
pub mod world;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PopulationConfig, RecoveredPolicy};
pub use ids::SpawnPointId;
pub use rng::SpawnRng;
pub use time::Tick;
pub use world::{Transform, WorldPoint};
