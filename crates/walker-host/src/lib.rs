//! `walker-host` — the boundary between the population manager and the host
//! simulator.
//!
//! The host owns walker actors, their physics, and their navigation
//! controllers.  The population manager only ever touches them through the
//! [`WalkerHost`] capability trait, injected at construction, so the core
//! reconciliation logic is testable against [`FakeHost`] without an engine.
//!
//! | Module          | Contents                                  |
//! |-----------------|-------------------------------------------|
//! | [`spawn_point`] | `SpawnPoint`, `SpawnPointKind`            |
//! | [`host`]        | the `WalkerHost` trait                    |
//! | [`fake`]        | `FakeHost` — deterministic scripted host  |

pub mod fake;
pub mod host;
pub mod spawn_point;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use fake::{FakeHost, MoveRecord};
pub use host::WalkerHost;
pub use spawn_point::{SpawnPoint, SpawnPointKind};
