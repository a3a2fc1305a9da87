//! `walker-pop` — pedestrian population controller.
//!
//! Maintains a target census of autonomous pedestrian agents ("walkers") in
//! a host simulator's scene: spawns them at catalogued points, assigns each a
//! navigation goal, detects walkers that have stopped making progress, and
//! recycles them through a two-phase stuck lifecycle
//! (live → black-listed → destroyed).
//!
//! The host is abstracted behind [`walker_host::WalkerHost`], so the whole
//! reconciliation loop runs unmodified against the scriptable
//! [`walker_host::FakeHost`] in tests.
//!
//! | Module         | Contents                                     |
//! |----------------|----------------------------------------------|
//! | [`catalogue`]  | `SpawnCatalogue`                             |
//! | [`roster`]     | `WalkerRoster` (live set + black-list)       |
//! | [`controller`] | `PopulationController` and the tick passes   |
//! | [`builder`]    | `PopulationBuilder`                          |
//! | [`observer`]   | `PopulationObserver`, `NoopObserver`         |
//! | [`error`]      | `PopError`, `PopResult`                      |

pub mod builder;
pub mod catalogue;
pub mod controller;
pub mod error;
pub mod observer;
pub mod roster;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::PopulationBuilder;
pub use catalogue::SpawnCatalogue;
pub use controller::PopulationController;
pub use error::{PopError, PopResult};
pub use observer::{NoopObserver, PopulationObserver};
pub use roster::WalkerRoster;
