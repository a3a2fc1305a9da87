//! Population controller configuration.
//!
//! Typically loaded from a TOML/JSON file by the application crate (enable
//! the `serde` feature) and handed to `walker-pop`'s builder.  All options
//! are fixed once the controller is constructed.

/// What to do with a black-listed walker whose controller later reports it is
/// no longer stuck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecoveredPolicy {
    /// Leave the walker on the black-list; it is destroyed the next time it
    /// reports stuck (or its handle goes invalid).  Black-listing is treated
    /// as terminal-pending.
    #[default]
    Retain,
    /// Move the walker back to the live set, but only while the live set is
    /// below the target population — otherwise it stays black-listed until a
    /// later sweep.
    Rehabilitate,
}

/// Top-level configuration for the walker population controller.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationConfig {
    /// Desired number of live walkers.  Unsigned, so the "clamp to ≥ 0"
    /// startup rule holds by type.
    pub target_population: u32,

    /// RNG seed.  `Some(seed)` makes every run reproducible; `None` draws a
    /// fresh seed from OS entropy.
    pub fixed_seed: Option<u64>,

    /// Minimum straight-line distance between a walker's origin and a
    /// candidate destination for the destination to be accepted.  Must be
    /// finite and > 0.
    pub minimum_walk_distance: f32,

    /// Master spawn switch.  Forced to `false` at startup if the scene has
    /// fewer than two recurring spawn points.
    pub spawn_enabled: bool,

    /// Policy for black-listed walkers that recover.
    pub recovered_policy: RecoveredPolicy,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            target_population:     0,
            fixed_seed:            None,
            minimum_walk_distance: 1_500.0, // 15 m in host units (cm)
            spawn_enabled:         true,
            recovered_policy:      RecoveredPolicy::Retain,
        }
    }
}
