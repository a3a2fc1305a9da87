//! Spawn-point placements discovered in the loaded scene.

use walker_core::{Transform, WorldPoint};

/// When a spawn point is eligible for use.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpawnPointKind {
    /// Usable only for the startup fill.
    InitialOnly,
    /// Usable at startup and during play, including as a walk destination.
    Recurring,
}

/// An immutable scene placement at which walkers may be spawned and/or
/// navigated to.  Lifetime spans the session; the population manager neither
/// creates nor destroys spawn points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnPoint {
    pub transform: Transform,
    pub kind:      SpawnPointKind,
}

impl SpawnPoint {
    #[inline]
    pub fn new(transform: Transform, kind: SpawnPointKind) -> Self {
        Self { transform, kind }
    }

    /// A recurring spawn point at `location` with default facing.
    #[inline]
    pub fn recurring(location: WorldPoint) -> Self {
        Self::new(Transform::at(location), SpawnPointKind::Recurring)
    }

    /// An initial-only spawn point at `location` with default facing.
    #[inline]
    pub fn initial_only(location: WorldPoint) -> Self {
        Self::new(Transform::at(location), SpawnPointKind::InitialOnly)
    }

    #[inline]
    pub fn location(&self) -> WorldPoint {
        self.transform.location
    }

    #[inline]
    pub fn is_recurring(&self) -> bool {
        self.kind == SpawnPointKind::Recurring
    }
}
