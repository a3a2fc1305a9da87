//! `SpawnCatalogue` — the immutable registry of scene spawn points.
//!
//! Built once at startup from the host's scene walk and never mutated
//! afterwards.  Placements come in two flavours: *initial-only* points are
//! eligible just for the startup fill, while *recurring* points stay usable
//! for the whole session, both as spawn origins and as walk destinations.
//! Every recurring point is implicitly part of the startup fill as well.

use walker_core::{SpawnPointId, SpawnRng};
use walker_host::SpawnPoint;

/// Immutable spawn-point registry.
#[derive(Default)]
pub struct SpawnCatalogue {
    /// All placements, in scene discovery order.
    points: Vec<SpawnPoint>,
    /// Ids (into `points`) of the recurring subset.
    recurring: Vec<SpawnPointId>,
}

impl SpawnCatalogue {
    /// An empty catalogue — placeholder until the scene walk runs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Classify the placements yielded by the host's scene walk.
    pub fn from_scene(points: Vec<SpawnPoint>) -> Self {
        let recurring = points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_recurring())
            .map(|(i, _)| SpawnPointId(i as u32))
            .collect();
        Self { points, recurring }
    }

    /// The startup fill list: initial-only and recurring placements together,
    /// in discovery order.
    #[inline]
    pub fn initial_spawn_list(&self) -> &[SpawnPoint] {
        &self.points
    }

    /// Total number of placements.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of recurring placements.
    pub fn recurring_len(&self) -> usize {
        self.recurring.len()
    }

    #[inline]
    pub fn point(&self, id: SpawnPointId) -> &SpawnPoint {
        &self.points[id.index()]
    }

    /// A uniformly chosen recurring placement.  Consumes exactly one RNG
    /// draw.
    ///
    /// # Panics
    ///
    /// Panics if the recurring subset is empty.  The controller never calls
    /// this in that state: spawning is forced off below two recurring points,
    /// and destinations are only drawn while spawning is (or was) possible.
    pub fn random_recurring(&self, rng: &mut SpawnRng) -> SpawnPoint {
        let id = self.recurring[rng.rand_range(0, self.recurring.len() - 1)];
        self.points[id.index()]
    }
}
