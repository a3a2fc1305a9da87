//! `FakeHost` — a deterministic, scriptable [`WalkerHost`] for testing.
//!
//! The fake gives tests full control over the host side of the contract:
//! spawns and controller attachment can be forced to fail, individual walkers
//! can be marked stuck or killed externally, and every spawn and `move_to`
//! request is recorded for assertions.  Walkers do not move — a spawned
//! walker stays at its spawn location, which keeps distance assertions exact.

use std::cell::Cell;

use walker_core::{Transform, WorldPoint};

use crate::{SpawnPoint, WalkerHost};

/// One recorded `move_to` request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MoveRecord {
    pub walker:      usize,
    pub origin:      WorldPoint,
    pub destination: WorldPoint,
}

struct FakeWalker {
    alive:          bool,
    has_controller: bool,
    stuck:          bool,
    location:       WorldPoint,
    /// Interior mutability because `is_stuck` takes `&self` on the trait.
    stuck_queries:  Cell<usize>,
}

/// Scriptable in-memory host.  Handles are plain indices into an append-only
/// walker table, so a destroyed walker's handle stays resolvable (and
/// reports invalid) forever.
#[derive(Default)]
pub struct FakeHost {
    points:  Vec<SpawnPoint>,
    walkers: Vec<FakeWalker>,

    /// When `true`, `spawn_walker` returns `None`.
    pub fail_spawns: bool,
    /// When `true`, `attach_controller` returns `false`.
    pub fail_attach: bool,

    /// Every transform passed to `spawn_walker` that produced a walker.
    pub spawn_log: Vec<Transform>,
    /// Every accepted `move_to` request, in order.
    pub move_log: Vec<MoveRecord>,
    /// Number of walkers actually destroyed (idempotent repeats not counted).
    pub destroy_count: usize,
}

impl FakeHost {
    pub fn new(points: Vec<SpawnPoint>) -> Self {
        Self { points, ..Self::default() }
    }

    /// Set the stuck flag the walker's controller will report.
    pub fn set_stuck(&mut self, walker: usize, stuck: bool) {
        self.walkers[walker].stuck = stuck;
    }

    /// Destroy a walker out from under the controller, as the host may do at
    /// any time.
    pub fn kill(&mut self, walker: usize) {
        self.destroy(walker);
    }

    /// How many times the controller queried this walker's stuck state.
    pub fn stuck_query_count(&self, walker: usize) -> usize {
        self.walkers[walker].stuck_queries.get()
    }

    /// Number of walkers currently alive.
    pub fn alive_count(&self) -> usize {
        self.walkers.iter().filter(|w| w.alive).count()
    }

    /// Total walkers ever spawned (alive or not).
    pub fn spawned_total(&self) -> usize {
        self.walkers.len()
    }
}

impl WalkerHost for FakeHost {
    type Handle = usize;

    fn spawn_points(&self) -> Vec<SpawnPoint> {
        self.points.clone()
    }

    fn spawn_walker(&mut self, at: &Transform) -> Option<usize> {
        if self.fail_spawns {
            return None;
        }
        self.walkers.push(FakeWalker {
            alive:          true,
            has_controller: false,
            stuck:          false,
            location:       at.location,
            stuck_queries:  Cell::new(0),
        });
        self.spawn_log.push(*at);
        Some(self.walkers.len() - 1)
    }

    fn attach_controller(&mut self, walker: usize) -> bool {
        if self.fail_attach {
            return false;
        }
        match self.walkers.get_mut(walker) {
            Some(w) if w.alive => {
                w.has_controller = true;
                true
            }
            _ => false,
        }
    }

    fn is_valid(&self, walker: usize) -> bool {
        self.walkers.get(walker).is_some_and(|w| w.alive)
    }

    fn location(&self, walker: usize) -> Option<WorldPoint> {
        let w = self.walkers.get(walker)?;
        w.alive.then_some(w.location)
    }

    fn is_stuck(&self, walker: usize) -> Option<bool> {
        let w = self.walkers.get(walker)?;
        if !w.alive || !w.has_controller {
            return None;
        }
        w.stuck_queries.set(w.stuck_queries.get() + 1);
        Some(w.stuck)
    }

    fn move_to(&mut self, walker: usize, destination: WorldPoint) -> bool {
        match self.walkers.get(walker) {
            Some(w) if w.alive && w.has_controller => {
                self.move_log.push(MoveRecord {
                    walker,
                    origin: w.location,
                    destination,
                });
                true
            }
            _ => false,
        }
    }

    fn destroy(&mut self, walker: usize) {
        if let Some(w) = self.walkers.get_mut(walker)
            && w.alive
        {
            w.alive = false;
            self.destroy_count += 1;
        }
    }
}
