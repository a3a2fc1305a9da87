//! The `PopulationController` and its tick loop.

use tracing::{error, info, warn};
use walker_core::{PopulationConfig, RecoveredPolicy, SpawnRng, Tick, WorldPoint};
use walker_host::{SpawnPoint, WalkerHost};

use crate::{PopulationObserver, SpawnCatalogue, WalkerRoster};

/// Tick-driven reconciler that maintains a target census of walkers.
///
/// `PopulationController<H>` holds the spawn catalogue, the walker roster
/// (live set + black-list), and the deterministic RNG, and drives three
/// bounded-cost passes per tick:
///
/// 1. **Top-up**: if the live set is below target, attempt at most one spawn
///    at a random recurring point.  Capping to one spawn per tick amortises
///    actor-creation cost; the population converges over O(target) ticks.
/// 2. **Black-list sweep**: examine one black-listed walker (round-robin).
///    Destroy it if its controller is gone or it is still stuck.
/// 3. **Live-set sweep**: examine one live walker (same cursor).  Destroy it
///    if its handle went invalid; black-list it (with one last destination
///    attempt) if it is stuck.
///
/// The two sweeps share one monotonic cursor that is never reset; modular
/// indexing absorbs changes in sequence length, so per-tick cost is O(1)
/// regardless of population size and every walker is visited with bounded
/// latency.
///
/// Create via [`PopulationBuilder`][crate::PopulationBuilder]; the host calls
/// [`begin`][Self::begin] once after scene load and [`tick`][Self::tick] at
/// its fixed cadence.  Both run on the host's main loop — nothing here is
/// thread-safe, and nothing needs to be.
pub struct PopulationController<H: WalkerHost> {
    /// Configuration, fixed at construction.
    pub config: PopulationConfig,

    /// The injected host-simulator capabilities.
    pub host: H,

    /// Scene spawn points, populated by [`begin`][Self::begin].
    pub catalogue: SpawnCatalogue,

    /// Live set and black-list of managed walker handles.
    pub roster: WalkerRoster<H::Handle>,

    pub(crate) rng:           SpawnRng,
    pub(crate) cursor:        u64,
    pub(crate) tick:          Tick,
    pub(crate) spawn_enabled: bool,
}

impl<H: WalkerHost> PopulationController<H> {
    // ── Public API ────────────────────────────────────────────────────────

    /// One-time startup: walk the scene for spawn points and perform the
    /// initial fill.  Returns the number of walkers spawned.
    ///
    /// If fewer than two recurring points exist, spawning is disabled for the
    /// session — with a single recurring point every destination draw would
    /// land on the walker's own origin and no walk could satisfy the minimum
    /// distance.  If the initial-spawn list is shorter than the target, the
    /// fill reuses points via modular indexing and some spawns may fail.
    pub fn begin<O: PopulationObserver>(&mut self, obs: &mut O) -> usize {
        self.catalogue = SpawnCatalogue::from_scene(self.host.spawn_points());
        info!(
            initial   = self.catalogue.len(),
            recurring = self.catalogue.recurring_len(),
            "discovered spawn points in scene"
        );

        if self.catalogue.recurring_len() < 2 {
            self.spawn_enabled = false;
            error!("not enough recurring spawn points for walkers; spawning disabled");
        } else if self.catalogue.len() < self.config.target_population as usize {
            warn!(
                requested = self.config.target_population,
                available = self.catalogue.len(),
                "fewer spawn points than requested walkers; some will fail to spawn"
            );
        }

        let mut spawned = 0;
        if self.spawn_enabled {
            let points = self.catalogue.initial_spawn_list().len();
            for i in 0..self.config.target_population as usize {
                let point = self.catalogue.initial_spawn_list()[i % points];
                if self.try_spawn_at(point, obs) {
                    spawned += 1;
                }
            }
            info!(spawned, "initial walker fill complete");
        }
        spawned
    }

    /// One reconciliation step.  Invoked by the host at a fixed cadence.
    ///
    /// `dt` is part of the host's tick contract but does not influence any
    /// decision: the controller performs the same bounded work regardless of
    /// frame time.
    pub fn tick<O: PopulationObserver>(&mut self, _dt: f32, obs: &mut O) {
        self.top_up(obs);
        self.sweep_black_list(obs);
        self.sweep_live(obs);

        obs.on_tick_end(self.tick, self.roster.live_len(), self.roster.black_list_len());
        self.tick = self.tick + 1;
    }

    /// Handles of all walkers currently in the live set.
    pub fn live_walkers(&self) -> &[H::Handle] {
        self.roster.live()
    }

    /// Handles of all walkers pending forced destruction.
    pub fn black_listed(&self) -> &[H::Handle] {
        self.roster.black_list()
    }

    pub fn live_count(&self) -> usize {
        self.roster.live_len()
    }

    pub fn black_list_count(&self) -> usize {
        self.roster.black_list_len()
    }

    /// Whether the controller may spawn walkers (config switch, possibly
    /// forced off at `begin` for lack of recurring points).
    pub fn is_spawn_enabled(&self) -> bool {
        self.spawn_enabled
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    // ── Pass A: top-up ────────────────────────────────────────────────────

    /// At most one spawn attempt per tick; the tick proceeds on failure and
    /// the next tick retries at a new random point.
    fn top_up<O: PopulationObserver>(&mut self, obs: &mut O) {
        if self.spawn_enabled
            && (self.roster.live_len() as u32) < self.config.target_population
        {
            let point = self.catalogue.random_recurring(&mut self.rng);
            self.try_spawn_at(point, obs);
        }
    }

    // ── Pass B: black-list sweep ──────────────────────────────────────────

    fn sweep_black_list<O: PopulationObserver>(&mut self, obs: &mut O) {
        if self.roster.black_list_len() == 0 {
            return;
        }
        self.cursor += 1;
        let idx = (self.cursor % self.roster.black_list_len() as u64) as usize;
        let walker = self.roster.black_list()[idx];

        match self.host.is_stuck(walker) {
            // Still stuck, or the controller is gone: kill it.
            None | Some(true) => {
                self.roster.swap_remove_black_listed(idx);
                self.host.destroy(walker);
                obs.on_destroyed(self.tick);
            }
            // Recovered.  Under the default policy it stays black-listed
            // until it next reports stuck; rehabilitation only runs while
            // the live set is below target, preserving the population cap.
            Some(false) => {
                if self.config.recovered_policy == RecoveredPolicy::Rehabilitate
                    && (self.roster.live_len() as u32) < self.config.target_population
                {
                    self.roster.rehabilitate(idx);
                }
            }
        }
    }

    // ── Pass C: live-set sweep ────────────────────────────────────────────

    fn sweep_live<O: PopulationObserver>(&mut self, obs: &mut O) {
        if self.roster.live_len() == 0 {
            return;
        }
        self.cursor += 1;
        let idx = (self.cursor % self.roster.live_len() as u64) as usize;
        let walker = self.roster.live()[idx];

        match self.host.is_stuck(walker) {
            // Handle went invalid or the controller detached: remove quietly.
            None => {
                self.roster.swap_remove_live(idx);
                self.host.destroy(walker);
                obs.on_destroyed(self.tick);
            }
            // Stuck: one last destination attempt, then black-list it.
            Some(true) => {
                self.try_set_destination(walker);
                self.roster.black_list_from_live(idx);
                obs.on_blacklisted(self.tick);
            }
            Some(false) => {}
        }
    }

    // ── Spawn and destination subroutines ─────────────────────────────────

    /// Attempt to spawn a walker at `point` and hand it a first destination.
    fn try_spawn_at<O: PopulationObserver>(&mut self, point: SpawnPoint, obs: &mut O) -> bool {
        let Some(destination) = self.try_choose_destination(point.location()) else {
            return false;
        };

        let Some(walker) = self.host.spawn_walker(&point.transform) else {
            return false;
        };

        if !self.host.attach_controller(walker) {
            error!("failed to attach a navigation controller to a new walker; discarding it");
            self.host.destroy(walker);
            return false;
        }

        self.roster.add_live(walker);
        self.host.move_to(walker, destination);
        obs.on_spawned(self.tick);
        true
    }

    /// Draw one recurring placement and accept it iff it is at least the
    /// minimum walk distance from `origin`.  A single Bernoulli trial, no
    /// retry: RNG consumption per attempt stays constant, which keeps runs
    /// reproducible even when attempts fail.
    fn try_choose_destination(&mut self, origin: WorldPoint) -> Option<WorldPoint> {
        let destination = self.catalogue.random_recurring(&mut self.rng).location();
        (origin.distance(destination) >= self.config.minimum_walk_distance)
            .then_some(destination)
    }

    /// Re-route a live walker from its current location.
    fn try_set_destination(&mut self, walker: H::Handle) -> bool {
        let Some(origin) = self.host.location(walker) else {
            return false;
        };
        let Some(destination) = self.try_choose_destination(origin) else {
            return false;
        };
        self.host.move_to(walker, destination)
    }
}
