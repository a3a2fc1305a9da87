//! The `WalkerHost` trait — the main extension point for engine glue.

use std::fmt::Debug;

use walker_core::{Transform, WorldPoint};

use crate::SpawnPoint;

/// Capabilities the host simulator provides to the population controller.
///
/// The host owns walker lifetimes: handles are weak-style references that the
/// controller validates on every use.  A handle may go invalid at any point
/// between ticks (scene teardown, external destruction); every query below is
/// defined for invalid handles and reports the invalidity instead of
/// crashing.
///
/// # Failure tolerance
///
/// [`spawn_walker`][Self::spawn_walker] and
/// [`attach_controller`][Self::attach_controller] are allowed to fail —
/// walker actor creation in a real engine can fail for scene-dependent
/// reasons.  The controller absorbs both failures and retries on later
/// ticks.
///
/// # Example — minimal engine adapter
///
/// ```rust,ignore
/// struct EngineHost { scene: SceneRef }
///
/// impl WalkerHost for EngineHost {
///     type Handle = ActorId;
///
///     fn spawn_walker(&mut self, at: &Transform) -> Option<ActorId> {
///         self.scene.spawn_character(at)
///     }
///     // ...
/// }
/// ```
pub trait WalkerHost {
    /// Opaque walker reference.  Cheap to copy; carries no ownership.
    type Handle: Copy + PartialEq + Debug;

    /// Walk the scene for spawn-point placements.  Called once, at startup.
    fn spawn_points(&self) -> Vec<SpawnPoint>;

    /// Spawn a walker actor at `at`.  Returns `None` on failure (the host
    /// could not create the actor, or created an invalid one).
    fn spawn_walker(&mut self, at: &Transform) -> Option<Self::Handle>;

    /// Attach a navigation controller to `walker`.  Returns `false` on
    /// failure; the caller is expected to discard the walker.
    fn attach_controller(&mut self, walker: Self::Handle) -> bool;

    /// Whether `walker` still refers to a live actor.
    fn is_valid(&self, walker: Self::Handle) -> bool;

    /// Current world position, or `None` if the handle is invalid.
    fn location(&self, walker: Self::Handle) -> Option<WorldPoint>;

    /// Query the walker's navigation controller for its stuck state.
    ///
    /// Returns `None` when the handle is invalid or no controller is
    /// attached — the two cases the controller treats identically during
    /// sweeps.
    fn is_stuck(&self, walker: Self::Handle) -> Option<bool>;

    /// Issue a navigation goal.  Returns `false` if the handle is invalid or
    /// no controller is attached.
    fn move_to(&mut self, walker: Self::Handle, destination: WorldPoint) -> bool;

    /// Release the walker actor.  Idempotent on already-destroyed handles.
    fn destroy(&mut self, walker: Self::Handle);
}
