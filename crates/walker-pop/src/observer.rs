//! Population observer trait for progress reporting and data collection.

use walker_core::Tick;

/// Callbacks invoked by the controller at key points in the walker lifecycle.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — census printer
///
/// ```rust,ignore
/// struct CensusPrinter;
///
/// impl PopulationObserver for CensusPrinter {
///     fn on_tick_end(&mut self, tick: Tick, live: usize, black_listed: usize) {
///         if tick.0 % 600 == 0 {
///             println!("{tick}: {live} live, {black_listed} black-listed");
///         }
///     }
/// }
/// ```
pub trait PopulationObserver {
    /// A walker was spawned and handed its first destination.
    fn on_spawned(&mut self, _tick: Tick) {}

    /// A stuck walker was moved from the live set to the black-list.
    fn on_blacklisted(&mut self, _tick: Tick) {}

    /// A walker was destroyed (persistently stuck, or its handle went
    /// invalid).
    fn on_destroyed(&mut self, _tick: Tick) {}

    /// Called at the end of every tick with the current census.
    fn on_tick_end(&mut self, _tick: Tick, _live: usize, _black_listed: usize) {}
}

/// A [`PopulationObserver`] that does nothing.  Use when you need to tick the
/// controller but don't want callbacks.
pub struct NoopObserver;

impl PopulationObserver for NoopObserver {}
