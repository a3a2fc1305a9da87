//! Builder for constructing a [`PopulationController`].

use walker_core::{PopulationConfig, SpawnRng, Tick};
use walker_host::WalkerHost;

use crate::{PopError, PopResult, PopulationController, SpawnCatalogue, WalkerRoster};

/// Builder for [`PopulationController<H>`].
///
/// Validates the configuration, seeds the RNG (fixed seed or fresh entropy),
/// and reserves live-set capacity.  The controller comes back in a
/// not-yet-begun state; call [`PopulationController::begin`] once the scene
/// is loaded.
///
/// # Example
///
/// ```rust,ignore
/// let config = PopulationConfig {
///     target_population: 50,
///     fixed_seed: Some(42),
///     ..PopulationConfig::default()
/// };
/// let mut controller = PopulationBuilder::new(config, host).build()?;
/// controller.begin(&mut NoopObserver);
/// ```
pub struct PopulationBuilder<H: WalkerHost> {
    config: PopulationConfig,
    host:   H,
}

impl<H: WalkerHost> PopulationBuilder<H> {
    pub fn new(config: PopulationConfig, host: H) -> Self {
        Self { config, host }
    }

    /// Validate the configuration and return a ready-to-begin controller.
    pub fn build(self) -> PopResult<PopulationController<H>> {
        let min = self.config.minimum_walk_distance;
        if !min.is_finite() || min <= 0.0 {
            return Err(PopError::Config(format!(
                "minimum_walk_distance must be finite and > 0, got {min}"
            )));
        }

        let rng = match self.config.fixed_seed {
            Some(seed) => SpawnRng::new(seed),
            None       => SpawnRng::from_entropy(),
        };

        Ok(PopulationController {
            roster:        WalkerRoster::with_capacity(self.config.target_population as usize),
            catalogue:     SpawnCatalogue::empty(),
            spawn_enabled: self.config.spawn_enabled,
            cursor:        0,
            tick:          Tick::ZERO,
            config:        self.config,
            host:          self.host,
            rng,
        })
    }
}
