//! Unit tests for walker-core primitives.

#[cfg(test)]
mod ids {
    use crate::SpawnPointId;

    #[test]
    fn index_roundtrip() {
        let id = SpawnPointId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(SpawnPointId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(SpawnPointId::INVALID.0, u32::MAX);
        assert_eq!(SpawnPointId::default(), SpawnPointId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(SpawnPointId(7).to_string(), "SpawnPointId(7)");
    }
}

#[cfg(test)]
mod world {
    use crate::{Transform, WorldPoint};

    #[test]
    fn zero_distance() {
        let p = WorldPoint::new(10.0, -5.0, 2.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn axis_aligned_distance() {
        let a = WorldPoint::new(0.0, 0.0, 0.0);
        let b = WorldPoint::new(100.0, 0.0, 0.0);
        assert_eq!(a.distance(b), 100.0);
        assert_eq!(b.distance(a), 100.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = WorldPoint::new(0.0, 0.0, 0.0);
        let b = WorldPoint::new(3.0, 4.0, 0.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn transform_at_has_zero_yaw() {
        let t = Transform::at(WorldPoint::new(1.0, 2.0, 3.0));
        assert_eq!(t.yaw_deg, 0.0);
        assert_eq!(t.location, WorldPoint::new(1.0, 2.0, 3.0));
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(7).to_string(), "T7");
    }
}

#[cfg(test)]
mod rng {
    use crate::SpawnRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SpawnRng::new(42);
        let mut r2 = SpawnRng::new(42);
        for _ in 0..100 {
            assert_eq!(r1.rand_range(0, 1_000_000), r2.rand_range(0, 1_000_000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SpawnRng::new(1);
        let mut r2 = SpawnRng::new(2);
        let a: Vec<usize> = (0..16).map(|_| r1.rand_range(0, usize::MAX - 1)).collect();
        let b: Vec<usize> = (0..16).map(|_| r2.rand_range(0, usize::MAX - 1)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn rand_range_is_inclusive() {
        let mut rng = SpawnRng::new(0);
        let mut seen = [false; 2];
        for _ in 0..1000 {
            let v = rng.rand_range(0, 1);
            assert!(v <= 1);
            seen[v] = true;
        }
        assert!(seen[0] && seen[1], "both inclusive endpoints should be drawn");
    }

    #[test]
    fn single_value_range() {
        let mut rng = SpawnRng::new(0);
        for _ in 0..10 {
            assert_eq!(rng.rand_range(5, 5), 5);
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{PopulationConfig, RecoveredPolicy};

    #[test]
    fn default_policy_retains() {
        let cfg = PopulationConfig::default();
        assert_eq!(cfg.recovered_policy, RecoveredPolicy::Retain);
        assert!(cfg.spawn_enabled);
        assert_eq!(cfg.target_population, 0);
        assert!(cfg.fixed_seed.is_none());
    }
}
