//! Unit tests for the spawn-point types and the fake host.

use walker_core::{Transform, WorldPoint};

use crate::{FakeHost, SpawnPoint, SpawnPointKind, WalkerHost};

fn origin() -> Transform {
    Transform::at(WorldPoint::new(0.0, 0.0, 0.0))
}

#[cfg(test)]
mod spawn_point {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        let p = WorldPoint::new(1.0, 2.0, 3.0);
        assert_eq!(SpawnPoint::recurring(p).kind, SpawnPointKind::Recurring);
        assert_eq!(SpawnPoint::initial_only(p).kind, SpawnPointKind::InitialOnly);
        assert!(SpawnPoint::recurring(p).is_recurring());
        assert!(!SpawnPoint::initial_only(p).is_recurring());
    }

    #[test]
    fn location_reads_transform() {
        let p = WorldPoint::new(1.0, 2.0, 3.0);
        assert_eq!(SpawnPoint::recurring(p).location(), p);
    }
}

#[cfg(test)]
mod fake_host {
    use super::*;

    #[test]
    fn spawn_and_query_lifecycle() {
        let mut host = FakeHost::new(vec![]);
        let w = host.spawn_walker(&origin()).unwrap();
        assert!(host.is_valid(w));
        assert_eq!(host.location(w), Some(WorldPoint::new(0.0, 0.0, 0.0)));

        // No controller attached yet — stuck query reports the null case.
        assert_eq!(host.is_stuck(w), None);

        assert!(host.attach_controller(w));
        assert_eq!(host.is_stuck(w), Some(false));
        host.set_stuck(w, true);
        assert_eq!(host.is_stuck(w), Some(true));
    }

    #[test]
    fn destroy_is_idempotent() {
        let mut host = FakeHost::new(vec![]);
        let w = host.spawn_walker(&origin()).unwrap();
        host.destroy(w);
        host.destroy(w);
        assert!(!host.is_valid(w));
        assert_eq!(host.destroy_count, 1);
    }

    #[test]
    fn destroyed_walker_reports_invalid_everywhere() {
        let mut host = FakeHost::new(vec![]);
        let w = host.spawn_walker(&origin()).unwrap();
        assert!(host.attach_controller(w));
        host.kill(w);
        assert!(!host.is_valid(w));
        assert_eq!(host.location(w), None);
        assert_eq!(host.is_stuck(w), None);
        assert!(!host.move_to(w, WorldPoint::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn fail_spawns_knob() {
        let mut host = FakeHost::new(vec![]);
        host.fail_spawns = true;
        assert!(host.spawn_walker(&origin()).is_none());
        assert_eq!(host.spawned_total(), 0);
    }

    #[test]
    fn fail_attach_knob() {
        let mut host = FakeHost::new(vec![]);
        host.fail_attach = true;
        let w = host.spawn_walker(&origin()).unwrap();
        assert!(!host.attach_controller(w));
        assert_eq!(host.is_stuck(w), None);
    }

    #[test]
    fn move_log_records_origin_and_destination() {
        let mut host = FakeHost::new(vec![]);
        let w = host.spawn_walker(&origin()).unwrap();
        assert!(host.attach_controller(w));
        let dest = WorldPoint::new(100.0, 0.0, 0.0);
        assert!(host.move_to(w, dest));
        assert_eq!(host.move_log.len(), 1);
        assert_eq!(host.move_log[0].walker, w);
        assert_eq!(host.move_log[0].origin, WorldPoint::new(0.0, 0.0, 0.0));
        assert_eq!(host.move_log[0].destination, dest);
    }

    #[test]
    fn stuck_queries_are_counted() {
        let mut host = FakeHost::new(vec![]);
        let w = host.spawn_walker(&origin()).unwrap();
        assert!(host.attach_controller(w));
        assert_eq!(host.stuck_query_count(w), 0);
        host.is_stuck(w);
        host.is_stuck(w);
        assert_eq!(host.stuck_query_count(w), 2);
    }

    #[test]
    fn spawn_points_returns_scene_walk() {
        let pts = vec![
            SpawnPoint::initial_only(WorldPoint::new(0.0, 0.0, 0.0)),
            SpawnPoint::recurring(WorldPoint::new(100.0, 0.0, 0.0)),
        ];
        let host = FakeHost::new(pts.clone());
        assert_eq!(host.spawn_points(), pts);
    }
}
