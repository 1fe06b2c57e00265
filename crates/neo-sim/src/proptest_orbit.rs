//! Property-based tests for the flyby model and descent path using proptest.

use proptest::prelude::*;

use neo_core::components::OrbitElements;
use neo_core::constants::{MIN_SURFACE_DISTANCE, VISIBILITY_BOUND};
use neo_core::types::Point3;

use crate::animator::{ImpactAnimator, ImpactStep};
use crate::{impact_path, orbit};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Inside the traversed arc the position is always defined, finite,
    /// and sits exactly at the closed-form radius.
    #[test]
    fn prop_position_matches_radius(
        periapsis in 1.7f64..10.0,
        eccentricity in 1.01f64..5.0,
        rotation in 0.0f64..std::f64::consts::TAU,
        inclination in -1.0f64..1.0,
        t in -1.0f64..=1.0,
    ) {
        let theta = t * orbit::max_angle(eccentricity);
        let p = orbit::hyperbolic_position(theta, periapsis, eccentricity, rotation, inclination);
        prop_assert!(p.is_some(), "undefined at theta={}", theta);

        let p = p.unwrap();
        let r = orbit::radial_distance(theta, periapsis, eccentricity);
        prop_assert!(p.is_finite());
        prop_assert!(
            (p.length() - r).abs() <= 1e-9 * r.max(1.0),
            "distance {} != r {} (e={}, theta={})",
            p.length(), r, eccentricity, theta
        );
    }

    #[test]
    fn prop_trajectory_curve_finite(
        periapsis in 1.7f64..10.0,
        eccentricity in 1.01f64..5.0,
        rotation in 0.0f64..std::f64::consts::TAU,
        inclination in -1.0f64..1.0,
        segments in 0usize..300,
    ) {
        let elements = OrbitElements { periapsis, eccentricity, rotation, inclination };
        let points = orbit::trajectory_curve(&elements, segments);

        prop_assert!(points.len() <= segments + 1);
        for p in &points {
            prop_assert!(p.is_finite());
            prop_assert!(p.length() < VISIBILITY_BOUND);
        }
    }

    #[test]
    fn prop_impact_path_ends_at_origin(
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
        z in -50.0f64..50.0,
        point_count in 1usize..200,
    ) {
        let start = Point3::new(x, y, z);
        prop_assume!(start.length() > MIN_SURFACE_DISTANCE);

        let path = impact_path::generate(start, point_count);
        prop_assert_eq!(path.len(), point_count + 1);
        prop_assert_eq!(path[point_count], Point3::ZERO);
        for p in &path[..point_count] {
            prop_assert!(p.is_finite());
            prop_assert!(p.length() >= MIN_SURFACE_DISTANCE - 1e-9);
        }
    }

    /// Progress never decreases and the run always terminates.
    #[test]
    fn prop_animator_progress_monotonic(
        velocity in 1.0f64..70.0,
        deltas in prop::collection::vec(0.01f64..0.1, 1..64),
    ) {
        let mut animator = ImpactAnimator::default();
        animator
            .trigger(hecs::Entity::DANGLING, "p", 100.0, Point3::new(20.0, 5.0, -10.0), velocity)
            .unwrap();

        let mut last = 0.0;
        let mut arrived = false;
        for delta in deltas.iter().cycle().take(100_000) {
            match animator.tick(*delta) {
                ImpactStep::Moved(_) => {
                    let progress = animator.run().unwrap().progress;
                    prop_assert!(progress >= last);
                    last = progress;
                }
                ImpactStep::Arrived(run) => {
                    prop_assert!(run.progress >= last);
                    arrived = true;
                    break;
                }
                ImpactStep::Idle => prop_assert!(false, "idle without arrival"),
            }
        }
        prop_assert!(arrived);
    }
}
