use broni::intervals::{combined_mask, runs};
use broni::{intervals, Cuboid, Shape, Sphere, Trajectory};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(-10.0f64..10.0)
}

fn trajectory() -> impl Strategy<Value = Trajectory<usize>> {
    prop::collection::vec(point(), 0..60).prop_map(|points| {
        Trajectory::from_rows(&points, (0..points.len()).collect(), "gse").unwrap()
    })
}

fn spheres() -> impl Strategy<Value = Vec<Sphere>> {
    prop::collection::vec(
        (point(), 0.5f64..12.0).prop_map(|(center, radius)| Sphere::new(center, radius).unwrap()),
        0..4,
    )
}

proptest! {
    #[test]
    fn intervals_are_ordered_and_disjoint(traj in trajectory(), balls in spheres()) {
        let shapes: Vec<&dyn Shape> = balls.iter().map(|s| s as &dyn Shape).collect();
        let found = intervals(&traj, &shapes).unwrap();

        for interval in &found {
            prop_assert!(interval.start <= interval.end);
        }
        for pair in found.windows(2) {
            // at least one unselected point between two intervals
            prop_assert!(pair[0].end + 1 < pair[1].start);
        }
    }

    #[test]
    fn no_shapes_no_intervals(traj in trajectory()) {
        prop_assert!(intervals(&traj, &[]).unwrap().is_empty());
    }

    #[test]
    fn combining_is_and_of_individual_masks(traj in trajectory(), balls in spheres()) {
        prop_assume!(!balls.is_empty());
        let shapes: Vec<&dyn Shape> = balls.iter().map(|s| s as &dyn Shape).collect();

        let mut expected = vec![true; traj.len()];
        for shape in &shapes {
            let mask = shape.intersect(traj.positions()).unwrap();
            for (e, m) in expected.iter_mut().zip(mask) {
                *e = *e && m;
            }
        }

        prop_assert_eq!(combined_mask(traj.positions(), &shapes).unwrap(), expected.clone());

        let from_runs: Vec<(usize, usize)> = runs(&expected)
            .into_iter()
            .map(|run| (*run.start(), *run.end()))
            .collect();
        let from_intervals: Vec<(usize, usize)> = intervals(&traj, &shapes)
            .unwrap()
            .into_iter()
            .map(Into::into)
            .collect();
        prop_assert_eq!(from_runs, from_intervals);
    }

    #[test]
    fn runs_cover_exactly_the_selected_points(mask in prop::collection::vec(any::<bool>(), 0..100)) {
        let mut covered = vec![false; mask.len()];
        for run in runs(&mask) {
            prop_assert!(run.start() <= run.end());
            for i in run {
                covered[i] = true;
            }
        }
        prop_assert_eq!(covered, mask);
    }

    #[test]
    fn cuboid_ignores_corner_order(traj in trajectory(), a in point(), b in point()) {
        prop_assume!(a != b);
        let ab = Cuboid::new(a, b).unwrap();
        let ba = Cuboid::new(b, a).unwrap();

        prop_assert_eq!(
            ab.intersect(traj.positions()).unwrap(),
            ba.intersect(traj.positions()).unwrap()
        );
    }

    #[test]
    fn sphere_surface_is_inside(
        center in prop::array::uniform3(-100i32..100),
        radius in 1i32..50,
        axis in 0usize..3,
        sign in prop::bool::ANY,
    ) {
        // integer coordinates keep the distance exact
        let center = center.map(f64::from);
        let radius = f64::from(radius);
        let mut on_surface = center;
        on_surface[axis] += if sign { radius } else { -radius };
        let mut outside = on_surface;
        outside[axis] += if sign { 1.0 } else { -1.0 };

        let sphere = Sphere::new(center, radius).unwrap();
        let traj = Trajectory::from_rows(&[on_surface, center, outside], vec![0, 1, 2], "gse").unwrap();
        prop_assert_eq!(sphere.intersect(traj.positions()).unwrap(), vec![true, true, false]);
    }
}
