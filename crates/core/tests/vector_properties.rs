//! Property-style checks over seeded random vectors
use approx::{assert_abs_diff_eq, assert_relative_eq};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vector3_core::Vector3;

const ITERATIONS: usize = 500;

fn random_vector(rng: &mut StdRng) -> Vector3 {
    Vector3::new(
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
    )
}

fn assert_vec_close(actual: Vector3, expected: Vector3, epsilon: f64) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_abs_diff_eq!(actual.z, expected.z, epsilon = epsilon);
}

#[test]
#[allow(clippy::clone_on_copy)]
fn test_clone_is_an_independent_copy() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ITERATIONS {
        let v = random_vector(&mut rng);
        let mut copy = v.clone();
        assert_eq!(copy, v);

        copy.add(Vector3::new(1.0, 1.0, 1.0));
        assert_ne!(copy, v, "mutating the clone must not touch the original");
    }
}

#[test]
fn test_double_negate_restores_original() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..ITERATIONS {
        let v = random_vector(&mut rng);
        let mut w = v;
        w.negate().negate();
        assert_eq!(w, v);
    }
}

#[test]
fn test_add_then_subtract_round_trips() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ITERATIONS {
        let v = random_vector(&mut rng);
        let w = random_vector(&mut rng);
        let mut r = v;
        r.add(w).subtract(w);
        assert_vec_close(r, v, 1e-9);
    }
}

#[test]
fn test_length_squared_matches_length() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..ITERATIONS {
        let v = random_vector(&mut rng);
        let len = v.length();
        assert_relative_eq!(v.length_squared(), len * len, max_relative = 1e-12);
    }
}

#[test]
fn test_normalize_gives_unit_length() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..ITERATIONS {
        let v = random_vector(&mut rng);
        let mut unit = v;
        unit.normalize();
        assert_abs_diff_eq!(unit.length(), 1.0, epsilon = 1e-9);
        // Same direction as the input
        assert_relative_eq!(unit.dot(v), v.length(), max_relative = 1e-12);
    }
}

#[test]
fn test_rescale_sets_requested_length() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..ITERATIONS {
        let v = random_vector(&mut rng);
        let scale: f64 = rng.random_range(0.1..50.0);
        let mut w = v;
        w.rescale(scale);
        assert_relative_eq!(w.length(), scale, max_relative = 1e-12);
        assert!(w.dot(v) > 0.0, "rescale must keep the direction");
    }
}

#[test]
fn test_from_to_is_difference_and_leaves_inputs_alone() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ITERATIONS {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let (a_before, b_before) = (a, b);

        let offset = Vector3::from_to(a, b);
        let mut expected = b;
        expected.subtract(a);

        assert_eq!(offset, expected);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }
}

#[test]
fn test_angle_is_symmetric_and_in_range() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..ITERATIONS {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let ab = Vector3::angle(a, b);
        assert_eq!(ab, Vector3::angle(b, a));
        assert!((0.0..=180.0).contains(&*ab), "angle out of range: {ab}");
    }
}

#[test]
fn test_project_is_parallel_and_preserves_dot() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..ITERATIONS {
        let v = random_vector(&mut rng);
        let onto = random_vector(&mut rng);
        let onto_before = onto;

        let p = Vector3::project(v, onto);

        // The residual is perpendicular to the target
        let residual = v - p;
        assert_abs_diff_eq!(residual.dot(onto), 0.0, epsilon = 1e-7);
        // And the projection's length is |scalar projection|
        assert_relative_eq!(
            p.length(),
            Vector3::scalar_projection(v, onto).abs(),
            max_relative = 1e-12
        );
        assert_eq!(onto, onto_before);
    }
}

#[test]
fn test_lerp_midpoint_is_equidistant() {
    let mut rng = StdRng::seed_from_u64(10);
    for _ in 0..ITERATIONS {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);
        let mid = Vector3::lerp(a, b, 0.5);
        assert_relative_eq!(
            Vector3::distance(a, mid),
            Vector3::distance(mid, b),
            max_relative = 1e-9
        );
    }
}

#[test]
fn test_concrete_scenarios() {
    let x = Vector3::new(1.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 1.0, 0.0);
    assert_eq!(x.dot(y), 0.0);
    assert_abs_diff_eq!(*Vector3::angle(x, y), 90.0, epsilon = 1e-12);

    let v = Vector3::new(3.0, 4.0, 0.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(v.length_squared(), 25.0);

    let p = Vector3::project(Vector3::new(2.0, 2.0, 0.0), x);
    assert_eq!(p, Vector3::new(2.0, 0.0, 0.0));

    assert_eq!(Vector3::default(), Vector3::new(0.0, 0.0, 0.0));
}
