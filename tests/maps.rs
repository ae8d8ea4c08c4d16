use approx::assert_abs_diff_eq;
use givens_sphere::{canonical_point, exp_map, log_map, GeometryError};
use ndarray::{array, Array1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

fn norm(x: &Array1<f64>) -> f64 {
    x.dot(x).sqrt()
}

/// 노름이 `radius` 인 무작위 접벡터
fn tangent_with_radius(rng: &mut StdRng, d: usize, radius: f64) -> Array1<f64> {
    let raw = Array1::from_shape_fn(d, |_| rng.gen_range(-1.0..1.0));
    let n = norm(&raw).max(1e-12);
    raw.mapv(|v| v * radius / n)
}

#[test]
fn zero_tangent_maps_exactly_to_reference() {
    let q = canonical_point::<f64>(10).unwrap();
    let y = exp_map(Array1::<f64>::zeros(9).view()).unwrap();
    assert_eq!(y, q);
}

#[test]
fn log_of_reference_is_exactly_zero() {
    let q = canonical_point::<f64>(10).unwrap();
    let v = log_map(q.view(), q.view()).unwrap();
    assert_eq!(v, Array1::<f64>::zeros(9));
}

#[test]
fn antipodal_log_is_an_error() {
    let q = canonical_point::<f64>(10).unwrap();
    let minus_q = q.mapv(|v| -v);
    let err = log_map(q.view(), minus_q.view()).unwrap_err();
    assert!(matches!(err, GeometryError::AntipodalPoints { angle } if (angle - PI).abs() < 1e-12));
}

#[test]
fn exp_output_has_unit_norm() {
    let mut rng = StdRng::seed_from_u64(5);
    for d in 1..10 {
        for _ in 0..20 {
            let radius = rng.gen_range(0.0..10.0);
            let p = tangent_with_radius(&mut rng, d, radius);
            let y = exp_map(p.view()).unwrap();
            assert_eq!(y.len(), d + 1);
            assert_abs_diff_eq!(norm(&y), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn exp_of_huge_tangent_stays_on_sphere() {
    for p in [
        array![1e200_f64, 0.0],
        array![1e200_f64, -1e200],
        array![3e300_f64, 0.0, 4e300],
    ] {
        let y = exp_map(p.view()).unwrap();
        assert!(y.iter().all(|v| v.is_finite()));
        assert_abs_diff_eq!(norm(&y), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn exp_rejects_tangent_whose_norm_overflows() {
    let p = array![f64::MAX, f64::MAX];
    assert_eq!(
        exp_map(p.view()).unwrap_err(),
        GeometryError::NonFiniteParameter { name: "norm" }
    );
}

#[test]
fn log_inverts_exp_inside_the_injectivity_ball() {
    let mut rng = StdRng::seed_from_u64(9);
    for d in 1..10 {
        let q = canonical_point::<f64>(d + 1).unwrap();
        for _ in 0..20 {
            let radius = rng.gen_range(0.0..PI - 1e-3);
            let p = tangent_with_radius(&mut rng, d, radius);
            let back = log_map(q.view(), exp_map(p.view()).unwrap().view()).unwrap();
            for (a, b) in back.iter().zip(p.iter()) {
                assert_abs_diff_eq!(*a, *b, epsilon = 1e-8);
            }
        }
    }
}

#[test]
fn log_then_exp_recovers_sphere_point() {
    let q = array![0.0_f64, 0.0, 1.0];
    let p = array![2.0_f64, -1.0, 2.0].mapv(|v| v / 3.0);
    let v = log_map(q.view(), p.view()).unwrap();
    let back = exp_map(v.view()).unwrap();
    for (a, b) in back.iter().zip(p.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }
}

#[test]
fn tangent_length_equals_geodesic_distance() {
    let q = array![0.0_f64, 0.0, 1.0];
    let p = array![0.0_f64, 1.0, 0.0];
    let v = log_map(q.view(), p.view()).unwrap();
    assert_abs_diff_eq!(norm(&v), PI / 2.0, epsilon = 1e-12);
}

#[test]
fn single_precision_round_trip() {
    let q = canonical_point::<f32>(3).unwrap();
    let p = array![0.3_f32, -0.4];
    let back = log_map(q.view(), exp_map(p.view()).unwrap().view()).unwrap();
    assert_abs_diff_eq!(back[0], 0.3, epsilon = 1e-4);
    assert_abs_diff_eq!(back[1], -0.4, epsilon = 1e-4);
}
