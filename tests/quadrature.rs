use quadrin::core::*;
use quadrin::estimators::{BasicEstimators, Estimators};
use quadrin::integrators::{hit_or_miss, simpson, trapezoid};

use assert_approx_eq::assert_approx_eq;
use rand::Rng;
use rand_pcg::Pcg64;
use serde::Serialize;

fn assert_eq_rng<R>(lhs: &R, rhs: &R)
where
    R: Rng + Serialize,
{
    assert_eq!(
        serde_json::to_string(lhs).unwrap(),
        serde_json::to_string(rhs).unwrap()
    );
}

/// The quarter circle sqrt(1 - x^2) on [0, 1]; its integral is pi/4.
fn quarter_circle() -> BoundedFn<impl Fn(f64) -> f64, f64> {
    BoundedFn::new(|x: f64| (1.0 - x * x).sqrt(), 0.0, 1.0).unwrap()
}

/// The parabola x^2 on [-1, 1]; its integral is 2/3.
fn parabola() -> BoundedFn<impl Fn(f64) -> f64, f64> {
    BoundedFn::new(|x: f64| x * x, -1.0, 1.0).unwrap()
}

#[test]
fn deterministic_rules_agree_on_the_parabola() {
    const EXPECTED: f64 = 2.0 / 3.0;

    let f = parabola();

    let trapezoid_estimate = trapezoid::integrate(&f, 1_000).unwrap();
    let simpson_estimate = simpson::integrate(&f, 1_000).unwrap();

    assert_approx_eq!(trapezoid_estimate, EXPECTED, 1e-3);
    assert_approx_eq!(simpson_estimate, EXPECTED, 1e-3);

    // Simpson's rule is exact up to degree 3, so its error must beat the trapezoidal one
    // at the same grid resolution
    assert!((simpson_estimate - EXPECTED).abs() < (trapezoid_estimate - EXPECTED).abs());
}

#[test]
fn hit_or_miss_estimates_the_quarter_circle_area() {
    const CALLS: usize = 1_000_000;
    const EXPECTED: f64 = std::f64::consts::PI / 4.0;

    // the standard error at one million calls is about 4e-4, so a tolerance of 0.01 holds
    // across seeds with overwhelming probability; check a few independent streams anyway
    let mut sum = 0.0;
    for stream in 0..4_u128 {
        let mut rng = Pcg64::new(0xcafef00dd15ea5e5, stream);
        let result = hit_or_miss::integrate(&quarter_circle(), &mut rng, CALLS, 1.0).unwrap();

        assert_eq!(result.calls(), CALLS);
        assert_approx_eq!(result.estimate(), EXPECTED, 1e-2);

        sum += result.estimate();
    }

    // the empirical mean across streams tightens the bound further
    assert_approx_eq!(sum / 4.0, EXPECTED, 5e-3);
}

#[test]
fn hit_or_miss_is_reproducible_and_advances_the_rng_by_two_draws_per_call() {
    const CALLS: usize = 10_000;

    let seed = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

    let mut first_rng = seed.clone();
    let first = hit_or_miss::integrate(&quarter_circle(), &mut first_rng, CALLS, 1.0).unwrap();

    let mut second_rng = seed.clone();
    let second = hit_or_miss::integrate(&quarter_circle(), &mut second_rng, CALLS, 1.0).unwrap();

    // same seed, same estimate
    assert_eq!(first.estimate(), second.estimate());
    assert_eq_rng(&first_rng, &second_rng);

    // the generator state after a run equals a fresh generator fast-forwarded by hand
    let mut forwarded = seed;
    for _ in 0..2 * CALLS {
        let _: f64 = forwarded.gen();
    }
    assert_eq_rng(&first_rng, &forwarded);
}

#[test]
fn every_rule_is_exact_for_a_constant_integrand() {
    const EXPECTED: f64 = 2.5 * 5.0;
    const TOLERANCE: f64 = 1e-12;

    let c = BoundedFn::new(|_| 2.5_f64, -1.0, 4.0).unwrap();

    assert_approx_eq!(trapezoid::integrate(&c, 100).unwrap(), EXPECTED, TOLERANCE);
    assert_approx_eq!(simpson::integrate(&c, 100).unwrap(), EXPECTED, TOLERANCE);

    // with the rectangle height equal to the constant, every trial is accepted
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let result = hit_or_miss::integrate(&c, &mut rng, 10_000, 2.5).unwrap();
    assert_approx_eq!(result.estimate(), EXPECTED, TOLERANCE);
}

#[test]
fn estimate_max_sizes_a_usable_bounding_rectangle() {
    let f = quarter_circle();

    // the maximum of the quarter circle sits on the grid point x = 0
    let max = estimate_max(&f, 1_000).unwrap();
    assert_approx_eq!(max, 1.0, 1e-12);

    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let result = hit_or_miss::integrate(&f, &mut rng, 100_000, max).unwrap();
    assert_approx_eq!(result.estimate(), std::f64::consts::PI / 4.0, 1e-2);
}

#[test]
fn estimators_survive_a_serde_round_trip() {
    const CALLS: usize = 10_000;

    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let original = hit_or_miss::integrate(&parabola(), &mut rng, CALLS, 1.0).unwrap();

    let json = serde_json::to_string(&original).unwrap();
    let restored: hit_or_miss::HitOrMissEstimators<f64> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, original);
    assert_eq!(restored.calls(), original.calls());
    assert_eq!(restored.accepted_calls(), original.accepted_calls());
    assert_eq!(restored.estimate(), original.estimate());
    assert_eq!(restored.var(), original.var());
}

#[test]
fn invalid_counts_never_produce_a_numeric_result() {
    let f = parabola();
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

    assert!(matches!(
        trapezoid::integrate(&f, 0),
        Err(error::Error::InvalidArgument(_))
    ));
    assert!(matches!(
        simpson::integrate(&f, 0),
        Err(error::Error::InvalidArgument(_))
    ));
    assert!(matches!(
        hit_or_miss::integrate(&f, &mut rng, 0, 1.0),
        Err(error::Error::InvalidArgument(_))
    ));
    assert!(matches!(
        hit_or_miss::integrate(&f, &mut rng, 100, -0.5),
        Err(error::Error::InvalidArgument(_))
    ));
}

#[test]
fn errors_render_their_taxonomy_kind() {
    let inverted = Domain::new(1.0_f64, 0.0).unwrap_err();
    assert!(inverted.to_string().starts_with("invalid argument:"));

    let negative = BoundedFn::new(|_| -1.0_f64, 0.0, 1.0).unwrap();
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);
    let violation = hit_or_miss::integrate(&negative, &mut rng, 10, 1.0).unwrap_err();
    assert!(violation.to_string().starts_with("domain violation:"));
}
