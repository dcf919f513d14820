//! The hit-or-miss Monte Carlo integrator.
use crate::core::error::{Error, Result};
use crate::core::estimators::{BasicEstimators, Estimators};
use crate::core::{cast_usize, Integrand};

use num_traits::{Float, FromPrimitive};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Estimators for the hit-or-miss integrator.
///
/// The integrator samples `calls` points uniformly in the rectangle spanned by the domain and
/// `[0, max_value]` and counts how many fall below the curve. The integral estimate is the
/// rectangle area scaled by the accepted fraction; the variance follows from the binomial
/// distribution of the acceptance count.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct HitOrMissEstimators<T> {
    accepted: usize,
    calls: usize,
    width: T,
    max_value: T,
}

impl<T: Float> HitOrMissEstimators<T> {
    /// Returns the area of the bounding rectangle the points were sampled in.
    pub fn area(&self) -> T {
        self.width * self.max_value
    }

    /// Returns the integral estimate. Shorthand for [`BasicEstimators::mean`].
    pub fn estimate(&self) -> T
    where
        T: FromPrimitive,
    {
        self.mean()
    }
}

impl<T: Float + std::fmt::Debug> Add for HitOrMissEstimators<T> {
    type Output = Self;

    /// Merges the acceptance counts of two independent runs. Only meaningful when both runs
    /// sampled the same bounding rectangle.
    fn add(self, other: Self) -> Self {
        debug_assert_eq!(self.width, other.width);
        debug_assert_eq!(self.max_value, other.max_value);

        Self {
            accepted: self.accepted + other.accepted,
            calls: self.calls + other.calls,
            ..self
        }
    }
}

impl<T> BasicEstimators<T> for HitOrMissEstimators<T>
where
    T: Float + FromPrimitive,
{
    fn mean(&self) -> T {
        self.area() * cast_usize::<T>(self.accepted) / cast_usize::<T>(self.calls)
    }

    fn var(&self) -> T {
        let calls = cast_usize::<T>(self.calls);
        let p = cast_usize::<T>(self.accepted) / calls;

        self.area() * self.area() * p * (T::one() - p) / calls
    }
}

impl<T> Estimators<T> for HitOrMissEstimators<T>
where
    T: Float + FromPrimitive,
{
    fn calls(&self) -> usize {
        self.calls
    }

    fn accepted_calls(&self) -> usize {
        self.accepted
    }
}

/// Estimates the integral of `integrand` by hit-or-miss sampling with `calls` trials inside the
/// rectangle spanned by the domain and `[0, max_value]`.
///
/// Each trial draws `x` uniformly from the domain and `y` uniformly from `[0, max_value)` and
/// accepts the trial iff `y < f(x)`; exactly two draws are consumed from `rng` per trial, so a
/// caller holding the seed can reproduce or fast-forward the generator state. The estimator is
/// unbiased with a standard error shrinking as $O(1/\sqrt{N})$, provided `f` is non-negative on
/// the whole domain and `max_value` is not smaller than its supremum (see
/// [`crate::core::estimate_max`] for obtaining a candidate bound).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `calls` is zero or `max_value` is negative.
///
/// Returns [`Error::DomainViolation`] as soon as a sampled function value breaks the method's
/// preconditions by being negative, non-finite, or larger than `max_value`. No estimate is
/// returned in that case; a silently clipped acceptance test would bias the result downward.
pub fn integrate<T, I, R>(
    integrand: &I,
    rng: &mut R,
    calls: usize,
    max_value: T,
) -> Result<HitOrMissEstimators<T>>
where
    T: Float + FromPrimitive + std::fmt::Debug,
    I: Integrand<T>,
    R: Rng + ?Sized,
    Standard: Distribution<T>,
{
    if calls == 0 {
        return Err(Error::InvalidArgument(
            "hit-or-miss sampling requires at least one call".to_string(),
        ));
    }

    if max_value < T::zero() {
        return Err(Error::InvalidArgument(format!(
            "the bounding rectangle height must be non-negative, got {:?}",
            max_value
        )));
    }

    let domain = integrand.domain();
    let mut accepted = 0;

    for _ in 0..calls {
        let x = domain.sample(rng);
        let y = rng.gen::<T>() * max_value;
        let value = integrand.call(x);

        if !value.is_finite() {
            return Err(Error::DomainViolation(format!(
                "the integrand returned a non-finite value at x = {:?}",
                x
            )));
        }

        if value < T::zero() {
            return Err(Error::DomainViolation(format!(
                "the integrand is negative at x = {:?}; hit-or-miss sampling requires f >= 0",
                x
            )));
        }

        if value > max_value {
            return Err(Error::DomainViolation(format!(
                "the integrand exceeds the bounding rectangle at x = {:?}",
                x
            )));
        }

        if y < value {
            accepted += 1;
        }
    }

    Ok(HitOrMissEstimators {
        accepted,
        calls,
        width: domain.width(),
        max_value,
    })
}
