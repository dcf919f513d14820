//! The core module
pub mod error;
pub mod estimators;

use crate::core::error::{Error, Result};
use num_traits::{Float, FromPrimitive};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A closed interval `[lower, upper]` with `lower < upper`. Immutable after construction; every
/// integrator discretizes or samples it without modifying it.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct Domain<T> {
    lower: T,
    upper: T,
}

impl<T> Domain<T>
where
    T: Float + std::fmt::Debug,
{
    /// Construct the interval `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either bound is non-finite or if the interval is
    /// inverted or degenerate (`lower >= upper`).
    pub fn new(lower: T, upper: T) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(Error::InvalidArgument(format!(
                "domain bounds must be finite with lower < upper, got [{:?}, {:?}]",
                lower, upper
            )));
        }

        Ok(Self { lower, upper })
    }

    /// Returns the lower bound of the interval.
    pub const fn lower(&self) -> T {
        self.lower
    }

    /// Returns the upper bound of the interval.
    pub const fn upper(&self) -> T {
        self.upper
    }

    /// Returns the length `upper - lower` of the interval.
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    /// Returns the `num_steps + 1` evenly spaced grid points
    /// `x_i = lower + i * (upper - lower) / num_steps`. The sequence is strictly increasing,
    /// starts at `lower` and ends at `upper` up to floating-point rounding. A fresh vector is
    /// produced on every request; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `num_steps` is zero.
    pub fn discretize(&self, num_steps: usize) -> Result<Vec<T>>
    where
        T: FromPrimitive,
    {
        if num_steps == 0 {
            return Err(Error::InvalidArgument(
                "a discretization requires at least one step".to_string(),
            ));
        }

        let steps = cast_usize::<T>(num_steps);

        Ok((0..=num_steps)
            .map(|i| self.lower + cast_usize::<T>(i) * self.width() / steps)
            .collect())
    }

    /// Draws one sample uniformly distributed over `[lower, upper)` from the given generator.
    pub fn sample<R>(&self, rng: &mut R) -> T
    where
        R: Rng + ?Sized,
        Standard: Distribution<T>,
    {
        self.lower + rng.gen::<T>() * self.width()
    }
}

/// A real-valued function restricted to a closed domain. This is the input type consumed by every
/// integrator in this crate; implement it directly for stateful integrands or use [`BoundedFn`]
/// to wrap a plain closure.
pub trait Integrand<T: Copy> {
    /// Evaluate the function at `x`. Callers only pass values inside the domain.
    fn call(&self, x: T) -> T;

    /// The closed interval the function is defined on.
    fn domain(&self) -> Domain<T>;
}

/// Pairs a closure with a [`Domain`], the simplest possible [`Integrand`].
pub struct BoundedFn<F, T> {
    f: F,
    domain: Domain<T>,
}

impl<F, T> BoundedFn<F, T>
where
    F: Fn(T) -> T,
    T: Float + std::fmt::Debug,
{
    /// Restrict the function `f` to the interval `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the bounds do not form a valid domain.
    pub fn new(f: F, lower: T, upper: T) -> Result<Self> {
        Ok(Self {
            f,
            domain: Domain::new(lower, upper)?,
        })
    }

    /// Restrict the function `f` to an already validated domain.
    pub const fn over(f: F, domain: Domain<T>) -> Self {
        Self { f, domain }
    }
}

impl<F, T> Integrand<T> for BoundedFn<F, T>
where
    F: Fn(T) -> T,
    T: Float,
{
    fn call(&self, x: T) -> T {
        (self.f)(x)
    }

    fn domain(&self) -> Domain<T> {
        self.domain
    }
}

/// Estimates the supremum of the integrand by evaluating it on a `num_steps`-step
/// discretization of its domain and returning the largest observed value.
///
/// This is a *lower bound* on the true supremum: a maximum lying strictly between grid points is
/// missed. Callers sizing a bounding rectangle for [`crate::integrators::hit_or_miss`] must
/// either oversample or supply a known analytic bound instead.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `num_steps` is zero.
pub fn estimate_max<T, I>(integrand: &I, num_steps: usize) -> Result<T>
where
    T: Float + FromPrimitive + std::fmt::Debug,
    I: Integrand<T>,
{
    let xs = integrand.domain().discretize(num_steps)?;

    // seed the running maximum from the first grid point; a zero seed would misreport
    // integrands that are negative everywhere
    let mut max = integrand.call(xs[0]);
    for &x in &xs[1..] {
        let y = integrand.call(x);
        if y > max {
            max = y;
        }
    }

    Ok(max)
}

// step and call counts stay far below the integer range the supported float types
// represent exactly
pub(crate) fn cast_usize<T: FromPrimitive>(value: usize) -> T {
    T::from_usize(value).unwrap()
}
