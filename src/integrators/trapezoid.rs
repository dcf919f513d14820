//! The composite trapezoidal rule.
use crate::core::error::Result;
use crate::core::{cast_usize, Integrand};

use num_traits::{Float, FromPrimitive};

/// Estimates the integral of `integrand` with the composite trapezoidal rule on a uniform grid
/// of `num_steps` subintervals: every adjacent pair of grid points `(x_i, x_{i+1})` contributes
/// `(f(x_i) + f(x_{i+1})) * delta_x / 2` to the sum.
///
/// The estimate is deterministic, exact for piecewise-linear integrands and converges as
/// $O(\Delta x^2)$ for smooth ones. With `num_steps == 1` it reduces to the single-trapezoid
/// formula `(f(a) + f(b)) * (b - a) / 2`.
///
/// # Errors
///
/// Returns [`crate::core::error::Error::InvalidArgument`] if `num_steps` is zero.
pub fn integrate<T, I>(integrand: &I, num_steps: usize) -> Result<T>
where
    T: Float + FromPrimitive + std::fmt::Debug,
    I: Integrand<T>,
{
    let domain = integrand.domain();
    let xs = domain.discretize(num_steps)?;
    let delta_x = domain.width() / cast_usize::<T>(num_steps);
    let two = T::one() + T::one();

    let mut sum = T::zero();
    for pair in xs.windows(2) {
        sum = sum + (integrand.call(pair[0]) + integrand.call(pair[1])) * delta_x / two;
    }

    Ok(sum)
}
