#![warn(clippy::all, clippy::cargo, clippy::nursery, clippy::pedantic)]
#![warn(missing_docs)]

//! The crate `quadrin` estimates definite [integrals] of bounded one-dimensional functions with
//! three independent quadrature rules: hit-or-miss [Monte Carlo integration], the composite
//! trapezoidal rule, and the composite Simpson's rule. It is a small numerical-methods reference,
//! not a production integration engine: there is no adaptive step control, no error-bound
//! estimation and no support for unbounded domains.
//!
//! # Features
//!
//! This library was designed with the following features as essential in mind:
//!
//! - **Generic numeric type**. The numeric type used in this library is not fixed, but instead a
//! generic parameter, so that the quadrature rules can be used with either `f32`, `f64`, or a
//! custom numeric type that implements the `Float` trait from the `num-traits` crate.
//! - **Generic random number generator**. The hit-or-miss integrator never touches a process-wide
//! random source. Every random number generator that implements the `Rng` trait from the `rand`
//! crate can be passed in explicitly, which makes every stochastic estimate seedable.
//! - **Reproducibility**. As far as the numeric type allows this, all results produced with
//! `quadrin` are completely reproducible, in the sense that the results only depend on the used
//! random number generator and the chosen seed. The hit-or-miss integrator consumes exactly two
//! draws per call, so a generator can be fast-forwarded past a finished run.
//! - **Fail-fast validation**. Zero step or call counts, inverted domains and negative bounding
//! rectangles are rejected before any work happens, and the hit-or-miss integrator aborts as soon
//! as it observes a sample that breaks its preconditions (a negative, non-finite, or
//! larger-than-the-rectangle function value) instead of silently returning a biased estimate.
//!
//! # What is ...?
//!
//! This section is a dictionary of terms that are used in this documentation. Given a function
//! $f$ that is non-negative and bounded on a closed interval $[a, b]$, we approximate
//!
//! $$ I = \int_a^b \mathrm{d} x \, f(x) $$
//!
//! using hit-or-miss Monte Carlo with
//!
//! $$ I \approx \frac{N_\mathrm{below}}{N} (b - a) \, f_\mathrm{max} $$
//!
//! where $N$ points are sampled uniformly in the rectangle $[a, b] \times [0, f_\mathrm{max}]$
//! and $N_\mathrm{below}$ of them fall below the curve. We use the following terms:
//!
//! - a *bounded function* is a real-valued function paired with a fixed closed domain of
//! definition — the input type shared by all three integrators;
//! - a *discretization* is a finite, evenly spaced sample of points covering a domain, used as a
//! quadrature grid;
//! - *hit-or-miss Monte Carlo* estimates the integral from the fraction of uniformly sampled
//! points in a bounding rectangle that fall under the curve;
//! - a *composite rule* applies a quadrature rule piecewise over subintervals and sums the
//! pieces, as opposed to a single global approximation;
//! - a *supremum estimate* is an approximate upper bound on a function's maximum over its domain,
//! obtained by finite sampling. It may undercount the true maximum;
//! - the number of *calls* is $N$, the number of times the integrand is evaluated.
//!
//! [Monte Carlo integration]: https://en.wikipedia.org/wiki/Monte_Carlo_integration
//! [integrals]: https://en.wikipedia.org/wiki/Integral

pub mod core;
pub mod integrators;

pub use crate::core::*;
