//! The quadrature rules provided by this crate. Each rule consumes a [`crate::core::Integrand`]
//! without modifying it and returns an independent estimate of the same integral.
pub mod hit_or_miss;
pub mod simpson;
pub mod trapezoid;
