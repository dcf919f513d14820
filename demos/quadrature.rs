use quadrin::core::*;
use quadrin::estimators::BasicEstimators;
use quadrin::integrators::{hit_or_miss, simpson, trapezoid};

use rand_pcg::Pcg64;

/// Runs all three quadrature rules on one reference function and prints the estimates next to
/// the analytically known value.
fn report<I>(name: &str, integrand: &I, expected: f64, max_value: f64) -> Result<(), error::Error>
where
    I: Integrand<f64>,
{
    let mut rng = Pcg64::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7ac28fa16a64abf96);

    let mc = hit_or_miss::integrate(integrand, &mut rng, 1_000_000, max_value)?;
    let trap = trapezoid::integrate(integrand, 1_000)?;
    let simp = simpson::integrate(integrand, 1_000)?;

    println!("{}", name);
    println!("  expected    = {}", expected);
    println!("  hit-or-miss = {} \u{b1} {}", mc.estimate(), mc.std());
    println!("  trapezoid   = {}", trap);
    println!("  simpson     = {}", simp);

    Ok(())
}

fn main() -> Result<(), error::Error> {
    // the area under the quarter circle is pi/4
    let circle = BoundedFn::new(|x: f64| (1.0 - x * x).sqrt(), 0.0, 1.0)?;
    report(
        "quarter circle on [0, 1]",
        &circle,
        std::f64::consts::PI / 4.0,
        1.0,
    )?;

    // x^2 => 1/3 x^3 -> 1/3 - (-1/3) = 2/3
    let parabola = BoundedFn::new(|x: f64| x * x, -1.0, 1.0)?;
    let max = estimate_max(&parabola, 1_000)?;
    report("parabola on [-1, 1]", &parabola, 2.0 / 3.0, max)?;

    Ok(())
}
