//! Rayleigh fading channel with distance-dependent path loss.
//!
//! The squared magnitude of a complex Gaussian (Rayleigh) fading
//! coefficient follows a unit-mean exponential distribution, so the
//! squared channel gain for a user at distance `d` is
//!
//!   |h|^2 = Exp(mean=1) / d^theta
//!
//! where `theta` is the path-loss exponent. Every call draws fresh
//! independent randomness from the caller-supplied RNG; nothing is
//! memoized or shared.

use rand::Rng;
use rand_distr::Exp1;

use crate::error::SimulationError;

/// `10^(db/10)`.
pub fn db_to_linear(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

/// `10·log10(x)`, with non-positive inputs mapping to `-inf`.
pub fn linear_to_db(linear: f64) -> f64 {
    if linear <= 0.0 {
        f64::NEG_INFINITY
    } else {
        10.0 * linear.log10()
    }
}

/// Draw `count` i.i.d. squared channel gains for a user at `distance`.
pub fn generate_channel_gains(
    distance: f64,
    path_loss_exponent: f64,
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<f64>, SimulationError> {
    if !(distance > 0.0) {
        return Err(SimulationError::invalid(format!(
            "channel distance must be positive, got {distance}"
        )));
    }
    if count == 0 {
        return Err(SimulationError::invalid(
            "channel sample count must be positive",
        ));
    }

    let path_loss = distance.powf(path_loss_exponent);
    Ok((0..count)
        .map(|_| rng.sample::<f64, _>(Exp1) / path_loss)
        .collect())
}
