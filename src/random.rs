//! Random integers in an inclusive range

use rand::RngExt;
use tracing::trace;

/// Return a random integer between `min` and `max`, both included
///
/// The bounds are swapped if `min` is greater than `max`.
pub fn random_int(min: i64, max: i64) -> i64 {
    random_int_with(&mut rand::rng(), min, max)
}

/// Return a random integer between `min` and `max` drawn from `rng`
///
/// # Parameters
///
/// * `rng`: random number generator to draw from
/// * `min`: lower bound, included
/// * `max`: upper bound, included
pub fn random_int_with<R: RngExt>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    let value = rng.random_range(min..=max);

    trace!(min, max, value, "drew random integer");
    value
}
