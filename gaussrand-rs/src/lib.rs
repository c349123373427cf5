//! # Gaussrand: Gaussian variates from any uniform source
//!
//! Turns uniformly distributed numbers in `[0, 1)` into standard normal
//! variates with Marsaglia's polar form of the Box-Muller transform. Every
//! accepted point of the unit disk yields two variates; the second one is
//! carried in a caller-owned [`GaussrandState`] and handed out by the next
//! call without drawing.
//!
//! The uniform source is supplied by the caller in one of two shapes:
//!
//! - [`gaussrand`] takes a closure with its own hidden state, such as
//!   [`uniform`] which is backed by the thread-local `rand` generator.
//! - [`gaussrand1`] takes a function plus the state it mutates, so each
//!   thread can own an independent `(source state, GaussrandState)` pair.
//!   [`gaussrand_rng`] is the same thing for any [`rand::Rng`].
//!
//! [`Gaussian`] wraps a state together with a mean and standard deviation.

mod error;
mod gaussian;
mod polar;
mod state;

use rand::distr::{Distribution, Uniform};

pub use error::{GaussError, Result};
pub use gaussian::Gaussian;
pub use polar::{gaussrand, gaussrand_rng, gaussrand1};
pub use state::{GaussrandState, Phase};

/// Uniform random number in `[0, 1)` from the thread-local generator.
pub fn uniform() -> f64 {
    let mut rng = rand::rng();
    let uniform =
        Uniform::new::<f64, f64>(0.0, 1.0).expect("Unable to create uniform distribution for f64");
    uniform.sample(&mut rng)
}
