use rand::Rng;

use crate::{
    error::{GaussError, Result},
    polar::{gaussrand, gaussrand_rng, gaussrand1},
    state::GaussrandState,
};

/// Normal distribution with a given mean and standard deviation.
///
/// Owns the [`GaussrandState`] of its stream, so each `Gaussian` pairs up
/// its own draws independently of any other.
#[derive(Clone, Debug, PartialEq)]
pub struct Gaussian {
    mean: f64,
    std_dev: f64,
    state: GaussrandState,
}

impl Gaussian {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(GaussError::InvalidMean(mean));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(GaussError::InvalidStdDev(std_dev));
        }
        log::debug!("gaussian stream with mean={mean} std_dev={std_dev}");
        Ok(Self {
            mean,
            std_dev,
            state: GaussrandState::new(),
        })
    }

    /// Mean 0, standard deviation 1.
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
            state: GaussrandState::new(),
        }
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    #[inline]
    pub fn state(&self) -> &GaussrandState {
        &self.state
    }

    /// Forget any cached second value.
    pub fn reset(&mut self) {
        self.state.init();
    }

    #[inline]
    fn scale(&self, z: f64) -> f64 {
        self.mean + self.std_dev * z
    }

    /// Sample using a uniform source with hidden state.
    pub fn sample<F>(&mut self, f: F) -> f64
    where
        F: FnMut() -> f64,
    {
        let z = gaussrand(f, &mut self.state);
        self.scale(z)
    }

    /// Sample using a uniform source with explicit state.
    pub fn sample_with<T, F>(&mut self, f: F, f_state: &mut T) -> f64
    where
        T: ?Sized,
        F: FnMut(&mut T) -> f64,
    {
        let z = gaussrand1(f, f_state, &mut self.state);
        self.scale(z)
    }

    /// Sample using a `rand` generator.
    pub fn sample_rng<R: Rng>(&mut self, rng: &mut R) -> f64 {
        let z = gaussrand_rng(rng, &mut self.state);
        self.scale(z)
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Self::standard()
    }
}
