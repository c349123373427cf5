//! Carried state of the polar Box-Muller transform.

/// Whether a second Gaussian value is waiting to be returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing cached; the next call draws a fresh point from the unit disk.
    #[default]
    Empty,
    /// `v2 * scale` is pending; the next call returns it without drawing.
    Cached,
}

impl Phase {
    /// The phase as the classic `0`/`1` flag.
    #[inline]
    pub fn as_flag(self) -> u8 {
        match self {
            Phase::Empty => 0,
            Phase::Cached => 1,
        }
    }
}

/// Current state of one Gaussian stream.
///
/// Owned by the caller and passed by `&mut` into every call of
/// [`gaussrand`](crate::gaussrand) or [`gaussrand1`](crate::gaussrand1)
/// for the same logical stream. Don't share one between threads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GaussrandState {
    pub(crate) v1: f64,
    pub(crate) v2: f64,
    pub(crate) s: f64,
    pub(crate) scale: f64,
    pub(crate) phase: Phase,
}

impl GaussrandState {
    /// A freshly initialized state with nothing cached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the "no cached value" condition, dropping any pending value.
    pub fn init(&mut self) {
        self.v1 = 0.0;
        self.v2 = 0.0;
        self.s = 0.0;
        self.scale = 0.0;
        self.phase = Phase::Empty;
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn has_cached(&self) -> bool {
        self.phase == Phase::Cached
    }

    /// First coordinate of the last accepted unit-disk point.
    #[inline]
    pub fn v1(&self) -> f64 {
        self.v1
    }

    /// Second coordinate of the last accepted unit-disk point.
    #[inline]
    pub fn v2(&self) -> f64 {
        self.v2
    }

    /// Squared radius of the last accepted point, in `(0, 1)` once drawn.
    #[inline]
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Record an accepted point and return the first value of its pair.
    #[inline]
    pub(crate) fn accept(&mut self, v1: f64, v2: f64, s: f64) -> f64 {
        self.v1 = v1;
        self.v2 = v2;
        self.s = s;
        self.scale = ((-2.0 * s.ln()) / s).sqrt();
        self.phase = Phase::Cached;
        v1 * self.scale
    }

    /// Hand out the pending second value of the pair.
    #[inline]
    pub(crate) fn take_cached(&mut self) -> f64 {
        self.phase = Phase::Empty;
        self.v2 * self.scale
    }
}
