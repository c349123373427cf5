//! Marsaglia's polar form of the Box-Muller transform.
//!
//! A point `(v1, v2)` is drawn uniformly from the square `(-1, 1)^2` until it
//! lands strictly inside the unit disk and off the origin. With
//! `s = v1^2 + v2^2` and `scale = sqrt(-2 ln(s) / s)`, both `v1 * scale` and
//! `v2 * scale` are independent standard normal variates. The first is
//! returned straight away; the second is kept in [`GaussrandState`] and
//! returned by the next call without touching the uniform source.
//!
//! The uniform source must yield values in `[0, 1)`. A source that keeps
//! returning `0.5` (the origin) or anything mapping outside the disk will spin
//! forever in the rejection loop.

use rand::Rng;

use crate::state::GaussrandState;

/// Shared core of every calling convention.
#[inline]
fn polar<F>(mut uniform: F, state: &mut GaussrandState) -> f64
where
    F: FnMut() -> f64,
{
    if state.has_cached() {
        return state.take_cached();
    }

    let mut v1;
    let mut v2;
    let mut s;
    loop {
        v1 = 2.0 * uniform() - 1.0;
        v2 = 2.0 * uniform() - 1.0;
        s = v1 * v1 + v2 * v2;
        if s < 1.0 && s != 0.0 {
            break;
        }
        log::trace!("rejected unit-disk candidate ({v1}, {v2}) with s={s}");
    }
    log::trace!("accepted unit-disk point ({v1}, {v2}) with s={s}");

    state.accept(v1, v2, s)
}

/// Gaussian variate from a uniform source that carries its own hidden state.
///
/// Since `f` mutates whatever it closes over, two threads sharing one
/// source need outside synchronization. Prefer [`gaussrand1`] when each
/// stream can own its generator.
pub fn gaussrand<F>(f: F, state: &mut GaussrandState) -> f64
where
    F: FnMut() -> f64,
{
    polar(f, state)
}

/// Same as [`gaussrand`], but the uniform source takes its state explicitly.
///
/// `f` is called with `f_state` for every uniform draw. One
/// `(f_state, state)` pair per thread makes this safe to run concurrently.
/// The second call of a pair never calls `f`, whichever `f_state` is passed.
pub fn gaussrand1<T, F>(mut f: F, f_state: &mut T, state: &mut GaussrandState) -> f64
where
    T: ?Sized,
    F: FnMut(&mut T) -> f64,
{
    polar(|| f(f_state), state)
}

/// [`gaussrand1`] with a `rand` generator as the explicit uniform state.
#[inline]
pub fn gaussrand_rng<R>(rng: &mut R, state: &mut GaussrandState) -> f64
where
    R: Rng,
{
    gaussrand1(|r: &mut R| r.random::<f64>(), rng, state)
}
