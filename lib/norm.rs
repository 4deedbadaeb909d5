//! L²-type norms and normalization of complex-valued functions over an
//! interval, with the adaptive quadrature backing them.

use num_complex::Complex64 as C64;
use crate::{
    error::{ KError, KResult },
    DEF_EPSILON,
    DEF_MAXDEPTH,
};

/// Compute the absolute square of a complex number, `re(z conj(z))`.
pub fn absq(z: C64) -> f64 { (z * z.conj()).re }

// one Simpson panel over an interval of width h with midpoint sample fm
fn simpson(fa: f64, fm: f64, fb: f64, h: f64) -> f64 {
    h / 6.0 * (fa + 4.0 * fm + fb)
}

// recursive bisection; s is the estimate for the whole panel [a, b] and the
// |Δs| ≤ 15 ε acceptance criterion comes with a Δs/15 Richardson correction
fn adapt<F>(
    f: &F,
    a: f64, fa: f64,
    m: f64, fm: f64,
    b: f64, fb: f64,
    s: f64,
    epsilon: f64,
    depth: usize,
) -> f64
where F: Fn(f64) -> f64
{
    let ml = (a + m) / 2.0;
    let mr = (m + b) / 2.0;
    let fml = f(ml);
    let fmr = f(mr);
    let sl = simpson(fa, fml, fm, m - a);
    let sr = simpson(fm, fmr, fb, b - m);
    let ds = sl + sr - s;
    if ds.abs() <= 15.0 * epsilon {
        sl + sr + ds / 15.0
    } else if depth == 0 {
        println!(
            "norm::quad: WARNING: subdivision limit reached; accepting the \
            current panel estimate"
        );
        sl + sr + ds / 15.0
    } else {
        adapt(f, a, fa, ml, fml, m, fm, sl, epsilon / 2.0, depth - 1)
            + adapt(f, m, fm, mr, fmr, b, fb, sr, epsilon / 2.0, depth - 1)
    }
}

fn integrate<F>(f: F, bounds: (f64, f64), epsilon: f64) -> f64
where F: Fn(f64) -> f64
{
    let (a, b) = bounds;
    let m = (a + b) / 2.0;
    let fa = f(a);
    let fm = f(m);
    let fb = f(b);
    let s = simpson(fa, fm, fb, b - a);
    adapt(&f, a, fa, m, fm, b, fb, s, epsilon, DEF_MAXDEPTH)
}

/// Integrate a real-valued function over `bounds` by adaptive Simpson
/// quadrature to absolute tolerance `epsilon`.
///
/// Subdivision depth is capped; a panel hitting the cap is accepted at its
/// current estimate with a printed warning. Reversed bounds give the signed
/// integral.
pub fn quad<F>(f: F, bounds: (f64, f64), epsilon: f64) -> KResult<f64>
where F: Fn(f64) -> f64
{
    KError::check_epsilon(epsilon)?;
    Ok(integrate(f, bounds, epsilon))
}

/// Compute the norm of a complex-valued function over an interval: the
/// integral of [`absq`] of its values, to the crate default tolerance.
pub fn norm<F>(f: F, bounds: (f64, f64)) -> f64
where F: Fn(f64) -> C64
{
    integrate(|x| absq(f(x)), bounds, DEF_EPSILON)
}

/// Like [`norm`], but weight the probability density pointwise by `weight`.
pub fn norm_weighted<F, W>(f: F, bounds: (f64, f64), weight: W) -> f64
where
    F: Fn(f64) -> C64,
    W: Fn(f64) -> f64,
{
    integrate(|x| absq(f(x)) * weight(x), bounds, DEF_EPSILON)
}

/// Return `f` rescaled to unit [`norm`] over `bounds`.
///
/// Fails with [`KError::VanishingNorm`] if the norm of `f` is not strictly
/// positive and finite.
pub fn normalize<F>(f: F, bounds: (f64, f64)) -> KResult<impl Fn(f64) -> C64>
where F: Fn(f64) -> C64
{
    let N = norm(&f, bounds);
    KError::check_norm(N)?;
    let on = N.sqrt().recip();
    Ok(move |x: f64| f(x) * on)
}

/// Like [`normalize`], but compute the norm with [`norm_weighted`].
///
/// The weight shapes the norm only; it is not folded into the returned
/// function.
pub fn normalize_weighted<F, W>(f: F, bounds: (f64, f64), weight: W)
    -> KResult<impl Fn(f64) -> C64>
where
    F: Fn(f64) -> C64,
    W: Fn(f64) -> f64,
{
    let N = norm_weighted(&f, bounds, weight);
    KError::check_norm(N)?;
    let on = N.sqrt().recip();
    Ok(move |x: f64| f(x) * on)
}
