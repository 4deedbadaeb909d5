//! Functions to generate discretized momentum-space contours and the
//! quadrature steps attached to their nodes.
//!
//! ```
//! use num_complex::Complex64 as C64;
//! use kspace::contour::{ steps, triangle };
//!
//! let contour = triangle(0.17, 0.07, 2.5, 10);
//! let dk = steps(&contour);
//! let total: C64 = dk.iter().sum();
//! assert!((total - contour[contour.len() - 1]).norm() < 1e-12);
//! ```

use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::Zero;
use crate::Arr1;

/// Compute the quadrature step attached to each node of a contour.
///
/// Each step is the displacement from the previous node, with a synthetic
/// origin predecessor for the first node; the steps therefore telescope to
/// `contour[n] - 0` at every `n`.
pub fn steps<S>(contour: &Arr1<S>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let mut prev = C64::zero();
    contour.iter()
        .map(|k| { let dk = *k - prev; prev = *k; dk })
        .collect()
}

/// Drop a leading node lying exactly at the origin.
///
/// The origin carries a degenerate quadrature step, so contour-based
/// constructions exclude it; all other nodes are copied unchanged.
pub fn trim_origin<S>(contour: &Arr1<S>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    match contour.first() {
        Some(k0) if k0.is_zero() => contour.slice(nd::s![1..]).to_owned(),
        _ => contour.to_owned(),
    }
}

/// Generate a piecewise-linear contour through a sequence of vertices, with
/// `per_segment` evenly spaced nodes following each vertex.
///
/// The first vertex is included as-is, so the output holds
/// `1 + per_segment * (vertices.len() - 1)` nodes; an empty vertex list gives
/// an empty contour.
pub fn segments(vertices: &[C64], per_segment: usize) -> nd::Array1<C64> {
    let inner
        = vertices.iter().zip(vertices.iter().skip(1))
        .flat_map(|(a, b)| {
            (1..=per_segment)
                .map(move |j| {
                    *a + (*b - *a) * (j as f64 / per_segment as f64)
                })
        });
    vertices.first().copied().into_iter().chain(inner).collect()
}

/// Generate the triangular contour
/// `0 → (peak_re - i peak_im) → 2 peak_re → k_max` with `per_segment` nodes
/// along each of the three legs.
///
/// Dipping below the real axis around a resonance momentum exposes the
/// resonance as a discrete complex eigenvalue; `k_max` truncates the
/// remaining real-axis integration. The output includes the origin, for
/// `3 * per_segment + 1` nodes in total.
pub fn triangle(peak_re: f64, peak_im: f64, k_max: f64, per_segment: usize)
    -> nd::Array1<C64>
{
    segments(
        &[
            C64::zero(),
            C64::new(peak_re, -peak_im),
            C64::new(2.0 * peak_re, 0.0),
            C64::new(k_max, 0.0),
        ],
        per_segment,
    )
}

/// Generate a real-axis contour of `n` evenly spaced nodes running from the
/// origin (inclusive) to `k_max`.
///
/// After origin trimming every node carries the uniform step `k_max / n`.
pub fn linear(k_max: f64, n: usize) -> nd::Array1<C64> {
    segments(&[C64::zero(), C64::new(k_max, 0.0)], n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_telescope() {
        let contour: nd::Array1<C64>
            = vec![
                C64::new(0.1, 0.0),
                C64::new(0.17, -0.07),
                C64::new(0.34, 0.0),
                C64::new(2.5, 0.0),
            ].into();
        let dk = steps(&contour);
        assert_eq!(dk.len(), contour.len());
        let mut partial = C64::zero();
        for (dkn, kn) in dk.iter().zip(&contour) {
            partial += *dkn;
            assert!((partial - *kn).norm() < 1e-15);
        }
    }

    #[test]
    fn test_steps_empty() {
        let contour: nd::Array1<C64> = nd::Array1::zeros(0);
        assert_eq!(steps(&contour).len(), 0);
    }

    #[test]
    fn test_trim_origin() {
        let with_origin = linear(2.0, 4);
        assert_eq!(with_origin.len(), 5);
        assert!(with_origin[0].is_zero());
        let trimmed = trim_origin(&with_origin);
        assert_eq!(trimmed.len(), 4);
        assert!((trimmed[0] - C64::new(0.5, 0.0)).norm() < 1e-15);
        let retrimmed = trim_origin(&trimmed);
        assert_eq!(retrimmed, trimmed);
    }

    #[test]
    fn test_triangle_vertices() {
        let contour = triangle(0.17, 0.07, 2.5, 10);
        assert_eq!(contour.len(), 31);
        assert!(contour[0].is_zero());
        assert!((contour[10] - C64::new(0.17, -0.07)).norm() < 1e-15);
        assert!((contour[20] - C64::new(0.34, 0.0)).norm() < 1e-15);
        assert!((contour[30] - C64::new(2.5, 0.0)).norm() < 1e-15);
    }

    #[test]
    fn test_linear_uniform_steps() {
        let contour = trim_origin(&linear(1.0, 10));
        let dk = steps(&contour);
        assert!(dk.iter().all(|d| (*d - C64::new(0.1, 0.0)).norm() < 1e-12));
    }
}
