//! Functions to assemble Hamiltonian matrices from caller-supplied
//! matrix-element functions.
//!
//! The builders are basis-agnostic: anything the element function needs
//! beyond its node or index arguments (potential parameters, quantum
//! numbers, precomputed tables) is carried by closure capture and never
//! inspected here. Numerical failures inside the element function flow
//! untouched into the matrix.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    contour::{ steps, trim_origin },
};

/// Matrix symmetry selector for construction and diagonalization.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Symmetry {
    /// The element function is symmetric in its index arguments; only the
    /// lower triangle is evaluated and eigenpairs come from the Hermitian
    /// decomposition.
    Hermitian,
    /// No symmetry is assumed.
    General,
}

impl Symmetry {
    /// Return `true` if `self` is `Hermitian`.
    pub fn is_hermitian(&self) -> bool { matches!(self, Self::Hermitian) }

    /// Return `true` if `self` is `General`.
    pub fn is_general(&self) -> bool { matches!(self, Self::General) }
}

/// Fill an `order × order` complex matrix from an element function of two
/// basis indices.
///
/// Under [`Symmetry::Hermitian`], only pairs with `n_prim <= n` are
/// evaluated and each value is copied unconjugated to its mirror cell,
/// halving the work for symmetric kernels; under [`Symmetry::General`] the
/// full index grid is evaluated independently. Either way the element
/// function runs exactly once per required cell.
pub fn hamiltonian<F>(order: usize, symmetry: Symmetry, mut elem: F)
    -> nd::Array2<C64>
where F: FnMut(usize, usize) -> C64
{
    let mut H: nd::Array2<C64> = nd::Array2::zeros((order, order));
    match symmetry {
        Symmetry::Hermitian => {
            for n in 0..order {
                for n_prim in 0..=n {
                    let h = elem(n, n_prim);
                    H[[n, n_prim]] = h;
                    H[[n_prim, n]] = h;
                }
            }
        },
        Symmetry::General => {
            for n in 0..order {
                for n_prim in 0..order {
                    H[[n, n_prim]] = elem(n, n_prim);
                }
            }
        },
    }
    H
}

/// Fill a dense complex matrix over the nodes of a momentum contour.
///
/// The contour is first trimmed of a leading origin node (see
/// [`trim_origin`]) and the matrix order is the trimmed length. Entry
/// `(n, n')` is `elem(k[n], k[n'], dk[n'])` with `dk` the quadrature steps
/// of the trimmed contour: every entry receives the step of its *column*
/// node, which carries that column's quadrature weight in the discretized
/// integral operator. The convention is not symmetric in `n` and `n'` and
/// must not be; symmetrizing it breaks the discretization.
///
/// Contour matrices are diagonalized with [`Symmetry::General`]; complex
/// nodes make them non-Hermitian even for real symmetric kernels.
pub fn contour_hamiltonian<S, F>(contour: &Arr1<S>, mut elem: F)
    -> nd::Array2<C64>
where
    S: nd::Data<Elem = C64>,
    F: FnMut(C64, C64, C64) -> C64,
{
    let k = trim_origin(contour);
    let dk = steps(&k);
    let order = k.len();
    let mut H: nd::Array2<C64> = nd::Array2::zeros((order, order));
    for n in 0..order {
        for n_prim in 0..order {
            H[[n, n_prim]] = elem(k[n], k[n_prim], dk[n_prim]);
        }
    }
    H
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::linear;

    #[test]
    fn test_hermitian_matches_general() {
        let elem = |n: usize, m: usize| {
            C64::new((n * m) as f64, 0.0) + (n as f64 + m as f64)
        };
        let h = hamiltonian(6, Symmetry::Hermitian, elem);
        let g = hamiltonian(6, Symmetry::General, elem);
        assert_eq!(h, g);
    }

    #[test]
    fn test_hermitian_mirrors_lower_triangle() {
        // asymmetric on purpose: the mirror must be a plain copy of the
        // lower-triangle value, not a fresh evaluation or a conjugate
        let h = hamiltonian(
            3,
            Symmetry::Hermitian,
            |n, m| C64::new(10.0 * n as f64 + m as f64, 1.0),
        );
        assert_eq!(h[[0, 1]], h[[1, 0]]);
        assert_eq!(h[[0, 1]], C64::new(10.0, 1.0));
        assert_eq!(h[[1, 2]], h[[2, 1]]);
        assert_eq!(h[[1, 2]], C64::new(21.0, 1.0));
    }

    #[test]
    fn test_invocation_counts() {
        let order: usize = 7;
        let mut calls: usize = 0;
        hamiltonian(order, Symmetry::Hermitian, |n, m| {
            calls += 1;
            C64::new(n as f64, m as f64)
        });
        assert_eq!(calls, order * (order + 1) / 2);
        calls = 0;
        hamiltonian(order, Symmetry::General, |n, m| {
            calls += 1;
            C64::new(n as f64, m as f64)
        });
        assert_eq!(calls, order * order);
    }

    #[test]
    fn test_contour_column_steps() {
        let contour: nd::Array1<C64>
            = vec![
                C64::new(0.0, 0.0),
                C64::new(1.0, 0.0),
                C64::new(1.0, 1.0),
                C64::new(0.0, 3.0),
            ].into();
        let h = contour_hamiltonian(&contour, |_k, _kp, dk| dk);
        assert_eq!(h.dim(), (3, 3));
        let dk = steps(&trim_origin(&contour));
        for n in 0..3 {
            for n_prim in 0..3 {
                assert_eq!(h[[n, n_prim]], dk[n_prim]);
            }
        }
    }

    #[test]
    fn test_contour_trims_origin() {
        let contour = linear(2.0, 8);
        let h = contour_hamiltonian(&contour, |k, kp, dk| k * kp * dk);
        assert_eq!(h.dim(), (8, 8));
        let no_origin = trim_origin(&contour);
        let h2 = contour_hamiltonian(&no_origin, |k, kp, dk| k * kp * dk);
        assert_eq!(h, h2);
    }

    #[test]
    fn test_contour_empty() {
        let contour: nd::Array1<C64> = nd::Array1::zeros(0);
        let h = contour_hamiltonian(&contour, |k, _, _| k);
        assert_eq!(h.dim(), (0, 0));
    }
}
