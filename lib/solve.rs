//! Functions to diagonalize assembled Hamiltonian matrices.

use ndarray as nd;
use ndarray_linalg::{ self as la, Eig, Eigh };
use num_complex::Complex64 as C64;
use crate::{
    Arr2,
    error::KResult,
    hamiltonian::Symmetry,
    DEF_IMAG_EPSILON,
};

// zero out imaginary parts negligible relative to the real part
fn snap_real(z: C64) -> C64 {
    if z.im.abs() <= DEF_IMAG_EPSILON * z.re.abs().max(1.0) {
        C64::new(z.re, 0.0)
    } else {
        z
    }
}

// lexicographic (re, im) sort with the identical column permutation applied
// to the eigenvectors, then near-real cleanup on the values
fn sort_eigenpairs(evals: nd::Array1<C64>, evecs: nd::Array2<C64>)
    -> (nd::Array1<C64>, nd::Array2<C64>)
{
    let mut idx: Vec<usize> = (0..evals.len()).collect();
    idx.sort_by(|&i, &j| {
        evals[i].re.total_cmp(&evals[j].re)
            .then(evals[i].im.total_cmp(&evals[j].im))
    });
    let sorted_vals: nd::Array1<C64>
        = idx.iter().map(|&i| snap_real(evals[i])).collect();
    let sorted_vecs = evecs.select(nd::Axis(1), &idx);
    (sorted_vals, sorted_vecs)
}

/// Diagonalize a Hamiltonian matrix, dispatching on `symmetry`.
///
/// [`Symmetry::Hermitian`] takes the LAPACK Hermitian path: eigenvalues come
/// back real and ascending with orthonormal eigenvectors, widened to complex
/// storage for a uniform return type. [`Symmetry::General`] takes the general
/// complex path, then sorts eigenpairs lexicographically by `(re, im)` and
/// snaps values with `|im| ≤ 1e-10 max(1, |re|)` to exactly real; genuinely
/// complex eigenvalues (resonance widths) pass through unchanged.
///
/// Eigenvectors correspond column-for-column to the returned eigenvalues.
/// Decomposition failures surface as [`KError::Linalg`][crate::error::KError].
pub fn energies<S>(H: &Arr2<S>, symmetry: Symmetry)
    -> KResult<(nd::Array1<C64>, nd::Array2<C64>)>
where S: nd::Data<Elem = C64>
{
    match symmetry {
        Symmetry::Hermitian => {
            let (evals, evecs) = H.eigh(la::UPLO::Lower)?;
            Ok((evals.mapv(C64::from), evecs))
        },
        Symmetry::General => {
            let (evals, evecs) = H.eig()?;
            Ok(sort_eigenpairs(evals, evecs))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use crate::hamiltonian::hamiltonian;

    fn c(re: f64, im: f64) -> C64 { C64::new(re, im) }

    #[test]
    fn test_hermitian_two_level() {
        let H: nd::Array2<C64>
            = nd::array![
                [c(2.0, 0.0), c(1.0, 0.0)],
                [c(1.0, 0.0), c(2.0, 0.0)],
            ];
        let (evals, evecs) = energies(&H, Symmetry::Hermitian).unwrap();
        assert!((evals[0] - 1.0).norm() < 1e-12);
        assert!((evals[1] - 3.0).norm() < 1e-12);
        for j in 0..2 {
            let nj: f64
                = evecs.column(j).iter().map(|v| (*v * v.conj()).re).sum();
            assert!((nj - 1.0).abs() < 1e-12);
        }
        let overlap: C64
            = evecs.column(0).iter().zip(evecs.column(1))
            .map(|(a, b)| a.conj() * *b)
            .sum();
        assert!(overlap.norm() < 1e-12);
    }

    #[test]
    fn test_hermitian_laplacian_spectrum() {
        // second-difference matrix; eigenvalues are 2 - 2 cos(j π / (N + 1))
        let order: usize = 8;
        let H = hamiltonian(order, Symmetry::Hermitian, |n, m| {
            if n == m {
                c(2.0, 0.0)
            } else if n.abs_diff(m) == 1 {
                c(-1.0, 0.0)
            } else {
                c(0.0, 0.0)
            }
        });
        let (evals, _) = energies(&H, Symmetry::Hermitian).unwrap();
        for (j, ev) in evals.iter().enumerate() {
            let expected
                = 2.0 - 2.0 * ((j + 1) as f64 * PI / (order + 1) as f64).cos();
            assert!((*ev - expected).norm() < 1e-10);
        }
    }

    #[test]
    fn test_general_sorted() {
        let H: nd::Array2<C64>
            = nd::Array2::from_diag(&nd::array![
                c(3.0, 0.5), c(1.0, 1.0), c(1.0, -1.0),
            ]);
        let (evals, _) = energies(&H, Symmetry::General).unwrap();
        assert!((evals[0] - c(1.0, -1.0)).norm() < 1e-12);
        assert!((evals[1] - c(1.0, 1.0)).norm() < 1e-12);
        assert!((evals[2] - c(3.0, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn test_general_snaps_near_real() {
        let H: nd::Array2<C64>
            = nd::Array2::from_diag(&nd::array![c(1.0, 1e-12), c(2.0, 0.0)]);
        let (evals, _) = energies(&H, Symmetry::General).unwrap();
        assert_eq!(evals[0].im, 0.0);
        assert!((evals[0].re - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_general_keeps_genuine_widths() {
        let H: nd::Array2<C64>
            = nd::Array2::from_diag(&nd::array![c(1.0, -0.5), c(1.0, 0.5)]);
        let (evals, _) = energies(&H, Symmetry::General).unwrap();
        assert!((evals[0] - c(1.0, -0.5)).norm() < 1e-12);
        assert!(evals[0].im != 0.0);
        assert!((evals[1] - c(1.0, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn test_general_eigenpairs_consistent() {
        let H: nd::Array2<C64>
            = nd::array![
                [c(0.0, 0.0), c(1.0, 0.0)],
                [c(-1.0, 0.0), c(0.0, 0.0)],
            ];
        let (evals, evecs) = energies(&H, Symmetry::General).unwrap();
        assert!((evals[0] - c(0.0, -1.0)).norm() < 1e-12);
        assert!((evals[1] - c(0.0, 1.0)).norm() < 1e-12);
        for j in 0..2 {
            let v = evecs.column(j).to_owned();
            let hv = H.dot(&v);
            let residual = &hv - &v.mapv(|vk| vk * evals[j]);
            assert!(residual.iter().map(|z| z.norm()).sum::<f64>() < 1e-10);
        }
    }
}
