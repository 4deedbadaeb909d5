#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs for the construction and
//! diagonalization of Hamiltonian matrices in caller-supplied bases, including
//! the non-Hermitian complex-momentum-contour formulation used to compute
//! Gamow (resonance) states alongside ordinary bound states.
//!
//! Provides implementations for the following numerical routines:
//! - Matrix construction:
//!     - Dense index-grid construction, with optional Hermitian
//!       lower-triangle mirroring
//!     - Dense complex-contour construction with per-column quadrature
//!       steps[^1]
//! - Diagonalization:
//!     - Hermitian (ascending real spectrum, orthonormal eigenvectors)
//!     - General complex (spectrum sorted by real then imaginary part, with
//!       near-real eigenvalues snapped to exactly real)
//! - Wavefunction synthesis from eigenvectors over real-axis or
//!   contour-parametrized basis families, with L²-type normalization via
//!   adaptive quadrature
//!
//! See [`docs`] for theoretical background.
//!
//! [^1]: T. Berggren, "On the use of resonant states in eigenfunction
//! expansions of scattering and reaction amplitudes." Nuclear Physics A
//! **109** 265-287 (1968).

pub mod error;
pub mod contour;
pub mod hamiltonian;
pub mod solve;
pub mod wavefunction;
pub mod norm;

pub mod docs;

pub(crate) const DEF_EPSILON: f64 = 1e-9;
pub(crate) const DEF_MAXDEPTH: usize = 20;
pub(crate) const DEF_IMAG_EPSILON: f64 = 1e-10;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
