//! Continuous wavefunctions synthesized from eigenvector coefficients and
//! basis-function families.
//!
//! Both synthesizer types freeze their ingredients at construction and hold
//! no interior state: every evaluation is a fresh weighted sum over the full
//! coefficient vector, so identical inputs always give identical outputs.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    contour::{ steps, trim_origin },
    error::{ KError, KResult, LengthError },
    norm::norm,
};

/// A wavefunction over an index-based basis family.
///
/// Evaluation at a coordinate `r` is `Σ_n coeffs[n] * basis(r, n)` with `n`
/// ranging over `0..coeffs.len()`.
#[derive(Clone)]
pub struct Wavefunction<F>
where F: Fn(f64, usize) -> C64
{
    coeffs: nd::Array1<C64>,
    basis: F,
}

impl<F> Wavefunction<F>
where F: Fn(f64, usize) -> C64
{
    /// Create a new `Wavefunction` over basis indices `0..coeffs.len()`.
    pub fn new(coeffs: nd::Array1<C64>, basis: F) -> Self {
        Self { coeffs, basis }
    }

    /// Evaluate at a single coordinate.
    pub fn at(&self, r: f64) -> C64 {
        self.coeffs.iter().enumerate()
            .map(|(n, cn)| *cn * (self.basis)(r, n))
            .sum()
    }

    /// Evaluate at every coordinate of an array, producing an array of the
    /// same shape.
    pub fn sample<S>(&self, r: &Arr1<S>) -> nd::Array1<C64>
    where S: nd::Data<Elem = f64>
    {
        r.mapv(|rk| self.at(rk))
    }

    /// Get a reference to the coefficient vector.
    pub fn get_coeffs(&self) -> &nd::Array1<C64> { &self.coeffs }

    /// Get the number of basis terms.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.coeffs.len() }

    /// Rescale the coefficient vector so that the synthesized function has
    /// unit norm over `bounds`.
    ///
    /// Fails with [`KError::VanishingNorm`] if the starting norm is not
    /// strictly positive and finite.
    pub fn normalized(self, bounds: (f64, f64)) -> KResult<Self> {
        let N = norm(|r| self.at(r), bounds);
        KError::check_norm(N)?;
        let on = N.sqrt().recip();
        let coeffs = self.coeffs.mapv(|cn| cn * on);
        Ok(Self { coeffs, ..self })
    }
}

/// A wavefunction over a basis family parametrized by the nodes of a
/// momentum contour.
///
/// Construction trims a leading origin node from the contour, mirroring
/// [`contour_hamiltonian`][crate::hamiltonian::contour_hamiltonian], then
/// freezes the per-node quadrature steps alongside the coefficients.
/// Evaluation at a coordinate `r` is `Σ_n coeffs[n] * basis(r, k[n], dk[n])`;
/// the basis function is responsible for folding its step argument into each
/// term's quadrature normalization.
#[derive(Clone)]
pub struct ContourWavefunction<F>
where F: Fn(f64, C64, C64) -> C64
{
    coeffs: nd::Array1<C64>,
    basis: F,
    contour: nd::Array1<C64>,
    dk: nd::Array1<C64>,
}

impl<F> ContourWavefunction<F>
where F: Fn(f64, C64, C64) -> C64
{
    /// Create a new `ContourWavefunction`.
    ///
    /// The coefficient vector must match the origin-trimmed contour in
    /// length; a mismatch means the coefficients came from a different
    /// discretization than the one supplied here.
    pub fn new<S>(coeffs: nd::Array1<C64>, basis: F, contour: &Arr1<S>)
        -> KResult<Self>
    where S: nd::Data<Elem = C64>
    {
        let contour = trim_origin(contour);
        LengthError::check(&coeffs, &contour)?;
        let dk = steps(&contour);
        Ok(Self { coeffs, basis, contour, dk })
    }

    /// Evaluate at a single coordinate.
    pub fn at(&self, r: f64) -> C64 {
        self.coeffs.iter().zip(&self.contour).zip(&self.dk)
            .map(|((cn, kn), dkn)| *cn * (self.basis)(r, *kn, *dkn))
            .sum()
    }

    /// Evaluate at every coordinate of an array, producing an array of the
    /// same shape.
    pub fn sample<S>(&self, r: &Arr1<S>) -> nd::Array1<C64>
    where S: nd::Data<Elem = f64>
    {
        r.mapv(|rk| self.at(rk))
    }

    /// Get a reference to the coefficient vector.
    pub fn get_coeffs(&self) -> &nd::Array1<C64> { &self.coeffs }

    /// Get a reference to the trimmed contour.
    pub fn get_contour(&self) -> &nd::Array1<C64> { &self.contour }

    /// Get a reference to the frozen quadrature steps.
    pub fn get_steps(&self) -> &nd::Array1<C64> { &self.dk }

    /// Get the number of contour terms.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.coeffs.len() }

    /// Rescale the coefficient vector so that the synthesized function has
    /// unit norm over `bounds`.
    ///
    /// Fails with [`KError::VanishingNorm`] if the starting norm is not
    /// strictly positive and finite.
    pub fn normalized(self, bounds: (f64, f64)) -> KResult<Self> {
        let N = norm(|r| self.at(r), bounds);
        KError::check_norm(N)?;
        let on = N.sqrt().recip();
        let coeffs = self.coeffs.mapv(|cn| cn * on);
        Ok(Self { coeffs, ..self })
    }
}
