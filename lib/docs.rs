//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Momentum-space discretization](#momentum-space-discretization)
//! - [Complex contours and resonances](#complex-contours-and-resonances)
//! - [Diagonalization](#diagonalization)
//! - [Reconstruction and normalization](#reconstruction-and-normalization)
//!
//! # Background
//! For a radially symmetric potential the three-dimensional time-independent
//! Schrödinger equation separates, and the reduced radial wavefunction
//! *u*(*r*) ≡ *r* *R*(*r*) in a given partial wave obeys a one-dimensional
//! equation
//! ```text
//!    ∂²u                l (l + 1)
//! - ----- + V(r) u(r) + --------- u(r) = E u(r)
//!    ∂r²                    r²
//! ```
//! (in the units described below). Instead of integrating this equation on a
//! spatial grid, one can expand *u* over a family of free-momentum states
//! *u*<sub>*k*</sub>(*r*), turning the differential equation into an
//! integral eigenvalue problem over the momentum amplitude *φ*(*k*),
//! ```text
//!           ┌ ∞
//! k² φ(k) + │   dk' V(k, k') φ(k') = E φ(k)
//!           └ 0
//! ```
//! where *V*(*k*, *k'*) is the potential kernel in the momentum
//! representation. Bound states appear as discrete solutions with *E* < 0;
//! the *E* > 0 continuum carries the scattering states. The integral form is
//! the natural starting point here because the integration path over *k* need
//! not be the real half-axis; see below.
//!
//! # Units
//! All of the above takes *ħ* = 2 *m* = 1, which removes the coefficient on
//! the kinetic term and ties energy to momentum as *E* = *k*². Callers who
//! want conventional units rescale their potential kernels and resulting
//! energies accordingly; nothing in this crate carries a dimensionful
//! constant.
//!
//! # Momentum-space discretization
//! Fixing a sequence of momentum nodes *k*<sub>*n*</sub> with displacements
//! ```text
//! Δk[n] = k[n] - k[n - 1],    Δk[0] = k[0] - 0
//! ```
//! the integral collapses to a quadrature sum and the eigenvalue problem
//! becomes a dense matrix problem
//! ```text
//! H[n, n'] = k[n]² δ[n, n'] + V(k[n], k[n']) w(k[n']) Δk[n']
//! ```
//! with *w* folding whatever measure factors the chosen momentum basis
//! carries. Note that the quadrature weight attached to an entry is always
//! the one belonging to its *column* node: summing a row of the matrix
//! against an amplitude vector is then exactly the quadrature rule applied to
//! the integral above. The builders in [`hamiltonian`][crate::hamiltonian]
//! never form this expression themselves (the element function supplies it),
//! but they own the node/step bookkeeping, including dropping a node at the
//! origin, where the integrand vanishes and the step is degenerate.
//!
//! # Complex contours and resonances
//! A resonance (Gamow[^1]) state is a solution with purely outgoing
//! asymptotics, *u*(*r*) → *e*<sup>+*ikr*</sup>, at a complex momentum *k* =
//! *k*ᵣ - *i* *k*ᵢ in the fourth quadrant. Its energy
//! ```text
//! E = k² = (k_r² - k_i²) - 2 i k_r k_i
//! ```
//! has a negative imaginary part, encoding the state's decay width, and its
//! wavefunction grows exponentially at large *r*, so it is invisible to any
//! expansion over real momenta. Berggren[^2] showed that deforming the
//! momentum integration path off the real axis produces a completeness
//! relation
//! ```text
//!                                 ┌
//! Σ |u_b⟩⟨u_b~| + Σ |u_r⟩⟨u_r~| + │   dk |u_k⟩⟨u_k~| = 1
//!  b               r              └ L+
//! ```
//! in which the second sum runs over exactly those resonance poles exposed
//! between the real axis and the deformed path *L*⁺. Discretizing *L*⁺ with
//! the scheme above therefore yields a finite matrix whose spectrum contains
//! the bound states (real eigenvalues), the exposed resonances (genuinely
//! complex eigenvalues), and a rotated discretized continuum; this is the
//! standard numerical route to Gamow states in the momentum
//! representation[^3].
//!
//! The conventional path shape is the triangle provided by
//! [`contour::triangle`][crate::contour::triangle]:
//! ```text
//! im k
//!   |        2 peak_re         k_max
//! --+------------x---------------x----> re k
//!   |\          /
//!   | \        /
//!   |  \      /
//!   |   \    /
//!   |    \  /
//!   |     \/
//!   |      x  (peak_re, -peak_im)
//! ```
//! The dip encloses poles with |Im *k*| < `peak_im` near `peak_re`; past
//! 2 `peak_re` the path returns to the real axis, and `k_max` truncates the
//! remaining continuum integration.
//!
//! # Diagonalization
//! On the real axis with a symmetric kernel the matrix is Hermitian and
//! [`energies`][crate::solve::energies] uses the LAPACK Hermitian
//! decomposition, which guarantees a real, ascending spectrum and orthonormal
//! eigenvectors. On a contour the matrix is complex symmetric but *not*
//! Hermitian (the natural pairing between left and right eigenvectors is the
//! c-product, which omits conjugation), so the general complex decomposition
//! is used instead. Its raw output carries no ordering guarantee and real
//! eigenvalues come dressed with rounding-level imaginary parts, so the
//! general path sorts eigenpairs lexicographically by (re, im) and snaps
//! eigenvalues with negligible imaginary part to exactly real. The snap
//! threshold is relative and far below any physical width, so genuine
//! resonance eigenvalues pass through untouched.
//!
//! Both paths accept any dense complex matrix of the right shape; a matrix
//! assembled outside this crate (for instance by an accelerated element
//! pipeline) diagonalizes exactly like one from the builders.
//!
//! # Reconstruction and normalization
//! An eigenvector *c* of the discretized problem is a set of quadrature
//! samples of *φ*(*k*) along the contour. The spatial wavefunction follows
//! from the same quadrature rule applied to the inverse transform,
//! ```text
//! u(r) = Σ c[n] φ_basis(r, k[n], Δk[n])
//!        n
//! ```
//! which [`ContourWavefunction`][crate::wavefunction::ContourWavefunction]
//! evaluates term by term; the basis function owns the convention for how
//! Δk enters each term. For bound states the result decays and its norm over
//! a finite interval converges to the usual L² value, computed by
//! [`norm`][crate::norm::norm] with adaptive Simpson quadrature. Resonance
//! wavefunctions oscillate with exponentially growing envelope, and their
//! normalization integrals only converge under a regularization scheme;
//! [`norm_weighted`][crate::norm::norm_weighted] provides the hook for the
//! weight functions such schemes introduce.
//!
//! [^1]: G. Gamow, "Zur Quantentheorie des Atomkernes." Zeitschrift für
//! Physik **51** 204-212 (1928).
//!
//! [^2]: T. Berggren, "On the use of resonant states in eigenfunction
//! expansions of scattering and reaction amplitudes." Nuclear Physics A
//! **109** 265-287 (1968).
//!
//! [^3]: N. Michel, W. Nazarewicz, M. Płoszajczak, and T. Vertse, "Shell
//! model in the complex energy plane." Journal of Physics G: Nuclear and
//! Particle Physics **36** 013101 (2009).
