use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use kspace::{
    contour,
    hamiltonian::{ contour_hamiltonian, Symmetry },
    norm,
    solve,
    wavefunction::ContourWavefunction,
};

// solve for the bound state and the lowest Gamow resonance of the delta-shell
// potential V(r) = -g δ(r - a) in the s-wave momentum representation
// (ħ = 2m = 1; energies are k²)

fn main() {
    const A: f64 = 1.0; // shell radius
    const G_BOUND: f64 = 2.0; // coupling for the bound-state run
    const G_RES: f64 = 10.0; // coupling with a narrow first resonance

    // momentum-space matrix elements: kinetic diagonal plus the separable
    // shell kernel folded with the column step
    let elem = |g: f64| {
        move |k: C64, kp: C64, dk: C64| {
            let kinetic
                = if k == kp { k * k } else { C64::new(0.0, 0.0) };
            kinetic - dk * (2.0 * g / PI) * (k * A).sin() * (kp * A).sin()
        }
    };

    // bound state: uniform steps on the real axis keep the matrix Hermitian
    let kappa = bound_kappa(G_BOUND, A);
    let contour_b = contour::linear(40.0, 400);
    let h = contour_hamiltonian(&contour_b, elem(G_BOUND));
    let (evals, evecs) = solve::energies(&h, Symmetry::Hermitian).unwrap();
    println!("bound-state energy");
    println!("expected: {:.6}", -kappa * kappa);
    println!("computed: {:.6}", evals[0].re);

    // synthesize the radial wavefunction from the lowest eigenvector
    let basis = |r: f64, k: C64, dk: C64| {
        (k * r).sin() * dk * (2.0 / PI).sqrt()
    };
    let u = ContourWavefunction::new(
        evecs.column(0).to_owned(), basis, &contour_b).unwrap();
    let u = u.normalized((0.0, 25.0)).unwrap();
    println!("norm: {:.6}", norm::norm(|r| u.at(r), (0.0, 25.0)));
    println!("tail ratio u(2.5)/u(2.0)");
    println!("expected: {:.6}", (-0.5 * kappa).exp());
    println!("computed: {:.6}", (u.at(2.5) / u.at(2.0)).re);
    let r: nd::Array1<f64> = nd::Array1::linspace(0.0, 5.0, 11);
    for (rk, uk) in r.iter().zip(u.sample(&r).iter()) {
        println!("  |u({:.1})|² = {:.6}", rk, norm::absq(*uk));
    }

    // resonance: a triangle contour dipping below the pole exposes the Gamow
    // state as an isolated complex eigenvalue
    let k_star = resonance_k(G_RES, A, C64::new(3.4, -0.1));
    let e_star = k_star * k_star;
    let contour_r = contour::triangle(3.4, 0.5, 100.0, 140);
    let h = contour_hamiltonian(&contour_r, elem(G_RES));
    let (evals, _) = solve::energies(&h, Symmetry::General).unwrap();
    let nearest = evals.iter()
        .min_by(|a, b| {
            (**a - e_star).norm().total_cmp(&(**b - e_star).norm())
        })
        .copied()
        .unwrap();
    println!("resonance energy");
    println!("expected: {:.6}{:+.6}i", e_star.re, e_star.im);
    println!("computed: {:.6}{:+.6}i", nearest.re, nearest.im);
}

// root of 2κ/g = 1 - exp(-2κa) by bisection; requires g a > 1
fn bound_kappa(g: f64, a: f64) -> f64 {
    let f = |kappa: f64| {
        2.0 * kappa / g - 1.0 + (-2.0 * kappa * a).exp()
    };
    let mut lo: f64 = 1e-3;
    let mut hi: f64 = g;
    for _ in 0..200 {
        let mid = (lo + hi) / 2.0;
        if f(mid) > 0.0 { hi = mid; } else { lo = mid; }
    }
    (lo + hi) / 2.0
}

// pole of exp(2ika) = 1 + 2ik/g by Newton's method in the complex k-plane
fn resonance_k(g: f64, a: f64, k0: C64) -> C64 {
    let i = C64::i();
    let mut k = k0;
    for _ in 0..100 {
        let e = (i * k * (2.0 * a)).exp();
        let f = e - 1.0 - i * k * (2.0 / g);
        let df = i * e * (2.0 * a) - i * (2.0 / g);
        k -= f / df;
    }
    k
}
