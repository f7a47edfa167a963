//! Construction of the discretized Hamiltonian and the fixed propagation
//! operators for finite-difference time stepping, along with the
//! spectral-radius stability diagnostic.
//!
//! See [`docs`][crate::docs] for the discretization.

use ndarray as nd;
use ndarray_linalg::{ EigVals, InverseInto };
use num_complex::Complex64 as C64;
use num_traits::Zero;
use crate::{
    Arr2,
    error::TError,
    timedep::TResult,
};

/// Diagonal offset applied at each listed potential index.
pub const POTENTIAL_OFFSET: f64 = 1.0;

/// Propagation operators with spectral radius no greater than `1 + STABILITY_TOL`
/// are classified as [`Stability::Stable`].
pub const STABILITY_TOL: f64 = 1e-12;

/// Build an `n`×`n` tridiagonal matrix with `b` on the first sub-diagonal, `d`
/// on the main diagonal, and `a` on the first super-diagonal.
///
/// *Panics if `n` is 0*.
pub fn tridiag<A>(n: usize, b: A, d: A, a: A) -> nd::Array2<A>
where A: Clone + Zero
{
    let mut T: nd::Array2<A> = nd::Array2::from_diag_elem(n, d);
    T.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().fill(b);
    T.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().fill(a);
    T
}

/// Return the coefficient multiplying the `(1, -2, 1)` stencil of the
/// discretized kinetic energy operator for grid spacing `h`.
pub fn kinetic_coeff(h: f64, hbar: f64, mass: f64) -> f64 {
    -hbar.powi(2) / (2.0 * mass * h.powi(2))
}

/// Build the periodic Hamiltonian on `nspace` grid points with spacing `h`.
///
/// The kinetic part is the three-point stencil scaled by [`kinetic_coeff`],
/// with the corner elements `(0, nspace - 1)` and `(nspace - 1, 0)` coupling
/// the ends of the grid. [`POTENTIAL_OFFSET`] is added to the diagonal once
/// for every appearance of an index in `potential`.
///
/// *Panics if `nspace` is less than 2 or any element of `potential` is out of
/// bounds*.
pub fn hamiltonian(
    nspace: usize,
    h: f64,
    hbar: f64,
    mass: f64,
    potential: &[usize],
) -> nd::Array2<C64>
{
    let coeff = kinetic_coeff(h, hbar, mass);
    let mut H: nd::Array2<C64>
        = tridiag(
            nspace,
            C64::from(coeff),
            C64::from(-2.0 * coeff),
            C64::from(coeff),
        );
    H[[0, nspace - 1]] = C64::from(coeff);
    H[[nspace - 1, 0]] = C64::from(coeff);
    for &i in potential {
        H[[i, i]] += POTENTIAL_OFFSET;
    }
    H
}

// compute `I + z H`
fn eye_plus<S>(z: C64, H: &Arr2<S>) -> nd::Array2<C64>
where S: nd::Data<Elem = C64>
{
    let mut A: nd::Array2<C64> = H.mapv(|Hij| z * Hij);
    A.diag_mut().iter_mut().for_each(|Aii| { *Aii += 1.0; });
    A
}

/// Build the explicit forward-time, centered-space propagator
/// ```text
/// A = I - i τ H / ħ
/// ```
pub fn ftcs_operator<S>(H: &Arr2<S>, tau: f64, hbar: f64) -> nd::Array2<C64>
where S: nd::Data<Elem = C64>
{
    eye_plus(-C64::i() * tau / hbar, H)
}

/// Build the implicit Crank-Nicolson propagator
/// ```text
/// A = (I + i τ H / 2ħ)⁻¹ (I - i τ H / 2ħ)
/// ```
pub fn crank_nicolson_operator<S>(H: &Arr2<S>, tau: f64, hbar: f64)
    -> TResult<nd::Array2<C64>>
where S: nd::Data<Elem = C64>
{
    TError::check_square(H)?;
    let z = C64::i() * tau / (2.0 * hbar);
    let fwd_inv: nd::Array2<C64> = eye_plus(z, H).inv_into()?;
    let bwd: nd::Array2<C64> = eye_plus(-z, H);
    Ok(fwd_inv.dot(&bwd))
}

/// Compute the largest magnitude of the eigenvalues of a square matrix.
pub fn spectral_radius<S>(A: &Arr2<S>) -> TResult<f64>
where S: nd::Data<Elem = C64>
{
    TError::check_square(A)?;
    let evals: nd::Array1<C64> = A.eigvals()?;
    Ok(evals.iter().map(|ev| ev.norm()).fold(0.0, f64::max))
}

/// Advisory classification of a propagation operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stability {
    /// Spectral radius ≤ 1.
    Stable,
    /// Spectral radius > 1.
    Unstable,
}

impl Stability {
    /// Classify a spectral radius, allowing for [`STABILITY_TOL`] of round-off.
    pub fn from_radius(radius: f64) -> Self {
        if radius <= 1.0 + STABILITY_TOL { Self::Stable } else { Self::Unstable }
    }

    pub fn is_stable(self) -> bool { self == Self::Stable }
}

impl std::fmt::Display for Stability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Unstable => write!(f, "unstable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{ assert_abs_diff_eq, assert_relative_eq };

    #[test]
    fn tridiag_structure() {
        for n in 1..=8 {
            let T: nd::Array2<f64> = tridiag(n, 3.0, -5.0, 7.0);
            assert_eq!(T.dim(), (n, n));
            let nonzero = T.iter().filter(|t| **t != 0.0).count();
            assert_eq!(nonzero, 3 * n - 2);
            for ((i, j), &t) in T.indexed_iter() {
                let expected
                    = if i == j { -5.0 }
                    else if i == j + 1 { 3.0 }
                    else if j == i + 1 { 7.0 }
                    else { 0.0 };
                assert_eq!(t, expected);
            }
        }
    }

    #[test]
    fn tridiag_complex() {
        let T = tridiag(3, C64::i(), C64::from(2.0), -C64::i());
        assert_eq!(T[[1, 0]], C64::i());
        assert_eq!(T[[0, 1]], -C64::i());
        assert_eq!(T[[2, 0]], C64::zero());
    }

    #[test]
    fn hamiltonian_periodic() {
        let n = 10;
        let h = 0.5;
        let H = hamiltonian(n, h, 1.0, 1.0, &[]);
        let c = kinetic_coeff(h, 1.0, 1.0);
        assert_relative_eq!(c, -2.0);
        assert_eq!(H[[0, n - 1]], C64::from(c));
        assert_eq!(H[[n - 1, 0]], C64::from(c));
        // Hermitian
        for ((i, j), &Hij) in H.indexed_iter() {
            assert_eq!(Hij, H[[j, i]].conj());
        }
        // a periodic Laplacian annihilates constants
        for row in H.rows() {
            assert_abs_diff_eq!(row.sum().norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn hamiltonian_potential() {
        let H0 = hamiltonian(6, 1.0, 1.0, 1.0, &[]);
        let H = hamiltonian(6, 1.0, 1.0, 1.0, &[1, 4, 4]);
        let diff = &H - &H0;
        assert_eq!(diff[[1, 1]], C64::from(1.0));
        assert_eq!(diff[[4, 4]], C64::from(2.0));
        assert_eq!(diff.iter().filter(|d| !d.is_zero()).count(), 2);
    }

    #[test]
    fn radius_of_diagonal() {
        let mut A: nd::Array2<C64> = nd::Array2::zeros((3, 3));
        A[[0, 0]] = C64::new(0.5, 0.0);
        A[[1, 1]] = C64::new(0.0, -2.0);
        A[[2, 2]] = C64::new(1.0, 1.0);
        assert_relative_eq!(spectral_radius(&A).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn radius_not_square() {
        let A: nd::Array2<C64> = nd::Array2::zeros((2, 3));
        assert!(matches!(spectral_radius(&A), Err(TError::NotSquare(2, 3))));
    }

    #[test]
    fn ftcs_radius_exceeds_one() {
        // for even n the periodic stencil reaches its extreme eigenvalue 4|c|
        let n = 16;
        let h = 1.0;
        let tau = 0.3;
        let H = hamiltonian(n, h, 1.0, 1.0, &[]);
        let A = ftcs_operator(&H, tau, 1.0);
        let lmax = 4.0 * kinetic_coeff(h, 1.0, 1.0).abs();
        let expected = (1.0 + (tau * lmax).powi(2)).sqrt();
        let radius = spectral_radius(&A).unwrap();
        assert_relative_eq!(radius, expected, epsilon = 1e-10);
        assert_eq!(Stability::from_radius(radius), Stability::Unstable);
    }

    #[test]
    fn crank_nicolson_unitary() {
        let n = 12;
        let H = hamiltonian(n, 0.8, 1.0, 1.0, &[2, 3]);
        let A = crank_nicolson_operator(&H, 5.0, 1.0).unwrap();
        let AhA = A.t().mapv(|a| a.conj()).dot(&A);
        let eye: nd::Array2<C64> = nd::Array2::eye(n);
        for (x, y) in AhA.iter().zip(&eye) {
            assert_abs_diff_eq!((x - y).norm(), 0.0, epsilon = 1e-10);
        }
        let radius = spectral_radius(&A).unwrap();
        assert_relative_eq!(radius, 1.0, epsilon = 1e-10);
        assert!(Stability::from_radius(radius).is_stable());
    }

    #[test]
    fn stability_display() {
        assert_eq!(Stability::from_radius(1.0).to_string(), "stable");
        assert_eq!(Stability::from_radius(1.01).to_string(), "unstable");
    }
}
