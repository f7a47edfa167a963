//! Miscellaneous tools.

use std::ops::Add;
use ndarray::{ self as nd, Ix1 };
use ndarray_linalg::Scalar;
use num_traits::{ One, Zero };

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the norm of a wavefunction, i.e. the trapezoidal integral of its
/// squared magnitude.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real) -> A::Real
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = q.len();
    let two = <A as Scalar>::Real::one() + <A as Scalar>::Real::one();
    (dx / two) * (
        q[0].square()
        + two * q.iter().skip(1).take(n - 2).map(|qk| qk.square())
            .fold(<A as Scalar>::Real::zero(), <A as Scalar>::Real::add)
        + q[n - 1].square()
    )
}

/// Sum the squared magnitudes of a wavefunction's elements.
///
/// This is the total probability tracked over the course of a simulation; it
/// carries no factor of the grid spacing.
pub fn prob_sum<S, A>(q: &nd::ArrayBase<S, Ix1>) -> A::Real
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    q.iter().map(|qk| qk.square())
        .fold(<A as Scalar>::Real::zero(), <A as Scalar>::Real::add)
}

/// Return the largest relative deviation of any element of `p` from `p[0]`.
///
/// Returns `0` for arrays of length less than 2.
pub fn max_rel_drift<S>(p: &nd::ArrayBase<S, Ix1>) -> f64
where S: nd::Data<Elem = f64>
{
    let Some(&p0) = p.get(0) else { return 0.0; };
    p.iter()
        .map(|pk| ((pk - p0) / p0).abs())
        .fold(0.0, f64::max)
}
