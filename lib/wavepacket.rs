//! Gaussian wavepackets used as initial conditions.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::{
    Arr1,
    defaults,
    error::TError,
    timedep::TResult,
};

/// A normalized Gaussian envelope modulating a plane wave,
/// ```text
///            1            (x - x₀)²
/// ψ(x) = --------- exp(- ---------) exp(i k₀ x)
///        √(σ₀ √π)          2 σ₀²
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wavepacket {
    /// Width of the envelope.
    #[serde(default = "defaults::sigma0")]
    pub sigma0: f64,
    /// Center of the envelope.
    #[serde(default = "defaults::x0")]
    pub x0: f64,
    /// Carrier wavenumber.
    #[serde(default = "defaults::k0")]
    pub k0: f64,
}

impl Default for Wavepacket {
    fn default() -> Self {
        Self {
            sigma0: defaults::SIGMA0,
            x0: defaults::X0,
            k0: defaults::K0,
        }
    }
}

impl Wavepacket {
    /// Create a new wavepacket.
    pub fn new(sigma0: f64, x0: f64, k0: f64) -> Self {
        Self { sigma0, x0, k0 }
    }

    /// Evaluate the wavepacket over a series of coordinates.
    ///
    /// Fails with [`TError::BadWidth`] if `sigma0` is not a positive, finite
    /// number.
    pub fn eval<S>(&self, x: &Arr1<S>) -> TResult<nd::Array1<C64>>
    where S: nd::Data<Elem = f64>
    {
        gaussian_packet(x, self.k0, self.sigma0, self.x0)
    }
}

/// Evaluate a normalized Gaussian wavepacket with carrier wavenumber `k0`,
/// width `sigma0`, and center `x0` over a series of coordinates.
///
/// See [`Wavepacket`].
pub fn gaussian_packet<S>(x: &Arr1<S>, k0: f64, sigma0: f64, x0: f64)
    -> TResult<nd::Array1<C64>>
where S: nd::Data<Elem = f64>
{
    TError::check_width(sigma0)?;
    let norm = (sigma0 * PI.sqrt()).sqrt().recip();
    let two_s2 = 2.0 * sigma0.powi(2);
    let q: nd::Array1<C64>
        = x.mapv(|xk| {
            norm * (-(xk - x0).powi(2) / two_s2).exp() * C64::cis(k0 * xk)
        });
    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{ assert_abs_diff_eq, assert_relative_eq };
    use crate::utils::wf_norm;

    #[test]
    fn unit_norm() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-100.0, 100.0, 801);
        let dx = x[1] - x[0];
        let q = Wavepacket::default().eval(&x).unwrap();
        assert_relative_eq!(wf_norm(&q, dx), 1.0, epsilon = 1e-6);

        let q = gaussian_packet(&x, 2.0, 3.5, -20.0).unwrap();
        assert_relative_eq!(wf_norm(&q, dx), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn peak_and_phase() {
        let x = nd::array![-5.0, 0.0, 5.0];
        let q = gaussian_packet(&x, 0.5, 2.0, 0.0).unwrap();
        let peak = (2.0 * PI.sqrt()).sqrt().recip();
        assert_abs_diff_eq!(q[1].re, peak, epsilon = 1e-12);
        assert_abs_diff_eq!(q[1].im, 0.0, epsilon = 1e-12);
        // envelope is even about x0 = 0; the carrier conjugates
        assert_abs_diff_eq!(q[0].re, q[2].re, epsilon = 1e-12);
        assert_abs_diff_eq!(q[0].im, -q[2].im, epsilon = 1e-12);
    }

    #[test]
    fn bad_width() {
        let x = nd::array![0.0, 1.0];
        assert!(matches!(
            Wavepacket::new(0.0, 0.0, 1.0).eval(&x),
            Err(TError::BadWidth(_)),
        ));
        assert!(gaussian_packet(&x, 1.0, -2.0, 0.0).is_err());
    }
}
