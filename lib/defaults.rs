//! Default values for [`Params`][crate::timedep::Params] and
//! [`Wavepacket`][crate::wavepacket::Wavepacket] fields.

// SPATIAL GRID
// length of the (periodic) domain
pub const LENGTH: f64 = 200.0;

// INITIAL WAVEPACKET
// width of the Gaussian envelope
pub const SIGMA0: f64 = 10.0;
// center of the Gaussian envelope
pub const X0: f64 = 0.0;
// carrier wavenumber
pub const K0: f64 = 0.5;

// CONSTANTS
// natural units: ħ = m = 1
pub const HBAR: f64 = 1.0;
pub const MASS: f64 = 1.0;

pub(crate) fn length() -> f64 { LENGTH }
pub(crate) fn sigma0() -> f64 { SIGMA0 }
pub(crate) fn x0() -> f64 { X0 }
pub(crate) fn k0() -> f64 { K0 }
pub(crate) fn hbar() -> f64 { HBAR }
pub(crate) fn mass() -> f64 { MASS }
