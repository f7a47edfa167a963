#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for numerical integration of
//! the one-dimensional, time-dependent Schrödinger equation on a periodic grid
//! via finite-difference time stepping.
//!
//! Provides implementations for the following numerical routines:
//! - Explicit forward-time, centered-space (FTCS) stepping
//! - Implicit Crank-Nicolson stepping
//! - Spectral-radius stability diagnostics for either propagator
//!
//! along with Gaussian wavepacket initial conditions, line plots of the
//! solution at a chosen time, and `.npz` output.
//!
//! See [`docs`] for theoretical background.

pub mod defaults;
pub mod error;
pub mod operator;
pub mod plot;
pub mod timedep;
pub mod utils;
pub mod wavepacket;

pub mod docs;

pub use operator::Stability;
pub use plot::{ plot, PlotKind };
pub use timedep::{ solve, Method, Params, Solution };
pub use wavepacket::Wavepacket;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
