//! Provides functions to compute solutions to the 1+1-dimensional
//! (time-dependent) Schrödinger equation (TDSE) on a periodic grid via
//! finite-difference time stepping.
//!
//! In all 2D wavefunction arrays, the *second* (column) axis indexes time:
//! column `j` holds the spatial solution at time `t[j]`.

use std::{ fmt, fs, path::Path, str::FromStr };
use log::{ debug, info, warn };
use ndarray as nd;
use ndarray_npy::NpzWriter;
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::{
    Arr1,
    Arr2,
    defaults,
    error::TError,
    operator::{
        crank_nicolson_operator,
        ftcs_operator,
        hamiltonian,
        kinetic_coeff,
        spectral_radius,
        Stability,
    },
    plot::{ self, PlotKind },
    utils::{ max_rel_drift, prob_sum },
    wavepacket::Wavepacket,
};

pub type TResult<T> = Result<T, TError>;

/// A finite-difference time-stepping scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// Explicit forward-time, centered-space.
    #[serde(rename = "ftcs")]
    Ftcs,
    /// Implicit Crank-Nicolson.
    #[serde(rename = "crank", alias = "crank-nicolson")]
    CrankNicolson,
}

impl FromStr for Method {
    type Err = TError;

    fn from_str(s: &str) -> TResult<Self> {
        match s {
            "ftcs" => Ok(Self::Ftcs),
            "crank" | "crank-nicolson" => Ok(Self::CrankNicolson),
            other => Err(TError::BadMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ftcs => write!(f, "ftcs"),
            Self::CrankNicolson => write!(f, "crank"),
        }
    }
}

/// Parameters for a single call to [`solve`].
///
/// Fields other than the grid sizes, time step, and method take their values
/// from [`defaults`] when omitted from a configuration document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Number of spatial grid points.
    pub nspace: usize,
    /// Number of time points, including the initial one.
    pub ntime: usize,
    /// Time step.
    pub tau: f64,
    /// Time-stepping scheme.
    pub method: Method,
    /// Length of the periodic domain, centered on 0.
    #[serde(default = "defaults::length")]
    pub length: f64,
    /// Grid indices receiving a diagonal potential offset.
    #[serde(default)]
    pub potential: Vec<usize>,
    /// Initial condition.
    #[serde(default)]
    pub wavepacket: Wavepacket,
    #[serde(default = "defaults::hbar")]
    pub hbar: f64,
    #[serde(default = "defaults::mass")]
    pub mass: f64,
}

impl Params {
    /// Create a new set of parameters with all other fields at their defaults.
    pub fn new(nspace: usize, ntime: usize, tau: f64, method: Method) -> Self {
        Self {
            nspace,
            ntime,
            tau,
            method,
            length: defaults::LENGTH,
            potential: Vec::new(),
            wavepacket: Wavepacket::default(),
            hbar: defaults::HBAR,
            mass: defaults::MASS,
        }
    }

    /// Set the domain length.
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Set the grid indices receiving a potential offset.
    pub fn with_potential<I>(mut self, potential: I) -> Self
    where I: IntoIterator<Item = usize>
    {
        self.potential = potential.into_iter().collect();
        self
    }

    /// Set the initial wavepacket.
    pub fn with_wavepacket(mut self, wavepacket: Wavepacket) -> Self {
        self.wavepacket = wavepacket;
        self
    }

    /// Set `hbar` and the particle mass.
    pub fn with_constants(mut self, hbar: f64, mass: f64) -> Self {
        self.hbar = hbar;
        self.mass = mass;
        self
    }

    /// Parse from a TOML document and validate.
    pub fn from_toml(s: &str) -> TResult<Self> {
        let params: Self = toml::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    /// Read and parse a TOML file, then validate.
    pub fn load<P>(path: P) -> TResult<Self>
    where P: AsRef<Path>
    {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Check that all fields hold usable values.
    pub fn validate(&self) -> TResult<()> {
        TError::check_nspace(self.nspace)?;
        TError::check_ntime(self.ntime)?;
        TError::check_tau(self.tau)?;
        TError::check_length(self.length)?;
        TError::check_constant("hbar", self.hbar)?;
        TError::check_constant("mass", self.mass)?;
        TError::check_potential(&self.potential, self.nspace)?;
        TError::check_width(self.wavepacket.sigma0)?;
        Ok(())
    }

    /// Spatial grid spacing.
    pub fn spacing(&self) -> f64 {
        self.length / (self.nspace as f64 - 1.0)
    }

    /// Spatial coordinates, evenly spaced over `[-length / 2, length / 2]`.
    pub fn x_grid(&self) -> nd::Array1<f64> {
        nd::Array1::linspace(-self.length / 2.0, self.length / 2.0, self.nspace)
    }

    /// Time coordinates `t[i] = i * tau`.
    pub fn t_grid(&self) -> nd::Array1<f64> {
        (0..self.ntime).map(|i| i as f64 * self.tau).collect()
    }
}

/// Output of [`solve`].
#[derive(Clone, Debug)]
pub struct Solution {
    /// Scheme used to produce the solution.
    pub method: Method,
    /// Spatial coordinates.
    pub x: nd::Array1<f64>,
    /// Time coordinates.
    pub t: nd::Array1<f64>,
    /// Wavefunction, with shape `(x.len(), t.len())`.
    pub psi: nd::Array2<C64>,
    /// Total probability (sum of squared magnitudes) at each time.
    pub prob: nd::Array1<f64>,
    /// Spectral radius of the propagation operator.
    pub radius: f64,
    /// Classification of `radius`.
    pub stability: Stability,
}

impl Solution {
    /// Number of time points.
    pub fn ntime(&self) -> usize { self.t.len() }

    /// Get the wavefunction at a particular time index.
    pub fn at(&self, time_index: usize) -> TResult<nd::ArrayView1<'_, C64>> {
        TError::check_time_index(time_index, self.psi.ncols())?;
        Ok(self.psi.column(time_index))
    }

    /// Largest relative deviation of the total probability from its initial
    /// value.
    pub fn max_prob_drift(&self) -> f64 { max_rel_drift(&self.prob) }

    /// Compute the curve drawn by [`plot::plot`] at a particular time index.
    pub fn curve(&self, time_index: usize, kind: PlotKind)
        -> TResult<nd::Array1<f64>>
    {
        plot::curve(&self.x, &self.psi, time_index, kind)
    }

    /// Write all arrays to a `.npz` archive.
    ///
    /// The archive holds `x`, `t`, `psi`, `prob`, and the single-element array
    /// `radius`.
    pub fn write_npz<P>(&self, path: P) -> TResult<()>
    where P: AsRef<Path>
    {
        let mut npz = NpzWriter::new(fs::File::create(path)?);
        npz.add_array("x", &self.x)?;
        npz.add_array("t", &self.t)?;
        npz.add_array("psi", &self.psi)?;
        npz.add_array("prob", &self.prob)?;
        npz.add_array("radius", &nd::array![self.radius])?;
        npz.finish()?;
        Ok(())
    }
}

/// Build the propagation operator for a given scheme.
pub fn propagator<S>(method: Method, H: &Arr2<S>, tau: f64, hbar: f64)
    -> TResult<nd::Array2<C64>>
where S: nd::Data<Elem = C64>
{
    match method {
        Method::Ftcs => Ok(ftcs_operator(H, tau, hbar)),
        Method::CrankNicolson => crank_nicolson_operator(H, tau, hbar),
    }
}

/// Repeatedly apply a fixed propagation operator to an initial state, returning
/// `ntime` states with the initial state in column 0.
pub fn propagate<S, T>(A: &Arr2<S>, q0: &Arr1<T>, ntime: usize)
    -> nd::Array2<C64>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
{
    let mut q: nd::Array2<C64> = nd::Array2::zeros((q0.len(), ntime));
    let mut q_temp: nd::Array1<C64> = q0.to_owned();
    let mut iter = q.axis_iter_mut(nd::Axis(1));
    if let Some(mut qk) = iter.next() { qk.assign(q0); }
    for mut qkp1 in iter {
        q_temp = A.dot(&q_temp);
        qkp1.assign(&q_temp);
    }
    q
}

/// Integrate the TDSE for a Gaussian initial wavepacket.
///
/// The Hamiltonian is assembled once by [`hamiltonian`], the propagation
/// operator for the requested method once by [`propagator`], and the latter's
/// spectral radius is reported (but not acted on) as a stability diagnostic.
/// The total probability is recorded for each time point and is not
/// renormalized.
///
/// All parameters are validated before any work is done; see
/// [`Params::validate`].
pub fn solve(params: &Params) -> TResult<Solution> {
    params.validate()?;
    let h = params.spacing();
    debug!(
        "{} points, h = {:.6e}, kinetic coefficient = {:.6e}",
        params.nspace, h, kinetic_coeff(h, params.hbar, params.mass),
    );

    let H = hamiltonian(
        params.nspace, h, params.hbar, params.mass, &params.potential);
    let A = propagator(params.method, &H, params.tau, params.hbar)?;
    let radius = spectral_radius(&A)?;
    let stability = Stability::from_radius(radius);
    info!("{} propagator: spectral radius = {:.12} ({})",
        params.method, radius, stability);
    if !stability.is_stable() {
        warn!("{} propagator is unstable for tau = {:e}; total probability will grow",
            params.method, params.tau);
    }

    let x = params.x_grid();
    let t = params.t_grid();
    let q0 = params.wavepacket.eval(&x)?;
    let psi = propagate(&A, &q0, params.ntime);
    let prob: nd::Array1<f64>
        = psi.axis_iter(nd::Axis(1))
        .map(|qk| prob_sum(&qk))
        .collect();
    debug!("max relative probability drift = {:.3e}", max_rel_drift(&prob));

    Ok(Solution { method: params.method, x, t, psi, prob, radius, stability })
}
