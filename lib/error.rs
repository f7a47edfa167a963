//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use ndarray_npy::WriteNpzError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check_rows<S, A, T, B>(
        x: &nd::ArrayBase<S, nd::Ix1>,
        q: &nd::ArrayBase<T, nd::Ix2>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let nx = x.len();
        let nq = q.nrows();
        (nx == nq).then_some(()).ok_or(Self(nx, nq))
    }
}

/// Coarse classification of a [`TError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied value is outside its allowed range.
    InvalidArgument,
    /// A linear-algebra routine failed.
    Numerical,
    /// Writing an output file failed.
    Io,
}

/// Returned from time-dependent solver, plotting, and output functions.
#[derive(Debug, Error)]
pub enum TError {
    /// Returned when the spatial grid has fewer than three points.
    #[error("spatial grid must have at least 3 points; got {0}")]
    BadGridSize(usize),

    /// Returned when zero time points are requested.
    #[error("time grid must have at least 1 point; got {0}")]
    BadTimeSteps(usize),

    /// Returned when a non-positive or non-finite time step is encountered.
    #[error("time step must be finite and greater than 0; got {0}")]
    BadTimeStep(f64),

    /// Returned when a non-positive or non-finite domain length is
    /// encountered.
    #[error("domain length must be finite and greater than 0; got {0}")]
    BadLength(f64),

    /// Returned when `hbar` or the particle mass is non-positive or
    /// non-finite.
    #[error("{0} must be finite and greater than 0; got {1}")]
    BadConstant(&'static str, f64),

    /// Returned when a potential offset is placed outside the grid.
    #[error("potential index {index} is out of range for a grid of {nspace} points")]
    BadPotentialIndex { index: usize, nspace: usize },

    /// Returned when a non-positive or non-finite wavepacket width is
    /// encountered.
    #[error("wavepacket width must be finite and greater than 0; got {0}")]
    BadWidth(f64),

    /// Returned when a method name does not match any known scheme.
    #[error("unsupported method '{0}'; expected one of 'ftcs' or 'crank'")]
    BadMethod(String),

    /// Returned when a plot kind name does not match any known kind.
    #[error("unsupported plot kind '{0}'; expected one of 'psi' or 'prob'")]
    BadPlotKind(String),

    /// Returned when a time index lies outside the solution.
    #[error("time index {index} is out of range for {ntime} time points")]
    BadTimeIndex { index: usize, ntime: usize },

    /// Returned when a matrix that must be square is not.
    #[error("expected a square matrix; got shape {0}x{1}")]
    NotSquare(usize, usize),

    /// Returned when a configuration document cannot be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`LinalgError`].
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),

    /// [`WriteNpzError`].
    #[error("npz output error: {0}")]
    Npz(#[from] WriteNpzError),

    /// [`std::io::Error`].
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl TError {
    /// Classify `self`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Linalg(_) => ErrorKind::Numerical,
            Self::Npz(_) | Self::Io(_) => ErrorKind::Io,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// Return `true` if `self` is of kind [`ErrorKind::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub(crate) fn check_nspace(nspace: usize) -> Result<(), Self> {
        (nspace >= 3).then_some(()).ok_or(Self::BadGridSize(nspace))
    }

    pub(crate) fn check_ntime(ntime: usize) -> Result<(), Self> {
        (ntime != 0).then_some(()).ok_or(Self::BadTimeSteps(ntime))
    }

    pub(crate) fn check_tau(tau: f64) -> Result<(), Self> {
        (tau.is_finite() && tau > 0.0).then_some(()).ok_or(Self::BadTimeStep(tau))
    }

    pub(crate) fn check_length(length: f64) -> Result<(), Self> {
        (length.is_finite() && length > 0.0)
            .then_some(()).ok_or(Self::BadLength(length))
    }

    pub(crate) fn check_constant(name: &'static str, val: f64)
        -> Result<(), Self>
    {
        (val.is_finite() && val > 0.0)
            .then_some(()).ok_or(Self::BadConstant(name, val))
    }

    pub(crate) fn check_potential(potential: &[usize], nspace: usize)
        -> Result<(), Self>
    {
        match potential.iter().find(|&&index| index >= nspace) {
            Some(&index) => Err(Self::BadPotentialIndex { index, nspace }),
            None => Ok(()),
        }
    }

    pub(crate) fn check_width(sigma0: f64) -> Result<(), Self> {
        (sigma0.is_finite() && sigma0 > 0.0)
            .then_some(()).ok_or(Self::BadWidth(sigma0))
    }

    pub(crate) fn check_time_index(index: usize, ntime: usize)
        -> Result<(), Self>
    {
        (index < ntime)
            .then_some(()).ok_or(Self::BadTimeIndex { index, ntime })
    }

    pub(crate) fn check_square<S, A>(a: &nd::ArrayBase<S, nd::Ix2>)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let (n, m) = a.dim();
        (n == m).then_some(()).ok_or(Self::NotSquare(n, m))
    }
}
