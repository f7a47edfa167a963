//! Line plots of a wavefunction at a single time.
//!
//! Figures are rendered with [`plotly`] and saved as self-contained HTML.

use std::{ fmt, fs, path::Path, str::FromStr };
use log::debug;
use ndarray as nd;
use num_complex::Complex64 as C64;
use plotly::{
    common::{ Mode, Title },
    layout::{ Axis, Layout },
    Plot,
    Scatter,
};
use serde::{ Deserialize, Serialize };
use crate::{
    Arr1,
    Arr2,
    error::{ LengthError, TError },
    timedep::TResult,
};

/// Quantity drawn by [`plot`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    /// Real part of the wavefunction.
    #[default]
    Psi,
    /// Probability density, i.e. squared magnitude of the wavefunction.
    Prob,
}

impl PlotKind {
    fn label(self) -> &'static str {
        match self {
            Self::Psi => "Re ψ(x)",
            Self::Prob => "|ψ(x)|²",
        }
    }
}

impl FromStr for PlotKind {
    type Err = TError;

    fn from_str(s: &str) -> TResult<Self> {
        match s {
            "psi" => Ok(Self::Psi),
            "prob" => Ok(Self::Prob),
            other => Err(TError::BadPlotKind(other.to_string())),
        }
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Psi => write!(f, "psi"),
            Self::Prob => write!(f, "prob"),
        }
    }
}

/// Extract the curve drawn by [`plot`] from column `time_index` of `psi`.
///
/// Fails if `time_index` is out of range or `x` and `psi` describe different
/// numbers of grid points.
pub fn curve<S, T>(x: &Arr1<S>, psi: &Arr2<T>, time_index: usize, kind: PlotKind)
    -> TResult<nd::Array1<f64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = C64>,
{
    LengthError::check_rows(x, psi)?;
    TError::check_time_index(time_index, psi.ncols())?;
    let q = psi.column(time_index);
    let y: nd::Array1<f64>
        = match kind {
            PlotKind::Psi => q.mapv(|qk| qk.re),
            PlotKind::Prob => q.mapv(|qk| qk.norm_sqr()),
        };
    Ok(y)
}

fn figure<S, T>(x: &Arr1<S>, y: &Arr1<T>, time_index: usize, kind: PlotKind)
    -> Plot
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let trace = Scatter::new(x.to_vec(), y.to_vec())
        .name(kind.label())
        .mode(Mode::Lines);
    let mut fig = Plot::new();
    fig.add_trace(trace);
    fig.set_layout(
        Layout::new()
            .title(Title::new(&format!("{} at time index {}", kind.label(), time_index)))
            .x_axis(Axis::new().title(Title::new("x")))
            .y_axis(Axis::new().title(Title::new(kind.label())))
    );
    fig
}

/// Plot the real part or probability density of the wavefunction at a single
/// time index, optionally saving the figure to `save`.
///
/// Returns the plotted curve; see [`curve`].
pub fn plot<S, T>(
    x: &Arr1<S>,
    psi: &Arr2<T>,
    time_index: usize,
    kind: PlotKind,
    save: Option<&Path>,
) -> TResult<nd::Array1<f64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = C64>,
{
    let y = curve(x, psi, time_index, kind)?;
    let fig = figure(x, &y, time_index, kind);
    if let Some(path) = save {
        fs::write(path, fig.to_html())?;
        debug!("wrote {} plot to {}", kind, path.display());
    }
    Ok(y)
}
