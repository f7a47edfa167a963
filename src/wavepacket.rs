use std::{ fs, path::PathBuf, str::FromStr };
use anyhow::Context;
use clap::Parser;
use log::info;
use tdse1d::{ plot, solve, Method, Params, PlotKind };

// evolve a Gaussian wavepacket on a periodic grid and plot it at a chosen time

const NSPACE: usize = 80;
const NTIME: usize = 200;
const TAU: f64 = 1.0;
const METHOD: Method = Method::CrankNicolson;

/// Integrate the 1D time-dependent Schrödinger equation for a Gaussian
/// wavepacket, save the solution arrays, and plot one time slice.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML file of solver parameters; options below take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of spatial grid points.
    #[arg(long)]
    nspace: Option<usize>,

    /// Number of time points, including the initial one.
    #[arg(long)]
    ntime: Option<usize>,

    /// Time step.
    #[arg(long)]
    tau: Option<f64>,

    /// Time-stepping scheme: 'ftcs' or 'crank'.
    #[arg(short, long, value_parser = Method::from_str)]
    method: Option<Method>,

    /// Length of the periodic domain.
    #[arg(long)]
    length: Option<f64>,

    /// Comma-separated grid indices receiving a unit potential offset.
    #[arg(long, value_delimiter = ',')]
    potential: Vec<usize>,

    /// Wavepacket width.
    #[arg(long)]
    sigma0: Option<f64>,

    /// Wavepacket center.
    #[arg(long, allow_hyphen_values = true)]
    x0: Option<f64>,

    /// Wavepacket carrier wavenumber.
    #[arg(long, allow_hyphen_values = true)]
    k0: Option<f64>,

    /// Time index to plot.
    #[arg(short, long, default_value_t = 0)]
    time_index: usize,

    /// Quantity to plot: 'psi' or 'prob'.
    #[arg(short, long, default_value = "psi", value_parser = PlotKind::from_str)]
    kind: PlotKind,

    /// Don't write the figure.
    #[arg(long)]
    no_save: bool,

    /// Output directory.
    #[arg(short, long, default_value = "output")]
    outdir: PathBuf,

    /// Base name for output files.
    #[arg(long, default_value = "wavepacket")]
    name: String,
}

impl Cli {
    fn params(&self) -> anyhow::Result<Params> {
        let mut params
            = match &self.config {
                Some(path) => Params::load(path)
                    .with_context(|| {
                        format!("failed to load config from {}", path.display())
                    })?,
                None => Params::new(NSPACE, NTIME, TAU, METHOD),
            };
        if let Some(nspace) = self.nspace { params.nspace = nspace; }
        if let Some(ntime) = self.ntime { params.ntime = ntime; }
        if let Some(tau) = self.tau { params.tau = tau; }
        if let Some(method) = self.method { params.method = method; }
        if let Some(length) = self.length { params.length = length; }
        if !self.potential.is_empty() {
            params.potential = self.potential.clone();
        }
        if let Some(sigma0) = self.sigma0 { params.wavepacket.sigma0 = sigma0; }
        if let Some(x0) = self.x0 { params.wavepacket.x0 = x0; }
        if let Some(k0) = self.k0 { params.wavepacket.k0 = k0; }
        params.validate()?;
        Ok(params)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let params = cli.params()?;

    let sol = solve(&params)?;
    info!(
        "{} steps of {}: spectral radius {:.6} ({}), max probability drift {:.3e}",
        params.ntime - 1, params.method, sol.radius, sol.stability,
        sol.max_prob_drift(),
    );

    fs::create_dir_all(&cli.outdir)
        .with_context(|| format!("failed to create {}", cli.outdir.display()))?;
    let npz = cli.outdir.join(format!("{}.npz", cli.name));
    sol.write_npz(&npz)?;
    info!("wrote {}", npz.display());

    let fig = (!cli.no_save).then(|| cli.outdir.join(format!("{}.html", cli.name)));
    plot(&sol.x, &sol.psi, cli.time_index, cli.kind, fig.as_deref())?;
    if let Some(fig) = fig { info!("wrote {}", fig.display()); }
    Ok(())
}
