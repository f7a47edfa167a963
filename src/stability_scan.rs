#![allow(non_snake_case)]

use std::{ fs, path::PathBuf };
use log::info;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use tdse1d::{
    defaults,
    operator::{ hamiltonian, spectral_radius },
    timedep::{ propagator, Method },
};

// scan the spectral radius of both propagators over the time step

const NSPACE: usize = 80;
const NTAU: usize = 41;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")).init();

    let h = defaults::LENGTH / (NSPACE as f64 - 1.0);
    let H = hamiltonian(NSPACE, h, defaults::HBAR, defaults::MASS, &[]);
    let tau: nd::Array1<f64> = nd::Array1::logspace(10.0, -3.0, 1.0, NTAU);

    let mut radius_ftcs: nd::Array1<f64> = nd::Array1::zeros(NTAU);
    let mut radius_crank: nd::Array1<f64> = nd::Array1::zeros(NTAU);
    let iter = tau.iter().zip(radius_ftcs.iter_mut().zip(radius_crank.iter_mut()));
    for (&tauk, (rfk, rck)) in iter {
        let A = propagator(Method::Ftcs, &H, tauk, defaults::HBAR)?;
        *rfk = spectral_radius(&A)?;
        let A = propagator(Method::CrankNicolson, &H, tauk, defaults::HBAR)?;
        *rck = spectral_radius(&A)?;
        info!("tau = {:.3e}: ftcs {:.12} crank {:.12}", tauk, rfk, rck);
    }

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;
    let mut npz = NpzWriter::new(fs::File::create(outdir.join("stability_scan.npz"))?);
    npz.add_array("tau", &tau)?;
    npz.add_array("radius_ftcs", &radius_ftcs)?;
    npz.add_array("radius_crank", &radius_crank)?;
    npz.finish()?;
    Ok(())
}
