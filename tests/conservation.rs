use std::fs::File;
use approx::{ assert_abs_diff_eq, assert_relative_eq };
use ndarray as nd;
use ndarray_npy::NpzReader;
use tdse1d::{
    error::{ ErrorKind, TError },
    plot,
    solve,
    utils::{ prob_sum, wf_norm },
    Method,
    Params,
    PlotKind,
    Stability,
    Wavepacket,
};

#[test]
fn crank_nicolson_conserves_probability() {
    for &tau in [0.1, 1.0, 50.0].iter() {
        let sol = solve(&Params::new(80, 200, tau, Method::CrankNicolson)).unwrap();
        assert!(sol.max_prob_drift() < 1e-8, "tau = {tau}: {:e}", sol.max_prob_drift());
        assert_eq!(sol.stability, Stability::Stable);
        assert_relative_eq!(sol.radius, 1.0, epsilon = 1e-10);
    }
}

#[test]
fn crank_nicolson_with_barrier() {
    let params = Params::new(100, 150, 2.0, Method::CrankNicolson)
        .with_potential(60..70)
        .with_wavepacket(Wavepacket::new(5.0, -30.0, 1.0))
        .with_constants(1.0, 0.5);
    let sol = solve(&params).unwrap();
    assert!(sol.max_prob_drift() < 1e-8);
}

#[test]
fn ftcs_small_step_conserves_probability() {
    let sol = solve(&Params::new(50, 100, 1e-4, Method::Ftcs)).unwrap();
    assert!(sol.max_prob_drift() < 1e-6, "{:e}", sol.max_prob_drift());
    // the diagnostic is advisory: FTCS is never strictly stable
    assert!(sol.radius > 1.0);
}

#[test]
fn ftcs_large_step_grows() {
    let sol = solve(&Params::new(80, 200, 1.0, Method::Ftcs)).unwrap();
    assert_eq!(sol.stability, Stability::Unstable);
    // |(I - iτH) ψ|² = |ψ|² + τ²|Hψ|² for Hermitian H
    for (pk, pkp1) in sol.prob.iter().zip(sol.prob.iter().skip(1)) {
        assert!(*pkp1 >= *pk * (1.0 - 1e-12));
    }
    assert!(sol.prob[199] > 2.0 * sol.prob[0]);
}

#[test]
fn initial_condition_normalized() {
    let params = Params::new(80, 2, 1.0, Method::CrankNicolson);
    let h = params.spacing();
    let sol = solve(&params).unwrap();
    assert_relative_eq!(wf_norm(&sol.at(0).unwrap(), h), 1.0, epsilon = 1e-6);
    assert_relative_eq!(sol.prob[0] * h, 1.0, epsilon = 1e-6);
}

#[test]
fn prob_plot_matches_initial_density() {
    let sol = solve(&Params::new(80, 200, 1.0, Method::CrankNicolson)).unwrap();
    let y = plot(&sol.x, &sol.psi, 0, PlotKind::Prob, None).unwrap();
    let q0 = Wavepacket::default().eval(&sol.x).unwrap();
    for (yk, q0k) in y.iter().zip(&q0) {
        assert_abs_diff_eq!(*yk, q0k.norm_sqr(), epsilon = 1e-15);
    }
    assert_relative_eq!(y.sum(), prob_sum(&q0), epsilon = 1e-12);
    assert_eq!(sol.curve(0, PlotKind::Prob).unwrap(), y);
}

#[test]
fn plot_rejects_out_of_range_time() {
    let sol = solve(&Params::new(30, 5, 0.5, Method::CrankNicolson)).unwrap();
    let err = plot(&sol.x, &sol.psi, 5, PlotKind::Psi, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn two_point_grid_rejected() {
    let err = solve(&Params::new(2, 10, 1.0, Method::Ftcs)).unwrap_err();
    assert!(matches!(err, TError::BadGridSize(2)));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn unknown_method_rejected() {
    let err = "unknown_method".parse::<Method>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.to_string().contains("'unknown_method'"));
}

#[test]
fn solution_to_npz() {
    let sol = solve(&Params::new(30, 5, 0.5, Method::Ftcs)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sol.npz");
    sol.write_npz(&path).unwrap();
    let npz = NpzReader::new(File::open(&path).unwrap()).unwrap();
    assert_eq!(npz.len(), 5);
}

#[test]
fn deterministic() {
    let params = Params::new(40, 20, 0.3, Method::Ftcs).with_potential([5, 6, 7]);
    let a = solve(&params).unwrap();
    let b = solve(&params).unwrap();
    assert_eq!(a.psi, b.psi);
    assert_eq!(a.prob, b.prob);
    assert_eq!(a.t, nd::Array1::from_iter((0..20).map(|i| i as f64 * 0.3)));
}
