/// End-to-end tests over the public API: a synthetic two-layer AVO model
/// run through reflectivity, impedance, wavelet and inversion.
use ndarray::{Array1, Array2};

use avo::impedance::ai;
use avo::lstsq::{l1_norm, l2_norm, DEFAULT_MAX_ITER};
use avo::reflectivity::{akirichards, reflect_coef, shuey};
use avo::rockphysics::gassmann;
use avo::wavelet::ricker;

// Shale over a stiffer brine sand.
const VP1: f64 = 3000.0;
const VS1: f64 = 1500.0;
const RHO1: f64 = 2.2;
const VP2: f64 = 3300.0;
const VS2: f64 = 1700.0;
const RHO2: f64 = 2.3;

fn angle_fan() -> Array1<f64> {
    Array1::from_iter((0..=15).map(|i| 2.0 * i as f64))
}

// ---------------------------------------------------------------------------
// Reflectivity approximations agree where they should
// ---------------------------------------------------------------------------

/// Aki-Richards and Shuey are linearizations of the same reflectivity:
/// identical at normal incidence, near-identical out to moderate angles.
#[test]
fn aki_richards_tracks_shuey() {
    let theta = angle_fan();
    let aki = akirichards(VP1, VS1, RHO1, VP2, VS2, RHO2, &theta);
    let sh = shuey(VP1, VS1, RHO1, VP2, VS2, RHO2, &theta);

    assert!((aki[0] - sh.r0).abs() < 1e-12, "aki(0)={} r0={}", aki[0], sh.r0);
    assert!((sh.three_term[0] - sh.r0).abs() < 1e-12);

    for (i, t) in theta.iter().enumerate() {
        assert!(
            (aki[i] - sh.three_term[i]).abs() < 0.01,
            "θ={t}: aki={} shuey={}",
            aki[i],
            sh.three_term[i]
        );
    }
}

// ---------------------------------------------------------------------------
// Intercept/gradient inversion with an outlier
// ---------------------------------------------------------------------------

/// Forward-model a three-term Shuey curve, corrupt one angle, and invert
/// for (R0, G, F) with the L2 and L1 solvers. The robust fit must recover
/// the forward coefficients; the L2 fit spreads the outlier over all
/// three.
#[test]
fn l1_inversion_recovers_shuey_coefficients() {
    let theta = angle_fan();
    let sh = shuey(VP1, VS1, RHO1, VP2, VS2, RHO2, &theta);
    let f_true = 0.5 * (VP2 - VP1) / ((VP1 + VP2) / 2.0);

    let mut y = sh.three_term.clone();
    y[8] += 0.1;

    let a = Array2::from_shape_fn((theta.len(), 3), |(i, j)| {
        let t = theta[i].to_radians();
        match j {
            0 => 1.0,
            1 => t.sin().powi(2),
            _ => t.tan().powi(2) - t.sin().powi(2),
        }
    });

    let l2 = l2_norm(&a, &y).unwrap();
    let l1 = l1_norm(&a, &y, DEFAULT_MAX_ITER).unwrap();

    let truth = [sh.r0, sh.g, f_true];
    let err = |pest: &Array1<f64>| -> f64 {
        pest.iter()
            .zip(truth.iter())
            .map(|(p, t)| (p - t).abs())
            .sum()
    };

    assert!(
        err(&l1.pest) < 5e-3,
        "l1 pest {:?} vs truth {truth:?}",
        l1.pest
    );
    assert!(err(&l1.pest) < err(&l2.pest), "robust fit should beat L2");
    assert!(l1.l1_objective() <= l2.l1_objective());
}

// ---------------------------------------------------------------------------
// Blocky model → impedance → reflection coefficients → wavelet
// ---------------------------------------------------------------------------

/// A two-block impedance log reflects only at the block boundary, and the
/// wavelet that would be convolved onto that spike is unit-peak.
#[test]
fn blocky_log_single_reflector() {
    let n = 50;
    let vp = Array1::from_shape_fn(2 * n, |i| if i < n { VP1 } else { VP2 });
    let rho = Array1::from_shape_fn(2 * n, |i| if i < n { RHO1 } else { RHO2 });

    let ip = ai(&vp, &rho).unwrap();
    let rc = reflect_coef(&ip).unwrap();

    let expected = (ip[n] - ip[n - 1]) / (ip[n] + ip[n - 1]);
    for (i, r) in rc.iter().enumerate() {
        if i == n - 1 {
            assert!((r - expected).abs() < 1e-12, "spike={r}");
        } else {
            assert!(r.abs() < 1e-15, "leakage at sample {i}: {r}");
        }
    }

    let w = ricker(25.0, 0.512, 0.004).unwrap();
    assert_eq!(w.amplitude.len(), w.time.len());
    assert!((w.amplitude.iter().cloned().fold(f64::NEG_INFINITY, f64::max) - 1.0).abs() < 1e-9);
}

// ---------------------------------------------------------------------------
// Fluid substitution feeds back into AVO
// ---------------------------------------------------------------------------

/// Replacing brine with gas in the lower layer softens it: the
/// normal-incidence reflectivity must drop.
#[test]
fn gas_substitution_lowers_intercept() {
    let vp = Array1::from_elem(1, VP2);
    let vs = Array1::from_elem(1, VS2);
    let rho = Array1::from_elem(1, RHO2);
    let phi = Array1::from_elem(1, 0.25);
    let k0 = Array1::from_elem(1, 36.6);

    let gas = gassmann(&vp, &vs, &rho, &phi, &k0, 2.8, 1.09, 0.021, 0.25).unwrap();

    let theta = angle_fan();
    let brine_case = shuey(VP1, VS1, RHO1, VP2, VS2, RHO2, &theta);
    let gas_case = shuey(VP1, VS1, RHO1, gas.vp[0], gas.vs[0], gas.rho[0], &theta);

    assert!(
        gas_case.r0 < brine_case.r0,
        "gas r0={} brine r0={}",
        gas_case.r0,
        brine_case.r0
    );
}
