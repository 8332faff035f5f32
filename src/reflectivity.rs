/// P-wave reflectivity approximations for two-layer interfaces and whole
/// logs.
///
/// Aki & Richards' linearization follows AVO — Chopra & Castagna, 2014,
/// p. 62; Shuey's follows Avseth et al., Quantitative Seismic
/// Interpretation, 2006, p. 182.
use ndarray::{Array1, Array2};

use crate::error::{check_same_len, AvoError, Result};

/// Angles produced by Snell's law at a two-layer interface, all in
/// radians.
#[derive(Debug, Clone)]
pub struct SnellAngles {
    /// P-wave refraction angle below the first critical angle.
    pub theta2: Array1<f64>,
    /// Converted S-wave reflection angle.
    pub thetas1: Array1<f64>,
    /// Converted S-wave refraction angle below the second critical angle.
    pub thetas2: Array1<f64>,
    /// Ray parameter `sin(θ₁)/vp₁`.
    pub p: Array1<f64>,
}

/// Refraction and mode-conversion angles for a P-wave incident on a
/// two-layer interface. Layer 1 is the upper layer; `theta1` is in
/// radians.
///
/// Beyond a critical angle the arcsine has no real solution and the
/// corresponding entries are NaN, which callers propagate.
pub fn snell(vp1: f64, vp2: f64, vs1: f64, vs2: f64, theta1: &Array1<f64>) -> SnellAngles {
    let p = theta1.mapv(|t| t.sin() / vp1);
    SnellAngles {
        theta2: p.mapv(|p| (p * vp2).asin()),
        thetas1: p.mapv(|p| (p * vs1).asin()),
        thetas2: p.mapv(|p| (p * vs2).asin()),
        p,
    }
}

/// Aki & Richards (1980) three-term P-wave reflectivity for a two-layer
/// interface, evaluated over a fan of incidence angles `theta1`
/// (degrees).
///
/// Uses the average of the incidence and transmission angles, so the
/// curve bends upward approaching the critical angle and goes NaN beyond
/// it.
pub fn akirichards(
    vp1: f64,
    vs1: f64,
    rho1: f64,
    vp2: f64,
    vs2: f64,
    rho2: f64,
    theta1: &Array1<f64>,
) -> Array1<f64> {
    let theta1 = theta1.mapv(f64::to_radians);
    let refr = snell(vp1, vp2, vs1, vs2, &theta1);

    let dvp = vp2 - vp1;
    let dvs = vs2 - vs1;
    let drho = rho2 - rho1;
    let vp = (vp1 + vp2) / 2.0;
    let vs = (vs1 + vs2) / 2.0;
    let rho = (rho1 + rho2) / 2.0;

    Array1::from_shape_fn(theta1.len(), |i| {
        let theta = (theta1[i] + refr.theta2[i]) / 2.0;
        let p2vs2 = 4.0 * refr.p[i].powi(2) * vs * vs;
        let r1 = 0.5 * (1.0 - p2vs2) * drho / rho;
        let r2 = 0.5 / theta.cos().powi(2) * dvp / vp;
        let r3 = p2vs2 * dvs / vs;
        r1 + r2 - r3
    })
}

/// Shuey (1985) intercept/gradient decomposition for a two-layer
/// interface.
#[derive(Debug, Clone)]
pub struct ShueyApproximation {
    /// Intercept R0 (normal-incidence reflectivity).
    pub r0: f64,
    /// Gradient G.
    pub g: f64,
    /// Two-term curve `R0 + G·sin²θ`.
    pub two_term: Array1<f64>,
    /// Three-term curve with the far-angle term `F·(tan²θ − sin²θ)`.
    pub three_term: Array1<f64>,
}

/// Shuey (1985) two- and three-term P-wave reflectivity for a two-layer
/// interface, evaluated over a fan of incidence angles `theta1` (degrees).
pub fn shuey(
    vp1: f64,
    vs1: f64,
    rho1: f64,
    vp2: f64,
    vs2: f64,
    rho2: f64,
    theta1: &Array1<f64>,
) -> ShueyApproximation {
    let theta = theta1.mapv(f64::to_radians);

    let dvp = vp2 - vp1;
    let dvs = vs2 - vs1;
    let drho = rho2 - rho1;
    let vp = (vp1 + vp2) / 2.0;
    let vs = (vs1 + vs2) / 2.0;
    let rho = (rho1 + rho2) / 2.0;

    let r0 = 0.5 * (dvp / vp + drho / rho);
    let g = 0.5 * (dvp / vp) - 2.0 * (vs * vs / (vp * vp)) * (drho / rho + 2.0 * (dvs / vs));
    let f = 0.5 * (dvp / vp);

    let two_term = theta.mapv(|t| r0 + g * t.sin().powi(2));
    let three_term =
        theta.mapv(|t| r0 + g * t.sin().powi(2) + f * (t.tan().powi(2) - t.sin().powi(2)));

    ShueyApproximation {
        r0,
        g,
        two_term,
        three_term,
    }
}

/// Shuey reflectivity computed at every sample of a whole log.
#[derive(Debug, Clone)]
pub struct ShueyLog {
    /// Three-term reflectivity, (samples × angles).
    pub reflection: Array2<f64>,
    /// Intercept per sample.
    pub r0: Array1<f64>,
    /// Gradient per sample.
    pub g: Array1<f64>,
}

/// First differences across consecutive samples, with the first interface
/// value duplicated into slot 0 so the output aligns with the input log.
fn interface_diff(x: &Array1<f64>) -> Array1<f64> {
    Array1::from_shape_fn(x.len(), |i| {
        let j = i.max(1);
        x[j] - x[j - 1]
    })
}

/// Two-sample running means, padded the same way as [`interface_diff`].
fn interface_mean(x: &Array1<f64>) -> Array1<f64> {
    Array1::from_shape_fn(x.len(), |i| {
        let j = i.max(1);
        (x[j] + x[j - 1]) / 2.0
    })
}

/// Three-term Shuey reflectivity over entire `vp`/`vs`/`rho` logs and a
/// fan of incidence angles `theta` (degrees).
///
/// Interface contrasts are taken between consecutive samples; the result
/// has one row per log sample (row 0 duplicating row 1) and one column per
/// angle.
pub fn shueyrc(
    vp0: &Array1<f64>,
    vs0: &Array1<f64>,
    rho0: &Array1<f64>,
    theta: &Array1<f64>,
) -> Result<ShueyLog> {
    check_same_len("shueyrc: vp and vs", vp0.len(), vs0.len())?;
    check_same_len("shueyrc: vp and rho", vp0.len(), rho0.len())?;
    if vp0.len() < 2 {
        return Err(AvoError::InvalidInput(format!(
            "shueyrc: need at least two samples, got {}",
            vp0.len()
        )));
    }

    let theta = theta.mapv(f64::to_radians);

    let dvp = interface_diff(vp0);
    let dvs = interface_diff(vs0);
    let drho = interface_diff(rho0);
    let vp = interface_mean(vp0);
    let vs = interface_mean(vs0);
    let rho = interface_mean(rho0);

    let n = vp0.len();
    let r0 = Array1::from_shape_fn(n, |i| 0.5 * (dvp[i] / vp[i] + drho[i] / rho[i]));
    let g = Array1::from_shape_fn(n, |i| {
        0.5 * dvp[i] / vp[i]
            - 2.0 * (vs[i] * vs[i] / (vp[i] * vp[i])) * (drho[i] / rho[i] + 2.0 * dvs[i] / vs[i])
    });
    let f = Array1::from_shape_fn(n, |i| 0.5 * dvp[i] / vp[i]);

    let reflection = Array2::from_shape_fn((n, theta.len()), |(i, j)| {
        let sin2 = theta[j].sin().powi(2);
        let tan2 = theta[j].tan().powi(2);
        r0[i] + g[i] * sin2 + f[i] * (tan2 - sin2)
    });

    Ok(ShueyLog { reflection, r0, g })
}

/// Normal-incidence reflection-coefficient series from an impedance log:
/// `rc = (ip[i+1] − ip[i]) / (ip[i+1] + ip[i])`, with the last
/// coefficient repeated so the series keeps the length of the input log.
pub fn reflect_coef(ip: &Array1<f64>) -> Result<Array1<f64>> {
    let n = ip.len();
    if n < 2 {
        return Err(AvoError::InvalidInput(format!(
            "reflect_coef: need at least two samples, got {n}"
        )));
    }

    Ok(Array1::from_shape_fn(n, |i| {
        let j = i.min(n - 2);
        (ip[j + 1] - ip[j]) / (ip[j + 1] + ip[j])
    }))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
