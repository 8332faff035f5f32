/// Impedance attributes computed from well-log curves.
///
/// Elastic impedance follows Connolly, 1999, The Leading Edge, 18,
/// 438–452; its normalization follows Whitcombe, 2002, Geophysics, 67,
/// 60–62; the Lamé attributes follow Goodway, Chen & Downton, 1997, SEG
/// Expanded Abstracts, 183–186.
use ndarray::Array1;

use crate::error::{check_same_len, Result};

/// Acoustic impedance `vp·rho`.
pub fn ai(vp: &Array1<f64>, rho: &Array1<f64>) -> Result<Array1<f64>> {
    check_same_len("ai: vp and rho", vp.len(), rho.len())?;
    Ok(vp * rho)
}

/// Elastic impedance at incidence angle `theta1` (degrees).
///
/// `EI = vp^a · vs^b · rho^c` with `k = (vs/vp)²`, `a = 1 + tan²θ`,
/// `b = −8k·sin²θ`, `c = 1 − 4k·sin²θ`. At normal incidence this reduces
/// to the acoustic impedance.
pub fn ei(vp: &Array1<f64>, vs: &Array1<f64>, rho: &Array1<f64>, theta1: f64) -> Result<Array1<f64>> {
    check_same_len("ei: vp and vs", vp.len(), vs.len())?;
    check_same_len("ei: vp and rho", vp.len(), rho.len())?;

    let theta = theta1.to_radians();
    let sin2 = theta.sin().powi(2);
    let tan2 = theta.tan().powi(2);

    Ok(Array1::from_shape_fn(vp.len(), |i| {
        let k = (vs[i] / vp[i]).powi(2);
        let a = 1.0 + tan2;
        let b = -8.0 * k * sin2;
        let c = 1.0 - 4.0 * k * sin2;
        vp[i].powf(a) * vs[i].powf(b) * rho[i].powf(c)
    }))
}

/// Normalized elastic impedance at incidence angle `theta1` (degrees).
///
/// Scales Connolly's EI by reference constants (conventionally the mean
/// shale properties) so the result carries impedance units at every angle:
/// `NEI = vp0·rho0 · (vp/vp0)^a · (vs/vs0)^b · (rho/rho0)^c`.
pub fn nei(
    vp: &Array1<f64>,
    vs: &Array1<f64>,
    rho: &Array1<f64>,
    vp0: f64,
    vs0: f64,
    rho0: f64,
    theta1: f64,
) -> Result<Array1<f64>> {
    check_same_len("nei: vp and vs", vp.len(), vs.len())?;
    check_same_len("nei: vp and rho", vp.len(), rho.len())?;

    let theta = theta1.to_radians();
    let sin2 = theta.sin().powi(2);
    let tan2 = theta.tan().powi(2);

    Ok(Array1::from_shape_fn(vp.len(), |i| {
        let k = (vs[i] / vp[i]).powi(2);
        let a = 1.0 + tan2;
        let b = -8.0 * k * sin2;
        let c = 1.0 - 4.0 * k * sin2;
        vp0 * rho0 * (vp[i] / vp0).powf(a) * (vs[i] / vs0).powf(b) * (rho[i] / rho0).powf(c)
    }))
}

/// Lamé attributes λρ and μρ.
#[derive(Debug, Clone)]
pub struct LambdaMuRho {
    /// The product λ·ρ, sensitive to pore fluid.
    pub lambda_rho: Array1<f64>,
    /// The product μ·ρ, sensitive to lithology.
    pub mu_rho: Array1<f64>,
}

/// Lambda-rho / mu-rho from velocity and density logs:
/// `λρ = Ip² − 2·Is²`, `μρ = Is²`.
pub fn lrm(vp: &Array1<f64>, vs: &Array1<f64>, rho: &Array1<f64>) -> Result<LambdaMuRho> {
    check_same_len("lrm: vp and vs", vp.len(), vs.len())?;

    let ip = ai(vp, rho)?;
    let ips = vs * rho;

    let mu_rho = &ips * &ips;
    let lambda_rho = &ip * &ip - &mu_rho * 2.0;

    Ok(LambdaMuRho { lambda_rho, mu_rho })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AvoError;
    use ndarray::array;

    #[test]
    fn test_ai_simple() {
        let vp = array![3000.0, 3300.0];
        let rho = array![2.2, 2.3];
        let ip = ai(&vp, &rho).unwrap();
        assert!((ip[0] - 6600.0).abs() < 1e-9);
        assert!((ip[1] - 7590.0).abs() < 1e-9);
    }

    /// At normal incidence the elastic impedance is the acoustic impedance.
    #[test]
    fn test_ei_at_zero_is_ai() {
        let vp = array![3000.0, 3300.0, 2800.0];
        let vs = array![1500.0, 1700.0, 1300.0];
        let rho = array![2.2, 2.3, 2.15];

        let ip = ai(&vp, &rho).unwrap();
        let e = ei(&vp, &vs, &rho, 0.0).unwrap();
        for i in 0..vp.len() {
            assert!((e[i] - ip[i]).abs() < 1e-6, "i={i}: ei={} ai={}", e[i], ip[i]);
        }
    }

    /// With unit reference constants the normalization is a no-op.
    #[test]
    fn test_nei_unit_references_equal_ei() {
        let vp = array![3.0, 3.3];
        let vs = array![1.5, 1.7];
        let rho = array![2.2, 2.3];

        let e = ei(&vp, &vs, &rho, 20.0).unwrap();
        let ne = nei(&vp, &vs, &rho, 1.0, 1.0, 1.0, 20.0).unwrap();
        for i in 0..vp.len() {
            assert!((e[i] - ne[i]).abs() < 1e-12, "i={i}: ei={} nei={}", e[i], ne[i]);
        }
    }

    /// At normal incidence the normalized elastic impedance is also the
    /// acoustic impedance, independent of the references.
    #[test]
    fn test_nei_at_zero_is_ai() {
        let vp = array![3000.0, 3300.0];
        let vs = array![1500.0, 1700.0];
        let rho = array![2.2, 2.3];

        let ip = ai(&vp, &rho).unwrap();
        let ne = nei(&vp, &vs, &rho, 2900.0, 1400.0, 2.1, 0.0).unwrap();
        for i in 0..vp.len() {
            assert!((ne[i] - ip[i]).abs() < 1e-6, "i={i}: nei={} ai={}", ne[i], ip[i]);
        }
    }

    #[test]
    fn test_lrm_known_values() {
        // Ip = 6000, Is = 3000: λρ = 36e6 − 2·9e6 = 18e6, μρ = 9e6.
        let vp = array![3000.0];
        let vs = array![1500.0];
        let rho = array![2.0];

        let lm = lrm(&vp, &vs, &rho).unwrap();
        assert!((lm.lambda_rho[0] - 18.0e6).abs() < 1e-3);
        assert!((lm.mu_rho[0] - 9.0e6).abs() < 1e-3);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let vp = array![3000.0, 3300.0];
        let rho = array![2.2];
        assert!(matches!(ai(&vp, &rho), Err(AvoError::InvalidInput(_))));
    }
}
