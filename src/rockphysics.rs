/// Gassmann fluid substitution, mineral-mixing bounds and elastic ratios.
///
/// The substitution recipe follows Avseth et al., Quantitative Seismic
/// Interpretation, 2006, with the dry-rock inversion of Smith, Sondergeld
/// & Rai, 2003, eq. 12.
use ndarray::{Array1, Array2};

use crate::error::{check_same_len, AvoError, Result};

/// Elastic model after fluid substitution.
#[derive(Debug, Clone)]
pub struct FluidSubstitution {
    /// P-wave velocity, m/s.
    pub vp: Array1<f64>,
    /// S-wave velocity, m/s.
    pub vs: Array1<f64>,
    /// Bulk density, g/cm³.
    pub rho: Array1<f64>,
}

/// Replace the pore fluid of a saturated rock and return the new elastic
/// model.
///
/// Five steps per sample: saturated moduli from the measured velocities,
/// dry-rock bulk modulus by inverting Gassmann for fluid 1, re-saturation
/// with fluid 2, shear modulus carried over unchanged, density corrected
/// by `φ·(ρ_f2 − ρ_f1)`.
///
/// Units: velocities m/s, densities g/cm³, moduli GPa, porosity
/// fractional. `k0` is the mineral (matrix) bulk modulus per sample.
#[allow(clippy::too_many_arguments)]
pub fn gassmann(
    vp1: &Array1<f64>,
    vs1: &Array1<f64>,
    rho1: &Array1<f64>,
    phi: &Array1<f64>,
    k0: &Array1<f64>,
    k_f1: f64,
    rho_f1: f64,
    k_f2: f64,
    rho_f2: f64,
) -> Result<FluidSubstitution> {
    check_same_len("gassmann: vp and vs", vp1.len(), vs1.len())?;
    check_same_len("gassmann: vp and rho", vp1.len(), rho1.len())?;
    check_same_len("gassmann: vp and phi", vp1.len(), phi.len())?;
    check_same_len("gassmann: vp and k0", vp1.len(), k0.len())?;

    let n = vp1.len();
    let mut vp = Array1::zeros(n);
    let mut vs = Array1::zeros(n);
    let mut rho = Array1::zeros(n);

    for i in 0..n {
        // km/s keeps the moduli in GPa alongside g/cm³ densities.
        let vpk = vp1[i] / 1000.0;
        let vsk = vs1[i] / 1000.0;

        let k_sat1 = rho1[i] * (vpk * vpk - 4.0 / 3.0 * vsk * vsk);
        let mu = rho1[i] * vsk * vsk;

        let a = phi[i] * k0[i] / k_f1;
        let kdry = (k_sat1 * (a + 1.0 - phi[i]) - k0[i]) / (a + k_sat1 / k0[i] - 1.0 - phi[i]);

        let k_sat2 = kdry
            + (1.0 - kdry / k0[i]).powi(2)
                / (phi[i] / k_f2 + (1.0 - phi[i]) / k0[i] - kdry / (k0[i] * k0[i]));

        let rho2 = rho1[i] + phi[i] * (rho_f2 - rho_f1);

        vp[i] = ((k_sat2 + 4.0 / 3.0 * mu) / rho2).sqrt() * 1000.0;
        vs[i] = (mu / rho2).sqrt() * 1000.0;
        rho[i] = rho2;
    }

    Ok(FluidSubstitution { vp, vs, rho })
}

/// Voigt/Reuss bounds and Hill averages for a mineral mixture.
#[derive(Debug, Clone)]
pub struct VoigtReussHill {
    /// Voigt (upper) bound on the bulk modulus.
    pub k_voigt: Array1<f64>,
    /// Reuss (lower) bound on the bulk modulus.
    pub k_reuss: Array1<f64>,
    /// Voigt (upper) bound on the shear modulus.
    pub mu_voigt: Array1<f64>,
    /// Reuss (lower) bound on the shear modulus.
    pub mu_reuss: Array1<f64>,
    /// Hill average bulk modulus.
    pub k: Array1<f64>,
    /// Hill average shear modulus.
    pub mu: Array1<f64>,
}

/// Voigt-Reuss-Hill averaging of constituent moduli.
///
/// `volumes` holds one row per sample and one column per constituent
/// (fractions summing to 1); `k` and `mu` hold one modulus per
/// constituent.
pub fn vrh(volumes: &Array2<f64>, k: &Array1<f64>, mu: &Array1<f64>) -> Result<VoigtReussHill> {
    check_same_len("vrh: volume columns and k", volumes.ncols(), k.len())?;
    check_same_len("vrh: volume columns and mu", volumes.ncols(), mu.len())?;
    if volumes.ncols() == 0 {
        return Err(AvoError::InvalidInput(
            "vrh: need at least one constituent".to_string(),
        ));
    }

    let n = volumes.nrows();
    let c = volumes.ncols();

    let mut k_voigt = Array1::zeros(n);
    let mut k_reuss = Array1::zeros(n);
    let mut mu_voigt = Array1::zeros(n);
    let mut mu_reuss = Array1::zeros(n);

    for i in 0..n {
        let mut ku = 0.0;
        let mut kl = 0.0;
        let mut mu_u = 0.0;
        let mut mu_l = 0.0;
        for j in 0..c {
            let f = volumes[[i, j]];
            ku += f * k[j];
            kl += f / k[j];
            mu_u += f * mu[j];
            mu_l += f / mu[j];
        }
        k_voigt[i] = ku;
        k_reuss[i] = 1.0 / kl;
        mu_voigt[i] = mu_u;
        mu_reuss[i] = 1.0 / mu_l;
    }

    let k_hill = (&k_voigt + &k_reuss) / 2.0;
    let mu_hill = (&mu_voigt + &mu_reuss) / 2.0;

    Ok(VoigtReussHill {
        k_voigt,
        k_reuss,
        mu_voigt,
        mu_reuss,
        k: k_hill,
        mu: mu_hill,
    })
}

/// Poisson ratio from the vp/vs ratio: `0.5·(q² − 2)/(q² − 1)` with
/// `q = vp/vs`.
pub fn pr(vp: &Array1<f64>, vs: &Array1<f64>) -> Result<Array1<f64>> {
    check_same_len("pr: vp and vs", vp.len(), vs.len())?;

    Ok(Array1::from_shape_fn(vp.len(), |i| {
        let q2 = (vp[i] / vs[i]).powi(2);
        0.5 * ((q2 - 2.0) / (q2 - 1.0))
    }))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
