/// L2 and L1 least-squares solvers for overdetermined linear systems.
///
/// Aster, Borchers & Thurber, 2018, Parameter Estimation and Inverse
/// Problems, 3rd edition: normal equations p. 26, IRLS scheme p. 46.
use ndarray::{Array1, Array2};
use ndarray_linalg::Solve;

use crate::error::{check_same_len, Result};

/// Conventional cap on IRLS reweighting passes.
pub const DEFAULT_MAX_ITER: usize = 20;

/// Additive guard keeping the reweighting finite when a residual is
/// exactly zero.
const RESIDUAL_EPS: f64 = 1e-15;

/// Relative change in the L1 objective at or below which the loop stops.
const CONVERGENCE_TOL: f64 = 1e-5;

/// Result of a least-squares fit.
#[derive(Debug, Clone)]
pub struct LstsqFit {
    /// Estimated parameters (one per design-matrix column)
    pub pest: Array1<f64>,
    /// Predicted data `A·pest` (n_obs,)
    pub predict: Array1<f64>,
    /// Residuals `y − predict` (n_obs,)
    pub residual: Array1<f64>,
}

impl LstsqFit {
    /// Sum of absolute residuals, the objective the L1 solver minimizes.
    pub fn l1_objective(&self) -> f64 {
        self.residual.iter().map(|r| r.abs()).sum()
    }
}

/// Ordinary (L2-norm) least squares via the normal equations.
///
/// Solves `(AᵗA)·pest = Aᵗy` by LU factorization, then evaluates the
/// prediction `A·pest` and the residual `y − predict`.
///
/// # Arguments
/// * `a` — design matrix (n_obs × n_params), n_obs ≥ n_params
/// * `y` — observed data (n_obs,)
///
/// # Errors
/// `InvalidInput` when the row count of `a` does not match the length of
/// `y`; `SingularMatrix` when `AᵗA` cannot be factorized (rank-deficient
/// design matrix).
pub fn l2_norm(a: &Array2<f64>, y: &Array1<f64>) -> Result<LstsqFit> {
    check_same_len("l2_norm: design-matrix rows vs observations", a.nrows(), y.len())?;

    let pest = a.t().dot(a).solve_into(a.t().dot(y))?;
    let predict = a.dot(&pest);
    let residual = y - &predict;

    Ok(LstsqFit {
        pest,
        predict,
        residual,
    })
}

/// L1-norm solution by iteratively reweighted least squares (IRLS).
///
/// Starts from the L2 solution, then repeatedly solves the reweighted
/// normal equations `((AᵗR)A)·pest = (AᵗR)·y` with
/// `R = diag(1 / (|rᵢ| + 1e-15))`, so large-residual observations are
/// de-emphasized on the next pass. The loop stops once the relative
/// change in `Σ|rᵢ|` drops to 1e-5, or after `max_iter` passes.
///
/// On an early stop the returned `pest` is the last *retained* estimate,
/// while `predict` and `residual` come from the pass that triggered the
/// stop. The triple is therefore not self-consistent at convergence;
/// callers that need `predict == A·pest` must recompute it. With
/// `max_iter = 0` the L2 triple is returned unchanged.
///
/// # Arguments
/// * `a`        — design matrix (n_obs × n_params), n_obs ≥ n_params
/// * `y`        — observed data (n_obs,)
/// * `max_iter` — cap on reweighting passes (conventionally [`DEFAULT_MAX_ITER`])
///
/// # Errors
/// `InvalidInput` on a row/length mismatch; `SingularMatrix` when the
/// initial or any reweighted normal-equation matrix cannot be factorized.
pub fn l1_norm(a: &Array2<f64>, y: &Array1<f64>, max_iter: usize) -> Result<LstsqFit> {
    let init = l2_norm(a, y)?;
    let mut pest = init.pest;
    let mut predict = init.predict;
    let mut residual = init.residual;
    let mut phi = residual.iter().map(|r| r.abs()).sum::<f64>();

    for pass in 0..max_iter {
        // R is diagonal, so AᵗR is a column scaling of Aᵗ; the m×m matrix
        // is never materialized.
        let mut atr = a.t().to_owned();
        for (i, r) in residual.iter().enumerate() {
            let w = 1.0 / (r.abs() + RESIDUAL_EPS);
            atr.column_mut(i).mapv_inplace(|v| v * w);
        }

        let candidate = atr.dot(a).solve_into(atr.dot(y))?;
        predict = a.dot(&candidate);
        residual = y - &predict;
        let phi_new = residual.iter().map(|r| r.abs()).sum::<f64>();

        // On an exact fit both objectives are zero and 0/0 is NaN, which
        // compares false and stops the loop.
        let rel = (phi_new - phi).abs() / phi_new.abs();
        log::trace!("l1_norm pass {pass}: phi={phi_new:.6e}, rel change {rel:.3e}");

        if rel > CONVERGENCE_TOL {
            pest = candidate;
            phi = phi_new;
        } else {
            log::debug!("l1_norm converged after {} passes", pass + 1);
            return Ok(LstsqFit {
                pest,
                predict,
                residual,
            });
        }
    }

    log::debug!("l1_norm stopped at the {max_iter}-pass cap");
    Ok(LstsqFit {
        pest,
        predict,
        residual,
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
