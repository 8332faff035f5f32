//! Standalone formulas for seismic amplitude-versus-offset analysis,
//! elastic-impedance computation, Gassmann fluid substitution and
//! L1/L2-norm least-squares inversion.
//!
//! Every function is a pure transform over `ndarray` arrays of physical
//! measurements (velocities, densities, angles): there is no shared
//! state, no pipeline and no I/O — call the function you need and use the
//! returned arrays directly.
//!
//! - [`impedance`] — acoustic, elastic and normalized elastic impedance,
//!   Lamé attributes.
//! - [`reflectivity`] — Snell angles, Aki-Richards and Shuey two-layer
//!   reflectivity, whole-log Shuey reflectivity, normal-incidence
//!   reflection coefficients.
//! - [`wavelet`] — Ricker wavelet generation.
//! - [`rockphysics`] — Gassmann fluid substitution, Voigt-Reuss-Hill
//!   averaging, Poisson ratio.
//! - [`lstsq`] — ordinary (L2) least squares and the robust L1-norm fit
//!   by iteratively reweighted least squares.
//!
//! ```
//! use avo::lstsq::{l1_norm, DEFAULT_MAX_ITER};
//! use ndarray::array;
//!
//! let a = array![[0.0, 1.0], [1.0, 1.0], [2.0, 1.0], [3.0, 1.0]];
//! let y = array![1.0, 3.1, 5.0, 7.0];
//!
//! let fit = l1_norm(&a, &y, DEFAULT_MAX_ITER)?;
//! assert_eq!(fit.pest.len(), 2);
//! # Ok::<(), avo::AvoError>(())
//! ```

pub mod error;
pub mod impedance;
pub mod lstsq;
pub mod reflectivity;
pub mod rockphysics;
pub mod wavelet;

pub use error::{AvoError, Result};
