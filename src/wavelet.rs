/// Ricker wavelet generation for synthetic seismograms.
use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::{AvoError, Result};

/// A zero-phase Ricker wavelet on a regular time axis.
#[derive(Debug, Clone)]
pub struct Ricker {
    /// Time axis in seconds, centered on zero.
    pub time: Array1<f64>,
    /// Wavelet amplitude, peaking at 1 for t = 0.
    pub amplitude: Array1<f64>,
}

/// Generate a Ricker wavelet with peak frequency `freq` (Hz), total
/// duration `length` (s) and sample interval `dt` (s).
///
/// The time axis samples the half-open interval
/// `[−length/2, (length − dt)/2)` in steps of `dt`, so a 0.512 s wavelet
/// at 4 ms holds 128 samples.
pub fn ricker(freq: f64, length: f64, dt: f64) -> Result<Ricker> {
    if !(freq > 0.0 && length > 0.0 && dt > 0.0) {
        return Err(AvoError::InvalidInput(format!(
            "ricker: freq, length and dt must be positive (freq={freq}, length={length}, dt={dt})"
        )));
    }

    let start = -length / 2.0;
    let stop = (length - dt) / 2.0;
    let n = ((stop - start) / dt).ceil() as usize;

    let time = Array1::from_shape_fn(n, |i| start + i as f64 * dt);
    let amplitude = time.mapv(|t| {
        let u = (PI * freq * t).powi(2);
        (1.0 - 2.0 * u) * (-u).exp()
    });

    Ok(Ricker { time, amplitude })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
