//! Discrete Fourier transform of a closed-curve signal.
//!
//! The transform is the direct summation definition, O(N²):
//!
//! ```text
//! c(k) = (1/N) Σ s[n] · e^{-i·2πkn/N}     for k in [-floor(N/2), ceil(N/2))
//! ```
//!
//! Each coefficient is one rotating vector: it turns `k` times per period,
//! with radius `amp` and starting angle `phase`. Coefficients come back
//! sorted so the biggest circles come first and truncating the list keeps
//! the most important terms.

use std::cmp::Ordering;
use std::f64::consts::PI;

use crate::error::{FourierError, Result};
use crate::signal::ComplexSample;

/// One frequency component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficient {
    /// Signed rotation count per period.
    pub freq: i64,
    /// Radius of the rotating vector, always `>= 0`.
    pub amp: f64,
    /// Starting angle in `(-π, π]`.
    pub phase: f64,
    pub re: f64,
    pub im: f64,
}

impl Coefficient {
    /// Build a coefficient from its rectangular form.
    pub fn from_rect(freq: i64, re: f64, im: f64) -> Self {
        Self {
            freq,
            amp: (re * re + im * im).sqrt(),
            phase: im.atan2(re),
            re,
            im,
        }
    }
}

/// Frequency range covered by a signal of length `n`: `[-floor(n/2), ceil(n/2))`.
pub fn frequency_range(n: usize) -> std::ops::Range<i64> {
    let n = n as i64;
    let start = -(n / 2);
    let end = (n + 1) / 2;
    start..end
}

/// Compute the DFT of `signal`, ranked by descending amplitude.
///
/// Returns exactly `signal.len()` coefficients, one per frequency in
/// [`frequency_range`]. Equal amplitudes are ordered by ascending `freq`.
pub fn analyze_signal(signal: &[ComplexSample]) -> Result<Vec<Coefficient>> {
    let n = signal.len();
    if n == 0 {
        return Err(FourierError::EmptySignal);
    }

    let n_f = n as f64;
    let mut coefficients: Vec<Coefficient> = frequency_range(n)
        .map(|k| {
            let mut re = 0.0;
            let mut im = 0.0;

            for (i, s) in signal.iter().enumerate() {
                let phi = (2.0 * PI * k as f64 * i as f64) / n_f;
                let (sin, cos) = phi.sin_cos();
                re += s.re * cos + s.im * sin;
                im += s.im * cos - s.re * sin;
            }

            Coefficient::from_rect(k, re / n_f, im / n_f)
        })
        .collect();

    sort_by_amplitude(&mut coefficients);

    log::debug!("analyzed {} samples into {} coefficients", n, coefficients.len());
    Ok(coefficients)
}

/// Sort descending by `amp`, ties by ascending `freq`.
pub fn sort_by_amplitude(coefficients: &mut [Coefficient]) {
    coefficients.sort_by(|a, b| {
        b.amp
            .partial_cmp(&a.amp)
            .unwrap_or(Ordering::Equal)
            .then(a.freq.cmp(&b.freq))
    });
}

/// Copy `coefficients` with every amplitude multiplied by `factor`.
///
/// Maps the unit-scale transform onto display units. Apply it once after
/// analysis, not per frame.
pub fn scale_coefficients(coefficients: &[Coefficient], factor: f64) -> Vec<Coefficient> {
    coefficients
        .iter()
        .map(|c| Coefficient {
            amp: c.amp * factor,
            ..*c
        })
        .collect()
}
