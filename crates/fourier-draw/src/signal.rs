//! Point sequence → normalized complex signal.
//!
//! The outline is centred on its bounding box and divided by the larger box
//! dimension, so the longest axis spans exactly `[-0.5, 0.5]`.

use crate::error::{FourierError, Result};
use crate::geometry::{Bounds, Point};

/// One sample of the periodic signal: `re` is x, `im` is y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComplexSample {
    pub re: f64,
    pub im: f64,
}

impl ComplexSample {
    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// Centre and unit-scale a point sequence.
///
/// An empty input yields an empty signal. If every point coincides the
/// scale would be zero, which is reported as [`FourierError::DegenerateSignal`]
/// instead of producing NaN samples.
pub fn build_signal(points: &[Point]) -> Result<Vec<ComplexSample>> {
    let Some(bounds) = Bounds::of_points(points) else {
        return Ok(Vec::new());
    };

    let center = bounds.center();
    let scale = bounds.max_extent();

    if scale == 0.0 || !scale.is_finite() {
        return Err(FourierError::DegenerateSignal { points: points.len() });
    }

    Ok(points
        .iter()
        .map(|p| ComplexSample::new((p.x - center.x) / scale, (p.y - center.y) / scale))
        .collect())
}
