//! End-to-end analysis: points in, ranked coefficients out.

use crate::epicycle::endpoint_at;
use crate::error::{FourierError, Result};
use crate::geometry::Point;
use crate::signal::build_signal;
use crate::spectrum::{Coefficient, analyze_signal, scale_coefficients};
use crate::svg::extract_points_from_svg;

/// Normalize `points` and run the transform.
///
/// An empty point list is reported as [`FourierError::InvalidGeometry`]:
/// there is nothing to draw.
pub fn analyze(points: &[Point]) -> Result<Vec<Coefficient>> {
    if points.is_empty() {
        return Err(FourierError::InvalidGeometry);
    }
    let signal = build_signal(points)?;
    analyze_signal(&signal)
}

/// The result of analyzing one loaded geometry.
///
/// Immutable once built. Loading new geometry builds a new `Spectrum`
/// and replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Unit-scale coefficients, largest amplitude first.
    pub coefficients: Vec<Coefficient>,
    /// The same coefficients with amplitudes multiplied by `display_scale`.
    pub display: Vec<Coefficient>,
    pub display_scale: f64,
    /// Number of input points (= number of coefficients).
    pub sample_count: usize,
}

impl Spectrum {
    pub fn from_points(points: &[Point], display_scale: f64) -> Result<Self> {
        let coefficients = analyze(points)?;
        let display = scale_coefficients(&coefficients, display_scale);
        Ok(Self {
            sample_count: points.len(),
            coefficients,
            display,
            display_scale,
        })
    }

    pub fn from_svg(svg_content: &str, samples_per_shape: usize, display_scale: f64) -> Result<Self> {
        let points = extract_points_from_svg(svg_content, samples_per_shape)?;
        Self::from_points(&points, display_scale)
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

/// Trace the approximated outline: the endpoint at `t = i / steps` for
/// `i in 0..steps`, using the first `num_circles` coefficients.
pub fn reconstruct(coefficients: &[Coefficient], num_circles: i64, steps: usize) -> Vec<Point> {
    (0..steps)
        .map(|i| endpoint_at(i as f64 / steps as f64, coefficients, num_circles))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn diamond() -> Vec<Point> {
        vec![
            Point::new(50.0, 0.0),
            Point::new(100.0, 50.0),
            Point::new(50.0, 100.0),
            Point::new(0.0, 50.0),
        ]
    }

    #[test]
    fn empty_points_are_invalid_geometry() {
        assert_eq!(analyze(&[]), Err(FourierError::InvalidGeometry));
    }

    #[test]
    fn coincident_points_fail_before_transform() {
        let pts = vec![Point::new(1.0, 1.0); 3];
        assert!(matches!(analyze(&pts), Err(FourierError::DegenerateSignal { .. })));
    }

    #[test]
    fn spectrum_keeps_both_scales() {
        let spectrum = Spectrum::from_points(&diamond(), 300.0).unwrap();
        assert_eq!(spectrum.len(), 4);
        assert_eq!(spectrum.sample_count, 4);
        for (c, d) in spectrum.coefficients.iter().zip(&spectrum.display) {
            assert_abs_diff_eq!(d.amp, c.amp * 300.0);
            assert_eq!(d.freq, c.freq);
        }
    }

    #[test]
    fn reconstruct_full_series_returns_normalized_outline() {
        let spectrum = Spectrum::from_points(&diamond(), 1.0).unwrap();
        let outline = reconstruct(&spectrum.coefficients, 4, 4);

        // Diamond normalized by its 100-unit extent and centred at (50, 50).
        let expected = [(0.0, -0.5), (0.5, 0.0), (0.0, 0.5), (-0.5, 0.0)];
        for (p, (x, y)) in outline.iter().zip(expected) {
            assert_abs_diff_eq!(p.x, x, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn spectrum_from_svg() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
                <ellipse cx="50" cy="50" rx="40" ry="20"/>
            </svg>
        "#;
        let spectrum = Spectrum::from_svg(svg, 64, 300.0).unwrap();
        assert_eq!(spectrum.len(), 64);

        // An ellipse is two counter-rotating circles: k = +1 and k = -1 dominate.
        let top: Vec<i64> = spectrum.coefficients[..2].iter().map(|c| c.freq.abs()).collect();
        assert_eq!(top, vec![1, 1]);
        // Traced counter-clockwise on screen, the larger circle turns backwards.
        assert_eq!(spectrum.coefficients[0].freq, -1);
    }

    #[test]
    fn lone_circle_has_one_negative_term() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="40"/>
            </svg>
        "#;
        let spectrum = Spectrum::from_svg(svg, 128, 1.0).unwrap();
        let top = spectrum.coefficients[0];
        assert_eq!(top.freq, -1);
        assert_abs_diff_eq!(top.amp, 0.5, epsilon = 0.01);
        assert!(spectrum.coefficients[1].amp < 0.01);
    }
}
