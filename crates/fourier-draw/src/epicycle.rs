//! Epicycle evaluation: sum the rotating vectors at a given time.
//!
//! At time `t` (one period = `t` from 0 to 1) each coefficient contributes a
//! vector of length `amp` at angle `2π·freq·t + phase`. Chaining the vectors
//! tip to tail gives a circle per term; the last tip is the drawn point.

use std::f64::consts::PI;

use crate::geometry::Point;
use crate::spectrum::Coefficient;

/// One epicycle: its centre, radius and the current angle of its vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub angle: f64,
}

impl Circle {
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Tip of this circle's vector (the next circle's centre).
    #[inline]
    pub fn tip(&self) -> Point {
        Point::new(
            self.x + self.radius * self.angle.cos(),
            self.y + self.radius * self.angle.sin(),
        )
    }
}

/// Everything needed to draw one animation frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EpicycleFrame {
    /// Circles in coefficient order (largest first).
    pub circles: Vec<Circle>,
    /// Tip of the last vector.
    pub endpoint: Point,
}

/// Evaluate the first `num_circles` coefficients at time `t`.
///
/// Uses `min(num_circles, coefficients.len())` terms; zero or negative
/// `num_circles` yields no circles and an endpoint at the origin. Any `t`
/// is accepted, the trig functions wrap it.
pub fn evaluate(t: f64, coefficients: &[Coefficient], num_circles: i64) -> EpicycleFrame {
    let num_to_use = usize::try_from(num_circles)
        .unwrap_or(0)
        .min(coefficients.len());

    let mut circles = Vec::with_capacity(num_to_use);
    let mut x = 0.0;
    let mut y = 0.0;

    for coef in &coefficients[..num_to_use] {
        let angle = 2.0 * PI * coef.freq as f64 * t + coef.phase;

        circles.push(Circle {
            x,
            y,
            radius: coef.amp,
            angle,
        });

        x += coef.amp * angle.cos();
        y += coef.amp * angle.sin();
    }

    EpicycleFrame {
        circles,
        endpoint: Point::new(x, y),
    }
}

/// Endpoint only, without collecting the circle chain.
pub fn endpoint_at(t: f64, coefficients: &[Coefficient], num_circles: i64) -> Point {
    let num_to_use = usize::try_from(num_circles)
        .unwrap_or(0)
        .min(coefficients.len());

    coefficients[..num_to_use]
        .iter()
        .fold(Point::default(), |acc, coef| {
            let angle = 2.0 * PI * coef.freq as f64 * t + coef.phase;
            Point::new(acc.x + coef.amp * angle.cos(), acc.y + coef.amp * angle.sin())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::ComplexSample;
    use crate::spectrum::analyze_signal;
    use approx::assert_abs_diff_eq;

    fn star_signal(n: usize) -> Vec<ComplexSample> {
        (0..n)
            .map(|i| {
                let a = 2.0 * PI * i as f64 / n as f64;
                let r = 0.3 + 0.15 * (5.0 * a).cos();
                ComplexSample::new(r * a.cos() + 0.02, r * a.sin() - 0.01)
            })
            .collect()
    }

    #[test]
    fn zero_or_negative_circles_give_origin() {
        let coeffs = analyze_signal(&star_signal(16)).unwrap();
        for k in [0, -1, -100] {
            let frame = evaluate(0.3, &coeffs, k);
            assert!(frame.circles.is_empty());
            assert_eq!(frame.endpoint, Point::new(0.0, 0.0));
        }
    }

    #[test]
    fn circle_count_is_clamped_to_coefficients() {
        let coeffs = analyze_signal(&star_signal(10)).unwrap();
        assert_eq!(evaluate(0.0, &coeffs, 3).circles.len(), 3);
        assert_eq!(evaluate(0.0, &coeffs, 10).circles.len(), 10);
        assert_eq!(evaluate(0.0, &coeffs, 500).circles.len(), 10);
    }

    #[test]
    fn circles_chain_tip_to_tail() {
        let coeffs = analyze_signal(&star_signal(24)).unwrap();
        let frame = evaluate(0.41, &coeffs, 24);

        assert_eq!(frame.circles[0].center(), Point::new(0.0, 0.0));
        for pair in frame.circles.windows(2) {
            let tip = pair[0].tip();
            assert_abs_diff_eq!(tip.x, pair[1].x, epsilon = 1e-12);
            assert_abs_diff_eq!(tip.y, pair[1].y, epsilon = 1e-12);
        }
        let last = frame.circles.last().unwrap().tip();
        assert_abs_diff_eq!(last.x, frame.endpoint.x, epsilon = 1e-12);
        assert_abs_diff_eq!(last.y, frame.endpoint.y, epsilon = 1e-12);
    }

    #[test]
    fn full_series_reconstructs_samples() {
        for n in [4usize, 9, 64, 200] {
            let signal = star_signal(n);
            let coeffs = analyze_signal(&signal).unwrap();

            for (i, s) in signal.iter().enumerate() {
                let t = i as f64 / n as f64;
                let frame = evaluate(t, &coeffs, n as i64);
                assert_abs_diff_eq!(frame.endpoint.x, s.re, epsilon = 1e-9);
                assert_abs_diff_eq!(frame.endpoint.y, s.im, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn unit_square_at_time_zero() {
        let signal = vec![
            ComplexSample::new(0.5, 0.5),
            ComplexSample::new(-0.5, 0.5),
            ComplexSample::new(-0.5, -0.5),
            ComplexSample::new(0.5, -0.5),
        ];
        let coeffs = analyze_signal(&signal).unwrap();
        let frame = evaluate(0.0, &coeffs, 4);
        assert_abs_diff_eq!(frame.endpoint.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(frame.endpoint.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn truncation_error_shrinks_with_more_circles() {
        let n = 64;
        let signal = star_signal(n);
        let coeffs = analyze_signal(&signal).unwrap();
        let t = 0.137;
        let full = evaluate(t, &coeffs, n as i64).endpoint;

        let err = |k: i64| full.distance(evaluate(t, &coeffs, k).endpoint);
        assert!(err(32) <= err(2) + 1e-12);
        assert_abs_diff_eq!(err(n as i64), 0.0);
        assert_abs_diff_eq!(err(1000), 0.0);
    }

    #[test]
    fn time_wraps_with_period() {
        let coeffs = analyze_signal(&star_signal(12)).unwrap();
        let a = evaluate(0.25, &coeffs, 12).endpoint;
        let b = evaluate(1.25, &coeffs, 12).endpoint;
        let c = evaluate(-0.75, &coeffs, 12).endpoint;
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        assert_abs_diff_eq!(a.x, c.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, c.y, epsilon = 1e-9);
    }

    #[test]
    fn endpoint_at_matches_evaluate() {
        let coeffs = analyze_signal(&star_signal(30)).unwrap();
        for k in [0, 5, 30] {
            let p = endpoint_at(0.6, &coeffs, k);
            assert_eq!(p, evaluate(0.6, &coeffs, k).endpoint);
        }
    }
}
