//! Arc-length sampling of flattened paths.
//!
//! ## Curve Flattening
//!
//! SVG paths contain Bézier curves (cubic and quadratic). We flatten them
//! into polylines with lyon_geom, then walk the polylines by distance so the
//! samples are evenly spaced along the outline rather than along the curve
//! parameter.

use lyon_geom::{CubicBezierSegment, QuadraticBezierSegment, point};

use crate::geometry::{Point, polyline_length};

/// Tolerance for curve flattening, in source units.
/// Lower = more vertices and a more faithful arc length.
pub const CURVE_TOLERANCE: f32 = 0.05;

/// Anything that can hand out evenly spaced points along its outline.
///
/// The pipeline only depends on this trait, so a host with its own path
/// engine can plug it in instead of [`FlattenedPath`].
pub trait PathSampler {
    /// Total arc length.
    fn length(&self) -> f64;

    /// `count` points spaced equally by arc length, in traversal order.
    ///
    /// Sample `i` sits at distance `i / count * length()`, so the end of a
    /// closed outline is not repeated.
    fn sample(&self, count: usize) -> Vec<Point>;
}

/// A path flattened to one polyline per sub-path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlattenedPath {
    /// Sub-paths in drawing order. Each one is a connected polyline.
    pub subpaths: Vec<Vec<Point>>,
    /// Optional ID from the SVG element.
    pub id: Option<String>,
}

impl FlattenedPath {
    pub fn new(subpaths: Vec<Vec<Point>>) -> Self {
        Self { subpaths, id: None }
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    /// True when no sub-path has a vertex.
    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|s| s.is_empty())
    }

    /// Number of vertices over all sub-paths.
    pub fn vertex_count(&self) -> usize {
        self.subpaths.iter().map(Vec::len).sum()
    }

    fn first_vertex(&self) -> Option<Point> {
        self.subpaths.iter().find_map(|s| s.first().copied())
    }

    /// Point at arc-length `distance` from the start.
    ///
    /// Jumps between sub-paths cost no distance. Distances past the end
    /// clamp to the last vertex.
    pub fn point_at_length(&self, distance: f64) -> Option<Point> {
        let mut remaining = distance.max(0.0);
        let mut last = None;

        for sub in &self.subpaths {
            for seg in sub.windows(2) {
                let len = seg[0].distance(seg[1]);
                if remaining <= len && len > 0.0 {
                    return Some(seg[0].lerp(seg[1], remaining / len));
                }
                remaining -= len;
            }
            if let Some(p) = sub.last() {
                last = Some(*p);
            }
        }

        last
    }
}

impl PathSampler for FlattenedPath {
    fn length(&self) -> f64 {
        self.subpaths.iter().map(|s| polyline_length(s)).sum()
    }

    fn sample(&self, count: usize) -> Vec<Point> {
        if count == 0 {
            return Vec::new();
        }
        let Some(first) = self.first_vertex() else {
            return Vec::new();
        };

        let total = self.length();
        if total <= 0.0 {
            return vec![first; count];
        }

        // Single forward walk instead of calling point_at_length per sample.
        let mut out = Vec::with_capacity(count);
        let segments: Vec<(Point, Point, f64)> = self
            .subpaths
            .iter()
            .flat_map(|s| s.windows(2).map(|w| (w[0], w[1], w[0].distance(w[1]))))
            .filter(|(_, _, len)| *len > 0.0)
            .collect();

        let mut seg_idx = 0;
        let mut seg_start = 0.0;

        for i in 0..count {
            let target = i as f64 / count as f64 * total;

            while seg_idx + 1 < segments.len() && seg_start + segments[seg_idx].2 < target {
                seg_start += segments[seg_idx].2;
                seg_idx += 1;
            }

            let (a, b, len) = segments[seg_idx];
            let t = ((target - seg_start) / len).clamp(0.0, 1.0);
            out.push(a.lerp(b, t));
        }

        out
    }
}

/// Incrementally builds a [`FlattenedPath`] from move/line/curve commands.
///
/// Both the usvg tree walker and the raw `d` parser feed this, so the
/// flattening rules live in one place.
#[derive(Debug, Default)]
pub struct PathBuilder {
    subpaths: Vec<Vec<Point>>,
    current: Vec<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn last(&self) -> Option<Point> {
        self.current.last().copied()
    }

    /// Lone vertices (a bare move, or the restart point after `close`)
    /// carry no outline and are dropped.
    fn finish_current(&mut self) {
        if self.current.len() >= 2 {
            self.subpaths.push(std::mem::take(&mut self.current));
        } else {
            self.current.clear();
        }
    }

    pub fn move_to(&mut self, p: Point) {
        self.finish_current();
        self.current.push(p);
    }

    pub fn line_to(&mut self, p: Point) {
        self.current.push(p);
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        let Some(from) = self.last() else {
            self.current.push(to);
            return;
        };
        let curve = QuadraticBezierSegment {
            from: point(from.x as f32, from.y as f32),
            ctrl: point(ctrl.x as f32, ctrl.y as f32),
            to: point(to.x as f32, to.y as f32),
        };
        curve.for_each_flattened(CURVE_TOLERANCE, &mut |segment| {
            self.current.push(Point::new(segment.to.x as f64, segment.to.y as f64));
        });
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        let Some(from) = self.last() else {
            self.current.push(to);
            return;
        };
        let curve = CubicBezierSegment {
            from: point(from.x as f32, from.y as f32),
            ctrl1: point(ctrl1.x as f32, ctrl1.y as f32),
            ctrl2: point(ctrl2.x as f32, ctrl2.y as f32),
            to: point(to.x as f32, to.y as f32),
        };
        curve.for_each_flattened(CURVE_TOLERANCE, &mut |segment| {
            self.current.push(Point::new(segment.to.x as f64, segment.to.y as f64));
        });
    }

    /// Close the current sub-path back to its first vertex.
    pub fn close(&mut self) {
        let (Some(first), Some(last)) = (self.current.first().copied(), self.last()) else {
            return;
        };
        if first.distance(last) > 1e-9 {
            self.current.push(first);
        }
        // A following draw command without a move starts from the same vertex.
        self.finish_current();
        self.current.push(first);
    }

    pub fn build(mut self) -> FlattenedPath {
        // A path that is nothing but a single move still has a position.
        if self.subpaths.is_empty() && self.current.len() == 1 {
            self.subpaths.push(std::mem::take(&mut self.current));
        }
        self.finish_current();
        FlattenedPath::new(self.subpaths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square(size: f64) -> FlattenedPath {
        let mut b = PathBuilder::new();
        b.move_to(Point::new(0.0, 0.0));
        b.line_to(Point::new(size, 0.0));
        b.line_to(Point::new(size, size));
        b.line_to(Point::new(0.0, size));
        b.close();
        b.build()
    }

    #[test]
    fn close_adds_return_segment() {
        let path = square(10.0);
        assert_eq!(path.subpaths.len(), 1);
        assert_eq!(path.subpaths[0].len(), 5);
        assert_abs_diff_eq!(path.length(), 40.0);
    }

    #[test]
    fn samples_are_evenly_spaced() {
        let path = square(10.0);
        let pts = path.sample(8);
        let expected = [
            (0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 5.0),
            (10.0, 10.0), (5.0, 10.0), (0.0, 10.0), (0.0, 5.0),
        ];
        assert_eq!(pts.len(), 8);
        for (p, (x, y)) in pts.iter().zip(expected) {
            assert_abs_diff_eq!(p.x, x, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn sample_matches_point_at_length() {
        let path = square(7.0);
        let total = path.length();
        for (i, p) in path.sample(13).iter().enumerate() {
            let q = path.point_at_length(i as f64 / 13.0 * total).unwrap();
            assert_abs_diff_eq!(p.x, q.x, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, q.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_count_gives_nothing() {
        assert!(square(3.0).sample(0).is_empty());
    }

    #[test]
    fn zero_length_path_repeats_first_vertex() {
        let mut b = PathBuilder::new();
        b.move_to(Point::new(4.0, 2.0));
        b.line_to(Point::new(4.0, 2.0));
        let pts = b.build().sample(5);
        assert_eq!(pts, vec![Point::new(4.0, 2.0); 5]);
    }

    #[test]
    fn bare_move_is_a_single_point() {
        let mut b = PathBuilder::new();
        b.move_to(Point::new(1.0, 1.0));
        let pts = b.build().sample(3);
        assert_eq!(pts, vec![Point::new(1.0, 1.0); 3]);
    }

    #[test]
    fn empty_path_samples_nothing() {
        let path = PathBuilder::new().build();
        assert!(path.is_empty());
        assert!(path.sample(10).is_empty());
    }

    #[test]
    fn subpath_gaps_cost_no_length() {
        let mut b = PathBuilder::new();
        b.move_to(Point::new(0.0, 0.0));
        b.line_to(Point::new(10.0, 0.0));
        b.move_to(Point::new(100.0, 100.0));
        b.line_to(Point::new(100.0, 110.0));
        let path = b.build();

        assert_eq!(path.subpaths.len(), 2);
        assert_abs_diff_eq!(path.length(), 20.0);

        let pts = path.sample(5);
        assert_abs_diff_eq!(pts[1].x, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[2].x, 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[3].x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[3].y, 102.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[4].y, 106.0, epsilon = 1e-9);
    }

    #[test]
    fn cubic_is_flattened() {
        let mut b = PathBuilder::new();
        b.move_to(Point::new(10.0, 10.0));
        b.cubic_to(Point::new(40.0, 10.0), Point::new(60.0, 90.0), Point::new(90.0, 90.0));
        let path = b.build();
        assert!(
            path.vertex_count() > 5,
            "cubic should flatten into many vertices, got {}",
            path.vertex_count()
        );
        let end = *path.subpaths[0].last().unwrap();
        assert_abs_diff_eq!(end.x, 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(end.y, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn quadratic_arc_length_exceeds_chord() {
        let mut b = PathBuilder::new();
        b.move_to(Point::new(0.0, 0.0));
        b.quad_to(Point::new(50.0, 100.0), Point::new(100.0, 0.0));
        let path = b.build();
        assert!(path.length() > 100.0);
    }
}
