//! Frame rendering to SVG markup.
//!
//! The library stops at markup; rasterizing is up to the host (the CLI
//! hands these documents to resvg). All geometry is drawn around the
//! canvas centre, matching the origin-centred epicycle coordinates.

use std::fmt::Write;

use crate::epicycle::EpicycleFrame;
use crate::geometry::Point;

/// Circles and vectors smaller than this radius are not drawn.
const MIN_VISIBLE_RADIUS: f64 = 0.5;

const TRAIL_COLOR: &str = "rgb(102,126,234)";
const ENDPOINT_COLOR: &str = "#ff6464";

/// Canvas size and what to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub show_circles: bool,
    pub show_vectors: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            background: "white".to_string(),
            show_circles: true,
            show_vectors: true,
        }
    }
}

impl RenderStyle {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_visibility(mut self, show_circles: bool, show_vectors: bool) -> Self {
        self.show_circles = show_circles;
        self.show_vectors = show_vectors;
        self
    }

    fn center(&self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

fn open_document(svg: &mut String, style: &RenderStyle) {
    let center = style.center();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<defs>
<radialGradient id="endpoint-glow" r="0.8333">
<stop offset="0" stop-color="{c}" stop-opacity="1"/>
<stop offset="1" stop-color="{c}" stop-opacity="0"/>
</radialGradient>
</defs>
<rect width="100%" height="100%" fill="{bg}"/>
<g transform="translate({cx:.2}, {cy:.2})">
"#,
        w = style.width,
        h = style.height,
        c = ENDPOINT_COLOR,
        bg = style.background,
        cx = center.x,
        cy = center.y,
    );
}

fn close_document(svg: &mut String) {
    svg.push_str("</g>\n</svg>\n");
}

/// Render one animation frame: epicycles, the fading trail, and the
/// glowing endpoint.
pub fn render_frame_svg<'a, I>(frame: &EpicycleFrame, trail: I, style: &RenderStyle) -> String
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut svg = String::new();
    open_document(&mut svg, style);

    let count = frame.circles.len();
    for (index, circle) in frame.circles.iter().enumerate() {
        if circle.radius <= MIN_VISIBLE_RADIUS {
            continue;
        }
        let tip = circle.tip();

        if style.show_circles {
            let opacity = 0.3 / ((index + 1) as f64).sqrt();
            let _ = writeln!(
                svg,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="rgb(150,150,150)" stroke-opacity="{:.3}" stroke-width="1"/>"#,
                circle.x, circle.y, circle.radius, opacity
            );
        }

        if style.show_vectors {
            let hue = index as f64 / count as f64 * 360.0;
            let color = format!("hsl({:.1},70%,60%)", hue);
            let _ = writeln!(
                svg,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-opacity="0.8" stroke-width="2"/>"#,
                circle.x, circle.y, tip.x, tip.y, color
            );
            let _ = writeln!(
                svg,
                r#"<circle cx="{:.2}" cy="{:.2}" r="3" fill="{}" fill-opacity="0.9"/>"#,
                tip.x, tip.y, color
            );
        }
    }

    let trail: Vec<&Point> = trail.into_iter().collect();
    if trail.len() >= 2 {
        let _ = writeln!(
            svg,
            r#"<g stroke="{}" stroke-width="3" stroke-linecap="round" fill="none">"#,
            TRAIL_COLOR
        );
        for i in 1..trail.len() {
            let alpha = i as f64 / trail.len() as f64 * 0.8;
            let _ = writeln!(
                svg,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke-opacity="{:.3}"/>"#,
                trail[i - 1].x, trail[i - 1].y, trail[i].x, trail[i].y, alpha
            );
        }
        svg.push_str("</g>\n");
    }

    let end = frame.endpoint;
    let _ = writeln!(
        svg,
        r#"<circle cx="{:.2}" cy="{:.2}" r="6" fill="url(#endpoint-glow)"/>"#,
        end.x, end.y
    );
    let _ = writeln!(
        svg,
        r#"<circle cx="{:.2}" cy="{:.2}" r="4" fill="{}"/>"#,
        end.x, end.y, ENDPOINT_COLOR
    );

    close_document(&mut svg);
    svg
}

/// Render an origin-centred outline as a closed polyline.
pub fn render_path_svg(points: &[Point], style: &RenderStyle) -> String {
    let mut svg = String::new();
    open_document(&mut svg, style);

    if points.len() >= 2 {
        let coords: String = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            svg,
            r#"<polygon points="{}" fill="none" stroke="{}" stroke-width="2" stroke-linejoin="round"/>"#,
            coords, TRAIL_COLOR
        );
    }

    close_document(&mut svg);
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epicycle::Circle;

    fn frame() -> EpicycleFrame {
        EpicycleFrame {
            circles: vec![
                Circle { x: 0.0, y: 0.0, radius: 100.0, angle: 0.0 },
                Circle { x: 100.0, y: 0.0, radius: 20.0, angle: std::f64::consts::FRAC_PI_2 },
                Circle { x: 100.0, y: 20.0, radius: 0.1, angle: 0.0 },
            ],
            endpoint: Point::new(100.1, 20.0),
        }
    }

    #[test]
    fn vector_hues_spread_over_the_wheel() {
        let svg = render_frame_svg(&frame(), &Vec::<Point>::new(), &RenderStyle::default());
        assert!(svg.contains(r#"stroke="hsl(0.0,70%,60%)""#));
        assert!(svg.contains(r#"fill="hsl(120.0,70%,60%)""#));
    }

    #[test]
    fn frame_is_centred_svg_document() {
        let svg = render_frame_svg(&frame(), &Vec::<Point>::new(), &RenderStyle::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("translate(500.00, 400.00)"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn tiny_circles_are_skipped() {
        let svg = render_frame_svg(&frame(), &Vec::<Point>::new(), &RenderStyle::default());
        // two visible epicycles + two tip dots + glow + endpoint
        assert_eq!(svg.matches("<circle").count(), 6);
        assert_eq!(svg.matches("<line").count(), 2);
    }

    #[test]
    fn visibility_flags_hide_parts() {
        let style = RenderStyle::default().with_visibility(false, false);
        let svg = render_frame_svg(&frame(), &Vec::<Point>::new(), &style);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("<line").count(), 0);
    }

    #[test]
    fn trail_draws_one_segment_per_step() {
        let trail = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
        let style = RenderStyle::default().with_visibility(false, false);
        let svg = render_frame_svg(&frame(), &trail, &style);
        assert_eq!(svg.matches("<line").count(), 2);
        assert!(svg.contains(r#"stroke-opacity="0.533""#));
    }

    #[test]
    fn outline_is_polygon() {
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 5.0)];
        let svg = render_path_svg(&pts, &RenderStyle::default().with_size(200, 100));
        assert!(svg.contains(r#"points="0.00,0.00 10.00,0.00 5.00,5.00""#));
        assert!(svg.contains(r#"width="200""#));
    }
}
