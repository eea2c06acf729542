//! Geometry sources: SVG documents and raw path data.
//!
//! Uses usvg for complete SVG resolution (CSS, transforms, `<use>`), which
//! also converts `rect`, `line`, `polyline` and `polygon` into plain paths.
//! We walk the tree in document order so the sampled outlines concatenate
//! the way they appear in the file.
//!
//! `circle` and `ellipse` are rewritten before usvg sees them (see
//! [`rewrite_round_shapes`]) so they are traced from the leftmost point,
//! counter-clockwise on screen. Shapes that usvg does not render, such as
//! those inside `<defs>`, are not sampled.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

use crate::error::{FourierError, Result};
use crate::geometry::Point;
use crate::sampler::{FlattenedPath, PathBuilder, PathSampler};

/// Default number of samples taken from each shape.
pub const DEFAULT_SAMPLES_PER_SHAPE: usize = 500;

/// Extract every drawable shape from an SVG document as a flattened path.
///
/// Shapes that produce no vertices are skipped. An SVG without any shapes
/// is not an error here; [`extract_points_from_svg`] decides that.
pub fn extract_paths_from_svg(svg_content: &str) -> Result<Vec<FlattenedPath>> {
    let svg_content = rewrite_round_shapes(svg_content)?;
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg_content, &options)
        .map_err(|e| FourierError::SvgParse(e.to_string()))?;

    let mut paths = Vec::new();
    extract_from_group(tree.root(), &mut paths);

    log::debug!("extracted {} paths from SVG", paths.len());
    Ok(paths)
}

/// Rewrite `<circle>` and `<ellipse>` elements as two-arc `<path>`s that
/// start at `(cx - rx, cy)` with sweep flag 0.
///
/// usvg's own conversion starts at `(cx + rx, cy)` and runs the other way,
/// which flips the sign of every frequency in the spectrum. All other
/// attributes (`id`, `transform`, `style`, ...) are carried over.
fn rewrite_round_shapes(svg_content: &str) -> Result<String> {
    let mut reader = Reader::from_str(svg_content);
    let mut writer = Writer::new(Vec::with_capacity(svg_content.len()));
    // One entry per open element: was it renamed to `path`?
    let mut renamed: Vec<bool> = Vec::new();

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(FourierError::SvgParse(format!(
                    "XML parse error at position {}: {}",
                    reader.error_position(),
                    e
                )));
            }
        };

        let event = match event {
            Event::Eof => break,
            Event::Start(e) => match round_shape_as_path(&e) {
                Some(path) => {
                    renamed.push(true);
                    Event::Start(path)
                }
                None => {
                    renamed.push(false);
                    Event::Start(e)
                }
            },
            Event::Empty(e) => Event::Empty(round_shape_as_path(&e).unwrap_or(e)),
            Event::End(e) => {
                if renamed.pop().unwrap_or(false) {
                    Event::End(BytesEnd::new("path"))
                } else {
                    Event::End(e)
                }
            }
            other => other,
        };

        writer
            .write_event(event)
            .map_err(|e| FourierError::SvgParse(e.to_string()))?;
    }

    String::from_utf8(writer.into_inner()).map_err(|e| FourierError::SvgParse(e.to_string()))
}

/// `None` for anything that is not a circle or ellipse, or whose geometry
/// attributes are not numbers (usvg then handles the element as usual).
fn round_shape_as_path<'a>(element: &BytesStart<'_>) -> Option<BytesStart<'a>> {
    let is_circle = match element.name().as_ref() {
        b"circle" => true,
        b"ellipse" => false,
        _ => return None,
    };

    let (mut cx, mut cy, mut rx, mut ry) = (0.0, 0.0, 0.0, 0.0);
    let mut path = BytesStart::new("path");
    for attr in element.attributes() {
        let attr = attr.ok()?;
        match (attr.key.as_ref(), is_circle) {
            (b"cx", _) => cx = attr_number(&attr.value)?,
            (b"cy", _) => cy = attr_number(&attr.value)?,
            (b"r", true) => {
                rx = attr_number(&attr.value)?;
                ry = rx;
            }
            (b"rx", false) => rx = attr_number(&attr.value)?,
            (b"ry", false) => ry = attr_number(&attr.value)?,
            _ => path.push_attribute(attr),
        }
    }

    let d = format!(
        "M {},{} A {},{} 0 1,0 {},{} A {},{} 0 1,0 {},{}",
        cx - rx, cy, rx, ry, cx + rx, cy, rx, ry, cx - rx, cy
    );
    path.push_attribute(("d", d.as_str()));
    Some(path)
}

/// Leading number of a length attribute (`"40"`, `"40px"`).
fn attr_number(value: &[u8]) -> Option<f64> {
    let text = std::str::from_utf8(value).ok()?;
    text.trim().parse::<svgtypes::Length>().ok().map(|l| l.number)
}

fn extract_from_group(group: &usvg::Group, paths: &mut Vec<FlattenedPath>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(group) => extract_from_group(group, paths),
            usvg::Node::Path(path) => {
                if let Some(flat) = flatten_usvg_path(path) {
                    paths.push(flat);
                }
            }
            // Ignore text, images, etc.
            _ => {}
        }
    }
}

fn flatten_usvg_path(path: &usvg::Path) -> Option<FlattenedPath> {
    use usvg::tiny_skia_path::PathSegment;

    let transform = path.abs_transform();
    let data = if transform.is_identity() {
        path.data().clone()
    } else {
        path.data().clone().transform(transform)?
    };

    let to_point = |p: usvg::tiny_skia_path::Point| Point::new(p.x as f64, p.y as f64);

    let mut builder = PathBuilder::new();
    for segment in data.segments() {
        match segment {
            PathSegment::MoveTo(p) => builder.move_to(to_point(p)),
            PathSegment::LineTo(p) => builder.line_to(to_point(p)),
            PathSegment::QuadTo(ctrl, p) => builder.quad_to(to_point(ctrl), to_point(p)),
            PathSegment::CubicTo(c1, c2, p) => {
                builder.cubic_to(to_point(c1), to_point(c2), to_point(p))
            }
            PathSegment::Close => builder.close(),
        }
    }

    let flat = builder.build();
    if flat.is_empty() {
        log::warn!("skipping path '{}' with no vertices", path.id());
        return None;
    }

    let id = if path.id().is_empty() {
        None
    } else {
        Some(path.id().to_string())
    };
    Some(flat.with_id(id))
}

/// Parse a raw SVG `d` attribute into a flattened path.
///
/// svgtypes resolves relative commands, shorthand curves and arcs into
/// absolute move/line/quad/cubic segments for us.
pub fn path_from_data(data: &str) -> Result<FlattenedPath> {
    use svgtypes::SimplePathSegment;

    let mut builder = PathBuilder::new();
    for segment in svgtypes::SimplifyingPathParser::from(data) {
        let segment = segment.map_err(|e| FourierError::PathData(e.to_string()))?;
        match segment {
            SimplePathSegment::MoveTo { x, y } => builder.move_to(Point::new(x, y)),
            SimplePathSegment::LineTo { x, y } => builder.line_to(Point::new(x, y)),
            SimplePathSegment::Quadratic { x1, y1, x, y } => {
                builder.quad_to(Point::new(x1, y1), Point::new(x, y))
            }
            SimplePathSegment::CurveTo { x1, y1, x2, y2, x, y } => {
                builder.cubic_to(Point::new(x1, y1), Point::new(x2, y2), Point::new(x, y))
            }
            SimplePathSegment::ClosePath => builder.close(),
        }
    }

    Ok(builder.build())
}

/// Sample every path and concatenate the points in order.
///
/// Returns [`FourierError::InvalidGeometry`] when nothing usable comes out.
pub fn sample_paths(paths: &[FlattenedPath], samples_per_shape: usize) -> Result<Vec<Point>> {
    let mut all_points = Vec::with_capacity(paths.len() * samples_per_shape);
    for path in paths {
        all_points.extend(path.sample(samples_per_shape));
    }

    if all_points.is_empty() {
        Err(FourierError::InvalidGeometry)
    } else {
        Ok(all_points)
    }
}

/// Extract shapes from an SVG document and sample `samples_per_shape`
/// points from each, in document order.
pub fn extract_points_from_svg(svg_content: &str, samples_per_shape: usize) -> Result<Vec<Point>> {
    let paths = extract_paths_from_svg(svg_content)?;
    sample_paths(&paths, samples_per_shape)
}

// ============================================================================
// TESTS
// ============================================================================
