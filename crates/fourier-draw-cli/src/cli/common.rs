//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use image::RgbaImage;
use resvg::usvg;
use tiny_skia::Pixmap;

use fourier_draw::{
    AnimationSettings, Point, RenderStyle, Spectrum, extract_points_from_svg, path_from_data,
    sample_paths,
};

use super::config::SettingsFile;
use crate::error::{CliError, Result};

/// Where the outline comes from, plus shared analysis options.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// SVG file to read ('-' for stdin)
    #[arg(value_name = "SVG")]
    pub input: Option<String>,

    /// Raw SVG path data to use instead of an SVG file
    #[arg(long = "path", value_name = "D", conflicts_with = "input")]
    pub path_data: Option<String>,

    /// Points sampled from each shape
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub samples: Option<usize>,

    /// Display scale applied to the unit-size coefficients
    #[arg(long, value_name = "FACTOR")]
    pub scale: Option<f64>,

    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    /// Defaults, then the config file, then command-line flags.
    pub fn settings(&self) -> Result<(AnimationSettings, RenderStyle)> {
        let mut settings = AnimationSettings::default();
        let mut style = RenderStyle::default();

        if let Some(path) = &self.config {
            let file = SettingsFile::load(path)?;
            settings = file.apply(settings);
            let width = file.width.unwrap_or(style.width);
            let height = file.height.unwrap_or(style.height);
            style = style.with_size(width, height);
        }

        if let Some(samples) = self.samples {
            settings.samples_per_shape = samples;
        }
        if let Some(scale) = self.scale {
            settings.display_scale = scale;
        }

        style = style.with_visibility(settings.show_circles, settings.show_vectors);
        Ok((settings, style))
    }

    /// Sample the outline points.
    pub fn load_points(&self, samples_per_shape: usize) -> Result<Vec<Point>> {
        if let Some(data) = &self.path_data {
            let path = path_from_data(data)?;
            return Ok(sample_paths(&[path], samples_per_shape)?);
        }

        let input = self.input.as_deref().ok_or_else(|| {
            CliError::Usage("no input: pass an SVG file, '-' for stdin, or --path".to_string())
        })?;
        let svg_content = read_svg_input(input)?;
        Ok(extract_points_from_svg(&svg_content, samples_per_shape)?)
    }

    /// Sample and analyze the outline.
    pub fn load_spectrum(&self, settings: &AnimationSettings) -> Result<Spectrum> {
        let points = self.load_points(settings.samples_per_shape)?;
        eprintln!("Sampled {} points", points.len());
        Ok(Spectrum::from_points(&points, settings.display_scale)?)
    }
}

/// Read SVG content from a file or stdin ('-').
pub fn read_svg_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

/// Write text to a file, or to stdout when no path (or '-') is given.
pub fn write_text_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) if path != Path::new("-") => {
            fs::write(path, content)?;
            eprintln!("Wrote {}", path.display());
        }
        _ => {
            io::stdout().write_all(content.as_bytes())?;
        }
    }
    Ok(())
}

/// True when `path` has the given extension (case-insensitive).
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Rasterize an SVG document with resvg.
pub fn rasterize_svg(svg: &str) -> Result<RgbaImage> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| CliError::Render(format!("generated SVG did not parse: {}", e)))?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height())
        .ok_or_else(|| CliError::Render(format!("cannot allocate {}x{} pixmap", size.width(), size.height())))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    RgbaImage::from_raw(size.width(), size.height(), pixmap.take())
        .ok_or_else(|| CliError::Render("pixmap size mismatch".to_string()))
}

/// Write SVG markup, rasterizing to PNG when the output ends in `.png`.
pub fn write_svg_or_png(output: Option<&Path>, svg: &str) -> Result<()> {
    match output {
        Some(path) if has_extension(path, "png") => {
            rasterize_svg(svg)?.save(path)?;
            eprintln!("Wrote {}", path.display());
            Ok(())
        }
        _ => write_text_output(output, svg),
    }
}
