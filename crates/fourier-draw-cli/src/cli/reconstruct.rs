//! Reconstruct command implementation.

use std::path::PathBuf;

use clap::Args;

use fourier_draw::{reconstruct, render_path_svg};

use super::common::{SourceArgs, write_svg_or_png};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ReconstructArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of epicycles to sum
    #[arg(short = 'c', long, value_name = "N", allow_negative_numbers = true)]
    pub circles: Option<i64>,

    /// Points traced along one period
    #[arg(long, default_value_t = 1000)]
    pub steps: usize,

    /// Output file: .svg or .png (default: SVG on stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Execute the reconstruct command.
pub fn cmd_reconstruct(args: &ReconstructArgs) -> Result<()> {
    let (mut settings, style) = args.source.settings()?;
    if let Some(circles) = args.circles {
        settings.num_circles = circles;
    }

    let spectrum = args.source.load_spectrum(&settings)?;
    let outline = reconstruct(&spectrum.display, settings.num_circles, args.steps);
    eprintln!(
        "Traced {} points with {} of {} epicycles",
        outline.len(),
        settings.num_circles.clamp(0, spectrum.len() as i64),
        spectrum.len()
    );

    let svg = render_path_svg(&outline, &style);
    write_svg_or_png(args.output.as_deref(), &svg)
}
