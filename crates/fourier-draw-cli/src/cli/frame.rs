//! Frame command implementation.

use std::path::PathBuf;

use clap::Args;

use fourier_draw::{evaluate, render_frame_svg, Point};

use super::common::{SourceArgs, write_svg_or_png};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct FrameArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Time within the period (0 = start, 1 = one full loop)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub time: f64,

    /// Number of epicycles to draw
    #[arg(short = 'c', long, value_name = "N", allow_negative_numbers = true)]
    pub circles: Option<i64>,

    /// Output file: .svg or .png (default: SVG on stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Execute the frame command.
pub fn cmd_frame(args: &FrameArgs) -> Result<()> {
    let (mut settings, style) = args.source.settings()?;
    if let Some(circles) = args.circles {
        settings.num_circles = circles;
    }

    let spectrum = args.source.load_spectrum(&settings)?;
    let frame = evaluate(args.time, &spectrum.display, settings.num_circles);
    eprintln!(
        "t = {:.3}: {} epicycles, endpoint ({:.2}, {:.2})",
        args.time,
        frame.circles.len(),
        frame.endpoint.x,
        frame.endpoint.y
    );

    let svg = render_frame_svg(&frame, &Vec::<Point>::new(), &style);
    write_svg_or_png(args.output.as_deref(), &svg)
}
