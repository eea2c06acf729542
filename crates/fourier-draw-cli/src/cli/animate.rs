//! Animate command implementation.
//!
//! Drives the library's [`Animation`] the way a display loop would: one
//! `tick()` per refresh, rendering every `step_ticks`-th frame.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use fourier_draw::{Animation, render_frame_svg};

use super::common::{SourceArgs, has_extension, rasterize_svg};
use crate::error::{CliError, Result};

#[derive(Args, Debug)]
pub struct AnimateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of frames to write
    #[arg(long, default_value_t = 100)]
    pub frames: usize,

    /// Animation ticks between written frames (1000 ticks = one loop at speed 1)
    #[arg(long, default_value_t = 10)]
    pub step_ticks: usize,

    /// Playback speed multiplier
    #[arg(long)]
    pub speed: Option<f64>,

    /// Number of epicycles to draw
    #[arg(short = 'c', long, value_name = "N", allow_negative_numbers = true)]
    pub circles: Option<i64>,

    /// Trail length in percent of 1000 points
    #[arg(long, value_name = "PCT")]
    pub trail: Option<u32>,

    /// Delay between GIF frames in milliseconds
    #[arg(long, default_value_t = 40)]
    pub delay_ms: u32,

    /// Output: a .gif file, or a directory for numbered PNG frames
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,
}

/// Where rendered frames go.
enum FrameSink {
    Gif(GifEncoder<BufWriter<File>>, u32),
    Pngs(PathBuf),
}

impl FrameSink {
    fn open(output: &Path, delay_ms: u32) -> Result<Self> {
        if has_extension(output, "gif") {
            let file = BufWriter::new(File::create(output)?);
            let mut encoder = GifEncoder::new_with_speed(file, 10);
            encoder.set_repeat(Repeat::Infinite)?;
            Ok(FrameSink::Gif(encoder, delay_ms))
        } else {
            fs::create_dir_all(output)?;
            Ok(FrameSink::Pngs(output.to_path_buf()))
        }
    }

    fn write(&mut self, index: usize, image: RgbaImage) -> Result<()> {
        match self {
            FrameSink::Gif(encoder, delay_ms) => {
                let delay = Delay::from_numer_denom_ms(*delay_ms, 1);
                encoder.encode_frame(Frame::from_parts(image, 0, 0, delay))?;
            }
            FrameSink::Pngs(dir) => {
                image.save(dir.join(format!("frame_{:04}.png", index)))?;
            }
        }
        Ok(())
    }
}

/// Execute the animate command.
pub fn cmd_animate(args: &AnimateArgs) -> Result<()> {
    if args.step_ticks == 0 {
        return Err(CliError::Usage("--step-ticks must be at least 1".to_string()));
    }

    let (mut settings, style) = args.source.settings()?;
    if let Some(circles) = args.circles {
        settings.num_circles = circles;
    }
    if let Some(speed) = args.speed {
        settings.speed = speed;
    }
    if let Some(trail) = args.trail {
        settings.trail_percent = trail;
    }

    let spectrum = args.source.load_spectrum(&settings)?;
    let mut animation = Animation::new(settings);
    animation.load(spectrum);

    eprintln!(
        "Rendering {} frames with {} epicycles",
        args.frames,
        animation.epicycles_used()
    );

    let mut sink = FrameSink::open(&args.output, args.delay_ms)?;
    let start = Instant::now();

    for index in 0..args.frames {
        let mut frame = None;
        for _ in 0..args.step_ticks {
            frame = animation.tick();
        }
        let Some(frame) = frame else {
            break;
        };

        let svg = render_frame_svg(&frame, animation.trail(), &style);
        sink.write(index, rasterize_svg(&svg)?)?;
        log::debug!("frame {} at {}%", index, animation.progress_percent());
    }

    eprintln!(
        "Wrote {} in {:.1}s",
        args.output.display(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
