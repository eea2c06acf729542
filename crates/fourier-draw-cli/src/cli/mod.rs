//! CLI command implementations.
//!
//! - `analyze` - Print the ranked Fourier coefficients of an outline
//! - `frame` - Render a single epicycle frame (SVG or PNG)
//! - `animate` - Run the animation loop and write a GIF or PNG sequence
//! - `reconstruct` - Draw the outline traced by the first N epicycles

pub mod analyze;
pub mod animate;
pub mod common;
pub mod config;
pub mod frame;
pub mod reconstruct;

use clap::{Parser, Subcommand};

pub use analyze::{AnalyzeArgs, cmd_analyze};
pub use animate::{AnimateArgs, cmd_animate};
pub use frame::{FrameArgs, cmd_frame};
pub use reconstruct::{ReconstructArgs, cmd_reconstruct};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "fourier-draw")]
#[command(about = "Draw SVG outlines with Fourier epicycles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the Fourier coefficients of an outline
    Analyze(AnalyzeArgs),
    /// Render one frame of the epicycle animation
    Frame(FrameArgs),
    /// Render the animation as a GIF or a directory of PNG frames
    Animate(AnimateArgs),
    /// Render the outline traced by the first N epicycles
    Reconstruct(ReconstructArgs),
}

impl Cli {
    pub fn run(self) -> crate::error::Result<()> {
        match self.command {
            Command::Analyze(args) => cmd_analyze(&args),
            Command::Frame(args) => cmd_frame(&args),
            Command::Animate(args) => cmd_animate(&args),
            Command::Reconstruct(args) => cmd_reconstruct(&args),
        }
    }
}
