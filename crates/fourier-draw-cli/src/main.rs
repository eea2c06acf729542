//! fourier-draw - draw SVG outlines with Fourier epicycles
//!
//! Usage:
//!   fourier-draw analyze <svg> [--top K] [-f json]     List coefficients
//!   fourier-draw frame <svg> -t 0.25 -o frame.png      Render one frame
//!   fourier-draw animate <svg> -o drawing.gif          Render the animation
//!   fourier-draw reconstruct <svg> -c 20 -o out.svg    Trace the approximation
//!
//! Use '-' as the SVG argument to read from stdin, or `--path "M ..."` to
//! analyze raw path data.

mod cli;
mod error;

use clap::Parser;

use cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
