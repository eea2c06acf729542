//! Analyze command implementation.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;

use fourier_draw::{Coefficient, Spectrum};

use super::common::{SourceArgs, write_text_output};
use crate::error::Result;

/// Output format for coefficient listings.
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only list the K largest coefficients
    #[arg(long, value_name = "K")]
    pub top: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file (- for stdout, default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// A coefficient in JSON output format.
#[derive(Serialize)]
struct JsonCoefficient {
    freq: i64,
    amp: f64,
    phase: f64,
    re: f64,
    im: f64,
}

impl From<&Coefficient> for JsonCoefficient {
    fn from(c: &Coefficient) -> Self {
        Self {
            freq: c.freq,
            amp: c.amp,
            phase: c.phase,
            re: c.re,
            im: c.im,
        }
    }
}

#[derive(Serialize)]
struct JsonAnalysis {
    sample_count: usize,
    display_scale: f64,
    coefficients: Vec<JsonCoefficient>,
}

fn listed<'a>(spectrum: &'a Spectrum, top: Option<usize>) -> &'a [Coefficient] {
    let n = top.unwrap_or(spectrum.len()).min(spectrum.len());
    &spectrum.coefficients[..n]
}

fn format_text(spectrum: &Spectrum, top: Option<usize>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} samples, {} coefficients", spectrum.sample_count, spectrum.len());
    let _ = writeln!(out, "{:>6} {:>8} {:>12} {:>10}", "rank", "freq", "amp", "phase");
    for (rank, c) in listed(spectrum, top).iter().enumerate() {
        let _ = writeln!(out, "{:>6} {:>8} {:>12.6} {:>10.4}", rank + 1, c.freq, c.amp, c.phase);
    }
    out
}

fn format_json(spectrum: &Spectrum, top: Option<usize>) -> Result<String> {
    let output = JsonAnalysis {
        sample_count: spectrum.sample_count,
        display_scale: spectrum.display_scale,
        coefficients: listed(spectrum, top).iter().map(JsonCoefficient::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Execute the analyze command.
pub fn cmd_analyze(args: &AnalyzeArgs) -> Result<()> {
    let (settings, _) = args.source.settings()?;
    let spectrum = args.source.load_spectrum(&settings)?;

    let content = match args.format {
        OutputFormat::Text => format_text(&spectrum, args.top),
        OutputFormat::Json => format_json(&spectrum, args.top)?,
    };

    write_text_output(args.output.as_deref(), &content)
}
