//! Error type for the analysis pipeline.
//!
//! Every stage either succeeds completely or returns one of these. Nothing
//! is retried: the transform is deterministic.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FourierError {
    /// The geometry source produced no usable points.
    #[error("no valid paths found in SVG")]
    InvalidGeometry,

    /// All points coincide, so the signal cannot be normalized.
    #[error("degenerate geometry: all {points} points coincide")]
    DegenerateSignal { points: usize },

    /// The transform was asked to analyze a zero-length signal.
    #[error("cannot analyze an empty signal")]
    EmptySignal,

    /// The SVG document could not be parsed.
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    /// A raw `d` attribute could not be parsed.
    #[error("path data error: {0}")]
    PathData(String),
}

pub type Result<T> = std::result::Result<T, FourierError>;
