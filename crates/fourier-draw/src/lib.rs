//! # fourier-draw
//!
//! Decompose a closed SVG outline into a Fourier series and evaluate it as
//! a chain of rotating vectors (epicycles).
//!
//! ```text
//! SVG → sampler → points → signal → spectrum → scaled coefficients → frame(t)
//! ```
//!
//! The analysis stages (`signal`, `spectrum`, `epicycle`) are pure
//! functions. `animation` and `render` are the host-side pieces: playback
//! state and SVG output for each frame.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod animation;
pub mod epicycle;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod render;
pub mod sampler;
pub mod signal;
pub mod spectrum;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use animation::{Animation, AnimationSettings};
pub use epicycle::{Circle, EpicycleFrame, endpoint_at, evaluate};
pub use error::{FourierError, Result};
pub use geometry::{Bounds, Point};
pub use pipeline::{Spectrum, analyze, reconstruct};
pub use render::{RenderStyle, render_frame_svg, render_path_svg};
pub use sampler::{FlattenedPath, PathBuilder, PathSampler};
pub use signal::{ComplexSample, build_signal};
pub use spectrum::{Coefficient, analyze_signal, scale_coefficients};
pub use svg::{
    DEFAULT_SAMPLES_PER_SHAPE, extract_paths_from_svg, extract_points_from_svg, path_from_data,
    sample_paths,
};
