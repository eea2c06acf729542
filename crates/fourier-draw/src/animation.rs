//! Playback state for the epicycle animation.
//!
//! The analysis functions are pure; everything that changes from frame to
//! frame (time, play/pause, the trail) lives here in a caller-owned
//! [`Animation`]. The host calls [`Animation::tick`] once per display
//! refresh. There is no timer inside the library.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::epicycle::{EpicycleFrame, evaluate};
use crate::geometry::Point;
use crate::pipeline::Spectrum;
use crate::svg::DEFAULT_SAMPLES_PER_SHAPE;

/// Time advanced per tick at speed 1.0; one full period takes 1000 ticks.
pub const TIME_STEP: f64 = 0.001;

/// Trail length at 100%.
pub const MAX_TRAIL_POINTS: usize = 1000;

/// Tunable playback and analysis settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSettings {
    /// How many epicycles to draw (largest first).
    pub num_circles: i64,
    /// Multiplier from unit-scale amplitudes to display units.
    pub display_scale: f64,
    /// Playback speed multiplier.
    pub speed: f64,
    /// Trail length as a percentage of [`MAX_TRAIL_POINTS`].
    pub trail_percent: u32,
    pub show_circles: bool,
    pub show_vectors: bool,
    /// Points sampled from each SVG shape.
    pub samples_per_shape: usize,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            num_circles: 50,
            display_scale: 300.0,
            speed: 1.0,
            trail_percent: 100,
            show_circles: true,
            show_vectors: true,
            samples_per_shape: DEFAULT_SAMPLES_PER_SHAPE,
        }
    }
}

impl AnimationSettings {
    pub fn with_num_circles(mut self, num_circles: i64) -> Self {
        self.num_circles = num_circles;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_trail_percent(mut self, trail_percent: u32) -> Self {
        self.trail_percent = trail_percent;
        self
    }

    pub fn with_display_scale(mut self, display_scale: f64) -> Self {
        self.display_scale = display_scale;
        self
    }

    /// Trail capacity implied by `trail_percent`.
    pub fn max_trail_points(&self) -> usize {
        self.trail_percent as usize * MAX_TRAIL_POINTS / 100
    }
}

/// Caller-owned animation context.
#[derive(Debug, Clone)]
pub struct Animation {
    spectrum: Option<Arc<Spectrum>>,
    /// Phase in `[0, 1]`; one unit is one trip around the outline.
    pub time: f64,
    pub playing: bool,
    trail: VecDeque<Point>,
    pub settings: AnimationSettings,
}

impl Animation {
    pub fn new(settings: AnimationSettings) -> Self {
        Self {
            spectrum: None,
            time: 0.0,
            playing: true,
            trail: VecDeque::new(),
            settings,
        }
    }

    /// Replace the spectrum being animated and restart from `t = 0`.
    ///
    /// The new spectrum is fully built before this is called, so a frame
    /// never sees a half-updated coefficient list. Callers that fail to
    /// build one simply don't call `load` and keep the old animation.
    pub fn load(&mut self, spectrum: Spectrum) {
        log::debug!("loaded spectrum with {} coefficients", spectrum.len());
        self.spectrum = Some(Arc::new(spectrum));
        self.reset();
    }

    pub fn spectrum(&self) -> Option<&Spectrum> {
        self.spectrum.as_deref()
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
        self.trail.clear();
        self.playing = true;
    }

    pub fn toggle_playing(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Trail of past endpoints, oldest first.
    pub fn trail(&self) -> &VecDeque<Point> {
        &self.trail
    }

    /// Number of epicycles actually drawn.
    pub fn epicycles_used(&self) -> usize {
        let available = self.spectrum.as_ref().map_or(0, |s| s.len());
        usize::try_from(self.settings.num_circles)
            .unwrap_or(0)
            .min(available)
    }

    /// Progress through the current period as a whole percentage.
    pub fn progress_percent(&self) -> u32 {
        (self.time * 100.0).floor() as u32
    }

    /// Advance one frame and evaluate the epicycles.
    ///
    /// Returns `None` until a spectrum is loaded. While paused the time and
    /// trail stay put but the frame is still produced for redrawing.
    pub fn tick(&mut self) -> Option<EpicycleFrame> {
        let spectrum = Arc::clone(self.spectrum.as_ref()?);

        if self.playing {
            self.time += TIME_STEP * self.settings.speed;
            if self.time > 1.0 {
                // The trail is kept across periods.
                self.time = 0.0;
            }
        }

        let frame = evaluate(self.time, &spectrum.display, self.settings.num_circles);

        if self.playing {
            self.trail.push_back(frame.endpoint);
            let max_points = self.settings.max_trail_points();
            while self.trail.len() > max_points {
                self.trail.pop_front();
            }
        }

        Some(frame)
    }
}
