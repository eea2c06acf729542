//! JSON settings file.
//!
//! Every field is optional; anything missing keeps its default. Command-line
//! flags are applied after the file, so they win.
//!
//! ```json
//! { "num_circles": 120, "speed": 2.0, "trail_percent": 60 }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use fourier_draw::AnimationSettings;

use crate::error::Result;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub num_circles: Option<i64>,
    pub display_scale: Option<f64>,
    pub speed: Option<f64>,
    pub trail_percent: Option<u32>,
    pub show_circles: Option<bool>,
    pub show_vectors: Option<bool>,
    pub samples_per_shape: Option<usize>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl SettingsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Overlay the fields present in the file onto `settings`.
    pub fn apply(&self, mut settings: AnimationSettings) -> AnimationSettings {
        if let Some(v) = self.num_circles {
            settings.num_circles = v;
        }
        if let Some(v) = self.display_scale {
            settings.display_scale = v;
        }
        if let Some(v) = self.speed {
            settings.speed = v;
        }
        if let Some(v) = self.trail_percent {
            settings.trail_percent = v;
        }
        if let Some(v) = self.show_circles {
            settings.show_circles = v;
        }
        if let Some(v) = self.show_vectors {
            settings.show_vectors = v;
        }
        if let Some(v) = self.samples_per_shape {
            settings.samples_per_shape = v;
        }
        settings
    }
}
