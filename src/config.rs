//! Run configuration.
//!
//! Defaults match the classic latent-interpolation script: 64 samples of a 512-d latent,
//! 128 px images, one minute of 3 s walks with 1 s holds at 30 fps.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::walk::{CutoffPolicy, WalkOpts};
use crate::schedule::TimingConfig;

/// Everything needed to render one animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Generator weights file. Required for rendering.
    pub generator_file: Option<PathBuf>,
    /// Latent dimension.
    pub latent_size: usize,
    /// Images per frame (preferably a square number).
    pub num_samples: usize,
    /// Generated image size in pixels.
    pub size: usize,
    /// Animation length in minutes.
    pub time_minutes: f64,
    /// Standard deviation of the drawn latent points.
    pub std: f32,
    /// Optional truncation of standard-normal draws (before scaling by `std`).
    pub truncation: Option<f32>,
    /// Seconds to walk from one point to the next.
    pub traversal_time: f64,
    /// Seconds to hold each point.
    pub static_time: f64,
    /// Frames per second.
    pub fps: u32,
    /// Directory for the numbered frames.
    pub out_dir: PathBuf,
    /// Sampler seed.
    pub seed: u64,
    /// Where the frame budget is enforced.
    pub cutoff: CutoffPolicy,
    /// Grid padding in pixels.
    pub padding: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generator_file: None,
            latent_size: 512,
            num_samples: 64,
            size: 128,
            time_minutes: 1.0,
            std: 1.0,
            truncation: None,
            traversal_time: 3.0,
            static_time: 1.0,
            fps: 30,
            out_dir: PathBuf::from("interp_animation_frames"),
            seed: 3,
            cutoff: CutoffPolicy::PerFrame,
            padding: 2,
        }
    }
}

impl RunConfig {
    /// Parse a config from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse run config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open run config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validated timing parameters.
    pub fn timing(&self) -> ReelResult<TimingConfig> {
        TimingConfig::new(
            self.time_minutes,
            self.traversal_time,
            self.static_time,
            Fps::integer(self.fps)?,
        )
    }

    /// Walk options derived from this config.
    pub fn walk_opts(&self) -> ReelResult<WalkOpts> {
        Ok(WalkOpts {
            cutoff: self.cutoff,
            fps: Fps::integer(self.fps)?,
        })
    }

    /// The weights path, or a validation error when it is missing.
    pub fn require_generator_file(&self) -> ReelResult<&Path> {
        self.generator_file
            .as_deref()
            .ok_or_else(|| ReelError::validation("generator_file is required"))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/run.rs"]
mod tests;
