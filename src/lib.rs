//! latent-reel animates a generative model's latent space.
//!
//! A run draws random latent points, walks a straight line between consecutive points and
//! writes one numbered image per step, holding on every destination for a while. Timing is
//! fixed up front by [`compute_schedule`]; [`LatentWalk`] drives a [`Generator`] and hands every
//! frame to a [`FrameSink`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Run configuration.
pub mod config;
/// Frame sinks.
pub mod encode;
/// Latent batches and samplers.
pub mod latent;
/// Generator boundary.
pub mod model;
/// Frame generation.
pub mod render;
/// Interpolation scheduling.
pub mod schedule;

pub use crate::foundation::core::{Fps, FrameIndex};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::config::RunConfig;
pub use crate::encode::grid::{GridOpts, compose_grid};
pub use crate::encode::png::PngDirSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::latent::batch::LatentBatch;
pub use crate::latent::sampler::{GaussianSampler, LatentSampler};
pub use crate::model::{Generator, ImageBatch, LinearGenerator, LinearWeights};
pub use crate::render::pipeline::{render_to_dir, sampler_from_config};
pub use crate::render::walk::{CutoffPolicy, LatentWalk, WalkOpts, WalkStats};
pub use crate::schedule::{Schedule, TimingConfig, compute_schedule};
