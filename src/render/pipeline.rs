use crate::config::RunConfig;
use crate::encode::grid::GridOpts;
use crate::encode::png::PngDirSink;
use crate::foundation::error::ReelResult;
use crate::latent::sampler::GaussianSampler;
use crate::model::Generator;
use crate::render::walk::{LatentWalk, WalkStats};
use crate::schedule::compute_schedule;

/// Build the seeded sampler described by `cfg`.
pub fn sampler_from_config(cfg: &RunConfig) -> ReelResult<GaussianSampler> {
    let sampler = GaussianSampler::new(cfg.num_samples, cfg.latent_size, cfg.std, cfg.seed)?;
    match cfg.truncation {
        Some(limit) => sampler.with_truncation(limit),
        None => Ok(sampler),
    }
}

/// Render the animation described by `cfg` into numbered PNG frames under `cfg.out_dir`.
///
/// Timing and sampler parameters are validated before the output directory is touched.
pub fn render_to_dir<G: Generator + ?Sized>(cfg: &RunConfig, model: &G) -> ReelResult<WalkStats> {
    let timing = cfg.timing()?;
    let schedule = compute_schedule(&timing);
    let mut sampler = sampler_from_config(cfg)?;
    let walk = LatentWalk::new(schedule, cfg.walk_opts()?);

    tracing::info!(
        total_frames = schedule.total_frames,
        transitions = schedule.total_transitions,
        out_dir = %cfg.out_dir.display(),
        "rendering latent walk"
    );

    let mut sink = PngDirSink::new(
        &cfg.out_dir,
        GridOpts {
            nrow: None,
            padding: cfg.padding,
        },
    );
    walk.run(&mut sampler, model, &mut sink)
}
