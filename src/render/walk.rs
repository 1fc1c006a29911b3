use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{ReelError, ReelResult};
use crate::latent::batch::LatentBatch;
use crate::latent::sampler::LatentSampler;
use crate::model::{Generator, ImageBatch};
use crate::schedule::Schedule;

/// Where the walk checks the global `total_frames` cutoff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CutoffPolicy {
    /// Check before every frame. The run emits exactly `total_frames` frames.
    #[default]
    PerFrame,
    /// Check only before starting a transition. The last transition always runs to completion,
    /// so the run can exceed `total_frames` by up to `steps + hold - 1` frames.
    TransitionBoundary,
}

/// Options for [`LatentWalk`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkOpts {
    /// Cutoff placement.
    pub cutoff: CutoffPolicy,
    /// Frame rate reported to the sink.
    pub fps: Fps,
}

impl Default for WalkOpts {
    fn default() -> Self {
        Self {
            cutoff: CutoffPolicy::PerFrame,
            fps: Fps { num: 30, den: 1 },
        }
    }
}

/// Counters collected during a walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct WalkStats {
    /// Frames handed to the sink.
    pub frames_emitted: u64,
    /// Generator calls (one per walk step plus one per held target).
    pub model_invocations: u64,
    /// Targets drawn.
    pub transitions_started: u64,
    /// Transitions whose walk and hold frames were all emitted.
    pub transitions_completed: u64,
}

/// Drives a generator along straight lines between random latent points.
///
/// Every transition walks `steps_per_transition` frames from the current point toward a fresh
/// target (excluding the target itself), then shows the target for `hold_frames_per_transition`
/// frames. The target image is generated once and reused for all hold frames.
#[derive(Clone, Copy, Debug)]
pub struct LatentWalk {
    schedule: Schedule,
    opts: WalkOpts,
}

impl LatentWalk {
    /// Create a walk over a precomputed schedule.
    pub fn new(schedule: Schedule, opts: WalkOpts) -> Self {
        Self { schedule, opts }
    }

    /// The schedule this walk follows.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Run the walk to completion.
    ///
    /// Frames are numbered from [`FrameIndex::FIRST`]. Errors from the sampler, generator or
    /// sink abort the run immediately; frames already pushed stay pushed and `end` is not
    /// called.
    #[tracing::instrument(
        skip_all,
        fields(
            total_frames = self.schedule.total_frames,
            steps = self.schedule.steps_per_transition,
            hold = self.schedule.hold_frames_per_transition,
        )
    )]
    pub fn run<S, G, K>(&self, sampler: &mut S, model: &G, sink: &mut K) -> ReelResult<WalkStats>
    where
        S: LatentSampler + ?Sized,
        G: Generator + ?Sized,
        K: FrameSink + ?Sized,
    {
        let total = self.schedule.total_frames;
        let steps = self.schedule.steps_per_transition;
        let hold = self.schedule.hold_frames_per_transition;
        if total > 0 && steps + hold == 0 {
            return Err(ReelError::validation(
                "schedule has frames to emit but zero frames per transition",
            ));
        }

        let (num_samples, _) = sampler.shape();
        sink.begin(SinkConfig {
            total_frames: total,
            fps: self.opts.fps,
            num_samples,
        })?;

        let mut out = Emitter {
            sink,
            next: FrameIndex::FIRST,
            limit: match self.opts.cutoff {
                CutoffPolicy::PerFrame => Some(total),
                CutoffPolicy::TransitionBoundary => None,
            },
            stats: WalkStats::default(),
        };

        let mut current = sampler.sample()?;
        while out.stats.frames_emitted < total {
            let target = sampler.sample()?;
            out.stats.transitions_started += 1;
            let first_frame = out.stats.frames_emitted;

            if steps > 0 {
                let direction = current.direction_to(&target)?;
                for i in 0..steps {
                    if !out.has_budget() {
                        break;
                    }
                    let point = current.walk_point(&direction, steps, i)?;
                    let images = out.generate(model, &point)?;
                    out.emit(&images)?;
                }
            }

            if out.has_budget() {
                let held = out.generate(model, &target)?;
                for _ in 0..hold {
                    if !out.has_budget() {
                        break;
                    }
                    out.emit(&held)?;
                }
            }

            if out.stats.frames_emitted - first_frame == steps + hold {
                out.stats.transitions_completed += 1;
            }
            current = target;

            tracing::info!(
                frames = out.stats.frames_emitted,
                transition = out.stats.transitions_started,
                "generated frames"
            );
        }

        let stats = out.stats;
        out.sink.end()?;
        Ok(stats)
    }
}

struct Emitter<'a, K: ?Sized> {
    sink: &'a mut K,
    next: FrameIndex,
    limit: Option<u64>,
    stats: WalkStats,
}

impl<K: FrameSink + ?Sized> Emitter<'_, K> {
    fn has_budget(&self) -> bool {
        self.limit.is_none_or(|l| self.stats.frames_emitted < l)
    }

    fn generate<G: Generator + ?Sized>(
        &mut self,
        model: &G,
        latents: &LatentBatch,
    ) -> ReelResult<ImageBatch> {
        let images = model.generate(latents)?;
        self.stats.model_invocations += 1;
        if images.count() != latents.rows() {
            return Err(ReelError::model(format!(
                "generator returned {} images for {} latent rows",
                images.count(),
                latents.rows()
            )));
        }
        tracing::trace!(invocation = self.stats.model_invocations, "generator call");
        Ok(images)
    }

    fn emit(&mut self, images: &ImageBatch) -> ReelResult<()> {
        self.sink.push_frame(self.next, images)?;
        self.next = self.next.next();
        self.stats.frames_emitted += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/walk.rs"]
mod tests;
