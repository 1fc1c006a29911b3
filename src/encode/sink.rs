use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{ReelError, ReelResult};
use crate::model::ImageBatch;

/// Configuration provided to a [`FrameSink`] before the first frame of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    /// Frames the run is scheduled to emit.
    pub total_frames: u64,
    /// Output frames-per-second (for sinks that record it).
    pub fps: Fps,
    /// Images per frame.
    pub num_samples: usize,
}

/// Sink contract for consuming frames in output order.
///
/// Ordering contract: `push_frame` is called with strictly increasing, gap-free `FrameIndex`
/// values starting at [`FrameIndex::FIRST`]. The same image batch may be pushed for several
/// consecutive indices.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed. Sinks create output locations here.
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()>;
    /// Persist one frame.
    fn push_frame(&mut self, idx: FrameIndex, images: &ImageBatch) -> ReelResult<()>;
    /// Called once after the last frame of a successful run.
    fn end(&mut self) -> ReelResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    ended: bool,
    /// Frames in output order.
    pub(crate) frames: Vec<(FrameIndex, ImageBatch)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, ImageBatch)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.cfg = Some(cfg);
        self.ended = false;
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, images: &ImageBatch) -> ReelResult<()> {
        if self.cfg.is_none() {
            return Err(ReelError::sink("in-memory sink not started"));
        }
        if let Some((last, _)) = self.frames.last()
            && idx.0 <= last.0
        {
            return Err(ReelError::sink("in-memory sink received out-of-order frame index"));
        }
        self.frames.push((idx, images.clone()));
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.ended = true;
        Ok(())
    }
}
