use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::grid::{GridOpts, compose_grid};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ReelError, ReelResult};
use crate::model::ImageBatch;

/// Writes every frame as `<out_dir>/<index>.png`, one image grid per frame.
#[derive(Debug)]
pub struct PngDirSink {
    out_dir: PathBuf,
    grid: GridOpts,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    written: u64,
}

impl PngDirSink {
    /// Create a sink writing into `out_dir` (created on `begin`).
    pub fn new(out_dir: impl Into<PathBuf>, grid: GridOpts) -> Self {
        Self {
            out_dir: out_dir.into(),
            grid,
            cfg: None,
            last_idx: None,
            written: 0,
        }
    }

    /// Output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Path the frame `idx` is written to.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.out_dir.join(format!("{}.png", idx.file_stem()))
    }

    /// Frames written since `begin`.
    pub fn frames_written(&self) -> u64 {
        self.written
    }
}

impl FrameSink for PngDirSink {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        std::fs::create_dir_all(&self.out_dir).with_context(|| {
            format!(
                "failed to create output directory '{}'",
                self.out_dir.display()
            )
        })?;
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, images: &ImageBatch) -> ReelResult<()> {
        if self.cfg.is_none() {
            return Err(ReelError::sink("png sink not started"));
        }
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(ReelError::sink("png sink received out-of-order frame index"));
        }
        self.last_idx = Some(idx);

        let grid = compose_grid(images, self.grid)?;
        let path = self.frame_path(idx);
        grid.save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| ReelError::sink(format!("write png '{}': {e}", path.display())))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        if self.cfg.take().is_none() {
            return Err(ReelError::sink("png sink not started"));
        }
        tracing::info!(
            frames = self.written,
            out_dir = %self.out_dir.display(),
            "frames written"
        );
        Ok(())
    }
}
