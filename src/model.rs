//! Generator boundary.
//!
//! The walk only needs "latent batch in, image batch out". [`LinearGenerator`] is a small
//! deterministic generator that loads its weights from JSON so the CLI can run end to end.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::{Rng as _, SeedableRng as _, rngs::StdRng};
use rand_distr::StandardNormal;

use crate::foundation::error::{ReelError, ReelResult};
use crate::latent::batch::LatentBatch;

/// Images produced for one latent batch, `count × channels × height × width`, row-major.
///
/// Sample values are in the generator output range `[-1, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBatch {
    count: usize,
    channels: usize,
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl ImageBatch {
    /// Wrap `data` as a `count × channels × height × width` batch.
    pub fn new(
        count: usize,
        channels: usize,
        height: usize,
        width: usize,
        data: Vec<f32>,
    ) -> ReelResult<Self> {
        if count == 0 || height == 0 || width == 0 {
            return Err(ReelError::model("image batch dimensions must be non-zero"));
        }
        if channels != 1 && channels != 3 {
            return Err(ReelError::model(format!(
                "image batch must have 1 or 3 channels, got {channels}"
            )));
        }
        let expected = count * channels * height * width;
        if data.len() != expected {
            return Err(ReelError::model(format!(
                "image batch data has {} values, expected {expected}",
                data.len()
            )));
        }
        Ok(Self {
            count,
            channels,
            height,
            width,
            data,
        })
    }

    /// Number of images.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Channels per image (1 or 3).
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Planar samples of image `i` (`channels × height × width`).
    pub fn image(&self, i: usize) -> &[f32] {
        let len = self.channels * self.height * self.width;
        &self.data[i * len..(i + 1) * len]
    }

    /// All samples.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Maps latent batches to image batches.
///
/// Implementations must be deterministic for a given input and must not change between calls;
/// the walk shares one generator read-only for the whole run.
pub trait Generator {
    /// Produce one image per latent row.
    fn generate(&self, latents: &LatentBatch) -> ReelResult<ImageBatch>;
}

impl<G: Generator + ?Sized> Generator for &G {
    fn generate(&self, latents: &LatentBatch) -> ReelResult<ImageBatch> {
        (**self).generate(latents)
    }
}

/// On-disk weights for [`LinearGenerator`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearWeights {
    /// Latent dimension the weights expect.
    pub latent_size: usize,
    /// Output channels (1 or 3).
    pub channels: usize,
    /// Output images are `size × size`.
    pub size: usize,
    /// `(channels * size * size) × latent_size`, row-major.
    pub weights: Vec<f32>,
    /// One bias per output sample.
    pub bias: Vec<f32>,
}

/// Single dense layer followed by `tanh`.
#[derive(Clone, Debug)]
pub struct LinearGenerator {
    w: LinearWeights,
}

impl LinearGenerator {
    /// Build a generator, checking that the weight tensors match the declared dimensions.
    pub fn new(w: LinearWeights) -> ReelResult<Self> {
        if w.latent_size == 0 || w.size == 0 {
            return Err(ReelError::model("latent_size and size must be non-zero"));
        }
        if w.channels != 1 && w.channels != 3 {
            return Err(ReelError::model(format!(
                "channels must be 1 or 3, got {}",
                w.channels
            )));
        }
        let outputs = w.channels * w.size * w.size;
        if w.weights.len() != outputs * w.latent_size {
            return Err(ReelError::model(format!(
                "weights have {} values, expected {outputs}x{}",
                w.weights.len(),
                w.latent_size
            )));
        }
        if w.bias.len() != outputs {
            return Err(ReelError::model(format!(
                "bias has {} values, expected {outputs}",
                w.bias.len()
            )));
        }
        Ok(Self { w })
    }

    /// Parse weights from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let w: LinearWeights = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse generator weights JSON: {e}")))?;
        Self::new(w)
    }

    /// Load weights from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::model(format!("open generator weights '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Seeded random weights, scaled so outputs stay inside tanh's responsive range.
    pub fn random(latent_size: usize, channels: usize, size: usize, seed: u64) -> ReelResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let outputs = channels * size * size;
        let scale = 1.0 / (latent_size.max(1) as f32).sqrt();
        let weights = (0..outputs * latent_size)
            .map(|_| rng.sample::<f32, _>(StandardNormal) * scale)
            .collect();
        let bias = (0..outputs)
            .map(|_| rng.sample::<f32, _>(StandardNormal) * 0.1)
            .collect();
        Self::new(LinearWeights {
            latent_size,
            channels,
            size,
            weights,
            bias,
        })
    }

    /// Fail unless the weights match the configured latent and image sizes.
    pub fn expect_dims(&self, latent_size: usize, size: usize) -> ReelResult<()> {
        if self.w.latent_size != latent_size {
            return Err(ReelError::model(format!(
                "generator expects latent_size {}, configured {latent_size}",
                self.w.latent_size
            )));
        }
        if self.w.size != size {
            return Err(ReelError::model(format!(
                "generator produces {0}x{0} images, configured size {size}",
                self.w.size
            )));
        }
        Ok(())
    }

    /// Borrow the loaded weights.
    pub fn weights(&self) -> &LinearWeights {
        &self.w
    }
}

impl Generator for LinearGenerator {
    fn generate(&self, latents: &LatentBatch) -> ReelResult<ImageBatch> {
        if latents.dim() != self.w.latent_size {
            return Err(ReelError::model(format!(
                "latent dim {} does not match generator latent_size {}",
                latents.dim(),
                self.w.latent_size
            )));
        }
        let l = self.w.latent_size;
        let outputs = self.w.bias.len();
        let mut data = Vec::with_capacity(latents.rows() * outputs);
        for r in 0..latents.rows() {
            let z = latents.row(r);
            for (o, b) in self.w.bias.iter().enumerate() {
                let row = &self.w.weights[o * l..(o + 1) * l];
                let acc: f32 = row.iter().zip(z).map(|(w, z)| w * z).sum();
                data.push((acc + b).tanh());
            }
        }
        ImageBatch::new(
            latents.rows(),
            self.w.channels,
            self.w.size,
            self.w.size,
            data,
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/model/linear.rs"]
mod tests;
