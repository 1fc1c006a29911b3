use rand::{Rng as _, SeedableRng as _, rngs::StdRng};
use rand_distr::StandardNormal;

use crate::foundation::error::{ReelError, ReelResult};
use crate::latent::batch::LatentBatch;

/// Source of latent points for a walk.
///
/// Each call returns a fresh batch drawn independently of previous calls; the only state
/// carried between calls is the random stream itself.
pub trait LatentSampler {
    /// `(rows, dim)` of every batch this sampler returns.
    fn shape(&self) -> (usize, usize);
    /// Draw the next batch.
    fn sample(&mut self) -> ReelResult<LatentBatch>;
}

/// Smallest accepted truncation limit. Below it almost every draw is rejected.
const MIN_TRUNCATION: f32 = 0.1;

/// Seeded zero-mean normal sampler, scaled by `std`.
#[derive(Clone, Debug)]
pub struct GaussianSampler {
    rows: usize,
    dim: usize,
    std: f32,
    truncation: Option<f32>,
    rng: StdRng,
}

impl GaussianSampler {
    /// Create a sampler for `num_samples × latent_size` batches.
    pub fn new(num_samples: usize, latent_size: usize, std: f32, seed: u64) -> ReelResult<Self> {
        if num_samples == 0 || latent_size == 0 {
            return Err(ReelError::validation(
                "num_samples and latent_size must be non-zero",
            ));
        }
        if !std.is_finite() || std < 0.0 {
            return Err(ReelError::validation("std must be finite and >= 0"));
        }
        Ok(Self {
            rows: num_samples,
            dim: latent_size,
            std,
            truncation: None,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Redraw any standard-normal value with `|z| > limit` before scaling by `std`.
    ///
    /// `limit` must be finite and at least `0.1`.
    pub fn with_truncation(mut self, limit: f32) -> ReelResult<Self> {
        if !limit.is_finite() || limit < MIN_TRUNCATION {
            return Err(ReelError::validation(format!(
                "truncation limit must be >= {MIN_TRUNCATION}"
            )));
        }
        self.truncation = Some(limit);
        Ok(self)
    }

    /// Scale applied to every standard-normal draw.
    pub fn std(&self) -> f32 {
        self.std
    }

    fn draw(&mut self) -> f32 {
        loop {
            let z: f32 = self.rng.sample(StandardNormal);
            match self.truncation {
                Some(limit) if z.abs() > limit => continue,
                _ => return z,
            }
        }
    }
}

impl LatentSampler for GaussianSampler {
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.dim)
    }

    fn sample(&mut self) -> ReelResult<LatentBatch> {
        let n = self.rows * self.dim;
        let mut data = Vec::with_capacity(n);
        for _ in 0..n {
            let z = self.draw();
            data.push(z * self.std);
        }
        LatentBatch::new(self.rows, self.dim, data)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/latent/sampler.rs"]
mod tests;
