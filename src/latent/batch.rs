use crate::foundation::error::{ReelError, ReelResult};

/// A batch of latent vectors, `rows × dim`, stored row-major.
///
/// One row per sample shown in a frame. Batches are never mutated after construction; every
/// arithmetic helper returns a new batch.
#[derive(Clone, Debug, PartialEq)]
pub struct LatentBatch {
    rows: usize,
    dim: usize,
    data: Vec<f32>,
}

impl LatentBatch {
    /// Wrap `data` as a `rows × dim` batch.
    pub fn new(rows: usize, dim: usize, data: Vec<f32>) -> ReelResult<Self> {
        if rows == 0 || dim == 0 {
            return Err(ReelError::validation(
                "latent batch rows and dim must be non-zero",
            ));
        }
        if data.len() != rows * dim {
            return Err(ReelError::validation(format!(
                "latent batch data has {} values, expected {rows}x{dim}",
                data.len()
            )));
        }
        Ok(Self { rows, dim, data })
    }

    /// Number of latent vectors in the batch.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Latent dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// All values, row-major.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// One latent vector.
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Element-wise `target - self`.
    pub fn direction_to(&self, target: &LatentBatch) -> ReelResult<LatentBatch> {
        self.check_same_shape(target)?;
        let data = self
            .data
            .iter()
            .zip(&target.data)
            .map(|(c, t)| t - c)
            .collect();
        Ok(Self {
            rows: self.rows,
            dim: self.dim,
            data,
        })
    }

    /// Point `i` of a `steps`-step walk from `self` along `direction`:
    /// `self + (direction / steps) * i`.
    ///
    /// `steps` must be non-zero; callers skip the walk entirely for zero-step schedules.
    pub fn walk_point(
        &self,
        direction: &LatentBatch,
        steps: u64,
        i: u64,
    ) -> ReelResult<LatentBatch> {
        if steps == 0 {
            return Err(ReelError::validation("walk_point requires steps > 0"));
        }
        self.check_same_shape(direction)?;
        let steps = steps as f32;
        let i = i as f32;
        let data = self
            .data
            .iter()
            .zip(&direction.data)
            .map(|(c, d)| c + (d / steps) * i)
            .collect();
        Ok(Self {
            rows: self.rows,
            dim: self.dim,
            data,
        })
    }

    fn check_same_shape(&self, other: &LatentBatch) -> ReelResult<()> {
        if self.rows != other.rows || self.dim != other.dim {
            return Err(ReelError::validation(format!(
                "latent batch shape mismatch: {}x{} vs {}x{}",
                self.rows, self.dim, other.rows, other.dim
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/latent/batch.rs"]
mod tests;
