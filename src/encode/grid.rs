use image::{Rgba, RgbaImage};

use crate::foundation::error::{ReelError, ReelResult};
use crate::model::ImageBatch;

/// Layout options for [`compose_grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridOpts {
    /// Images per row. `None` uses `floor(sqrt(count))`.
    pub nrow: Option<usize>,
    /// Black border between and around tiles, in pixels.
    pub padding: u32,
}

impl Default for GridOpts {
    fn default() -> Self {
        Self {
            nrow: None,
            padding: 2,
        }
    }
}

/// Lay the batch out as one opaque RGBA image, row by row.
///
/// Samples are mapped from `[-1, 1]` to `[0, 255]` (`clamp(v / 2 + 0.5) * 255`, rounded).
/// Single-channel images are replicated across RGB.
pub fn compose_grid(batch: &ImageBatch, opts: GridOpts) -> ReelResult<RgbaImage> {
    let n = batch.count();
    let per_row = opts
        .nrow
        .unwrap_or_else(|| (n as f64).sqrt().floor() as usize)
        .clamp(1, n);
    let rows = n.div_ceil(per_row);

    let tile_w = to_u32(batch.width())?;
    let tile_h = to_u32(batch.height())?;
    let pad = opts.padding;
    let cell_w = tile_w + pad;
    let cell_h = tile_h + pad;
    let out_w = cell_w
        .checked_mul(to_u32(per_row)?)
        .and_then(|w| w.checked_add(pad))
        .ok_or_else(|| ReelError::sink("grid width overflows u32"))?;
    let out_h = cell_h
        .checked_mul(to_u32(rows)?)
        .and_then(|h| h.checked_add(pad))
        .ok_or_else(|| ReelError::sink("grid height overflows u32"))?;

    let mut out = RgbaImage::from_pixel(out_w, out_h, Rgba([0, 0, 0, 255]));
    let plane = batch.width() * batch.height();

    for k in 0..n {
        let img = batch.image(k);
        let x0 = (k % per_row) as u32 * cell_w + pad;
        let y0 = (k / per_row) as u32 * cell_h + pad;
        for y in 0..tile_h {
            for x in 0..tile_w {
                let p = y as usize * batch.width() + x as usize;
                let px = if batch.channels() == 1 {
                    let v = to_u8(img[p]);
                    [v, v, v, 255]
                } else {
                    [
                        to_u8(img[p]),
                        to_u8(img[plane + p]),
                        to_u8(img[2 * plane + p]),
                        255,
                    ]
                };
                out.put_pixel(x0 + x, y0 + y, Rgba(px));
            }
        }
    }

    Ok(out)
}

fn to_u8(v: f32) -> u8 {
    let unit = (v / 2.0 + 0.5).clamp(0.0, 1.0);
    (unit * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

fn to_u32(v: usize) -> ReelResult<u32> {
    u32::try_from(v).map_err(|_| ReelError::sink("grid dimension exceeds u32"))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/grid.rs"]
mod tests;
