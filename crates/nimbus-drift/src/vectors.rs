use nimbus_image::Image;
use nimbus_imgproc::draw::draw_arrowed_line;

use crate::error::{ensure_same_size, DriftError};
use crate::flow::FlowField;

/// Default spacing in pixels between two sampled vectors.
pub const DEFAULT_VECTOR_STRIDE: usize = 20;

/// Color of the motion arrows.
pub const ARROW_COLOR: [u8; 3] = [0, 255, 0];

/// Thickness of the motion arrows.
pub const ARROW_THICKNESS: usize = 1;

/// Length of the arrow heads relative to the arrow length.
pub const ARROW_TIP_RATIO: f64 = 0.3;

/// The displacement of the flow field at one grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledVector {
    /// Column of the grid point.
    pub x: usize,
    /// Row of the grid point.
    pub y: usize,
    /// Horizontal displacement.
    pub dx: f32,
    /// Vertical displacement.
    pub dy: f32,
}

impl SampledVector {
    /// The grid point as drawing coordinates.
    pub fn origin(&self) -> (i64, i64) {
        (self.x as i64, self.y as i64)
    }

    /// The end of the arrow, the displacement rounded to whole pixels.
    pub fn tip(&self) -> (i64, i64) {
        (
            self.x as i64 + self.dx.round() as i64,
            self.y as i64 + self.dy.round() as i64,
        )
    }
}

/// Sample the flow field on a regular grid.
///
/// Grid points start at `stride / 2` on both axes and are `stride` pixels apart. The
/// samples are returned row by row.
///
/// # Errors
///
/// Returns [`DriftError::InvalidStride`] when `stride` is zero.
pub fn sample_vectors(flow: &FlowField, stride: usize) -> Result<Vec<SampledVector>, DriftError> {
    if stride == 0 {
        return Err(DriftError::InvalidStride);
    }

    let offset = stride / 2;
    let data = flow.as_slice();
    let cols = flow.cols();

    let mut vectors = Vec::new();
    for y in (offset..flow.rows()).step_by(stride) {
        for x in (offset..cols).step_by(stride) {
            let i = (y * cols + x) * 2;
            vectors.push(SampledVector {
                x,
                y,
                dx: data[i],
                dy: data[i + 1],
            });
        }
    }

    Ok(vectors)
}

/// Draw the sampled motion vectors as green arrows over a copy of `base`.
///
/// Vectors whose rounded displacement is zero are skipped, so a still field leaves the
/// copy identical to `base`.
///
/// # Errors
///
/// Returns [`DriftError::DimensionMismatch`] if `base` and `flow` sizes differ and
/// [`DriftError::InvalidStride`] when `stride` is zero.
pub fn draw_motion_vectors(
    base: &Image<u8, 3>,
    flow: &FlowField,
    stride: usize,
) -> Result<Image<u8, 3>, DriftError> {
    ensure_same_size(base.size(), flow.size())?;

    let vectors = sample_vectors(flow, stride)?;

    let mut canvas = base.clone();
    let mut drawn = 0;
    for v in vectors.iter() {
        let (p0, p1) = (v.origin(), v.tip());
        if p0 == p1 {
            continue;
        }
        draw_arrowed_line(&mut canvas, p0, p1, ARROW_COLOR, ARROW_THICKNESS, ARROW_TIP_RATIO);
        drawn += 1;
    }

    log::debug!("drew {drawn} of {} motion vectors", vectors.len());

    Ok(canvas)
}
