use nimbus_image::Image;
use nimbus_imgproc::flow::{calc_optical_flow_farneback, FarnebackParams};
use nimbus_imgproc::parallel::ExecutionStrategy;

use crate::error::{ensure_same_size, DriftError};

/// A dense displacement field: channel 0 holds `dx`, channel 1 holds `dy`.
pub type FlowField = Image<f32, 2>;

/// Parameters of the motion estimation.
///
/// A 3 level pyramid halving the resolution at each level, a 15×15 averaging window,
/// 3 iterations per level and a polynomial expansion over a radius 5 neighborhood
/// weighted by a gaussian of sigma 1.2.
pub const FLOW_PARAMS: FarnebackParams = FarnebackParams {
    pyr_scale: 0.5,
    levels: 3,
    win_size: 15,
    iterations: 3,
    poly_n: 5,
    poly_sigma: 1.2,
};

/// Estimate the apparent motion from `gray1` to `gray2`.
///
/// The displacement stored at `(x, y)` moves the content of `gray1` at that location
/// to its position in `gray2`. Identical inputs yield an exactly zero field.
///
/// # Errors
///
/// Returns [`DriftError::DimensionMismatch`] when the sizes differ and
/// [`DriftError::EmptyImage`] for images without pixels. Both are checked before any
/// computation.
pub fn estimate_flow(
    gray1: &Image<u8, 1>,
    gray2: &Image<u8, 1>,
    strategy: ExecutionStrategy,
) -> Result<FlowField, DriftError> {
    ensure_same_size(gray1.size(), gray2.size())?;
    if gray1.size().is_empty() {
        return Err(DriftError::EmptyImage);
    }

    let prev = gray1.cast::<f32>()?;
    let next = gray2.cast::<f32>()?;

    let mut flow = FlowField::from_size_val(gray1.size(), 0.0)?;
    calc_optical_flow_farneback(&prev, &next, &mut flow, &FLOW_PARAMS, strategy)?;

    log::debug!("estimated flow on {}", flow.size());

    Ok(flow)
}
