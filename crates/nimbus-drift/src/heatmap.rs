use nimbus_image::Image;
use nimbus_imgproc::color::{apply_colormap, Colormap};
use nimbus_imgproc::flow::flow_magnitude;
use nimbus_imgproc::normalize::{find_min_max, normalize_min_max};
use nimbus_imgproc::parallel::{self, ExecutionStrategy};

use crate::error::DriftError;
use crate::flow::FlowField;

/// The palette of the motion heatmap.
pub const HEATMAP_COLORMAP: Colormap = Colormap::Jet;

/// Render the motion magnitude of `flow` as a pseudocolor image.
///
/// The magnitudes are stretched so that the smallest maps to the first palette entry
/// and the largest to the last one. The scale is specific to each call, two heatmaps
/// are not comparable. A field of constant magnitude maps entirely to the first entry.
///
/// # Errors
///
/// Returns [`DriftError::EmptyImage`] for a field without pixels.
pub fn render_heatmap(flow: &FlowField, strategy: ExecutionStrategy) -> Result<Image<u8, 3>, DriftError> {
    render_heatmap_with(flow, HEATMAP_COLORMAP, strategy)
}

/// Render the motion magnitude of `flow` with the given palette.
pub fn render_heatmap_with(
    flow: &FlowField,
    colormap: Colormap,
    strategy: ExecutionStrategy,
) -> Result<Image<u8, 3>, DriftError> {
    if flow.size().is_empty() {
        return Err(DriftError::EmptyImage);
    }

    let mut magnitude = Image::<f32, 1>::from_size_val(flow.size(), 0.0)?;
    flow_magnitude(flow, &mut magnitude, strategy)?;

    let (min, max) = find_min_max(&magnitude)?;
    log::debug!("flow magnitude range [{min:.3}, {max:.3}]");

    let mut normalized = Image::<f32, 1>::from_size_val(flow.size(), 0.0)?;
    normalize_min_max(&magnitude, &mut normalized, 0.0, 255.0, strategy)?;

    let mut index = Image::<u8, 1>::from_size_val(flow.size(), 0)?;
    parallel::iter_rows_val(&normalized, &mut index, strategy, |&v, dst| {
        *dst = v.round().clamp(0.0, 255.0) as u8;
    });

    let mut heatmap = Image::<u8, 3>::from_size_val(flow.size(), 0)?;
    apply_colormap(&index, &mut heatmap, colormap, strategy)?;

    Ok(heatmap)
}
