//! The 2×3 summary panel.
//!
//! ```text
//! +---------+---------+----------------+
//! | Day 1   | Day 2   | Motion Vectors |
//! +---------+---------+----------------+
//! | Heatmap | Cloud   |                |
//! |         | Mask    |                |
//! +---------+---------+----------------+
//! ```

use nimbus_image::{Image, ImageSize};
use nimbus_imgproc::interpolation::InterpolationMode;
use nimbus_imgproc::resize::resize_fast;
use nimbus_imgproc::text::draw_text;

use crate::error::DriftError;

/// Size of the panel shown to the user.
pub const DEFAULT_PANEL_SIZE: ImageSize = ImageSize {
    width: 1600,
    height: 900,
};

/// Number of cell columns.
pub const PANEL_COLS: usize = 3;

/// Number of cell rows.
pub const PANEL_ROWS: usize = 2;

/// Labels of the filled cells, in row-major order.
pub const PANEL_LABELS: [&str; 5] = ["Day 1", "Day 2", "Motion Vectors", "Heatmap", "Cloud Mask"];

/// Position of the labels relative to the top-left corner of their cell.
pub const LABEL_OFFSET: (i64, i64) = (20, 16);

/// Magnification of the label font.
pub const LABEL_SCALE: usize = 3;

/// Color of the labels.
pub const LABEL_COLOR: [u8; 3] = [255, 255, 255];

/// The images shown in the panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelInputs<'a> {
    /// Image of the first day.
    pub day1: &'a Image<u8, 3>,
    /// Image of the second day.
    pub day2: &'a Image<u8, 3>,
    /// Motion vectors drawn over the first day.
    pub vectors: &'a Image<u8, 3>,
    /// Motion magnitude heatmap.
    pub heatmap: &'a Image<u8, 3>,
    /// Change mask.
    pub mask: &'a Image<u8, 3>,
}

impl<'a> PanelInputs<'a> {
    fn cells(&self) -> [&'a Image<u8, 3>; 5] {
        [self.day1, self.day2, self.vectors, self.heatmap, self.mask]
    }
}

/// Size of one cell of a panel.
///
/// # Example
///
/// ```
/// use nimbus_drift::panel::{cell_size, DEFAULT_PANEL_SIZE};
///
/// let cell = cell_size(DEFAULT_PANEL_SIZE);
/// assert_eq!((cell.width, cell.height), (533, 450));
/// ```
pub fn cell_size(panel_size: ImageSize) -> ImageSize {
    ImageSize {
        width: panel_size.width / PANEL_COLS,
        height: panel_size.height / PANEL_ROWS,
    }
}

/// Compose the labelled 2×3 panel.
///
/// Every input is resized to [`cell_size`] and labelled, the last cell is left black
/// together with any remainder pixels of a size not divisible by the grid.
///
/// # Errors
///
/// Returns [`DriftError::InvalidPanelSize`] if the cells would be empty and
/// [`DriftError::EmptyImage`] if an input has no pixels.
pub fn compose_panel(inputs: &PanelInputs, panel_size: ImageSize) -> Result<Image<u8, 3>, DriftError> {
    let cell = cell_size(panel_size);
    if cell.is_empty() {
        return Err(DriftError::InvalidPanelSize(panel_size));
    }

    let mut panel = Image::<u8, 3>::from_size_val(panel_size, 0)?;
    let mut tile = Image::<u8, 3>::from_size_val(cell, 0)?;

    for (i, (src, label)) in inputs.cells().iter().zip(PANEL_LABELS).enumerate() {
        if src.size().is_empty() {
            return Err(DriftError::EmptyImage);
        }

        resize_fast(src, &mut tile, InterpolationMode::Bilinear)?;
        draw_text(&mut tile, label, LABEL_OFFSET, LABEL_COLOR, LABEL_SCALE);

        let (col, row) = (i % PANEL_COLS, i / PANEL_COLS);
        blit(&tile, &mut panel, col * cell.width, row * cell.height);
    }

    log::debug!("composed {panel_size} panel of {cell} cells");

    Ok(panel)
}

// copy `src` into `dst` with its top-left corner at (x0, y0), the region must fit
fn blit(src: &Image<u8, 3>, dst: &mut Image<u8, 3>, x0: usize, y0: usize) {
    let src_row_len = src.cols() * 3;
    let dst_row_len = dst.cols() * 3;
    let dst_data = dst.as_slice_mut();

    for (r, src_row) in src.as_slice().chunks_exact(src_row_len).enumerate() {
        let start = (y0 + r) * dst_row_len + x0 * 3;
        dst_data[start..start + src_row_len].copy_from_slice(src_row);
    }
}
