use nimbus_image::Image;
use nimbus_imgproc::color::{gray_from_rgb_u8, rgb_from_gray};
use nimbus_imgproc::core::abs_diff;
use nimbus_imgproc::parallel::ExecutionStrategy;
use nimbus_imgproc::threshold::threshold_binary;

use crate::error::{ensure_same_size, DriftError};

/// Gray level difference from which a pixel is considered changed.
pub const CHANGE_THRESHOLD: u8 = 30;

/// Value of the changed pixels in the mask.
pub const CHANGED: u8 = 255;

/// Mark the pixels that differ noticeably between two images.
///
/// The per channel absolute difference is reduced to gray and every pixel whose gray
/// difference reaches [`CHANGE_THRESHOLD`] is set to [`CHANGED`] on all three channels,
/// every other pixel is zero.
///
/// # Errors
///
/// Returns [`DriftError::DimensionMismatch`] when the sizes differ.
pub fn change_mask(
    img1: &Image<u8, 3>,
    img2: &Image<u8, 3>,
    strategy: ExecutionStrategy,
) -> Result<Image<u8, 3>, DriftError> {
    ensure_same_size(img1.size(), img2.size())?;

    let size = img1.size();

    let mut diff = Image::<u8, 3>::from_size_val(size, 0)?;
    abs_diff(img1, img2, &mut diff, strategy)?;

    let mut gray_diff = Image::<u8, 1>::from_size_val(size, 0)?;
    gray_from_rgb_u8(&diff, &mut gray_diff, strategy)?;

    // threshold_binary keeps values strictly above the threshold
    let mut mask = Image::<u8, 1>::from_size_val(size, 0)?;
    threshold_binary(&gray_diff, &mut mask, CHANGE_THRESHOLD - 1, CHANGED, strategy)?;

    let mut mask_rgb = Image::<u8, 3>::from_size_val(size, 0)?;
    rgb_from_gray(&mask, &mut mask_rgb, strategy)?;

    Ok(mask_rgb)
}
