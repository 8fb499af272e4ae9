use crate::filter::{gaussian_blur, kernels};
use crate::interpolation::InterpolationMode;
use crate::parallel::ExecutionStrategy;
use crate::resize::resize_native;
use nimbus_image::{Image, ImageError, ImageSize};

/// Number of pyramid levels above the base that keep both sides at least `min_size` pixels.
///
/// Level `k` has the size of the base scaled by `pyr_scale^k`. At most `max_levels` are
/// returned.
///
/// # Example
///
/// ```
/// use nimbus_image::ImageSize;
/// use nimbus_imgproc::pyramid::num_levels;
///
/// let size = ImageSize { width: 100, height: 100 };
/// assert_eq!(num_levels(size, 0.5, 3, 32), 1);
/// ```
pub fn num_levels(size: ImageSize, pyr_scale: f64, max_levels: usize, min_size: usize) -> usize {
    let mut scale = 1.0;
    let mut levels = 0;
    while levels < max_levels {
        scale *= pyr_scale;
        if (size.width as f64) * scale < min_size as f64
            || (size.height as f64) * scale < min_size as f64
        {
            break;
        }
        levels += 1;
    }
    levels
}

/// Size of a pyramid level of the given scale, rounded to the nearest pixel.
pub fn level_size(size: ImageSize, scale: f64) -> ImageSize {
    ImageSize {
        width: (size.width as f64 * scale).round() as usize,
        height: (size.height as f64 * scale).round() as usize,
    }
}

/// Smooth an image and rescale it into `dst`.
///
/// The image is blurred with a gaussian of sigma `(1 / scale - 1) / 2` before being
/// resampled bilinearly to the size of `dst`, which removes the frequencies the
/// smaller grid cannot represent. At `scale == 1` a light 3×3 blur is still applied.
///
/// # Arguments
///
/// * `src` - The base image.
/// * `dst` - The destination level, usually of size [`level_size`]`(src.size(), scale)`.
/// * `scale` - The scale of the level relative to `src`, in `(0, 1]`.
/// * `strategy` - How the rows are scheduled.
///
/// # Example
///
/// ```
/// use nimbus_image::{Image, ImageSize};
/// use nimbus_imgproc::pyramid::{level_size, scale_level};
/// use nimbus_imgproc::parallel::ExecutionStrategy;
///
/// let image = Image::<f32, 1>::from_size_val(ImageSize { width: 64, height: 48 }, 1.0).unwrap();
/// let mut level = Image::<f32, 1>::from_size_val(level_size(image.size(), 0.5), 0.0).unwrap();
///
/// scale_level(&image, &mut level, 0.5, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(level.width(), 32);
/// assert_eq!(level.height(), 24);
/// ```
pub fn scale_level<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    scale: f64,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    if !(scale > 0.0 && scale <= 1.0) {
        return Err(ImageError::InvalidParameter(format!(
            "pyramid scale must be in (0, 1], got {scale}"
        )));
    }

    let mut sigma = (1.0 / scale - 1.0) * 0.5;
    let kernel_size = (((sigma * 5.0).round() as usize) | 1).max(3);
    if sigma <= 0.0 {
        sigma = kernels::gaussian_sigma_for_size(kernel_size) as f64;
    }

    let mut blurred = Image::from_size_val(src.size(), 0.0)?;
    gaussian_blur(
        src,
        &mut blurred,
        (kernel_size, kernel_size),
        (sigma as f32, sigma as f32),
        strategy,
    )?;

    resize_native(&blurred, dst, InterpolationMode::Bilinear, strategy)
}
