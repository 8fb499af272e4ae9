use crate::interpolation::{interpolate_pixel, InterpolationMode};
use crate::parallel::{self, ExecutionStrategy};
use fast_image_resize as fr;
use nimbus_image::{Image, ImageError};

/// Resize an image to a new size.
///
/// The function resizes a floating point image to the size of `dst` using the specified
/// interpolation mode. It supports any number of channels. Pixel centers are aligned, i.e.
/// the destination pixel `x` samples the source at `(x + 0.5) * src_w / dst_w - 0.5`,
/// clamped to the image borders.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `dst` - The output image container, its size is the target size.
/// * `interpolation` - The interpolation mode to use.
/// * `strategy` - How the rows are scheduled.
///
/// # Example
///
/// ```
/// use nimbus_image::{Image, ImageSize};
/// use nimbus_imgproc::resize::resize_native;
/// use nimbus_imgproc::interpolation::InterpolationMode;
/// use nimbus_imgproc::parallel::ExecutionStrategy;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0.0).unwrap();
///
/// resize_native(
///     &image,
///     &mut image_resized,
///     InterpolationMode::Nearest,
///     ExecutionStrategy::Serial,
/// )
/// .unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] when the source is empty and the destination is not.
pub fn resize_native<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    interpolation: InterpolationMode,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    if dst.size().is_empty() {
        return Ok(());
    }

    if src.size().is_empty() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    if src.size() == dst.size() {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let scale_x = src.width() as f32 / dst.width() as f32;
    let scale_y = src.height() as f32 / dst.height() as f32;
    let row_len = dst.width() * C;

    parallel::for_each_row(dst.as_slice_mut(), row_len, strategy, |y, row| {
        let v = (y as f32 + 0.5) * scale_y - 0.5;
        for (x, out) in row.chunks_exact_mut(C).enumerate() {
            let u = (x as f32 + 0.5) * scale_x - 0.5;
            out.copy_from_slice(&interpolate_pixel(src, u, v, interpolation));
        }
    });

    Ok(())
}

/// Resize an image to a new size using the [fast_image_resize](https://crates.io/crates/fast_image_resize) crate.
///
/// The function resizes an image to the size of `dst` using the specified interpolation mode.
/// It supports only 3-channel images and u8 data type.
///
/// # Arguments
///
/// * `src` - The input image container with 3 channels.
/// * `dst` - The output image container, its size is the target size.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use nimbus_image::{Image, ImageSize};
/// use nimbus_imgproc::resize::resize_fast;
/// use nimbus_imgproc::interpolation::InterpolationMode;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0).unwrap();
///
/// resize_fast(
///     &image,
///     &mut image_resized,
///     InterpolationMode::Nearest,
/// )
/// .unwrap();
///
/// assert_eq!(image_resized.num_channels(), 3);
/// assert_eq!(image_resized.size().width, 2);
/// assert_eq!(image_resized.size().height, 3);
/// ```
///
/// # Errors
///
/// The function returns an error if the image cannot be resized.
pub fn resize_fast(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if src.size().is_empty() || dst.size().is_empty() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    if src.size() == dst.size() {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let (dst_width, dst_height) = (dst.width() as u32, dst.height() as u32);

    // prepare the input image for the fast_image_resize crate
    let src_image = fr::images::ImageRef::new(
        src.width() as u32,
        src.height() as u32,
        src.as_slice(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    // prepare the output image for the fast_image_resize crate
    let mut dst_image = fr::images::Image::from_slice_u8(
        dst_width,
        dst_height,
        dst.as_slice_mut(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    let options = fr::ResizeOptions::new().resize_alg(match interpolation {
        InterpolationMode::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
        InterpolationMode::Nearest => fr::ResizeAlg::Nearest,
    });

    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    Ok(())
}
