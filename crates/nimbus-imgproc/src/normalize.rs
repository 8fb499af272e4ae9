//! Min-max normalization of image samples.
//!
//! ```
//! use nimbus_image::{Image, ImageSize};
//! use nimbus_imgproc::normalize::normalize_min_max;
//! use nimbus_imgproc::parallel::ExecutionStrategy;
//!
//! let image = Image::<f32, 1>::new(
//!     ImageSize { width: 3, height: 1 },
//!     vec![2.0, 4.0, 6.0],
//! ).unwrap();
//!
//! let mut normalized = Image::<f32, 1>::from_size_val(image.size(), 0.0).unwrap();
//!
//! normalize_min_max(&image, &mut normalized, 0.0, 255.0, ExecutionStrategy::Serial).unwrap();
//! assert_eq!(normalized.as_slice(), &[0.0, 127.5, 255.0]);
//! ```

use num_traits::Float;

use nimbus_image::{Image, ImageError};

use crate::parallel::{self, ExecutionStrategy};

/// Find the minimum and maximum values in an image.
///
/// # Arguments
///
/// * `image` - The input image of any channel count.
///
/// # Returns
///
/// A tuple `(min, max)` over all samples of all channels.
///
/// # Errors
///
/// Returns [`ImageError::ImageDataNotInitialized`] if the image holds no sample.
///
/// # Example
///
/// ```
/// use nimbus_image::{Image, ImageSize};
/// use nimbus_imgproc::normalize::find_min_max;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
/// ).unwrap();
///
/// let (min, max) = find_min_max(&image).unwrap();
/// assert_eq!(min, 0);
/// assert_eq!(max, 11);
/// ```
pub fn find_min_max<T, const C: usize>(image: &Image<T, C>) -> Result<(T, T), ImageError>
where
    T: Copy + PartialOrd,
{
    // get the first element in the image
    let first_element = match image.as_slice().first() {
        Some(x) => x,
        None => return Err(ImageError::ImageDataNotInitialized),
    };

    let mut min = first_element;
    let mut max = first_element;

    for x in image.as_slice().iter() {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    Ok((*min, *max))
}

/// Linearly rescale the samples of an image so that its range maps onto `[min, max]`.
///
/// Each sample becomes `(v - v_min) * (max - min) / (v_max - v_min) + min`,
/// where `v_min` and `v_max` are the extremes of `src`.
///
/// When every sample of `src` is equal the range is empty and all samples of
/// `dst` are set to `min`; the output never contains NaN.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image.
/// * `min` - Lower bound of the target range.
/// * `max` - Upper bound of the target range.
/// * `strategy` - How the rows are scheduled.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `src` and `dst` have different sizes and
/// [`ImageError::ImageDataNotInitialized`] if `src` is empty.
pub fn normalize_min_max<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    min: T,
    max: T,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: Send + Sync + Float,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let (min_val, max_val) = find_min_max(src)?;
    let range = max_val - min_val;

    if range <= T::zero() {
        log::debug!("normalize_min_max: constant input, filling with the lower bound");
        dst.as_slice_mut().iter_mut().for_each(|v| *v = min);
        return Ok(());
    }

    let scale = (max - min) / range;

    parallel::iter_rows_val(src, dst, strategy, |&src_val, dst_val| {
        *dst_val = (src_val - min_val) * scale + min;
    });

    Ok(())
}
