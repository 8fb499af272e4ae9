use num_traits::Zero;
use std::cmp::PartialOrd;

use nimbus_image::{Image, ImageError};

use crate::parallel::{self, ExecutionStrategy};

/// Apply a binary threshold to an image.
///
/// Samples strictly greater than `threshold` become `max_value`, every other sample becomes zero.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output image of an arbitrary number of channels and type.
/// * `threshold` - The threshold value. Must be the same type as the image.
/// * `max_value` - The maximum value to use when the input value is greater than the threshold.
/// * `strategy` - How the rows are scheduled.
///
/// # Examples
///
/// ```
/// use nimbus_image::{Image, ImageSize};
/// use nimbus_imgproc::threshold::threshold_binary;
/// use nimbus_imgproc::parallel::ExecutionStrategy;
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0).unwrap();
///
/// threshold_binary(&image, &mut thresholded, 100, 255, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(thresholded.as_slice(), &[0, 255, 0, 255, 255, 255]);
/// ```
pub fn threshold_binary<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
    max_value: T,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + PartialOrd + Zero,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::iter_rows_val(src, dst, strategy, |src_pixel, dst_pixel| {
        *dst_pixel = if *src_pixel > threshold {
            max_value
        } else {
            T::zero()
        };
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use nimbus_image::{Image, ImageError, ImageSize};

    use crate::parallel::ExecutionStrategy;

    #[test]
    fn threshold_binary() -> Result<(), ImageError> {
        let data = vec![100u8, 200, 50, 150, 200, 250];
        let data_expected = vec![0u8, 255, 0, 255, 255, 255];
        let image = Image::<_, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            data,
        )?;

        let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0)?;

        super::threshold_binary(&image, &mut thresholded, 100, 255, ExecutionStrategy::Serial)?;

        assert_eq!(thresholded.num_channels(), 1);
        assert_eq!(thresholded.size().width, 2);
        assert_eq!(thresholded.size().height, 3);
        assert_eq!(thresholded.as_slice(), &data_expected);

        Ok(())
    }

    #[test]
    fn threshold_binary_is_strict() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![28, 29, 30],
        )?;
        let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0)?;

        super::threshold_binary(
            &image,
            &mut thresholded,
            29,
            255,
            ExecutionStrategy::ParallelRows,
        )?;
        assert_eq!(thresholded.as_slice(), &[0, 0, 255]);

        Ok(())
    }
}
