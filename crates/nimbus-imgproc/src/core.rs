use nimbus_image::{Image, ImageError};

use crate::parallel::{self, ExecutionStrategy};

/// Compute the per-sample absolute difference of two images.
///
/// # Arguments
///
/// * `src1` - The first input image.
/// * `src2` - The second input image.
/// * `dst` - The output image holding `|src1 - src2|` for every sample.
/// * `strategy` - How the rows are scheduled.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the three images do not share the same size.
///
/// # Example
///
/// ```
/// use nimbus_image::{Image, ImageSize};
/// use nimbus_imgproc::core::abs_diff;
/// use nimbus_imgproc::parallel::ExecutionStrategy;
///
/// let size = ImageSize { width: 2, height: 1 };
/// let a = Image::<u8, 1>::new(size, vec![10, 200]).unwrap();
/// let b = Image::<u8, 1>::new(size, vec![30, 50]).unwrap();
/// let mut diff = Image::<u8, 1>::from_size_val(size, 0).unwrap();
///
/// abs_diff(&a, &b, &mut diff, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(diff.as_slice(), &[20, 150]);
/// ```
pub fn abs_diff<T, const C: usize>(
    src1: &Image<T, C>,
    src2: &Image<T, C>,
    dst: &mut Image<T, C>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + PartialOrd + std::ops::Sub<Output = T>,
{
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    if src1.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::iter_rows_val_two(src1, src2, dst, strategy, |&a, &b, out| {
        *out = if a > b { a - b } else { b - a };
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_image::ImageSize;

    #[test]
    fn test_abs_diff_rgb() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let a = Image::<u8, 3>::new(size, vec![0, 128, 255, 10, 20, 30])?;
        let b = Image::<u8, 3>::new(size, vec![255, 128, 0, 30, 20, 10])?;
        let mut diff = Image::<u8, 3>::from_size_val(size, 0)?;

        abs_diff(&a, &b, &mut diff, ExecutionStrategy::Serial)?;
        assert_eq!(diff.as_slice(), &[255, 0, 255, 20, 0, 20]);

        // symmetric
        let mut diff_rev = Image::<u8, 3>::from_size_val(size, 0)?;
        abs_diff(&b, &a, &mut diff_rev, ExecutionStrategy::ParallelRows)?;
        assert_eq!(diff, diff_rev);

        Ok(())
    }

    #[test]
    fn test_abs_diff_size_mismatch() -> Result<(), ImageError> {
        let a = Image::<u8, 1>::from_size_val([2, 2].into(), 0)?;
        let b = Image::<u8, 1>::from_size_val([2, 3].into(), 0)?;
        let mut diff = Image::<u8, 1>::from_size_val([2, 2].into(), 0)?;
        assert_eq!(
            abs_diff(&a, &b, &mut diff, ExecutionStrategy::Serial),
            Err(ImageError::InvalidImageSize(2, 2, 2, 3))
        );
        Ok(())
    }
}
