use crate::parallel::{self, ExecutionStrategy};
use nimbus_image::{Image, ImageError};

/// Convert an RGB8 image to grayscale using the fixed point formula:
///
/// Y = (77 * R + 150 * G + 29 * B) >> 8
///
/// # Arguments
///
/// * `src` - The input RGB8 image.
/// * `dst` - The output grayscale image.
/// * `strategy` - How the rows are scheduled.
///
/// Precondition: the input and output images must have the same size.
pub fn gray_from_rgb_u8(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 1>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::iter_rows(src, dst, strategy, |src_pixel, dst_pixel| {
        let r = src_pixel[0] as u16;
        let g = src_pixel[1] as u16;
        let b = src_pixel[2] as u16;
        dst_pixel[0] = ((r * 77 + g * 150 + b * 29) >> 8) as u8;
    });

    Ok(())
}

/// Convert a grayscale image to an RGB image by replicating the grayscale value across all three channels.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `dst` - The output RGB image.
/// * `strategy` - How the rows are scheduled.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use nimbus_image::{Image, ImageSize};
/// use nimbus_imgproc::color::rgb_from_gray;
/// use nimbus_imgproc::parallel::ExecutionStrategy;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![0, 255],
/// )
/// .unwrap();
///
/// let mut rgb = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// rgb_from_gray(&image, &mut rgb, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(rgb.as_slice(), &[0, 0, 0, 255, 255, 255]);
/// ```
pub fn rgb_from_gray<T>(
    src: &Image<T, 1>,
    dst: &mut Image<T, 3>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::iter_rows(src, dst, strategy, |src_pixel, dst_pixel| {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = src_pixel[0];
        dst_pixel[2] = src_pixel[0];
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::parallel::ExecutionStrategy;
    use nimbus_image::{Image, ImageError, ImageSize};

    #[test]
    fn gray_from_rgb_u8_weights() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::new(
            ImageSize {
                width: 4,
                height: 1,
            },
            vec![
                255, 255, 255,
                255,   0,   0,
                  0, 255,   0,
                  0,   0,   0,
            ],
        )?;

        let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        super::gray_from_rgb_u8(&image, &mut gray, ExecutionStrategy::ParallelRows)?;

        assert_eq!(gray.as_slice(), &[255, 76, 149, 0]);

        Ok(())
    }

    #[test]
    fn gray_from_rgb_u8_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val([2, 2].into(), 0)?;
        let mut gray = Image::<u8, 1>::from_size_val([2, 1].into(), 0)?;
        assert_eq!(
            super::gray_from_rgb_u8(&image, &mut gray, ExecutionStrategy::Serial),
            Err(ImageError::InvalidImageSize(2, 2, 2, 1))
        );
        Ok(())
    }

    #[test]
    fn rgb_from_grayscale() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        )?;

        let mut rgb = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;

        super::rgb_from_gray(&image, &mut rgb, ExecutionStrategy::Serial)?;

        #[rustfmt::skip]
        let expected = [
            0.0, 0.0, 0.0,
            1.0, 1.0, 1.0,
            2.0, 2.0, 2.0,
            3.0, 3.0, 3.0,
            4.0, 4.0, 4.0,
            5.0, 5.0, 5.0,
        ];

        assert_eq!(rgb.as_slice(), &expected);

        Ok(())
    }
}
