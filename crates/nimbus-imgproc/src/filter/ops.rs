use nimbus_image::{Image, ImageError};

use super::{kernels, separable_filter, BorderMode};
use crate::parallel::ExecutionStrategy;

/// Blur an image using a gaussian blur filter
///
/// Samples outside the image are mirrored without repeating the edge
/// ([`BorderMode::Reflect101`]).
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The size of the kernel (kernel_x, kernel_y).
/// * `sigma` - The sigma of the gaussian kernel, (sigma_x, sigma_y).
/// * `strategy` - How the rows are scheduled.
///
/// # Example
///
/// ```
/// use nimbus_image::{Image, ImageSize};
/// use nimbus_imgproc::filter::gaussian_blur;
/// use nimbus_imgproc::parallel::ExecutionStrategy;
///
/// let image = Image::<f32, 1>::from_size_val(ImageSize { width: 8, height: 6 }, 2.0).unwrap();
/// let mut blurred = Image::<f32, 1>::from_size_val(image.size(), 0.0).unwrap();
///
/// gaussian_blur(&image, &mut blurred, (5, 5), (1.1, 1.1), ExecutionStrategy::Serial).unwrap();
/// assert!(blurred.as_slice().iter().all(|v| (v - 2.0).abs() < 1e-5));
/// ```
pub fn gaussian_blur<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    kernel_size: (usize, usize),
    sigma: (f32, f32),
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    let kernel_x = kernels::gaussian_kernel_1d(kernel_size.0, sigma.0);
    let kernel_y = kernels::gaussian_kernel_1d(kernel_size.1, sigma.1);
    separable_filter(
        src,
        dst,
        &kernel_x,
        &kernel_y,
        BorderMode::Reflect101,
        strategy,
    )
}
