use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use nimbus_image::Image;

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Kernel for interpolating a pixel value
///
/// The image must not be empty. Coordinates outside the image are clamped to the border.
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel values.
pub fn interpolate_pixel<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
) -> [f32; C] {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_image::{ImageError, ImageSize};

    #[test]
    fn test_interpolate_pixel() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0, 1.0, 2.0, 3.0],
        )?;

        let center = interpolate_pixel(&image, 0.5, 0.5, InterpolationMode::Bilinear);
        approx::assert_relative_eq!(center[0], 1.5);

        let edge = interpolate_pixel(&image, 1.0, 0.25, InterpolationMode::Bilinear);
        approx::assert_relative_eq!(edge[0], 1.5);

        let clamped = interpolate_pixel(&image, -3.0, 7.0, InterpolationMode::Bilinear);
        assert_eq!(clamped, [2.0]);

        let nearest = interpolate_pixel(&image, 0.9, 0.2, InterpolationMode::Nearest);
        assert_eq!(nearest, [1.0]);

        Ok(())
    }

    #[test]
    fn test_interpolate_pixel_multichannel() -> Result<(), ImageError> {
        let image = Image::<f32, 2>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.0, 10.0, 4.0, 20.0],
        )?;
        let px = interpolate_pixel(&image, 0.25, 0.0, InterpolationMode::Bilinear);
        approx::assert_relative_eq!(px[0], 1.0);
        approx::assert_relative_eq!(px[1], 12.5);
        Ok(())
    }
}
