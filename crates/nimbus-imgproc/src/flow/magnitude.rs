use nimbus_image::{Image, ImageError};

use crate::parallel::{self, ExecutionStrategy};

/// Compute the per pixel length `sqrt(dx² + dy²)` of a flow field.
///
/// # Arguments
///
/// * `flow` - The flow field with the displacement `(dx, dy)` per pixel.
/// * `dst` - The output magnitude image.
/// * `strategy` - How the rows are scheduled.
///
/// # Example
///
/// ```
/// use nimbus_image::{Image, ImageSize};
/// use nimbus_imgproc::flow::flow_magnitude;
/// use nimbus_imgproc::parallel::ExecutionStrategy;
///
/// let flow = Image::<f32, 2>::new(ImageSize { width: 2, height: 1 }, vec![3.0, 4.0, 0.0, -2.0]).unwrap();
/// let mut magnitude = Image::<f32, 1>::from_size_val(flow.size(), 0.0).unwrap();
///
/// flow_magnitude(&flow, &mut magnitude, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(magnitude.as_slice(), &[5.0, 2.0]);
/// ```
pub fn flow_magnitude(
    flow: &Image<f32, 2>,
    dst: &mut Image<f32, 1>,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    if flow.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            flow.cols(),
            flow.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::iter_rows(flow, dst, strategy, |src_pixel, dst_pixel| {
        let (dx, dy) = (src_pixel[0], src_pixel[1]);
        dst_pixel[0] = (dx * dx + dy * dy).sqrt();
    });

    Ok(())
}
