use nimbus_image::{ImageError, ImageSize};

/// An error type for the cloud drift analysis.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DriftError {
    /// The two inputs do not have the same size.
    #[error("Images have different sizes: {first} and {second}")]
    DimensionMismatch {
        /// Size of the first input.
        first: ImageSize,
        /// Size of the second input.
        second: ImageSize,
    },

    /// The vector sampling stride is zero.
    #[error("The vector sampling stride must be positive")]
    InvalidStride,

    /// The panel is too small to hold a 3x2 grid.
    #[error("Panel size {0} leaves empty cells")]
    InvalidPanelSize(ImageSize),

    /// An input has no pixels.
    #[error("Image has no pixels")]
    EmptyImage,

    /// Error from an image operation.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Fail with [`DriftError::DimensionMismatch`] unless both sizes are equal.
pub(crate) fn ensure_same_size(first: ImageSize, second: ImageSize) -> Result<(), DriftError> {
    if first != second {
        return Err(DriftError::DimensionMismatch { first, second });
    }
    Ok(())
}
