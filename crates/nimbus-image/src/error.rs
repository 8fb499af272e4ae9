/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the image data is empty.
    #[error("Image data is not initialized")]
    ImageDataNotInitialized,

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the source and destination image sizes are not compatible.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a pixel value cannot be cast to the requested type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a filter kernel is empty.
    #[error("Invalid kernel length ({0}, {1})")]
    InvalidKernelLength(usize, usize),

    /// Error reported by the resize backend.
    #[error("Failed to resize the image. {0}")]
    ResizeError(String),

    /// Error when an operation receives invalid parameters.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
