use std::path::Path;

use nimbus_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path and converts it to RGB8.
///
/// The method tries to read from any image format supported by the image crate.
/// Grayscale, alpha and 16 bit images are converted to 8 bit RGB.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGB image containing the image data.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] if there is no file at `file_path` and
/// [`IoError::ImageDecodeError`] if its content cannot be decoded.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;

    // decode the data directly from memory, the format is guessed from the content
    let img = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!("decoded {} ({size}, {:?})", file_path.display(), img.color());

    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}
