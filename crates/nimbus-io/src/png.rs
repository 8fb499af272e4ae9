use std::{fs, fs::File, io::BufWriter, path::Path};

use nimbus_image::{Image, ImageSize};
use png::{BitDepth, ColorType, Decoder, Encoder};

use crate::error::IoError;

/// Read a PNG image with a three channels (rgb8).
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A RGB image with three channels (rgb8).
pub fn read_image_png_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let (buf, size, color_type) = read_png_impl(file_path)?;
    if color_type != ColorType::Rgb {
        return Err(IoError::PngDecodeError(format!(
            "expected an rgb8 image, found {color_type:?}"
        )));
    }
    Ok(Image::new(size.into(), buf)?)
}

/// Writes the given PNG _(rgb8)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The image containing the rgb8 data.
pub fn write_image_png_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    write_png_impl(
        file_path,
        image.as_slice(),
        image.size(),
        BitDepth::Eight,
        ColorType::Rgb,
    )
}

// utility function to read the png file
fn read_png_impl(
    file_path: impl AsRef<Path>,
) -> Result<(Vec<u8>, [usize; 2], ColorType), IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let file = fs::File::open(file_path)?;
    let mut reader = Decoder::new(file)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    Ok((
        buf,
        [info.width as usize, info.height as usize],
        info.color_type,
    ))
}

fn write_png_impl(
    file_path: impl AsRef<Path>,
    image_data: &[u8],
    image_size: ImageSize,
    // Make sure you set `depth` correctly
    depth: BitDepth,
    color_type: ColorType,
) -> Result<(), IoError> {
    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(
        BufWriter::new(file),
        image_size.width as u32,
        image_size.height as u32,
    );
    encoder.set_color(color_type);
    encoder.set_depth(depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image_data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoError;

    #[test]
    fn read_write_png_rgb8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;

        let file_path = tmp_dir.path().join("panel.png");
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 4,
                height: 3,
            },
            (0..36).map(|v| v * 7).collect(),
        )?;
        write_image_png_rgb8(&file_path, &image)?;

        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_png_rgb8(&file_path)?;
        assert_eq!(image_back, image);

        Ok(())
    }

    #[test]
    fn read_png_missing() {
        assert!(matches!(
            read_image_png_rgb8("missing.png"),
            Err(IoError::FileDoesNotExist(_))
        ));
    }
}
