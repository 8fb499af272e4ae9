use std::sync::LazyLock;

use crate::parallel::{self, ExecutionStrategy};
use nimbus_image::{Image, ImageError};

type Lut = [[u8; 3]; 256];

static JET_LUT: LazyLock<Lut> = LazyLock::new(|| build_lut(Colormap::Jet));
static HOT_LUT: LazyLock<Lut> = LazyLock::new(|| build_lut(Colormap::Hot));

fn build_lut(colormap: Colormap) -> Lut {
    let mut lut = [[0u8; 3]; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = colormap.color(i as u8);
    }
    lut
}

/// Pseudocolor palettes mapping an 8-bit intensity to an RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// Blue to red rainbow palette. Index 0 is dark blue, index 255 dark red.
    #[default]
    Jet,
    /// Black to white through red and yellow.
    Hot,
}

impl Colormap {
    /// Color of the palette entry for `value`.
    pub fn color(&self, value: u8) -> [u8; 3] {
        let t = value as f32 / 255.0;
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        match self {
            Colormap::Jet => [
                channel(1.5 - (4.0 * t - 3.0).abs()),
                channel(1.5 - (4.0 * t - 2.0).abs()),
                channel(1.5 - (4.0 * t - 1.0).abs()),
            ],
            Colormap::Hot => [
                channel(3.0 * t),
                channel(3.0 * t - 1.0),
                channel(3.0 * t - 2.0),
            ],
        }
    }

    /// The full 256 entry lookup table of the palette, built once per process.
    pub fn lut(&self) -> &'static [[u8; 3]; 256] {
        match self {
            Colormap::Jet => &*JET_LUT,
            Colormap::Hot => &*HOT_LUT,
        }
    }
}

/// Map a single channel image to RGB through a pseudocolor palette.
///
/// # Arguments
///
/// * `src` - The input intensity image.
/// * `dst` - The output RGB image.
/// * `colormap` - The palette to apply.
/// * `strategy` - How the rows are scheduled.
///
/// # Example
///
/// ```
/// use nimbus_image::{Image, ImageSize};
/// use nimbus_imgproc::color::{apply_colormap, Colormap};
/// use nimbus_imgproc::parallel::ExecutionStrategy;
///
/// let image = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![0, 255]).unwrap();
/// let mut rgb = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// apply_colormap(&image, &mut rgb, Colormap::Jet, ExecutionStrategy::Serial).unwrap();
/// assert_eq!(rgb.as_slice(), &[0, 0, 128, 128, 0, 0]);
/// ```
pub fn apply_colormap(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 3>,
    colormap: Colormap,
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

    let lut = colormap.lut();

    parallel::iter_rows(src, dst, strategy, |src_pixel, dst_pixel| {
        dst_pixel.copy_from_slice(&lut[src_pixel[0] as usize]);
    });

    Ok(())
}
