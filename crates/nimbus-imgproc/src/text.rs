//! Bitmap text rendering.
//!
//! Glyphs come from the 8×8 `font8x8` basic latin table. Characters without a
//! glyph are rendered as blank cells.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use nimbus_image::Image;

use crate::draw::draw_filled_rect;

/// Side of a glyph cell in font pixels, spacing included.
pub const GLYPH_SIZE: usize = 8;

/// Size in pixels `(width, height)` covered by `text` at the given scale.
///
/// # Example
///
/// ```
/// use nimbus_imgproc::text::text_size;
///
/// assert_eq!(text_size("Day 1", 1), (40, 8));
/// assert_eq!(text_size("", 3), (0, 0));
/// ```
pub fn text_size(text: &str, scale: usize) -> (usize, usize) {
    let n = text.chars().count();
    if n == 0 || scale == 0 {
        return (0, 0);
    }
    (n * GLYPH_SIZE * scale, GLYPH_SIZE * scale)
}

/// Draws text on an image inplace.
///
/// Every font pixel becomes a `scale × scale` block. Pixels outside the image are clipped.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `text` - The text to render.
/// * `origin` - The top-left corner of the first character as (x, y).
/// * `color` - The color of the text.
/// * `scale` - The integer magnification of the font.
pub fn draw_text<const C: usize>(
    img: &mut Image<u8, C>,
    text: &str,
    origin: (i64, i64),
    color: [u8; C],
    scale: usize,
) {
    let s = scale as i64;
    let advance = (GLYPH_SIZE * scale) as i64;

    for (i, c) in text.chars().enumerate() {
        let Some(rows) = BASIC_FONTS.get(c) else {
            continue;
        };
        let x0 = origin.0 + i as i64 * advance;
        // bit 0 of every row is the leftmost column
        for (r, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let x = x0 + col as i64 * s;
                let y = origin.1 + r as i64 * s;
                draw_filled_rect(img, (x, y), (x + s, y + s), color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_image::{ImageError, ImageSize};

    #[test]
    fn test_glyph_coverage() {
        for c in "Day 1 Day 2 Motion Vectors Heatmap Cloud Mask".chars() {
            assert!(BASIC_FONTS.get(c).is_some(), "missing glyph for {c:?}");
        }
        assert!(BASIC_FONTS.get('\u{2601}').is_none());
    }

    #[test]
    fn test_draw_text_single_glyph() -> Result<(), ImageError> {
        let mut img = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 10,
                height: 8,
            },
            0,
        )?;
        draw_text(&mut img, "L", (1, 0), [1], 1);

        let rows = BASIC_FONTS.get('L').ok_or(ImageError::InvalidParameter("no glyph".into()))?;
        for (y, bits) in rows.iter().enumerate() {
            assert_eq!(img.pixel(0, y)?, &[0]);
            assert_eq!(img.pixel(9, y)?, &[0]);
            for col in 0..GLYPH_SIZE {
                let lit = bits & (1 << col) != 0;
                assert_eq!(img.pixel(col + 1, y)? == &[1], lit, "row {y} col {col}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_draw_text_scaled_bounds() -> Result<(), ImageError> {
        let mut img = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 200,
                height: 40,
            },
            0,
        )?;
        let white = [255, 255, 255];
        let origin = (10, 5);
        draw_text(&mut img, "Heatmap", origin, white, 3);

        let (w, h) = text_size("Heatmap", 3);
        assert_eq!((w, h), (168, 24));
        let mut lit = 0;
        for y in 0..img.height() {
            for x in 0..img.width() {
                if img.pixel(x, y)? == &white {
                    lit += 1;
                    assert!(x >= 10 && x < 10 + w);
                    assert!(y >= 5 && y < 5 + h);
                }
            }
        }
        assert!(lit > 0);
        // every font pixel covers a 3x3 block
        assert_eq!(lit % 9, 0);
        Ok(())
    }

    #[test]
    fn test_draw_text_clipped() -> Result<(), ImageError> {
        let mut img = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0,
        )?;
        draw_text(&mut img, "Cloud Mask", (-3, -3), [255], 2);
        draw_text(&mut img, "\u{2601}", (0, 0), [255], 2);
        assert_eq!(img.width(), 4);
        Ok(())
    }
}
