use nimbus_image::Image;
use std::cmp::{max, min};

/// Set a pixel's color, ignoring coordinates outside the image.
#[inline]
pub fn set_pixel<const C: usize>(img: &mut Image<u8, C>, x: i64, y: i64, color: [u8; C]) {
    if x < 0 || y < 0 || x >= img.cols() as i64 || y >= img.rows() as i64 {
        return;
    }
    let start = (y as usize * img.cols() + x as usize) * C;
    img.as_slice_mut()[start..start + C].copy_from_slice(&color);
}

/// Draws a line on an image inplace using Bresenham's line algorithm.
///
/// Pixels falling outside the image are clipped.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - The start point of the line as a tuple of (x, y).
/// * `p1` - The end point of the line as a tuple of (x, y).
/// * `color` - The color of the line as an array of `C` elements.
/// * `thickness` - The thickness of the line. Values above 1 stamp a square brush.
pub fn draw_line<const C: usize>(
    img: &mut Image<u8, C>,
    p0: (i64, i64),
    p1: (i64, i64),
    color: [u8; C],
    thickness: usize,
) {
    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();

    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;

    let half_thickness = thickness as i64 / 2;

    loop {
        if thickness <= 1 {
            set_pixel(img, x0, y0, color);
        } else {
            for i in -half_thickness..=half_thickness {
                for j in -half_thickness..=half_thickness {
                    set_pixel(img, x0 + i, y0 + j, color);
                }
            }
        }

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;

        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draws an arrow from `p0` to `p1` inplace.
///
/// The shaft is a straight line and the head consists of two segments of length
/// `tip_length * |p1 - p0|` leaving the tip at ±45° from the reversed shaft direction.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - The tail of the arrow as a tuple of (x, y).
/// * `p1` - The tip of the arrow as a tuple of (x, y).
/// * `color` - The color of the arrow.
/// * `thickness` - The thickness of the strokes.
/// * `tip_length` - Length of the head relative to the arrow length.
pub fn draw_arrowed_line<const C: usize>(
    img: &mut Image<u8, C>,
    p0: (i64, i64),
    p1: (i64, i64),
    color: [u8; C],
    thickness: usize,
    tip_length: f64,
) {
    draw_line(img, p0, p1, color, thickness);

    let (fx0, fy0) = (p0.0 as f64, p0.1 as f64);
    let (fx1, fy1) = (p1.0 as f64, p1.1 as f64);

    let tip_size = (fx1 - fx0).hypot(fy1 - fy0) * tip_length;
    let angle = (fy0 - fy1).atan2(fx0 - fx1);

    for side in [1.0, -1.0] {
        let a = angle + side * std::f64::consts::FRAC_PI_4;
        let head = (
            (fx1 + tip_size * a.cos()).round() as i64,
            (fy1 + tip_size * a.sin()).round() as i64,
        );
        draw_line(img, head, p1, color, thickness);
    }
}

/// Draws a filled rectangle on an image inplace.
///
/// The bottom-right corner is exclusive.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `top_left` - The top-left corner coordinates (x, y).
/// * `bottom_right` - The bottom-right corner coordinates (x, y), exclusive.
/// * `color` - The fill color.
pub fn draw_filled_rect<const C: usize>(
    img: &mut Image<u8, C>,
    top_left: (i64, i64),
    bottom_right: (i64, i64),
    color: [u8; C],
) {
    let (x_start, y_start) = top_left;
    let (x_end, y_end) = bottom_right;

    // clamp to the image bounds
    let x_min = max(0, min(x_start, x_end));
    let y_min = max(0, min(y_start, y_end));
    let x_max = min(img.cols() as i64, max(x_start, x_end));
    let y_max = min(img.rows() as i64, max(y_start, y_end));

    for y in y_min..y_max {
        for x in x_min..x_max {
            set_pixel(img, x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_image::{Image, ImageError, ImageSize};

    #[rustfmt::skip]
    #[test]
    fn test_draw_line() -> Result<(), ImageError> {
        let mut img = Image::new(
            ImageSize { width: 5, height: 5 }, vec![0u8; 25],
        )?;
        draw_line(&mut img, (0, 0), (4, 4), [255], 1);
        assert_eq!(
            img.as_slice(),
            &[
                255,   0,   0,   0,   0,
                  0, 255,   0,   0,   0,
                  0,   0, 255,   0,   0,
                  0,   0,   0, 255,   0,
                  0,   0,   0,   0, 255,
            ]
        );
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_line_clipped() -> Result<(), ImageError> {
        let mut img = Image::new(
            ImageSize { width: 4, height: 3 }, vec![0u8; 12],
        )?;
        draw_line(&mut img, (-2, 1), (10, 1), [7], 1);
        assert_eq!(
            img.as_slice(),
            &[
                0, 0, 0, 0,
                7, 7, 7, 7,
                0, 0, 0, 0,
            ]
        );
        Ok(())
    }

    #[rustfmt::skip]
    #[test]
    fn test_draw_filled_rect() -> Result<(), ImageError> {
        let mut img = Image::new(
            ImageSize { width: 4, height: 4 }, vec![0u8; 16],
        )?;
        draw_filled_rect(&mut img, (2, 2), (9, 9), [1]);
        assert_eq!(
            img.as_slice(),
            &[
                0, 0, 0, 0,
                0, 0, 0, 0,
                0, 0, 1, 1,
                0, 0, 1, 1,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_draw_arrowed_line() -> Result<(), ImageError> {
        let mut img = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 16,
                height: 11,
            },
            0,
        )?;
        let green = [0, 255, 0];
        draw_arrowed_line(&mut img, (0, 5), (10, 5), green, 1, 0.3);

        // shaft
        for x in 0..=10 {
            assert_eq!(img.pixel(x, 5)?, &green);
        }
        // head segments end at (8, 3) and (8, 7)
        assert_eq!(img.pixel(8, 3)?, &green);
        assert_eq!(img.pixel(9, 4)?, &green);
        assert_eq!(img.pixel(8, 7)?, &green);
        assert_eq!(img.pixel(9, 6)?, &green);
        // nothing past the tip
        assert_eq!(img.pixel(11, 5)?, &[0, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_draw_arrowed_line_degenerate() -> Result<(), ImageError> {
        let mut img = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            0,
        )?;
        draw_arrowed_line(&mut img, (1, 1), (1, 1), [9], 1, 0.3);
        assert_eq!(img.as_slice().iter().filter(|&&v| v == 9).count(), 1);
        Ok(())
    }
}
