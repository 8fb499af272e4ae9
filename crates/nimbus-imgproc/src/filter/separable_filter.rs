use nimbus_image::{Image, ImageError};

use crate::parallel::{self, ExecutionStrategy};

/// How samples outside the image are synthesized during filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Outside samples are zero.
    Constant,
    /// Outside samples repeat the closest edge sample: `aaa|abcd|ddd`.
    Replicate,
    /// Mirror without repeating the edge sample: `dcb|abcd|cba`.
    #[default]
    Reflect101,
}

impl BorderMode {
    /// Map a possibly out of range index into `0..len`, `None` when the sample is zero.
    #[inline]
    pub fn index(&self, i: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let last = len as isize - 1;
        if (0..=last).contains(&i) {
            return Some(i as usize);
        }
        match self {
            BorderMode::Constant => None,
            BorderMode::Replicate => Some(i.clamp(0, last) as usize),
            BorderMode::Reflect101 => {
                if last == 0 {
                    return Some(0);
                }
                let period = 2 * last;
                let mut j = i.rem_euclid(period);
                if j > last {
                    j = period - j;
                }
                Some(j as usize)
            }
        }
    }
}

/// A separable 2D filter that applies horizontal and vertical 1D convolutions sequentially.
struct SeparableFilter<'a> {
    kernel_x: &'a [f32],
    kernel_y: &'a [f32],
    border: BorderMode,
}

impl SeparableFilter<'_> {
    fn apply<const C: usize>(
        &self,
        src: &Image<f32, C>,
        dst: &mut Image<f32, C>,
        strategy: ExecutionStrategy,
    ) {
        let rows = src.rows();
        let cols = src.cols();
        let row_len = cols * C;

        let src_data = src.as_slice();
        let mut temp = vec![0.0f32; src_data.len()];

        let half_x = (self.kernel_x.len() / 2) as isize;
        let half_y = (self.kernel_y.len() / 2) as isize;

        // horizontal
        parallel::for_each_row(&mut temp, row_len, strategy, |r, row_temp| {
            let src_row = &src_data[r * row_len..(r + 1) * row_len];
            for c in 0..cols {
                let mut acc = [0.0f32; C];
                for (i, &k) in self.kernel_x.iter().enumerate() {
                    let Some(x) = self.border.index(c as isize + i as isize - half_x, cols)
                    else {
                        continue;
                    };
                    let px = &src_row[x * C..(x + 1) * C];
                    for (acc_val, &v) in acc.iter_mut().zip(px.iter()) {
                        *acc_val += v * k;
                    }
                }
                row_temp[c * C..(c + 1) * C].copy_from_slice(&acc);
            }
        });

        // vertical
        let temp = &temp;
        parallel::for_each_row(dst.as_slice_mut(), row_len, strategy, |r, row_dst| {
            row_dst.fill(0.0);
            for (i, &k) in self.kernel_y.iter().enumerate() {
                let Some(y) = self.border.index(r as isize + i as isize - half_y, rows) else {
                    continue;
                };
                let row_temp = &temp[y * row_len..(y + 1) * row_len];
                for (out, &v) in row_dst.iter_mut().zip(row_temp.iter()) {
                    *out += v * k;
                }
            }
        });
    }
}

/// Apply a separable filter to an image.
///
/// The image is first convolved row-wise with `kernel_x` and then column-wise with
/// `kernel_y`. Both kernels are centered on `len / 2`.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_x` - The horizontal kernel.
/// * `kernel_y` - The vertical kernel.
/// * `border` - How samples outside the image are synthesized.
/// * `strategy` - How the rows are scheduled.
///
/// # Errors
///
/// Returns [`ImageError::InvalidKernelLength`] if a kernel is empty and
/// [`ImageError::InvalidImageSize`] if `src` and `dst` differ in size.
pub fn separable_filter<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    kernel_x: &[f32],
    kernel_y: &[f32],
    border: BorderMode,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    if kernel_x.is_empty() || kernel_y.is_empty() {
        return Err(ImageError::InvalidKernelLength(
            kernel_x.len(),
            kernel_y.len(),
        ));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let filter = SeparableFilter {
        kernel_x,
        kernel_y,
        border,
    };
    filter.apply(src, dst, strategy);

    Ok(())
}
