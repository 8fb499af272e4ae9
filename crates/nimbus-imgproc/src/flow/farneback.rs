//! Dense optical flow based on polynomial expansion.
//!
//! Reference: G. Farnebäck, "Two-Frame Motion Estimation Based on Polynomial
//! Expansion", SCIA 2003.
//!
//! Every pixel neighborhood of both frames is approximated by a quadratic polynomial
//! `x^T A x + b^T x + c`. A displacement `d` between the frames changes the linear
//! coefficient by `-2 A d`, so `d` follows from a small linear system that is averaged
//! over a window and refined coarse to fine over a gaussian pyramid.

use nimbus_image::{Image, ImageError, ImageSize};

use crate::filter::{kernels::box_blur_kernel_1d, separable_filter, BorderMode};
use crate::interpolation::InterpolationMode;
use crate::parallel::{self, ExecutionStrategy};
use crate::pyramid;
use crate::resize::resize_native;

/// Levels whose smaller side would fall below this many pixels are not built.
const MIN_LEVEL_SIZE: usize = 32;

/// Number of outer rows/columns whose equations are down-weighted.
const BORDER: usize = 5;

/// Weights of the outer rows/columns, from the edge inwards.
const BORDER_WEIGHTS: [f32; BORDER] = [0.14, 0.14, 0.4472, 0.8780, 0.9976];

/// Parameters of the Farnebäck dense optical flow.
#[derive(Debug, Clone, PartialEq)]
pub struct FarnebackParams {
    /// Scale between two consecutive pyramid levels, in `(0, 1)`.
    pub pyr_scale: f64,
    /// Number of pyramid levels above the full resolution image.
    pub levels: usize,
    /// Side of the averaging window in pixels.
    pub win_size: usize,
    /// Number of refinement iterations per pyramid level.
    pub iterations: usize,
    /// Radius of the neighborhood used for the polynomial expansion.
    pub poly_n: usize,
    /// Sigma of the gaussian weighting the polynomial expansion.
    pub poly_sigma: f64,
}

impl Default for FarnebackParams {
    fn default() -> Self {
        Self {
            pyr_scale: 0.5,
            levels: 3,
            win_size: 15,
            iterations: 3,
            poly_n: 5,
            poly_sigma: 1.2,
        }
    }
}

impl FarnebackParams {
    /// Check that the parameters describe a valid configuration.
    pub fn validate(&self) -> Result<(), ImageError> {
        if !(self.pyr_scale > 0.0 && self.pyr_scale < 1.0) {
            return Err(ImageError::InvalidParameter(format!(
                "pyr_scale must be in (0, 1), got {}",
                self.pyr_scale
            )));
        }
        if self.win_size == 0 {
            return Err(ImageError::InvalidParameter(
                "win_size must be positive".to_string(),
            ));
        }
        if self.poly_n == 0 {
            return Err(ImageError::InvalidParameter(
                "poly_n must be positive".to_string(),
            ));
        }
        if !(self.poly_sigma >= 0.0) {
            return Err(ImageError::InvalidParameter(format!(
                "poly_sigma must be non negative, got {}",
                self.poly_sigma
            )));
        }
        Ok(())
    }
}

/// Gaussian applicability and the entries of the inverse normal matrix used by the
/// polynomial expansion.
struct PolyBasis {
    n: usize,
    g: Vec<f32>,
    xg: Vec<f32>,
    xxg: Vec<f32>,
    ig11: f64,
    ig03: f64,
    ig33: f64,
    ig55: f64,
}

impl PolyBasis {
    fn new(n: usize, sigma: f64) -> Self {
        let sigma = if sigma < f32::EPSILON as f64 {
            n as f64 * 0.3
        } else {
            sigma
        };

        let ni = n as isize;
        let raw = (-ni..=ni)
            .map(|x| (-((x * x) as f64) / (2.0 * sigma * sigma)).exp() as f32)
            .collect::<Vec<_>>();
        let norm = 1.0 / raw.iter().map(|&v| v as f64).sum::<f64>();

        // indexed by |x|, the kernels are symmetric
        let g = raw[n..]
            .iter()
            .map(|&v| (v as f64 * norm) as f32)
            .collect::<Vec<_>>();
        let xg = g
            .iter()
            .enumerate()
            .map(|(x, &v)| x as f32 * v)
            .collect::<Vec<_>>();
        let xxg = g
            .iter()
            .enumerate()
            .map(|(x, &v)| (x * x) as f32 * v)
            .collect::<Vec<_>>();

        let (mut g00, mut g11, mut g33, mut g55) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
        for y in -ni..=ni {
            for x in -ni..=ni {
                let w = g[y.unsigned_abs()] as f64 * g[x.unsigned_abs()] as f64;
                let (xx, yy) = ((x * x) as f64, (y * y) as f64);
                g00 += w;
                g11 += w * xx;
                g33 += w * xx * xx;
                g55 += w * xx * yy;
            }
        }

        // the normal matrix over [1, x, y, x², y², xy] only couples 1, x² and y²:
        // [[g00, g11, g11], [g11, g33, g55], [g11, g55, g33]]
        let (a, c, d, f) = (g00, g11, g33, g55);
        let det = a * (d * d - f * f) - 2.0 * c * c * (d - f);

        Self {
            n,
            g,
            xg,
            xxg,
            ig11: 1.0 / g11,
            ig03: -c * (d - f) / det,
            ig33: (a * d - c * c) / det,
            ig55: 1.0 / g55,
        }
    }

    /// Expand every pixel neighborhood of `src` into five polynomial coefficients.
    ///
    /// The channels of `dst` hold the `y`, `x`, `y²`, `x²` and `xy` coefficients.
    fn expand(&self, src: &Image<f32, 1>, dst: &mut Image<f32, 5>, strategy: ExecutionStrategy) {
        let (rows, cols) = (src.rows(), src.cols());
        let n = self.n;
        let data = src.as_slice();

        parallel::for_each_row(dst.as_slice_mut(), cols * 5, strategy, |y, drow| {
            // vertical pass, padded by n pixels on each side
            let mut row = vec![0.0f32; (cols + 2 * n) * 3];
            let center = &data[y * cols..(y + 1) * cols];
            for (x, &v) in center.iter().enumerate() {
                row[(x + n) * 3] = v * self.g[0];
            }
            for k in 1..=n {
                let up_y = y.saturating_sub(k);
                let down_y = (y + k).min(rows - 1);
                let up = &data[up_y * cols..(up_y + 1) * cols];
                let down = &data[down_y * cols..(down_y + 1) * cols];
                for x in 0..cols {
                    let p = (x + n) * 3;
                    let sum = up[x] + down[x];
                    row[p] += self.g[k] * sum;
                    row[p + 1] += self.xg[k] * (down[x] - up[x]);
                    row[p + 2] += self.xxg[k] * sum;
                }
            }

            // replicate the first and last columns into the padding
            for i in 0..n {
                row.copy_within(n * 3..n * 3 + 3, i * 3);
                row.copy_within((cols + n - 1) * 3..(cols + n) * 3, (cols + n + i) * 3);
            }

            // horizontal pass
            for (x, out) in drow.chunks_exact_mut(5).enumerate() {
                let c = (x + n) * 3;
                let g0 = self.g[0] as f64;
                let mut b1 = row[c] as f64 * g0;
                let mut b2 = 0.0;
                let mut b3 = row[c + 1] as f64 * g0;
                let mut b4 = 0.0;
                let mut b5 = row[c + 2] as f64 * g0;
                let mut b6 = 0.0;

                for k in 1..=n {
                    let (r, l) = (c + k * 3, c - k * 3);
                    let (gk, xgk, xxgk) = (self.g[k] as f64, self.xg[k] as f64, self.xxg[k] as f64);
                    let tg = (row[r] + row[l]) as f64;
                    b1 += tg * gk;
                    b4 += tg * xxgk;
                    b2 += (row[r] - row[l]) as f64 * xgk;
                    b3 += (row[r + 1] + row[l + 1]) as f64 * gk;
                    b6 += (row[r + 1] - row[l + 1]) as f64 * xgk;
                    b5 += (row[r + 2] + row[l + 2]) as f64 * gk;
                }

                out[0] = (b3 * self.ig11) as f32;
                out[1] = (b2 * self.ig11) as f32;
                out[2] = (b1 * self.ig03 + b5 * self.ig33) as f32;
                out[3] = (b1 * self.ig03 + b4 * self.ig33) as f32;
                out[4] = (b6 * self.ig55) as f32;
            }
        });
    }
}

/// Down-weighting factor of the equations at index `i` of an axis of length `len`.
#[inline]
fn border_weight(i: usize, len: usize) -> f32 {
    let mut w = 1.0;
    if i < BORDER {
        w *= BORDER_WEIGHTS[i];
    }
    if i + BORDER >= len {
        w *= BORDER_WEIGHTS[len - i - 1];
    }
    w
}

/// Build the per pixel normal equations `G d = h` from the expansions of both frames
/// and the current flow estimate.
///
/// The channels of `m` hold `G11`, `G12`, `G22`, `h1` and `h2`.
fn update_matrices(
    r0: &Image<f32, 5>,
    r1: &Image<f32, 5>,
    flow: &Image<f32, 2>,
    m: &mut Image<f32, 5>,
    strategy: ExecutionStrategy,
) {
    let (rows, cols) = (flow.rows(), flow.cols());
    let r0d = r0.as_slice();
    let r1d = r1.as_slice();
    let fd = flow.as_slice();
    let (max_x, max_y) = ((cols - 1) as f32, (rows - 1) as f32);

    parallel::for_each_row(m.as_slice_mut(), cols * 5, strategy, |y, mrow| {
        for (x, out) in mrow.chunks_exact_mut(5).enumerate() {
            let i = y * cols + x;
            let p0 = &r0d[i * 5..i * 5 + 5];
            let (dx, dy) = (fd[i * 2], fd[i * 2 + 1]);
            let (fx, fy) = (x as f32 + dx, y as f32 + dy);

            let (mut r2, mut r3, r4, r5, r6) = if fx >= 0.0 && fy >= 0.0 && fx <= max_x && fy <= max_y {
                let (x1, y1) = (fx.floor() as usize, fy.floor() as usize);
                let (x2, y2) = ((x1 + 1).min(cols - 1), (y1 + 1).min(rows - 1));
                let (ax, ay) = (fx - x1 as f32, fy - y1 as f32);

                let a00 = (1.0 - ax) * (1.0 - ay);
                let a01 = ax * (1.0 - ay);
                let a10 = (1.0 - ax) * ay;
                let a11 = ax * ay;

                let q00 = &r1d[(y1 * cols + x1) * 5..][..5];
                let q01 = &r1d[(y1 * cols + x2) * 5..][..5];
                let q10 = &r1d[(y2 * cols + x1) * 5..][..5];
                let q11 = &r1d[(y2 * cols + x2) * 5..][..5];
                let sample = |k: usize| a00 * q00[k] + a01 * q01[k] + a10 * q10[k] + a11 * q11[k];

                (
                    sample(0),
                    sample(1),
                    (p0[2] + sample(2)) * 0.5,
                    (p0[3] + sample(3)) * 0.5,
                    (p0[4] + sample(4)) * 0.25,
                )
            } else {
                (0.0, 0.0, p0[2], p0[3], p0[4] * 0.5)
            };

            r2 = (p0[0] - r2) * 0.5;
            r3 = (p0[1] - r3) * 0.5;

            r2 += r4 * dy + r6 * dx;
            r3 += r6 * dy + r5 * dx;

            let scale = border_weight(x, cols) * border_weight(y, rows);
            let (r2, r3, r4, r5, r6) = (r2 * scale, r3 * scale, r4 * scale, r5 * scale, r6 * scale);

            out[0] = r4 * r4 + r6 * r6;
            out[1] = (r4 + r5) * r6;
            out[2] = r5 * r5 + r6 * r6;
            out[3] = r4 * r2 + r6 * r3;
            out[4] = r6 * r2 + r5 * r3;
        }
    });
}

/// Average the normal equations over a `win_size` box and solve them for the flow.
fn update_flow(
    m: &Image<f32, 5>,
    flow: &mut Image<f32, 2>,
    win_size: usize,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    let kernel = box_blur_kernel_1d(2 * (win_size / 2) + 1);

    let mut blurred = Image::<f32, 5>::from_size_val(m.size(), 0.0)?;
    separable_filter(m, &mut blurred, &kernel, &kernel, BorderMode::Replicate, strategy)?;

    let bd = blurred.as_slice();
    let cols = flow.cols();
    parallel::for_each_row(flow.as_slice_mut(), cols * 2, strategy, |y, frow| {
        for (x, out) in frow.chunks_exact_mut(2).enumerate() {
            let i = (y * cols + x) * 5;
            let g11 = bd[i] as f64;
            let g12 = bd[i + 1] as f64;
            let g22 = bd[i + 2] as f64;
            let h1 = bd[i + 3] as f64;
            let h2 = bd[i + 4] as f64;

            let idet = 1.0 / (g11 * g22 - g12 * g12 + 1e-3);

            out[0] = ((g11 * h2 - g12 * h1) * idet) as f32;
            out[1] = ((g22 * h1 - g12 * h2) * idet) as f32;
        }
    });

    Ok(())
}

/// Compute a dense optical flow between two grayscale frames.
///
/// For every pixel of `prev` the displacement `(dx, dy)` such that
/// `prev(x, y) ≈ next(x + dx, y + dy)` is written into `flow`.
///
/// The pyramid is processed from the coarsest level to the full resolution image.
/// On each level both frames are smoothed, rescaled and expanded into polynomial
/// coefficients. The flow inherited from the coarser level is upscaled and divided
/// by `pyr_scale`, then refined `iterations` times by averaging the normal equations
/// over a `win_size` window. Identical frames yield an exactly zero flow.
///
/// # Arguments
///
/// * `prev` - The first frame.
/// * `next` - The second frame, same size as `prev`.
/// * `flow` - The output flow field, same size as `prev`.
/// * `params` - The algorithm parameters.
/// * `strategy` - How the rows are scheduled. The result does not depend on it.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the sizes differ,
/// [`ImageError::ImageDataNotInitialized`] for empty frames and
/// [`ImageError::InvalidParameter`] for invalid parameters.
///
/// # Example
///
/// ```
/// use nimbus_image::{Image, ImageSize};
/// use nimbus_imgproc::flow::{calc_optical_flow_farneback, FarnebackParams};
/// use nimbus_imgproc::parallel::ExecutionStrategy;
///
/// let size = ImageSize { width: 40, height: 40 };
/// let frame = Image::<f32, 1>::new(size, (0..1600).map(|i| (i % 7) as f32).collect()).unwrap();
/// let mut flow = Image::<f32, 2>::from_size_val(size, 1.0).unwrap();
///
/// calc_optical_flow_farneback(
///     &frame,
///     &frame,
///     &mut flow,
///     &FarnebackParams::default(),
///     ExecutionStrategy::Serial,
/// )
/// .unwrap();
///
/// assert!(flow.as_slice().iter().all(|&v| v == 0.0));
/// ```
pub fn calc_optical_flow_farneback(
    prev: &Image<f32, 1>,
    next: &Image<f32, 1>,
    flow: &mut Image<f32, 2>,
    params: &FarnebackParams,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    params.validate()?;

    if prev.size() != next.size() {
        return Err(ImageError::InvalidImageSize(
            prev.cols(),
            prev.rows(),
            next.cols(),
            next.rows(),
        ));
    }

    if prev.size() != flow.size() {
        return Err(ImageError::InvalidImageSize(
            prev.cols(),
            prev.rows(),
            flow.cols(),
            flow.rows(),
        ));
    }

    if prev.size().is_empty() {
        return Err(ImageError::ImageDataNotInitialized);
    }

    let basis = PolyBasis::new(params.poly_n, params.poly_sigma);
    let levels = pyramid::num_levels(prev.size(), params.pyr_scale, params.levels, MIN_LEVEL_SIZE);

    let mut coarse_flow: Option<Image<f32, 2>> = None;

    for k in (0..=levels).rev() {
        let scale = params.pyr_scale.powi(k as i32);
        let size = if k == 0 {
            prev.size()
        } else {
            pyramid::level_size(prev.size(), scale)
        };

        log::debug!(
            "farneback level {k}: {}x{} (scale {scale:.4})",
            size.width,
            size.height
        );

        let mut level_flow = Image::<f32, 2>::from_size_val(size, 0.0)?;
        if let Some(coarse) = &coarse_flow {
            resize_native(coarse, &mut level_flow, InterpolationMode::Bilinear, strategy)?;
            let inv_scale = (1.0 / params.pyr_scale) as f32;
            level_flow
                .as_slice_mut()
                .iter_mut()
                .for_each(|v| *v *= inv_scale);
        }

        let r0 = expand_level(prev, size, scale, &basis, strategy)?;
        let r1 = expand_level(next, size, scale, &basis, strategy)?;

        let mut m = Image::<f32, 5>::from_size_val(size, 0.0)?;
        update_matrices(&r0, &r1, &level_flow, &mut m, strategy);

        for i in 0..params.iterations {
            update_flow(&m, &mut level_flow, params.win_size, strategy)?;
            if i + 1 < params.iterations {
                update_matrices(&r0, &r1, &level_flow, &mut m, strategy);
            }
        }

        coarse_flow = Some(level_flow);
    }

    if let Some(level_flow) = coarse_flow {
        flow.as_slice_mut().copy_from_slice(level_flow.as_slice());
    }

    Ok(())
}

/// Smooth and rescale a frame to a pyramid level and expand it into polynomial coefficients.
fn expand_level(
    src: &Image<f32, 1>,
    size: ImageSize,
    scale: f64,
    basis: &PolyBasis,
    strategy: ExecutionStrategy,
) -> Result<Image<f32, 5>, ImageError> {
    let mut level = Image::<f32, 1>::from_size_val(size, 0.0)?;
    pyramid::scale_level(src, &mut level, scale, strategy)?;

    let mut expansion = Image::<f32, 5>::from_size_val(size, 0.0)?;
    basis.expand(&level, &mut expansion, strategy);

    Ok(expansion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn pattern(size: ImageSize, shift_x: f32, shift_y: f32) -> Result<Image<f32, 1>, ImageError> {
        let mut data = Vec::with_capacity(size.area());
        for y in 0..size.height {
            for x in 0..size.width {
                let (u, v) = (x as f32 - shift_x, y as f32 - shift_y);
                data.push(128.0 + 60.0 * (u * 0.3).sin() * (v * 0.25).cos() + 30.0 * (u * 0.11 + v * 0.17).sin());
            }
        }
        Image::new(size, data)
    }

    fn mean_flow(flow: &Image<f32, 2>, margin: usize) -> (f32, f32) {
        let (mut sx, mut sy, mut n) = (0.0, 0.0, 0.0);
        for y in margin..flow.rows() - margin {
            for x in margin..flow.cols() - margin {
                let px = flow.pixel(x, y).unwrap_or(&[0.0, 0.0]);
                sx += px[0];
                sy += px[1];
                n += 1.0;
            }
        }
        (sx / n, sy / n)
    }

    #[test]
    fn test_poly_basis() {
        let basis = PolyBasis::new(5, 1.2);
        approx::assert_relative_eq!(
            basis.g[0] + 2.0 * basis.g[1..].iter().sum::<f32>(),
            1.0,
            max_relative = 1e-5
        );
        assert_eq!(basis.xg[0], 0.0);
        assert!(basis.ig11 > 0.0 && basis.ig33 > 0.0 && basis.ig55 > 0.0);
        assert!(basis.ig03 < 0.0);
    }

    #[test]
    fn test_expand_constant_image() -> Result<(), ImageError> {
        let basis = PolyBasis::new(5, 1.2);
        let src = Image::<f32, 1>::from_size_val([12, 9].into(), 100.0)?;
        let mut dst = Image::<f32, 5>::from_size_val(src.size(), 1.0)?;
        basis.expand(&src, &mut dst, ExecutionStrategy::Serial);
        for px in dst.as_slice().chunks_exact(5) {
            // no gradient and no curvature
            assert_eq!(px[0], 0.0);
            assert_eq!(px[1], 0.0);
            approx::assert_abs_diff_eq!(px[2], 0.0, epsilon = 1e-3);
            approx::assert_abs_diff_eq!(px[3], 0.0, epsilon = 1e-3);
            assert_eq!(px[4], 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_expand_linear_ramp() -> Result<(), ImageError> {
        let basis = PolyBasis::new(5, 1.2);
        let size = ImageSize {
            width: 30,
            height: 30,
        };
        let src = Image::<f32, 1>::new(size, (0..900).map(|i| (i % 30) as f32 * 2.0).collect())?;
        let mut dst = Image::<f32, 5>::from_size_val(size, 0.0)?;
        basis.expand(&src, &mut dst, ExecutionStrategy::ParallelRows);

        // away from the borders the x coefficient is the slope of the ramp
        let px = dst.pixel(15, 15)?;
        approx::assert_abs_diff_eq!(px[1], 2.0, epsilon = 1e-3);
        approx::assert_abs_diff_eq!(px[0], 0.0, epsilon = 1e-4);
        Ok(())
    }

    #[test]
    fn test_border_weight() {
        assert_eq!(border_weight(0, 100), 0.14);
        assert_eq!(border_weight(99, 100), 0.14);
        assert_eq!(border_weight(4, 100), 0.9976);
        assert_eq!(border_weight(50, 100), 1.0);
    }

    #[test]
    fn test_update_flow_uniform_system() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 12,
            height: 9,
        };
        let m = Image::<f32, 5>::from_size_pixel(size, [2.0, 0.5, 1.0, 1.0, 3.0])?;

        // even windows average over the next odd size
        for win_size in [15, 4] {
            let mut flow = Image::<f32, 2>::from_size_val(size, 0.0)?;
            update_flow(&m, &mut flow, win_size, ExecutionStrategy::Serial)?;

            let idet = 1.0 / (2.0 * 1.0 - 0.5 * 0.5 + 1e-3);
            for px in flow.as_slice().chunks_exact(2) {
                approx::assert_abs_diff_eq!(px[0], (5.5 * idet) as f32, epsilon = 1e-5);
                approx::assert_abs_diff_eq!(px[1], (-0.5 * idet) as f32, epsilon = 1e-5);
            }
        }
        Ok(())
    }

    #[test]
    fn test_farneback_identical_frames_zero_flow() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 96,
            height: 80,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let frame = Image::<f32, 1>::new(
            size,
            (0..size.area()).map(|_| rng.random_range(0.0..255.0)).collect(),
        )?;

        let mut flow = Image::<f32, 2>::from_size_val(size, 3.0)?;
        calc_optical_flow_farneback(
            &frame,
            &frame,
            &mut flow,
            &FarnebackParams::default(),
            ExecutionStrategy::Serial,
        )?;

        assert!(flow.as_slice().iter().all(|&v| v == 0.0));
        Ok(())
    }

    #[test]
    fn test_farneback_translation() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 64,
            height: 64,
        };
        let prev = pattern(size, 0.0, 0.0)?;
        let next = pattern(size, 2.0, 0.0)?;

        let mut flow = Image::<f32, 2>::from_size_val(size, 0.0)?;
        calc_optical_flow_farneback(
            &prev,
            &next,
            &mut flow,
            &FarnebackParams::default(),
            ExecutionStrategy::Serial,
        )?;

        let (dx, dy) = mean_flow(&flow, 16);
        assert!((dx - 2.0).abs() < 0.5, "dx error too large: {dx}");
        assert!(dy.abs() < 0.5, "dy error too large: {dy}");
        Ok(())
    }

    #[test]
    fn test_farneback_strategies_agree() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 70,
            height: 50,
        };
        let prev = pattern(size, 0.0, 0.0)?;
        let next = pattern(size, 1.0, -1.0)?;
        let params = FarnebackParams::default();

        let mut serial = Image::<f32, 2>::from_size_val(size, 0.0)?;
        let mut parallel = Image::<f32, 2>::from_size_val(size, 0.0)?;
        calc_optical_flow_farneback(&prev, &next, &mut serial, &params, ExecutionStrategy::Serial)?;
        calc_optical_flow_farneback(
            &prev,
            &next,
            &mut parallel,
            &params,
            ExecutionStrategy::ParallelRows,
        )?;

        assert_eq!(serial, parallel);
        Ok(())
    }

    #[test]
    fn test_farneback_errors() -> Result<(), ImageError> {
        let a = Image::<f32, 1>::from_size_val([40, 40].into(), 0.0)?;
        let b = Image::<f32, 1>::from_size_val([40, 41].into(), 0.0)?;
        let mut flow = Image::<f32, 2>::from_size_val([40, 40].into(), 0.0)?;
        let params = FarnebackParams::default();

        assert!(matches!(
            calc_optical_flow_farneback(&a, &b, &mut flow, &params, ExecutionStrategy::Serial),
            Err(ImageError::InvalidImageSize(40, 40, 40, 41))
        ));

        let bad = FarnebackParams {
            pyr_scale: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            calc_optical_flow_farneback(&a, &a, &mut flow, &bad, ExecutionStrategy::Serial),
            Err(ImageError::InvalidParameter(_))
        ));

        let empty = Image::<f32, 1>::new([0, 0].into(), vec![])?;
        let mut empty_flow = Image::<f32, 2>::new([0, 0].into(), vec![])?;
        assert_eq!(
            calc_optical_flow_farneback(&empty, &empty, &mut empty_flow, &params, ExecutionStrategy::Serial),
            Err(ImageError::ImageDataNotInitialized)
        );
        Ok(())
    }
}
