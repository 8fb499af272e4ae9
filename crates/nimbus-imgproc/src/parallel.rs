use rayon::prelude::*;

use nimbus_image::Image;

/// Controls how row based operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process rows in parallel.
    ///
    /// The result is identical to [`ExecutionStrategy::Serial`]; only the
    /// scheduling differs.
    ParallelRows,
}

/// Apply a function to each pixel of the image, row by row.
///
/// The closure receives the `C1` samples of the source pixel and the `C2`
/// samples of the destination pixel at the same location.
pub fn iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    strategy: ExecutionStrategy,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = src.cols();
    if cols == 0 || src.rows() == 0 {
        return;
    }

    let row_fn = |src_chunk: &[T1], dst_chunk: &mut [T2]| {
        src_chunk
            .chunks_exact(C1)
            .zip(dst_chunk.chunks_exact_mut(C2))
            .for_each(|(src_pixel, dst_pixel)| {
                f(src_pixel, dst_pixel);
            });
    };

    match strategy {
        ExecutionStrategy::Serial => src
            .as_slice()
            .chunks_exact(C1 * cols)
            .zip(dst.as_slice_mut().chunks_exact_mut(C2 * cols))
            .for_each(|(s, d)| row_fn(s, d)),
        ExecutionStrategy::ParallelRows => src
            .as_slice()
            .par_chunks_exact(C1 * cols)
            .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
            .for_each(|(s, d)| row_fn(s, d)),
    }
}

/// Apply a function to each sample of the image, row by row.
pub fn iter_rows_val<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    strategy: ExecutionStrategy,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = src.cols();
    if cols == 0 || src.rows() == 0 {
        return;
    }

    let row_fn = |src_chunk: &[T1], dst_chunk: &mut [T2]| {
        src_chunk
            .iter()
            .zip(dst_chunk.iter_mut())
            .for_each(|(src_val, dst_val)| {
                f(src_val, dst_val);
            });
    };

    match strategy {
        ExecutionStrategy::Serial => src
            .as_slice()
            .chunks_exact(C1 * cols)
            .zip(dst.as_slice_mut().chunks_exact_mut(C2 * cols))
            .for_each(|(s, d)| row_fn(s, d)),
        ExecutionStrategy::ParallelRows => src
            .as_slice()
            .par_chunks_exact(C1 * cols)
            .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
            .for_each(|(s, d)| row_fn(s, d)),
    }
}

/// Apply a function to each pair of samples of two images, row by row.
pub fn iter_rows_val_two<T1, const C1: usize, T2, const C2: usize, T3, const C3: usize>(
    src1: &Image<T1, C1>,
    src2: &Image<T2, C2>,
    dst: &mut Image<T3, C3>,
    strategy: ExecutionStrategy,
    f: impl Fn(&T1, &T2, &mut T3) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
    T3: Send + Sync,
{
    let cols = src1.cols();
    if cols == 0 || src1.rows() == 0 {
        return;
    }

    let row_fn = |src1_chunk: &[T1], src2_chunk: &[T2], dst_chunk: &mut [T3]| {
        src1_chunk
            .iter()
            .zip(src2_chunk.iter())
            .zip(dst_chunk.iter_mut())
            .for_each(|((a, b), out)| {
                f(a, b, out);
            });
    };

    match strategy {
        ExecutionStrategy::Serial => src1
            .as_slice()
            .chunks_exact(C1 * cols)
            .zip(src2.as_slice().chunks_exact(C2 * cols))
            .zip(dst.as_slice_mut().chunks_exact_mut(C3 * cols))
            .for_each(|((s1, s2), d)| row_fn(s1, s2, d)),
        ExecutionStrategy::ParallelRows => src1
            .as_slice()
            .par_chunks_exact(C1 * cols)
            .zip(src2.as_slice().par_chunks_exact(C2 * cols))
            .zip(dst.as_slice_mut().par_chunks_exact_mut(C3 * cols))
            .for_each(|((s1, s2), d)| row_fn(s1, s2, d)),
    }
}

/// Apply a function to each row of a flat buffer.
///
/// The closure receives the row index and the mutable row of `row_len` elements.
pub fn for_each_row<T>(
    data: &mut [T],
    row_len: usize,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, &mut [T]) + Send + Sync,
) where
    T: Send,
{
    if row_len == 0 {
        return;
    }

    match strategy {
        ExecutionStrategy::Serial => data
            .chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(r, row)| f(r, row)),
        ExecutionStrategy::ParallelRows => data
            .par_chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(r, row)| f(r, row)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_image::{ImageError, ImageSize};

    #[test]
    fn test_iter_rows_strategies_match() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 4,
        };
        let src = Image::<u8, 3>::new(size, (0..36).collect())?;

        let mut serial = Image::<u8, 1>::from_size_val(size, 0)?;
        let mut parallel = Image::<u8, 1>::from_size_val(size, 0)?;

        let sum = |s: &[u8], d: &mut [u8]| d[0] = s[0] + s[1] + s[2];
        iter_rows(&src, &mut serial, ExecutionStrategy::Serial, sum);
        iter_rows(&src, &mut parallel, ExecutionStrategy::ParallelRows, sum);

        assert_eq!(serial.as_slice()[0], 3);
        assert_eq!(serial.as_slice()[11], 33 + 34 + 35);
        assert_eq!(serial, parallel);
        Ok(())
    }

    #[test]
    fn test_iter_rows_val_two() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let a = Image::<u8, 1>::new(size, vec![1, 2, 3, 4])?;
        let b = Image::<u8, 1>::new(size, vec![10, 20, 30, 40])?;
        let mut dst = Image::<u8, 1>::from_size_val(size, 0)?;

        iter_rows_val_two(&a, &b, &mut dst, ExecutionStrategy::Serial, |x, y, o| {
            *o = x + y
        });

        assert_eq!(dst.as_slice(), &[11, 22, 33, 44]);
        Ok(())
    }

    #[test]
    fn test_for_each_row() {
        let mut data = vec![0usize; 6];
        for_each_row(&mut data, 2, ExecutionStrategy::ParallelRows, |r, row| {
            row.iter_mut().for_each(|v| *v = r)
        });
        assert_eq!(data, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_empty_image_is_noop() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 0,
            height: 3,
        };
        let src = Image::<u8, 1>::new(size, vec![])?;
        let mut dst = Image::<u8, 1>::new(size, vec![])?;
        iter_rows_val(&src, &mut dst, ExecutionStrategy::Serial, |s, d| *d = *s);
        assert!(dst.as_slice().is_empty());
        Ok(())
    }
}
