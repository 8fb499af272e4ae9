/// Create a box blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
///
/// # Returns
///
/// A vector of the kernel.
pub fn box_blur_kernel_1d(kernel_size: usize) -> Vec<f32> {
    vec![1.0 / kernel_size as f32; kernel_size]
}

/// Create a gaussian blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Returns
///
/// A vector of the kernel.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = (kernel_size as f32 - 1.0) / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

/// Sigma used for a gaussian kernel of the given size when no sigma is requested.
///
/// `sigma = 0.3 * ((kernel_size - 1) * 0.5 - 1) + 0.8`
pub fn gaussian_sigma_for_size(kernel_size: usize) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_blur_kernel_1d() {
        let kernel = box_blur_kernel_1d(4);
        assert_eq!(kernel, vec![0.25; 4]);
    }

    #[test]
    fn test_gaussian_kernel_1d() {
        let kernel = gaussian_kernel_1d(5, 0.5);

        let expected = [
            0.00026386508,
            0.10645077,
            0.78657067,
            0.10645077,
            0.00026386508,
        ];

        for (k, e) in kernel.iter().zip(expected.iter()) {
            approx::assert_relative_eq!(*k, *e, max_relative = 1e-5);
        }
        approx::assert_relative_eq!(kernel.iter().sum::<f32>(), 1.0, max_relative = 1e-6);
    }

    #[test]
    fn test_gaussian_sigma_for_size() {
        approx::assert_relative_eq!(gaussian_sigma_for_size(3), 0.8);
        approx::assert_relative_eq!(gaussian_sigma_for_size(5), 1.1, max_relative = 1e-6);
    }
}
