use nimbus_image::{Image, ImageSize};
use nimbus_imgproc::color::gray_from_rgb_u8;
use nimbus_imgproc::parallel::ExecutionStrategy;

use crate::error::{ensure_same_size, DriftError};
use crate::flow::{estimate_flow, FlowField};
use crate::heatmap::render_heatmap;
use crate::mask::change_mask;
use crate::panel::{cell_size, compose_panel, PanelInputs, DEFAULT_PANEL_SIZE};
use crate::vectors::{draw_motion_vectors, DEFAULT_VECTOR_STRIDE};

/// Runtime configuration of the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Size of the composed panel.
    pub panel_size: ImageSize,
    /// Spacing in pixels between two drawn motion vectors.
    pub vector_stride: usize,
    /// How the row based operations are scheduled.
    pub strategy: ExecutionStrategy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            panel_size: DEFAULT_PANEL_SIZE,
            vector_stride: DEFAULT_VECTOR_STRIDE,
            strategy: ExecutionStrategy::Serial,
        }
    }
}

/// The derived views of a pair of images.
#[derive(Debug, Clone, PartialEq)]
pub struct Visualizations {
    /// The estimated motion field.
    pub flow: FlowField,
    /// Motion vectors drawn over the first image.
    pub vectors: Image<u8, 3>,
    /// Motion magnitude heatmap.
    pub heatmap: Image<u8, 3>,
    /// Change mask.
    pub mask: Image<u8, 3>,
}

fn to_gray(img: &Image<u8, 3>, strategy: ExecutionStrategy) -> Result<Image<u8, 1>, DriftError> {
    let mut gray = Image::<u8, 1>::from_size_val(img.size(), 0)?;
    gray_from_rgb_u8(img, &mut gray, strategy)?;
    Ok(gray)
}

/// Compute the motion vectors, the heatmap and the change mask of two images.
///
/// # Errors
///
/// Returns [`DriftError::DimensionMismatch`] when the sizes differ,
/// [`DriftError::EmptyImage`] for images without pixels and
/// [`DriftError::InvalidStride`] for a zero vector stride. All are reported before any
/// processing.
pub fn create_visualizations(
    img1: &Image<u8, 3>,
    img2: &Image<u8, 3>,
    config: &AnalysisConfig,
) -> Result<Visualizations, DriftError> {
    ensure_same_size(img1.size(), img2.size())?;
    if img1.size().is_empty() {
        return Err(DriftError::EmptyImage);
    }
    if config.vector_stride == 0 {
        return Err(DriftError::InvalidStride);
    }

    let strategy = config.strategy;

    let gray1 = to_gray(img1, strategy)?;
    let gray2 = to_gray(img2, strategy)?;

    let flow = estimate_flow(&gray1, &gray2, strategy)?;
    log::debug!("motion estimated");

    let vectors = draw_motion_vectors(img1, &flow, config.vector_stride)?;
    let heatmap = render_heatmap(&flow, strategy)?;
    let mask = change_mask(img1, img2, strategy)?;

    Ok(Visualizations {
        flow,
        vectors,
        heatmap,
        mask,
    })
}

/// Run the whole analysis and compose the panel.
///
/// Either the complete panel is returned or an error, never a partial panel.
///
/// # Example
///
/// ```
/// use nimbus_image::{Image, ImageSize};
/// use nimbus_drift::{analyze, AnalysisConfig};
///
/// let size = ImageSize { width: 64, height: 48 };
/// let day1 = Image::<u8, 3>::from_size_pixel(size, [90, 120, 200]).unwrap();
/// let day2 = Image::<u8, 3>::from_size_pixel(size, [90, 120, 250]).unwrap();
///
/// let panel = analyze(&day1, &day2, &AnalysisConfig::default()).unwrap();
/// assert_eq!(panel.width(), 1600);
/// assert_eq!(panel.height(), 900);
/// ```
pub fn analyze(
    img1: &Image<u8, 3>,
    img2: &Image<u8, 3>,
    config: &AnalysisConfig,
) -> Result<Image<u8, 3>, DriftError> {
    if cell_size(config.panel_size).is_empty() {
        return Err(DriftError::InvalidPanelSize(config.panel_size));
    }

    log::info!(
        "analyzing {} images into a {} panel",
        img1.size(),
        config.panel_size
    );

    let vis = create_visualizations(img1, img2, config)?;

    let panel = compose_panel(
        &PanelInputs {
            day1: img1,
            day2: img2,
            vectors: &vis.vectors,
            heatmap: &vis.heatmap,
            mask: &vis.mask,
        },
        config.panel_size,
    )?;

    log::info!("analysis done");

    Ok(panel)
}
