#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types of the analysis.
pub mod error;

/// Dense motion estimation between the two days.
pub mod flow;

/// Pseudocolor rendering of the motion magnitude.
pub mod heatmap;

/// Binary mask of the changed areas.
pub mod mask;

/// Composition of the summary panel.
pub mod panel;

/// The analysis pipeline tying all stages together.
pub mod pipeline;

/// Sparse sampling and drawing of the motion field.
pub mod vectors;

pub use crate::error::DriftError;
pub use crate::pipeline::{analyze, create_visualizations, AnalysisConfig, Visualizations};
