#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations and colormaps.
pub mod color;

/// image basic operations module.
pub mod core;

/// utilities to draw on images.
pub mod draw;

/// image filtering module.
pub mod filter;

/// dense optical flow module.
pub mod flow;

/// utilities for interpolation.
pub mod interpolation;

/// operations to normalize images.
pub mod normalize;

/// module containing parallization utilities.
pub mod parallel;

/// Pyramid operations
pub mod pyramid;

/// utility functions for resizing images.
pub mod resize;

/// bitmap text rendering.
pub mod text;

/// operations to threshold images.
pub mod threshold;
