//! Dense optical flow.
//!
//! The flow between two grayscale frames is stored in an `Image<f32, 2>` holding, for
//! every pixel of the first frame, its displacement `(dx, dy)` towards the second frame.

mod farneback;
mod magnitude;

pub use farneback::{calc_optical_flow_farneback, FarnebackParams};
pub use magnitude::flow_magnitude;
