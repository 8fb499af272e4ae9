mod colormap;
mod gray;

pub use colormap::{apply_colormap, Colormap};
pub use gray::{gray_from_rgb_u8, rgb_from_gray};
