#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use nimbus_image as image;

#[doc(inline)]
pub use nimbus_imgproc as imgproc;

#[doc(inline)]
pub use nimbus_io as io;

#[doc(inline)]
pub use nimbus_drift as drift;
