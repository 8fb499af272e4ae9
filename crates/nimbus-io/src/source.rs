//! Date indexed image sources.
//!
//! The analysis compares the images of two days. An [`ImageSource`] resolves a
//! calendar date to an RGB image; [`DatedImageCache`] reads them from a local
//! directory where a downloader stored one file per day, named `YYYY-MM-DD.<ext>`.

use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use nimbus_image::Image;

use crate::error::IoError;
use crate::functional::read_image_any_rgb8;

/// Default directory of the dated image cache.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default file extension of the cached images.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Something that can provide the image captured on a given day.
pub trait ImageSource {
    /// Load the RGB image of the given date.
    fn load(&self, date: NaiveDate) -> Result<Image<u8, 3>, IoError>;

    /// Load the images of two dates.
    ///
    /// Both images are loaded before returning so that a missing second image is
    /// reported before any processing starts.
    fn load_pair(
        &self,
        day1: NaiveDate,
        day2: NaiveDate,
    ) -> Result<(Image<u8, 3>, Image<u8, 3>), IoError> {
        let img1 = self.load(day1)?;
        let img2 = self.load(day2)?;
        Ok((img1, img2))
    }
}

/// A directory holding one image per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedImageCache {
    root: PathBuf,
    extension: String,
}

impl Default for DatedImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl DatedImageCache {
    /// Create a cache rooted at `root` holding `jpg` files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different file extension, without the leading dot.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The directory of the cache.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path where the image of `date` is expected.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use nimbus_io::source::DatedImageCache;
    ///
    /// let cache = DatedImageCache::new("data");
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
    /// assert_eq!(cache.path_for(date), std::path::Path::new("data/2025-03-09.jpg"));
    /// ```
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join(format!("{}.{}", date.format("%Y-%m-%d"), self.extension))
    }
}

impl ImageSource for DatedImageCache {
    fn load(&self, date: NaiveDate) -> Result<Image<u8, 3>, IoError> {
        let path = self.path_for(date);
        if !path.exists() {
            return Err(IoError::MissingInput { date, path });
        }
        log::debug!("loading {date} from {}", path.display());
        read_image_any_rgb8(path)
    }
}

/// The pair `(yesterday, today)` for the given day.
///
/// Returns `None` if the previous day is not representable.
pub fn consecutive_days(today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let yesterday = today.checked_sub_days(Days::new(1))?;
    Some((yesterday, today))
}
