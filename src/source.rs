//! Image acquisition
//!
//! Resolves images from local paths or remote URLs into in-memory RGB
//! bitmaps. Every image is converted to RGB8 before use, regardless of
//! source encoding. URL fetches block with a fixed 30-second timeout and
//! are never retried.

use std::fs;
use std::path::Path;
use std::time::Duration;

use image::{ImageError, RgbImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Timeout applied to a URL fetch
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Open a local image file and convert it to RGB
pub fn open_image(path: &Path) -> Result<RgbImage> {
    match image::open(path) {
        Ok(img) => Ok(img.to_rgb8()),
        Err(ImageError::IoError(e)) => Err(Error::Io(e)),
        Err(e) => Err(Error::decode(format!("{}: {}", path.display(), e))),
    }
}

/// Write an RGB image to a file, format chosen by extension
pub fn save_image(image: &RgbImage, path: &Path) -> Result<()> {
    match image.save(path) {
        Ok(()) => Ok(()),
        Err(ImageError::IoError(e)) => Err(Error::Io(e)),
        Err(e) => Err(Error::decode(format!("{}: {}", path.display(), e))),
    }
}

/// Fetch an image over HTTP and persist it to a local path
///
/// The response body is decoded (and converted to RGB) before anything is
/// written, so a failed fetch never leaves a partial file behind. The
/// decoded image is saved to `save_path` so subsequent steps can operate
/// uniformly on a path.
pub fn fetch_image(url: &str, save_path: &Path) -> Result<RgbImage> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| Error::network(format!("failed to build HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| Error::network(format!("GET {}: {}", url, e)))?
        .error_for_status()
        .map_err(|e| Error::network(format!("GET {}: {}", url, e)))?;

    let bytes = response
        .bytes()
        .map_err(|e| Error::network(format!("reading body of {}: {}", url, e)))?;

    let img = image::load_from_memory(&bytes)
        .map_err(|e| Error::decode(format!("response body of {}: {}", url, e)))?
        .to_rgb8();

    if let Some(parent) = save_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    save_image(&img, save_path)?;

    debug!(
        "fetched {} ({} bytes) -> {}",
        url,
        bytes.len(),
        save_path.display()
    );

    Ok(img)
}
