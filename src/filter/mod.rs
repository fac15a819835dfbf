//! Image filtering
//!
//! Filters are the transform stages between a source image and a rendered
//! result. The colorization model is wrapped as one stage
//! ([`ColorizeFilter`]); [`FilterSequence`] applies stages in order and
//! carries the default render factor.

pub mod chain;
pub mod colorize;

pub use chain::FilterSequence;
pub use colorize::ColorizeFilter;

use image::RgbImage;

use crate::error::Result;

/// Filter trait for transforming images
pub trait ImageFilter {
    /// Transform an input image
    ///
    /// `guide` is a style/reference image (callers commonly pass the
    /// original source). `render_factor` is an uninterpreted knob passed
    /// through to whatever interprets it downstream.
    fn apply(
        &self,
        input: &RgbImage,
        guide: &RgbImage,
        render_factor: Option<u32>,
    ) -> Result<RgbImage>;

    /// Release any accelerator memory held by a prior apply call
    ///
    /// Best effort; default is a no-op.
    fn clear_cache(&self) {}
}
