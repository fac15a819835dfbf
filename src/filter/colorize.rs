//! Colorization filter stage

use image::RgbImage;

use super::ImageFilter;
use crate::error::{Error, Result};
use crate::model::Generator;

/// Filter stage that runs an image through a colorization generator
pub struct ColorizeFilter {
    generator: Box<dyn Generator>,
}

impl ColorizeFilter {
    /// Create a new colorize filter around a loaded generator
    pub fn new(generator: Box<dyn Generator>) -> Self {
        ColorizeFilter { generator }
    }

    /// Name of the underlying generator
    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }
}

impl ImageFilter for ColorizeFilter {
    fn apply(
        &self,
        input: &RgbImage,
        _guide: &RgbImage,
        render_factor: Option<u32>,
    ) -> Result<RgbImage> {
        self.generator
            .forward(input, render_factor)
            .map_err(|e| match e {
                e @ Error::Model(_) => e,
                other => Error::model(format!(
                    "generator {} failed: {}",
                    self.generator.name(),
                    other
                )),
            })
    }

    fn clear_cache(&self) {
        self.generator.clear_cache();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct InvertGenerator;

    impl Generator for InvertGenerator {
        fn name(&self) -> &str {
            "invert"
        }

        fn forward(&self, input: &RgbImage, _render_factor: Option<u32>) -> Result<RgbImage> {
            let mut out = input.clone();
            for pixel in out.pixels_mut() {
                pixel.0 = [255 - pixel.0[0], 255 - pixel.0[1], 255 - pixel.0[2]];
            }
            Ok(out)
        }
    }

    struct FailingGenerator;

    impl Generator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }

        fn forward(&self, _input: &RgbImage, _render_factor: Option<u32>) -> Result<RgbImage> {
            Err(Error::invalid_input("weights not loaded"))
        }
    }

    #[test]
    fn test_apply_runs_generator() {
        let filter = ColorizeFilter::new(Box::new(InvertGenerator));
        assert_eq!(filter.generator_name(), "invert");

        let input = RgbImage::from_pixel(4, 4, image::Rgb([10, 20, 30]));
        let out = filter.apply(&input, &input, None).unwrap();
        assert_eq!(out.get_pixel(0, 0).0, [245, 235, 225]);
        assert_eq!(out.dimensions(), input.dimensions());
    }

    #[test]
    fn test_generator_failure_maps_to_model_error() {
        let filter = ColorizeFilter::new(Box::new(FailingGenerator));
        let input = RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 0]));

        let err = filter.apply(&input, &input, Some(35)).unwrap_err();
        assert!(matches!(err, Error::Model(_)));
    }
}
