//! Sequential filter application
//!
//! `FilterSequence` is the master stage wrapping the concrete filters: it
//! applies them in order and owns the default render factor used whenever
//! a call does not supply one.

use image::RgbImage;

use super::ImageFilter;
use crate::error::Result;

/// An ordered sequence of filters with a default render factor
pub struct FilterSequence {
    stages: Vec<Box<dyn ImageFilter>>,
    default_render_factor: u32,
}

impl FilterSequence {
    /// Create a sequence from stages and a default render factor
    pub fn new(stages: Vec<Box<dyn ImageFilter>>, default_render_factor: u32) -> Self {
        FilterSequence {
            stages,
            default_render_factor,
        }
    }

    /// Add a stage to the end of the sequence
    pub fn add(mut self, stage: Box<dyn ImageFilter>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Get the number of stages in the sequence
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// The render factor used when a call supplies none
    pub fn default_render_factor(&self) -> u32 {
        self.default_render_factor
    }
}

impl ImageFilter for FilterSequence {
    /// Process an image through all stages in order
    ///
    /// The guide image is held fixed across stages; each stage receives the
    /// previous stage's output as its input. An explicit render factor wins
    /// over the sequence default. An empty sequence returns the input
    /// unchanged.
    fn apply(
        &self,
        input: &RgbImage,
        guide: &RgbImage,
        render_factor: Option<u32>,
    ) -> Result<RgbImage> {
        let factor = Some(render_factor.unwrap_or(self.default_render_factor));

        let mut current = input.clone();
        for stage in &self.stages {
            current = stage.apply(&current, guide, factor)?;
        }
        Ok(current)
    }

    fn clear_cache(&self) {
        for stage in &self.stages {
            stage.clear_cache();
        }
    }
}
