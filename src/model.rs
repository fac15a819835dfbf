//! Pretrained generator model seam
//!
//! The colorization network itself lives in an external deep-learning
//! runtime. This module defines the capability boundary the rest of the
//! crate programs against: a [`Generator`] turns one RGB image into
//! another, and a [`GeneratorLoader`] produces generators from a
//! [`ModelSpec`] naming pretrained weights on disk.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::Result;

/// An opaque pretrained image-to-image model.
///
/// The `render_factor` knob is an uninterpreted integer forwarded to the
/// model; its resolution/quality trade-off is defined entirely by the
/// implementation behind this trait.
pub trait Generator {
    /// Model name (typically the weights name it was loaded from)
    fn name(&self) -> &str;

    /// Run inference on a single RGB image
    ///
    /// The output is expected to have the same logical dimensions as the
    /// input; this crate does not enforce it.
    fn forward(&self, input: &RgbImage, render_factor: Option<u32>) -> Result<RgbImage>;

    /// Release any accelerator memory cache held by a prior inference call
    ///
    /// Best-effort memory hygiene between sequential calls, never a
    /// correctness requirement. Default is a no-op.
    fn clear_cache(&self) {}
}

/// Generator network architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Architecture {
    /// Wide U-Net variant (the "stable" model)
    Wide,
    /// Deep U-Net variant (the "artistic" model)
    Deep,
}

/// Identifies a pretrained generator on disk
#[derive(Debug, Clone)]
pub struct ModelSpec {
    /// Network architecture of the weights
    pub architecture: Architecture,
    /// Directory the weights live under
    pub root_dir: PathBuf,
    /// Weights file name (without extension)
    pub weights_name: String,
}

impl ModelSpec {
    /// Spec for the stable (wide) pretrained colorizer
    pub fn stable(root_dir: impl AsRef<Path>) -> Self {
        ModelSpec {
            architecture: Architecture::Wide,
            root_dir: root_dir.as_ref().to_path_buf(),
            weights_name: "ColorizeStable_gen".to_string(),
        }
    }

    /// Spec for the artistic (deep) pretrained colorizer
    pub fn artistic(root_dir: impl AsRef<Path>) -> Self {
        ModelSpec {
            architecture: Architecture::Deep,
            root_dir: root_dir.as_ref().to_path_buf(),
            weights_name: "ColorizeArtistic_gen".to_string(),
        }
    }

    /// Override the weights name
    pub fn with_weights_name(mut self, name: impl Into<String>) -> Self {
        self.weights_name = name.into();
        self
    }
}

/// External model factory: loads a [`Generator`] from a [`ModelSpec`]
///
/// Implemented by the deep-learning runtime integration, outside this
/// crate.
pub trait GeneratorLoader {
    /// Load a generator for the given spec
    fn load(&self, spec: &ModelSpec) -> Result<Box<dyn Generator>>;
}
