//! Pre-wired colorizer visualizers
//!
//! Constructs a [`Visualizer`] around one of the two named pretrained
//! models: "stable" (wide architecture) or "artistic" (deep architecture).
//! The generator itself comes from the caller's [`GeneratorLoader`].

use std::path::PathBuf;

use crate::error::Result;
use crate::filter::{ColorizeFilter, FilterSequence};
use crate::model::{GeneratorLoader, ModelSpec};
use crate::visualizer::Visualizer;

/// Render factor both named configurations default to
pub const DEFAULT_RENDER_FACTOR: u32 = 35;

/// Overrides for the factory defaults
#[derive(Debug, Clone)]
pub struct ColorizerOptions {
    /// Directory the pretrained weights live under
    pub root_dir: PathBuf,
    /// Weights name override (each named configuration has its own
    /// default)
    pub weights_name: Option<String>,
    /// Where result images are written
    pub results_dir: PathBuf,
    /// Default render factor for the filter sequence
    pub render_factor: u32,
}

impl Default for ColorizerOptions {
    fn default() -> Self {
        ColorizerOptions {
            root_dir: PathBuf::from("./"),
            weights_name: None,
            results_dir: PathBuf::from("result_images"),
            render_factor: DEFAULT_RENDER_FACTOR,
        }
    }
}

/// Visualizer around the stable (wide) pretrained colorizer
pub fn stable_visualizer(
    loader: &dyn GeneratorLoader,
    options: &ColorizerOptions,
) -> Result<Visualizer> {
    let spec = apply_overrides(ModelSpec::stable(&options.root_dir), options);
    build(loader, &spec, options)
}

/// Visualizer around the artistic (deep) pretrained colorizer
pub fn artistic_visualizer(
    loader: &dyn GeneratorLoader,
    options: &ColorizerOptions,
) -> Result<Visualizer> {
    let spec = apply_overrides(ModelSpec::artistic(&options.root_dir), options);
    build(loader, &spec, options)
}

/// Select the artistic or stable configuration by flag
///
/// Artistic is the usual choice; stable trades some vibrancy for fewer
/// artifacts.
pub fn image_colorizer(
    loader: &dyn GeneratorLoader,
    artistic: bool,
    options: &ColorizerOptions,
) -> Result<Visualizer> {
    if artistic {
        artistic_visualizer(loader, options)
    } else {
        stable_visualizer(loader, options)
    }
}

fn apply_overrides(spec: ModelSpec, options: &ColorizerOptions) -> ModelSpec {
    match &options.weights_name {
        Some(name) => spec.with_weights_name(name.clone()),
        None => spec,
    }
}

fn build(
    loader: &dyn GeneratorLoader,
    spec: &ModelSpec,
    options: &ColorizerOptions,
) -> Result<Visualizer> {
    let generator = loader.load(spec)?;
    let filter = FilterSequence::new(
        vec![Box::new(ColorizeFilter::new(generator))],
        options.render_factor,
    );
    Visualizer::new(filter, &options.results_dir)
}
