//! rechroma - image colorization visualization and inference utility
//!
//! A thin pipeline around a pretrained colorization model: load an image
//! from disk or a URL, run it through a generator supplied by an external
//! deep-learning runtime, compose an inspection figure, and write the
//! result into a results directory.
//!
//! # Architecture
//!
//! - `model`: the opaque generator capability and its loader seam
//! - `filter`: filter trait, the colorize stage, and sequential chaining
//! - `source`: image acquisition from paths and URLs
//! - `render`: explicit figure canvases (solo, comparison, grid) and
//!   annotation
//! - `visualizer`: the fetch -> filter -> render -> persist orchestration
//! - `factory`: pre-wired "stable" and "artistic" configurations
//! - `display`: inline display helper for interactive sessions
//!
//! The colorization network itself is out of scope: it sits behind
//! [`model::Generator`], and this crate never inspects weights or
//! architectures.

pub mod display;
pub mod error;
pub mod factory;
pub mod filter;
pub mod model;
pub mod render;
pub mod source;
pub mod visualizer;

pub use error::{Error, Result};
pub use factory::{
    artistic_visualizer, image_colorizer, stable_visualizer, ColorizerOptions,
    DEFAULT_RENDER_FACTOR,
};
pub use filter::{ColorizeFilter, FilterSequence, ImageFilter};
pub use model::{Architecture, Generator, GeneratorLoader, ModelSpec};
pub use render::{grid_layout, Figure};
pub use visualizer::{RenderOptions, Rendered, Visualizer};

/// rechroma version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the rechroma library
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            debug: false,
        }
    }
}

/// Initialize the rechroma library with the given configuration
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(level)
            .try_init()
            .map_err(|e| Error::config(format!("failed to initialize logging: {}", e)))?;
    }

    Ok(())
}
