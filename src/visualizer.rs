//! Single-image inference and render pipeline
//!
//! The [`Visualizer`] runs fetch -> filter -> render -> persist for exactly
//! one image per call. Calls are synchronous and independent; nothing is
//! cached or retried, and any failure propagates to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::info;

use crate::error::{Error, Result};
use crate::filter::{FilterSequence, ImageFilter};
use crate::render::Figure;
use crate::source;

/// Options for a render-and-save call
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Figure canvas size in pixels
    pub figure_size: (u32, u32),
    /// Render factor forwarded to the filter; `None` uses the sequence
    /// default
    pub render_factor: Option<u32>,
    /// Overlay the render factor on the result panel (only has an effect
    /// when a render factor was supplied)
    pub show_render_factor: bool,
    /// Compose a two-panel original-vs-result figure instead of a solo
    /// panel
    pub compare: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            figure_size: (1280, 720),
            render_factor: None,
            show_render_factor: false,
            compare: false,
        }
    }
}

/// Output of a render-and-save call
pub struct Rendered {
    /// The composed inspection figure
    pub figure: Figure,
    /// Where the result image was written
    pub output_path: PathBuf,
}

/// Runs the single-image colorization pipeline
pub struct Visualizer {
    filter: FilterSequence,
    results_dir: PathBuf,
}

impl Visualizer {
    /// Create a visualizer bound to a results directory
    ///
    /// The directory (and its parents) is created if missing; constructing
    /// twice over the same path is fine.
    pub fn new(filter: FilterSequence, results_dir: impl AsRef<Path>) -> Result<Self> {
        let results_dir = results_dir.as_ref().to_path_buf();
        fs::create_dir_all(&results_dir)?;
        Ok(Visualizer {
            filter,
            results_dir,
        })
    }

    /// The directory result images are written into
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Transform a source image through the filter sequence
    ///
    /// Releases accelerator cache held by a prior call (best effort), then
    /// opens the image and applies the filters, passing the image as its
    /// own guide.
    pub fn transform_image(&self, path: &Path, render_factor: Option<u32>) -> Result<RgbImage> {
        self.filter.clear_cache();
        let source_image = source::open_image(path)?;
        self.filter
            .apply(&source_image, &source_image, render_factor)
    }

    /// Transform, compose a figure, and write the result image
    ///
    /// The result (not the figure) is written into the results directory
    /// under the source file's base name, silently overwriting any prior
    /// output. Returns the figure together with the output path.
    pub fn render_and_save(&self, path: &Path, options: &RenderOptions) -> Result<Rendered> {
        let result = self.transform_image(path, options.render_factor)?;

        let annotation = if options.show_render_factor {
            options
                .render_factor
                .map(|factor| format!("render factor: {}", factor))
        } else {
            None
        };

        let figure = if options.compare {
            let original = source::open_image(path)?;
            Figure::comparison(
                &original,
                &result,
                options.figure_size,
                annotation.as_deref(),
            )?
        } else {
            Figure::solo(&result, options.figure_size, annotation.as_deref())?
        };

        let output_path = self.result_path(path)?;
        source::save_image(&result, &output_path)?;
        info!("{} -> {}", path.display(), output_path.display());

        Ok(Rendered {
            figure,
            output_path,
        })
    }

    /// Download a source image, then render and save it
    ///
    /// The fetched image is persisted to `download_path` first so the rest
    /// of the pipeline operates on a local path.
    pub fn render_and_save_from_url(
        &self,
        url: &str,
        download_path: &Path,
        options: &RenderOptions,
    ) -> Result<Rendered> {
        source::fetch_image(url, download_path)?;
        self.render_and_save(download_path, options)
    }

    fn result_path(&self, source_path: &Path) -> Result<PathBuf> {
        let name = source_path.file_name().ok_or_else(|| {
            Error::invalid_input(format!(
                "source path has no file name: {}",
                source_path.display()
            ))
        })?;
        Ok(self.results_dir.join(name))
    }
}
