//! Figure composition
//!
//! Renders transformed images onto an explicit canvas for inspection:
//! a solo panel, an original-vs-result comparison, or a grid of results.
//! The canvas is an owned value returned to the caller; there is no
//! process-global plotting state.

pub mod annotate;

use std::path::Path;

use image::{imageops, Rgb, RgbImage};

use crate::error::{Error, Result};
use crate::source;

/// Gap between panels in a multi-panel figure
const PANEL_SPACING: u32 = 8;

/// Offset of the annotation label within a panel
const ANNOTATION_OFFSET: (u32, u32) = (10, 10);

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Rows and columns for laying out `num_images` panels
///
/// Columns are capped at `max_columns`; rows grow to fit the remainder.
/// Returns `(rows, columns)`; zero images or zero columns yield `(0, 0)`.
pub fn grid_layout(num_images: usize, max_columns: usize) -> (usize, usize) {
    if num_images == 0 || max_columns == 0 {
        return (0, 0);
    }

    let columns = num_images.min(max_columns);
    let rows = num_images / columns;
    let rows = if rows * columns == num_images {
        rows
    } else {
        rows + 1
    };
    (rows, columns)
}

/// A composed figure canvas
///
/// Owned by the caller; saving it is independent of the result image the
/// visualizer writes to the results directory.
pub struct Figure {
    canvas: RgbImage,
}

impl Figure {
    /// Compose a single-panel figure of one image
    ///
    /// The image is fitted into the canvas preserving aspect ratio. If an
    /// annotation is given it is drawn near the panel's top-left corner.
    pub fn solo(image: &RgbImage, size: (u32, u32), annotation: Option<&str>) -> Result<Figure> {
        let mut canvas = blank_canvas(size)?;

        let (px, py) = place_fitted(&mut canvas, image, 0, 0, size.0, size.1);
        if let Some(text) = annotation {
            annotate::draw_label(
                &mut canvas,
                text,
                px + ANNOTATION_OFFSET.0,
                py + ANNOTATION_OFFSET.1,
            );
        }

        Ok(Figure { canvas })
    }

    /// Compose a two-panel comparison figure (original | result)
    ///
    /// The annotation, if any, is drawn on the result panel only.
    pub fn comparison(
        original: &RgbImage,
        result: &RgbImage,
        size: (u32, u32),
        annotation: Option<&str>,
    ) -> Result<Figure> {
        let mut canvas = blank_canvas(size)?;

        let panel_width = size.0.saturating_sub(PANEL_SPACING) / 2;
        if panel_width == 0 {
            return Err(Error::invalid_input(
                "figure too narrow for a comparison panel".to_string(),
            ));
        }

        place_fitted(&mut canvas, original, 0, 0, panel_width, size.1);
        let (px, py) = place_fitted(
            &mut canvas,
            result,
            panel_width + PANEL_SPACING,
            0,
            panel_width,
            size.1,
        );

        if let Some(text) = annotation {
            annotate::draw_label(
                &mut canvas,
                text,
                px + ANNOTATION_OFFSET.0,
                py + ANNOTATION_OFFSET.1,
            );
        }

        Ok(Figure { canvas })
    }

    /// Compose a grid figure of several images
    ///
    /// Layout follows [`grid_layout`] with the given column cap.
    pub fn grid(images: &[RgbImage], size: (u32, u32), max_columns: usize) -> Result<Figure> {
        if images.is_empty() || max_columns == 0 {
            return Err(Error::invalid_input(
                "must provide images and max_columns > 0".to_string(),
            ));
        }

        let mut canvas = blank_canvas(size)?;

        let (rows, columns) = grid_layout(images.len(), max_columns);
        let cell_width = size.0 / columns as u32;
        let cell_height = size.1 / rows as u32;
        if cell_width == 0 || cell_height == 0 {
            return Err(Error::invalid_input(
                "figure too small for the requested grid".to_string(),
            ));
        }

        for (i, img) in images.iter().enumerate() {
            let row = i / columns;
            let col = i % columns;
            place_fitted(
                &mut canvas,
                img,
                col as u32 * cell_width,
                row as u32 * cell_height,
                cell_width,
                cell_height,
            );
        }

        Ok(Figure { canvas })
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Borrow the composed canvas
    pub fn as_image(&self) -> &RgbImage {
        &self.canvas
    }

    /// Take ownership of the composed canvas
    pub fn into_image(self) -> RgbImage {
        self.canvas
    }

    /// Write the figure to a file, format chosen by extension
    pub fn save(&self, path: &Path) -> Result<()> {
        source::save_image(&self.canvas, path)
    }
}

fn blank_canvas(size: (u32, u32)) -> Result<RgbImage> {
    if size.0 == 0 || size.1 == 0 {
        return Err(Error::invalid_input(format!(
            "figure size must be non-zero, got {}x{}",
            size.0, size.1
        )));
    }
    Ok(RgbImage::from_pixel(size.0, size.1, BACKGROUND))
}

/// Resize an image to fit a panel (aspect preserved) and paste it centered
///
/// Returns the top-left corner the image was placed at, for positioning
/// annotations relative to the panel content.
fn place_fitted(
    canvas: &mut RgbImage,
    image: &RgbImage,
    panel_x: u32,
    panel_y: u32,
    panel_width: u32,
    panel_height: u32,
) -> (u32, u32) {
    let (w, h) = fit_dimensions(image.dimensions(), (panel_width, panel_height));
    let resized = imageops::resize(image, w, h, imageops::FilterType::Lanczos3);

    let x = panel_x + (panel_width - w) / 2;
    let y = panel_y + (panel_height - h) / 2;
    imageops::overlay(canvas, &resized, x as i64, y as i64);

    (x, y)
}

fn fit_dimensions((src_w, src_h): (u32, u32), (max_w, max_h): (u32, u32)) -> (u32, u32) {
    let scale = (max_w as f64 / src_w as f64).min(max_h as f64 / src_h as f64);
    let w = ((src_w as f64 * scale).floor() as u32).clamp(1, max_w);
    let h = ((src_h as f64 * scale).floor() as u32).clamp(1, max_h);
    (w, h)
}
