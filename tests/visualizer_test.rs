//! Integration tests for the visualizer pipeline
//!
//! These tests drive the public API end to end with a stand-in generator,
//! exercising transform, render, persistence, and failure behavior.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use image::{Rgb, RgbImage};
use tempfile::tempdir;

use rechroma::{
    ColorizeFilter, FilterSequence, Generator, RenderOptions, Result, Visualizer,
};

/// Stand-in colorizer: flat sepia output with the input's dimensions
struct SepiaGenerator {
    cache_clears: Arc<AtomicUsize>,
}

impl SepiaGenerator {
    fn new() -> (Self, Arc<AtomicUsize>) {
        let counter = Arc::new(AtomicUsize::new(0));
        (
            SepiaGenerator {
                cache_clears: counter.clone(),
            },
            counter,
        )
    }
}

impl Generator for SepiaGenerator {
    fn name(&self) -> &str {
        "sepia"
    }

    fn forward(&self, input: &RgbImage, _render_factor: Option<u32>) -> Result<RgbImage> {
        let (w, h) = input.dimensions();
        Ok(RgbImage::from_pixel(w, h, Rgb([200, 150, 90])))
    }

    fn clear_cache(&self) {
        self.cache_clears.fetch_add(1, Ordering::SeqCst);
    }
}

fn sepia_visualizer(results_dir: &Path) -> (Visualizer, Arc<AtomicUsize>) {
    let (generator, counter) = SepiaGenerator::new();
    let filter = FilterSequence::new(vec![Box::new(ColorizeFilter::new(Box::new(generator)))], 35);
    (Visualizer::new(filter, results_dir).unwrap(), counter)
}

fn write_grayscale_source(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb([110, 110, 110]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn test_transform_preserves_dimensions() {
    let dir = tempdir().unwrap();
    let source = write_grayscale_source(dir.path(), "old.png", 24, 18);
    let (vis, _) = sepia_visualizer(&dir.path().join("results"));

    let result = vis.transform_image(&source, None).unwrap();
    assert_eq!(result.dimensions(), (24, 18));
    assert_eq!(result.get_pixel(0, 0).0, [200, 150, 90]);
}

#[test]
fn test_cache_released_before_each_transform() {
    let dir = tempdir().unwrap();
    let source = write_grayscale_source(dir.path(), "old.png", 8, 8);
    let (vis, clears) = sepia_visualizer(&dir.path().join("results"));

    vis.transform_image(&source, None).unwrap();
    vis.transform_image(&source, Some(20)).unwrap();
    assert_eq!(clears.load(Ordering::SeqCst), 2);
}

#[test]
fn test_render_and_save_writes_one_file_named_by_basename() {
    let dir = tempdir().unwrap();
    let source = write_grayscale_source(dir.path(), "portrait.png", 32, 32);
    let results_dir = dir.path().join("results");
    let (vis, _) = sepia_visualizer(&results_dir);

    let rendered = vis
        .render_and_save(&source, &RenderOptions::default())
        .unwrap();

    assert_eq!(rendered.output_path, results_dir.join("portrait.png"));
    assert!(rendered.output_path.is_file());

    let entries: Vec<_> = fs::read_dir(&results_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);

    // The persisted file is the raw result, not the figure canvas
    let saved = image::open(&rendered.output_path).unwrap().to_rgb8();
    assert_eq!(saved.dimensions(), (32, 32));
}

#[test]
fn test_render_and_save_overwrites_prior_output() {
    let dir = tempdir().unwrap();
    let source = write_grayscale_source(dir.path(), "portrait.png", 16, 16);
    let results_dir = dir.path().join("results");
    let (vis, _) = sepia_visualizer(&results_dir);

    let first = vis
        .render_and_save(&source, &RenderOptions::default())
        .unwrap();
    let second = vis
        .render_and_save(&source, &RenderOptions::default())
        .unwrap();

    assert_eq!(first.output_path, second.output_path);
    let entries: Vec<_> = fs::read_dir(&results_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_results_dir_created_recursively_and_reusable() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b").join("results");

    let (vis, _) = sepia_visualizer(&nested);
    assert!(nested.is_dir());
    assert_eq!(vis.results_dir(), nested.as_path());

    // A second construction over the same path does not fail
    let (_vis2, _) = sepia_visualizer(&nested);
}

#[test]
fn test_comparison_figure_matches_requested_size() {
    let dir = tempdir().unwrap();
    let source = write_grayscale_source(dir.path(), "old.png", 40, 30);
    let (vis, _) = sepia_visualizer(&dir.path().join("results"));

    let options = RenderOptions {
        figure_size: (400, 200),
        render_factor: Some(35),
        show_render_factor: true,
        compare: true,
    };
    let rendered = vis.render_and_save(&source, &options).unwrap();

    assert_eq!(rendered.figure.width(), 400);
    assert_eq!(rendered.figure.height(), 200);

    // The annotation's background box puts pure black on the canvas
    let black = rendered
        .figure
        .as_image()
        .pixels()
        .filter(|p| p.0 == [0, 0, 0])
        .count();
    assert!(black > 0);
}

#[test]
fn test_no_annotation_without_render_factor() {
    let dir = tempdir().unwrap();
    let source = write_grayscale_source(dir.path(), "old.png", 40, 30);
    let (vis, _) = sepia_visualizer(&dir.path().join("results"));

    // show_render_factor set, but no factor supplied: nothing to display
    let options = RenderOptions {
        show_render_factor: true,
        ..RenderOptions::default()
    };
    let rendered = vis.render_and_save(&source, &options).unwrap();

    let black = rendered
        .figure
        .as_image()
        .pixels()
        .filter(|p| p.0 == [0, 0, 0])
        .count();
    assert_eq!(black, 0);
}

#[test]
fn test_missing_source_fails() {
    let dir = tempdir().unwrap();
    let (vis, _) = sepia_visualizer(&dir.path().join("results"));

    let missing = dir.path().join("not-there.png");
    assert!(vis
        .render_and_save(&missing, &RenderOptions::default())
        .is_err());
}

#[test]
fn test_from_url_failure_leaves_nothing_behind() {
    let dir = tempdir().unwrap();
    let results_dir = dir.path().join("results");
    let (vis, _) = sepia_visualizer(&results_dir);

    let download_path = dir.path().join("downloads").join("image.png");
    let err = vis.render_and_save_from_url(
        "http://127.0.0.1:1/image.png",
        &download_path,
        &RenderOptions::default(),
    );

    assert!(err.is_err());
    assert!(!download_path.exists());
    let entries: Vec<_> = fs::read_dir(&results_dir).unwrap().collect();
    assert!(entries.is_empty());
}
