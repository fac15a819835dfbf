//! Inline image display for interactive sessions
//!
//! Renders a previously saved image inline in a terminal that supports the
//! iTerm2 inline-image escape (OSC 1337). Purely a convenience side
//! effect; not part of the render pipeline.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::Result;

/// Write an inline-image escape for `path` to the given writer
pub fn show_image_inline<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let bytes = fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    write!(
        out,
        "\x1b]1337;File=name={};size={};inline=1:{}\x07",
        STANDARD.encode(name.as_bytes()),
        bytes.len(),
        STANDARD.encode(&bytes)
    )?;
    out.flush()?;
    Ok(())
}

/// Display an image inline on stdout
pub fn show_image(path: &Path) -> Result<()> {
    let stdout = io::stdout();
    show_image_inline(path, &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::tempdir;

    #[test]
    fn test_show_image_inline_emits_escape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");
        RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3]))
            .save(&path)
            .unwrap();

        let mut buf = Vec::new();
        show_image_inline(&path, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("\x1b]1337;File="));
        assert!(text.contains("inline=1:"));
        assert!(text.ends_with('\x07'));
    }

    #[test]
    fn test_show_image_inline_missing_file() {
        let dir = tempdir().unwrap();
        let mut buf = Vec::new();
        let err = show_image_inline(&dir.path().join("missing.png"), &mut buf).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
        assert!(buf.is_empty());
    }
}
