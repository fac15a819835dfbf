//! Text annotation overlay
//!
//! Draws short labels (the render-factor readout) directly onto a figure
//! canvas using a small 5x7 bitmap font, white text over a black
//! background box. No font-file dependency.

use image::{Rgb, RgbImage};

/// Horizontal pixels per glyph cell (5 columns at 2x scale)
const GLYPH_WIDTH: u32 = 10;
/// Vertical pixels per glyph cell (7 rows at 2x scale)
const GLYPH_HEIGHT: u32 = 14;
/// Padding around the label background box
const BOX_PADDING: u32 = 4;

const SCALE: u32 = 2;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Pixel width of a rendered label (monospace)
pub(crate) fn label_width(text: &str) -> u32 {
    text.chars().count() as u32 * GLYPH_WIDTH
}

/// Pixel height of a rendered label
pub(crate) fn label_height() -> u32 {
    GLYPH_HEIGHT
}

/// Draw a label at (x, y) on the canvas
///
/// Writes outside the canvas are clipped, never wrapped.
pub(crate) fn draw_label(canvas: &mut RgbImage, text: &str, x: u32, y: u32) {
    draw_background(canvas, x, y, label_width(text), label_height());

    for (i, ch) in text.chars().enumerate() {
        let glyph_x = x + i as u32 * GLYPH_WIDTH;
        draw_glyph(canvas, ch, glyph_x, y);
    }
}

fn draw_background(canvas: &mut RgbImage, x: u32, y: u32, width: u32, height: u32) {
    let x0 = x.saturating_sub(BOX_PADDING);
    let y0 = y.saturating_sub(BOX_PADDING);
    let x1 = (x + width + BOX_PADDING).min(canvas.width());
    let y1 = (y + height + BOX_PADDING).min(canvas.height());

    for py in y0..y1 {
        for px in x0..x1 {
            canvas.put_pixel(px, py, BLACK);
        }
    }
}

fn draw_glyph(canvas: &mut RgbImage, ch: char, x: u32, y: u32) {
    let pattern = glyph_pattern(ch);

    for (row, &bits) in pattern.iter().enumerate() {
        for col in 0..5u32 {
            if (bits >> (4 - col)) & 1 == 1 {
                for dy in 0..SCALE {
                    for dx in 0..SCALE {
                        let px = x + col * SCALE + dx;
                        let py = y + row as u32 * SCALE + dy;
                        if px < canvas.width() && py < canvas.height() {
                            canvas.put_pixel(px, py, WHITE);
                        }
                    }
                }
            }
        }
    }
}

/// 5x7 bitmap pattern for a character
///
/// Covers digits plus the lowercase letters the render-factor label needs;
/// anything else renders as a filled box.
fn glyph_pattern(ch: char) -> &'static [u8; 7] {
    match ch {
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'a' => &[0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'c' => &[0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110],
        'd' => &[0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10011, 0b01101],
        'e' => &[0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'f' => &[0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000],
        'n' => &[0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001],
        'o' => &[0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'r' => &[0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        't' => &[0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110],
        ':' => &[0b00000, 0b00000, 0b01100, 0b00000, 0b00000, 0b01100, 0b00000],
        ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => &[0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111],
    }
}
