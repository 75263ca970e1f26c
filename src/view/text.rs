//! Glyph layout and rasterization
//!
//! Draws label and readout text into the scene pixmap using `ab_glyph`.
//! Fonts are supplied by the caller as raw bytes; the renderer degrades to
//! geometry-only frames when none is available.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use thiserror::Error;
use tiny_skia::{Color, Pixmap, PremultipliedColorU8};

use crate::view::shapes::TextSpec;

/// Errors raised when preparing fonts
#[derive(Debug, Error)]
pub enum TextError {
    #[error("font data could not be parsed")]
    InvalidFont(#[from] ab_glyph::InvalidFont),
}

/// Parses raw font bytes (TTF/OTF) into a usable font
pub fn load_font(data: Vec<u8>) -> Result<FontVec, TextError> {
    Ok(FontVec::try_from_vec(data)?)
}

/// Returns the advance width of `text` at the given pixel size
pub fn measure<F: Font>(font: &F, text: &str, size: f32) -> f32 {
    let scaled = font.as_scaled(PxScale::from(size));
    let mut width = 0.0;
    let mut previous = None;
    for ch in text.chars() {
        if ch.is_control() {
            continue;
        }
        let id = scaled.glyph_id(ch);
        if let Some(prev) = previous {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        previous = Some(id);
    }
    width
}

/// Rasterizes `spec` into the pixmap
///
/// `spec.y` is the top of the line; the baseline is derived from the font's
/// ascent. Glyph coverage is blended source-over.
pub fn draw_text<F: Font>(pixmap: &mut Pixmap, font: &F, spec: &TextSpec) {
    let scale = PxScale::from(spec.size);
    let scaled = font.as_scaled(scale);
    let baseline = spec.y + scaled.ascent();
    let mut caret_x = spec.x;
    let mut previous = None;

    for ch in spec.text.chars() {
        if ch.is_control() {
            continue;
        }
        let id = scaled.glyph_id(ch);
        if let Some(prev) = previous {
            caret_x += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, ab_glyph::point(caret_x, baseline));
        caret_x += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                blend_pixel(pixmap, x, y, spec.color, coverage);
            });
        }
    }
}

/// Source-over blend of one coverage sample, in premultiplied space
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, color: Color, coverage: f32) {
    if x < 0 || y < 0 || x >= pixmap.width() as i32 || y >= pixmap.height() as i32 {
        return;
    }
    let alpha = coverage.clamp(0.0, 1.0) * color.alpha();
    if alpha <= 0.0 {
        return;
    }

    let index = y as usize * pixmap.width() as usize + x as usize;
    let pixels = pixmap.pixels_mut();
    let dst = pixels[index];
    let inv = 1.0 - alpha;

    let r = (color.red() * alpha * 255.0 + f32::from(dst.red()) * inv).round();
    let g = (color.green() * alpha * 255.0 + f32::from(dst.green()) * inv).round();
    let b = (color.blue() * alpha * 255.0 + f32::from(dst.blue()) * inv).round();
    let a = (alpha * 255.0 + f32::from(dst.alpha()) * inv).round() as u8;

    if let Some(blended) =
        PremultipliedColorU8::from_rgba((r as u8).min(a), (g as u8).min(a), (b as u8).min(a), a)
    {
        pixels[index] = blended;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Probes the same system font paths the binary uses; text tests are
    /// skipped on machines without one.
    fn system_font() -> Option<FontVec> {
        crate::app::controller::system_font_paths()
            .iter()
            .find_map(|path| std::fs::read(path).ok())
            .and_then(|data| load_font(data).ok())
    }

    #[test]
    fn invalid_font_data_rejected() {
        assert!(load_font(vec![0, 1, 2, 3]).is_err());
    }

    #[test]
    fn measure_grows_with_text_and_size() {
        let Some(font) = system_font() else {
            println!("Test skipped - no system font available");
            return;
        };
        let short = measure(&font, "N", 15.0);
        let long = measure(&font, "50.0 N", 15.0);
        assert!(long > short);
        assert!(measure(&font, "50.0 N", 30.0) > long);
    }

    #[test]
    fn draw_text_touches_pixels() {
        let Some(font) = system_font() else {
            println!("Test skipped - no system font available");
            return;
        };
        let mut pixmap = Pixmap::new(120, 40).unwrap();
        let spec = TextSpec {
            text: "50.0 N".to_owned(),
            x: 4.0,
            y: 4.0,
            size: 20.0,
            color: Color::from_rgba8(0, 0, 0, 255),
        };
        draw_text(&mut pixmap, &font, &spec);
        let touched = pixmap.pixels().iter().any(|px| px.alpha() > 0);
        assert!(touched, "expected glyph coverage in the pixmap");
    }

    #[test]
    fn out_of_bounds_draw_is_harmless() {
        let Some(font) = system_font() else {
            println!("Test skipped - no system font available");
            return;
        };
        let mut pixmap = Pixmap::new(10, 10).unwrap();
        let spec = TextSpec {
            text: "overflowing readout".to_owned(),
            x: -50.0,
            y: -50.0,
            size: 40.0,
            color: Color::from_rgba8(0, 0, 0, 255),
        };
        // Must clip, not panic
        draw_text(&mut pixmap, &font, &spec);
    }
}
