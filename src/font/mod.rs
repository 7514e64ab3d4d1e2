//! Everything the checker needs from a font.
//!
//! [`Typeface`] is the seam between the coverage logic and the font parser. A
//! typeface answers whether it has a glyph for a character and rasterizes
//! glyphs; [`Face`] wraps it at a fixed size for drawing text.

use std::path::Path;

use thiserror::Error;

use crate::render::Bitmap;

pub mod truetype;

/// The font parser rejected the file. Holds the parser's own message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ParseError(pub String);

pub trait Typeface {
    fn parse(data: Vec<u8>) -> Result<Self, ParseError>
    where
        Self: Sized;

    /// `true` if the font maps `c` to a glyph other than `.notdef`.
    fn has_glyph(&self, c: char) -> bool;

    /// Rasterizes the glyph for `c` at `px` pixels per em.
    fn rasterize(&self, c: char, px: f32) -> RasterGlyph;

    fn face(&self, options: FaceOptions) -> Face<'_, Self>
    where
        Self: Sized,
    {
        Face {
            font: self,
            options,
        }
    }
}

/// A rasterized glyph positioned relative to the pen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RasterGlyph {
    /// Offset of the bitmap's left edge from the pen.
    pub left: i32,
    /// Offset of the bitmap's bottom edge above the baseline.
    pub bottom: i32,
    /// Horizontal pen advance in pixels.
    pub advance: f32,
    pub bitmap: Bitmap,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Hinting {
    None,
    /// Pen positions are snapped to whole pixels.
    #[default]
    Full,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceOptions {
    /// Size in points.
    pub size: f32,
    pub dpi: f32,
    pub hinting: Hinting,
}

impl FaceOptions {
    /// Pixels per em.
    pub fn px(&self) -> f32 {
        self.size * self.dpi / 72.0
    }
}

/// A typeface at a fixed size, ready to lay out text.
pub struct Face<'a, T> {
    font: &'a T,
    options: FaceOptions,
}

impl<'a, T: Typeface> Face<'a, T> {
    pub fn glyph(&self, c: char) -> RasterGlyph {
        let mut glyph = self.font.rasterize(c, self.options.px());
        if self.options.hinting == Hinting::Full {
            glyph.advance = glyph.advance.round();
        }
        glyph
    }

    /// Total advance of `text` in pixels.
    pub fn measure(&self, text: &str) -> f32 {
        text.chars().map(|c| self.glyph(c).advance).sum()
    }
}

/// Reads and parses the font file at `path`.
pub fn load_font<T: Typeface>(path: &Path) -> Result<T, crate::Error> {
    let data = std::fs::read(path).map_err(|_| crate::Error::NotFound {
        path: path.to_owned(),
    })?;

    let font = T::parse(data).map_err(|e| {
        warn!("Could not parse {}", path.display());
        e
    })?;

    Ok(font)
}

/// The name a font is reported under: its file name without the extension.
pub fn font_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
