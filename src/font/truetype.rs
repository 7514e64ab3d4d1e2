//! TrueType and OpenType fonts, parsed and rasterized by `fontdue`.

use fontdue::{Font, FontSettings};

use super::{ParseError, RasterGlyph, Typeface};
use crate::render::Bitmap;

pub struct TrueType {
    font: Font,
}

impl Typeface for TrueType {
    fn parse(data: Vec<u8>) -> Result<Self, ParseError> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| ParseError(e.to_string()))?;

        debug!("Parsed a font with {} glyphs", font.glyph_count());

        Ok(Self { font })
    }

    fn has_glyph(&self, c: char) -> bool {
        self.font.lookup_glyph_index(c) != 0
    }

    fn rasterize(&self, c: char, px: f32) -> RasterGlyph {
        let (metrics, coverage) = self.font.rasterize(c, px);

        RasterGlyph {
            left: metrics.xmin,
            bottom: metrics.ymin,
            advance: metrics.advance_width,
            // fontdue always returns width * height coverage bytes
            bitmap: Bitmap::new(metrics.width, metrics.height, &coverage).unwrap_or_default(),
        }
    }
}
