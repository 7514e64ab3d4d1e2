use image::{Rgba, RgbaImage};

use crate::font::{Face, FaceOptions, Hinting, Typeface};

/// Page geometry and typography of a specimen sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecimenLayout {
    pub width: u32,
    pub height: u32,
    /// Text size in points.
    pub size: f32,
    pub dpi: f32,
    /// Line spacing, 2 means double spaced.
    pub spacing: f32,
    /// Left edge of the character lines.
    pub margin: i32,
    /// Distance from the top of the page to the top of the title's em box.
    pub top: i32,
    pub hinting: Hinting,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
}

impl Default for SpecimenLayout {
    /// An A4 page at 72 DPI, 16pt white text on black, spaced one and a half lines.
    fn default() -> Self {
        Self {
            width: 595,
            height: 842,
            size: 16.0,
            dpi: 72.0,
            spacing: 1.5,
            margin: 10,
            top: 10,
            hinting: Hinting::Full,
            foreground: Rgba([u8::MAX, u8::MAX, u8::MAX, u8::MAX]),
            background: Rgba([0, 0, 0, u8::MAX]),
        }
    }
}

impl SpecimenLayout {
    pub fn face_options(&self) -> FaceOptions {
        FaceOptions {
            size: self.size,
            dpi: self.dpi,
            hinting: self.hinting,
        }
    }

    /// Baseline of the title.
    pub fn first_baseline(&self) -> i32 {
        self.top + (self.size * self.dpi / 72.0).ceil() as i32
    }

    /// Distance between two consecutive baselines.
    pub fn line_step(&self) -> i32 {
        (self.size * self.spacing * self.dpi / 72.0).ceil() as i32
    }
}

/// A page showing a font's name followed by the tested characters.
#[derive(Debug, Clone, Copy)]
pub struct SpecimenSheet<'a> {
    pub title: &'a str,
    pub lines: &'a [String],
    pub layout: &'a SpecimenLayout,
}

impl<'a> SpecimenSheet<'a> {
    /// Draws the title centered on the first baseline and every line left aligned below it.
    pub fn render<T: Typeface>(&self, font: &T) -> RgbaImage {
        let layout = self.layout;
        let mut canvas = RgbaImage::from_pixel(layout.width, layout.height, layout.background);
        let face = font.face(layout.face_options());

        let mut baseline = layout.first_baseline();
        let title_x = (layout.width as f32 - face.measure(self.title)) / 2.0;
        draw_text(&mut canvas, &face, self.title, title_x, baseline, layout.foreground);

        for line in self.lines {
            baseline += layout.line_step();
            draw_text(
                &mut canvas,
                &face,
                line,
                layout.margin as f32,
                baseline,
                layout.foreground,
            );
        }

        canvas
    }
}

fn draw_text<T: Typeface>(
    canvas: &mut RgbaImage,
    face: &Face<'_, T>,
    text: &str,
    mut pen: f32,
    baseline: i32,
    color: Rgba<u8>,
) {
    let (width, height) = (canvas.width() as i64, canvas.height() as i64);

    for c in text.chars() {
        let glyph = face.glyph(c);
        let left = pen.floor() as i64 + glyph.left as i64;
        let top = baseline as i64 - glyph.bottom as i64 - glyph.bitmap.height() as i64;

        for (row, pixels) in glyph.bitmap.iter().enumerate() {
            let y = top + row as i64;
            if y < 0 || y >= height {
                continue;
            }

            for (col, coverage) in pixels.enumerate() {
                let x = left + col as i64;
                if coverage == 0 || x < 0 || x >= width {
                    continue;
                }

                let pixel = canvas.get_pixel_mut(x as u32, y as u32);
                *pixel = blend(*pixel, color, coverage);
            }
        }

        pen += glyph.advance;
    }
}

/// Paints `over` onto `under` with the given coverage.
fn blend(under: Rgba<u8>, over: Rgba<u8>, coverage: u8) -> Rgba<u8> {
    let coverage = coverage as u16;
    let mut out = under;

    for (o, (u, v)) in out.0.iter_mut().zip(under.0.iter().zip(over.0.iter())) {
        *o = ((*v as u16 * coverage + *u as u16 * (255 - coverage) + 127) / 255) as u8;
    }

    out
}
