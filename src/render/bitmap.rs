use std::rc::Rc;

/// An 8-bit coverage mask of a rasterized glyph, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    coverage: Rc<[u8]>,
}

impl Default for Bitmap {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            coverage: [].into(),
        }
    }
}

impl Bitmap {
    /// Constructs self by wrapping the coverage slice in a [`Rc`] and verifying that it holds exactly one byte per
    /// pixel.
    pub fn new(width: usize, height: usize, coverage: &[u8]) -> Option<Self> {
        if coverage.len() != width * height {
            return None;
        }

        Some(Self {
            width,
            height,
            coverage: coverage.into(),
        })
    }

    /// Returns the coverage of the pixel, `0` being empty and `255` fully covered, [`None`] if out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.coverage[y * self.width + x])
    }

    /// Bitmap width (line length)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bitmap height (number of lines)
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn iter(&self) -> BitmapIter {
        self.into_iter()
    }
}

impl IntoIterator for &Bitmap {
    type IntoIter = BitmapIter;
    type Item = BitmapRowIter;

    fn into_iter(self) -> Self::IntoIter {
        BitmapIter {
            bitmap: self.clone(),
            row: 0,
        }
    }
}

pub struct BitmapIter {
    bitmap: Bitmap,
    row: usize,
}

impl Iterator for BitmapIter {
    type Item = BitmapRowIter;

    /// Yields rows of the bitmap
    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.bitmap.height {
            return None;
        }

        let row_iter = BitmapRowIter {
            bitmap: self.bitmap.clone(),
            row: self.row,
            col: 0,
        };
        self.row += 1;

        Some(row_iter)
    }
}

pub struct BitmapRowIter {
    bitmap: Bitmap,
    row: usize,
    col: usize,
}

impl Iterator for BitmapRowIter {
    type Item = u8;

    /// Yields the coverage of the next pixel in the bitmap's row
    fn next(&mut self) -> Option<Self::Item> {
        let pixel = self.bitmap.pixel(self.col, self.row)?;
        self.col += 1;

        Some(pixel)
    }
}
