//! Specimen sheets: a page per font showing how the tested characters render.

mod bitmap;
mod specimen;

pub use bitmap::{Bitmap, BitmapIter, BitmapRowIter};
pub use specimen::{SpecimenLayout, SpecimenSheet};
