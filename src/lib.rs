//! Checks which characters of a list are covered by font files.
//!
//! For every font the checker adds a column to a [`CoverageTable`] and draws a
//! specimen sheet of the characters. Once every font is checked the table is
//! written as CSV.
//!
//! The font parser is hidden behind [`Typeface`], so the entry point [`run`] is
//! generic over it. The binary uses [`TrueType`](font::truetype::TrueType).

use std::{
    ffi::OsString,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;
use clap::{error::ErrorKind, CommandFactory, Parser};
use thiserror::Error;

#[cfg(test)]
#[macro_use]
extern crate test_case;

#[macro_use]
extern crate log;

pub mod args;
pub mod charset;
pub mod font;
pub mod matrix;
pub mod render;
pub mod report;

pub use args::Args;
pub use charset::CharacterSet;
pub use font::{ParseError, Typeface};
pub use matrix::CoverageTable;

use font::{font_name, load_font};
use render::{SpecimenLayout, SpecimenSheet};

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: No such file or directory", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: could not read the characters ({code:?})", path.display())]
    Charset {
        path: PathBuf,
        code: nom::error::ErrorKind,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Usage was printed instead of doing anything. Not a failure.
    #[error("Help requested")]
    Help,

    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not encode the report: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not encode a specimen sheet: {0}")]
    Image(#[from] image::ImageError),
}

/// Parses the command line and runs the checker with fonts loaded as `T`.
///
/// `argv` includes the program name. Version output goes to `out`, usage goes
/// to `err`. Printing the usage ends in [`Error::Help`], which happens for
/// `--help` and when the characters file is missing or empty.
pub fn run<T, I, A>(argv: I, out: &mut impl Write, err: &mut impl Write) -> Result<(), Error>
where
    T: Typeface,
    I: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            write!(err, "{}", e.render())?;
            return Err(Error::Help);
        }
        Err(e) => return Err(e.into()),
    };

    if args.version {
        writeln!(out, "v{}", env!("CARGO_PKG_VERSION"))?;
        return Ok(());
    }

    let Some(file) = args.file.as_deref().filter(|f| !f.is_empty()) else {
        write!(err, "{}", Args::command().render_help())?;
        return Err(Error::Help);
    };

    check::<T>(Path::new(file), &args)?;

    Ok(())
}

/// Checks every font of `args` against the characters in `characters`.
///
/// Fonts are handled one after the other: loaded, added to the table, then
/// drawn. The first font that fails to load stops the run before the report is
/// written; specimen sheets of the fonts before it stay on disk.
/// Returns the path of the report.
pub fn check<T: Typeface>(characters: &Path, args: &Args) -> Result<PathBuf, Error> {
    let set = CharacterSet::load(characters)?;
    let lines = set.lines(args.wrap.into());
    let mut table = CoverageTable::new(&set.codepoints());
    let layout = SpecimenLayout::default();

    for path in &args.fonts {
        let name = font_name(path);
        let font: T = load_font(path)?;

        let covered = table.add_font(&name, &font);
        info!("{name} covers {covered} of {} characters", set.len());

        if args.no_specimen {
            continue;
        }

        let sheet = SpecimenSheet {
            title: &name,
            lines: &lines,
            layout: &layout,
        };
        report::write_specimen(&args.out_dir, &name, &sheet.render(&font))?;
    }

    report::write_report(&args.out_dir, &table, &Local::now())
}
