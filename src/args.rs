use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

use crate::charset::DEFAULT_WRAP;

/// Fontest is a CLI tool for checking the characters included in font files.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[clap(name = "fontest", disable_version_flag = true)]
pub struct Args {
    /// Characters file.
    // Not a PathBuf: an empty value must reach `run` to print the usage.
    #[clap(long, short = 'f')]
    pub file: Option<OsString>,

    /// Prints the version.
    #[clap(long, short = 'V')]
    pub version: bool,

    /// Number of characters per line on the specimen sheets.
    #[clap(
        long,
        short = 'w',
        default_value_t = DEFAULT_WRAP as u16,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub wrap: u16,

    /// Directory the report and the specimen sheets are written to.
    #[clap(long, short = 'o', default_value = ".")]
    pub out_dir: PathBuf,

    /// Only write the coverage report.
    #[clap(long)]
    pub no_specimen: bool,

    /// Font files to test.
    pub fonts: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsString, path::PathBuf};

    use clap::{error::ErrorKind, Parser};

    use super::Args;
    use crate::charset::DEFAULT_WRAP;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["fontest", "-f", "chars.txt", "a.ttf", "b.otf"]).unwrap();

        assert_eq!(args.file, Some(OsString::from("chars.txt")));
        assert_eq!(usize::from(args.wrap), DEFAULT_WRAP);
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert!(!args.no_specimen);
        assert_eq!(
            args.fonts,
            vec![PathBuf::from("a.ttf"), PathBuf::from("b.otf")]
        );
    }

    #[test_case(&["fontest", "--help"] => ErrorKind::DisplayHelp; "long help")]
    #[test_case(&["fontest", "-h"] => ErrorKind::DisplayHelp; "short help")]
    #[test_case(&["fontest", "--wrap", "0"] => ErrorKind::ValueValidation; "zero wrap")]
    #[test_case(&["fontest", "--bogus"] => ErrorKind::UnknownArgument; "unknown flag")]
    fn rejected(argv: &[&str]) -> ErrorKind {
        Args::try_parse_from(argv).unwrap_err().kind()
    }

    #[test]
    fn empty_file_is_accepted() {
        let args = Args::try_parse_from(["fontest", "-f", ""]).unwrap();

        assert_eq!(args.file, Some(OsString::new()));
    }
}
