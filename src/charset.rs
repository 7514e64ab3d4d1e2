//! Loading the list of characters to test.
//!
//! The file is read as plain text. Line breaks are only there to keep the file
//! readable, so they are dropped and every other character, in file order, is
//! one entry of the [`CharacterSet`]. Duplicates are kept.
//!
//! ```rust
//! # use fontest::charset::CharacterSet;
//! let (_, set) = CharacterSet::parse("ba\r\nc\na").unwrap();
//!
//! assert_eq!(set.codepoints(), vec!['a', 'a', 'b', 'c']);
//! assert_eq!(set.lines(3), vec!["bac".to_string(), "a".to_string()]);
//! ```

use std::{fs::read, path::Path};

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::anychar,
    combinator::{map, value},
    multi::fold_many0,
    Finish, IResult,
};

use crate::Error;

/// Characters per specimen line unless configured otherwise.
pub const DEFAULT_WRAP: usize = 26;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterSet {
    /// Characters in the order they appear in the file.
    chars: Vec<char>,
}

impl CharacterSet {
    /// Reads the characters file at `path`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = read(path).map_err(|_| Error::NotFound {
            path: path.to_owned(),
        })?;

        let text = String::from_utf8_lossy(&raw);
        let (_, set) = Self::parse(&text).finish().map_err(|e| Error::Charset {
            path: path.to_owned(),
            code: e.code,
        })?;

        debug!("Loaded {} characters from {}", set.len(), path.display());

        Ok(set)
    }

    pub fn parse(input: &str) -> IResult<&str, Self> {
        let (input, chars) = fold_many0(
            alt((value(None, line_break), map(anychar, Some))),
            Vec::new,
            |mut chars, c| {
                chars.extend(c);
                chars
            },
        )(input)?;

        Ok((input, Self { chars }))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters in file order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Characters sorted ascending by scalar value, duplicates included.
    pub fn codepoints(&self) -> Vec<char> {
        let mut sorted = self.chars.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Splits the characters, in file order, into lines of `width` characters.
    /// The last line holds whatever is left.
    pub fn lines(&self, width: usize) -> Vec<String> {
        self.chars
            .chunks(width.max(1))
            .map(|chunk| chunk.iter().collect())
            .collect()
    }
}

/// `\r\n`, `\r` or `\n`.
fn line_break(input: &str) -> IResult<&str, &str> {
    alt((tag("\r\n"), tag("\r"), tag("\n")))(input)
}
