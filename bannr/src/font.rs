//! Banner fonts
//!
//! Font types and the logic for decoding flat font-table files.
//!
//! A font table is a plain text file with one block of [`BLOCK_HEIGHT`] lines
//! for each of the 95 printable ASCII characters (codes 32 through 126), in
//! ascending order: a separator line followed by the [`GLYPH_HEIGHT`] pixel
//! rows of the glyph. The table is walked once at decode time and turned into
//! a per-character glyph map, so a short or otherwise malformed file is
//! rejected before any rendering starts.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use itertools::Itertools as _;
use thiserror::Error;

use crate::render::{InvalidCharacter, Renderer};

/// Rows of pixels in every glyph.
pub const GLYPH_HEIGHT: usize = 8;

/// Lines per glyph block in a font table: one separator line followed by the
/// pixel rows.
pub const BLOCK_HEIGHT: usize = GLYPH_HEIGHT + 1;

/// The characters every font table provides glyphs for, in the order their
/// blocks appear in the file.
const PRINTABLE: RangeInclusive<char> = ' '..='~';

const PRINTABLE_COUNT: usize = 95;

/// A decoded banner font
#[derive(Debug)]
pub struct Font {
    glyphs: HashMap<char, Glyph>,
}

impl Font {
    pub(crate) const STANDARD: &'static str = include_str!("standard.txt");

    /// Decodes the contents of a font-table file.
    ///
    /// A convenience wrapper around [`Font::decode_with_warnings`] that
    /// discards the warnings.
    ///
    /// # Errors
    /// Returns `Err` on a fatal decoding error; see [`FontError`] for details.
    pub fn decode(source: &str) -> Result<Self, FontError> {
        Self::decode_with_warnings(source).map(|(font, _)| font)
    }

    /// Decodes the contents of a font-table file and also returns any
    /// non-fatal issues found while decoding.
    ///
    /// See [`FontWarning`] for details on these warnings. Carriage returns
    /// are normalized to line feeds before the table is split into lines.
    ///
    /// # Errors
    /// Returns `Err` on a fatal decoding error; see [`FontError`] for details.
    pub fn decode_with_warnings(source: &str) -> Result<(Self, Vec<FontWarning>), FontError> {
        let mut warnings = Vec::new();
        let source = source.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = source.lines().collect();
        let expected = PRINTABLE_COUNT * BLOCK_HEIGHT;
        if lines.len() < expected {
            return Err(FontError::Truncated {
                found: lines.len(),
                expected,
            });
        }
        let mut glyphs = HashMap::new();
        let blocks = lines[..expected].iter().copied().chunks(BLOCK_HEIGHT);
        for (char, mut block) in PRINTABLE.zip(&blocks) {
            let separator = block.next().expect("chunk size >= 1");
            if !separator.trim_ascii().is_empty() {
                warnings.push(FontWarning::SeparatorNotBlank(char));
            }
            let glyph = Glyph::decode(block, char, &mut warnings);
            drop(glyphs.insert(char, glyph));
        }
        if lines.len() > expected {
            warnings.push(FontWarning::TrailingLines(lines.len() - expected));
        }
        Ok((Self { glyphs }, warnings))
    }

    /// Decodes the standard font table included with this crate.
    #[expect(clippy::missing_panics_doc, reason = "should be caught in tests")]
    #[must_use]
    pub fn standard() -> Self {
        Self::decode(Self::STANDARD).expect("Should be tested")
    }

    /// Renders a string with default settings and no alignment.
    ///
    /// # Errors
    /// [`InvalidCharacter`] if the string contains a character outside
    /// printable ASCII.
    pub fn render(&self, string: &str) -> Result<Vec<String>, InvalidCharacter> {
        Renderer::new(self).render(string)
    }

    pub(crate) fn get(&self, char: char) -> Option<&Glyph> {
        self.glyphs.get(&char)
    }
}

#[derive(Debug)]
pub(crate) struct Glyph {
    pub width: usize,
    pub rows: Vec<String>,
}

impl Glyph {
    fn decode<'a>(
        rows: impl Iterator<Item = &'a str>,
        char: char,
        warnings: &mut Vec<FontWarning>,
    ) -> Self {
        let rows: Vec<String> = rows.map(str::to_owned).collect();
        debug_assert_eq!(rows.len(), GLYPH_HEIGHT, "block shorter than expected");
        let width = match rows.iter().map(String::len).unique().exactly_one() {
            Ok(width) => width,
            Err(widths) => {
                warnings.push(FontWarning::InconsistentWidth(char));
                widths.max().expect("glyph height is non-zero")
            }
        };
        Self { width, rows }
    }
}

/// A fatal error in decoding a font table
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FontError {
    /// The table has fewer lines than the 95 glyph blocks require. Rejected
    /// here so that rendering never indexes past the end of a short table.
    #[error("font table has {found} lines, expected at least {expected}")]
    Truncated {
        /// The number of lines in the table
        found: usize,
        /// The number of lines the glyph blocks require
        expected: usize,
    },
}

/// A non-fatal issue with a font table found while decoding
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum FontWarning {
    /// A glyph whose pixel rows do not all have the same length. The glyph
    /// width is taken to be the longest row, so banner rows composed from it
    /// will not line up.
    #[error("glyph for {0:?} has pixel rows of differing lengths")]
    InconsistentWidth(char),
    /// A glyph block whose separator line contains visible characters.
    #[error("glyph block for {0:?} does not start with a blank line")]
    SeparatorNotBlank(char),
    /// Content after the last glyph block.
    #[error("{0} lines of unexpected content after the last glyph block")]
    TrailingLines(usize),
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{BLOCK_HEIGHT, Font, FontError, FontWarning, GLYPH_HEIGHT, PRINTABLE_COUNT};

    /// A synthetic table whose glyph rows name their own character and row
    /// index: the block for 'A' is a blank line followed by "A0" through "A7".
    pub(crate) fn tagged_table() -> String {
        tagged_lines().join("\n")
    }

    fn tagged_lines() -> Vec<String> {
        let mut lines = Vec::new();
        for char in ' '..='~' {
            lines.push(String::new());
            for row in 0..GLYPH_HEIGHT {
                lines.push(format!("{char}{row}"));
            }
        }
        lines
    }

    #[test]
    fn decode_standard() {
        let (font, warnings) = Font::decode_with_warnings(Font::STANDARD).unwrap();
        assert_eq!(warnings, []);
        assert_eq!(font.glyphs.len(), PRINTABLE_COUNT);
        for char in ' '..='~' {
            let glyph = font.get(char).unwrap();
            assert_eq!(glyph.rows.len(), GLYPH_HEIGHT);
            assert_eq!(glyph.width, 6, "unexpected width for {char:?}");
        }
    }

    #[test]
    fn lookup_matches_flat_offsets() {
        let source = tagged_table();
        let lines: Vec<&str> = source.lines().collect();
        let font = Font::decode(&source).unwrap();
        let offset = (b'A' as usize - 32) * BLOCK_HEIGHT + 1;
        for (i, row) in font.get('A').unwrap().rows.iter().enumerate() {
            assert_eq!(row, lines[offset + i]);
        }
    }

    #[test]
    fn truncated_table() {
        let cut = tagged_lines()[..200].join("\n");
        assert_eq!(
            Font::decode(&cut).unwrap_err(),
            FontError::Truncated {
                found: 200,
                expected: PRINTABLE_COUNT * BLOCK_HEIGHT,
            },
        );
    }

    #[test]
    fn empty_table() {
        assert_eq!(
            Font::decode("").unwrap_err(),
            FontError::Truncated {
                found: 0,
                expected: PRINTABLE_COUNT * BLOCK_HEIGHT,
            },
        );
    }

    #[test]
    fn inconsistent_width_warning() {
        let mut lines = tagged_lines();
        let offset = (b'B' as usize - 32) * BLOCK_HEIGHT + 1;
        lines[offset + 3] = "B3 too wide".to_owned();
        let (font, warnings) = Font::decode_with_warnings(&lines.join("\n")).unwrap();
        assert_eq!(warnings, [FontWarning::InconsistentWidth('B')]);
        assert_eq!(font.get('B').unwrap().width, "B3 too wide".len());
    }

    #[test]
    fn separator_warning() {
        let mut lines = tagged_lines();
        lines[(b'!' as usize - 32) * BLOCK_HEIGHT] = "stray".to_owned();
        let (_font, warnings) = Font::decode_with_warnings(&lines.join("\n")).unwrap();
        assert_eq!(warnings, [FontWarning::SeparatorNotBlank('!')]);
    }

    #[test]
    fn trailing_lines_warning() {
        let mut lines = tagged_lines();
        lines.push("leftover".to_owned());
        lines.push("more".to_owned());
        let (_font, warnings) = Font::decode_with_warnings(&lines.join("\n")).unwrap();
        assert_eq!(warnings, [FontWarning::TrailingLines(2)]);
    }

    #[test]
    fn crlf_normalized() {
        let source = tagged_table().replace('\n', "\r\n");
        let font = Font::decode(&source).unwrap();
        assert_eq!(font.get('A').unwrap().rows[0], "A0");
    }
}
