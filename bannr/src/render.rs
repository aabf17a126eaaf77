//! Renderer and rendering settings
mod align;

use thiserror::Error;

use crate::font::{Font, GLYPH_HEIGHT};

pub use align::{Alignment, DEFAULT_WIDTH, ParseAlignmentError};

/// The two-character escape sequence that separates banner lines in input
/// text: a literal backslash followed by `n`, as typed on a command line,
/// not an actual newline control character.
pub const LINE_BREAK: &str = r"\n";

/// The main type for rendering
///
/// Use [`render()`](Renderer::render) to process strings.
///
/// The other methods are meant to be used in a builder pattern:
/// ```
/// # use bannr::font::Font;
/// # use bannr::render::{Alignment, Renderer};
/// let font = Font::standard();
/// let lines = Renderer::new(&font)
///     .alignment(Alignment::Right)
///     .width(16)
///     .render("Hi")
///     .unwrap();
/// let expected = [
///     "    #   #   #   ",
///     "    #   #       ",
///     "    #   #  ##   ",
///     "    #####   #   ",
///     "    #   #   #   ",
///     "    #   #   #   ",
///     "    #   #  ###  ",
///     "                ",
/// ];
/// assert_eq!(lines, expected);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'font> {
    font: &'font Font,
    alignment: Option<Alignment>,
    width: usize,
}

impl<'font> Renderer<'font> {
    /// Creates a new renderer. No alignment is applied by default and the
    /// field width is [`DEFAULT_WIDTH`].
    pub const fn new(font: &'font Font) -> Self {
        Self {
            font,
            alignment: None,
            width: DEFAULT_WIDTH,
        }
    }

    /// Sets the alignment applied to every banner row.
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Sets the field width used by the aligner.
    pub const fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the given string.
    ///
    /// The input is split on the literal [`LINE_BREAK`] marker. Each
    /// non-empty literal line becomes its [`GLYPH_HEIGHT`] banner rows,
    /// aligned if an alignment is set; each empty literal line passes
    /// through as a single empty output string, skipping both the glyph
    /// composition and the aligner.
    ///
    /// # Errors
    /// [`InvalidCharacter`] if the input contains a character outside
    /// printable ASCII. The whole input is validated up front, so no lines
    /// are produced on error.
    pub fn render(&self, string: &str) -> Result<Vec<String>, InvalidCharacter> {
        validate(string)?;
        let mut lines = Vec::new();
        for literal in string.split(LINE_BREAK) {
            if literal.is_empty() {
                lines.push(String::new());
                continue;
            }
            let banner = self.compose(literal);
            match self.alignment {
                Some(alignment) => {
                    lines.extend(
                        banner
                            .into_iter()
                            .map(|row| alignment.apply(row, self.width)),
                    );
                }
                None => lines.extend(banner),
            }
        }
        Ok(lines)
    }

    /// Renders a single banner: exactly [`GLYPH_HEIGHT`] rows, row `i` being
    /// the concatenation of pixel row `i` of every glyph of `line`, in input
    /// order. No alignment is applied and [`LINE_BREAK`] markers are not
    /// interpreted.
    ///
    /// # Errors
    /// [`InvalidCharacter`] if `line` contains a character outside printable
    /// ASCII.
    pub fn banner(&self, line: &str) -> Result<Vec<String>, InvalidCharacter> {
        validate(line)?;
        Ok(self.compose(line))
    }

    fn compose(&self, line: &str) -> Vec<String> {
        let width: usize = line
            .chars()
            .filter_map(|char| self.font.get(char))
            .map(|glyph| glyph.width)
            .sum();
        let mut rows = vec![String::with_capacity(width); GLYPH_HEIGHT];
        for char in line.chars() {
            let Some(glyph) = self.font.get(char) else {
                continue;
            };
            for (row, glyph_row) in rows.iter_mut().zip(&glyph.rows) {
                row.push_str(glyph_row);
            }
        }
        rows
    }
}

/// Checks that every character of `string` is printable ASCII (codes 32
/// through 126), the only characters a font table provides glyphs for.
///
/// # Errors
/// Reports the first offending character and its position.
pub fn validate(string: &str) -> Result<(), InvalidCharacter> {
    match string
        .chars()
        .enumerate()
        .find(|&(_, ch)| ch != ' ' && !ch.is_ascii_graphic())
    {
        Some((index, ch)) => Err(InvalidCharacter { ch, index }),
        None => Ok(()),
    }
}

/// A character outside the printable ASCII range supported by font tables
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid character {ch:?} at position {index}, expecting printable ASCII")]
pub struct InvalidCharacter {
    /// The offending character
    pub ch: char,
    /// Its character index in the input string
    pub index: usize,
}
