//! Alignment of banner rows within a fixed-width field

use std::iter::repeat_n;
use std::str::FromStr;

use thiserror::Error;

/// The default field width used by [`Renderer::new`](super::Renderer::new)
/// and the command line tool.
pub const DEFAULT_WIDTH: usize = 80;

/// The choice of whitespace distribution for banner rows within a
/// fixed-width field
///
/// No mode ever truncates: a row at least as wide as the field passes
/// through unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Rows pass through unchanged.
    Left,
    /// Rows are padded with `(width - length) / 2` leading blanks, rounding
    /// down. No trailing padding is added.
    Center,
    /// Rows are padded with `width - length` leading blanks.
    Right,
    /// The whitespace-delimited words of a row are rejoined with gaps that
    /// together stretch the row to the field width; when the blanks do not
    /// divide evenly, the leftmost gaps receive one extra blank each. A row
    /// with fewer than two words is instead padded with trailing blanks.
    Justify,
}

impl Alignment {
    /// Pads or redistributes whitespace in `line` to the target `width`.
    #[must_use]
    pub fn apply(self, line: String, width: usize) -> String {
        match self {
            Self::Left => line,
            Self::Right => {
                let padding = width.saturating_sub(line.len());
                repeat_n(' ', padding).chain(line.chars()).collect()
            }
            Self::Center => {
                let padding = width.saturating_sub(line.len()) / 2;
                repeat_n(' ', padding).chain(line.chars()).collect()
            }
            Self::Justify => Self::justify(line, width),
        }
    }

    fn justify(mut line: String, width: usize) -> String {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() < 2 {
            let padding = width.saturating_sub(line.len());
            line.extend(repeat_n(' ', padding));
            return line;
        }
        let content: usize = words.iter().map(|word| word.len()).sum();
        let gaps = words.len() - 1;
        let blanks = width.saturating_sub(content);
        let gap = blanks / gaps;
        let extra = blanks % gaps;
        let mut justified = String::with_capacity(width.max(line.len()));
        for (i, word) in words.iter().enumerate() {
            justified.push_str(word);
            if i < gaps {
                justified.extend(repeat_n(' ', gap + usize::from(i < extra)));
            }
        }
        justified
    }
}

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            "justify" => Ok(Self::Justify),
            other => Err(ParseAlignmentError(other.to_owned())),
        }
    }
}

/// An unrecognized alignment name
#[derive(Debug, Error, PartialEq, Eq)]
#[error(r#""{0}" is an invalid alignment type, expecting left, center, right, or justify"#)]
pub struct ParseAlignmentError(String);
