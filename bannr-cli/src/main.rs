//! Command line banner renderer

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bannr::font::Font;
use bannr::render::{self, Renderer};
use clap::{Parser, ValueEnum};

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Reject bad input before touching any font source.
    render::validate(&cli.text)?;
    let font = cli.font()?;
    let lines = cli.renderer(&font).render(&cli.text)?;
    match &cli.output {
        Some(path) => fs::write(path, file_contents(&lines))
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => {
            for line in &lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Byte content of the file sink: the same lines the console sink prints,
/// joined with newline separators, with no trailing newline.
fn file_contents(lines: &[String]) -> String {
    lines.join("\n")
}

#[derive(Parser)]
struct Cli {
    /// Text to render; a literal `\n` sequence starts a new banner line
    text: String,
    /// Name of an alternate font table, resolved to `<name>.txt`
    font: Option<String>,
    /// Alignment of the banner rows within the output field
    #[arg(long)]
    align: Option<Align>,
    /// Write the banner to this file instead of the console
    #[arg(long)]
    output: Option<PathBuf>,
    /// Field width used when aligning
    #[arg(long, default_value_t = render::DEFAULT_WIDTH)]
    width: usize,
}

impl Cli {
    fn font(&self) -> Result<Font> {
        let font = match &self.font {
            Some(name) => {
                let path = format!("{name}.txt");
                let source = fs::read_to_string(&path)
                    .with_context(|| format!("cannot read font table {path}"))?;
                let (font, warnings) = Font::decode_with_warnings(&source)?;
                for warning in warnings {
                    eprintln!("WARNING: {warning}");
                }
                font
            }
            None => Font::standard(),
        };
        Ok(font)
    }

    fn renderer<'font>(&self, font: &'font Font) -> Renderer<'font> {
        let mut renderer = Renderer::new(font).width(self.width);
        if let Some(align) = self.align {
            renderer = renderer.alignment(align.into());
        }
        renderer
    }
}

#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum Align {
    Left,
    Center,
    Right,
    Justify,
}

impl From<Align> for render::Alignment {
    fn from(value: Align) -> Self {
        match value {
            Align::Left => Self::Left,
            Align::Center => Self::Center,
            Align::Right => Self::Right,
            Align::Justify => Self::Justify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::file_contents;

    #[test]
    fn file_sink_matches_console_lines() {
        let lines = ["#   #".to_owned(), String::new(), "#####".to_owned()];
        assert_eq!(file_contents(&lines), "#   #\n\n#####");
    }
}
