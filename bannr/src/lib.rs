//! A crate for decoding flat banner font tables and rendering text as
//! block-letter art.
//!
//! # Features
//!
//! - Decoding the flat 95-glyph font table format, validated up front
//!   ([`Font::decode`](crate::font::Font::decode))
//! - Glyph composition into 8-row banners
//!   ([`Renderer::banner`](crate::render::Renderer::banner))
//! - Alignment of banner rows within a fixed-width field
//!   ([`Alignment`](crate::render::Alignment))
//! - Multi-line input via the literal `\n` escape marker
//!   ([`Renderer::render`](crate::render::Renderer::render))
//!
//! # Example
//!
//! ```
//! # use bannr::font::Font;
//! let lines = Font::standard().render("Hi").unwrap();
//! let expected = [
//!     "#   #   #   ",
//!     "#   #       ",
//!     "#   #  ##   ",
//!     "#####   #   ",
//!     "#   #   #   ",
//!     "#   #   #   ",
//!     "#   #  ###  ",
//!     "            ",
//! ];
//! assert_eq!(lines, expected);
//! ```

pub mod font;
pub mod render;
