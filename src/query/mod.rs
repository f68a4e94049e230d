//! Query-string configuration.
//!
//! Parses strings like `?w=800&h=400&cropbox.ratio=1&overflow=false` into
//! [`Instructions`], which fold onto [`CropperOptions`](crate::CropperOptions).
//! Useful when the widget is configured from a URL or an HTML data attribute.
//!
//! # Example
//!
//! ```
//! use zencrop::{CropBoxPosition, Extent, query};
//!
//! let result = query::parse("w=800&h=auto&cropbox.rect=,,200,200&cropbox.center=1");
//! assert!(result.warnings.is_empty());
//!
//! let options = result.instructions.to_options();
//! assert_eq!(options.width, Extent::Fixed(800.0));
//! assert_eq!(options.height, Extent::Auto);
//! assert!(matches!(
//!     options.crop_box_position,
//!     CropBoxPosition::Explicit(p) if p.centered && p.rect.width == Some(200.0)
//! ));
//! ```
//!
//! # Keys
//!
//! | Key | Value |
//! |---|---|
//! | `w`, `width`, `h`, `height` | number, or `auto` |
//! | `ratio` | container scale when both sides are auto |
//! | `canvas` | `fit`, `originfit`, `origin` |
//! | `canvas.rect`, `cropbox.rect` | `left,top,width,height`, parts may be empty |
//! | `canvas.center`, `cropbox.center` | boolean |
//! | `canvas.ratio`, `cropbox.ratio` | lock ratio, `0` for none |
//! | `cropbox` | `fit`, `fitincanvas` |
//! | `overflow`, `disabled` | boolean |
//!
//! Keys are case-insensitive. Unknown keys and unparseable values produce
//! [`ParseWarning`]s and are otherwise skipped.

mod convert;
pub mod instructions;
mod parse;

pub use instructions::{CanvasMode, CropBoxMode, Instructions};

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed settings.
    pub instructions: Instructions,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key is not a cropper setting.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (instructions, warnings) = parse::parse_query(query);
    ParseResult {
        instructions,
        warnings,
    }
}
