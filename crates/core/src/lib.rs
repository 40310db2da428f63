#![deny(missing_docs)]
//! tgmd core: escaping, formatters, and template evaluation for Telegram
//! MarkdownV2.
//!
//! Raw text is escaped exactly once, when it is first wrapped. Formatter
//! output ([`Fragment`], [`Block`]) is already safe and is copied verbatim
//! wherever it is embedded.
//!
//! ```
//! use tgmd_core::{markdown_v2, md, template};
//!
//! let text = markdown_v2![
//!     "Build #42 ",
//!     md::bold(template!["passed ", md::italic("(3.1s)")]),
//!     "!",
//! ];
//! assert_eq!(text, r"Build \#42 *passed _\(3\.1s\)_*\!");
//! ```

/// Core error types.
pub mod error;
/// MarkdownV2 escaping of literal text.
pub mod escape;
/// Already-safe fragment types.
pub mod fragment;
/// Formatters for each MarkdownV2 entity.
pub mod md;
/// Send-message payload handed to the transport.
pub mod message;
/// Templates, formatter input, and the evaluator.
pub mod template;

pub use error::MarkupError;
pub use escape::{CONTROL_CHARS, escape, escape_str};
pub use fragment::{Block, Fragment};
pub use message::{ChatId, MessageOptions, ParseMode, SendMessage};
pub use template::{Markup, Message, Part, Piece, Template, evaluate};

/// Builds a [`Template`] for a formatter body from text and fragments.
///
/// Text and other displayable values are escaped; fragments are kept as is.
///
/// ```
/// use tgmd_core::{md, template};
///
/// let body = template!["test ", md::bold("bold")];
/// assert_eq!(md::italic(body).as_str(), "_test *bold*_");
/// ```
#[macro_export]
macro_rules! template {
    ($($piece:expr),* $(,)?) => {
        <$crate::Template as ::core::iter::FromIterator<$crate::Piece>>::from_iter([
            $($crate::Piece::from($piece)),*
        ])
    };
}

/// Evaluates text, fragments, and blocks into the final MarkdownV2 string.
///
/// Block quotes and code blocks are moved onto their own line.
///
/// ```
/// use tgmd_core::{markdown_v2, md};
///
/// let text = markdown_v2!["Result: ", md::block_quote("all good")];
/// assert_eq!(text, "Result:\n>all good");
/// assert_eq!(markdown_v2![], "");
/// ```
#[macro_export]
macro_rules! markdown_v2 {
    ($($part:expr),* $(,)?) => {
        <$crate::Message as ::core::iter::FromIterator<$crate::Part>>::from_iter([
            $($crate::Part::from($part)),*
        ])
        .render()
    };
}
