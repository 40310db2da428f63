//! Formatters for every MarkdownV2 entity.
//!
//! Each formatter takes [`Markup`] (raw text, a [`Fragment`], or a
//! [`Template`](crate::Template)), resolves it to one safe body, and wraps
//! it in the entity's delimiters:
//!
//! ````text
//! *bold*  _italic_  __underline__  ~strikethrough~  ||spoiler||
//! [inline URL](http://www.example.com/)
//! [inline mention](tg://user?id=123456789)
//! ![👍](tg://emoji?id=5368324170671202286)
//! `inline code`
//! ```language
//! code block
//! ```
//! >block quote
//! **>expandable block quote||
//! ````
//!
//! Delimiter collisions are not detected: nesting a formatter inside itself
//! (bold inside bold) produces markup the renderer rejects.

use crate::fragment::{Block, Fragment};
use crate::template::Markup;
use std::fmt;

/// Destination prefix for user mentions.
pub const MENTION_SCHEME: &str = "tg://user?id=";
/// Destination prefix for custom emoji.
pub const EMOJI_SCHEME: &str = "tg://emoji?id=";

const QUOTE_MARKER: &str = ">";
const EXPANDABLE_START: &str = "**>";
const EXPANDABLE_END: &str = "||";
const FENCE: &str = "```";

/// `*bold*`
pub fn bold(body: impl Into<Markup>) -> Fragment {
    wrap("*", body.into(), "*")
}

/// `_italic_`
pub fn italic(body: impl Into<Markup>) -> Fragment {
    wrap("_", body.into(), "_")
}

/// `__underline__`
pub fn underline(body: impl Into<Markup>) -> Fragment {
    wrap("__", body.into(), "__")
}

/// `~strikethrough~`
pub fn strikethrough(body: impl Into<Markup>) -> Fragment {
    wrap("~", body.into(), "~")
}

/// `||spoiler||`
pub fn spoiler(body: impl Into<Markup>) -> Fragment {
    wrap("||", body.into(), "||")
}

/// `` `inline code` ``
pub fn inline_code(body: impl Into<Markup>) -> Fragment {
    wrap("`", body.into(), "`")
}

/// Binds a link destination; the returned [`Link`] formats the link text.
///
/// The URL is inserted as given.
///
/// ```
/// use tgmd_core::md;
///
/// let link = md::inline_url("http://example.com").text("Click here");
/// assert_eq!(link.as_str(), "[Click here](http://example.com)");
/// ```
pub fn inline_url(url: impl Into<String>) -> Link {
    Link {
        destination: url.into(),
    }
}

/// Binds a user id; the returned [`Link`] formats the mention text.
pub fn inline_mention(user_id: impl fmt::Display) -> Link {
    Link {
        destination: format!("{MENTION_SCHEME}{user_id}"),
    }
}

/// `![emoji](tg://emoji?id=emoji_id)`, with the placeholder emoji kept as is.
pub fn custom_emoji(emoji: &str, emoji_id: impl fmt::Display) -> Fragment {
    Fragment::inline(format!("![{emoji}]({EMOJI_SCHEME}{emoji_id})"))
}

/// Fenced code block with an optional language tag.
///
/// The code is inserted verbatim. The fragment starts its own line when
/// interpolated, but may still be used inside inline formatters.
pub fn code_block(code: &str, language: Option<&str>) -> Fragment {
    let language = language.unwrap_or_default();
    let mut text = String::with_capacity(code.len() + language.len() + 2 * FENCE.len() + 2);
    text.push_str(FENCE);
    text.push_str(language);
    text.push('\n');
    text.push_str(code);
    text.push('\n');
    text.push_str(FENCE);
    Fragment::fenced(text)
}

/// Quotes every line of the body with `>`.
///
/// An empty body yields a lone `>`.
pub fn block_quote(body: impl Into<Markup>) -> Block {
    let body = body.into().resolve();
    let text = body
        .split('\n')
        .map(|line| format!("{QUOTE_MARKER}{line}"))
        .collect::<Vec<_>>()
        .join("\n");
    Block::new(text)
}

/// Expandable block quote: `**>` on the first line, `>` on the rest, and the
/// `||` expandability mark plus a newline at the end.
///
/// Trailing whitespace before the mark is trimmed.
pub fn expandable_block_quote(body: impl Into<Markup>) -> Block {
    let body = body.into().resolve();
    let mut lines = body.split('\n');

    let mut text = String::with_capacity(body.len() + 8);
    text.push_str(EXPANDABLE_START);
    text.push_str(lines.next().unwrap_or_default());
    text.push('\n');
    for line in lines {
        text.push_str(QUOTE_MARKER);
        text.push_str(line);
        text.push('\n');
    }

    let kept = text.trim_end().len();
    text.truncate(kept);
    text.push_str(EXPANDABLE_END);
    text.push('\n');
    Block::new(text)
}

/// A link with its destination bound, waiting for link text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    destination: String,
}

impl Link {
    /// `[body](destination)`
    pub fn text(&self, body: impl Into<Markup>) -> Fragment {
        let body = body.into();
        let text = format!("[{}]({})", body.resolve(), self.destination);
        finish(text, &body)
    }

    /// The bound destination.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

fn wrap(open: &str, body: Markup, close: &str) -> Fragment {
    let resolved = body.resolve();
    let mut text = String::with_capacity(open.len() + resolved.len() + close.len());
    text.push_str(open);
    text.push_str(&resolved);
    text.push_str(close);
    finish(text, &body)
}

/// A body that opens with a fence keeps the wrapper on a fresh line too.
fn finish(text: String, body: &Markup) -> Fragment {
    if body.needs_leading_break() {
        Fragment::fenced(text)
    } else {
        Fragment::inline(text)
    }
}
