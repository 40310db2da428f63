//! MarkdownV2 escaping for literal text.
//!
//! Every markup-control character is prefixed with a backslash so the
//! renderer treats it as content. Everything else, including all non-ASCII
//! text, passes through untouched.

use crate::fragment::Fragment;
use std::borrow::Cow;

/// Prefix written before each escaped control character.
pub const ESCAPE_MARKER: char = '\\';

/// Characters the dialect reserves for markup.
///
/// The backslash itself is not in the set, so an existing escape sequence
/// fed back through [`escape`] keeps its marker and gains one before the
/// escaped character.
pub const CONTROL_CHARS: [char; 18] = [
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Returns true if `ch` must be escaped when it appears as literal text.
pub fn is_control_char(ch: char) -> bool {
    CONTROL_CHARS.contains(&ch)
}

/// Escapes `text` and wraps the result as a nestable [`Fragment`].
///
/// The returned fragment is never escaped again when it is embedded in a
/// formatter or message.
///
/// ```
/// use tgmd_core::escape;
///
/// assert_eq!(escape("1 + 1 = 2").as_str(), r"1 \+ 1 \= 2");
/// ```
pub fn escape(text: &str) -> Fragment {
    Fragment::inline(escape_str(text).into_owned())
}

/// Escapes `text`, borrowing it unchanged when it holds no control characters.
pub fn escape_str(text: &str) -> Cow<'_, str> {
    if !text.contains(is_control_char) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    escape_into(&mut out, text);
    Cow::Owned(out)
}

/// Appends the escaped form of `text` to `out` in a single pass.
pub fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        if is_control_char(ch) {
            out.push(ESCAPE_MARKER);
        }
        out.push(ch);
    }
}
