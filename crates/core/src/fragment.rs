//! Already-safe markup values.
//!
//! A [`Fragment`] holds text that has been escaped or assembled by a
//! formatter. It is embedded verbatim wherever it goes and is never escaped
//! a second time. [`Block`] is the block-level variant produced by quotes;
//! it can only be placed in a top-level [`Message`](crate::Message), never
//! inside another formatter.

use std::fmt;

/// Escaped or formatter-built markup text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment {
    text: String,
    nestable: bool,
    leading_break: bool,
}

impl Fragment {
    /// Wraps already-safe inline text: nestable, no leading break.
    pub(crate) fn inline(text: String) -> Self {
        Self {
            text,
            nestable: true,
            leading_break: false,
        }
    }

    /// Wraps a fenced construct that must start its own line but may still
    /// appear inside inline formatters.
    pub(crate) fn fenced(text: String) -> Self {
        Self {
            text,
            nestable: true,
            leading_break: true,
        }
    }

    /// The assembled markup.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the fragment, returning the assembled markup.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Whether this fragment may be the body of another formatter.
    pub fn is_nestable(&self) -> bool {
        self.nestable
    }

    /// Whether the fragment must begin on a fresh line when interpolated.
    pub fn needs_leading_break(&self) -> bool {
        self.leading_break
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.text
    }
}

/// Block-level markup (block quotes).
///
/// Always starts on its own line and is never nestable, so it has no
/// conversion into formatter input:
///
/// ```compile_fail
/// use tgmd_core::md;
///
/// md::bold(md::block_quote("quoted"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block(Fragment);

impl Block {
    pub(crate) fn new(text: String) -> Self {
        Self(Fragment {
            text,
            nestable: false,
            leading_break: true,
        })
    }

    pub(crate) fn fragment(&self) -> &Fragment {
        &self.0
    }

    /// The assembled markup.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consumes the block, returning the assembled markup.
    pub fn into_string(self) -> String {
        self.0.text
    }

    /// Always false: blocks cannot be the body of a formatter.
    pub fn is_nestable(&self) -> bool {
        self.0.nestable
    }

    /// Always true: blocks begin on a fresh line.
    pub fn needs_leading_break(&self) -> bool {
        self.0.leading_break
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for Block {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Block> for String {
    fn from(block: Block) -> Self {
        block.0.text
    }
}
