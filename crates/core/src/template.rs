//! Templates and the evaluator that turns them into MarkdownV2 text.
//!
//! A template is an ordered run of raw text and already-safe fragments. Raw
//! text is escaped on the way in; fragments are copied verbatim. Fragments
//! that must start their own line (code blocks, block quotes) trim trailing
//! whitespace from the output assembled so far and put a single newline in
//! front of themselves.
//!
//! [`Template`] is the body a formatter accepts. [`Message`] is the top-level
//! form and additionally accepts [`Block`]s.

use crate::error::MarkupError;
use crate::escape::escape_into;
use crate::fragment::{Block, Fragment};
use std::fmt;

/// One item of a formatter body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Raw text, escaped when assembled.
    Text(String),
    /// Safe markup, copied verbatim.
    Fragment(Fragment),
}

impl Piece {
    /// Raw text from any displayable value.
    pub fn display(value: impl fmt::Display) -> Self {
        Piece::Text(value.to_string())
    }

    fn segment(&self) -> Segment<'_> {
        match self {
            Piece::Text(text) => Segment::Literal(text),
            Piece::Fragment(fragment) => Segment::Safe(fragment),
        }
    }
}

/// One item of a top-level message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Raw text, escaped when assembled.
    Text(String),
    /// Safe inline or fenced markup, copied verbatim.
    Fragment(Fragment),
    /// Block-level markup, copied verbatim on a fresh line.
    Block(Block),
}

impl Part {
    /// Raw text from any displayable value.
    pub fn display(value: impl fmt::Display) -> Self {
        Part::Text(value.to_string())
    }

    fn segment(&self) -> Segment<'_> {
        match self {
            Part::Text(text) => Segment::Literal(text),
            Part::Fragment(fragment) => Segment::Safe(fragment),
            Part::Block(block) => Segment::Safe(block.fragment()),
        }
    }
}

/// Body of a formatter built from interleaved text and fragments.
///
/// Usually built with the [`template!`](crate::template) macro.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Creates an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a template from literal segments and the values interpolated
    /// between them (`literal₀ value₀ literal₁ … literalₙ`).
    ///
    /// Fails when there is not exactly one more literal than values.
    pub fn from_parts<S: AsRef<str>>(
        literals: &[S],
        values: impl IntoIterator<Item = Piece>,
    ) -> Result<Self, MarkupError> {
        let values: Vec<Piece> = values.into_iter().collect();
        check_arity(literals.len(), values.len())?;
        Ok(interleave(literals, values, Piece::Text).collect())
    }

    /// Appends a piece.
    pub fn push(&mut self, piece: impl Into<Piece>) -> &mut Self {
        self.pieces.push(piece.into());
        self
    }

    /// Pieces in evaluation order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Evaluates the template into escaped markup.
    pub fn render(&self) -> String {
        assemble(self.pieces.iter().map(Piece::segment))
    }

    /// Whether the first non-blank piece must start its own line.
    ///
    /// Leading whitespace-only text is dropped when that fragment is
    /// assembled, so it does not count.
    pub fn needs_leading_break(&self) -> bool {
        self.pieces
            .iter()
            .find_map(|piece| match piece {
                Piece::Text(text) if text.trim().is_empty() => None,
                Piece::Text(_) => Some(false),
                Piece::Fragment(fragment) => Some(fragment.needs_leading_break()),
            })
            .unwrap_or(false)
    }
}

impl FromIterator<Piece> for Template {
    fn from_iter<I: IntoIterator<Item = Piece>>(iter: I) -> Self {
        Self {
            pieces: iter.into_iter().collect(),
        }
    }
}

impl Extend<Piece> for Template {
    fn extend<I: IntoIterator<Item = Piece>>(&mut self, iter: I) {
        self.pieces.extend(iter);
    }
}

/// Top-level message template; the only form that accepts [`Block`]s.
///
/// Usually evaluated in one step with the [`markdown_v2!`](crate::markdown_v2)
/// macro.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    parts: Vec<Part>,
}

impl Message {
    /// Creates an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a message from literal segments and interpolated values, with
    /// the same arity rule as [`Template::from_parts`].
    pub fn from_parts<S: AsRef<str>>(
        literals: &[S],
        values: impl IntoIterator<Item = Part>,
    ) -> Result<Self, MarkupError> {
        let values: Vec<Part> = values.into_iter().collect();
        check_arity(literals.len(), values.len())?;
        Ok(interleave(literals, values, Part::Text).collect())
    }

    /// Appends a part.
    pub fn push(&mut self, part: impl Into<Part>) -> &mut Self {
        self.parts.push(part.into());
        self
    }

    /// Parts in evaluation order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Evaluates the message into the final MarkdownV2 string.
    pub fn render(&self) -> String {
        assemble(self.parts.iter().map(Part::segment))
    }
}

impl FromIterator<Part> for Message {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl Extend<Part> for Message {
    fn extend<I: IntoIterator<Item = Part>>(&mut self, iter: I) {
        self.parts.extend(iter);
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Message> for String {
    fn from(message: Message) -> Self {
        message.render()
    }
}

/// Evaluates literal segments interleaved with interpolated values into the
/// final MarkdownV2 string.
///
/// ```
/// use tgmd_core::{Part, evaluate, md};
///
/// let out = evaluate(&["Hello ", "!"], [Part::from(md::bold("world"))]).unwrap();
/// assert_eq!(out, r"Hello *world*\!");
/// ```
pub fn evaluate<S: AsRef<str>>(
    literals: &[S],
    values: impl IntoIterator<Item = Part>,
) -> Result<String, MarkupError> {
    Message::from_parts(literals, values).map(|message| message.render())
}

/// Formatter input: raw text, a single fragment, or a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Raw text, escaped.
    Text(String),
    /// A single safe fragment, used verbatim.
    Fragment(Fragment),
    /// Interleaved text and fragments.
    Template(Template),
}

impl Markup {
    /// Resolves the input into one safe body.
    pub fn resolve(&self) -> String {
        match self {
            Markup::Text(text) => assemble([Segment::Literal(text)]),
            Markup::Fragment(fragment) => assemble([Segment::Safe(fragment)]),
            Markup::Template(template) => template.render(),
        }
    }

    /// Whether the resolved body opens with a fragment that must start its
    /// own line, so the formatter wrapping it inherits that requirement.
    pub fn needs_leading_break(&self) -> bool {
        match self {
            Markup::Text(_) => false,
            Markup::Fragment(fragment) => fragment.needs_leading_break(),
            Markup::Template(template) => template.needs_leading_break(),
        }
    }
}

#[derive(Clone, Copy)]
enum Segment<'a> {
    Literal(&'a str),
    Safe(&'a Fragment),
}

fn assemble<'a>(segments: impl IntoIterator<Item = Segment<'a>>) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => escape_into(&mut out, text),
            Segment::Safe(fragment) => {
                if fragment.needs_leading_break() {
                    break_line(&mut out);
                }
                out.push_str(fragment.as_str());
            }
        }
    }
    out
}

/// Ends the current line before a fragment that must start its own.
fn break_line(out: &mut String) {
    let kept = out.trim_end().len();
    out.truncate(kept);
    if !out.is_empty() {
        log::trace!("inserting line break before block fragment at byte {kept}");
        out.push('\n');
    }
}

fn check_arity(literals: usize, values: usize) -> Result<(), MarkupError> {
    if literals == values + 1 {
        Ok(())
    } else {
        Err(MarkupError::arity(literals, values))
    }
}

fn interleave<'a, S, T>(
    literals: &'a [S],
    values: Vec<T>,
    text: fn(String) -> T,
) -> impl Iterator<Item = T> + 'a
where
    S: AsRef<str>,
    T: 'a,
{
    let mut values = values.into_iter();
    literals.iter().flat_map(move |literal| {
        let literal = literal.as_ref();
        let head = (!literal.is_empty()).then(|| text(literal.to_string()));
        head.into_iter().chain(values.next())
    })
}

macro_rules! safe_conversions {
    ($($target:ident),* $(,)?) => {
        $(
            impl From<&str> for $target {
                fn from(text: &str) -> Self {
                    $target::Text(text.to_string())
                }
            }

            impl From<String> for $target {
                fn from(text: String) -> Self {
                    $target::Text(text)
                }
            }

            impl From<&String> for $target {
                fn from(text: &String) -> Self {
                    $target::Text(text.clone())
                }
            }

            impl From<Fragment> for $target {
                fn from(fragment: Fragment) -> Self {
                    $target::Fragment(fragment)
                }
            }

            impl From<&Fragment> for $target {
                fn from(fragment: &Fragment) -> Self {
                    $target::Fragment(fragment.clone())
                }
            }
        )*
    };
}

safe_conversions!(Piece, Part, Markup);

macro_rules! display_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Piece {
                fn from(value: $ty) -> Self {
                    Piece::Text(value.to_string())
                }
            }

            impl From<$ty> for Part {
                fn from(value: $ty) -> Self {
                    Part::Text(value.to_string())
                }
            }
        )*
    };
}

display_conversions!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl From<Block> for Part {
    fn from(block: Block) -> Self {
        Part::Block(block)
    }
}

impl From<&Block> for Part {
    fn from(block: &Block) -> Self {
        Part::Block(block.clone())
    }
}

impl From<Piece> for Part {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::Text(text) => Part::Text(text),
            Piece::Fragment(fragment) => Part::Fragment(fragment),
        }
    }
}

impl From<Template> for Markup {
    fn from(template: Template) -> Self {
        Markup::Template(template)
    }
}
