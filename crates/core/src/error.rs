use thiserror::Error;

/// Errors surfaced by template construction and payload encoding.
///
/// Formatters and escaping are total; only shapes the type system cannot
/// check end up here.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// Literal segments and interpolated values do not alternate.
    #[error(
        "template arity mismatch: {literals} literal segments for {values} values (expected {})",
        .values + 1
    )]
    TemplateArity {
        /// Number of literal segments supplied
        literals: usize,
        /// Number of interpolated values supplied
        values: usize,
    },
    /// Send-message payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MarkupError {
    /// Create an arity error for the given segment and value counts
    pub fn arity(literals: usize, values: usize) -> Self {
        Self::TemplateArity { literals, values }
    }

    /// Whether the error comes from a malformed template
    pub fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateArity { .. })
    }
}
