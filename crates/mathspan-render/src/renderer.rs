use crate::options::RenderOptions;

/// A rendering collaborator rejected its input.
///
/// Always recovered locally by the integration (the raw source is escaped
/// and substituted); never propagated to the host pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("math rendering failed: {0}")]
pub struct RenderError(String);

impl RenderError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

/// The rendering collaborator: turns raw math source into markup.
///
/// `display_mode` is `false` for inline spans and `true` for blocks; it is
/// decided by the integration per call, regardless of anything in `options`.
/// Implementations must be stateless across calls — rendering the same input
/// twice yields the same markup.
pub trait MathRenderer {
    fn render(
        &self,
        latex: &str,
        display_mode: bool,
        options: &RenderOptions,
    ) -> Result<String, RenderError>;
}
