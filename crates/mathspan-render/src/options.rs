use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options handed to the rendering collaborator verbatim.
///
/// Display mode is deliberately not a field: the integration decides it per
/// call (`false` for inline spans, `true` for blocks) and passes it alongside
/// the options, so no caller-supplied value can leak through and no mutation
/// has to happen before a render call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Color applied by renderers that highlight erroneous input.
    pub error_color: Option<String>,
    /// Macro definitions forwarded to the renderer.
    pub macros: BTreeMap<String, String>,
    /// Emit a diagnostic when the renderer rejects a span. The rejection is
    /// recovered from either way; this only controls logging.
    pub log_errors: bool,
}
