use mathspan_engine::{MathKind, MathSpan};

use crate::options::RenderOptions;
use crate::renderer::MathRenderer;

/// Renders one math span to an HTML fragment.
///
/// Inline spans become `<span>...</span>`, blocks `<p>...</p>` followed by a
/// newline. Renderer output is inserted as raw trusted markup; on failure the
/// raw math source is HTML-escaped and substituted so the document always
/// renders something.
pub fn math_to_html(
    renderer: &impl MathRenderer,
    span: &MathSpan,
    options: &RenderOptions,
) -> String {
    match span.kind {
        MathKind::Inline => inline_html(renderer, &span.content, options),
        MathKind::Block => block_html(renderer, &span.content, options),
    }
}

/// `<span>`-wrapped inline rendering (display mode off).
pub fn inline_html(renderer: &impl MathRenderer, latex: &str, options: &RenderOptions) -> String {
    let markup = rendered_or_escaped(renderer, latex, false, options);
    format!("<span>{markup}</span>")
}

/// `<p>`-wrapped block rendering (display mode on), newline-terminated.
pub fn block_html(renderer: &impl MathRenderer, latex: &str, options: &RenderOptions) -> String {
    let markup = rendered_or_escaped(renderer, latex, true, options);
    format!("<p>{markup}</p>\n")
}

fn rendered_or_escaped(
    renderer: &impl MathRenderer,
    latex: &str,
    display_mode: bool,
    options: &RenderOptions,
) -> String {
    match renderer.render(latex, display_mode, options) {
        Ok(markup) => markup,
        Err(err) => {
            if options.log_errors {
                tracing::warn!(%err, display_mode, "math renderer rejected span, falling back to escaped source");
            }
            html_escape::encode_text(latex).into_owned()
        }
    }
}
