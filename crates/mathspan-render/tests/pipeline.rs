//! Scanning plus rendering, end to end.

use mathspan_engine::{BlockSource, InlineOutcome, LineBuffer, scan_block, scan_inline};
use mathspan_render::{MathRenderer, RenderError, RenderOptions, math_to_html};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Minimal deterministic renderer: wraps content in a katex-ish shell.
struct Shell;

impl MathRenderer for Shell {
    fn render(
        &self,
        latex: &str,
        display_mode: bool,
        _options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let class = if display_mode { "display" } else { "inline" };
        Ok(format!("<mi class=\"{class}\">{latex}</mi>"))
    }
}

/// Rejects everything, like a renderer choking on malformed input.
struct Rejecting;

impl MathRenderer for Rejecting {
    fn render(
        &self,
        _latex: &str,
        _display_mode: bool,
        _options: &RenderOptions,
    ) -> Result<String, RenderError> {
        Err(RenderError::new("parse error"))
    }
}

#[test]
fn inline_span_renders_through_collaborator() {
    let line = "see $e^x$ grow";
    let m = scan_inline(line, 4).unwrap();
    let span = m.to_span(0, 4).unwrap();
    let html = math_to_html(&Shell, &span, &RenderOptions::default());
    assert_eq!(html, "<span><mi class=\"inline\">e^x</mi></span>");
}

#[test]
fn block_span_renders_in_display_mode() {
    let src = LineBuffer::new("$$\ne^x\n$$");
    let span = scan_block(&src, 0, src.line_count()).unwrap();
    let html = math_to_html(&Shell, &span, &RenderOptions::default());
    assert_eq!(html, "<p><mi class=\"display\">e^x\n</mi></p>\n");
}

#[test]
fn rendering_is_idempotent_across_calls() {
    // No renderer or option state leaks between calls.
    let m = scan_inline("$x$", 0).unwrap();
    let span = m.to_span(0, 0).unwrap();
    let opts = RenderOptions::default();
    let first = math_to_html(&Shell, &span, &opts);
    let second = math_to_html(&Shell, &span, &opts);
    assert_eq!(first, second);
}

#[rstest]
#[case::quiet(false)]
#[case::logged(true)]
fn render_failure_degrades_to_escaped_literal(#[case] log_errors: bool) {
    let m = scan_inline("$bad$", 0).unwrap();
    let span = m.to_span(0, 0).unwrap();
    let opts = RenderOptions {
        log_errors,
        ..RenderOptions::default()
    };
    let html = math_to_html(&Rejecting, &span, &opts);
    assert_eq!(html, "<span>bad</span>");
}

#[test]
fn failed_block_escapes_markup_sensitive_content() {
    let src = LineBuffer::new("$$\na < b & b > c\n$$");
    let span = scan_block(&src, 0, src.line_count()).unwrap();
    let html = math_to_html(&Rejecting, &span, &RenderOptions::default());
    assert_eq!(html, "<p>a &lt; b &amp; b &gt; c\n</p>\n");
}

#[test]
fn mixed_document_walkthrough() {
    // A host loop stitching both scanners together over a small document.
    let doc = "intro $a$ text\n$$\nb\n$$\noutro";
    let src = LineBuffer::new(doc);
    let opts = RenderOptions::default();

    let mut fragments = Vec::new();
    let mut line_idx = 0;
    while line_idx < src.line_count() {
        if let Some(span) = scan_block(&src, line_idx, src.line_count()) {
            let next = span.end_line;
            fragments.push(math_to_html(&Shell, &span, &opts));
            line_idx = next;
            continue;
        }
        let line = src.line(line_idx);
        let mut pos = 0;
        while pos < line.len() {
            match scan_inline(line, pos) {
                Some(m) => {
                    if matches!(m.outcome, InlineOutcome::Math(_)) {
                        let span = m.to_span(line_idx, pos).unwrap();
                        fragments.push(math_to_html(&Shell, &span, &opts));
                    }
                    pos = m.end;
                }
                None => pos += 1,
            }
        }
        line_idx += 1;
    }

    assert_eq!(
        fragments,
        vec![
            "<span><mi class=\"inline\">a</mi></span>".to_owned(),
            "<p><mi class=\"display\">b\n</mi></p>\n".to_owned(),
        ]
    );
}
