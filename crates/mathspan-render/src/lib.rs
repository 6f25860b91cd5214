//! Rendering integration for mathspan tokens.
//!
//! The recognition core hands over a [`mathspan_engine::MathSpan`]; this
//! crate passes its content to a [`MathRenderer`] collaborator and assembles
//! the output fragment: `<span>` for inline spans, `<p>` plus a newline for
//! blocks. A failing renderer never fails the document — the raw source is
//! HTML-escaped and substituted instead, optionally logging a diagnostic.

pub mod html;
pub mod options;
pub mod renderer;

pub use html::{block_html, inline_html, math_to_html};
pub use options::RenderOptions;
pub use renderer::{MathRenderer, RenderError};
