//! Rendering: the hook contract the engine drives, plus the three concrete
//! output styles.

mod console;
mod html;
mod source;
mod traits;

pub use console::ConsoleRenderer;
pub use html::HtmlRenderer;
pub use source::SourceRenderer;
pub use traits::{PlainRenderer, Renderer};
