//! # odump
//!
//! Dump arbitrary in-memory object graphs as readable text.
//!
//! A value that implements [`Reflect`] is walked recursively (members of
//! objects, elements of sequences, keys and values of pairs) and every
//! structural event is turned into text by a [`Renderer`]. Three renderers
//! ship with the crate: [`ConsoleRenderer`] (human-readable),
//! [`SourceRenderer`] (a compilable variable declaration) and
//! [`HtmlRenderer`] (markup). The traversal detects circular references,
//! honors a configurable recursion ceiling and filters/orders members per
//! [`DumpOptions`].

pub mod engine;
mod error;
mod options;
pub mod reflect;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use engine::{render, Session};
pub use error::DumpError;
pub use options::{DumpOptions, DumpStyle, MemberOrder};
pub use reflect::{
    short_type_name, Element, Elements, Member, MemberKind, Reflect, Scalar, Shape,
};
pub use renderer::{ConsoleRenderer, HtmlRenderer, PlainRenderer, Renderer, SourceRenderer};

/// Dumps `value` in the style selected by `options.style`.
pub fn dump(value: &dyn Reflect, options: &DumpOptions) -> Result<String, DumpError> {
    match options.style {
        DumpStyle::Console => dump_console(value, options),
        DumpStyle::Source => dump_source(value, options),
        DumpStyle::Html => dump_html(value, options),
    }
}

/// Dumps `value` in the human-readable console style.
pub fn dump_console(value: &dyn Reflect, options: &DumpOptions) -> Result<String, DumpError> {
    render(value, &ConsoleRenderer, options)
}

/// Dumps `value` as a compilable variable declaration.
pub fn dump_source(value: &dyn Reflect, options: &DumpOptions) -> Result<String, DumpError> {
    render(value, &SourceRenderer, options)
}

/// Dumps `value` as HTML markup.
pub fn dump_html(value: &dyn Reflect, options: &DumpOptions) -> Result<String, DumpError> {
    render(value, &HtmlRenderer, options)
}
