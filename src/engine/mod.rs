//! The traversal engine: output buffer, cycle tracking, member enumeration
//! and the recursive walker that drives renderer hooks.

pub(crate) mod buffer;
pub(crate) mod members;
pub(crate) mod session;
pub(crate) mod tracker;
pub(crate) mod walker;

use tracing::debug;

use crate::error::DumpError;
use crate::options::DumpOptions;
use crate::reflect::Reflect;
use crate::renderer::Renderer;

pub use session::Session;

/// Runs one dump session over `value` with an explicit renderer.
///
/// Every call owns its buffer and cycle-tracker state; sessions are never
/// shared across calls or threads.
pub fn render(
    value: &dyn Reflect,
    renderer: &dyn Renderer,
    options: &DumpOptions,
) -> Result<String, DumpError> {
    options.validate()?;
    debug!(root = %value.type_name(), "starting dump session");
    Ok(walker::Walker::new(renderer, options).run(value))
}
