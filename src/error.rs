use thiserror::Error;

/// Errors surfaced before traversal begins.
///
/// Traversal itself never fails: circular references and depth limits are
/// rendered as in-band markers, not errors.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("invalid dump options: {0}")]
    InvalidOptions(&'static str),
}
