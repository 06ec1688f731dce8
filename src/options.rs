use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::DumpError;
use crate::reflect::Member;

/// Key extractor used to order members before they are dumped.
///
/// Members are stable-sorted by the returned key within their group, so
/// members with equal keys keep their declaration order.
pub type MemberOrder = Arc<dyn Fn(&Member<'_>) -> String + Send + Sync>;

/// Output style used by the top-level [`dump`](crate::dump) entry point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpStyle {
    #[default]
    Console,
    Source,
    Html,
}

/// Formatting and filtering options for one dump session.
///
/// Options are read-only during a dump; a session never mutates shared
/// option state.
#[derive(Clone)]
pub struct DumpOptions {
    pub style: DumpStyle,
    /// Characters per indent level.
    pub indent_size: usize,
    /// Character repeated for indentation.
    pub indent_char: char,
    /// String inserted for line breaks.
    pub line_break: String,
    /// Only include properties that report a public setter.
    pub set_properties_only: bool,
    /// Recursion ceiling on composite nesting depth.
    pub max_level: usize,
    /// Member names that are always skipped.
    pub exclude_properties: HashSet<String>,
    /// Key selector controlling member emission order.
    pub property_order_by: Option<MemberOrder>,
    /// Skip members currently holding their type's zero value.
    pub ignore_default_values: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            style: DumpStyle::Console,
            indent_size: 2,
            indent_char: ' ',
            line_break: "\n".to_string(),
            set_properties_only: false,
            max_level: usize::MAX,
            exclude_properties: HashSet::new(),
            property_order_by: None,
            ignore_default_values: false,
        }
    }
}

impl DumpOptions {
    /// Fail-fast validation, run once at call entry.
    pub(crate) fn validate(&self) -> Result<(), DumpError> {
        if self.line_break.is_empty() {
            return Err(DumpError::InvalidOptions(
                "line break string must not be empty",
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for DumpOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DumpOptions")
            .field("style", &self.style)
            .field("indent_size", &self.indent_size)
            .field("indent_char", &self.indent_char)
            .field("line_break", &self.line_break)
            .field("set_properties_only", &self.set_properties_only)
            .field("max_level", &self.max_level)
            .field("exclude_properties", &self.exclude_properties)
            .field(
                "property_order_by",
                &self.property_order_by.as_ref().map(|_| "<selector>"),
            )
            .field("ignore_default_values", &self.ignore_default_values)
            .finish()
    }
}
