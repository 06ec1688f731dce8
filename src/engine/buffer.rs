use crate::options::DumpOptions;

/// Accumulates output text and tracks indentation and start-of-line state.
///
/// Any written text either starts a new indented line or continues the
/// current one; the state is derived from whether the previous write ended
/// with the configured line-break string.
pub(crate) struct OutputBuffer {
    text: String,
    indent_size: usize,
    indent_char: char,
    line_break: String,
    indent_level: usize,
    at_line_start: bool,
}

impl OutputBuffer {
    pub fn new(options: &DumpOptions) -> Self {
        Self {
            text: String::new(),
            indent_size: options.indent_size,
            indent_char: options.indent_char,
            line_break: options.line_break.clone(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Writes `value`, prefixed with the current indentation when at the
    /// start of a line.
    pub fn write(&mut self, value: &str) {
        let indent_level = if self.at_line_start {
            self.indent_level
        } else {
            0
        };
        self.write_raw(value, indent_level);
    }

    /// Writes `value` with a caller-supplied indent count instead of the
    /// tracked level.
    pub fn write_raw(&mut self, value: &str, indent_level: usize) {
        self.text.extend(
            std::iter::repeat(self.indent_char).take(indent_level * self.indent_size),
        );
        self.text.push_str(value);
        self.at_line_start = value.ends_with(&self.line_break);
    }

    /// Appends a line break unless already at the start of a line. With
    /// `force`, a break is emitted even at the start of a line unless the
    /// output already ends with a blank line, so forced breaks produce at
    /// most one blank separator line.
    pub fn line_break(&mut self, force: bool) {
        if !self.at_line_start {
            self.text.push_str(&self.line_break);
            self.at_line_start = true;
        } else if force && !self.ends_with_blank_line() {
            self.text.push_str(&self.line_break);
        }
    }

    fn ends_with_blank_line(&self) -> bool {
        self.text.ends_with(&self.line_break.repeat(2))
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Current full text; side-effect free.
    pub fn snapshot(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
