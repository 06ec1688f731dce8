use crate::engine::buffer::OutputBuffer;
use crate::options::DumpOptions;

/// Mutable per-dump state handed to every renderer hook: the output buffer
/// plus the traversal counters renderers key their layout decisions on.
pub struct Session {
    buffer: OutputBuffer,
    level: usize,
    enumerable_level: usize,
    enumerable_index: usize,
}

impl Session {
    pub(crate) fn new(options: &DumpOptions) -> Self {
        Self {
            buffer: OutputBuffer::new(options),
            level: 0,
            enumerable_level: 0,
            enumerable_index: 0,
        }
    }

    /// Writes text, indented when at the start of a line.
    pub fn write(&mut self, value: &str) {
        self.buffer.write(value);
    }

    /// Writes text with an explicit indent count.
    pub fn write_raw(&mut self, value: &str, indent_level: usize) {
        self.buffer.write_raw(value, indent_level);
    }

    /// Appends a line break unless already at the start of a line. With
    /// `force`, a break is emitted even there, capped so the output never
    /// accumulates more than one blank separator line.
    pub fn line_break(&mut self, force: bool) {
        self.buffer.line_break(force);
    }

    pub fn indent(&mut self) {
        self.buffer.indent();
    }

    pub fn dedent(&mut self) {
        self.buffer.dedent();
    }

    /// Current full output text.
    pub fn snapshot(&self) -> &str {
        self.buffer.snapshot()
    }

    /// Nesting depth of the composite value currently being rendered; the
    /// root composite is level 1.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Nesting depth of sequences currently being iterated.
    pub fn enumerable_level(&self) -> usize {
        self.enumerable_level
    }

    /// 1-based index of the sequence element currently being rendered; zero
    /// outside of sequence iteration.
    pub fn enumerable_index(&self) -> usize {
        self.enumerable_index
    }

    pub fn in_enumerable(&self) -> bool {
        self.enumerable_level > 0
    }

    pub(crate) fn enter_composite(&mut self) {
        self.level += 1;
    }

    pub(crate) fn exit_composite(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub(crate) fn enter_sequence(&mut self) {
        self.enumerable_level += 1;
        self.enumerable_index = 0;
    }

    pub(crate) fn exit_sequence(&mut self) {
        self.enumerable_level = self.enumerable_level.saturating_sub(1);
        self.enumerable_index = 0;
    }

    pub(crate) fn bump_index(&mut self) {
        self.enumerable_index += 1;
    }

    pub(crate) fn finish(self) -> String {
        self.buffer.into_string()
    }
}
