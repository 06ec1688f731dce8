//! Human-readable console style: a `{TypeName}` header per object, one
//! `Name: value` line per member, nested structures indented.

use crate::engine::Session;
use crate::reflect::{Member, Reflect};
use crate::renderer::traits::Renderer;

pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn object_start(&self, out: &mut Session, value: &dyn Reflect) {
        // A blank separator line between the 2nd-and-later objects of a
        // sequence; the forced break caps it at one.
        if out.enumerable_index() > 1 {
            out.line_break(true);
        }
        if !out.in_enumerable() && out.level() > 1 {
            out.write("{ }");
            out.line_break(false);
            out.indent();
        }
        out.write(&format!("{{{}}}", value.type_name()));
        out.line_break(false);
        out.indent();
    }

    fn object_end(&self, out: &mut Session, _value: &dyn Reflect) {
        out.dedent();
        if !out.in_enumerable() && out.level() > 1 {
            out.dedent();
        }
    }

    fn member_begin(&self, out: &mut Session, member: &Member<'_>) {
        out.write(&format!("{}: ", member.name));
    }

    fn member_end(&self, out: &mut Session, _member: &Member<'_>, _last: bool) {
        out.line_break(false);
    }

    fn sequence_begin(&self, out: &mut Session, _value: &dyn Reflect) {
        if out.level() > 1 {
            out.write("...");
            out.indent();
            out.line_break(false);
        }
    }

    fn sequence_separator(&self, out: &mut Session, last: bool) {
        if !last {
            out.line_break(false);
        }
    }

    fn sequence_end(&self, out: &mut Session, _value: &dyn Reflect) {
        if out.level() > 1 {
            out.dedent();
        }
        out.line_break(false);
    }

    fn pair_begin(&self, out: &mut Session) {
        out.write("[");
    }

    fn pair_separator(&self, out: &mut Session) {
        out.write(", ");
    }

    fn pair_end(&self, out: &mut Session) {
        out.write("]");
    }

    fn max_level_marker(&self, _out: &mut Session) {}

    fn circular_marker(&self, out: &mut Session, _value: &dyn Reflect) {
        out.write("<-- bidirectional reference found");
    }

    fn write_str(&self, out: &mut Session, value: &str) {
        out.write(&format!("\"{}\"", value));
    }
}
