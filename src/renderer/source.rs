//! Source-code style: the dump is a compilable variable declaration in
//! object-initializer syntax, `var name = new TypeName { ... };`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::engine::Session;
use crate::reflect::{Member, Reflect, Scalar, Shape};
use crate::renderer::traits::Renderer;

pub struct SourceRenderer;

impl Renderer for SourceRenderer {
    fn prologue(&self, out: &mut Session, root: &dyn Reflect) {
        out.write(&format!("var {} = ", variable_name(root)));
    }

    fn epilogue(&self, out: &mut Session, _root: &dyn Reflect) {
        out.write(";");
    }

    fn object_start(&self, out: &mut Session, value: &dyn Reflect) {
        out.write(&format!("new {}", value.type_name()));
        out.line_break(false);
        out.write("{");
        out.line_break(false);
        out.indent();
    }

    fn object_end(&self, out: &mut Session, _value: &dyn Reflect) {
        out.dedent();
        out.write("}");
    }

    fn member_begin(&self, out: &mut Session, member: &Member<'_>) {
        out.write(&format!("{} = ", member.name));
    }

    fn member_end(&self, out: &mut Session, _member: &Member<'_>, last: bool) {
        if !last {
            out.write(",");
        }
        out.line_break(false);
    }

    fn sequence_begin(&self, out: &mut Session, value: &dyn Reflect) {
        out.write(&format!("new {}", value.type_name()));
        out.line_break(false);
        out.write("{");
        out.line_break(false);
        out.indent();
    }

    fn sequence_separator(&self, out: &mut Session, last: bool) {
        if !last {
            out.write(",");
        }
        out.line_break(false);
    }

    fn sequence_end(&self, out: &mut Session, _value: &dyn Reflect) {
        out.dedent();
        out.write("}");
    }

    fn pair_begin(&self, out: &mut Session) {
        out.write("{ ");
    }

    fn pair_separator(&self, out: &mut Session) {
        out.write(", ");
    }

    fn pair_end(&self, out: &mut Session) {
        out.write(" }");
    }

    // A truncated composite closes as an empty initializer, which keeps the
    // output compilable.
    fn max_level_marker(&self, _out: &mut Session) {}

    fn circular_marker(&self, out: &mut Session, _value: &dyn Reflect) {
        out.write("/* circular reference */");
        out.line_break(false);
    }

    fn write_str(&self, out: &mut Session, value: &str) {
        out.write(&format!("\"{}\"", escape(value)));
    }

    fn write_char(&self, out: &mut Session, value: char) {
        out.write(&format!("'{}'", escape(&value.to_string())));
    }

    fn write_i64(&self, out: &mut Session, value: i64) {
        out.write(&format!("{}L", value));
    }

    fn write_u64(&self, out: &mut Session, value: u64) {
        out.write(&format!("{}L", value));
    }

    fn write_f32(&self, out: &mut Session, value: f32) {
        out.write(&format!("{}f", value));
    }

    fn write_f64(&self, out: &mut Session, value: f64) {
        out.write(&format!("{}d", value));
    }

    fn write_decimal(&self, out: &mut Session, value: Decimal) {
        out.write(&format!("{}m", value));
    }

    fn write_timestamp(&self, out: &mut Session, value: DateTime<Utc>) {
        if value == DateTime::<Utc>::MIN_UTC {
            out.write("DateTime.MinValue");
        } else if value == DateTime::<Utc>::MAX_UTC {
            out.write("DateTime.MaxValue");
        } else {
            out.write(&format!(
                "DateTime.ParseExact(\"{}\", \"O\", CultureInfo.InvariantCulture, DateTimeStyles.RoundtripKind)",
                value.to_rfc3339()
            ));
        }
    }

    fn write_uuid(&self, out: &mut Session, value: Uuid) {
        out.write(&format!("new Guid(\"{}\")", value));
    }

    fn write_enumerant(&self, out: &mut Session, type_name: &str, variant: &str) {
        out.write(&format!("{}.{}", type_name, variant));
    }
}

/// Variable name for the declaration: the type name with generic punctuation
/// flattened and the first letter lowercased; a null root falls back to `x`.
fn variable_name(root: &dyn Reflect) -> String {
    if matches!(root.shape(), Shape::Scalar(Scalar::Null)) {
        return "x".to_string();
    }
    let type_name = root.type_name();
    let flattened: String = type_name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    lower_first(&flattened)
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => "x".to_string(),
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            _ => escaped.push(c),
        }
    }
    escaped
}
