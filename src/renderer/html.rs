//! HTML markup style: nested `div`s per object and member, `span`s per
//! scalar, all carrying sanitized `obj-` CSS classes so a stylesheet can
//! theme the dump.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::engine::Session;
use crate::reflect::{Member, Reflect};
use crate::renderer::traits::Renderer;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn prologue(&self, out: &mut Session, root: &dyn Reflect) {
        let type_name = root.type_name();
        out.write(&format!(
            "<div class={}>",
            css_class(&["dump", &format!("type-{}", type_name)])
        ));
        out.write(&format!("<div class={}>", css_class(&["type-info"])));
        out.write(&format!(
            "<span class={}>Dumped Type:</span> ",
            css_class(&["label"])
        ));
        out.write(&format!(
            "<span class={}>{}</span>",
            css_class(&["type"]),
            html_escape(&type_name)
        ));
        out.write("</div>");
    }

    fn epilogue(&self, out: &mut Session, _root: &dyn Reflect) {
        out.write("</div>");
    }

    fn object_start(&self, out: &mut Session, value: &dyn Reflect) {
        out.write(&format!(
            "<div class={}>",
            css_class(&[&format!("type-{}", value.type_name())])
        ));
    }

    fn object_end(&self, out: &mut Session, _value: &dyn Reflect) {
        out.write("</div>");
    }

    fn member_begin(&self, out: &mut Session, member: &Member<'_>) {
        out.write(&format!(
            "<div class={}><span class={}>{}</span> ",
            css_class(&[&format!("type-{}", member.type_name), &member.name]),
            css_class(&["label"]),
            html_escape(&member.name)
        ));
    }

    fn member_end(&self, out: &mut Session, _member: &Member<'_>, _last: bool) {
        out.write("</div>");
    }

    fn max_level_marker(&self, out: &mut Session) {
        out.write(&format!(
            "<span class={}>...</span>",
            css_class(&["value", "max-level"])
        ));
    }

    fn circular_marker(&self, out: &mut Session, _value: &dyn Reflect) {
        out.write(&format!(
            "<span class={}>circular reference</span>",
            css_class(&["value", "circular"])
        ));
    }

    fn write_null(&self, out: &mut Session) {
        out.write(&format!(
            "<span class={}>null</span>",
            css_class(&["value", "null"])
        ));
    }

    fn write_bool(&self, out: &mut Session, value: bool) {
        value_span(out, if value { "true" } else { "false" });
    }

    fn write_str(&self, out: &mut Session, value: &str) {
        value_span(out, &html_escape(value));
    }

    fn write_char(&self, out: &mut Session, value: char) {
        value_span(out, &html_escape(&value.to_string()));
    }

    fn write_i8(&self, out: &mut Session, value: i8) {
        value_span(out, &value.to_string());
    }

    fn write_i16(&self, out: &mut Session, value: i16) {
        value_span(out, &value.to_string());
    }

    fn write_i32(&self, out: &mut Session, value: i32) {
        value_span(out, &value.to_string());
    }

    fn write_i64(&self, out: &mut Session, value: i64) {
        value_span(out, &value.to_string());
    }

    fn write_u8(&self, out: &mut Session, value: u8) {
        value_span(out, &value.to_string());
    }

    fn write_u16(&self, out: &mut Session, value: u16) {
        value_span(out, &value.to_string());
    }

    fn write_u32(&self, out: &mut Session, value: u32) {
        value_span(out, &value.to_string());
    }

    fn write_u64(&self, out: &mut Session, value: u64) {
        value_span(out, &value.to_string());
    }

    fn write_f32(&self, out: &mut Session, value: f32) {
        value_span(out, &value.to_string());
    }

    fn write_f64(&self, out: &mut Session, value: f64) {
        value_span(out, &value.to_string());
    }

    fn write_decimal(&self, out: &mut Session, value: Decimal) {
        value_span(out, &value.to_string());
    }

    fn write_timestamp(&self, out: &mut Session, value: DateTime<Utc>) {
        value_span(out, &value.to_rfc3339());
    }

    fn write_uuid(&self, out: &mut Session, value: Uuid) {
        value_span(out, &value.to_string());
    }

    fn write_enumerant(&self, out: &mut Session, _type_name: &str, variant: &str) {
        value_span(out, &html_escape(variant));
    }
}

fn value_span(out: &mut Session, text: &str) {
    out.write(&format!(
        "<span class={}>{}</span>",
        css_class(&["value"]),
        text
    ));
}

/// Builds a quoted class attribute value: each class gets an `obj-` prefix,
/// `<` maps to `-`, and everything outside `[A-Za-z0-9_-]` is dropped.
fn css_class(classes: &[&str]) -> String {
    let mut result = String::from("\"");
    for (i, class) in classes.iter().enumerate() {
        result.push_str("obj-");
        for c in class.replace('<', "-").chars() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                result.push(c);
            }
        }
        if i < classes.len() - 1 {
            result.push(' ');
        }
    }
    result.push('"');
    result
}

fn html_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
