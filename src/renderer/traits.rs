use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::engine::Session;
use crate::reflect::{Member, MemberKind, Reflect};

/// Rendering hook contract.
///
/// The traversal engine calls one hook per structural event; every hook has
/// a plain-text default, so a renderer implements only the subset it
/// customizes. This is how the console, source and HTML styles specialize
/// one traversal algorithm without forking it.
pub trait Renderer {
    /// Written once before the root value is dispatched.
    fn prologue(&self, _out: &mut Session, _root: &dyn Reflect) {}

    /// Written once after the root value has been dispatched.
    fn epilogue(&self, _out: &mut Session, _root: &dyn Reflect) {}

    fn object_start(&self, out: &mut Session, _value: &dyn Reflect) {
        out.write("{");
    }

    fn object_end(&self, out: &mut Session, _value: &dyn Reflect) {
        out.write("}");
    }

    /// Brackets the field group and the property group of an object. Invoked
    /// even when the group is empty; renderers decide whether to emit
    /// anything.
    fn group_begin(&self, _out: &mut Session, _kind: MemberKind) {}

    fn group_end(&self, _out: &mut Session, _kind: MemberKind) {}

    fn member_begin(&self, _out: &mut Session, _member: &Member<'_>) {}

    /// `last` is true for the final member of the object, across both
    /// groups, for separator suppression.
    fn member_end(&self, _out: &mut Session, _member: &Member<'_>, _last: bool) {}

    fn sequence_begin(&self, out: &mut Session, _value: &dyn Reflect) {
        out.write("[");
    }

    /// Emitted after every element; `last` is true exactly once, after the
    /// final element.
    fn sequence_separator(&self, out: &mut Session, last: bool) {
        if !last {
            out.write(",");
        }
    }

    fn sequence_end(&self, out: &mut Session, _value: &dyn Reflect) {
        out.write("]");
    }

    fn pair_begin(&self, out: &mut Session) {
        out.write("{");
    }

    fn pair_separator(&self, out: &mut Session) {
        out.write(",");
    }

    fn pair_end(&self, out: &mut Session) {
        out.write("}");
    }

    /// In-band marker emitted where descent stopped at the configured depth
    /// ceiling.
    fn max_level_marker(&self, out: &mut Session) {
        out.write("...");
    }

    /// In-band marker emitted where the value is already an ancestor of
    /// itself on the current path.
    fn circular_marker(&self, out: &mut Session, _value: &dyn Reflect) {
        out.write("<circular reference>");
    }

    fn write_null(&self, out: &mut Session) {
        out.write("null");
    }

    fn write_bool(&self, out: &mut Session, value: bool) {
        out.write(if value { "true" } else { "false" });
    }

    fn write_str(&self, out: &mut Session, value: &str) {
        out.write(value);
    }

    fn write_char(&self, out: &mut Session, value: char) {
        out.write(&value.to_string());
    }

    fn write_i8(&self, out: &mut Session, value: i8) {
        out.write(&value.to_string());
    }

    fn write_i16(&self, out: &mut Session, value: i16) {
        out.write(&value.to_string());
    }

    fn write_i32(&self, out: &mut Session, value: i32) {
        out.write(&value.to_string());
    }

    fn write_i64(&self, out: &mut Session, value: i64) {
        out.write(&value.to_string());
    }

    fn write_u8(&self, out: &mut Session, value: u8) {
        out.write(&value.to_string());
    }

    fn write_u16(&self, out: &mut Session, value: u16) {
        out.write(&value.to_string());
    }

    fn write_u32(&self, out: &mut Session, value: u32) {
        out.write(&value.to_string());
    }

    fn write_u64(&self, out: &mut Session, value: u64) {
        out.write(&value.to_string());
    }

    fn write_f32(&self, out: &mut Session, value: f32) {
        out.write(&value.to_string());
    }

    fn write_f64(&self, out: &mut Session, value: f64) {
        out.write(&value.to_string());
    }

    fn write_decimal(&self, out: &mut Session, value: Decimal) {
        out.write(&value.to_string());
    }

    fn write_timestamp(&self, out: &mut Session, value: DateTime<Utc>) {
        out.write(&value.to_rfc3339());
    }

    fn write_uuid(&self, out: &mut Session, value: Uuid) {
        out.write(&value.to_string());
    }

    fn write_enumerant(&self, out: &mut Session, _type_name: &str, variant: &str) {
        out.write(variant);
    }
}

/// Renders with the contract's plain-text defaults, customizing nothing.
pub struct PlainRenderer;

impl Renderer for PlainRenderer {}
