//! The reflection capability consumed by the traversal engine.
//!
//! The engine stays agnostic to how a value describes itself: anything that
//! implements [`Reflect`] can be dumped. Implementations ship for the scalar
//! and collection types of the standard library (plus `chrono`, `uuid` and
//! `rust_decimal`), for `serde_json::Value`, and user types can either
//! implement the trait by hand or use the [`reflect_object!`] /
//! [`reflect_enum!`] macros.
//!
//! [`reflect_object!`]: crate::reflect_object
//! [`reflect_enum!`]: crate::reflect_enum

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

mod impls;
mod json;
mod macros;
mod member;

pub use member::{Member, MemberKind};

/// Capability to describe a runtime value to the traversal engine.
pub trait Reflect {
    /// Display name of the value's type, with module paths stripped.
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Owned(short_type_name(std::any::type_name::<Self>()))
    }

    /// Classifies the value for dispatch.
    fn shape(&self) -> Shape<'_>;

    /// Publicly visible fields, in declaration order.
    fn fields(&self) -> Vec<Member<'_>> {
        Vec::new()
    }

    /// Publicly visible properties, in declaration order.
    fn properties(&self) -> Vec<Member<'_>> {
        Vec::new()
    }

    /// Whether the value currently equals its type's zero value.
    fn is_default(&self) -> bool {
        false
    }
}

/// Structural classification of a value.
pub enum Shape<'a> {
    /// Rendered atomically by a single renderer hook.
    Scalar(Scalar<'a>),
    /// Linear iteration over elements or key/value pairs.
    Sequence(Elements<'a>),
    /// Exactly a key/value pair.
    Pair {
        key: &'a dyn Reflect,
        value: &'a dyn Reflect,
    },
    /// A wrapper that classifies as the value it points at.
    Transparent(&'a dyn Reflect),
    /// Generic object; members come from `fields()` and `properties()`.
    Object,
}

/// Iterator over the elements of a sequence-shaped value.
pub type Elements<'a> = Box<dyn Iterator<Item = Element<'a>> + 'a>;

/// One element of a sequence: a plain value, or a key/value pair (how maps
/// present their entries).
pub enum Element<'a> {
    Value(&'a dyn Reflect),
    Pair {
        key: &'a dyn Reflect,
        value: &'a dyn Reflect,
    },
}

/// The closed set of atomically rendered value kinds.
#[derive(Clone, Debug)]
pub enum Scalar<'a> {
    Null,
    Bool(bool),
    Str(&'a str),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    Enumerant {
        type_name: Cow<'static, str>,
        variant: Cow<'static, str>,
    },
}

/// Strips module paths from a fully qualified type name, including inside
/// generic arguments: `alloc::vec::Vec<alloc::string::String>` becomes
/// `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            push_last_segment(&mut short, &segment);
            segment.clear();
            short.push(c);
        }
    }
    push_last_segment(&mut short, &segment);
    short
}

fn push_last_segment(out: &mut String, segment: &str) {
    out.push_str(segment.rsplit("::").next().unwrap_or(segment));
}
