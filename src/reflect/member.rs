use std::borrow::Cow;

use crate::reflect::Reflect;

/// Whether a member is a field or a property. Fields are enumerated and
/// rendered as a distinct group before properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Property,
}

/// Descriptor for one member of an object-shaped value.
pub struct Member<'a> {
    /// Display name used by renderers.
    pub name: Cow<'static, str>,
    /// Display name of the member's declared type.
    pub type_name: Cow<'static, str>,
    pub kind: MemberKind,
    /// Models "has a public setter"; consulted by the `set_properties_only`
    /// filter. Fields are always writable.
    pub writable: bool,
    /// The member's value at enumeration time.
    pub value: &'a dyn Reflect,
}

impl<'a> Member<'a> {
    /// Describes a field.
    pub fn field<T: Reflect>(name: impl Into<Cow<'static, str>>, value: &'a T) -> Self {
        Self {
            name: name.into(),
            type_name: value.type_name(),
            kind: MemberKind::Field,
            writable: true,
            value,
        }
    }

    /// Describes a read-write property.
    pub fn property<T: Reflect>(name: impl Into<Cow<'static, str>>, value: &'a T) -> Self {
        Self {
            name: name.into(),
            type_name: value.type_name(),
            kind: MemberKind::Property,
            writable: true,
            value,
        }
    }

    /// Describes a read-only property (no public setter).
    pub fn getter<T: Reflect>(name: impl Into<Cow<'static, str>>, value: &'a T) -> Self {
        Self {
            name: name.into(),
            type_name: value.type_name(),
            kind: MemberKind::Property,
            writable: false,
            value,
        }
    }
}
