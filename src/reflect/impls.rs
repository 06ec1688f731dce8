//! [`Reflect`] implementations for the standard scalar and collection types.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::reflect::{short_type_name, Element, Reflect, Scalar, Shape};

macro_rules! scalar_reflect {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl Reflect for $ty {
            fn type_name(&self) -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            fn shape(&self) -> Shape<'_> {
                Shape::Scalar(Scalar::$variant(*self))
            }

            fn is_default(&self) -> bool {
                *self == <$ty>::default()
            }
        }
    )*};
}

scalar_reflect! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

// Pointer-width integers map onto the 64-bit scalar kinds.

impl Reflect for usize {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("usize")
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::U64(*self as u64))
    }

    fn is_default(&self) -> bool {
        *self == 0
    }
}

impl Reflect for isize {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("isize")
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::I64(*self as i64))
    }

    fn is_default(&self) -> bool {
        *self == 0
    }
}

impl Reflect for str {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("str")
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self))
    }

    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl Reflect for &str {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("str")
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(*self))
    }

    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl Reflect for String {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("String")
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Str(self.as_str()))
    }

    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl Reflect for Decimal {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Decimal")
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Decimal(*self))
    }

    fn is_default(&self) -> bool {
        *self == Decimal::ZERO
    }
}

impl Reflect for DateTime<Utc> {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("DateTime")
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Timestamp(*self))
    }

    fn is_default(&self) -> bool {
        *self == DateTime::<Utc>::MIN_UTC
    }
}

impl Reflect for Uuid {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Uuid")
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Scalar::Uuid(*self))
    }

    fn is_default(&self) -> bool {
        self.is_nil()
    }
}

// Wrappers classify as the value they point at, so identity-based cycle
// detection always sees the shared target, not the pointer slot.

impl<T: Reflect> Reflect for &T {
    fn type_name(&self) -> Cow<'static, str> {
        (**self).type_name()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Transparent(*self)
    }

    fn is_default(&self) -> bool {
        (**self).is_default()
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn type_name(&self) -> Cow<'static, str> {
        (**self).type_name()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Transparent(&**self)
    }

    fn is_default(&self) -> bool {
        (**self).is_default()
    }
}

impl<T: Reflect> Reflect for Rc<T> {
    fn type_name(&self) -> Cow<'static, str> {
        (**self).type_name()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Transparent(&**self)
    }

    fn is_default(&self) -> bool {
        (**self).is_default()
    }
}

impl<T: Reflect> Reflect for Arc<T> {
    fn type_name(&self) -> Cow<'static, str> {
        (**self).type_name()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Transparent(&**self)
    }

    fn is_default(&self) -> bool {
        (**self).is_default()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => Shape::Transparent(value),
            None => Shape::Scalar(Scalar::Null),
        }
    }

    fn is_default(&self) -> bool {
        self.is_none()
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Box::new(
            self.iter().map(|item| Element::Value(item as &dyn Reflect)),
        ))
    }

    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Reflect> Reflect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Box::new(
            self.iter().map(|item| Element::Value(item as &dyn Reflect)),
        ))
    }

    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        self[..].shape()
    }
}

impl<K: Reflect, V: Reflect> Reflect for (K, V) {
    fn shape(&self) -> Shape<'_> {
        Shape::Pair {
            key: &self.0,
            value: &self.1,
        }
    }
}

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Owned(format!(
            "HashMap<{}, {}>",
            short_type_name(std::any::type_name::<K>()),
            short_type_name(std::any::type_name::<V>())
        ))
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Box::new(
            self.iter().map(|(key, value)| Element::Pair { key, value }),
        ))
    }

    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Box::new(
            self.iter().map(|(key, value)| Element::Pair { key, value }),
        ))
    }

    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Reflect, S> Reflect for HashSet<T, S> {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Owned(format!(
            "HashSet<{}>",
            short_type_name(std::any::type_name::<T>())
        ))
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Box::new(
            self.iter().map(|item| Element::Value(item as &dyn Reflect)),
        ))
    }

    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Reflect> Reflect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(Box::new(
            self.iter().map(|item| Element::Value(item as &dyn Reflect)),
        ))
    }

    fn is_default(&self) -> bool {
        self.is_empty()
    }
}
