//! Adapter exposing a parsed JSON document to the traversal engine. This is
//! what the CLI dumps: objects become generic objects whose properties are
//! the entries, arrays become sequences.

use std::borrow::Cow;

use serde_json::Value;

use crate::reflect::{Element, Member, MemberKind, Reflect, Scalar, Shape};

impl Reflect for Value {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        })
    }

    fn shape(&self) -> Shape<'_> {
        match self {
            Value::Null => Shape::Scalar(Scalar::Null),
            Value::Bool(value) => Shape::Scalar(Scalar::Bool(*value)),
            Value::Number(number) => Shape::Scalar(if let Some(value) = number.as_i64() {
                Scalar::I64(value)
            } else if let Some(value) = number.as_u64() {
                Scalar::U64(value)
            } else {
                Scalar::F64(number.as_f64().unwrap_or(f64::NAN))
            }),
            Value::String(value) => Shape::Scalar(Scalar::Str(value)),
            Value::Array(items) => Shape::Sequence(Box::new(
                items.iter().map(|item| Element::Value(item as &dyn Reflect)),
            )),
            Value::Object(_) => Shape::Object,
        }
    }

    fn properties(&self) -> Vec<Member<'_>> {
        match self {
            Value::Object(entries) => entries
                .iter()
                .map(|(name, value)| Member {
                    name: Cow::Owned(name.clone()),
                    type_name: value.type_name(),
                    kind: MemberKind::Property,
                    writable: true,
                    value,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn is_default(&self) -> bool {
        self.is_null()
    }
}
