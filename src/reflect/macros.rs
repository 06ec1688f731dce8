//! Declarative per-type descriptor registration for user types that do not
//! want to implement [`Reflect`](crate::Reflect) by hand.

/// Implements `Reflect` for a plain struct by listing its dumped members.
///
/// Three optional groups are accepted, in order: `fields`, `properties`
/// (read-write) and `getters` (properties without a setter). Each entry maps
/// a display name to the struct field holding the value:
///
/// ```
/// use odump::reflect_object;
///
/// struct Person {
///     name: String,
///     age: i32,
/// }
///
/// reflect_object! {
///     Person {
///         properties {
///             Name => name,
///             Age => age,
///         }
///     }
/// }
/// ```
#[macro_export]
macro_rules! reflect_object {
    (
        $ty:ident {
            $(fields { $($field_name:ident => $field:ident),* $(,)? })?
            $(properties { $($property_name:ident => $property:ident),* $(,)? })?
            $(getters { $($getter_name:ident => $getter:ident),* $(,)? })?
        }
    ) => {
        impl $crate::Reflect for $ty {
            fn type_name(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(stringify!($ty))
            }

            fn shape(&self) -> $crate::Shape<'_> {
                $crate::Shape::Object
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::Member<'_>> {
                ::std::vec![
                    $($($crate::Member::field(stringify!($field_name), &self.$field),)*)?
                ]
            }

            fn properties(&self) -> ::std::vec::Vec<$crate::Member<'_>> {
                ::std::vec![
                    $($($crate::Member::property(stringify!($property_name), &self.$property),)*)?
                    $($($crate::Member::getter(stringify!($getter_name), &self.$getter),)*)?
                ]
            }
        }
    };
}

/// Implements `Reflect` for a unit enum. The first listed variant is treated
/// as the type's zero value for `ignore_default_values` purposes.
///
/// ```
/// use odump::reflect_enum;
///
/// enum Color {
///     Red,
///     Green,
///     Blue,
/// }
///
/// reflect_enum!(Color { Red, Green, Blue });
/// ```
#[macro_export]
macro_rules! reflect_enum {
    ($ty:ident { $first:ident $(, $rest:ident)* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn type_name(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(stringify!($ty))
            }

            fn shape(&self) -> $crate::Shape<'_> {
                let variant = match self {
                    $ty::$first => stringify!($first),
                    $($ty::$rest => stringify!($rest),)*
                };
                $crate::Shape::Scalar($crate::Scalar::Enumerant {
                    type_name: ::std::borrow::Cow::Borrowed(stringify!($ty)),
                    variant: ::std::borrow::Cow::Borrowed(variant),
                })
            }

            fn is_default(&self) -> bool {
                matches!(self, $ty::$first)
            }
        }
    };
}
