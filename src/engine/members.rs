use crate::options::DumpOptions;
use crate::reflect::{Member, Reflect};

/// Enumerates and filters the members of an object-shaped value according to
/// the session options.
///
/// Fields come first, then properties; each group keeps declaration order
/// unless an ordering key is configured, in which case each group is
/// stable-sorted by the extracted key. The caller flags the final element of
/// the combined list as "last" for separator suppression.
pub(crate) fn collect_members<'v>(
    value: &'v dyn Reflect,
    options: &DumpOptions,
) -> (Vec<Member<'v>>, Vec<Member<'v>>) {
    let mut fields = value.fields();
    let mut properties = value.properties();

    if options.set_properties_only {
        properties.retain(|member| member.writable);
    }

    if !options.exclude_properties.is_empty() {
        fields.retain(|member| !options.exclude_properties.contains(&*member.name));
        properties.retain(|member| !options.exclude_properties.contains(&*member.name));
    }

    if options.ignore_default_values {
        fields.retain(|member| !member.value.is_default());
        properties.retain(|member| !member.value.is_default());
    }

    if let Some(order) = &options.property_order_by {
        fields.sort_by(|a, b| order(a).cmp(&order(b)));
        properties.sort_by(|a, b| order(a).cmp(&order(b)));
    }

    (fields, properties)
}
