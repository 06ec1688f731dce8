use tracing::{debug, trace};

use crate::engine::members::collect_members;
use crate::engine::session::Session;
use crate::engine::tracker::{IdentityKey, PathTracker};
use crate::options::DumpOptions;
use crate::reflect::{Element, Elements, Member, MemberKind, Reflect, Scalar, Shape};
use crate::renderer::Renderer;

/// One traversal over a value graph: classifies values, recurses into
/// members and elements, and drives the renderer hooks.
///
/// The composite level is incremented before a composite's begin hook and
/// decremented after its end hook, so both hooks observe the depth of the
/// value they bracket; the max-level comparison runs on the incremented
/// level, which makes the root composite level 1.
pub(crate) struct Walker<'a> {
    session: Session,
    renderer: &'a dyn Renderer,
    options: &'a DumpOptions,
    path: PathTracker,
}

impl<'a> Walker<'a> {
    pub fn new(renderer: &'a dyn Renderer, options: &'a DumpOptions) -> Self {
        Self {
            session: Session::new(options),
            renderer,
            options,
            path: PathTracker::default(),
        }
    }

    pub fn run(mut self, value: &dyn Reflect) -> String {
        let renderer = self.renderer;
        renderer.prologue(&mut self.session, value);
        self.dispatch(value);
        renderer.epilogue(&mut self.session, value);
        self.session.finish()
    }

    fn dispatch(&mut self, value: &dyn Reflect) {
        match value.shape() {
            Shape::Scalar(scalar) => self.write_scalar(scalar),
            Shape::Sequence(elements) => self.dump_sequence(value, elements),
            Shape::Pair { key, value: paired } => self.dump_pair(key, paired),
            Shape::Transparent(inner) => self.dispatch(inner),
            Shape::Object => self.dump_object(value),
        }
    }

    fn write_scalar(&mut self, scalar: Scalar<'_>) {
        let renderer = self.renderer;
        let out = &mut self.session;
        match scalar {
            Scalar::Null => renderer.write_null(out),
            Scalar::Bool(value) => renderer.write_bool(out, value),
            Scalar::Str(value) => renderer.write_str(out, value),
            Scalar::Char(value) => renderer.write_char(out, value),
            Scalar::I8(value) => renderer.write_i8(out, value),
            Scalar::I16(value) => renderer.write_i16(out, value),
            Scalar::I32(value) => renderer.write_i32(out, value),
            Scalar::I64(value) => renderer.write_i64(out, value),
            Scalar::U8(value) => renderer.write_u8(out, value),
            Scalar::U16(value) => renderer.write_u16(out, value),
            Scalar::U32(value) => renderer.write_u32(out, value),
            Scalar::U64(value) => renderer.write_u64(out, value),
            Scalar::F32(value) => renderer.write_f32(out, value),
            Scalar::F64(value) => renderer.write_f64(out, value),
            Scalar::Decimal(value) => renderer.write_decimal(out, value),
            Scalar::Timestamp(value) => renderer.write_timestamp(out, value),
            Scalar::Uuid(value) => renderer.write_uuid(out, value),
            Scalar::Enumerant { type_name, variant } => {
                renderer.write_enumerant(out, &type_name, &variant)
            }
        }
    }

    fn dump_object(&mut self, value: &dyn Reflect) {
        let renderer = self.renderer;
        self.session.enter_composite();
        renderer.object_start(&mut self.session, value);

        if self.session.level() > self.options.max_level {
            trace!(type_name = %value.type_name(), "max level reached, truncating object");
            renderer.max_level_marker(&mut self.session);
        } else {
            let key = IdentityKey::of(value);
            if self.path.on_path(&key) {
                debug!(type_name = %value.type_name(), "circular reference detected");
                renderer.circular_marker(&mut self.session, value);
            } else {
                self.path.push(key);
                let scope = PathScope { walker: &mut *self };
                scope.walker.dump_members(value);
            }
        }

        renderer.object_end(&mut self.session, value);
        self.session.exit_composite();
    }

    fn dump_members(&mut self, value: &dyn Reflect) {
        let renderer = self.renderer;
        let (fields, properties) = collect_members(value, self.options);
        let total = fields.len() + properties.len();
        let mut position = 0;

        renderer.group_begin(&mut self.session, MemberKind::Field);
        for member in &fields {
            position += 1;
            self.dump_member(member, position == total);
        }
        renderer.group_end(&mut self.session, MemberKind::Field);

        renderer.group_begin(&mut self.session, MemberKind::Property);
        for member in &properties {
            position += 1;
            self.dump_member(member, position == total);
        }
        renderer.group_end(&mut self.session, MemberKind::Property);
    }

    fn dump_member(&mut self, member: &Member<'_>, last: bool) {
        let renderer = self.renderer;
        renderer.member_begin(&mut self.session, member);
        self.dispatch(member.value);
        renderer.member_end(&mut self.session, member, last);
    }

    fn dump_sequence(&mut self, value: &dyn Reflect, mut elements: Elements<'_>) {
        let renderer = self.renderer;
        self.session.enter_composite();
        self.session.enter_sequence();
        renderer.sequence_begin(&mut self.session, value);

        if self.session.level() > self.options.max_level {
            trace!(type_name = %value.type_name(), "max level reached, truncating sequence");
            renderer.max_level_marker(&mut self.session);
        } else if let Some(mut current) = elements.next() {
            // One-ahead look-ahead so the final element can be told apart
            // from interior ones for separator suppression.
            loop {
                self.session.bump_index();
                match elements.next() {
                    Some(next) => {
                        self.dump_element(current);
                        renderer.sequence_separator(&mut self.session, false);
                        current = next;
                    }
                    None => {
                        self.dump_element(current);
                        renderer.sequence_separator(&mut self.session, true);
                        break;
                    }
                }
            }
        }

        self.session.exit_sequence();
        renderer.sequence_end(&mut self.session, value);
        self.session.exit_composite();
    }

    fn dump_element(&mut self, element: Element<'_>) {
        match element {
            Element::Value(value) => self.dispatch(value),
            Element::Pair { key, value } => self.dump_pair(key, value),
        }
    }

    fn dump_pair(&mut self, key: &dyn Reflect, value: &dyn Reflect) {
        let renderer = self.renderer;
        self.session.enter_composite();
        renderer.pair_begin(&mut self.session);

        if self.session.level() > self.options.max_level {
            trace!("max level reached, truncating pair");
            renderer.max_level_marker(&mut self.session);
        } else {
            self.dispatch(key);
            renderer.pair_separator(&mut self.session);
            self.dispatch(value);
        }

        renderer.pair_end(&mut self.session);
        self.session.exit_composite();
    }
}

/// Pops the path entry pushed for the object whose members are being dumped.
/// Dropping runs on every exit path, including unwinding, so a later sibling
/// branch is never erroneously flagged as circular.
struct PathScope<'w, 'a> {
    walker: &'w mut Walker<'a>,
}

impl Drop for PathScope<'_, '_> {
    fn drop(&mut self) {
        self.walker.path.pop();
    }
}
