mod buffer_tests {
    use crate::engine::buffer::OutputBuffer;
    use crate::DumpOptions;

    fn buffer() -> OutputBuffer {
        OutputBuffer::new(&DumpOptions::default())
    }

    #[test]
    fn indents_only_at_line_start() {
        let mut buffer = buffer();
        buffer.indent();
        buffer.write("a");
        buffer.write("b");
        buffer.line_break(false);
        buffer.write("c");
        assert_eq!(buffer.snapshot(), "  ab\n  c");
    }

    #[test]
    fn line_break_is_idempotent_at_line_start() {
        let mut buffer = buffer();
        buffer.write("a");
        buffer.line_break(false);
        buffer.line_break(false);
        assert_eq!(buffer.snapshot(), "a\n");
    }

    #[test]
    fn forced_break_caps_at_one_blank_line() {
        let mut buffer = buffer();
        buffer.write("a");
        buffer.line_break(false);
        buffer.line_break(true);
        buffer.line_break(true);
        assert_eq!(buffer.snapshot(), "a\n\n");
    }

    #[test]
    fn write_raw_takes_explicit_indent() {
        let mut buffer = buffer();
        buffer.indent();
        buffer.write_raw("a", 0);
        buffer.line_break(false);
        buffer.write_raw("b", 3);
        assert_eq!(buffer.snapshot(), "a\n      b");
    }

    #[test]
    fn dedent_clamps_at_zero() {
        let mut buffer = buffer();
        buffer.dedent();
        buffer.write("a");
        assert_eq!(buffer.snapshot(), "a");
    }

    #[test]
    fn respects_indent_char_and_width() {
        let options = DumpOptions {
            indent_size: 1,
            indent_char: '\t',
            ..Default::default()
        };
        let mut buffer = OutputBuffer::new(&options);
        buffer.indent();
        buffer.indent();
        buffer.write("x");
        assert_eq!(buffer.snapshot(), "\t\tx");
    }

    #[test]
    fn write_ending_in_break_starts_a_new_line() {
        let mut buffer = buffer();
        buffer.indent();
        buffer.write("a\n");
        buffer.write("b");
        assert_eq!(buffer.snapshot(), "  a\n  b");
    }

    #[test]
    fn snapshot_is_side_effect_free() {
        let mut buffer = buffer();
        buffer.write("a");
        assert_eq!(buffer.snapshot(), buffer.snapshot());
        assert_eq!(buffer.into_string(), "a");
    }
}

mod tracker_tests {
    use crate::engine::tracker::{IdentityKey, PathTracker};
    use crate::reflect_object;

    struct Inner {
        number: i32,
    }

    reflect_object! {
        Inner {
            properties { Number => number }
        }
    }

    struct Outer {
        inner: Inner,
    }

    reflect_object! {
        Outer {
            properties { Inner => inner }
        }
    }

    #[test]
    fn same_address_different_type_is_not_a_cycle() {
        let outer = Outer {
            inner: Inner { number: 1 },
        };
        // A struct and its first field share an address; the type name in
        // the key keeps them apart.
        let outer_key = IdentityKey::of(&outer);
        let inner_key = IdentityKey::of(&outer.inner);
        assert_ne!(outer_key, inner_key);

        let mut tracker = PathTracker::default();
        tracker.push(outer_key.clone());
        assert!(tracker.on_path(&outer_key));
        assert!(!tracker.on_path(&inner_key));
    }

    #[test]
    fn pop_releases_the_entry() {
        let outer = Outer {
            inner: Inner { number: 1 },
        };
        let key = IdentityKey::of(&outer);

        let mut tracker = PathTracker::default();
        tracker.push(key.clone());
        assert_eq!(tracker.depth(), 1);
        tracker.pop();
        assert_eq!(tracker.depth(), 0);
        assert!(!tracker.on_path(&key));
    }
}

mod member_tests {
    use std::sync::Arc;

    use crate::engine::members::collect_members;
    use crate::reflect::Reflect;
    use crate::{reflect_object, DumpOptions, Member};

    struct Widget {
        id: u32,
        name: String,
        count: i32,
        revision: i32,
    }

    reflect_object! {
        Widget {
            fields { Id => id }
            properties { Name => name, Count => count }
            getters { Revision => revision }
        }
    }

    fn widget() -> Widget {
        Widget {
            id: 9,
            name: "bolt".to_string(),
            count: 3,
            revision: 7,
        }
    }

    fn names(members: &[Member<'_>]) -> Vec<String> {
        members.iter().map(|member| member.name.to_string()).collect()
    }

    #[test]
    fn enumerates_fields_before_properties_in_declaration_order() {
        let widget = widget();
        let (fields, properties) = collect_members(&widget as &dyn Reflect, &DumpOptions::default());
        assert_eq!(names(&fields), ["Id"]);
        assert_eq!(names(&properties), ["Name", "Count", "Revision"]);
    }

    #[test]
    fn set_properties_only_drops_getters_but_not_fields() {
        let widget = widget();
        let options = DumpOptions {
            set_properties_only: true,
            ..Default::default()
        };
        let (fields, properties) = collect_members(&widget as &dyn Reflect, &options);
        assert_eq!(names(&fields), ["Id"]);
        assert_eq!(names(&properties), ["Name", "Count"]);
    }

    #[test]
    fn excludes_members_from_both_groups() {
        let widget = widget();
        let options = DumpOptions {
            exclude_properties: ["Id", "Count"].iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        let (fields, properties) = collect_members(&widget as &dyn Reflect, &options);
        assert!(fields.is_empty());
        assert_eq!(names(&properties), ["Name", "Revision"]);
    }

    #[test]
    fn ignores_members_holding_their_zero_value() {
        let widget = Widget {
            id: 0,
            name: String::new(),
            count: 3,
            revision: 7,
        };
        let options = DumpOptions {
            ignore_default_values: true,
            ..Default::default()
        };
        let (fields, properties) = collect_members(&widget as &dyn Reflect, &options);
        assert!(fields.is_empty());
        assert_eq!(names(&properties), ["Count", "Revision"]);
    }

    #[test]
    fn orders_each_group_by_the_configured_key() {
        let widget = widget();
        let options = DumpOptions {
            property_order_by: Some(Arc::new(|member: &Member<'_>| member.name.to_string())),
            ..Default::default()
        };
        let (_, properties) = collect_members(&widget as &dyn Reflect, &options);
        assert_eq!(names(&properties), ["Count", "Name", "Revision"]);
    }
}

mod walker_tests {
    use std::borrow::Cow;
    use std::cell::RefCell;

    use crate::engine::Session;
    use crate::reflect::{Member, MemberKind, Reflect, Shape};
    use crate::{reflect_object, render, DumpError, DumpOptions, Renderer};

    #[derive(Default)]
    struct RecordingRenderer {
        events: RefCell<Vec<String>>,
    }

    impl RecordingRenderer {
        fn record(&self, event: impl Into<String>) {
            self.events.borrow_mut().push(event.into());
        }

        fn events(&self) -> Vec<String> {
            self.events.borrow().clone()
        }
    }

    impl Renderer for RecordingRenderer {
        fn object_start(&self, _out: &mut Session, value: &dyn Reflect) {
            self.record(format!("object_start {}", value.type_name()));
        }

        fn object_end(&self, _out: &mut Session, value: &dyn Reflect) {
            self.record(format!("object_end {}", value.type_name()));
        }

        fn group_begin(&self, _out: &mut Session, kind: MemberKind) {
            self.record(format!("group_begin {:?}", kind));
        }

        fn group_end(&self, _out: &mut Session, kind: MemberKind) {
            self.record(format!("group_end {:?}", kind));
        }

        fn member_begin(&self, _out: &mut Session, member: &Member<'_>) {
            self.record(format!("member_begin {}", member.name));
        }

        fn member_end(&self, _out: &mut Session, member: &Member<'_>, last: bool) {
            self.record(format!("member_end {} last={}", member.name, last));
        }

        fn sequence_begin(&self, _out: &mut Session, _value: &dyn Reflect) {
            self.record("sequence_begin");
        }

        fn sequence_separator(&self, _out: &mut Session, last: bool) {
            self.record(format!("separator last={}", last));
        }

        fn sequence_end(&self, _out: &mut Session, _value: &dyn Reflect) {
            self.record("sequence_end");
        }

        fn pair_begin(&self, _out: &mut Session) {
            self.record("pair_begin");
        }

        fn pair_separator(&self, _out: &mut Session) {
            self.record("pair_separator");
        }

        fn pair_end(&self, _out: &mut Session) {
            self.record("pair_end");
        }

        fn max_level_marker(&self, _out: &mut Session) {
            self.record("max_level");
        }

        fn circular_marker(&self, _out: &mut Session, _value: &dyn Reflect) {
            self.record("circular");
        }

        fn write_str(&self, _out: &mut Session, value: &str) {
            self.record(format!("str {}", value));
        }

        fn write_i32(&self, _out: &mut Session, value: i32) {
            self.record(format!("i32 {}", value));
        }
    }

    struct Leaf {
        number: i32,
    }

    reflect_object! {
        Leaf {
            properties { Number => number }
        }
    }

    struct Branch {
        leaf: Leaf,
    }

    reflect_object! {
        Branch {
            properties { Leaf => leaf }
        }
    }

    struct Empty;

    reflect_object! {
        Empty {}
    }

    struct Shared<'a> {
        left: &'a Leaf,
        right: &'a Leaf,
    }

    impl Reflect for Shared<'_> {
        fn type_name(&self) -> Cow<'static, str> {
            Cow::Borrowed("Shared")
        }

        fn shape(&self) -> Shape<'_> {
            Shape::Object
        }

        fn properties(&self) -> Vec<Member<'_>> {
            vec![
                Member::property("Left", self.left),
                Member::property("Right", self.right),
            ]
        }
    }

    struct Looper;

    impl Reflect for Looper {
        fn type_name(&self) -> Cow<'static, str> {
            Cow::Borrowed("Looper")
        }

        fn shape(&self) -> Shape<'_> {
            Shape::Object
        }

        fn properties(&self) -> Vec<Member<'_>> {
            vec![Member::property("Me", self)]
        }
    }

    fn run(value: &dyn Reflect, options: &DumpOptions) -> Vec<String> {
        let recorder = RecordingRenderer::default();
        render(value, &recorder, options).expect("valid options");
        recorder.events()
    }

    #[test]
    fn two_element_sequence_event_order() {
        let values = vec!["a".to_string(), "b".to_string()];
        let events = run(&values, &DumpOptions::default());
        assert_eq!(
            events,
            [
                "sequence_begin",
                "str a",
                "separator last=false",
                "str b",
                "separator last=true",
                "sequence_end",
            ]
        );
    }

    #[test]
    fn one_last_separator_regardless_of_length() {
        for count in [1usize, 2, 5] {
            let values: Vec<i32> = (0..count as i32).collect();
            let events = run(&values, &DumpOptions::default());
            let separators: Vec<_> = events
                .iter()
                .filter(|event| event.starts_with("separator"))
                .collect();
            assert_eq!(separators.len(), count);
            assert_eq!(
                separators
                    .iter()
                    .filter(|event| event.ends_with("last=true"))
                    .count(),
                1
            );
            assert_eq!(separators.last().unwrap().as_str(), "separator last=true");
        }
    }

    #[test]
    fn empty_sequence_emits_no_separator() {
        let values: Vec<i32> = Vec::new();
        let events = run(&values, &DumpOptions::default());
        assert_eq!(events, ["sequence_begin", "sequence_end"]);
    }

    #[test]
    fn group_hooks_fire_for_empty_groups() {
        let events = run(&Empty, &DumpOptions::default());
        assert_eq!(
            events,
            [
                "object_start Empty",
                "group_begin Field",
                "group_end Field",
                "group_begin Property",
                "group_end Property",
                "object_end Empty",
            ]
        );
    }

    #[test]
    fn max_level_stops_member_enumeration() {
        let branch = Branch {
            leaf: Leaf { number: 1 },
        };
        let options = DumpOptions {
            max_level: 1,
            ..Default::default()
        };
        let events = run(&branch, &options);
        assert!(events.contains(&"member_begin Leaf".to_string()));
        assert!(events.contains(&"object_start Leaf".to_string()));
        assert!(events.contains(&"max_level".to_string()));
        assert!(events.contains(&"object_end Leaf".to_string()));
        assert!(!events.contains(&"member_begin Number".to_string()));
    }

    #[test]
    fn map_entries_are_dumped_as_pairs() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(1, "one".to_string());
        let events = run(&map, &DumpOptions::default());
        assert_eq!(
            events,
            [
                "sequence_begin",
                "pair_begin",
                "i32 1",
                "pair_separator",
                "str one",
                "pair_end",
                "separator last=true",
                "sequence_end",
            ]
        );
    }

    #[test]
    fn shared_value_on_disjoint_branches_renders_twice() {
        let leaf = Leaf { number: 1 };
        let shared = Shared {
            left: &leaf,
            right: &leaf,
        };
        let events = run(&shared, &DumpOptions::default());
        assert!(!events.contains(&"circular".to_string()));
        assert_eq!(
            events
                .iter()
                .filter(|event| *event == "object_start Leaf")
                .count(),
            2
        );
    }

    #[test]
    fn self_reference_is_marked_once() {
        let events = run(&Looper, &DumpOptions::default());
        assert_eq!(
            events.iter().filter(|event| *event == "circular").count(),
            1
        );
    }

    #[test]
    fn empty_line_break_is_rejected_before_traversal() {
        let options = DumpOptions {
            line_break: String::new(),
            ..Default::default()
        };
        let recorder = RecordingRenderer::default();
        let result = render(&Empty, &recorder, &options);
        assert!(matches!(result, Err(DumpError::InvalidOptions(_))));
        assert!(recorder.events().is_empty());
    }
}

mod default_hook_tests {
    use crate::{render, DumpOptions, PlainRenderer};

    #[test]
    fn plain_defaults_render_brackets_and_literals() {
        let values = vec![1, 2, 3];
        let dump = render(&values, &PlainRenderer, &DumpOptions::default()).expect("valid options");
        assert_eq!(dump, "[1,2,3]");
    }

    #[test]
    fn plain_defaults_render_null_literal() {
        let none: Option<i32> = None;
        let dump = render(&none, &PlainRenderer, &DumpOptions::default()).expect("valid options");
        assert_eq!(dump, "null");
    }
}

mod style_tests {
    use crate::{dump, dump_source, reflect_object, DumpOptions, DumpStyle};

    struct Pet {
        name: String,
    }

    reflect_object! {
        Pet {
            properties { Name => name }
        }
    }

    #[test]
    fn dump_dispatches_on_the_configured_style() {
        let pet = Pet {
            name: "Rex".to_string(),
        };
        let options = DumpOptions {
            style: DumpStyle::Source,
            ..Default::default()
        };
        assert_eq!(
            dump(&pet, &options).expect("valid options"),
            dump_source(&pet, &options).expect("valid options")
        );
    }

    #[test]
    fn repeated_dumps_yield_identical_output() {
        let pet = Pet {
            name: "Rex".to_string(),
        };
        let options = DumpOptions::default();
        let first = dump(&pet, &options).expect("valid options");
        let second = dump(&pet, &options).expect("valid options");
        assert_eq!(first, second);
    }
}
