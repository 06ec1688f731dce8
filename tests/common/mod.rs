#![allow(dead_code)]

use std::borrow::Cow;
use std::cell::Cell;

use chrono::{DateTime, Utc};
use odump::{reflect_enum, reflect_object, Member, Reflect, Shape};
use rust_decimal::Decimal;
use similar::{ChangeTag, TextDiff};
use uuid::Uuid;

pub struct Person {
    pub name: String,
    pub age: i32,
}

reflect_object! {
    Person {
        properties {
            Name => name,
            Age => age,
        }
    }
}

pub fn person_thomas() -> Person {
    Person {
        name: "Thomas".to_string(),
        age: 30,
    }
}

pub fn generate_persons(count: usize) -> Vec<Person> {
    (1..=count)
        .map(|index| Person {
            name: format!("Person {}", index),
            age: 3,
        })
        .collect()
}

pub struct Organization {
    pub name: String,
    pub persons: Vec<Person>,
}

reflect_object! {
    Organization {
        properties {
            Name => name,
            Persons => persons,
        }
    }
}

pub fn organization() -> Organization {
    Organization {
        name: "superdev gmbh".to_string(),
        persons: generate_persons(2),
    }
}

pub struct Wrapper {
    pub inner: Person,
}

reflect_object! {
    Wrapper {
        properties {
            Inner => inner,
        }
    }
}

pub enum Color {
    Red,
    Green,
    Blue,
}

reflect_enum!(Color { Red, Green, Blue });

pub struct TestObject {
    pub id: Uuid,
    pub nullable_timestamp: Option<DateTime<Utc>>,
}

reflect_object! {
    TestObject {
        properties {
            Id => id,
            NullableTimestamp => nullable_timestamp,
        }
    }
}

pub struct OrderedObject {
    pub b: Option<i32>,
    pub a: Option<i32>,
    pub c: Option<i32>,
}

reflect_object! {
    OrderedObject {
        properties {
            B => b,
            A => a,
            C => c,
        }
    }
}

pub struct Account {
    pub name: String,
    pub balance: i32,
    pub active: bool,
}

reflect_object! {
    Account {
        properties {
            Name => name,
            Balance => balance,
            Active => active,
        }
    }
}

pub struct Versioned {
    pub name: String,
    pub version: i32,
}

reflect_object! {
    Versioned {
        properties {
            Name => name,
        }
        getters {
            Version => version,
        }
    }
}

pub struct Inventory {
    pub location: String,
    pub items: i32,
}

reflect_object! {
    Inventory {
        fields {
            Location => location,
        }
        properties {
            Items => items,
        }
    }
}

pub struct Metrics {
    pub float: f32,
    pub double: f64,
    pub long: i64,
    pub unsigned_long: u64,
    pub amount: Decimal,
}

reflect_object! {
    Metrics {
        properties {
            Float => float,
            Double => double,
            Long => long,
            ULong => unsigned_long,
            Amount => amount,
        }
    }
}

/// Graph node whose links are set after construction, so tests can build
/// bidirectional references out of plain shared borrows.
pub struct Node<'a> {
    pub name: &'static str,
    pub next: Cell<Option<&'a Node<'a>>>,
}

impl<'a> Node<'a> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            next: Cell::new(None),
        }
    }
}

impl Reflect for Node<'_> {
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Node")
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Object
    }

    fn properties(&self) -> Vec<Member<'_>> {
        let mut members = vec![Member::property("Name", &self.name)];
        if let Some(next) = self.next.get() {
            members.push(Member::property("Next", next));
        }
        members
    }
}

/// Full-text comparison with a line diff on mismatch.
pub fn assert_text_eq(actual: &str, expected: &str) {
    if actual != expected {
        let diff = TextDiff::from_lines(expected, actual);
        let mut report = String::new();
        for change in diff.iter_all_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => "-",
                ChangeTag::Insert => "+",
                ChangeTag::Equal => " ",
            };
            report.push_str(&format!("{}{}", sign, change));
        }
        panic!("output mismatch:\n{}", report);
    }
}
