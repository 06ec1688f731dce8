use std::borrow::Cow;

use crate::reflect::Reflect;

/// Identity of a composite value on the active traversal path.
///
/// The key pairs the value's address with its type name: a struct and its
/// first field share an address but can never be the same object, since a
/// type cannot contain itself by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct IdentityKey {
    address: usize,
    type_name: Cow<'static, str>,
}

impl IdentityKey {
    pub fn of(value: &dyn Reflect) -> Self {
        Self {
            address: value as *const dyn Reflect as *const () as usize,
            type_name: value.type_name(),
        }
    }
}

/// Stack of identity keys for the composite values currently being rendered.
///
/// A stack rather than a set: the same object reached through two disjoint
/// branches renders twice, which is correct for a tree-shaped view of shared
/// but acyclic data. Only an object that is currently its own ancestor is
/// reported as a cycle.
#[derive(Default)]
pub(crate) struct PathTracker {
    stack: Vec<IdentityKey>,
}

impl PathTracker {
    pub fn on_path(&self, key: &IdentityKey) -> bool {
        self.stack.iter().any(|entry| entry == key)
    }

    pub fn push(&mut self, key: IdentityKey) {
        self.stack.push(key);
    }

    pub fn pop(&mut self) {
        self.stack.pop();
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
