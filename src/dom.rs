//! Plain-data element model for declarative switchers.

use std::collections::{BTreeSet, HashMap};

/// A host-side element snapshot: tag name, attributes, class list.
///
/// The crate never touches a real document tree. Hosts register elements
/// with the controller under an id of their choosing, feed input events
/// against those ids, and mirror class-list changes back out. Attributes
/// are read at event time, so editing them after registration changes
/// behavior immediately.
///
/// # Example
///
/// ```rust
/// use themeshift::Element;
///
/// let button = Element::new("button")
///     .attr("data-set-theme", "dark")
///     .attr("data-act-class", "active");
/// assert_eq!(button.get_attr("data-set-theme"), Some("dark"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: HashMap<String, String>,
    classes: BTreeSet<String>,
}

impl Element {
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self {
            tag: tag.into(),
            attrs: HashMap::new(),
            classes: BTreeSet::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Fluent attribute setter for construction.
    pub fn attr<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn add_class<S: Into<String>>(&mut self, name: S) {
        self.classes.insert(name.into());
    }

    pub fn remove_class(&mut self, name: &str) {
        self.classes.remove(name);
    }

    /// Adds the class if absent, removes it if present.
    pub fn toggle_class(&mut self, name: &str) {
        if !self.classes.remove(name) {
            self.classes.insert(name.to_string());
        }
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    /// True for elements whose default click action is navigation; the
    /// controller reports these clicks as consumed so hosts suppress it.
    pub fn is_link(&self) -> bool {
        self.tag == "a"
    }
}
