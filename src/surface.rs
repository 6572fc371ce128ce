//! The surface that receives theme effects.

use std::collections::{BTreeMap, BTreeSet};

/// Receiver for the observable effects of a theme change.
///
/// The controller depends only on this trait; hosts bridge it to whatever
/// plays the role of a document root: a real DOM, a widget tree, a window
/// handle. [`MemorySurface`] is the built-in in-memory implementation,
/// serving both as the default backend and as a test double.
///
/// Invariant the controller maintains through this trait: at most one
/// theme marker is active at a time, and the `data-theme` mirror always
/// matches it.
pub trait Surface {
    /// Clears every marker named in `catalog` (and whatever marker was
    /// previously mirrored), then marks `theme`: class plus `data-theme`
    /// mirror. `None` leaves no theme marked and removes the mirror.
    fn apply_marker(&mut self, catalog: &[String], theme: Option<&str>);

    /// Installs a style rule scoped to `theme`, replacing any earlier rule
    /// registered for the same theme.
    fn inject_rule(&mut self, theme: &str, rule: &str);

    /// Transition-duration hint for hosts that animate the change. Only
    /// called with a positive duration.
    fn hint_transition(&mut self, duration_ms: u64);
}

/// In-memory document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    classes: BTreeSet<String>,
    data_theme: Option<String>,
    rules: BTreeMap<String, String>,
    transition_ms: Option<u64>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Root class list, sorted.
    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    /// Current value of the `data-theme` mirror.
    pub fn data_theme(&self) -> Option<&str> {
        self.data_theme.as_deref()
    }

    /// Injected style rule for `theme`, if any.
    pub fn rule_for(&self, theme: &str) -> Option<&str> {
        self.rules.get(theme).map(String::as_str)
    }

    /// Last transition hint received, if any.
    pub fn transition_hint(&self) -> Option<u64> {
        self.transition_ms
    }

    /// How many of `catalog`'s markers are currently set.
    pub fn active_marker_count(&self, catalog: &[String]) -> usize {
        catalog.iter().filter(|name| self.has_class(name)).count()
    }
}

impl Surface for MemorySurface {
    fn apply_marker(&mut self, catalog: &[String], theme: Option<&str>) {
        if let Some(previous) = self.data_theme.take() {
            self.classes.remove(&previous);
        }
        for name in catalog {
            self.classes.remove(name);
        }
        match theme {
            Some(name) if !name.is_empty() => {
                self.classes.insert(name.to_string());
                self.data_theme = Some(name.to_string());
            }
            _ => {}
        }
    }

    fn inject_rule(&mut self, theme: &str, rule: &str) {
        self.rules.insert(theme.to_string(), rule.to_string());
    }

    fn hint_transition(&mut self, duration_ms: u64) {
        self.transition_ms = Some(duration_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<String> {
        vec!["light".to_string(), "dark".to_string()]
    }

    #[test]
    fn test_apply_marker_sets_class_and_mirror() {
        let mut surface = MemorySurface::new();
        surface.apply_marker(&catalog(), Some("dark"));
        assert!(surface.has_class("dark"));
        assert_eq!(surface.data_theme(), Some("dark"));
    }

    #[test]
    fn test_apply_marker_clears_previous() {
        let mut surface = MemorySurface::new();
        surface.apply_marker(&catalog(), Some("light"));
        surface.apply_marker(&catalog(), Some("dark"));
        assert!(!surface.has_class("light"));
        assert!(surface.has_class("dark"));
        assert_eq!(surface.active_marker_count(&catalog()), 1);
    }

    #[test]
    fn test_apply_marker_none_removes_everything() {
        let mut surface = MemorySurface::new();
        surface.apply_marker(&catalog(), Some("dark"));
        surface.apply_marker(&catalog(), None);
        assert_eq!(surface.active_marker_count(&catalog()), 0);
        assert_eq!(surface.data_theme(), None);
    }

    #[test]
    fn test_apply_marker_clears_marker_outside_catalog() {
        // A marker applied outside the configured catalog (the "dark"
        // sentinel case) must still be cleared on the next change.
        let mut surface = MemorySurface::new();
        surface.apply_marker(&["sepia".to_string()], Some("dark"));
        surface.apply_marker(&["sepia".to_string()], Some("sepia"));
        assert!(!surface.has_class("dark"));
        assert!(surface.has_class("sepia"));
    }

    #[test]
    fn test_inject_rule_replaces() {
        let mut surface = MemorySurface::new();
        surface.inject_rule("ocean", "a");
        surface.inject_rule("ocean", "b");
        assert_eq!(surface.rule_for("ocean"), Some("b"));
    }

    #[test]
    fn test_transition_hint() {
        let mut surface = MemorySurface::new();
        assert_eq!(surface.transition_hint(), None);
        surface.hint_transition(300);
        assert_eq!(surface.transition_hint(), Some(300));
    }
}
