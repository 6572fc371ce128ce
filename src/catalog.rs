//! Ordered catalog of valid theme names.

/// The ordered set of theme names a switcher considers valid.
///
/// The catalog defines both the universe of acceptable names and the
/// ordering used by `next_theme`/`previous_theme` and swipe navigation.
/// Names keep their first-seen position; duplicates and empty names are
/// dropped at construction.
///
/// # Example
///
/// ```rust
/// use themeshift::ThemeCatalog;
///
/// let catalog = ThemeCatalog::new(["light", "dark", "sepia"]);
/// assert_eq!(catalog.next_after("sepia"), Some("light"));
/// assert_eq!(catalog.previous_before("light"), Some("sepia"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCatalog {
    names: Vec<String>,
}

impl ThemeCatalog {
    /// Builds a catalog from an ordered list of names, deduplicating while
    /// preserving first occurrence.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self { names: Vec::new() };
        for name in names {
            catalog.register(name);
        }
        catalog
    }

    /// Adds a name if it is not already present.
    ///
    /// Returns `true` when the catalog grew. Empty names are ignored, so
    /// the "no theme" sentinel can never become a catalog member.
    pub fn register<S: Into<String>>(&mut self, name: S) -> bool {
        let name = name.into();
        if name.is_empty() || self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Whether `name` is a member.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Position of `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Name at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// All names, in catalog order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name after `current`, wrapping past the last entry.
    ///
    /// A `current` that is not a member (including the empty "no theme"
    /// value) starts the cycle at the first entry.
    pub fn next_after(&self, current: &str) -> Option<&str> {
        if self.names.is_empty() {
            return None;
        }
        let index = match self.index_of(current) {
            Some(i) => (i + 1) % self.names.len(),
            None => 0,
        };
        self.get(index)
    }

    /// Name before `current`, wrapping past the first entry.
    ///
    /// A non-member `current` lands on the last entry.
    pub fn previous_before(&self, current: &str) -> Option<&str> {
        if self.names.is_empty() {
            return None;
        }
        let index = match self.index_of(current) {
            Some(0) | None => self.names.len() - 1,
            Some(i) => i - 1,
        };
        self.get(index)
    }

    /// Next entry without wraparound; `None` at the last entry or when
    /// `current` is not a member. Used by swipe navigation.
    pub fn bounded_next(&self, current: &str) -> Option<&str> {
        match self.index_of(current) {
            Some(i) if i + 1 < self.names.len() => self.get(i + 1),
            _ => None,
        }
    }

    /// Previous entry without wraparound; `None` at the first entry or
    /// when `current` is not a member.
    pub fn bounded_previous(&self, current: &str) -> Option<&str> {
        match self.index_of(current) {
            Some(i) if i > 0 => self.get(i - 1),
            _ => None,
        }
    }
}
