//! The theme-switching controller.
//!
//! [`ThemeSwitcher`] owns the authoritative current theme and funnels all
//! three input channels (declarative element attributes, programmatic
//! calls, touch gestures) through one typed dispatch path. Effects flow
//! out through a [`Surface`] (markers, injected rules, transition hints)
//! and a [`PreferenceStore`] (one persisted string per key), in a fixed
//! order per change: marker update, persistence write, change callback.

use std::collections::{BTreeMap, HashMap};

use crate::catalog::ThemeCatalog;
use crate::config::ThemeConfig;
use crate::debug::{DebugLog, Diagnostic};
use crate::dom::Element;
use crate::gesture::{SwipeDirection, SwipeTracker};
use crate::intent::{self, Intent, ATTR_ACTIVE_CLASS, ATTR_SET, ATTR_TOGGLE};
use crate::rules::{self, ThemeDefinition};
use crate::store::{MemoryStore, PreferenceStore};
use crate::surface::{MemorySurface, Surface};
use crate::system;

/// The theme name applied when the system probe wins initial resolution.
pub const DARK_THEME: &str = "dark";

/// Controller lifecycle.
///
/// `destroy` moves an Active controller back to Uninitialized; any public
/// operation on an Uninitialized controller first *revives* it, re-running
/// the init protocol with [`ThemeConfig::default()`] while retaining the
/// surface and store instances. Callers that do not track lifecycle rely
/// on this recovery behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Active,
}

/// Change callback. Receives the controller so it may re-enter (e.g. call
/// [`ThemeSwitcher::set_theme`]); nested calls apply and persist before the
/// outer callback returns, and nested notification is suppressed.
pub type ChangeFn<S, P> = Box<dyn FnMut(&mut ThemeSwitcher<S, P>, &str)>;

/// Kind of switcher registered through [`ThemeSwitcher::create_switcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitcherKind {
    Toggle,
    Set,
    Select,
    /// Click-to-cycle through the binding's own theme list.
    Custom,
}

/// Registration request for [`ThemeSwitcher::create_switcher`].
pub struct SwitcherConfig {
    pub kind: SwitcherKind,
    pub element_id: String,
    pub themes: Vec<String>,
    pub on_change: Option<Box<dyn FnMut(&str)>>,
}

struct SwitcherBinding {
    kind: SwitcherKind,
    themes: Vec<String>,
    on_change: Option<Box<dyn FnMut(&str)>>,
}

/// Theme-switching state machine.
///
/// One explicit instance per theme axis; construct with
/// [`init`](ThemeSwitcher::init) (in-memory backends) or
/// [`with_backends`](ThemeSwitcher::with_backends). Unknown theme names,
/// storage failures and malformed declarative targets all degrade to
/// "nothing changed" and surface only on the debug log.
///
/// # Example
///
/// ```rust
/// use themeshift::{ThemeConfig, ThemeSwitcher};
///
/// let mut switcher = ThemeSwitcher::init(
///     ThemeConfig::new().themes(["light", "dark", "sepia"]),
/// );
/// switcher.set_theme("dark");
/// assert_eq!(switcher.current_theme(), "dark");
/// assert!(switcher.is_dark_mode());
/// ```
pub struct ThemeSwitcher<S: Surface = MemorySurface, P: PreferenceStore = MemoryStore> {
    state: Lifecycle,
    config: ThemeConfig,
    catalog: ThemeCatalog,
    current: String,
    surface: S,
    store: P,
    debug: DebugLog,
    gestures: Option<SwipeTracker>,
    elements: HashMap<String, Element>,
    bindings: HashMap<String, SwitcherBinding>,
    on_change: Option<ChangeFn<S, P>>,
}

impl ThemeSwitcher {
    /// Initializes a controller over in-memory backends.
    pub fn init(config: ThemeConfig) -> Self {
        Self::with_backends(config, MemorySurface::new(), MemoryStore::new())
    }
}

impl<S: Surface, P: PreferenceStore> ThemeSwitcher<S, P> {
    /// Initializes a controller over caller-supplied backends.
    ///
    /// Runs the full init protocol: resolve the initial theme (persisted
    /// preference if valid, else the system probe if enabled, else the
    /// configured default) and apply it, producing the first observable effect.
    pub fn with_backends(config: ThemeConfig, surface: S, store: P) -> Self {
        let mut switcher = Self {
            state: Lifecycle::Uninitialized,
            config: ThemeConfig::default(),
            catalog: ThemeCatalog::new(Vec::<String>::new()),
            current: String::new(),
            surface,
            store,
            debug: DebugLog::new(false),
            gestures: None,
            elements: HashMap::new(),
            bindings: HashMap::new(),
            on_change: None,
        };
        switcher.activate(config);
        switcher
    }

    fn activate(&mut self, config: ThemeConfig) {
        self.catalog = ThemeCatalog::new(config.themes.iter().cloned());
        self.debug = DebugLog::new(config.debug);
        self.gestures = config
            .enable_touch_gestures
            .then(|| SwipeTracker::new(config.touch_threshold_px));
        self.config = config;
        self.state = Lifecycle::Active;

        let initial = self.resolve_initial_theme();
        self.apply_and_persist(&initial, None);
    }

    /// Initial theme priority: valid persisted preference, then the system
    /// probe (when enabled), then the configured default.
    fn resolve_initial_theme(&mut self) -> String {
        match self.store.load(&self.config.storage_key) {
            Ok(Some(saved)) if self.catalog.contains(&saved) => return saved,
            Ok(_) => {}
            Err(err) => {
                let key = self.config.storage_key.clone();
                self.debug.report(Diagnostic::PersistenceFailure {
                    key,
                    detail: err.to_string(),
                });
            }
        }
        if self.config.enable_system_preference && system::system_prefers_dark() {
            return DARK_THEME.to_string();
        }
        self.config.default_theme.clone()
    }

    /// The `revive` transition: re-runs init with default configuration if
    /// the controller was destroyed, retaining surface and store.
    fn revive_if_destroyed(&mut self) {
        if self.state == Lifecycle::Uninitialized {
            self.activate(ThemeConfig::default());
        }
    }

    /// Reconfigures an Uninitialized controller. First init wins: on an
    /// Active controller this is a no-op, the documented idempotent-init
    /// contract.
    pub fn init_config(&mut self, config: ThemeConfig) -> &mut Self {
        if self.state == Lifecycle::Uninitialized {
            self.activate(config);
        }
        self
    }

    /// Tears the controller down: drops listeners (switcher bindings,
    /// registered elements, gesture state), the change callback and the
    /// current theme. Surface markers are left as-is. The controller
    /// revives with default configuration on the next operation.
    pub fn destroy(&mut self) {
        self.elements.clear();
        self.bindings.clear();
        self.gestures = None;
        self.on_change = None;
        self.current.clear();
        self.debug.clear();
        self.state = Lifecycle::Uninitialized;
    }

    // =========================================================================
    // Theme state operations
    // =========================================================================

    /// Applies `name` if it is in the catalog; otherwise a no-op reported
    /// on the debug log. Never an error.
    pub fn set_theme(&mut self, name: &str) {
        self.set_theme_with_key(name, None);
    }

    /// Like [`set_theme`](Self::set_theme), persisting under `key` instead
    /// of the configured storage key.
    pub fn set_theme_with_key(&mut self, name: &str, key: Option<&str>) {
        self.revive_if_destroyed();
        if name.is_empty() || !self.catalog.contains(name) {
            self.debug.report(Diagnostic::InvalidTheme {
                requested: name.to_string(),
            });
            return;
        }
        self.apply_and_persist(name, key);
    }

    /// Clears the active marker and persists the empty preference.
    pub fn remove_theme(&mut self) {
        self.remove_theme_with_key(None);
    }

    pub fn remove_theme_with_key(&mut self, key: Option<&str>) {
        self.revive_if_destroyed();
        self.apply_and_persist("", key);
    }

    /// Cycles within `themes`: the entry after the current one, wrapping.
    /// A current theme outside the list lands on the first entry. Lists
    /// with fewer than two entries are malformed and do nothing.
    pub fn toggle_theme<T: AsRef<str>>(&mut self, themes: &[T]) {
        self.toggle_theme_with_key(themes, None);
    }

    pub fn toggle_theme_with_key<T: AsRef<str>>(&mut self, themes: &[T], key: Option<&str>) {
        self.revive_if_destroyed();
        if themes.len() < 2 {
            self.debug.report(Diagnostic::MissingTarget {
                detail: "toggle list needs at least two themes".to_string(),
            });
            return;
        }
        // Toggling always consults the in-memory current theme; per-key
        // read-through is reserved for current_theme_for_key.
        let next = match themes.iter().position(|t| t.as_ref() == self.current) {
            Some(i) => themes[(i + 1) % themes.len()].as_ref().to_string(),
            None => themes[0].as_ref().to_string(),
        };
        self.set_theme_with_key(&next, key);
    }

    /// Advances circularly through the catalog.
    pub fn next_theme(&mut self) {
        self.revive_if_destroyed();
        if let Some(next) = self.catalog.next_after(&self.current).map(str::to_string) {
            self.set_theme(&next);
        }
    }

    /// Retreats circularly through the catalog.
    pub fn previous_theme(&mut self) {
        self.revive_if_destroyed();
        if let Some(previous) = self
            .catalog
            .previous_before(&self.current)
            .map(str::to_string)
        {
            self.set_theme(&previous);
        }
    }

    /// Registers `name` in the catalog (idempotent) and injects its scoped
    /// style rule on the surface. Does not apply or persist the theme.
    pub fn load_theme(&mut self, name: &str, variables: &BTreeMap<String, String>) {
        self.revive_if_destroyed();
        if name.is_empty() {
            self.debug.report(Diagnostic::MissingTarget {
                detail: "cannot load a theme with an empty name".to_string(),
            });
            return;
        }
        self.catalog.register(name);
        if let Some(rule) = rules::scoped_rule(name, variables) {
            self.surface.inject_rule(name, &rule);
        }
    }

    pub fn load_theme_definition(&mut self, definition: &ThemeDefinition) {
        self.load_theme(&definition.name, &definition.variables);
    }

    /// The in-memory current theme; empty when no theme is applied.
    pub fn current_theme(&self) -> &str {
        &self.current
    }

    /// Read-through to the persisted value under `key`, supporting
    /// independent theme axes on distinct storage keys. Miss or backend
    /// failure reads as no theme.
    pub fn current_theme_for_key(&mut self, key: &str) -> String {
        match self.store.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => String::new(),
            Err(err) => {
                self.debug.report(Diagnostic::PersistenceFailure {
                    key: key.to_string(),
                    detail: err.to_string(),
                });
                String::new()
            }
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.current == DARK_THEME
    }

    // =========================================================================
    // Intent dispatch
    // =========================================================================

    /// The typed entry point every input channel funnels through.
    pub fn dispatch(&mut self, intent: Intent) {
        self.revive_if_destroyed();
        match intent {
            Intent::Set { theme, key } => self.set_theme_with_key(&theme, key.as_deref()),
            Intent::Toggle { themes, key } => self.toggle_theme_with_key(&themes, key.as_deref()),
            Intent::Select { value, key } => {
                if value.is_empty() {
                    self.remove_theme_with_key(key.as_deref());
                } else {
                    self.set_theme_with_key(&value, key.as_deref());
                }
            }
            Intent::Next => self.next_theme(),
            Intent::Previous => self.previous_theme(),
            Intent::Remove { key } => self.remove_theme_with_key(key.as_deref()),
        }
    }

    /// Click on a registered element. Attributes are read now, not at
    /// registration, so later edits are honored. Returns `true` when the
    /// click was consumed and the host should suppress any default action
    /// (e.g. link navigation).
    pub fn click(&mut self, id: &str) -> bool {
        self.revive_if_destroyed();

        if self.click_binding(id) {
            return true;
        }

        let Some(element) = self.elements.get(id) else {
            let detail = format!("no element registered under id '{id}'");
            self.debug.report(Diagnostic::MissingTarget { detail });
            return false;
        };
        let consumed =
            element.get_attr(ATTR_SET).is_some() || element.get_attr(ATTR_TOGGLE).is_some();
        let active_class = element.get_attr(ATTR_ACTIVE_CLASS).map(str::to_string);
        let Some(decoded) = intent::click_intent(element) else {
            return consumed;
        };

        if let Some(class) = active_class {
            match &decoded {
                Intent::Set { .. } => self.mark_active_set_element(id, &class),
                Intent::Toggle { .. } => self.toggle_active_class(&class),
                _ => {}
            }
        }
        self.dispatch(decoded);
        consumed
    }

    /// Value change on a registered choice control. An empty value removes
    /// the theme rather than being ignored.
    pub fn change(&mut self, id: &str, value: &str) {
        self.revive_if_destroyed();
        let decoded = match self.elements.get(id) {
            Some(element) => intent::change_intent(element, value),
            None => {
                let detail = format!("no element registered under id '{id}'");
                self.debug.report(Diagnostic::MissingTarget { detail });
                return;
            }
        };
        if let Some(decoded) = decoded {
            self.dispatch(decoded);
        }
    }

    /// Registers a custom switcher binding for an element id.
    pub fn create_switcher(&mut self, config: SwitcherConfig) {
        self.revive_if_destroyed();
        self.bindings.insert(
            config.element_id,
            SwitcherBinding {
                kind: config.kind,
                themes: config.themes,
                on_change: config.on_change,
            },
        );
    }

    fn click_binding(&mut self, id: &str) -> bool {
        let themes = match self.bindings.get(id) {
            Some(binding) if binding.kind == SwitcherKind::Custom => binding.themes.clone(),
            _ => return false,
        };
        if themes.is_empty() {
            self.debug.report(Diagnostic::MissingTarget {
                detail: format!("custom switcher '{id}' has an empty theme list"),
            });
            return true;
        }
        let next = match themes.iter().position(|t| t == &self.current) {
            Some(i) => themes[(i + 1) % themes.len()].clone(),
            None => themes[0].clone(),
        };
        self.set_theme(&next);
        // the binding's own callback fires only for themes that applied
        if self.current == next {
            if let Some(callback) = self
                .bindings
                .get_mut(id)
                .and_then(|binding| binding.on_change.as_mut())
            {
                callback(&next);
            }
        }
        true
    }

    fn mark_active_set_element(&mut self, clicked: &str, class: &str) {
        for (id, element) in &mut self.elements {
            if element.get_attr(ATTR_SET).is_none() {
                continue;
            }
            if id.as_str() == clicked {
                element.add_class(class);
            } else {
                element.remove_class(class);
            }
        }
    }

    fn toggle_active_class(&mut self, class: &str) {
        for element in self.elements.values_mut() {
            if element.get_attr(ATTR_TOGGLE).is_some() {
                element.toggle_class(class);
            }
        }
    }

    // =========================================================================
    // Touch gestures
    // =========================================================================

    /// Gesture start. Inert unless touch gestures are enabled.
    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.revive_if_destroyed();
        if let Some(tracker) = self.gestures.as_mut() {
            tracker.begin(x, y);
        }
    }

    /// Live gesture motion; may resolve the swipe once per gesture.
    pub fn touch_move(&mut self, x: f64, y: f64) {
        self.revive_if_destroyed();
        let direction = match self.gestures.as_mut() {
            Some(tracker) => tracker.update(x, y),
            None => None,
        };
        if let Some(direction) = direction {
            self.swipe(direction);
        }
    }

    /// Gesture end; resolves the swipe if live motion did not already, and
    /// resets gesture state either way.
    pub fn touch_end(&mut self, x: f64, y: f64) {
        self.revive_if_destroyed();
        let direction = match self.gestures.as_mut() {
            Some(tracker) => tracker.finish(x, y),
            None => None,
        };
        if let Some(direction) = direction {
            self.swipe(direction);
        }
    }

    /// Swipe right steps back to the previous catalog theme, swipe left
    /// advances to the next; bounded at both ends, no wraparound.
    fn swipe(&mut self, direction: SwipeDirection) {
        let target = match direction {
            SwipeDirection::Right => self.catalog.bounded_previous(&self.current),
            SwipeDirection::Left => self.catalog.bounded_next(&self.current),
        }
        .map(str::to_string);
        if let Some(target) = target {
            self.set_theme(&target);
        }
    }

    // =========================================================================
    // Effects
    // =========================================================================

    /// Ordered effect application: marker update, transition hint,
    /// persistence write, change callback.
    fn apply_and_persist(&mut self, theme: &str, key: Option<&str>) {
        let marker = (!theme.is_empty()).then_some(theme);
        self.surface.apply_marker(self.catalog.names(), marker);
        if self.config.transition_duration_ms > 0 {
            self.surface.hint_transition(self.config.transition_duration_ms);
        }
        self.current = theme.to_string();

        let key = key.unwrap_or(&self.config.storage_key).to_string();
        if let Err(err) = self.store.save(&key, theme) {
            self.debug.report(Diagnostic::PersistenceFailure {
                key,
                detail: err.to_string(),
            });
        }

        self.notify(theme);
    }

    /// Invokes the change callback. The callback slot is emptied for the
    /// duration of the call, so re-entrant changes apply without invoking
    /// it again; a callback installed from within the callback wins over
    /// the restored one.
    fn notify(&mut self, theme: &str) {
        if let Some(mut callback) = self.on_change.take() {
            callback(self, theme);
            if self.on_change.is_none() {
                self.on_change = Some(callback);
            }
        }
    }

    /// Registers the change callback, replacing any previous one.
    pub fn on_theme_change<F>(&mut self, callback: F)
    where
        F: FnMut(&mut Self, &str) + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    // =========================================================================
    // Registries & accessors
    // =========================================================================

    /// Registers (or replaces) an element under `id`.
    pub fn insert_element<I: Into<String>>(&mut self, id: I, element: Element) {
        self.elements.insert(id.into(), element);
    }

    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Diagnostics recorded since init (or the last clear); empty unless
    /// debug mode is on.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.debug.entries()
    }

    pub fn clear_diagnostics(&mut self) {
        self.debug.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    fn switcher() -> ThemeSwitcher {
        ThemeSwitcher::init(ThemeConfig::default())
    }

    #[test]
    fn test_init_applies_default_theme() {
        let switcher = switcher();
        assert_eq!(switcher.current_theme(), "light");
        assert_eq!(switcher.lifecycle(), Lifecycle::Active);
        assert!(switcher.surface().has_class("light"));
        assert_eq!(switcher.surface().data_theme(), Some("light"));
    }

    #[test]
    fn test_init_persists_resolved_theme() {
        let switcher = switcher();
        assert_eq!(
            switcher.store().load("theme").unwrap(),
            Some("light".to_string())
        );
    }

    #[test]
    fn test_init_prefers_valid_persisted_value() {
        let mut store = MemoryStore::new();
        store.save("theme", "dark").unwrap();
        let switcher =
            ThemeSwitcher::with_backends(ThemeConfig::default(), MemorySurface::new(), store);
        assert_eq!(switcher.current_theme(), "dark");
    }

    #[test]
    fn test_init_ignores_persisted_value_outside_catalog() {
        let mut store = MemoryStore::new();
        store.save("theme", "neon").unwrap();
        let switcher =
            ThemeSwitcher::with_backends(ThemeConfig::default(), MemorySurface::new(), store);
        assert_eq!(switcher.current_theme(), "light");
    }

    #[test]
    fn test_set_theme_marks_exactly_one() {
        let mut switcher = switcher();
        switcher.set_theme("dark");
        assert_eq!(switcher.current_theme(), "dark");
        let catalog: Vec<String> = switcher.catalog().names().to_vec();
        assert_eq!(switcher.surface().active_marker_count(&catalog), 1);
        assert_eq!(switcher.surface().data_theme(), Some("dark"));
    }

    #[test]
    fn test_set_unknown_theme_is_a_logged_no_op() {
        let mut switcher = ThemeSwitcher::init(ThemeConfig::new().debug(true));
        switcher.clear_diagnostics();
        switcher.set_theme("neon");
        assert_eq!(switcher.current_theme(), "light");
        assert_eq!(
            switcher.store().load("theme").unwrap(),
            Some("light".to_string())
        );
        assert_eq!(
            switcher.diagnostics(),
            [Diagnostic::InvalidTheme {
                requested: "neon".to_string()
            }]
        );
    }

    #[test]
    fn test_toggle_is_a_two_cycle() {
        let mut switcher = switcher();
        switcher.toggle_theme(&["light", "dark"]);
        assert_eq!(switcher.current_theme(), "dark");
        switcher.toggle_theme(&["light", "dark"]);
        assert_eq!(switcher.current_theme(), "light");
    }

    #[test]
    fn test_toggle_tie_break_picks_first() {
        let mut switcher = ThemeSwitcher::init(
            ThemeConfig::new()
                .themes(["light", "dark", "sepia"])
                .default_theme("sepia"),
        );
        switcher.toggle_theme(&["light", "dark"]);
        assert_eq!(switcher.current_theme(), "light");
    }

    #[test]
    fn test_toggle_short_list_is_malformed() {
        let mut switcher = ThemeSwitcher::init(ThemeConfig::new().debug(true));
        switcher.clear_diagnostics();
        switcher.toggle_theme(&["light"]);
        assert_eq!(switcher.current_theme(), "light");
        assert!(matches!(
            switcher.diagnostics(),
            [Diagnostic::MissingTarget { .. }]
        ));
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut switcher =
            ThemeSwitcher::init(ThemeConfig::new().themes(["light", "dark", "sepia"]));
        switcher.set_theme("sepia");
        switcher.next_theme();
        assert_eq!(switcher.current_theme(), "light");
        switcher.previous_theme();
        assert_eq!(switcher.current_theme(), "sepia");
    }

    #[test]
    fn test_remove_theme_clears_marker_and_persists_empty() {
        let mut switcher = switcher();
        switcher.set_theme("dark");
        switcher.remove_theme();
        assert_eq!(switcher.current_theme(), "");
        assert_eq!(switcher.surface().data_theme(), None);
        assert_eq!(switcher.store().load("theme").unwrap(), Some(String::new()));
    }

    #[test]
    fn test_load_theme_grows_catalog_without_switching() {
        let mut switcher = switcher();
        let variables = BTreeMap::from([("--x".to_string(), "1".to_string())]);
        switcher.load_theme("custom", &variables);
        assert_eq!(switcher.current_theme(), "light");
        assert!(switcher.catalog().contains("custom"));
        assert!(switcher.surface().rule_for("custom").unwrap().contains("--x: 1;"));

        switcher.set_theme("custom");
        assert_eq!(switcher.current_theme(), "custom");
    }

    #[test]
    fn test_load_theme_is_idempotent() {
        let mut switcher = switcher();
        let variables = BTreeMap::new();
        switcher.load_theme("custom", &variables);
        switcher.load_theme("custom", &variables);
        assert_eq!(switcher.catalog().len(), 3);
    }

    #[test]
    fn test_custom_key_paths() {
        let mut switcher = switcher();
        switcher.set_theme_with_key("dark", Some("sidebar-theme"));
        // in-memory current always tracks the applied theme
        assert_eq!(switcher.current_theme(), "dark");
        assert_eq!(switcher.current_theme_for_key("sidebar-theme"), "dark");
        // the configured key still holds the init-time value
        assert_eq!(switcher.current_theme_for_key("theme"), "light");
        assert_eq!(switcher.current_theme_for_key("unused-key"), "");
    }

    #[test]
    fn test_callback_order_and_reentrancy() {
        let mut switcher = switcher();
        switcher.on_theme_change(|inner, theme| {
            // persistence completed before the callback ran
            assert_eq!(
                inner.store().load("theme").unwrap(),
                Some(theme.to_string())
            );
            if theme == "dark" {
                inner.set_theme("light");
            }
        });
        switcher.set_theme("dark");
        // the nested call completed, and did not recurse further
        assert_eq!(switcher.current_theme(), "light");
        assert_eq!(
            switcher.store().load("theme").unwrap(),
            Some("light".to_string())
        );
    }

    #[test]
    fn test_destroy_then_any_call_revives_with_defaults() {
        let mut switcher =
            ThemeSwitcher::init(ThemeConfig::new().themes(["sepia", "night"]).default_theme("sepia"));
        switcher.destroy();
        assert_eq!(switcher.lifecycle(), Lifecycle::Uninitialized);

        switcher.set_theme("dark");
        assert_eq!(switcher.lifecycle(), Lifecycle::Active);
        // revived with the default catalog, where "dark" is valid
        assert_eq!(switcher.current_theme(), "dark");
    }

    #[test]
    fn test_init_config_is_first_wins() {
        let mut switcher = switcher();
        switcher.init_config(ThemeConfig::new().default_theme("dark"));
        assert_eq!(switcher.current_theme(), "light");
        assert_eq!(switcher.config().default_theme, "light");
    }

    #[test]
    fn test_init_config_after_destroy_reconfigures() {
        let mut switcher = switcher();
        switcher.destroy();
        switcher.init_config(ThemeConfig::new().themes(["sepia", "night"]).default_theme("night"));
        assert_eq!(switcher.current_theme(), "night");
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("storage disabled".to_string()))
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("storage disabled".to_string()))
        }
    }

    #[test]
    fn test_store_failure_degrades_to_memory_state() {
        let mut switcher = ThemeSwitcher::with_backends(
            ThemeConfig::new().debug(true),
            MemorySurface::new(),
            FailingStore,
        );
        switcher.clear_diagnostics();
        switcher.set_theme("dark");
        assert_eq!(switcher.current_theme(), "dark");
        assert!(switcher.surface().has_class("dark"));
        assert!(matches!(
            switcher.diagnostics(),
            [Diagnostic::PersistenceFailure { .. }]
        ));
    }

    #[test]
    fn test_transition_hint_gated_on_duration() {
        let mut silent = ThemeSwitcher::init(ThemeConfig::new().transition_duration_ms(0));
        silent.set_theme("dark");
        assert_eq!(silent.surface().transition_hint(), None);

        let mut hinted = ThemeSwitcher::init(ThemeConfig::new().transition_duration_ms(150));
        hinted.set_theme("dark");
        assert_eq!(hinted.surface().transition_hint(), Some(150));
    }
}
