//! Controller configuration.

use serde::Deserialize;

/// Default touch-gesture distance threshold, in pixels.
pub const DEFAULT_TOUCH_THRESHOLD_PX: f64 = 50.0;

/// Configuration for a [`ThemeSwitcher`](crate::ThemeSwitcher).
///
/// Every field has a default; fluent setters override fields one at a time,
/// with lists replacing wholesale rather than merging. The struct also
/// deserializes from JSON/TOML-style data with missing fields filled from
/// the defaults, so hosts can load it from a config file.
///
/// The change callback is registered on the controller itself (see
/// [`ThemeSwitcher::on_theme_change`](crate::ThemeSwitcher::on_theme_change))
/// because it borrows the controller re-entrantly.
///
/// # Example
///
/// ```rust
/// use themeshift::ThemeConfig;
///
/// let config = ThemeConfig::new()
///     .default_theme("dark")
///     .themes(["light", "dark", "sepia"])
///     .enable_touch_gestures(true);
/// assert_eq!(config.storage_key, "theme");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme applied when no persisted or system preference wins.
    pub default_theme: String,
    /// Key under which the chosen theme is persisted.
    pub storage_key: String,
    /// Consult the OS color-scheme probe when no valid value is persisted.
    pub enable_system_preference: bool,
    /// Transition hint forwarded to the surface; 0 disables the hint.
    pub transition_duration_ms: u64,
    /// The theme catalog, in order.
    pub themes: Vec<String>,
    /// Record and emit diagnostics.
    pub debug: bool,
    /// Recognize touch swipe gestures.
    pub enable_touch_gestures: bool,
    /// Minimum horizontal travel for a swipe to register.
    pub touch_threshold_px: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: "light".to_string(),
            storage_key: "theme".to_string(),
            enable_system_preference: false,
            transition_duration_ms: 300,
            themes: vec!["light".to_string(), "dark".to_string()],
            debug: false,
            enable_touch_gestures: false,
            touch_threshold_px: DEFAULT_TOUCH_THRESHOLD_PX,
        }
    }
}

impl ThemeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_theme<S: Into<String>>(mut self, name: S) -> Self {
        self.default_theme = name.into();
        self
    }

    pub fn storage_key<S: Into<String>>(mut self, key: S) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn enable_system_preference(mut self, enabled: bool) -> Self {
        self.enable_system_preference = enabled;
        self
    }

    pub fn transition_duration_ms(mut self, duration: u64) -> Self {
        self.transition_duration_ms = duration;
        self
    }

    /// Replaces the theme catalog wholesale.
    pub fn themes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.themes = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn enable_touch_gestures(mut self, enabled: bool) -> Self {
        self.enable_touch_gestures = enabled;
        self
    }

    pub fn touch_threshold_px(mut self, threshold: f64) -> Self {
        self.touch_threshold_px = threshold;
        self
    }
}
