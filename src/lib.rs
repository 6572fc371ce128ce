//! Embeddable theme switching with persistence and OS color-scheme
//! detection.
//!
//! This crate provides:
//!
//! - [`ThemeSwitcher`]: the controller, an explicit state machine owning
//!   the current theme and its lifecycle
//! - [`ThemeConfig`]: configuration with defaults and fluent overrides
//! - [`ThemeCatalog`]: the ordered set of valid theme names
//! - [`Surface`] / [`MemorySurface`]: where markers and style rules land
//! - [`PreferenceStore`] / [`MemoryStore`] / [`JsonFileStore`]: persistence
//! - [`Intent`] and [`Element`]: the declarative-attribute input channel
//! - [`SwipeTracker`]: touch swipe recognition
//! - [`system_prefers_dark`]: the OS color-scheme probe
//!
//! Three input channels (declarative attributes on registered elements,
//! programmatic calls, touch gestures) drive one state machine; two
//! effects (a theme marker on the surface, a persisted preference string)
//! come out, in a fixed order, followed by the change callback. Invalid
//! input never raises: unknown themes, failing storage and malformed
//! declarative targets degrade to "nothing changed" and are visible only
//! on the debug log.
//!
//! # Example
//!
//! ```rust
//! use themeshift::{Element, ThemeConfig, ThemeSwitcher};
//!
//! let mut switcher = ThemeSwitcher::init(
//!     ThemeConfig::new().themes(["light", "dark", "sepia"]),
//! );
//!
//! // programmatic channel
//! switcher.set_theme("dark");
//! assert!(switcher.is_dark_mode());
//!
//! // declarative channel
//! switcher.insert_element(
//!     "toggle-btn",
//!     Element::new("button").attr("data-toggle-theme", "light,dark"),
//! );
//! switcher.click("toggle-btn");
//! assert_eq!(switcher.current_theme(), "light");
//! ```

pub mod catalog;
pub mod config;
pub mod debug;
pub mod dom;
pub mod gesture;
pub mod intent;
pub mod rules;
pub mod store;
pub mod surface;
pub mod switcher;
pub mod system;

pub use catalog::ThemeCatalog;
pub use config::{ThemeConfig, DEFAULT_TOUCH_THRESHOLD_PX};
pub use debug::{DebugLog, Diagnostic};
pub use dom::Element;
pub use gesture::{SwipeDirection, SwipeTracker};
pub use intent::{
    Intent, ATTR_ACTIVE_CLASS, ATTR_CHOOSE, ATTR_KEY, ATTR_SET, ATTR_TOGGLE,
};
pub use rules::ThemeDefinition;
pub use store::{JsonFileStore, MemoryStore, PreferenceStore, StoreError};
pub use surface::{MemorySurface, Surface};
pub use switcher::{
    Lifecycle, SwitcherConfig, SwitcherKind, ThemeSwitcher, DARK_THEME,
};
pub use system::{set_mode_detector, system_prefers_dark, ColorMode};
