//! Typed intents decoded from the input channels.
//!
//! Every input channel (declarative attributes, programmatic calls,
//! gestures) funnels into one [`Intent`] value dispatched through the
//! controller's single entry point. The attribute vocabulary is fixed;
//! parsing happens at event time so attribute edits take effect without
//! re-registration.

use crate::dom::Element;

/// Marks an element as a fixed-theme setter; the value is the theme name.
pub const ATTR_SET: &str = "data-set-theme";
/// Marks an element as a toggle; the value is a comma-separated theme list.
pub const ATTR_TOGGLE: &str = "data-toggle-theme";
/// Marks a choice control; its selected value drives the theme.
pub const ATTR_CHOOSE: &str = "data-choose-theme";
/// Per-element storage-key override.
pub const ATTR_KEY: &str = "data-key";
/// Class toggled on switcher elements in lockstep with activation.
pub const ATTR_ACTIVE_CLASS: &str = "data-act-class";

/// A decoded request to change theme, independent of its input channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Apply a fixed theme.
    Set { theme: String, key: Option<String> },
    /// Cycle within an explicit theme list.
    Toggle { themes: Vec<String>, key: Option<String> },
    /// A choice control changed; an empty value means "remove the theme".
    Select { value: String, key: Option<String> },
    /// Advance to the next catalog theme, wrapping.
    Next,
    /// Step back to the previous catalog theme, wrapping.
    Previous,
    /// Clear the active marker and persist the empty preference.
    Remove { key: Option<String> },
}

/// Decodes the click intent carried by an element's current attributes.
///
/// `None` when the element carries no recognized marker, or a set marker
/// with an empty value (a no-op per the attribute contract).
pub fn click_intent(element: &Element) -> Option<Intent> {
    let key = element.get_attr(ATTR_KEY).map(str::to_string);
    if let Some(theme) = element.get_attr(ATTR_SET) {
        if theme.is_empty() {
            return None;
        }
        return Some(Intent::Set {
            theme: theme.to_string(),
            key,
        });
    }
    if let Some(list) = element.get_attr(ATTR_TOGGLE) {
        let themes: Vec<String> = list
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        return Some(Intent::Toggle { themes, key });
    }
    None
}

/// Decodes the change intent for a choice control carrying the choose
/// marker. `None` for elements without the marker.
pub fn change_intent(element: &Element, value: &str) -> Option<Intent> {
    element.get_attr(ATTR_CHOOSE)?;
    let key = element.get_attr(ATTR_KEY).map(str::to_string);
    Some(Intent::Select {
        value: value.to_string(),
        key,
    })
}
