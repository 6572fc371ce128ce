//! System color-scheme probe.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// The color mode reported by the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to decide whether the user prefers dark.
///
/// This is useful for testing or when you want to force a specific color
/// mode. Process-wide: affects every switcher in the process.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// One-shot probe of the OS color-scheme preference.
///
/// Stateless aside from the overridable detector; the result is read fresh
/// on every call.
pub fn system_prefers_dark() -> bool {
    detect_color_mode() == ColorMode::Dark
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_mode() {
        OsMode::Dark => ColorMode::Dark,
        OsMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(mode_detector)]
    fn test_detector_override() {
        set_mode_detector(|| ColorMode::Dark);
        assert!(system_prefers_dark());

        set_mode_detector(|| ColorMode::Light);
        assert!(!system_prefers_dark());
    }

    #[test]
    #[serial(mode_detector)]
    fn test_probe_reads_fresh_each_call() {
        set_mode_detector(|| ColorMode::Dark);
        assert_eq!(detect_color_mode(), ColorMode::Dark);
        set_mode_detector(|| ColorMode::Light);
        assert_eq!(detect_color_mode(), ColorMode::Light);
    }
}
