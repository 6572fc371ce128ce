//! Swipe recognition from touch pointer samples.

use crate::config::DEFAULT_TOUCH_THRESHOLD_PX;

/// Horizontal swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
struct GestureSample {
    start_x: f64,
    start_y: f64,
    resolved: bool,
}

/// Tracks one in-flight touch gesture.
///
/// Both recognition styles share one rule: fire at most once per gesture,
/// and only when the horizontal travel exceeds the threshold AND dominates
/// the vertical travel (|Δx| > |Δy|), so diagonal or vertical motion never
/// triggers. [`finish`](SwipeTracker::finish) resets the gesture state
/// whether or not a swipe fired.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f64,
    sample: Option<GestureSample>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            sample: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Captures the gesture start point and clears the fired flag.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.sample = Some(GestureSample {
            start_x: x,
            start_y: y,
            resolved: false,
        });
    }

    /// Live-motion recognition against the current pointer position.
    pub fn update(&mut self, x: f64, y: f64) -> Option<SwipeDirection> {
        self.resolve(x, y)
    }

    /// End-of-touch recognition; always discards the gesture state.
    pub fn finish(&mut self, x: f64, y: f64) -> Option<SwipeDirection> {
        let direction = self.resolve(x, y);
        self.sample = None;
        direction
    }

    fn resolve(&mut self, x: f64, y: f64) -> Option<SwipeDirection> {
        let sample = self.sample.as_mut()?;
        if sample.resolved {
            return None;
        }
        let dx = x - sample.start_x;
        let dy = y - sample.start_y;
        if dx.abs() > self.threshold && dx.abs() > dy.abs() {
            sample.resolved = true;
            Some(if dx > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            })
        } else {
            None
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_THRESHOLD_PX)
    }
}
