use serde::Deserialize;

use crate::motion::error::MotionError;

/// Half-open progress range `[enter, exit)` in which a flag is raised.
/// A missing `exit` leaves the range open to the end of the document.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Window {
    pub enter: f64,
    #[serde(default)]
    pub exit: Option<f64>,
}

impl Window {
    pub fn validated(self) -> Result<Self, MotionError> {
        let bad_exit = match self.exit {
            Some(exit) => exit.is_nan() || exit <= self.enter,
            None => false,
        };
        if !self.enter.is_finite() || bad_exit {
            return Err(MotionError::InvalidWindow {
                enter: self.enter,
                exit: self.exit,
            });
        }
        Ok(self)
    }

    pub fn contains(&self, p: f64) -> bool {
        self.enter <= p && self.exit.map_or(true, |exit| p < exit)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinMode {
    /// Held in the viewport (`position: sticky`).
    Pinned,
    /// Flowing with the rest of the document (`position: relative`).
    Released,
}

impl PinMode {
    pub fn css_position(self) -> &'static str {
        match self {
            PinMode::Pinned => "sticky",
            PinMode::Released => "relative",
        }
    }
}

/// Switches a container out of pinned layout once progress crosses the
/// release threshold, and back in when a reverse scroll drops below it.
#[derive(Clone, Debug, PartialEq)]
pub struct PinLatch {
    release_at: f64,
    mode: PinMode,
}

impl PinLatch {
    pub fn new(release_at: f64) -> Result<Self, MotionError> {
        if !release_at.is_finite() {
            return Err(MotionError::InvalidWindow {
                enter: release_at,
                exit: None,
            });
        }
        Ok(PinLatch {
            release_at,
            mode: PinMode::Pinned,
        })
    }

    /// Feed the latest progress sample. Returns the mode and whether it
    /// flipped on this sample.
    pub fn observe(&mut self, p: f64) -> (PinMode, bool) {
        let next = if p >= self.release_at {
            PinMode::Released
        } else {
            PinMode::Pinned
        };
        let changed = next != self.mode;
        self.mode = next;
        (next, changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(enter: f64, exit: Option<f64>) -> Result<Window, MotionError> {
        Window { enter, exit }.validated()
    }

    #[test]
    fn window_is_half_open() {
        let cards = window(0.5, Some(0.95)).unwrap();
        assert!(!cards.contains(0.49));
        assert!(cards.contains(0.5));
        assert!(cards.contains(0.94));
        assert!(!cards.contains(0.95));
        assert!(!cards.contains(1.0));
    }

    #[test]
    fn open_window_never_closes() {
        let tail = window(0.9, None).unwrap();
        assert!(!tail.contains(0.89));
        assert!(tail.contains(0.9));
        assert!(tail.contains(2.0));
    }

    #[test]
    fn nan_is_outside_every_window() {
        assert!(!window(0.0, None).unwrap().contains(f64::NAN));
    }

    #[test]
    fn rejects_inverted_or_empty_windows() {
        assert!(window(0.5, Some(0.5)).is_err());
        assert!(window(0.5, Some(0.1)).is_err());
        assert!(window(f64::NAN, None).is_err());
        assert!(window(0.0, Some(f64::NAN)).is_err());
    }

    #[test]
    fn latch_releases_forward_and_repins_on_reverse() {
        let mut latch = PinLatch::new(0.9).unwrap();
        assert_eq!(latch.observe(0.3), (PinMode::Pinned, false));
        assert_eq!(latch.observe(0.9), (PinMode::Released, true));
        assert_eq!(latch.observe(0.97), (PinMode::Released, false));
        assert_eq!(latch.observe(0.89), (PinMode::Pinned, true));
        assert_eq!(latch.observe(0.0), (PinMode::Pinned, false));
    }

    #[test]
    fn css_positions() {
        assert_eq!(PinMode::Pinned.css_position(), "sticky");
        assert_eq!(PinMode::Released.css_position(), "relative");
    }
}
