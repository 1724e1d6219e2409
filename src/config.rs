use serde::Deserialize;

use crate::motion::error::MotionError;
use crate::motion::flags::Window;

/// Per-frame motion values are only logged when built with
/// `--features diagnostics`.
pub const DIAGNOSTICS: bool = cfg!(feature = "diagnostics");

const HERO_CALIBRATION: &str = include_str!("../config/hero.json");

/// Calibration data for the pinned hero. Variants of the section differ
/// only in these numbers.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroCalibration {
    /// Upper bound of the progress scalar (1.0 or 2.0 for long documents).
    #[serde(default = "default_span")]
    pub progress_span: f64,
    pub container_height_vh: u32,
    pub initial_background: String,
    pub background: Vec<(f64, String)>,
    pub logo_color: Vec<(f64, String)>,
    pub hero_opacity: Vec<(f64, f64)>,
    pub hero_scale: Vec<(f64, f64)>,
    pub cards_opacity: Vec<(f64, f64)>,
    pub cards_offset: Vec<(f64, f64)>,
    pub cards_window: Window,
    pub section_window: Window,
    pub pin_release: f64,
}

fn default_span() -> f64 {
    1.0
}

impl HeroCalibration {
    pub fn from_json(source: &str) -> Result<Self, MotionError> {
        Ok(serde_json::from_str(source)?)
    }
}

pub fn hero_calibration() -> Result<HeroCalibration, MotionError> {
    HeroCalibration::from_json(HERO_CALIBRATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_calibration_parses() {
        let calibration = hero_calibration().unwrap();
        assert_eq!(calibration.progress_span, 1.0);
        assert_eq!(calibration.container_height_vh, 600);
        assert_eq!(calibration.cards_window, Window { enter: 0.5, exit: Some(0.95) });
        assert_eq!(calibration.section_window.exit, None);
        assert_eq!(calibration.background[1], (0.4, "#000000".to_string()));
    }

    #[test]
    fn span_defaults_to_one() {
        let mut value: serde_json::Value = serde_json::from_str(HERO_CALIBRATION).unwrap();
        value.as_object_mut().unwrap().remove("progress_span");
        let calibration = HeroCalibration::from_json(&value.to_string()).unwrap();
        assert_eq!(calibration.progress_span, 1.0);
    }

    #[test]
    fn malformed_json_is_a_calibration_error() {
        assert!(matches!(
            HeroCalibration::from_json("{\"progress_span\": }"),
            Err(MotionError::Calibration(_))
        ));
    }
}
