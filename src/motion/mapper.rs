use log::debug;

use crate::config::{HeroCalibration, DIAGNOSTICS};
use crate::motion::color::Rgb;
use crate::motion::error::MotionError;
use crate::motion::flags::{PinLatch, PinMode, Window};
use crate::motion::keyframes::Keyframes;
use crate::scroll::sink::StyleSink;

/// Custom property the hero backdrop reads its color from.
pub const BACKGROUND_PROPERTY: &str = "--hero-bg";

/// Everything the hero needs to paint one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualState {
    pub progress: f64,
    pub background: Rgb,
    pub logo_color: Rgb,
    pub hero_opacity: f64,
    pub hero_scale: f64,
    pub cards_opacity: f64,
    pub cards_offset: f64,
    pub cards_visible: bool,
    pub section_visible: bool,
    pub pin: PinMode,
}

impl VisualState {
    pub fn hero_style(&self) -> String {
        format!(
            "opacity: {}; transform: scale({});",
            self.hero_opacity, self.hero_scale
        )
    }

    pub fn cards_style(&self) -> String {
        let (display, pointer) = if self.cards_visible {
            ("flex", "auto")
        } else {
            ("none", "none")
        };
        format!(
            "display: {display}; pointer-events: {pointer}; opacity: {}; transform: translateY({}px);",
            self.cards_opacity, self.cards_offset
        )
    }

    pub fn pin_style(&self) -> String {
        format!("position: {};", self.pin.css_position())
    }

    pub fn section_display(&self) -> &'static str {
        if self.section_visible {
            "block"
        } else {
            "none"
        }
    }
}

/// Maps a scroll-progress scalar onto the hero's visual channels and flags.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollProgressMapper {
    span: f64,
    initial_background: Rgb,
    background: Keyframes<Rgb>,
    logo_color: Keyframes<Rgb>,
    hero_opacity: Keyframes<f64>,
    hero_scale: Keyframes<f64>,
    cards_opacity: Keyframes<f64>,
    cards_offset: Keyframes<f64>,
    cards_window: Window,
    section_window: Window,
    pin: PinLatch,
}

fn color_curve(
    channel: &'static str,
    stops: &[(f64, String)],
) -> Result<Keyframes<Rgb>, MotionError> {
    let parsed = stops
        .iter()
        .map(|(at, literal)| Ok((*at, literal.parse::<Rgb>()?)))
        .collect::<Result<Vec<_>, MotionError>>()
        .map_err(|e| e.in_channel(channel))?;
    Keyframes::new(parsed).map_err(|e| e.in_channel(channel))
}

fn scalar_curve(
    channel: &'static str,
    stops: &[(f64, f64)],
) -> Result<Keyframes<f64>, MotionError> {
    Keyframes::new(stops.iter().copied()).map_err(|e| e.in_channel(channel))
}

impl ScrollProgressMapper {
    pub fn new(calibration: &HeroCalibration) -> Result<Self, MotionError> {
        if !(calibration.progress_span.is_finite() && calibration.progress_span > 0.0) {
            return Err(MotionError::InvalidWindow {
                enter: 0.0,
                exit: Some(calibration.progress_span),
            }
            .in_channel("progress_span"));
        }

        Ok(ScrollProgressMapper {
            span: calibration.progress_span,
            initial_background: calibration
                .initial_background
                .parse::<Rgb>()
                .map_err(|e: MotionError| e.in_channel("initial_background"))?,
            background: color_curve("background", &calibration.background)?,
            logo_color: color_curve("logo_color", &calibration.logo_color)?,
            hero_opacity: scalar_curve("hero_opacity", &calibration.hero_opacity)?,
            hero_scale: scalar_curve("hero_scale", &calibration.hero_scale)?,
            cards_opacity: scalar_curve("cards_opacity", &calibration.cards_opacity)?,
            cards_offset: scalar_curve("cards_offset", &calibration.cards_offset)?,
            cards_window: calibration
                .cards_window
                .validated()
                .map_err(|e| e.in_channel("cards_window"))?,
            section_window: calibration
                .section_window
                .validated()
                .map_err(|e| e.in_channel("section_window"))?,
            pin: PinLatch::new(calibration.pin_release).map_err(|e| e.in_channel("pin_release"))?,
        })
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    pub fn initial_background(&self) -> Rgb {
        self.initial_background
    }

    fn evaluate(&self, p: f64, pin: PinMode) -> VisualState {
        VisualState {
            progress: p,
            background: self.background.sample(p),
            logo_color: self.logo_color.sample(p),
            hero_opacity: self.hero_opacity.sample(p),
            hero_scale: self.hero_scale.sample(p),
            cards_opacity: self.cards_opacity.sample(p),
            cards_offset: self.cards_offset.sample(p),
            // Flags come from the raw scalar, never from interpolated output.
            cards_visible: self.cards_window.contains(p),
            section_visible: self.section_window.contains(p),
            pin,
        }
    }

    /// Compute the state for the latest sample. Each call supersedes the
    /// previous one.
    pub fn map(&mut self, p: f64) -> VisualState {
        let (pin, changed) = self.pin.observe(p);
        if changed && DIAGNOSTICS {
            debug!("hero pin switched to {:?} at progress {:.3}", pin, p);
        }
        self.evaluate(p, pin)
    }

    /// Like [`map`](Self::map), additionally publishing the background
    /// color to `sink` so a backdrop can follow it without a re-render.
    pub fn map_into<S: StyleSink + ?Sized>(&mut self, p: f64, sink: &S) -> VisualState {
        let state = self.map(p);
        sink.publish(BACKGROUND_PROPERTY, &state.background.to_string());
        state
    }

    /// Static state used before the first sample and whenever the tracked
    /// element cannot be measured.
    pub fn resting_state(&self) -> VisualState {
        VisualState {
            background: self.initial_background,
            ..self.evaluate(0.0, PinMode::Pinned)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::hero_calibration;
    use crate::scroll::sink::RecordingSink;

    fn mapper() -> ScrollProgressMapper {
        ScrollProgressMapper::new(&hero_calibration().unwrap()).unwrap()
    }

    #[test]
    fn start_of_scroll() {
        let state = mapper().map(0.0);
        assert_eq!(state.background, Rgb::WHITE);
        assert_eq!(state.logo_color, Rgb::BLACK);
        assert_eq!(state.hero_opacity, 1.0);
        assert_eq!(state.hero_scale, 1.0);
        assert_eq!(state.cards_opacity, 0.0);
        assert_eq!(state.cards_offset, 24.0);
        assert!(!state.cards_visible);
        assert!(!state.section_visible);
        assert_eq!(state.pin, PinMode::Pinned);
    }

    #[test]
    fn background_is_gray_at_midpoint() {
        let state = mapper().map(0.2);
        assert_eq!(state.background.to_string(), "#808080");
        assert_eq!(state.logo_color.to_string(), "#808080");
    }

    #[test]
    fn cards_visible_only_inside_window() {
        let mut mapper = mapper();
        let cases = [
            (0.49, false),
            (0.5, true),
            (0.7, true),
            (0.9499, true),
            (0.95, false),
            (1.0, false),
        ];
        for (p, expected) in cases {
            assert_eq!(mapper.map(p).cards_visible, expected, "p = {p}");
        }
    }

    #[test]
    fn cards_flag_ignores_interpolated_opacity() {
        let mut mapper = mapper();
        // Opacity is exactly zero at the window's entry, yet the flag is up.
        let state = mapper.map(0.5);
        assert_eq!(state.cards_opacity, 0.0);
        assert!(state.cards_visible);
        // Opacity is fully up at 0.95, yet the flag is down.
        let state = mapper.map(0.95);
        assert_eq!(state.cards_opacity, 1.0);
        assert!(!state.cards_visible);
    }

    #[test]
    fn pin_releases_with_about_section() {
        let mut mapper = mapper();
        let pinned = mapper.map(0.89);
        assert_eq!(pinned.pin, PinMode::Pinned);
        assert!(!pinned.section_visible);

        let released = mapper.map(0.9);
        assert_eq!(released.pin, PinMode::Released);
        assert!(released.section_visible);
        assert_eq!(released.pin_style(), "position: relative;");
    }

    #[test]
    fn reverse_scroll_reproduces_forward_states() {
        let mut mapper = mapper();
        let samples: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
        let forward: Vec<VisualState> = samples.iter().map(|p| mapper.map(*p)).collect();
        let backward: Vec<VisualState> = samples.iter().rev().map(|p| mapper.map(*p)).collect();

        for (a, b) in forward.iter().zip(backward.iter().rev()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn map_into_publishes_background() {
        let sink = RecordingSink::default();
        let mut mapper = mapper();
        mapper.map_into(0.2, &sink);
        mapper.map_into(0.4, &sink);
        assert_eq!(
            sink.take(),
            vec![
                (BACKGROUND_PROPERTY.to_string(), "#808080".to_string()),
                (BACKGROUND_PROPERTY.to_string(), "#000000".to_string()),
            ]
        );
    }

    #[test]
    fn resting_state_uses_initial_background() {
        let state = mapper().resting_state();
        assert_eq!(state.background.to_string(), "#fbfaf8");
        assert_eq!(state.hero_opacity, 1.0);
        assert_eq!(state.pin, PinMode::Pinned);
        assert!(!state.cards_visible);
    }

    #[test]
    fn hidden_cards_drop_pointer_events() {
        let style = mapper().map(0.2).cards_style();
        assert!(style.starts_with("display: none; pointer-events: none;"));
    }

    #[test]
    fn bad_channel_is_named_in_error() {
        let mut calibration = hero_calibration().unwrap();
        calibration.cards_offset = vec![(0.8, 0.0), (0.5, 24.0)];
        let err = ScrollProgressMapper::new(&calibration).unwrap_err();
        assert!(matches!(err, MotionError::Channel { channel: "cards_offset", .. }));
        assert!(err.to_string().starts_with("channel `cards_offset`"));
    }

    #[test]
    fn bad_color_is_rejected() {
        let mut calibration = hero_calibration().unwrap();
        calibration.logo_color[0].1 = "black".to_string();
        assert!(matches!(
            ScrollProgressMapper::new(&calibration),
            Err(MotionError::Channel { channel: "logo_color", .. })
        ));
    }

    #[test]
    fn empty_channel_is_rejected() {
        let mut calibration = hero_calibration().unwrap();
        calibration.hero_opacity.clear();
        assert!(ScrollProgressMapper::new(&calibration).is_err());
    }

    #[test]
    fn extended_span_is_accepted() {
        let mut calibration = hero_calibration().unwrap();
        calibration.progress_span = 2.0;
        calibration.pin_release = 1.8;
        let mut mapper = ScrollProgressMapper::new(&calibration).unwrap();
        assert_eq!(mapper.span(), 2.0);
        assert_eq!(mapper.map(1.5).pin, PinMode::Pinned);
        assert_eq!(mapper.map(1.9).pin, PinMode::Released);
    }

    #[test]
    fn zero_span_is_rejected() {
        let mut calibration = hero_calibration().unwrap();
        calibration.progress_span = 0.0;
        assert!(ScrollProgressMapper::new(&calibration).is_err());
    }
}
