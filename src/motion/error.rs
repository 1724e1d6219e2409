use thiserror::Error;

/// Errors raised while building the hero's motion curves.
///
/// All of these come from build-time authored data, so they are reported
/// once at startup and never recovered from.
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("keyframe list is empty")]
    EmptyStops,

    #[error("keyframe {index} has a non-finite threshold")]
    NonFiniteThreshold { index: usize },

    #[error("keyframe {index} threshold {current} does not exceed previous threshold {previous}")]
    NonIncreasingThreshold {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("invalid color literal: {0:?}")]
    InvalidColor(String),

    #[error("invalid window: enter {enter}, exit {exit:?}")]
    InvalidWindow { enter: f64, exit: Option<f64> },

    #[error("channel `{channel}`: {source}")]
    Channel {
        channel: &'static str,
        #[source]
        source: Box<MotionError>,
    },

    #[error("calibration could not be parsed: {0}")]
    Calibration(#[from] serde_json::Error),
}

impl MotionError {
    pub fn in_channel(self, channel: &'static str) -> Self {
        MotionError::Channel {
            channel,
            source: Box::new(self),
        }
    }
}
