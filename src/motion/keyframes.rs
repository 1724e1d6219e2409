use crate::motion::error::MotionError;

/// Values that can be blended along a keyframe segment.
pub trait Interpolate: Clone {
    /// Blend towards `to`; `t` is in `[0, 1]`.
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

/// One point on a piecewise-linear curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop<V> {
    pub at: f64,
    pub value: V,
}

/// A validated, strictly increasing list of stops for one visual channel.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes<V> {
    stops: Vec<Stop<V>>,
}

impl<V: Interpolate> Keyframes<V> {
    pub fn new(stops: impl IntoIterator<Item = (f64, V)>) -> Result<Self, MotionError> {
        let stops: Vec<Stop<V>> = stops
            .into_iter()
            .map(|(at, value)| Stop { at, value })
            .collect();

        if stops.is_empty() {
            return Err(MotionError::EmptyStops);
        }
        for (index, stop) in stops.iter().enumerate() {
            if !stop.at.is_finite() {
                return Err(MotionError::NonFiniteThreshold { index });
            }
            if index > 0 && stop.at <= stops[index - 1].at {
                return Err(MotionError::NonIncreasingThreshold {
                    index,
                    previous: stops[index - 1].at,
                    current: stop.at,
                });
            }
        }

        Ok(Keyframes { stops })
    }

    /// Evaluate the curve at progress `p`.
    ///
    /// Below the first threshold the first value is held, above the last
    /// threshold the last value is held. A sample that lands on a threshold
    /// returns that stop's value untouched.
    pub fn sample(&self, p: f64) -> V {
        // `new` guarantees at least one stop.
        let first = &self.stops[0];
        let last = &self.stops[self.stops.len() - 1];

        if p.is_nan() || p <= first.at {
            return first.value.clone();
        }
        if p >= last.at {
            return last.value.clone();
        }

        for pair in self.stops.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            if p == to.at {
                return to.value.clone();
            }
            if p < to.at {
                let t = (p - from.at) / (to.at - from.at);
                return from.value.interpolate(&to.value, t);
            }
        }

        last.value.clone()
    }
}
