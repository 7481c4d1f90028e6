//! Back-and-forth animation of a single color channel.

use serde::{Deserialize, Serialize};

/// The setup parameters of a `ColorPulse`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseParams {
    /// The starting value.
    pub start: f32,
    /// The absolute amount added every frame.
    pub step: f32,
    /// The lower bound; once the value drops below it the direction turns positive.
    pub min: f32,
    /// The upper bound; once the value exceeds it the direction turns negative.
    pub max: f32,
}

impl Default for PulseParams {
    fn default() -> Self {
        PulseParams {
            start: 0.0,
            step: 0.05,
            min: 0.0,
            max: 1.0,
        }
    }
}

/// Oscillates a value between two bounds with a constant step.
///
/// The direction is only checked before each step, so the value may overshoot
/// a bound by at most one step before turning around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPulse {
    value: f32,
    increment: f32,
    min: f32,
    max: f32,
}

impl Default for ColorPulse {
    fn default() -> Self {
        ColorPulse::new(PulseParams::default())
    }
}

impl ColorPulse {
    pub fn new(params: PulseParams) -> Self {
        let step = params.step.abs();
        let (min, max) = if params.min <= params.max {
            (params.min, params.max)
        } else {
            (params.max, params.min)
        };

        ColorPulse {
            value: params.start,
            increment: step,
            min,
            max,
        }
    }

    /// Returns the current value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns the signed step that will be applied next if the value stays in bounds.
    #[inline]
    pub fn increment(&self) -> f32 {
        self.increment
    }

    /// Moves one step forward and returns the new value.
    pub fn advance(&mut self) -> f32 {
        if self.value > self.max {
            self.increment = -self.increment.abs();
        } else if self.value < self.min {
            self.increment = self.increment.abs();
        }

        self.value += self.increment;
        self.value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bounces_between_bounds() {
        let mut pulse = ColorPulse::default();
        assert_eq!(pulse.value(), 0.0);

        let mut peak = 0.0f32;
        let mut turned = false;
        for _ in 0..100 {
            let before = pulse.value();
            let after = pulse.advance();
            peak = peak.max(after);
            if after < before {
                turned = true;
                break;
            }
        }

        assert!(turned);
        assert!(peak > 1.0);
        assert!(peak <= 1.0 + 0.05 + 1e-4);
        assert!(pulse.increment() < 0.0);
    }

    #[test]
    fn turns_back_up_below_min() {
        let mut pulse = ColorPulse::new(PulseParams {
            start: -0.01,
            step: 0.1,
            min: 0.0,
            max: 1.0,
        });

        let v = pulse.advance();
        assert!((v - 0.09).abs() < 1e-6);
        assert!(pulse.increment() > 0.0);
    }

    #[test]
    fn swapped_bounds() {
        let pulse = ColorPulse::new(PulseParams {
            start: 0.5,
            step: -0.2,
            min: 1.0,
            max: 0.0,
        });

        assert_eq!(pulse.increment(), 0.2);
        assert_eq!(pulse.min, 0.0);
        assert_eq!(pulse.max, 1.0);
    }
}
