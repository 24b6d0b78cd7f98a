use std::time::Duration;

use crate::easing::{Easing, Tween};

/// Pacing of a build pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Wait between two steps of the state machine.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub step_delay: Duration,
    /// Length of a swap transition. Steps are paced by `step_delay` only, so
    /// transitions are cut to at most `step_delay`.
    #[cfg_attr(feature = "serde", serde(with = "millis"))]
    pub swap_duration: Duration,
    pub easing: Easing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_secs(1),
            swap_duration: Duration::from_secs(1),
            easing: Easing::BounceOut,
        }
    }
}

impl Config {
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    pub fn with_swap_duration(mut self, duration: Duration) -> Self {
        self.swap_duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Transition used for swaps, never outlasting the step that follows it.
    pub fn swap_tween(&self) -> Tween {
        Tween::new(self.swap_duration.min(self.step_delay), self.easing)
    }
}

#[cfg(feature = "serde")]
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
