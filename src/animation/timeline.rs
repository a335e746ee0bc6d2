use crate::{
    animation::ease::Ease,
    foundation::error::{LiquidError, LiquidResult},
};

/// Interpolation contract for animated values.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// One key of a [`Timeline`], positioned relative to the timeline start.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe<T> {
    pub at_ms: f64,
    pub value: T,
    pub ease: Ease, // ease applied toward next key
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Play once and hold the last key.
    Once,
    /// Restart from the first key every `last.at_ms` milliseconds.
    Loop,
}

/// Keyframed value anchored at an absolute host time.
///
/// A timeline always has at least one key; constructors enforce it so sampling is infallible.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<T> {
    start_ms: f64,
    keys: Vec<Keyframe<T>>, // sorted by at_ms, non-empty
    playback: Playback,
}

impl<T> Timeline<T>
where
    T: Lerp + Clone,
{
    /// A constant timeline.
    pub fn hold(value: T, start_ms: f64) -> Self {
        Self {
            start_ms,
            keys: vec![Keyframe {
                at_ms: 0.0,
                value,
                ease: Ease::Linear,
            }],
            playback: Playback::Once,
        }
    }

    /// Transition from `from` to `to` over `duration_ms`; zero or invalid durations snap.
    pub fn tween(from: T, to: T, start_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        if !(duration_ms.is_finite() && duration_ms > 0.0) {
            return Self::hold(to, start_ms);
        }
        Self {
            start_ms,
            keys: vec![
                Keyframe {
                    at_ms: 0.0,
                    value: from,
                    ease,
                },
                Keyframe {
                    at_ms: duration_ms,
                    value: to,
                    ease: Ease::Linear,
                },
            ],
            playback: Playback::Once,
        }
    }

    /// Build from explicit keys, validating order and loop period.
    pub fn from_keys(
        keys: Vec<Keyframe<T>>,
        start_ms: f64,
        playback: Playback,
    ) -> LiquidResult<Self> {
        let tl = Self {
            start_ms,
            keys,
            playback,
        };
        tl.validate()?;
        Ok(tl)
    }

    pub fn validate(&self) -> LiquidResult<()> {
        if self.keys.is_empty() {
            return Err(LiquidError::animation("timeline must have at least one key"));
        }
        if !self.start_ms.is_finite() || self.keys.iter().any(|k| !k.at_ms.is_finite()) {
            return Err(LiquidError::animation("timeline times must be finite"));
        }
        if !self.keys.windows(2).all(|w| w[0].at_ms <= w[1].at_ms) {
            return Err(LiquidError::animation("timeline keys must be sorted by time"));
        }
        if self.playback == Playback::Loop && self.duration_ms() <= 0.0 {
            return Err(LiquidError::animation("looping timeline period must be > 0"));
        }
        Ok(())
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn keys(&self) -> &[Keyframe<T>] {
        &self.keys
    }

    /// Time of the last key; the loop period for looping timelines.
    pub fn duration_ms(&self) -> f64 {
        self.keys.last().map_or(0.0, |k| k.at_ms)
    }

    /// Value the timeline settles on (or restarts from, when looping).
    pub fn target(&self) -> &T {
        &self.keys[self.keys.len() - 1].value
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.playback == Playback::Once && now_ms - self.start_ms >= self.duration_ms()
    }

    pub fn sample(&self, now_ms: f64) -> T {
        let mut local = now_ms - self.start_ms;
        if local.is_nan() || local <= 0.0 {
            return self.keys[0].value.clone();
        }

        let period = self.duration_ms();
        if self.playback == Playback::Loop && period > 0.0 {
            local = local.rem_euclid(period);
        }

        let idx = self.keys.partition_point(|k| k.at_ms <= local);
        if idx == 0 {
            return self.keys[0].value.clone();
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value.clone();
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at_ms - a.at_ms;
        if span <= 0.0 {
            return a.value.clone();
        }

        let t = (local - a.at_ms) / span;
        T::lerp(&a.value, &b.value, a.ease.apply(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
