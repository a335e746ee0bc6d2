//! Looping phase timelines that scroll a wave surface sideways.
//!
//! A cycle is three linear keys (`φ₀`, `φ₀+δ`, `φ₀+2δ`). With `δ = ±π` one cycle advances the
//! phase by a full period, so restarting the loop is invisible in the generated path.

use std::{
    f64::consts::{FRAC_PI_3, FRAC_PI_4, PI},
    fmt,
    sync::Arc,
};

use crate::{
    animation::{
        ease::Ease,
        timeline::{Keyframe, Playback, Timeline},
    },
    foundation::error::{LiquidError, LiquidResult},
    scene::entity::WaveEntity,
};

/// Cycle duration used when the series does not configure one.
pub const DEFAULT_SPEED_MS: f64 = 5000.0;

/// Scroll direction of a wave surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Right,
    Left,
    None,
}

impl Direction {
    pub fn parse(raw: &str) -> LiquidResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            "none" => Ok(Self::None),
            other => Err(LiquidError::config(format!(
                "unknown wave direction '{other}'"
            ))),
        }
    }

    /// Resolve a configured direction. Absent means `Right`; an unknown value is reported and
    /// the wave stands still.
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Right;
        };
        Self::parse(raw).unwrap_or_else(|e| {
            tracing::error!(error = %e, "illegal direction value for liquid fill");
            Self::None
        })
    }

    /// Phase change over half a cycle.
    pub fn phase_delta(self) -> f64 {
        match self {
            Self::Right => PI,
            Self::Left => -PI,
            Self::None => 0.0,
        }
    }
}

/// Signature of a caller-supplied cycle duration: `(value, index) -> ms`.
pub type SpeedFn = dyn Fn(f64, usize) -> f64 + Send + Sync;

/// How long one phase cycle lasts, in milliseconds.
#[derive(Clone)]
pub enum Speed {
    /// Base duration shortened by rank, see [`ranked_speed`].
    Ranked(f64),
    /// Duration computed per datum.
    Custom(Arc<SpeedFn>),
}

impl Speed {
    pub fn custom(f: impl Fn(f64, usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    pub fn resolve(&self, value: f64, index: usize, count: usize) -> f64 {
        match self {
            Self::Ranked(base) => ranked_speed(*base, index, count),
            Self::Custom(f) => f(value, index),
        }
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::Ranked(DEFAULT_SPEED_MS)
    }
}

impl fmt::Debug for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ranked(base) => f.debug_tuple("Ranked").field(base).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Speed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::Ranked)
    }
}

/// `base * (0.2 + (count - index) / count * 0.8)`: the first wave takes the full duration and
/// each later one cycles faster, down to a fifth of `base`.
pub fn ranked_speed(base: f64, index: usize, count: usize) -> f64 {
    if count == 0 {
        return base;
    }
    let n = count as f64;
    base * (0.2 + (n - index as f64) / n * 0.8)
}

/// Shape phase for a datum without a configured one.
pub fn default_shape_phase(index: usize) -> f64 {
    index as f64 * FRAC_PI_4
}

/// Animator seed for a new wave: its shape phase, or `index * π/3` when that is zero.
pub fn seed_phase(shape_phase: f64, index: usize) -> f64 {
    if shape_phase == 0.0 {
        index as f64 * FRAC_PI_3
    } else {
        shape_phase
    }
}

/// Build the looping cycle starting at `phase0`. An unusable period holds the phase instead.
pub fn phase_loop(phase0: f64, delta: f64, period_ms: f64, start_ms: f64) -> Timeline<f64> {
    if !(period_ms.is_finite() && period_ms > 0.0) {
        tracing::warn!(period_ms, "wave speed must be a positive duration; holding phase");
        return Timeline::hold(phase0, start_ms);
    }

    let key = |at_ms: f64, value: f64| Keyframe {
        at_ms,
        value,
        ease: Ease::Linear,
    };
    let keys = vec![
        key(0.0, phase0),
        key(period_ms / 2.0, phase0 + delta),
        key(period_ms, phase0 + 2.0 * delta),
    ];
    Timeline::from_keys(keys, start_ms, Playback::Loop).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid phase loop; holding phase");
        Timeline::hold(phase0, start_ms)
    })
}

/// Resolved motion for one wave in one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseMotion {
    pub direction: Direction,
    pub period_ms: f64,
}

/// Replace the entity's phase timeline with a new loop that starts from the phase it shows at
/// `now_ms`.
pub fn drive(entity: &mut WaveEntity, motion: PhaseMotion, now_ms: f64) {
    let phase0 = entity.phase_at(now_ms);
    let timeline = phase_loop(
        phase0,
        motion.direction.phase_delta(),
        motion.period_ms,
        now_ms,
    );
    entity.replace_phase(timeline);
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
