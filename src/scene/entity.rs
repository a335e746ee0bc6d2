use crate::{
    animation::{ease::Ease, phase::seed_phase, timeline::Timeline},
    foundation::core::{BezPath, Rgba8Premul},
    geometry::wave::{WaveParams, wave_path},
    scene::data::ItemKey,
};

/// Fill of a wave while hovered. Hovered waves are never stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverStyle {
    pub fill: Rgba8Premul,
    pub opacity: f32,
    pub line_width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveStyle {
    pub fill: Rgba8Premul,
    pub opacity: f32,
    pub hover: Option<HoverStyle>,
}

/// How a shape change is animated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Tween {
    pub(crate) duration_ms: f64,
    pub(crate) ease: Ease,
}

/// A wave bound to one datum, kept alive across renders while its key persists.
///
/// The shape timeline carries level, amplitude, wavelength and radius transitions; the phase
/// timeline carries the scrolling loop. [`WaveEntity::params_at`] merges both.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveEntity {
    key: Option<ItemKey>,
    index: usize,
    value: f64,
    shape: Timeline<WaveParams>,
    phase: Timeline<f64>,
    style: WaveStyle,
}

impl WaveEntity {
    /// A new wave that rises in from an empty vessel to `target`.
    pub(crate) fn entering(
        key: Option<ItemKey>,
        index: usize,
        value: f64,
        target: WaveParams,
        style: WaveStyle,
        tween: Tween,
        now_ms: f64,
    ) -> Self {
        let from = WaveParams {
            water_level: target.radius,
            ..target
        };
        Self {
            key,
            index,
            value,
            shape: Timeline::tween(from, target, now_ms, tween.duration_ms, tween.ease),
            phase: Timeline::hold(seed_phase(target.phase, index), now_ms),
            style,
        }
    }

    /// Move towards `target` from whatever shape is showing at `now_ms`.
    ///
    /// The shape phase is carried over; motion is owned by the phase timeline.
    pub(crate) fn retarget(
        &mut self,
        index: usize,
        value: f64,
        target: WaveParams,
        style: WaveStyle,
        tween: Tween,
        now_ms: f64,
    ) {
        let from = self.shape.sample(now_ms);
        let target = WaveParams {
            phase: from.phase,
            ..target
        };
        self.shape = Timeline::tween(from, target, now_ms, tween.duration_ms, tween.ease);
        self.index = index;
        self.value = value;
        self.style = style;
    }

    pub(crate) fn replace_phase(&mut self, timeline: Timeline<f64>) {
        self.phase = timeline;
    }

    pub fn key(&self) -> Option<&ItemKey> {
        self.key.as_ref()
    }

    /// Rank in the data set of the last render.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn style(&self) -> &WaveStyle {
        &self.style
    }

    pub fn shape_timeline(&self) -> &Timeline<WaveParams> {
        &self.shape
    }

    pub fn phase_timeline(&self) -> &Timeline<f64> {
        &self.phase
    }

    pub fn phase_at(&self, now_ms: f64) -> f64 {
        self.phase.sample(now_ms)
    }

    pub fn params_at(&self, now_ms: f64) -> WaveParams {
        WaveParams {
            phase: self.phase.sample(now_ms),
            ..self.shape.sample(now_ms)
        }
    }

    pub fn path_at(&self, now_ms: f64) -> BezPath {
        wave_path(&self.params_at(now_ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/entity.rs"]
mod tests;
