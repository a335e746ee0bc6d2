//! Liquid-fill gauge scene construction.
//!
//! A [`LiquidFill`] turns a [`SeriesConfig`] and a [`DataSet`] of fill fractions into a retained
//! scene: a circular vessel with a border ring and background disc, one animated wave per datum,
//! and a percentage label that changes color where it overlaps the liquid.
//!
//! Call [`LiquidFill::render`] whenever the configuration or data change. Waves whose key
//! persists are retargeted without restarting their motion, new waves rise in from the bottom,
//! and removed waves disappear. Call [`LiquidFill::sample`] on every host tick to get a
//! [`FrameScene`] of paths, transforms and styles for the host to draw.
//!
//! Drawing, hit-testing and hover detection belong to the host.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod foundation;
mod geometry;
mod label;
mod reconcile;
mod scene;

pub use animation::{
    ease::Ease,
    phase::{
        DEFAULT_SPEED_MS, Direction, PhaseMotion, Speed, SpeedFn, default_shape_phase, drive,
        phase_loop, ranked_speed, seed_phase,
    },
    timeline::{Keyframe, Lerp, Playback, Timeline},
};
pub use config::{
    color::ColorDef,
    length::Length,
    series::{
        AnimationConfig, DatumDef, FontSpec, ItemConfig, ItemStyleConfig, LabelConfig,
        LabelEmphasis, OutlineConfig, SeriesConfig, TextAlign, TextBaseline,
    },
};
pub use foundation::{
    core::{Affine, BezPath, Canvas, Circle, Fps, FrameIndex, Point, Rgba8Premul, SampleCtx, Vec2},
    error::{LiquidError, LiquidResult},
};
pub use geometry::{
    vessel::{ClippedPath, PATH_TOLERANCE, VesselClip, VesselGeometry},
    wave::{WaveParams, wave_path},
};
pub use label::{
    compositor::{LabelClip, LabelGroup, compose_label, label_text},
    format::{FormatFn, LabelFormatter, percent_label},
};
pub use reconcile::diff::{KeyDiff, diff_keys};
pub use scene::{
    assembler::{LiquidFill, RenderReport},
    data::{DataSet, Datum, ItemKey},
    entity::{HoverStyle, WaveEntity, WaveStyle},
    node::{FrameLabel, FrameScene, LABEL_Z, ShapeNode, TextNode, TextStyle, WaveNode},
};
