use crate::{
    config::series::{FontSpec, TextAlign, TextBaseline},
    foundation::core::{Affine, BezPath, Point, Rgba8Premul},
    geometry::{vessel::ClippedPath, wave::WaveParams},
    scene::{data::ItemKey, entity::HoverStyle},
};

/// Stacking order of label texts relative to the shapes.
pub const LABEL_Z: i32 = 10;

/// Plain filled shape in vessel-local coordinates.
#[derive(Clone, Debug)]
pub struct ShapeNode {
    pub path: BezPath,
    pub transform: Affine,
    pub fill: Rgba8Premul,
    pub opacity: f32,
    pub z: i32,
}

/// One sampled wave, clipped to the vessel.
#[derive(Clone, Debug)]
pub struct WaveNode {
    pub key: Option<ItemKey>,
    pub index: usize,
    /// Parameters the outline was generated from, phase included.
    pub params: WaveParams,
    pub shape: ClippedPath,
    pub transform: Affine,
    pub fill: Rgba8Premul,
    pub opacity: f32,
    pub hover: Option<HoverStyle>,
    pub z: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub fill: Rgba8Premul,
    pub font: FontSpec,
    pub align: TextAlign,
    pub vertical_align: TextBaseline,
}

/// Text anchored at a canvas position.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub position: Point,
    pub style: TextStyle,
    /// Replaces `style` while hovered; `style` itself is never modified.
    pub hover: Option<TextStyle>,
    pub z2: i32,
}

/// The two label texts of one frame.
///
/// `inside` is only visible within `inside_clip`: the union of all wave outlines, itself limited
/// by the vessel circle. The clip is in vessel-local coordinates placed by `clip_transform`.
#[derive(Clone, Debug)]
pub struct FrameLabel {
    pub outside: TextNode,
    pub inside: TextNode,
    pub inside_clip: ClippedPath,
    pub clip_transform: Affine,
}

/// Everything the host draws for one tick, in painter's order.
#[derive(Clone, Debug)]
pub struct FrameScene {
    pub border: ShapeNode,
    pub background: ShapeNode,
    pub waves: Vec<WaveNode>,
    pub label: FrameLabel,
}
