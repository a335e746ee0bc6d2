use std::sync::Arc;

use crate::{
    config::{
        color::ColorDef,
        series::{LabelConfig, LabelEmphasis},
    },
    foundation::core::{Affine, BezPath},
    geometry::vessel::{ClippedPath, VesselClip, VesselGeometry},
    label::format::LabelFormatter,
    scene::{
        data::{DataSet, ItemKey},
        entity::WaveEntity,
        node::{FrameLabel, LABEL_Z, TextNode, TextStyle, WaveNode},
    },
};

/// Label texts of one render pass plus the wave set the inside text is clipped to.
#[derive(Clone, Debug)]
pub struct LabelGroup {
    pub outside: TextNode,
    pub inside: TextNode,
    pub clip: LabelClip,
}

/// Clip of the inside label: union of the pass's waves, bounded by the vessel circle.
#[derive(Clone, Debug)]
pub struct LabelClip {
    members: Vec<Option<ItemKey>>,
    vessel: Arc<VesselClip>,
}

impl LabelClip {
    /// Keys of the waves whose union forms the clip, in render order.
    pub fn members(&self) -> &[Option<ItemKey>] {
        &self.members
    }

    pub fn vessel(&self) -> &Arc<VesselClip> {
        &self.vessel
    }

    /// Concatenate outlines into one path. All waves wind the same way, so a nonzero fill of
    /// the result covers their union.
    pub fn union<'a>(&self, outlines: impl IntoIterator<Item = &'a BezPath>) -> ClippedPath {
        let mut union = BezPath::new();
        for outline in outlines {
            for el in outline.elements() {
                union.push(*el);
            }
        }
        self.vessel.attach(union)
    }
}

impl LabelGroup {
    pub(crate) fn sample(&self, waves: &[WaveNode], clip_transform: Affine) -> FrameLabel {
        debug_assert_eq!(waves.len(), self.clip.members.len());
        FrameLabel {
            outside: self.outside.clone(),
            inside: self.inside.clone(),
            inside_clip: self.clip.union(waves.iter().map(|w| &w.shape.path)),
            clip_transform,
        }
    }
}

/// Text for the first datum; empty when there is no data.
pub fn label_text(formatter: &LabelFormatter, data: &DataSet) -> String {
    data.get(0)
        .map(|d| formatter.format(d.value))
        .unwrap_or_default()
}

/// Build both label texts at the vessel center and record the pass's waves as clip members.
pub fn compose_label(
    cfg: &LabelConfig,
    data: &DataSet,
    geometry: &VesselGeometry,
    vessel: &Arc<VesselClip>,
    waves: &[WaveEntity],
) -> LabelGroup {
    let text = label_text(&cfg.formatter, data);

    let outside_style = TextStyle {
        fill: cfg.color.to_rgba8_premul(),
        font: cfg.font.clone(),
        align: cfg.align,
        vertical_align: cfg.vertical_align,
    };
    let inside_style = TextStyle {
        fill: cfg.inside_color.to_rgba8_premul(),
        ..outside_style.clone()
    };

    let emphasis = cfg.emphasis.as_ref();
    let outside = TextNode {
        text: text.clone(),
        position: geometry.center,
        hover: emphasis.map(|e| hover_style(&outside_style, e, e.color)),
        style: outside_style,
        z2: LABEL_Z,
    };
    let inside = TextNode {
        text,
        position: geometry.center,
        hover: emphasis.map(|e| hover_style(&inside_style, e, e.inside_color)),
        style: inside_style,
        z2: LABEL_Z,
    };

    LabelGroup {
        outside,
        inside,
        clip: LabelClip {
            members: waves.iter().map(|w| w.key().cloned()).collect(),
            vessel: Arc::clone(vessel),
        },
    }
}

fn hover_style(base: &TextStyle, emphasis: &LabelEmphasis, color: Option<ColorDef>) -> TextStyle {
    let mut style = base.clone();
    if let Some(c) = color {
        style.fill = c.to_rgba8_premul();
    }
    if let Some(font) = &emphasis.font {
        style.font = font.clone();
    }
    style
}

#[cfg(test)]
#[path = "../../tests/unit/label/compositor.rs"]
mod tests;
