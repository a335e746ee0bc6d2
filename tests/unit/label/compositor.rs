use super::*;
use crate::{
    animation::ease::Ease,
    config::series::{FontSpec, SeriesConfig},
    foundation::core::{Canvas, Rgba8Premul},
    geometry::wave::WaveParams,
    scene::entity::{Tween, WaveStyle},
};

fn geometry() -> VesselGeometry {
    VesselGeometry::resolve(
        &SeriesConfig::default(),
        Canvas {
            width: 400,
            height: 400,
        },
    )
}

fn wave(key: &str, index: usize, value: f64, g: &VesselGeometry) -> WaveEntity {
    WaveEntity::entering(
        Some(key.into()),
        index,
        value,
        WaveParams {
            wavelength: g.diameter() * 0.8,
            radius: g.radius,
            water_level: WaveParams::water_level_for(value, g.radius),
            amplitude: 8.0,
            phase: 0.0,
            inverse: false,
            border_width: g.border_width,
            border_distance: g.padding,
        },
        WaveStyle {
            fill: Rgba8Premul::transparent(),
            opacity: 1.0,
            hover: None,
        },
        Tween {
            duration_ms: 0.0,
            ease: Ease::Linear,
        },
        0.0,
    )
}

#[test]
fn builds_overlapping_texts_at_vessel_center() {
    let g = geometry();
    let vessel = g.clip();
    let data = DataSet::from_values(&[0.4215, 0.9]);
    let label = compose_label(&LabelConfig::default(), &data, &g, &vessel, &[]);

    assert_eq!(label.outside.text, "43%");
    assert_eq!(label.inside.text, "43%");
    assert_eq!(label.outside.position, g.center);
    assert_eq!(label.inside.position, g.center);
    assert_eq!(label.outside.z2, LABEL_Z);
    assert_eq!(label.inside.z2, LABEL_Z);
    assert_eq!(
        label.inside.style.fill,
        Rgba8Premul::from_straight_rgba(255, 255, 255, 255)
    );
    assert_ne!(label.outside.style.fill, label.inside.style.fill);
    assert_eq!(label.outside.style.font, label.inside.style.font);
    assert!(label.outside.hover.is_none());
}

#[test]
fn hover_styles_derive_from_base_without_touching_it() {
    let g = geometry();
    let mut cfg = LabelConfig::default();
    cfg.emphasis = Some(LabelEmphasis {
        color: Some(ColorDef::from_rgb8(255, 0, 0)),
        inside_color: None,
        font: Some(FontSpec {
            size_px: 60.0,
            ..FontSpec::default()
        }),
    });
    let label = compose_label(&cfg, &DataSet::from_values(&[0.5]), &g, &g.clip(), &[]);

    let hover = label.outside.hover.as_ref().unwrap();
    assert_eq!(hover.fill, Rgba8Premul::from_straight_rgba(255, 0, 0, 255));
    assert_eq!(hover.font.size_px, 60.0);
    assert_eq!(label.outside.style.font.size_px, 50.0);
    assert_eq!(label.outside.style.fill, cfg.color.to_rgba8_premul());

    let inside_hover = label.inside.hover.as_ref().unwrap();
    assert_eq!(inside_hover.fill, label.inside.style.fill);
    assert_eq!(inside_hover.font.size_px, 60.0);
}

#[test]
fn clip_unions_current_waves_inside_the_vessel() {
    let g = geometry();
    let vessel = g.clip();
    let waves = vec![wave("a", 0, 0.3, &g), wave("b", 1, 0.6, &g)];
    let label = compose_label(
        &LabelConfig::default(),
        &DataSet::from_values(&[0.3, 0.6]),
        &g,
        &vessel,
        &waves,
    );

    assert_eq!(
        label.clip.members(),
        &[Some(ItemKey::from("a")), Some(ItemKey::from("b"))]
    );
    assert!(Arc::ptr_eq(label.clip.vessel(), &vessel));

    let outlines: Vec<BezPath> = waves.iter().map(|w| w.path_at(0.0)).collect();
    let union = label.clip.union(&outlines);
    let total: usize = outlines.iter().map(|p| p.elements().len()).sum();
    assert_eq!(union.path.elements().len(), total);
    assert!(Arc::ptr_eq(&union.clip, &vessel));
}

#[test]
fn empty_data_gives_empty_text_and_clip() {
    let g = geometry();
    let label = compose_label(&LabelConfig::default(), &DataSet::default(), &g, &g.clip(), &[]);
    assert_eq!(label.outside.text, "");
    assert!(label.clip.members().is_empty());
    assert!(label.clip.union(std::iter::empty()).path.elements().is_empty());
}

#[test]
fn template_formatter_uses_first_value() {
    let g = geometry();
    let mut cfg = LabelConfig::default();
    cfg.formatter = LabelFormatter::Template("{value}L".to_string());
    let label = compose_label(&cfg, &DataSet::from_values(&[0.25, 0.75]), &g, &g.clip(), &[]);
    assert_eq!(label.inside.text, "0.25L");
}
