use super::*;

#[test]
fn empty_object_is_the_stock_gauge() {
    let cfg = SeriesConfig::from_json("{}").unwrap();
    assert_eq!(cfg.radius, Length::Percent(50.0));
    assert_eq!(cfg.center, [Length::Percent(50.0), Length::Percent(50.0)]);
    assert_eq!(cfg.wavelength, Length::Percent(80.0));
    assert_eq!(cfg.amplitude, Length::Percent(8.0));
    assert_eq!(cfg.color.len(), 4);
    assert_eq!(cfg.outline, OutlineConfig::default());
    assert_eq!(cfg.animation, AnimationConfig::default());
    assert_eq!(cfg.item_style.hover_opacity, Some(0.8));
    assert!(cfg.data.is_empty());
}

#[test]
fn parses_lengths_colors_and_nested_sections() {
    let cfg = SeriesConfig::from_json(
        r##"{
            "center": ["40%", 120],
            "radius": "300px",
            "amplitude": 12,
            "direction": "left",
            "speed": 3000,
            "color": ["#ff0000", "rgb(0, 128, 0)"],
            "outline": { "border_width": "2%" },
            "label": { "formatter": "{value} units", "align": "left", "font": { "size_px": 20 } },
            "animation": { "duration_update_ms": 250, "easing_update": "linear" }
        }"##,
    )
    .unwrap();

    assert_eq!(cfg.center, [Length::Percent(40.0), Length::Px(120.0)]);
    assert_eq!(cfg.radius, Length::Px(300.0));
    assert_eq!(cfg.amplitude, Length::Px(12.0));
    assert_eq!(cfg.direction.as_deref(), Some("left"));
    assert_eq!(cfg.speed.resolve(0.5, 0, 1), 3000.0);
    assert_eq!(cfg.palette_color(0), ColorDef::from_rgb8(255, 0, 0));
    assert_eq!(cfg.palette_color(3), ColorDef::from_rgb8(0, 128, 0));
    assert_eq!(cfg.outline.border_width, Length::Percent(2.0));
    assert_eq!(cfg.outline.border_distance, Length::Px(8.0));
    assert_eq!(cfg.label.formatter.format(0.5), "0.5 units");
    assert_eq!(cfg.label.align, TextAlign::Left);
    assert_eq!(cfg.label.font.size_px, 20.0);
    assert_eq!(cfg.label.font.weight, "bold");
    assert_eq!(cfg.animation.duration_update_ms, 250.0);
    assert_eq!(cfg.animation.easing_update, Ease::Linear);
    assert_eq!(cfg.animation.duration_ms, 2000.0);
}

#[test]
fn inline_data_keys_by_name_or_index() {
    let cfg = SeriesConfig::from_json(
        r##"{ "data": [0.6, { "value": 0.5, "name": "b", "phase": 1.5, "color": "#00ff00" }, { "value": 0.2 }] }"##,
    )
    .unwrap();

    let data = cfg.data_set();
    assert_eq!(data.len(), 3);
    assert_eq!(
        data.keys(),
        vec![
            Some(&ItemKey::from("0")),
            Some(&ItemKey::from("b")),
            Some(&ItemKey::from("2")),
        ]
    );
    let b = data.get(1).unwrap();
    assert_eq!(b.value, 0.5);
    assert_eq!(b.item.phase, Some(1.5));
    assert_eq!(b.item.color, Some(ColorDef::from_rgb8(0, 255, 0)));
    assert_eq!(data.get(0).unwrap().item, ItemConfig::default());
}

#[test]
fn empty_palette_is_transparent() {
    let cfg = SeriesConfig {
        color: Vec::new(),
        ..SeriesConfig::default()
    };
    assert_eq!(cfg.palette_color(7), ColorDef::TRANSPARENT);
}

#[test]
fn validate_rejects_unusable_values() {
    let mut cfg = SeriesConfig::default();
    cfg.radius = Length::Px(f64::INFINITY);
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().starts_with("config error:"));
    assert!(err.to_string().contains("radius"));

    let mut cfg = SeriesConfig::default();
    cfg.animation.duration_ms = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = SeriesConfig::default();
    cfg.label.font.size_px = f64::NAN;
    assert!(cfg.validate().is_err());

    assert!(SeriesConfig::default().validate().is_ok());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SeriesConfig::from_json(r#"{ "radius": "wide" }"#).unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
    assert!(SeriesConfig::from_json("[").is_err());
}
