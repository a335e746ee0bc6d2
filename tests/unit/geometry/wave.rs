use super::*;
use kurbo::{PathEl, Point, Shape};

fn params(value: f64) -> WaveParams {
    let radius = 100.0;
    WaveParams {
        wavelength: 160.0,
        radius,
        water_level: WaveParams::water_level_for(value, radius),
        amplitude: 16.0,
        phase: 0.0,
        inverse: false,
        border_width: 8.0,
        border_distance: 8.0,
    }
}

fn points(path: &BezPath) -> Vec<Point> {
    path.elements()
        .iter()
        .flat_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => vec![p],
            PathEl::QuadTo(a, b) => vec![a, b],
            PathEl::CurveTo(a, b, c) => vec![a, b, c],
            PathEl::ClosePath => vec![],
        })
        .collect()
}

fn assert_closed(path: &BezPath) {
    let els = path.elements();
    assert!(matches!(els.first(), Some(PathEl::MoveTo(_))));
    assert!(matches!(els.last(), Some(PathEl::ClosePath)));
}

#[test]
fn water_level_tracks_fill_fraction() {
    assert_eq!(WaveParams::water_level_for(0.0, 100.0), 100.0);
    assert_eq!(WaveParams::water_level_for(1.0, 100.0), -100.0);
    assert_eq!(WaveParams::water_level_for(0.5, 100.0), 0.0);
}

#[test]
fn generation_is_deterministic() {
    let p = WaveParams {
        phase: 1.234,
        ..params(0.37)
    };
    let a = wave_path(&p);
    let b = wave_path(&p);
    assert_eq!(a.elements(), b.elements());
    assert_eq!(a.to_svg(), b.to_svg());
}

#[test]
fn surface_spans_the_vessel_for_any_phase() {
    for wavelength in [20.0, 160.0, 500.0] {
        for step in 0..16 {
            let p = WaveParams {
                wavelength,
                phase: -3.0 * TAU + step as f64 * 0.9,
                ..params(0.5)
            };
            let path = wave_path(&p);
            assert_closed(&path);
            let bbox = path.bounding_box();
            assert!(bbox.x0 <= -p.radius, "x0 {} for {wavelength}", bbox.x0);
            assert!(bbox.x1 >= p.radius, "x1 {} for {wavelength}", bbox.x1);
            assert!((bbox.y1 - p.radius).abs() < 1e-9);
        }
    }
}

#[test]
fn crest_and_trough_reach_the_amplitude() {
    let p = params(0.5);
    let bbox = wave_path(&p).bounding_box();
    assert!((bbox.y0 - (p.water_level - p.amplitude)).abs() < 1e-6);
}

#[test]
fn phase_is_periodic_over_a_full_turn() {
    let a = wave_path(&WaveParams {
        phase: 0.7,
        ..params(0.4)
    });
    let b = wave_path(&WaveParams {
        phase: 0.7 + TAU,
        ..params(0.4)
    });
    let (pa, pb) = (points(&a), points(&b));
    assert_eq!(pa.len(), pb.len());
    for (x, y) in pa.iter().zip(&pb) {
        assert!((x.x - y.x).abs() < 1e-9 && (x.y - y.y).abs() < 1e-9);
    }
}

#[test]
fn inverse_closes_along_the_top() {
    let p = WaveParams {
        inverse: true,
        ..params(0.5)
    };
    let path = wave_path(&p);
    assert_closed(&path);
    let bbox = path.bounding_box();
    assert!((bbox.y0 + p.radius).abs() < 1e-9);
    assert!(bbox.y1 <= p.water_level + p.amplitude + 1e-9);
}

#[test]
fn levels_beyond_the_vessel_degrade_to_empty_or_full() {
    let empty = WaveParams {
        water_level: 10_000.0,
        ..params(0.0)
    };
    let path = wave_path(&empty);
    assert_closed(&path);
    assert!(path.bounding_box().y0 >= empty.radius - 1e-9);

    let full = WaveParams {
        water_level: -10_000.0,
        ..params(1.0)
    };
    let path = wave_path(&full);
    assert_closed(&path);
    let bbox = path.bounding_box();
    assert!(bbox.y0 <= -full.radius);
    assert!(bbox.y1 >= full.radius - 1e-9);
    assert!(bbox.height() < 3.0 * full.radius + 2.0 * full.amplitude);
}

#[test]
fn degenerate_radius_yields_an_empty_closed_path() {
    for radius in [0.0, -5.0, f64::NAN] {
        let path = wave_path(&WaveParams {
            radius,
            ..params(0.5)
        });
        assert_closed(&path);
        assert_eq!(path.elements().len(), 2);
    }
}

#[test]
fn non_positive_wavelength_gives_a_flat_surface() {
    let p = WaveParams {
        wavelength: 0.0,
        ..params(0.25)
    };
    let path = wave_path(&p);
    assert_closed(&path);
    for el in path.elements() {
        if let PathEl::CurveTo(a, b, c) = *el {
            assert_eq!(a.y, p.water_level);
            assert_eq!(b.y, p.water_level);
            assert_eq!(c.y, p.water_level);
        }
    }
}

#[test]
fn params_lerp_takes_target_orientation() {
    let a = params(0.0);
    let b = WaveParams {
        inverse: true,
        ..params(1.0)
    };
    let mid = WaveParams::lerp(&a, &b, 0.5);
    assert_eq!(mid.water_level, 0.0);
    assert!(mid.inverse);
}
