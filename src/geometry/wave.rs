//! Closed wave outlines in vessel-local coordinates (origin at the vessel center, y down).

use std::f64::consts::{PI, TAU};

use crate::{animation::timeline::Lerp, foundation::core::BezPath};

/// Upper bound on full wave periods across the generated span.
const MAX_PERIODS_PER_DIAMETER: f64 = 512.0;

/// Parameters of one wave surface for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveParams {
    pub wavelength: f64,
    /// Interior radius of the vessel.
    pub radius: f64,
    /// Mean surface height relative to the vessel center; positive is below the center.
    pub water_level: f64,
    pub amplitude: f64,
    /// Radians; periodic mod 2π.
    pub phase: f64,
    /// Fill above the surface instead of below it.
    pub inverse: bool,
    pub border_width: f64,
    pub border_distance: f64,
}

impl WaveParams {
    /// Level for a fill fraction: `0` sits at the bottom, `1` at the top.
    pub fn water_level_for(value: f64, radius: f64) -> f64 {
        radius - value * radius * 2.0
    }
}

impl Lerp for WaveParams {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            wavelength: <f64 as Lerp>::lerp(&a.wavelength, &b.wavelength, t),
            radius: <f64 as Lerp>::lerp(&a.radius, &b.radius, t),
            water_level: <f64 as Lerp>::lerp(&a.water_level, &b.water_level, t),
            amplitude: <f64 as Lerp>::lerp(&a.amplitude, &b.amplitude, t),
            phase: <f64 as Lerp>::lerp(&a.phase, &b.phase, t),
            inverse: b.inverse,
            border_width: <f64 as Lerp>::lerp(&a.border_width, &b.border_width, t),
            border_distance: <f64 as Lerp>::lerp(&a.border_distance, &b.border_distance, t),
        }
    }
}

/// Build the closed liquid outline for `p`.
///
/// The surface is a chain of quarter-period cubics starting left of the vessel and running far
/// enough right to cover `[-radius, radius]` for any phase. Straight edges then close it along
/// the bottom (or top, when inverse) of the vessel. Degenerate input gives an empty closed path.
pub fn wave_path(p: &WaveParams) -> BezPath {
    let finite = [p.wavelength, p.radius, p.water_level, p.amplitude, p.phase]
        .iter()
        .all(|v| v.is_finite());
    if !finite || p.radius <= 0.0 {
        return empty_path();
    }

    let radius = p.radius;
    let (wavelength, amplitude) = if p.wavelength > 0.0 {
        (
            p.wavelength.max(2.0 * radius / MAX_PERIODS_PER_DIAMETER),
            p.amplitude,
        )
    } else {
        (2.0 * radius, 0.0)
    };

    let reach = radius + amplitude.abs();
    let level = p.water_level.clamp(-reach, reach);

    let curves = (((2.0 * radius / wavelength) * 4.0).ceil() * 2.0).max(8.0) as usize;
    let left = -radius + normalized_phase(p.phase) / TAU * wavelength;

    let mut path = BezPath::new();
    path.move_to((left, level));

    let mut wave_right = 0.0;
    for c in 0..curves {
        let x = c as f64 * wavelength / 4.0;
        let [c1, c2, end] = quarter_controls(x, c % 4, wavelength, amplitude);
        path.curve_to(
            (c1.0 + left, level - c1.1),
            (c2.0 + left, level - c2.1),
            (end.0 + left, level - end.1),
        );
        wave_right = end.0;
    }

    let edge = if p.inverse { -radius } else { radius };
    path.line_to((left + wave_right, edge));
    path.line_to((left, edge));
    path.close_path();
    path
}

fn empty_path() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.close_path();
    path
}

/// Phase folded into `(-2π, 0]`.
fn normalized_phase(phase: f64) -> f64 {
    let wrapped = phase.rem_euclid(TAU);
    if wrapped == 0.0 { 0.0 } else { wrapped - TAU }
}

/// Control points (x offset, height above level) of the `stage`-th quarter period starting at
/// `x`: rise to crest, fall to level, fall to trough, rise to level.
fn quarter_controls(x: f64, stage: usize, wavelength: f64, amplitude: f64) -> [(f64, f64); 3] {
    let k = wavelength / PI / 4.0;
    let quarter = x + wavelength / 4.0;
    match stage {
        0 => [
            (x + k, amplitude / 2.0),
            (x + 2.0 * k, amplitude),
            (quarter, amplitude),
        ],
        1 => [
            (x + k * (PI - 2.0), amplitude),
            (x + k * (PI - 1.0), amplitude / 2.0),
            (quarter, 0.0),
        ],
        2 => [
            (x + k, -amplitude / 2.0),
            (x + 2.0 * k, -amplitude),
            (quarter, -amplitude),
        ],
        _ => [
            (x + k * (PI - 2.0), -amplitude),
            (x + k * (PI - 1.0), -amplitude / 2.0),
            (quarter, 0.0),
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/wave.rs"]
mod tests;
