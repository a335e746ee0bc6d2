use crate::foundation::error::{LiquidError, LiquidResult};

pub use kurbo::{Affine, BezPath, Circle, Point, Vec2};

/// Host frame counter used when ticks are expressed in frames rather than milliseconds.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> LiquidResult<Self> {
        if den == 0 {
            return Err(LiquidError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(LiquidError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn frame_duration_ms(self) -> f64 {
        1000.0 * f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_ms(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_ms()
    }
}

/// Drawing surface size in pixels, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// The shorter side; percent radii and border widths resolve against it.
    pub fn min_side(self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }
}

/// Sampling context supplied by the host on every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCtx {
    /// Host clock in milliseconds; the same clock passed to `LiquidFill::render`.
    pub now_ms: f64,
}

impl SampleCtx {
    pub fn at_ms(now_ms: f64) -> Self {
        Self { now_ms }
    }

    pub fn from_frame(frame: FrameIndex, fps: Fps) -> Self {
        Self {
            now_ms: fps.frames_to_ms(frame.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
