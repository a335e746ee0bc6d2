use crate::{
    animation::{ease::Ease, phase::Speed},
    config::{color::ColorDef, length::Length},
    foundation::error::{LiquidError, LiquidResult},
    label::format::LabelFormatter,
    scene::data::{DataSet, Datum, ItemKey},
};

/// Configuration of one liquid-fill series.
///
/// Every field has a default, so `SeriesConfig::default()` and `{}` in JSON both describe the
/// stock gauge. Lengths resolve as follows: `center` against the canvas width/height, `radius`
/// (a diameter) and `outline` lengths against the shorter canvas side, `wavelength` and
/// `amplitude` against the usable liquid diameter.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    pub center: [Length; 2],
    pub radius: Length,
    pub wavelength: Length,
    pub amplitude: Length,
    /// Shape phase seed in radians; `None` staggers by index.
    pub phase: Option<f64>,
    /// `"right"`, `"left"` or `"none"`.
    pub direction: Option<String>,
    pub speed: Speed,
    /// Per-datum fill colors, cycled by index.
    pub color: Vec<ColorDef>,
    pub background_color: ColorDef,
    pub outline: OutlineConfig,
    pub item_style: ItemStyleConfig,
    pub label: LabelConfig,
    pub animation: AnimationConfig,
    /// Inline data; see [`SeriesConfig::data_set`].
    pub data: Vec<DatumDef>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            center: [Length::Percent(50.0), Length::Percent(50.0)],
            radius: Length::Percent(50.0),
            wavelength: Length::Percent(80.0),
            amplitude: Length::Percent(8.0),
            phase: None,
            direction: None,
            speed: Speed::default(),
            color: vec![
                ColorDef::from_rgb8(0x29, 0x4D, 0x99),
                ColorDef::from_rgb8(0x15, 0x6A, 0xCF),
                ColorDef::from_rgb8(0x15, 0x98, 0xED),
                ColorDef::from_rgb8(0x45, 0xBD, 0xFF),
            ],
            background_color: ColorDef::from_rgb8(0xE3, 0xF7, 0xFF),
            outline: OutlineConfig::default(),
            item_style: ItemStyleConfig::default(),
            label: LabelConfig::default(),
            animation: AnimationConfig::default(),
            data: Vec::new(),
        }
    }
}

impl SeriesConfig {
    pub fn from_json(s: &str) -> LiquidResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that cannot be degraded to a sensible default.
    pub fn validate(&self) -> LiquidResult<()> {
        let lengths = [
            ("center[0]", self.center[0]),
            ("center[1]", self.center[1]),
            ("radius", self.radius),
            ("wavelength", self.wavelength),
            ("amplitude", self.amplitude),
            ("outline.border_width", self.outline.border_width),
            ("outline.border_distance", self.outline.border_distance),
        ];
        for (name, len) in lengths {
            if !len.is_finite() {
                return Err(LiquidError::config(format!("{name} must be finite")));
            }
        }

        let durations = [
            ("animation.duration_ms", self.animation.duration_ms),
            (
                "animation.duration_update_ms",
                self.animation.duration_update_ms,
            ),
        ];
        for (name, d) in durations {
            if !d.is_finite() || d < 0.0 {
                return Err(LiquidError::config(format!(
                    "{name} must be a finite, non-negative duration"
                )));
            }
        }

        if self.label.font.size_px.is_nan() || self.label.font.size_px < 0.0 {
            return Err(LiquidError::config("label.font.size_px must be >= 0"));
        }
        Ok(())
    }

    /// Fill color for the datum at `index`, cycling through the palette.
    pub fn palette_color(&self, index: usize) -> ColorDef {
        if self.color.is_empty() {
            return ColorDef::TRANSPARENT;
        }
        self.color[index % self.color.len()]
    }

    /// Inline `data` as a [`DataSet`]: a datum's key is its `name`, or its index as text.
    pub fn data_set(&self) -> DataSet {
        self.data
            .iter()
            .enumerate()
            .map(|(idx, d)| match d {
                DatumDef::Value(v) => Datum::new(ItemKey::from_index(idx), *v),
                DatumDef::Item { value, name, item } => Datum {
                    key: Some(name.clone().map_or_else(|| ItemKey::from_index(idx), ItemKey)),
                    value: *value,
                    item: item.clone(),
                },
            })
            .collect()
    }
}

/// One entry of the inline `data` array.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum DatumDef {
    Value(f64),
    Item {
        value: f64,
        #[serde(default)]
        name: Option<String>,
        #[serde(flatten)]
        item: ItemConfig,
    },
}

/// Per-datum overrides of the series settings.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ItemConfig {
    pub phase: Option<f64>,
    pub direction: Option<String>,
    pub amplitude: Option<Length>,
    /// Cycle duration in ms, used as-is (no rank scaling).
    pub speed: Option<f64>,
    pub color: Option<ColorDef>,
    pub opacity: Option<f64>,
    pub hover_opacity: Option<f64>,
}

/// Ring drawn around the vessel.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    pub border_distance: Length,
    pub border_width: Length,
    pub border_color: ColorDef,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            border_distance: Length::Px(8.0),
            border_width: Length::Px(8.0),
            border_color: ColorDef::from_rgb8(0x29, 0x4D, 0x99),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ItemStyleConfig {
    pub opacity: f64,
    /// Opacity while hovered; `None` leaves waves without a hover style.
    pub hover_opacity: Option<f64>,
    pub hover_color: Option<ColorDef>,
}

impl Default for ItemStyleConfig {
    fn default() -> Self {
        Self {
            opacity: 0.95,
            hover_opacity: Some(0.8),
            hover_color: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Bottom,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub size_px: f64,
    pub weight: String,
    pub family: String,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size_px: 50.0,
            weight: "bold".to_string(),
            family: "sans-serif".to_string(),
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub formatter: LabelFormatter,
    /// Text color over the background.
    pub color: ColorDef,
    /// Text color over the liquid.
    pub inside_color: ColorDef,
    pub font: FontSpec,
    pub align: TextAlign,
    pub vertical_align: TextBaseline,
    pub emphasis: Option<LabelEmphasis>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            formatter: LabelFormatter::Default,
            color: ColorDef::from_rgb8(0x29, 0x4D, 0x99),
            inside_color: ColorDef::from_rgb8(0xFF, 0xFF, 0xFF),
            font: FontSpec::default(),
            align: TextAlign::Center,
            vertical_align: TextBaseline::Middle,
            emphasis: None,
        }
    }
}

/// Hover overrides for the two label texts; unset fields keep the base style.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LabelEmphasis {
    pub color: Option<ColorDef>,
    pub inside_color: Option<ColorDef>,
    pub font: Option<FontSpec>,
}

/// Durations and easing of shape transitions. Phase loops are configured by `speed`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Rise-in of newly added waves.
    pub duration_ms: f64,
    pub easing: Ease,
    /// Retargeting of waves that persist across renders.
    pub duration_update_ms: f64,
    pub easing_update: Ease,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000.0,
            easing: Ease::Linear,
            duration_update_ms: 1000.0,
            easing_update: Ease::InOutQuart,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/series.rs"]
mod tests;
