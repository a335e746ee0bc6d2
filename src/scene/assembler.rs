use std::sync::Arc;

use crate::{
    animation::phase::{Direction, PhaseMotion, default_shape_phase, drive},
    config::series::SeriesConfig,
    foundation::core::{BezPath, Canvas, Rgba8Premul, SampleCtx},
    foundation::error::{LiquidError, LiquidResult},
    geometry::{
        vessel::{VesselClip, VesselGeometry},
        wave::{WaveParams, wave_path},
    },
    label::compositor::{LabelGroup, compose_label},
    reconcile::diff::diff_keys,
    scene::{
        data::{DataSet, Datum, ItemKey},
        entity::{HoverStyle, Tween, WaveEntity, WaveStyle},
        node::{FrameScene, ShapeNode, WaveNode},
    },
};

/// Keys touched by one render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub added: Vec<Option<ItemKey>>,
    pub updated: Vec<Option<ItemKey>>,
    pub removed: Vec<Option<ItemKey>>,
}

/// Retained state of one liquid-fill gauge.
///
/// [`LiquidFill::render`] is called whenever configuration or data change and reconciles the
/// wave set; [`LiquidFill::sample`] is called on every host tick and evaluates the timelines.
#[derive(Clone, Debug, Default)]
pub struct LiquidFill {
    entities: Vec<WaveEntity>,
    pass: Option<PassState>,
}

/// Products of the last render pass that do not change between ticks.
#[derive(Clone, Debug)]
struct PassState {
    geometry: VesselGeometry,
    clip: Arc<VesselClip>,
    border: BezPath,
    border_fill: Rgba8Premul,
    background: BezPath,
    background_fill: Rgba8Premul,
    label: LabelGroup,
}

/// Inputs resolved once per render pass and shared by every wave in it.
struct PassContext<'a> {
    series: &'a SeriesConfig,
    data: &'a DataSet,
    geometry: VesselGeometry,
    wavelength: f64,
    now_ms: f64,
}

impl PassContext<'_> {
    fn wave_params(&self, index: usize, datum: &Datum) -> WaveParams {
        let radius = self.geometry.radius;
        if !datum.value.is_finite() {
            tracing::warn!(index, value = datum.value, "non-finite datum renders no liquid");
        }
        let amplitude = datum
            .item
            .amplitude
            .unwrap_or(self.series.amplitude)
            .resolve(self.geometry.diameter());
        let phase = datum
            .item
            .phase
            .or(self.series.phase)
            .unwrap_or_else(|| default_shape_phase(index));

        WaveParams {
            wavelength: self.wavelength,
            radius,
            water_level: WaveParams::water_level_for(datum.value, radius),
            amplitude,
            phase,
            inverse: false,
            border_width: self.geometry.border_width,
            border_distance: self.geometry.padding,
        }
    }

    fn wave_style(&self, index: usize, datum: &Datum) -> WaveStyle {
        let style = &self.series.item_style;
        let fill = datum
            .item
            .color
            .unwrap_or_else(|| self.series.palette_color(index))
            .to_rgba8_premul();
        let opacity = unit_f32(datum.item.opacity.unwrap_or(style.opacity));

        let hover_opacity = datum.item.hover_opacity.or(style.hover_opacity);
        let hover = (hover_opacity.is_some() || style.hover_color.is_some()).then(|| HoverStyle {
            fill: style.hover_color.map_or(fill, |c| c.to_rgba8_premul()),
            opacity: hover_opacity.map_or(opacity, unit_f32),
            line_width: 0.0,
        });

        WaveStyle {
            fill,
            opacity,
            hover,
        }
    }

    fn motion(&self, index: usize, datum: &Datum) -> PhaseMotion {
        let direction = datum
            .item
            .direction
            .as_deref()
            .or(self.series.direction.as_deref());
        let period_ms = datum.item.speed.unwrap_or_else(|| {
            self.series
                .speed
                .resolve(datum.value, index, self.data.len())
        });
        PhaseMotion {
            direction: Direction::resolve(direction),
            period_ms,
        }
    }

    fn entry(&self) -> Tween {
        Tween {
            duration_ms: self.series.animation.duration_ms,
            ease: self.series.animation.easing,
        }
    }

    fn update(&self) -> Tween {
        Tween {
            duration_ms: self.series.animation.duration_update_ms,
            ease: self.series.animation.easing_update,
        }
    }
}

fn unit_f32(v: f64) -> f32 {
    if v.is_nan() {
        return 1.0;
    }
    v.clamp(0.0, 1.0) as f32
}

impl LiquidFill {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the wave set against `data` and rebuild per-pass geometry and the label.
    ///
    /// Persisting waves keep their entity and continue their phase from what is shown at
    /// `now_ms`; new waves rise in from the bottom; removed waves disappear immediately.
    #[tracing::instrument(skip(self, series, data), fields(items = data.len()))]
    pub fn render(
        &mut self,
        series: &SeriesConfig,
        data: &DataSet,
        canvas: Canvas,
        now_ms: f64,
    ) -> LiquidResult<RenderReport> {
        series.validate()?;
        if !now_ms.is_finite() {
            return Err(LiquidError::validation("render time must be finite"));
        }

        let geometry = VesselGeometry::resolve(series, canvas);
        let clip = geometry.clip();
        let ctx = PassContext {
            series,
            data,
            geometry,
            wavelength: series.wavelength.resolve(geometry.diameter()),
            now_ms,
        };

        let old_keys: Vec<Option<&ItemKey>> = self.entities.iter().map(|e| e.key()).collect();
        let diff = diff_keys(&old_keys, &data.keys());

        let mut report = RenderReport {
            removed: diff
                .removed
                .iter()
                .map(|&i| self.entities[i].key().cloned())
                .collect(),
            ..RenderReport::default()
        };

        let mut source = vec![None; data.len()];
        for &(new_idx, old_idx) in &diff.updated {
            source[new_idx] = Some(old_idx);
        }

        let mut previous: Vec<Option<WaveEntity>> =
            std::mem::take(&mut self.entities).into_iter().map(Some).collect();
        let mut entities = Vec::with_capacity(data.len());

        for (index, datum) in data.iter().enumerate() {
            let params = ctx.wave_params(index, datum);
            let style = ctx.wave_style(index, datum);

            let reused = source[index].and_then(|old_idx| previous[old_idx].take());
            let mut entity = match reused {
                Some(mut entity) => {
                    entity.retarget(index, datum.value, params, style, ctx.update(), ctx.now_ms);
                    report.updated.push(datum.key.clone());
                    entity
                }
                None => {
                    report.added.push(datum.key.clone());
                    WaveEntity::entering(
                        datum.key.clone(),
                        index,
                        datum.value,
                        params,
                        style,
                        ctx.entry(),
                        ctx.now_ms,
                    )
                }
            };
            drive(&mut entity, ctx.motion(index, datum), ctx.now_ms);
            entities.push(entity);
        }
        self.entities = entities;

        tracing::debug!(
            added = report.added.len(),
            updated = report.updated.len(),
            removed = report.removed.len(),
            radius = geometry.radius,
            "reconciled liquid fill waves"
        );

        let label = compose_label(&series.label, data, &geometry, &clip, &self.entities);
        self.pass = Some(PassState {
            geometry,
            border: geometry.border_path(),
            border_fill: series.outline.border_color.to_rgba8_premul(),
            background: geometry.background_path(),
            background_fill: series.background_color.to_rgba8_premul(),
            clip,
            label,
        });

        Ok(report)
    }

    /// Evaluate every timeline at `ctx.now_ms`. `None` until the first render.
    pub fn sample(&self, ctx: SampleCtx) -> Option<FrameScene> {
        let pass = self.pass.as_ref()?;
        let transform = pass.geometry.transform();

        let waves: Vec<WaveNode> = self
            .entities
            .iter()
            .map(|e| {
                let params = e.params_at(ctx.now_ms);
                let style = e.style();
                WaveNode {
                    key: e.key().cloned(),
                    index: e.index(),
                    params,
                    shape: pass.clip.attach(wave_path(&params)),
                    transform,
                    fill: style.fill,
                    opacity: style.opacity,
                    hover: style.hover,
                    z: 0,
                }
            })
            .collect();

        let label = pass.label.sample(&waves, transform);
        Some(FrameScene {
            border: ShapeNode {
                path: pass.border.clone(),
                transform,
                fill: pass.border_fill,
                opacity: 1.0,
                z: 0,
            },
            background: ShapeNode {
                path: pass.background.clone(),
                transform,
                fill: pass.background_fill,
                opacity: 1.0,
                z: 0,
            },
            waves,
            label,
        })
    }

    /// Waves of the last render, in data order.
    pub fn entities(&self) -> &[WaveEntity] {
        &self.entities
    }

    pub fn entity(&self, key: &ItemKey) -> Option<&WaveEntity> {
        self.entities.iter().find(|e| e.key() == Some(key))
    }

    pub fn geometry(&self) -> Option<&VesselGeometry> {
        self.pass.as_ref().map(|p| &p.geometry)
    }

    pub fn label(&self) -> Option<&LabelGroup> {
        self.pass.as_ref().map(|p| &p.label)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/assembler.rs"]
mod tests;
