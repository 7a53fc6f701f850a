//! Baking API: render-ready samples for every shape over a tick window.
//!
//! Exporters that cannot (or should not) query the interpolator live, such
//! as SVG emitters and frame dumpers, consume one baked row per shape
//! instead. A `None` frame means the shape has no bracketing pair at that
//! tick.

use serde::{Deserialize, Serialize};

use crate::entity::ShapeKind;
use crate::interp::{sample, RenderState};
use crate::registry::Registry;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BakingConfig {
    /// Tick step between samples; values below 1 are clamped to 1.
    pub frame_step: u32,
    /// First tick to sample.
    pub start: u32,
    /// Inclusive last tick; `None` bakes through the latest recorded time.
    pub end: Option<u32>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_step: 1,
            start: 0,
            end: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedShape {
    pub name: String,
    pub kind: ShapeKind,
    pub frames: Vec<Option<RenderState>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedDocument {
    pub frame_step: u32,
    pub start: u32,
    pub end: u32,
    pub shapes: Vec<BakedShape>,
}

/// Sample every shape in the registry at each covered tick.
pub fn bake_registry(registry: &Registry, cfg: &BakingConfig) -> BakedDocument {
    let step = cfg.frame_step.max(1);
    let end = cfg.end.unwrap_or_else(|| latest_time(registry)).max(cfg.start);

    let mut shapes = Vec::with_capacity(registry.shapes().len());
    for entity in registry.shapes() {
        let mut frames = Vec::new();
        let mut t = cfg.start;
        loop {
            frames.push(sample(entity, t));
            match t.checked_add(step) {
                Some(next) if next <= end => t = next,
                _ => break,
            }
        }
        shapes.push(BakedShape {
            name: entity.name.clone(),
            kind: entity.kind,
            frames,
        });
    }
    BakedDocument {
        frame_step: step,
        start: cfg.start,
        end,
        shapes,
    }
}

/// Export a baked document as a `serde_json::Value`.
pub fn export_baked_json(baked: &BakedDocument) -> serde_json::Value {
    serde_json::to_value(baked).unwrap_or(serde_json::Value::Null)
}

fn latest_time(registry: &Registry) -> u32 {
    registry
        .shapes()
        .iter()
        .flat_map(|entity| entity.history.states().iter().map(|state| state.time))
        .max()
        .unwrap_or(0)
}
