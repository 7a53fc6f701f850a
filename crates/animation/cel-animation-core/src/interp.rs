//! Interpolation over bracketing states.
//!
//! Given two states `s0@t0`, `s1@t1` with `t0 <= t <= t1`, position,
//! dimension, and color channels blend independently and linearly; color
//! channels round to the nearest integer. Orientation blends in degrees,
//! except that an `s0` orientation of exactly 360 contributes nothing and
//! the result is the `s1` term alone.
//!
//! Query times with no bracketing pair return `None`; edge policy (clamp,
//! hide, extrapolate) belongs to the renderer.

use serde::{Deserialize, Serialize};

use crate::entity::{History, TimelineEntity};
use crate::value::{Dimension, Position, Rgb, State};

/// Blended, render-ready state. Orientation stays real-valued so sub-degree
/// blends reach the renderer unrounded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub position: Position,
    pub dimension: Dimension,
    pub color: Rgb,
    /// Orientation in degrees.
    pub orientation: f64,
}

impl From<State> for RenderState {
    fn from(state: State) -> Self {
        Self {
            position: state.position,
            dimension: state.dimension,
            color: state.color,
            orientation: f64::from(state.orientation),
        }
    }
}

/// Blend weights for a query time within [t0, t1]. A degenerate instant
/// (t0 == t1) weighs entirely on the first state.
pub fn weights(t0: u32, t1: u32, t: u32) -> (f64, f64) {
    if t0 == t1 {
        return (1.0, 0.0);
    }
    let span = f64::from(t1 - t0);
    (f64::from(t1 - t) / span, f64::from(t - t0) / span)
}

#[inline]
fn lerp(a: f64, b: f64, w0: f64, w1: f64) -> f64 {
    a * w0 + b * w1
}

#[inline]
fn blend_channel(a: u8, b: u8, w0: f64, w1: f64) -> u8 {
    (f64::from(a) * w0 + f64::from(b) * w1).round() as u8
}

/// Blend two bracketing states at query time `t` (expects `s0.time <= t <=
/// s1.time`).
pub fn blend(s0: &State, s1: &State, t: u32) -> RenderState {
    let (w0, w1) = weights(s0.time, s1.time, t);
    // A start orientation of exactly 360 drops the s0 term entirely.
    let orientation = if s0.orientation == 360 {
        f64::from(s1.orientation) * w1
    } else {
        f64::from(s0.orientation) * w0 + f64::from(s1.orientation) * w1
    };
    RenderState {
        position: Position::new(
            lerp(s0.position.x, s1.position.x, w0, w1),
            lerp(s0.position.y, s1.position.y, w0, w1),
        ),
        dimension: Dimension {
            width: lerp(s0.dimension.width, s1.dimension.width, w0, w1),
            height: lerp(s0.dimension.height, s1.dimension.height, w0, w1),
        },
        color: Rgb::new(
            blend_channel(s0.color.r, s1.color.r, w0, w1),
            blend_channel(s0.color.g, s1.color.g, w0, w1),
            blend_channel(s0.color.b, s1.color.b, w0, w1),
        ),
        orientation,
    }
}

/// Locate the bracketing pair for `t` in the entity's history and blend it.
///
/// Motion mode brackets within committed segments; keyframe mode brackets
/// between adjacent keyframes. `None` means `t` falls outside everything
/// recorded.
pub fn sample(entity: &TimelineEntity, t: u32) -> Option<RenderState> {
    match &entity.history {
        History::Motion(_) => entity
            .segments()
            .find(|(start, end)| start.time <= t && t <= end.time)
            .map(|(start, end)| blend(start, end, t)),
        History::Keyframe(frames) => match frames.len() {
            0 => None,
            1 => (frames[0].time == t).then(|| RenderState::from(frames[0])),
            _ => frames
                .windows(2)
                .find(|pair| pair[0].time <= t && t <= pair[1].time)
                .map(|pair| blend(&pair[0], &pair[1], t)),
        },
    }
}
