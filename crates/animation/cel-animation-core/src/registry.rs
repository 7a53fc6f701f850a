//! Registry: owns the timeline entities of one document.
//!
//! The registry validates and commits motion segments and hands out
//! snapshots. Shapes live in an insertion-ordered Vec with linear name
//! lookup; iteration order is the order shapes were added, which keeps
//! snapshot traversal deterministic.

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::entity::{ShapeKind, TimelineEntity};
use crate::error::TimelineError;
use crate::value::State;

/// Canvas bounds of a document.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, TimelineError> {
        if width < 1 || height < 1 {
            return Err(TimelineError::InvalidParameter(format!(
                "canvas {width}x{height} must have positive width and height"
            )));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 100,
            height: 100,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    bounds: Bounds,
    shapes: Vec<TimelineEntity>,
}

impl Registry {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            shapes: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Borrowed view of every shape, in insertion order.
    pub fn shapes(&self) -> &[TimelineEntity] {
        &self.shapes
    }

    pub fn get(&self, name: &str) -> Option<&TimelineEntity> {
        self.shapes.iter().find(|shape| shape.name == name)
    }

    /// Detached value copies of every shape. Holders keep these across later
    /// registry mutation without observing it.
    pub fn snapshot(&self) -> Vec<TimelineEntity> {
        self.shapes.clone()
    }

    pub fn snapshot_shape(&self, name: &str) -> Option<TimelineEntity> {
        self.get(name).cloned()
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut TimelineEntity, TimelineError> {
        self.shapes
            .iter_mut()
            .find(|shape| shape.name == name)
            .ok_or_else(|| TimelineError::NoSuchShape(name.to_string()))
    }

    /// Create a shape at `initial`, logging a zero-length first segment
    /// (start == end) so later commits have a known current time and state.
    pub fn add_shape(
        &mut self,
        kind: ShapeKind,
        name: &str,
        initial: State,
    ) -> Result<(), TimelineError> {
        if self.get(name).is_some() {
            return Err(TimelineError::DuplicateShape(name.to_string()));
        }
        let mut entity = TimelineEntity::new_motion(kind, name, initial);
        entity.log_state(initial);
        entity.log_state(initial);
        log::debug!(
            "added {} '{}' at t={}",
            kind.label(),
            name,
            initial.time
        );
        self.shapes.push(entity);
        Ok(())
    }

    /// Commit the motion segment [t0, t1] on `name`, applying `commands` in
    /// sequence to the working state.
    ///
    /// The whole command chain runs against a scratch copy first; any failure
    /// propagates with the history exactly as it was. When `t0` is away from
    /// the last recorded time, a bridge pair (held at the last state,
    /// restated at `t0`) is logged ahead of the new segment so no time gap is
    /// left undefined for interpolation.
    pub fn command_shape(
        &mut self,
        name: &str,
        t0: u32,
        t1: u32,
        commands: &[Command],
    ) -> Result<(), TimelineError> {
        let entity = self.find_mut(name)?;
        if t0 > t1 {
            return Err(TimelineError::InvalidParameter(format!(
                "segment start {t0} is after end {t1}"
            )));
        }
        for (start, end) in entity.segments() {
            let (s, e) = (start.time, end.time);
            if (t0 > s && t0 < e) || (t1 > s && t1 < e) || (s > t0 && s < t1) || (e > t0 && e < t1) {
                return Err(TimelineError::OverlappingSegment {
                    name: name.to_string(),
                    start: t0,
                    end: t1,
                });
            }
        }

        let held = entity.current;
        let mut next = held.at_time(t1);
        for command in commands {
            next = command.apply(&next)?;
        }

        if t0 != held.time {
            let bridge = held.at_time(t0);
            entity.log_state(held);
            entity.log_state(bridge);
            entity.log_state(bridge);
            log::debug!("bridged '{name}' from t={} to t={t0}", held.time);
        } else {
            entity.log_state(held);
        }
        entity.log_state(next);
        entity.current = next;
        log::debug!(
            "committed segment [{t0},{t1}] on '{name}' ({} command(s))",
            commands.len()
        );
        Ok(())
    }

    /// Insert a shape whose history is a single free-standing state.
    pub(crate) fn insert_free_entity(&mut self, kind: ShapeKind, name: &str, state: State) {
        let mut entity = TimelineEntity::new_motion(kind, name, state);
        entity.log_state(state);
        self.shapes.push(entity);
    }

    /// Append one free-standing state to an existing shape's motion log,
    /// bypassing segment pairing and overlap validation.
    pub(crate) fn append_free_state(&mut self, name: &str, state: State) -> Result<(), TimelineError> {
        let entity = self.find_mut(name)?;
        entity.log_state(state);
        entity.current = state;
        Ok(())
    }

    pub(crate) fn into_parts(self) -> (Bounds, Vec<TimelineEntity>) {
        (self.bounds, self.shapes)
    }
}
