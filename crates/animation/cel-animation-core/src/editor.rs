//! Interactive keyframe editing over a built registry.
//!
//! Construction converts every shape's motion log to Keyframe mode (one
//! state per distinct time); the editing surface then works purely in
//! keyframes. Deleting a keyframe at a time that has none is a silent no-op,
//! while editing one is an error. The asymmetry is intentional and callers
//! rely on it.

use crate::entity::{History, ShapeKind, TimelineEntity};
use crate::error::TimelineError;
use crate::registry::{Bounds, Registry};
use crate::value::State;

#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeEditor {
    bounds: Bounds,
    shapes: Vec<TimelineEntity>,
}

impl KeyframeEditor {
    /// Wrap a built registry, converting each shape's history to keyframes.
    pub fn new(registry: Registry) -> Self {
        let (bounds, mut shapes) = registry.into_parts();
        for shape in &mut shapes {
            shape.convert_to_keyframes();
        }
        Self { bounds, shapes }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn shapes(&self) -> &[TimelineEntity] {
        &self.shapes
    }

    pub fn get(&self, name: &str) -> Option<&TimelineEntity> {
        self.shapes.iter().find(|shape| shape.name == name)
    }

    pub fn snapshot(&self) -> Vec<TimelineEntity> {
        self.shapes.clone()
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut TimelineEntity, TimelineError> {
        self.shapes
            .iter_mut()
            .find(|shape| shape.name == name)
            .ok_or_else(|| TimelineError::NoSuchShape(name.to_string()))
    }

    /// Create a shape whose sole keyframe is `state` (at `state.time`).
    pub fn add_shape(
        &mut self,
        kind: ShapeKind,
        name: &str,
        state: State,
    ) -> Result<(), TimelineError> {
        if self.get(name).is_some() {
            return Err(TimelineError::DuplicateShape(name.to_string()));
        }
        self.shapes.push(TimelineEntity {
            name: name.to_string(),
            kind,
            current: state,
            history: History::Keyframe(vec![state]),
        });
        Ok(())
    }

    /// Remove a shape and its entire history.
    pub fn delete_shape(&mut self, name: &str) -> Result<(), TimelineError> {
        let index = self
            .shapes
            .iter()
            .position(|shape| shape.name == name)
            .ok_or_else(|| TimelineError::NoSuchShape(name.to_string()))?;
        self.shapes.remove(index);
        Ok(())
    }

    /// Insert a keyframe at `state.time`, keeping the sequence sorted.
    pub fn add_keyframe(&mut self, name: &str, state: State) -> Result<(), TimelineError> {
        let shape_name = name.to_string();
        let entity = self.find_mut(name)?;
        let frames = entity.history.states_mut();
        if frames.iter().any(|frame| frame.time == state.time) {
            return Err(TimelineError::DuplicateTime {
                name: shape_name,
                time: state.time,
            });
        }
        let index = frames.partition_point(|frame| frame.time < state.time);
        frames.insert(index, state);
        entity.current = state;
        Ok(())
    }

    /// Remove the keyframe at `time`. Nothing to remove is not an error.
    pub fn delete_keyframe(&mut self, name: &str, time: u32) -> Result<(), TimelineError> {
        let entity = self.find_mut(name)?;
        let frames = entity.history.states_mut();
        if let Some(index) = frames.iter().position(|frame| frame.time == time) {
            frames.remove(index);
        }
        Ok(())
    }

    /// Replace the attributes of the keyframe at `time` in place; the
    /// keyframe keeps its time.
    pub fn edit_keyframe(
        &mut self,
        name: &str,
        time: u32,
        new_state: State,
    ) -> Result<(), TimelineError> {
        let shape_name = name.to_string();
        let entity = self.find_mut(name)?;
        let frames = entity.history.states_mut();
        let slot = frames
            .iter_mut()
            .find(|frame| frame.time == time)
            .ok_or(TimelineError::NoSuchKeyframe {
                name: shape_name,
                time,
            })?;
        *slot = new_state.at_time(time);
        entity.current = new_state.at_time(time);
        Ok(())
    }
}
