//! Incremental document construction from a structured instruction stream.
//!
//! An external parser feeds `BuildInstruction`s (or calls the methods
//! directly). Declared shapes stay pending (name and type label only) until
//! their first motion or keyframe instantiates them; pending shapes never
//! animated are dropped at `build()`.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::entity::ShapeKind;
use crate::error::TimelineError;
use crate::registry::{Bounds, Registry};
use crate::value::{Dimension, Position, Rgb, State};

/// Wire-level shape state, one instant, as a parser delivers it.
///
/// A missing `orientation` is the legacy field layout: it reads as 0 and
/// suppresses the rotate command on motions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawState {
    pub t: u32,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub r: i32,
    pub g: i32,
    pub b: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<i32>,
}

impl RawState {
    pub fn to_state(&self) -> Result<State, TimelineError> {
        State::new(
            self.t,
            Position::new(self.x, self.y),
            Dimension::new(self.w, self.h)?,
            Rgb::from_channels(self.r, self.g, self.b)?,
            self.orientation.unwrap_or(0),
        )
    }
}

/// One structured construction instruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BuildInstruction {
    SetBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    DeclareShape {
        name: String,
        kind: String,
    },
    Motion {
        name: String,
        from: RawState,
        to: RawState,
    },
    Keyframe {
        name: String,
        frame: RawState,
    },
}

#[derive(Debug, Default)]
pub struct DocumentBuilder {
    registry: Registry,
    /// Declared but not yet instantiated shapes: name -> type label.
    pending: HashMap<String, String>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the canvas.
    pub fn set_bounds(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<&mut Self, TimelineError> {
        self.registry.set_bounds(Bounds::new(x, y, width, height)?);
        Ok(self)
    }

    /// Record a shape declaration. No entity is created until the shape's
    /// first motion or keyframe.
    pub fn declare_shape(&mut self, name: &str, kind_label: &str) -> &mut Self {
        self.pending.insert(name.to_string(), kind_label.to_string());
        self
    }

    /// Commit one motion segment, instantiating the shape first if it is
    /// still pending. The segment becomes a Move + Scale + Paint command
    /// chain, plus Rotate when either endpoint carries an orientation.
    pub fn add_motion(
        &mut self,
        name: &str,
        from: RawState,
        to: RawState,
    ) -> Result<&mut Self, TimelineError> {
        let start = from.to_state()?;
        let mut commands = vec![
            Command::move_between(Position::new(from.x, from.y), Position::new(to.x, to.y)),
            Command::scale(start.dimension, Dimension::new(to.w, to.h)?)?,
            Command::paint(start.color, Rgb::from_channels(to.r, to.g, to.b)?),
        ];
        if from.orientation.is_some() || to.orientation.is_some() {
            commands.push(Command::rotate(
                from.orientation.unwrap_or(0),
                to.orientation.unwrap_or(0),
            )?);
        }
        if from.t > to.t {
            return Err(TimelineError::InvalidParameter(format!(
                "motion start {} is after end {}",
                from.t, to.t
            )));
        }
        let pending_kind = match self.pending.get(name) {
            Some(label) => Some(resolve_label(label)?),
            None => None,
        };
        if let Some(kind) = pending_kind {
            self.registry.add_shape(kind, name, start)?;
            self.pending.remove(name);
        }
        self.registry.command_shape(name, from.t, to.t, &commands)?;
        Ok(self)
    }

    /// Log a single free-standing state, instantiating the shape first if it
    /// is still pending. Out-of-band snapshot authoring: segment-overlap
    /// validation does not apply.
    pub fn add_keyframe(&mut self, name: &str, frame: RawState) -> Result<&mut Self, TimelineError> {
        let state = frame.to_state()?;
        if self.registry.get(name).is_some() {
            self.registry.append_free_state(name, state)?;
            return Ok(self);
        }
        let pending_kind = match self.pending.get(name) {
            Some(label) => Some(resolve_label(label)?),
            None => None,
        };
        match pending_kind {
            Some(kind) => {
                self.registry.insert_free_entity(kind, name, state);
                self.pending.remove(name);
            }
            None => return Err(TimelineError::NoSuchShape(name.to_string())),
        }
        Ok(self)
    }

    /// Dispatch one structured instruction.
    pub fn apply(&mut self, instruction: &BuildInstruction) -> Result<(), TimelineError> {
        match instruction {
            BuildInstruction::SetBounds {
                x,
                y,
                width,
                height,
            } => {
                self.set_bounds(*x, *y, *width, *height)?;
            }
            BuildInstruction::DeclareShape { name, kind } => {
                self.declare_shape(name, kind);
            }
            BuildInstruction::Motion { name, from, to } => {
                self.add_motion(name, *from, *to)?;
            }
            BuildInstruction::Keyframe { name, frame } => {
                self.add_keyframe(name, *frame)?;
            }
        }
        Ok(())
    }

    /// Finish construction. Pending shapes that never received a motion or
    /// keyframe are dropped, not materialized.
    pub fn build(self) -> Registry {
        for (name, label) in &self.pending {
            log::warn!("dropping shape '{name}' ({label}): declared but never animated");
        }
        self.registry
    }
}

fn resolve_label(label: &str) -> Result<ShapeKind, TimelineError> {
    ShapeKind::parse_label(label).ok_or_else(|| {
        TimelineError::InvalidParameter(format!("unknown shape type label '{label}'"))
    })
}
