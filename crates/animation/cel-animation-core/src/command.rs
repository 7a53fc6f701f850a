//! Precondition-matched commands over shape state.
//!
//! Each variant carries a required `from` and `to` value. `apply` is a pure
//! function: it demands that the working state's relevant attribute equals
//! `from` exactly (the model's only defense against committing a transition
//! against a state the caller never saw), then returns the state with that
//! attribute replaced.

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;
use crate::value::{check_orientation, Dimension, Position, Rgb, State};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Move { from: Position, to: Position },
    Scale { from: Dimension, to: Dimension },
    Paint { from: Rgb, to: Rgb },
    Rotate { from: i32, to: i32 },
}

impl Command {
    pub fn move_between(from: Position, to: Position) -> Self {
        Command::Move { from, to }
    }

    pub fn scale(from: Dimension, to: Dimension) -> Result<Self, TimelineError> {
        from.validate()?;
        to.validate()?;
        Ok(Command::Scale { from, to })
    }

    pub fn paint(from: Rgb, to: Rgb) -> Self {
        Command::Paint { from, to }
    }

    pub fn rotate(from: i32, to: i32) -> Result<Self, TimelineError> {
        Ok(Command::Rotate {
            from: check_orientation(from)?,
            to: check_orientation(to)?,
        })
    }

    /// Apply this command to `state`, producing the updated state.
    pub fn apply(&self, state: &State) -> Result<State, TimelineError> {
        match *self {
            Command::Move { from, to } => {
                if state.position != from {
                    return Err(TimelineError::PreconditionMismatch(format!(
                        "move expects position ({}, {}) but the shape is at ({}, {})",
                        from.x, from.y, state.position.x, state.position.y
                    )));
                }
                Ok(State {
                    position: to,
                    ..*state
                })
            }
            Command::Scale { from, to } => {
                if state.dimension != from {
                    return Err(TimelineError::PreconditionMismatch(format!(
                        "scale expects size {}x{} but the shape is {}x{}",
                        from.width, from.height, state.dimension.width, state.dimension.height
                    )));
                }
                Ok(State {
                    dimension: to,
                    ..*state
                })
            }
            Command::Paint { from, to } => {
                if state.color != from {
                    return Err(TimelineError::PreconditionMismatch(format!(
                        "paint expects color ({},{},{}) but the shape is ({},{},{})",
                        from.r, from.g, from.b, state.color.r, state.color.g, state.color.b
                    )));
                }
                Ok(State { color: to, ..*state })
            }
            Command::Rotate { from, to } => {
                if state.orientation != from {
                    return Err(TimelineError::PreconditionMismatch(format!(
                        "rotate expects orientation {} but the shape is at {}",
                        from, state.orientation
                    )));
                }
                Ok(State {
                    orientation: to,
                    ..*state
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_state() -> State {
        State::new(
            0,
            Position::new(10.0, 20.0),
            Dimension::new(30.0, 40.0).unwrap(),
            Rgb::new(50, 60, 70),
            80,
        )
        .unwrap()
    }

    #[test]
    fn apply_replaces_only_the_targeted_attribute() {
        let state = base_state();
        let moved = Command::move_between(Position::new(10.0, 20.0), Position::new(1.0, 2.0))
            .apply(&state)
            .unwrap();
        assert_eq!(moved.position, Position::new(1.0, 2.0));
        assert_eq!(moved.dimension, state.dimension);
        assert_eq!(moved.color, state.color);
        assert_eq!(moved.orientation, state.orientation);
        assert_eq!(moved.time, state.time);
    }

    #[test]
    fn apply_rejects_a_stale_from_value() {
        let state = base_state();
        let err = Command::paint(Rgb::new(1, 1, 1), Rgb::new(2, 2, 2))
            .apply(&state)
            .unwrap_err();
        assert!(matches!(err, TimelineError::PreconditionMismatch(_)));
    }

    #[test]
    fn constructors_validate_ranges() {
        assert!(Command::rotate(0, 360).is_ok());
        assert!(Command::rotate(-1, 0).is_err());
        assert!(Command::rotate(0, 361).is_err());
        assert!(Command::scale(
            Dimension {
                width: 0.0,
                height: 1.0
            },
            Dimension {
                width: 1.0,
                height: 1.0
            }
        )
        .is_err());
    }
}
