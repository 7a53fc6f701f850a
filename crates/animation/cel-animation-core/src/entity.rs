//! Timeline entities: a shape plus its recorded history.
//!
//! History lives in one of two representations. Motion mode is the flat,
//! time-sorted log the registry appends to: entries pair up as committed
//! segments (2i, 2i+1). Keyframe mode is the collapsed form the editor works
//! on: one state per distinct time.

use serde::{Deserialize, Serialize};

use crate::value::State;

/// Closed set of drawable shape types.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Oval,
    Triangle,
}

impl ShapeKind {
    /// Canonical lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Oval => "oval",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Case-insensitive label lookup. "ellipse" is accepted as a synonym for
    /// Oval.
    pub fn parse_label(label: &str) -> Option<ShapeKind> {
        match label.to_ascii_lowercase().as_str() {
            "rectangle" => Some(ShapeKind::Rectangle),
            "oval" | "ellipse" => Some(ShapeKind::Oval),
            "triangle" => Some(ShapeKind::Triangle),
            _ => None,
        }
    }
}

/// A shape's recorded history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum History {
    /// Committed motion log: pairs (2i, 2i+1) are segments, sorted by time.
    /// A trailing unpaired state can appear through free-standing keyframe
    /// authoring; segment views ignore it.
    Motion(Vec<State>),
    /// One state per distinct time, sorted by time.
    Keyframe(Vec<State>),
}

impl History {
    pub fn states(&self) -> &[State] {
        match self {
            History::Motion(states) | History::Keyframe(states) => states,
        }
    }

    pub(crate) fn states_mut(&mut self) -> &mut Vec<State> {
        match self {
            History::Motion(states) | History::Keyframe(states) => states,
        }
    }

    pub fn len(&self) -> usize {
        self.states().len()
    }

    pub fn is_empty(&self) -> bool {
        self.states().is_empty()
    }
}

/// A shape (type + name), its working state, and its history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntity {
    pub name: String,
    pub kind: ShapeKind,
    /// Working state: the last committed end state or last keyframe edit.
    pub current: State,
    pub history: History,
}

impl TimelineEntity {
    pub(crate) fn new_motion(kind: ShapeKind, name: &str, initial: State) -> Self {
        Self {
            name: name.to_string(),
            kind,
            current: initial,
            history: History::Motion(Vec::new()),
        }
    }

    /// Append `state` to the history and restore time order. The sort is
    /// stable, so entries sharing a time keep their insertion order.
    pub(crate) fn log_state(&mut self, state: State) {
        let states = self.history.states_mut();
        states.push(state);
        states.sort_by_key(|s| s.time);
    }

    /// Committed segments: consecutive (start, end) pairs of the motion log.
    /// A trailing unpaired entry is not a segment and is skipped.
    pub fn segments(&self) -> impl Iterator<Item = (&State, &State)> {
        self.history
            .states()
            .chunks_exact(2)
            .map(|pair| (&pair[0], &pair[1]))
    }

    /// Collapse this entity's history to Keyframe mode: of each run of
    /// entries sharing a time (the boundary doubling produced by segment
    /// commits), only the last survives.
    pub(crate) fn convert_to_keyframes(&mut self) {
        let mut frames: Vec<State> = Vec::with_capacity(self.history.len());
        for state in self.history.states() {
            if frames.last().is_some_and(|prev| prev.time == state.time) {
                let last = frames.len() - 1;
                frames[last] = *state;
            } else {
                frames.push(*state);
            }
        }
        self.history = History::Keyframe(frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Dimension, Position, Rgb};

    fn state_at(time: u32, x: f64) -> State {
        State::new(
            time,
            Position::new(x, 0.0),
            Dimension::new(5.0, 5.0).unwrap(),
            Rgb::new(0, 0, 0),
            0,
        )
        .unwrap()
    }

    #[test]
    fn labels_parse_case_insensitively_with_the_ellipse_synonym() {
        assert_eq!(ShapeKind::parse_label("Rectangle"), Some(ShapeKind::Rectangle));
        assert_eq!(ShapeKind::parse_label("ELLIPSE"), Some(ShapeKind::Oval));
        assert_eq!(ShapeKind::parse_label("oval"), Some(ShapeKind::Oval));
        assert_eq!(ShapeKind::parse_label("triangle"), Some(ShapeKind::Triangle));
        assert_eq!(ShapeKind::parse_label("hexagon"), None);
    }

    #[test]
    fn conversion_keeps_the_last_entry_of_each_equal_time_run() {
        let mut entity = TimelineEntity::new_motion(ShapeKind::Rectangle, "r", state_at(0, 0.0));
        for state in [
            state_at(0, 0.0),
            state_at(10, 1.0),
            state_at(10, 2.0),
            state_at(20, 3.0),
        ] {
            entity.log_state(state);
        }
        entity.convert_to_keyframes();
        let frames = entity.history.states();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], state_at(0, 0.0));
        assert_eq!(frames[1], state_at(10, 2.0));
        assert_eq!(frames[2], state_at(20, 3.0));
    }

    #[test]
    fn log_state_keeps_the_motion_log_sorted() {
        let mut entity = TimelineEntity::new_motion(ShapeKind::Oval, "o", state_at(5, 0.0));
        entity.log_state(state_at(20, 2.0));
        entity.log_state(state_at(5, 1.0));
        let times: Vec<u32> = entity.history.states().iter().map(|s| s.time).collect();
        assert_eq!(times, vec![5, 20]);
    }
}
