//! Value types shared by every timeline operation.
//!
//! All of these are small `Copy` values compared by derived field-wise
//! equality. Checked constructors return `InvalidParameter` for out-of-range
//! wire input; once built, `Rgb` cannot hold an out-of-range channel at all.

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// 2D position in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of a shape's bounding box. Both sides are finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    pub fn new(width: f64, height: f64) -> Result<Self, TimelineError> {
        let dim = Self { width, height };
        dim.validate()?;
        Ok(dim)
    }

    pub(crate) fn validate(&self) -> Result<(), TimelineError> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0 {
            return Err(TimelineError::InvalidParameter(format!(
                "dimension {}x{} must be finite and strictly positive",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// RGB color with integer channels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Checked construction from wide wire integers.
    pub fn from_channels(r: i32, g: i32, b: i32) -> Result<Self, TimelineError> {
        let channel = |label: &str, v: i32| -> Result<u8, TimelineError> {
            u8::try_from(v).map_err(|_| {
                TimelineError::InvalidParameter(format!("color channel {label}={v} is outside 0..=255"))
            })
        };
        Ok(Self {
            r: channel("r", r)?,
            g: channel("g", g)?,
            b: channel("b", b)?,
        })
    }
}

/// Checked orientation entry point. The boundary value 360 is admitted here;
/// steady-state storage stays below it.
pub fn check_orientation(degrees: i32) -> Result<i32, TimelineError> {
    if (0..=360).contains(&degrees) {
        Ok(degrees)
    } else {
        Err(TimelineError::InvalidParameter(format!(
            "orientation {degrees} is outside 0..=360"
        )))
    }
}

/// A shape's full visible state at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub time: u32,
    pub position: Position,
    pub dimension: Dimension,
    pub color: Rgb,
    /// Orientation in degrees.
    pub orientation: i32,
}

impl State {
    pub fn new(
        time: u32,
        position: Position,
        dimension: Dimension,
        color: Rgb,
        orientation: i32,
    ) -> Result<Self, TimelineError> {
        dimension.validate()?;
        let orientation = check_orientation(orientation)?;
        Ok(Self {
            time,
            position,
            dimension,
            color,
            orientation,
        })
    }

    /// Copy of this state restamped at `time`.
    pub fn at_time(mut self, time: u32) -> Self {
        self.time = time;
        self
    }
}
