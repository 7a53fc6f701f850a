//! Canonical stored-document loading.
//!
//! A document is JSON of the form
//! `{"bounds": {...}, "shapes": [{"name", "type", "motions": [{"from","to"}],
//! "keyframes": [...]}]}` with `RawState` leaves. Parsing drives the
//! document through `DocumentBuilder` in authored order, so motion
//! bridging and pending-shape resolution behave exactly as they do for a
//! live instruction stream. Loading is one-directional; the schema types
//! serialize too, which is what round-trips a document at the JSON level.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builder::{DocumentBuilder, RawState};
use crate::error::TimelineError;
use crate::registry::Registry;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Model(#[from] TimelineError),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StoredBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredMotion {
    pub from: RawState,
    pub to: RawState,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredShape {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub motions: Vec<StoredMotion>,
    #[serde(default)]
    pub keyframes: Vec<RawState>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    #[serde(default)]
    pub bounds: Option<StoredBounds>,
    #[serde(default)]
    pub shapes: Vec<StoredShape>,
}

/// Parse canonical document JSON into a built `Registry`.
pub fn parse_stored_document_json(s: &str) -> Result<Registry, DocumentError> {
    let doc: StoredDocument =
        serde_json::from_str(s).map_err(|e| DocumentError::Parse(e.to_string()))?;
    build_document(&doc).map_err(DocumentError::Model)
}

/// Run an already-decoded document through the builder.
pub fn build_document(doc: &StoredDocument) -> Result<Registry, TimelineError> {
    let mut builder = DocumentBuilder::new();
    if let Some(bounds) = doc.bounds {
        builder.set_bounds(bounds.x, bounds.y, bounds.width, bounds.height)?;
    }
    for shape in &doc.shapes {
        builder.declare_shape(&shape.name, &shape.kind);
    }
    for shape in &doc.shapes {
        for motion in &shape.motions {
            builder.add_motion(&shape.name, motion.from, motion.to)?;
        }
        for keyframe in &shape.keyframes {
            builder.add_keyframe(&shape.name, *keyframe)?;
        }
    }
    Ok(builder.build())
}
