//! cel Animation Core (engine-agnostic)
//!
//! The shape timeline model: validated value types, precondition-matched
//! commands, a registry that commits motion segments without corrupting
//! history, a builder fed by a structured instruction stream, a keyframe
//! editor over converted histories, and the interpolator that reconstructs
//! render states at arbitrary query times. Renderers, exporters, parsers,
//! and UI live outside this crate and consume snapshots.

pub mod baking;
pub mod builder;
pub mod command;
pub mod editor;
pub mod entity;
pub mod error;
pub mod interp;
pub mod registry;
pub mod stored_document;
pub mod value;

// Re-exports for consumers (renderers, exporters, editing front-ends)
pub use baking::{bake_registry, export_baked_json, BakedDocument, BakedShape, BakingConfig};
pub use builder::{BuildInstruction, DocumentBuilder, RawState};
pub use command::Command;
pub use editor::KeyframeEditor;
pub use entity::{History, ShapeKind, TimelineEntity};
pub use error::TimelineError;
pub use interp::{blend, sample, weights, RenderState};
pub use registry::{Bounds, Registry};
pub use stored_document::{
    build_document, parse_stored_document_json, DocumentError, StoredBounds, StoredDocument,
    StoredMotion, StoredShape,
};
pub use value::{check_orientation, Dimension, Position, Rgb, State};
