//! Core data structures for plydecimate
//!
//! This crate provides the in-memory model of a PLY document: typed scalar
//! values, property schemas, elements with their records, and the document
//! that holds them together with header metadata. The model is independent of
//! the physical encoding, which only shows up as the `PlyFormat` tag.

pub mod scalar;
pub mod property;
pub mod element;
pub mod document;
pub mod error;

pub use scalar::*;
pub use property::*;
pub use element::*;
pub use document::*;
pub use error::*;

/// Conventional name of the point element
pub const DEFAULT_TARGET_ELEMENT: &str = "vertex";
