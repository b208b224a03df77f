//! Point decimation for PLY documents
//!
//! This crate reduces the record count of one element of a PLY document by
//! uniform random sampling, leaving every other element untouched:
//! - Keep-count policy and index sampling
//! - Element and document decimation
//! - A bytes-in, bytes-out pipeline with a summary of the reduction

pub mod random_sampling;
pub mod pipeline;

pub use random_sampling::*;
pub use pipeline::*;

use plydecimate_core::{Document, Result};
use rand::Rng;

/// Produce a reduced copy of a document
pub trait Decimator {
    /// Decimate `doc` drawing randomness from `rng`; the input is not modified
    fn decimate<R: Rng + ?Sized>(&self, doc: &Document, rng: &mut R) -> Result<Document>;
}
