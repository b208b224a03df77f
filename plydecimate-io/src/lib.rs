//! I/O operations for PLY documents
//!
//! This crate turns raw PLY bytes into a `plydecimate_core::Document` and back.
//! The header is always text; the body is decoded as ASCII or as binary with
//! the declared byte order.

pub mod header;
pub mod ascii;
pub mod binary;
pub mod ply;

#[cfg(test)]
mod tests;

pub use header::{parse_header, write_header, ElementDecl, PlyHeader};
pub use ply::{PlyReader, PlyWriter};

use std::path::Path;

/// Whether `path` carries a `.ply` extension (case-insensitive)
pub fn is_ply_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("ply"))
        .unwrap_or(false)
}

/// Parse a PLY file held in memory
pub fn parse(bytes: &[u8]) -> plydecimate_core::Result<plydecimate_core::Document> {
    PlyReader::parse(bytes)
}

/// Encode a document in its declared format
pub fn serialize(doc: &plydecimate_core::Document) -> plydecimate_core::Result<Vec<u8>> {
    PlyWriter::serialize(doc)
}
