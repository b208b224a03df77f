//! # plydecimate
//!
//! Format-aware random decimation of PLY point clouds and meshes.
//!
//! This is the umbrella crate that provides convenient access to all plydecimate
//! functionality. You can use this crate to get everything in one place, or use
//! individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Document model (elements, schemas, records) and errors
//! - **I/O**: PLY parsing and serialization (ASCII, binary little/big endian)
//! - **Simplification**: Uniform random decimation and the reduce pipeline
//!
//! ## Quick Start
//!
//! ```rust
//! use plydecimate::prelude::*;
//!
//! let input = b"ply\nformat ascii 1.0\nelement vertex 4\nproperty float x\nend_header\n0\n1\n2\n3\n";
//! let options = ReduceOptions::new(0.5).with_seed(7);
//! let (output, summary) = reduce_bytes(input, &options)?;
//!
//! assert_eq!(summary.original_count, 4);
//! assert_eq!(summary.retained_count, 2);
//! assert_eq!(PlyReader::parse(&output)?.element("vertex").unwrap().len(), 2);
//! # Ok::<(), plydecimate::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables io and simplification
//! - `io`: PLY parsing and serialization
//! - `simplification`: Random decimation (implies `io`)
//! - `all`: Enables all features

// Re-export core functionality
pub use plydecimate_core::*;

// Re-export sub-crates
#[cfg(feature = "io")]
pub use plydecimate_io as io;

#[cfg(feature = "simplification")]
pub use plydecimate_simplification as simplification;

/// Convenient imports for common use cases
pub mod prelude {
    pub use plydecimate_core::*;

    #[cfg(feature = "io")]
    pub use plydecimate_io::{PlyReader, PlyWriter, is_ply_path};

    #[cfg(feature = "simplification")]
    pub use plydecimate_simplification::*;
}

#[cfg(all(test, feature = "simplification"))]
mod tests {
    use crate::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_prelude_pipeline() {
        let input = b"ply\nformat ascii 1.0\nelement vertex 3\nproperty int id\nelement face 0\nproperty list uchar int vertex_indices\nend_header\n1\n2\n3\n";
        let doc = PlyReader::parse(input).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        let reduced = RandomDecimator::new(DEFAULT_TARGET_ELEMENT, 0.5).decimate(&doc, &mut rng).unwrap();
        assert_eq!(reduced.element("vertex").unwrap().len(), 1);
        assert!(reduced.element("face").unwrap().is_empty());

        let bytes = PlyWriter::serialize(&reduced).unwrap();
        assert!(std::str::from_utf8(&bytes).unwrap().contains("element vertex 1\n"));
    }
}
