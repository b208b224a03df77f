//! Bytes-in, bytes-out reduction entry point
//!
//! Wraps parse, decimate and serialize into the single call used by front
//! ends, and reports what was done in a `ReductionSummary`.

use crate::random_sampling::decimate;
use plydecimate_core::{Document, Error, Result, DEFAULT_TARGET_ELEMENT};
use plydecimate_io::{PlyReader, PlyWriter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Reduction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReduceOptions {
    /// Element to thin out
    pub element: String,
    /// Fraction of records to keep, in (0, 1]
    pub retention_fraction: f64,
    /// Fixed seed for reproducible output; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            element: DEFAULT_TARGET_ELEMENT.to_string(),
            retention_fraction: 0.5,
            seed: None,
        }
    }
}

impl ReduceOptions {
    pub fn new(retention_fraction: f64) -> Self {
        Self {
            retention_fraction,
            ..Default::default()
        }
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject fractions outside (0, 1], NaN included
    pub fn validate(&self) -> Result<()> {
        let f = self.retention_fraction;
        if f > 0.0 && f <= 1.0 {
            Ok(())
        } else {
            Err(Error::InvalidFraction(f))
        }
    }

    /// Random source implied by `seed`
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// What a reduction did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReductionSummary {
    pub element: String,
    pub original_count: usize,
    pub retained_count: usize,
    pub requested_fraction: f64,
    /// `retained_count / original_count`, or the requested fraction for an
    /// empty element
    pub effective_fraction: f64,
}

impl ReductionSummary {
    fn new(element: &str, original_count: usize, retained_count: usize, requested_fraction: f64) -> Self {
        let effective_fraction = if original_count == 0 {
            requested_fraction
        } else {
            retained_count as f64 / original_count as f64
        };
        Self {
            element: element.to_string(),
            original_count,
            retained_count,
            requested_fraction,
            effective_fraction,
        }
    }
}

/// Decimate an already parsed document
pub fn reduce_document<R: Rng + ?Sized>(
    doc: &Document,
    options: &ReduceOptions,
    rng: &mut R,
) -> Result<(Document, ReductionSummary)> {
    options.validate()?;
    let reduced = decimate(doc, &options.element, options.retention_fraction, rng)?;

    let count = |d: &Document| d.element(&options.element).map_or(0, |e| e.len());
    let summary = ReductionSummary::new(
        &options.element,
        count(doc),
        count(&reduced),
        options.retention_fraction,
    );
    Ok((reduced, summary))
}

/// Parse, decimate and re-encode a PLY file using the given random source
pub fn reduce_bytes_with_rng<R: Rng + ?Sized>(
    input: &[u8],
    options: &ReduceOptions,
    rng: &mut R,
) -> Result<(Vec<u8>, ReductionSummary)> {
    options.validate()?;
    let doc = PlyReader::parse(input)?;
    let (reduced, summary) = reduce_document(&doc, options, rng)?;
    let output = PlyWriter::serialize(&reduced)?;
    tracing::debug!(input_bytes = input.len(), output_bytes = output.len(), "re-encoded document");
    Ok((output, summary))
}

/// Parse, decimate and re-encode a PLY file, seeding from `options.seed`
pub fn reduce_bytes(input: &[u8], options: &ReduceOptions) -> Result<(Vec<u8>, ReductionSummary)> {
    let mut rng = options.rng();
    reduce_bytes_with_rng(input, options, &mut rng)
}

/// Reduce the PLY file at `input` and write the result to `output`
pub fn reduce_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ReduceOptions,
) -> Result<ReductionSummary> {
    options.validate()?;
    let bytes = std::fs::read(input.as_ref())?;
    let (reduced, summary) = reduce_bytes(&bytes, options)?;
    std::fs::write(output.as_ref(), reduced)?;
    tracing::info!(
        input = %input.as_ref().display(),
        output = %output.as_ref().display(),
        retained = summary.retained_count,
        "wrote reduced file"
    );
    Ok(summary)
}

/// `reduced_<file name>` next to `input`
pub fn default_output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.ply".to_string());
    input.with_file_name(format!("reduced_{}", name))
}
