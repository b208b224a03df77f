//! Uniform random decimation of one element
//!
//! Records are drawn without replacement so every subset of the target size is
//! equally likely. Surviving records keep their original relative order.
//!
//! Random source consumption: `sample_indices` makes exactly one call to
//! `rand::seq::index::sample(rng, n, k)` when `0 < k < n`, and draws nothing
//! otherwise. With a fixed seed and the same `rand` release the selection is
//! therefore reproducible.

use crate::Decimator;
use plydecimate_core::{Document, Element, Error, Result, DEFAULT_TARGET_ELEMENT};
use rand::Rng;

/// Number of records kept from `n` at `fraction`: `max(1, floor(n * fraction))`
/// clamped to `n`, and 0 for an empty element.
pub fn keep_count(n: usize, fraction: f64) -> usize {
    if n == 0 {
        return 0;
    }
    let scaled = (n as f64 * fraction).floor();
    // NaN and negatives cast to 0, which the lower bound lifts back to 1.
    (scaled as usize).max(1).min(n)
}

/// Draw `k` distinct indices from `0..n`, returned in ascending order.
/// `k` is clamped to `n`.
pub fn sample_indices<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Vec<usize> {
    let k = k.min(n);
    if k == n {
        return (0..n).collect();
    }
    if k == 0 {
        return Vec::new();
    }
    let mut indices = rand::seq::index::sample(rng, n, k).into_vec();
    indices.sort_unstable();
    indices
}

/// Keep `k` uniformly chosen records of `element`, schema unchanged.
///
/// Asking for records from an element that has none is an `EmptyElement` error.
pub fn sample_element<R: Rng + ?Sized>(element: &Element, k: usize, rng: &mut R) -> Result<Element> {
    if element.is_empty() && k > 0 {
        return Err(Error::EmptyElement {
            name: element.name.clone(),
        });
    }
    let indices = sample_indices(element.len(), k, rng);
    Ok(element.select(&indices))
}

/// Copy of `doc` with the records of `target` randomly thinned to
/// `keep_count(n, retention_fraction)`. Everything else is carried over as is.
pub fn decimate<R: Rng + ?Sized>(
    doc: &Document,
    target: &str,
    retention_fraction: f64,
    rng: &mut R,
) -> Result<Document> {
    let element = doc.element(target).ok_or_else(|| Error::UnknownElement {
        name: target.to_string(),
    })?;

    let original = element.len();
    if original == 0 {
        tracing::debug!(element = target, "element is empty, nothing to decimate");
        return Ok(doc.clone());
    }

    let k = keep_count(original, retention_fraction);
    let reduced = sample_element(element, k, rng)?;
    tracing::info!(
        element = target,
        original,
        retained = reduced.len(),
        retention_fraction,
        "decimated element"
    );

    let mut out = doc.clone();
    out.replace_element(reduced)?;
    Ok(out)
}

/// Uniform random decimator for a single named element
#[derive(Debug, Clone, PartialEq)]
pub struct RandomDecimator {
    /// Element whose records are sampled
    pub target_element: String,
    /// Fraction of records to keep, in (0, 1]
    pub retention_fraction: f64,
}

impl RandomDecimator {
    pub fn new(target_element: impl Into<String>, retention_fraction: f64) -> Self {
        Self {
            target_element: target_element.into(),
            retention_fraction,
        }
    }
}

impl Default for RandomDecimator {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_ELEMENT, 0.5)
    }
}

impl Decimator for RandomDecimator {
    fn decimate<R: Rng + ?Sized>(&self, doc: &Document, rng: &mut R) -> Result<Document> {
        decimate(doc, &self.target_element, self.retention_fraction, rng)
    }
}
