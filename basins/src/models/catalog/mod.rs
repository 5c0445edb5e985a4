use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

/// Insertion-ordered list of the distinct roots discovered this generation.
///
/// A root's position in the catalog is its stable color index, so the order
/// depends on the raster scan order of the first pixel that converged to it.
/// Clustering is greedy and append-only: a candidate within `2 * epsilon` of
/// an existing entry joins that entry (first match wins), entries are never
/// merged or re-centered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RootCatalog {
    entries: Vec<Complex>,
}

impl RootCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn roots(&self) -> &[Complex] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Index of the cluster `candidate` belongs to, appending a new entry
    /// when no existing root is within `2 * epsilon`.
    pub fn index_for(&mut self, candidate: Complex, epsilon: f64) -> usize {
        for (index, root) in self.entries.iter().enumerate() {
            if (*root - candidate).norm() <= 2.0 * epsilon {
                return index;
            }
        }
        self.entries.push(candidate);
        self.entries.len() - 1
    }
}
