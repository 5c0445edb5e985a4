use serde::{Deserialize, Serialize};

/// Cached outcome of one quality-cell anchor.
///
/// `iterations_used` counts the budget REMAINING when the finder converged,
/// so lower values mean more iterations were consumed. `root_index` is `None`
/// when the finder never converged at this anchor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PixelSample {
    pub iterations_used: u32,
    pub root_index: Option<usize>,
}
