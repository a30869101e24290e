//! Index-aligned pitch accuracy scoring.
//!
//! Samples are compared pairwise by position in each sequence, not by
//! nearest timestamp. Submissions are captured against the same playback
//! clock as the reference, so positional alignment is the contract here,
//! not an approximation of time warping.

use serde::Serialize;

use crate::error::CoreError;
use crate::pitch::PitchSample;

/// Maximum |Δfrequency| in Hz for a sample pair to count as a match.
pub const PITCH_TOLERANCE_HZ: f64 = 3.0;

/// Outcome of scoring one submitted sequence against a reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracyReport {
    /// Number of index-aligned pairs compared: the min of the two lengths.
    pub total_entries: i32,
    /// Pairs within [`PITCH_TOLERANCE_HZ`].
    pub total_matches: i32,
    /// Match percentage in `[0, 100]`.
    pub accuracy: f64,
}

impl AccuracyReport {
    /// The percentage in its canonical two-decimal string form, e.g. `"87.50%"`.
    pub fn formatted(&self) -> String {
        format!("{:.2}%", self.accuracy)
    }
}

/// Score a submitted sequence against a reference sequence.
///
/// Returns [`CoreError::EmptyComparison`] when either sequence is empty.
pub fn score(reference: &[PitchSample], user: &[PitchSample]) -> Result<AccuracyReport, CoreError> {
    let total_entries = reference.len().min(user.len());
    if total_entries == 0 {
        return Err(CoreError::EmptyComparison);
    }
    let total_matches = reference
        .iter()
        .zip(user)
        .filter(|(r, u)| (r.frequency - u.frequency).abs() <= PITCH_TOLERANCE_HZ)
        .count();
    Ok(AccuracyReport {
        total_entries: total_entries as i32,
        total_matches: total_matches as i32,
        accuracy: total_matches as f64 / total_entries as f64 * 100.0,
    })
}
