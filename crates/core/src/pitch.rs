//! Pitch sample type and the ingestion boundary for raw pitch blobs.
//!
//! Clients historically sent pitch data as a JSON array embedded in a text
//! field, sometimes with literal newlines inside the payload. Nothing past
//! [`parse_pitch_data`] ever sees that raw text form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// A single time-stamped frequency measurement.
///
/// Sequences are ordered by time ascending by convention, but nothing in
/// this crate assumes strict sorting is enforced upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct PitchSample {
    /// Offset from the start of the recording, in seconds.
    #[validate(range(min = 0.0))]
    pub time: f64,
    /// Measured fundamental frequency in Hz.
    #[validate(range(min = 0.0))]
    pub frequency: f64,
}

/// Parse a raw pitch-data blob into typed samples.
///
/// Strips embedded newlines, JSON-parses, then validates every sample.
pub fn parse_pitch_data(raw: &str) -> Result<Vec<PitchSample>, CoreError> {
    let cleaned = raw.replace('\n', "");
    let samples: Vec<PitchSample> = serde_json::from_str(cleaned.trim())
        .map_err(|e| CoreError::Validation(format!("invalid pitch data: {e}")))?;
    validate_samples(&samples)?;
    Ok(samples)
}

/// Validate an already-typed sequence: time and frequency must be
/// non-negative on every sample.
pub fn validate_samples(samples: &[PitchSample]) -> Result<(), CoreError> {
    for (i, sample) in samples.iter().enumerate() {
        sample
            .validate()
            .map_err(|e| CoreError::Validation(format!("pitch sample {i}: {e}")))?;
    }
    Ok(())
}

/// Filter a recording's samples down to a segment window.
///
/// Bounds are inclusive on both ends. Input order is preserved.
pub fn filter_window(samples: &[PitchSample], start_time: f64, end_time: f64) -> Vec<PitchSample> {
    samples
        .iter()
        .copied()
        .filter(|s| s.time >= start_time && s.time <= end_time)
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn sample(time: f64, frequency: f64) -> PitchSample {
        PitchSample { time, frequency }
    }

    #[test]
    fn parse_plain_array() {
        let samples = parse_pitch_data(r#"[{"time":0.5,"frequency":440.0}]"#).unwrap();
        assert_eq!(samples, vec![sample(0.5, 440.0)]);
    }

    #[test]
    fn parse_strips_embedded_newlines() {
        let raw = "[\n  {\"time\": 0.0, \"frequency\": 440.0},\n  {\"time\": 1.0, \"frequency\": 445.0}\n]\n";
        let samples = parse_pitch_data(raw).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1], sample(1.0, 445.0));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_pitch_data("not json").unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn parse_rejects_negative_frequency() {
        let err = parse_pitch_data(r#"[{"time":0.0,"frequency":-1.0}]"#).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn validate_rejects_negative_time() {
        let err = validate_samples(&[sample(-0.1, 440.0)]).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn validate_accepts_empty() {
        assert!(validate_samples(&[]).is_ok());
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let samples = [
            sample(19.9, 100.0),
            sample(20.0, 200.0),
            sample(35.0, 300.0),
            sample(50.0, 400.0),
            sample(50.1, 500.0),
        ];
        let filtered = filter_window(&samples, 20.0, 50.0);
        assert_eq!(
            filtered,
            vec![sample(20.0, 200.0), sample(35.0, 300.0), sample(50.0, 400.0)]
        );
    }

    #[test]
    fn window_keeps_unsorted_input_order() {
        let samples = [sample(3.0, 300.0), sample(1.0, 100.0), sample(2.0, 200.0)];
        let filtered = filter_window(&samples, 1.0, 3.0);
        assert_eq!(filtered, samples.to_vec());
    }
}
