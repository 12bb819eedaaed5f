//! Core types for the hrdrift ingestion pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated heart-rate series extracted from an activity document.
///
/// Two ordered sample sequences, aligned positionally: `heartrate[i]` was
/// measured at `time[i]`. Created once per drop, handed to the drift
/// computation, and released; never cached across drops.
///
/// The two sequences are not required to be the same length. The source
/// this pipeline replaces never checked, and downstream consumers zip the
/// shorter prefix, so a mismatch is passed through uninspected rather than
/// rejected. `is_aligned` exposes the check for callers that want to warn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateSeries {
    /// Heart-rate samples (beats per minute)
    pub heartrate: Vec<f64>,
    /// Elapsed-time samples (seconds from activity start)
    pub time: Vec<f64>,
    /// When this series was ingested (UTC)
    pub received_at: DateTime<Utc>,
}

impl HeartRateSeries {
    pub fn new(heartrate: Vec<f64>, time: Vec<f64>) -> Self {
        Self {
            heartrate,
            time,
            received_at: Utc::now(),
        }
    }

    /// True when both sequences carry the same number of samples
    pub fn is_aligned(&self) -> bool {
        self.heartrate.len() == self.time.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_lengths_are_allowed() {
        let series = HeartRateSeries::new(vec![60.0, 62.0], vec![0.0, 1.0, 2.0]);
        assert!(!series.is_aligned());
        assert_eq!(series.heartrate.len(), 2);
        assert_eq!(series.time.len(), 3);
    }

    #[test]
    fn test_aligned_series() {
        let series = HeartRateSeries::new(vec![60.0, 62.0, 65.0], vec![0.0, 1.0, 2.0]);
        assert!(series.is_aligned());
    }
}
