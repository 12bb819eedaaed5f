//! Activity-data validation and dispatch
//!
//! [`ActivityDataValidator`] turns a dropped file into a
//! [`HeartRateSeries`] and forwards it to the drift computation, or fails
//! with a descriptive error. The file read is the only asynchronous
//! boundary; parsing never starts before it completes.

use crate::drift::DriftCalculator;
use crate::error::IngestError;
use crate::file::FileSource;
use crate::schema::parse_activity_document;
use crate::types::HeartRateSeries;

/// Validator for dropped activity files
pub struct ActivityDataValidator<C: DriftCalculator> {
    calculator: C,
}

impl<C: DriftCalculator> ActivityDataValidator<C> {
    /// Create a validator dispatching to the given computation entry point
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    /// Read, parse, and validate the file, then invoke the drift
    /// computation exactly once with the two sample sequences in the order
    /// (heartrate, time).
    ///
    /// The computation call is fire-and-forget: its return value (if any)
    /// is not awaited or interpreted. On any failure the computation is
    /// never invoked and the error describes the first problem found.
    pub async fn validate_and_dispatch<F: FileSource>(
        &self,
        file: &F,
    ) -> Result<HeartRateSeries, IngestError> {
        let text = file.read_text().await?;
        let series = parse_activity_document(&text)?;

        self.calculator
            .calculate_drift(&series.heartrate, &series.time);

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::MemoryFile;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Records every dispatch it receives
    #[derive(Default)]
    struct RecordingCalculator {
        calls: RefCell<Vec<(Vec<f64>, Vec<f64>)>>,
    }

    impl DriftCalculator for RecordingCalculator {
        fn calculate_drift(&self, heartrate: &[f64], time: &[f64]) {
            self.calls
                .borrow_mut()
                .push((heartrate.to_vec(), time.to_vec()));
        }
    }

    fn json_file(text: &str) -> MemoryFile {
        MemoryFile::new("activity.json", "application/json", text)
    }

    #[tokio::test]
    async fn test_valid_file_dispatches_once_in_order() {
        let calculator = RecordingCalculator::default();
        let validator = ActivityDataValidator::new(&calculator);
        let file = json_file(r#"{"heartrate":{"data":[60,62,65]},"time":{"data":[0,1,2]}}"#);

        validator.validate_and_dispatch(&file).await.unwrap();

        let calls = calculator.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, vec![60.0, 62.0, 65.0]);
        assert_eq!(calls[0].1, vec![0.0, 1.0, 2.0]);
    }

    #[tokio::test]
    async fn test_mismatched_lengths_are_forwarded_unchanged() {
        let calculator = RecordingCalculator::default();
        let validator = ActivityDataValidator::new(&calculator);
        let file = json_file(r#"{"heartrate":{"data":[60,62]},"time":{"data":[0,1,2,3]}}"#);

        validator.validate_and_dispatch(&file).await.unwrap();

        let calls = calculator.calls.borrow();
        assert_eq!(calls[0].0.len(), 2);
        assert_eq!(calls[0].1.len(), 4);
    }

    #[tokio::test]
    async fn test_malformed_json_never_dispatches() {
        let calculator = RecordingCalculator::default();
        let validator = ActivityDataValidator::new(&calculator);
        let file = json_file("definitely not json");

        let result = validator.validate_and_dispatch(&file).await;

        assert!(matches!(result, Err(IngestError::Malformed(_))));
        assert!(calculator.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_missing_time_never_dispatches() {
        let calculator = RecordingCalculator::default();
        let validator = ActivityDataValidator::new(&calculator);
        let file = json_file(r#"{"heartrate":{"data":[60,62]}}"#);

        let result = validator.validate_and_dispatch(&file).await;

        assert!(matches!(result, Err(IngestError::MissingField(f)) if f == "time.data"));
        assert!(calculator.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_drops_are_independent() {
        let calculator = RecordingCalculator::default();
        let validator = ActivityDataValidator::new(&calculator);
        let file = json_file(r#"{"heartrate":{"data":[60,62,65]},"time":{"data":[0,1,2]}}"#);

        validator.validate_and_dispatch(&file).await.unwrap();
        validator.validate_and_dispatch(&file).await.unwrap();

        let calls = calculator.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }
}
