//! Activity-document parsing and shape validation
//!
//! An activity document is a JSON object carrying (at minimum) two numeric
//! sample streams keyed by stream type:
//!
//! ```json
//! { "heartrate": { "data": [60, 62, 65] },
//!   "time":      { "data": [0, 1, 2] } }
//! ```
//!
//! Additional fields are ignored. Both streams are required; their lengths
//! are not compared (see [`HeartRateSeries`]).

use serde_json::Value;

use crate::error::IngestError;
use crate::types::HeartRateSeries;

/// Field path of the heart-rate samples within an activity document
pub const HEARTRATE_FIELD: &str = "heartrate.data";

/// Field path of the time samples within an activity document
pub const TIME_FIELD: &str = "time.data";

/// Parse activity JSON text and validate its shape.
///
/// Syntax errors surface as [`IngestError::Malformed`] with no partial
/// extraction. A well-formed document missing either sample stream, or
/// carrying one that is not an array of numbers, surfaces as
/// [`IngestError::MissingField`] naming the offending path.
pub fn parse_activity_document(text: &str) -> Result<HeartRateSeries, IngestError> {
    let document: Value = serde_json::from_str(text)?;

    let heartrate = extract_samples(&document, "heartrate", HEARTRATE_FIELD)?;
    let time = extract_samples(&document, "time", TIME_FIELD)?;

    Ok(HeartRateSeries::new(heartrate, time))
}

/// Extract `<stream>.data` as a numeric array, or fail naming `field_path`
fn extract_samples(
    document: &Value,
    stream: &str,
    field_path: &str,
) -> Result<Vec<f64>, IngestError> {
    let data = document
        .get(stream)
        .and_then(|stream| stream.get("data"))
        .and_then(Value::as_array)
        .ok_or_else(|| IngestError::MissingField(field_path.to_string()))?;

    data.iter()
        .map(|sample| {
            sample
                .as_f64()
                .ok_or_else(|| IngestError::MissingField(field_path.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_document() {
        let text = r#"{"heartrate":{"data":[60,62,65]},"time":{"data":[0,1,2]}}"#;
        let series = parse_activity_document(text).unwrap();

        assert_eq!(series.heartrate, vec![60.0, 62.0, 65.0]);
        assert_eq!(series.time, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_additional_fields_are_ignored() {
        let text = r#"{
            "heartrate": {"data": [118], "series_type": "time"},
            "time": {"data": [30]},
            "altitude": {"data": [12.5]}
        }"#;
        let series = parse_activity_document(text).unwrap();

        assert_eq!(series.heartrate, vec![118.0]);
        assert_eq!(series.time, vec![30.0]);
    }

    #[test]
    fn test_empty_arrays_are_valid() {
        let text = r#"{"heartrate":{"data":[]},"time":{"data":[]}}"#;
        let series = parse_activity_document(text).unwrap();

        assert!(series.heartrate.is_empty());
        assert!(series.time.is_empty());
    }

    #[test]
    fn test_mismatched_lengths_pass_through() {
        let text = r#"{"heartrate":{"data":[60,62]},"time":{"data":[0,1,2]}}"#;
        let series = parse_activity_document(text).unwrap();

        assert!(!series.is_aligned());
        assert_eq!(series.heartrate.len(), 2);
        assert_eq!(series.time.len(), 3);
    }

    #[test]
    fn test_malformed_json() {
        let result = parse_activity_document("not valid json");
        assert!(matches!(result, Err(IngestError::Malformed(_))));
    }

    #[test]
    fn test_missing_heartrate_stream() {
        let result = parse_activity_document(r#"{"time":{"data":[0,1,2]}}"#);
        match result {
            Err(IngestError::MissingField(field)) => assert_eq!(field, "heartrate.data"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_time_stream() {
        let result = parse_activity_document(r#"{"heartrate":{"data":[60,62]}}"#);
        match result {
            Err(IngestError::MissingField(field)) => assert_eq!(field, "time.data"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_data_must_be_an_array() {
        let result = parse_activity_document(r#"{"heartrate":{"data":"60,62"},"time":{"data":[0]}}"#);
        assert!(matches!(result, Err(IngestError::MissingField(f)) if f == "heartrate.data"));
    }

    #[test]
    fn test_samples_must_be_numeric() {
        let result =
            parse_activity_document(r#"{"heartrate":{"data":[60]},"time":{"data":[0,"one"]}}"#);
        assert!(matches!(result, Err(IngestError::MissingField(f)) if f == "time.data"));
    }
}
