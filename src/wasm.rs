//! Browser bindings
//!
//! The JS host owns the DOM drop target and the `FileReader`; once it has
//! the file text it calls [`validate_activity_json`] and forwards the
//! returned series to its drift-computation entry point. Validation
//! failures are logged to the browser console and surfaced as a thrown
//! error.

use wasm_bindgen::prelude::*;

use crate::schema::parse_activity_document;

/// A validated heart-rate series handed back to the JS host
#[wasm_bindgen]
pub struct ValidatedSeries {
    heartrate: Vec<f64>,
    time: Vec<f64>,
}

#[wasm_bindgen]
impl ValidatedSeries {
    #[wasm_bindgen(getter)]
    pub fn heartrate(&self) -> Vec<f64> {
        self.heartrate.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn time(&self) -> Vec<f64> {
        self.time.clone()
    }
}

/// Validate activity JSON text read by the host's file reader.
#[wasm_bindgen]
pub fn validate_activity_json(text: &str) -> Result<ValidatedSeries, JsError> {
    match parse_activity_document(text) {
        Ok(series) => Ok(ValidatedSeries {
            heartrate: series.heartrate,
            time: series.time,
        }),
        Err(err) => {
            console_log(&format!("activity validation failed: {}", err));
            Err(JsError::new(&err.to_string()))
        }
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}
