//! Computation entry point seam
//!
//! The drift metric itself is computed by an external collaborator (a
//! separate numeric module on the host side). This crate only defines the
//! input contract: two positional sample sequences, heart rate first.

/// External heart-rate drift computation.
///
/// Invoked fire-and-forget by the validator: no return value is
/// interpreted, and failures inside the routine are outside the ingestion
/// error taxonomy. The sequences are positionally aligned but not
/// guaranteed equal in length.
pub trait DriftCalculator {
    fn calculate_drift(&self, heartrate: &[f64], time: &[f64]);
}

impl<C: DriftCalculator + ?Sized> DriftCalculator for &C {
    fn calculate_drift(&self, heartrate: &[f64], time: &[f64]) {
        (**self).calculate_drift(heartrate, time)
    }
}
