//! Pipeline orchestration
//!
//! [`IngestPipeline`] wires the drop-zone controller and the validator into
//! one drop-handling flow with defined behavior for overlapping drops:
//! an explicit `Idle -> Reading -> Idle` state machine rejects a second
//! drop that arrives while a file read is still in flight, instead of
//! letting the two interactions race.
//!
//! Error surfacing is deliberately asymmetric, matching the front end this
//! pipeline serves: drop rejections interrupt the user with a blocking
//! alert, while validation failures go to the developer log. Every error
//! is visible somewhere; none is fatal, and the drop zone stays usable.

use std::cell::Cell;

use uuid::Uuid;

use crate::drift::DriftCalculator;
use crate::dropzone::{DragEvent, DropZoneController, VisualState};
use crate::error::IngestError;
use crate::file::FileSource;
use crate::validator::ActivityDataValidator;

/// User-visible notification channel (the host's `alert` dialog)
pub trait UserNotifier {
    fn alert(&self, message: &str);
}

impl<N: UserNotifier + ?Sized> UserNotifier for &N {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

/// Notifier that routes alerts to the developer log, for headless hosts
pub struct LogNotifier;

impl UserNotifier for LogNotifier {
    fn alert(&self, message: &str) {
        log::warn!("user alert: {}", message);
    }
}

/// Single-flight phase of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Reading,
}

/// End-to-end drop handling: controller, validator, and error surfacing.
///
/// State lives in `Cell`s so that every host callback shares the pipeline
/// on the single UI thread without exclusive borrows.
pub struct IngestPipeline<C: DriftCalculator, N: UserNotifier> {
    dropzone: DropZoneController,
    validator: ActivityDataValidator<C>,
    notifier: N,
    phase: Cell<Phase>,
}

impl<C: DriftCalculator, N: UserNotifier> IngestPipeline<C, N> {
    pub fn new(calculator: C, notifier: N) -> Self {
        Self {
            dropzone: DropZoneController::new(),
            validator: ActivityDataValidator::new(calculator),
            notifier,
            phase: Cell::new(Phase::Idle),
        }
    }

    /// Current visual state of the drop target, for the host to render
    pub fn visual_state(&self) -> VisualState {
        self.dropzone.visual_state()
    }

    /// Whether a drop is currently being read and validated
    pub fn is_busy(&self) -> bool {
        self.phase.get() == Phase::Reading
    }

    pub fn on_drag_over<F>(&self, event: &mut DragEvent<F>) {
        self.dropzone.on_drag_over(event);
    }

    pub fn on_drag_leave(&self) {
        self.dropzone.on_drag_leave();
    }

    /// Handle a drop event end to end.
    ///
    /// Suspends once, while the file content is read; the pipeline returns
    /// to `Idle` on every exit path, so any failure leaves the drop zone
    /// ready for the next interaction.
    pub async fn handle_drop<F: FileSource>(
        &self,
        event: &mut DragEvent<F>,
    ) -> Result<(), IngestError> {
        if self.is_busy() {
            let err = IngestError::DropInProgress;
            self.notifier.alert(&err.to_string());
            return Err(err);
        }

        let file = match self.dropzone.on_drop(event) {
            Ok(file) => file,
            Err(err) => {
                self.notifier.alert(&err.to_string());
                return Err(err);
            }
        };

        let interaction = Uuid::new_v4();
        self.phase.set(Phase::Reading);
        let result = self.validator.validate_and_dispatch(&file).await;
        self.phase.set(Phase::Idle);

        match result {
            Ok(series) => {
                if !series.is_aligned() {
                    log::warn!(
                        "[{}] {}: heartrate/time length mismatch ({} vs {}), forwarded as-is",
                        interaction,
                        file.name(),
                        series.heartrate.len(),
                        series.time.len()
                    );
                }
                Ok(())
            }
            Err(err) => {
                log::error!(
                    "[{}] validation failed for {}: {}",
                    interaction,
                    file.name(),
                    err
                );
                Err(err)
            }
        }
    }
}
