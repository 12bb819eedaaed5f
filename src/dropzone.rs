//! Drop-target lifecycle
//!
//! [`DropZoneController`] owns the visual affordance of a single drop
//! target and converts low-level drag/drop events into one normalized
//! outcome: the first dropped JSON file, or a rejection. It performs no
//! I/O; reading and validating the file is the validator's job.

use std::cell::Cell;

use crate::error::IngestError;
use crate::file::{is_json_media_type, FileSource};

/// Visual state of the drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    #[default]
    Idle,
    Hover,
}

/// A drag or drop event delivered by the host.
///
/// Carries the dropped files (empty for drag-over/leave) and a flag the
/// controller sets to tell the host to skip its built-in handling, which
/// would otherwise navigate away or open the file.
#[derive(Debug)]
pub struct DragEvent<F> {
    files: Vec<F>,
    default_suppressed: bool,
}

impl<F> DragEvent<F> {
    /// An event with no file payload (drag-over, drag-leave)
    pub fn hover() -> Self {
        Self {
            files: Vec::new(),
            default_suppressed: false,
        }
    }

    /// A drop event carrying zero or more files
    pub fn drop(files: Vec<F>) -> Self {
        Self {
            files,
            default_suppressed: false,
        }
    }

    /// Whether the controller asked the host to suppress default handling
    pub fn default_suppressed(&self) -> bool {
        self.default_suppressed
    }
}

/// Controller for a single drop target.
///
/// State lives in `Cell`s: every browser callback shares the controller on
/// the same thread, so no callback ever needs an exclusive borrow.
#[derive(Debug, Default)]
pub struct DropZoneController {
    visual: Cell<VisualState>,
}

impl DropZoneController {
    pub fn new() -> Self {
        Self {
            visual: Cell::new(VisualState::Idle),
        }
    }

    /// Current visual state, for the host to render
    pub fn visual_state(&self) -> VisualState {
        self.visual.get()
    }

    /// A drag entered or moved over the target: suppress default handling
    /// and show the hover affordance.
    pub fn on_drag_over<F>(&self, event: &mut DragEvent<F>) {
        event.default_suppressed = true;
        self.visual.set(VisualState::Hover);
    }

    /// The drag left the target: revert to idle. No data implication.
    pub fn on_drag_leave(&self) {
        self.visual.set(VisualState::Idle);
    }

    /// A drop landed: suppress default handling, revert the visual state,
    /// and take exactly the first file. Any additional files are silently
    /// ignored. Rejections are terminal for this interaction; the target
    /// resets cleanly for the next drop.
    pub fn on_drop<F: FileSource>(&self, event: &mut DragEvent<F>) -> Result<F, IngestError> {
        event.default_suppressed = true;
        self.visual.set(VisualState::Idle);

        if event.files.is_empty() {
            return Err(IngestError::EmptyDrop);
        }
        let file = event.files.remove(0);

        if !is_json_media_type(file.media_type()) {
            return Err(IngestError::UnsupportedMediaType(
                file.media_type().to_string(),
            ));
        }

        Ok(file)
    }
}
