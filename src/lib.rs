//! hrdrift - ingestion and validation pipeline for heart-rate drift analysis
//!
//! hrdrift turns a user-dropped activity JSON file into validated
//! heart-rate and time sample series and hands them to an external drift
//! computation: drop-target lifecycle → file read → JSON shape validation
//! → dispatch.
//!
//! ## Modules
//!
//! - **dropzone**: drop-target lifecycle and event normalization
//! - **validator / schema**: read, parse, and validate activity documents
//! - **pipeline**: end-to-end drop handling with single-flight protection
//! - **activity**: authenticated activity-stream fetch (same validation)

pub mod activity;
pub mod drift;
pub mod dropzone;
pub mod error;
pub mod file;
pub mod pipeline;
pub mod schema;
pub mod types;
pub mod validator;

// Browser bindings for wasm hosts
#[cfg(feature = "wasm")]
pub mod wasm;

pub use activity::{ActivityService, ActivityStreamClient, Session};
pub use drift::DriftCalculator;
pub use dropzone::{DragEvent, DropZoneController, VisualState};
pub use error::IngestError;
pub use file::{is_json_media_type, FileSource, MemoryFile};
pub use pipeline::{IngestPipeline, LogNotifier, UserNotifier};
pub use schema::parse_activity_document;
pub use types::HeartRateSeries;
pub use validator::ActivityDataValidator;

#[cfg(feature = "net")]
pub use activity::HttpStreamClient;

/// Crate version reported by the CLI
pub const HRDRIFT_VERSION: &str = env!("CARGO_PKG_VERSION");
