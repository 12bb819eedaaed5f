//! File handles dropped onto the ingestion pipeline
//!
//! The browser host owns the real file objects; the pipeline sees them
//! through [`FileSource`]. Reading the content is the pipeline's only
//! suspension point: the UI thread stays responsive while the read is in
//! flight, and parsing never begins before the read completes.

use crate::error::IngestError;

/// A user-supplied file: a name, a declared media type, and readable text.
///
/// The drop event owns the underlying content; the validator borrows the
/// handle only long enough to extract the text.
#[allow(async_fn_in_trait)] // single-threaded hosts; no Send bound wanted
pub trait FileSource {
    /// File name as declared by the host
    fn name(&self) -> &str;

    /// Declared MIME type (e.g. `application/json`)
    fn media_type(&self) -> &str;

    /// Read the full content as text. The single asynchronous boundary in
    /// the pipeline.
    async fn read_text(&self) -> Result<String, IngestError>;
}

/// A file whose content is already in memory.
///
/// The canonical host handoff: the browser's file reader (or a test)
/// supplies name, declared type, and text up front.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    media_type: String,
    text: String,
}

impl MemoryFile {
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            text: text.into(),
        }
    }
}

impl FileSource for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    async fn read_text(&self) -> Result<String, IngestError> {
        Ok(self.text.clone())
    }
}

/// Whether a declared MIME type is a JSON media type.
///
/// Accepts `application/json` (parameters such as `charset` stripped) and
/// any `+json` structured-syntax suffix.
pub fn is_json_media_type(media_type: &str) -> bool {
    let essence = media_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
