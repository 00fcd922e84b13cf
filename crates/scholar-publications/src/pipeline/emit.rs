//! Document assembly and writing.

use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use tracing::info;

use crate::error::{PipelineError, PipelineResult};
use crate::models::{AuthorProfile, PublicationRecord, ResultDocument};

/// Current UTC time as ISO-8601 with microseconds and a `Z` suffix.
#[must_use]
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Assemble the document, stamped with the current time.
#[must_use]
pub fn build_document(
    author: AuthorProfile,
    publications: Vec<PublicationRecord>,
) -> ResultDocument {
    ResultDocument::new(author, publications, timestamp())
}

/// Serialize with two-space indentation. Non-ASCII text is written as-is.
pub fn render(document: &ResultDocument) -> PipelineResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Write `document` to `path`, creating parent directories and replacing any existing file.
pub fn write_document(document: &ResultDocument, path: &Path) -> PipelineResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PipelineError::io(parent, e))?;
    }

    let json = render(document)?;
    fs::write(path, json).map_err(|e| PipelineError::io(path, e))?;

    info!(path = %path.display(), total = document.total, "Wrote publications document");
    Ok(())
}
