//! Data models.
//!
//! API models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match Graph API naming. Source-neutral
//! records sit between the API and the pipeline; the document types are what
//! gets written to disk.

mod author;
mod document;
mod paper;
mod record;

pub use author::{Author, AuthorPapersResult, AuthorRef};
pub use document::{AuthorProfile, PublicationRecord, ResultDocument};
pub(crate) use document::non_negative;
pub use paper::{Journal, OpenAccessPdf, Paper, PublicationVenue};
pub use record::{Bibliography, PubYear, ScholarAuthor, ScholarPublication, i10_index};
