//! The persisted publications document.

use serde::{Deserialize, Serialize};

use super::ScholarAuthor;

/// Author summary written at the top of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    /// Display name.
    pub name: String,

    /// Affiliation.
    pub affiliation: String,

    /// The configured author identifier.
    pub scholar_id: String,

    /// Total citation count.
    pub citations: u32,

    /// h-index.
    pub h_index: u32,

    /// i10-index.
    pub i10_index: u32,
}

impl AuthorProfile {
    /// Build the profile from a fetched author.
    ///
    /// `scholar_id` is the configured identifier, not whatever the source echoes back.
    #[must_use]
    pub fn from_author(author: &ScholarAuthor, scholar_id: &str) -> Self {
        Self {
            name: author.name.clone().unwrap_or_default(),
            affiliation: author.affiliation.clone().unwrap_or_default(),
            scholar_id: scholar_id.to_string(),
            citations: non_negative(author.citedby),
            h_index: non_negative(author.hindex),
            i10_index: non_negative(author.i10index),
        }
    }
}

/// One normalized publication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Title, never empty.
    pub title: String,

    /// Authors as one free-form string.
    pub authors: String,

    /// Year as a string, possibly empty.
    pub year: String,

    /// Journal, conference or venue.
    pub venue: String,

    /// Abstract.
    pub r#abstract: String,

    /// Citation count.
    pub citations: u32,

    /// Canonical URL.
    pub url: String,

    /// PDF / eprint URL.
    pub pdf_url: String,
}

/// Everything written to disk in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDocument {
    /// Author summary.
    pub author: AuthorProfile,

    /// Publications sorted by year then citations, both descending.
    pub publications: Vec<PublicationRecord>,

    /// Generation time, ISO-8601 UTC with a `Z` suffix.
    pub updated_at: String,

    /// Number of publications.
    pub total: usize,
}

impl ResultDocument {
    /// Assemble a document. `total` is derived from `publications`.
    #[must_use]
    pub fn new(
        author: AuthorProfile,
        publications: Vec<PublicationRecord>,
        updated_at: String,
    ) -> Self {
        let total = publications.len();
        Self { author, publications, updated_at, total }
    }
}

/// Clamp an optional signed count to `u32`, treating missing and negative as zero.
pub(crate) fn non_negative(value: Option<i32>) -> u32 {
    value.and_then(|v| u32::try_from(v).ok()).unwrap_or(0)
}
