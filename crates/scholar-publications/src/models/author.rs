//! Author data model matching Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

/// A research author from Semantic Scholar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique Semantic Scholar author ID.
    pub author_id: String,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Author's institutional affiliations.
    #[serde(default)]
    pub affiliations: Vec<String>,

    /// Total number of papers by this author.
    #[serde(default)]
    pub paper_count: Option<i32>,

    /// Total citation count across all papers.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// h-index metric.
    #[serde(default)]
    pub h_index: Option<i32>,
}

impl Author {
    /// Affiliations joined into one display string, if any.
    #[must_use]
    pub fn affiliation(&self) -> Option<String> {
        if self.affiliations.is_empty() {
            None
        } else {
            Some(self.affiliations.join(", "))
        }
    }
}

/// Minimal author reference (used in paper author lists).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

/// One page of `/author/{id}/papers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorPapersResult {
    /// Offset for pagination.
    #[serde(default)]
    pub offset: i32,

    /// Next offset if more results.
    #[serde(default)]
    pub next: Option<i32>,

    /// List of papers.
    #[serde(default)]
    pub data: Vec<super::Paper>,
}

impl AuthorPapersResult {
    /// Check if there are more results.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next.is_some()
    }
}
