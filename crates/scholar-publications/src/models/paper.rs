//! Paper data model matching Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

use super::AuthorRef;

/// A research paper from Semantic Scholar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Unique Semantic Scholar paper ID.
    pub paper_id: String,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// List of authors.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,

    /// Free-form publication venue string.
    #[serde(default)]
    pub venue: Option<String>,

    /// Journal the paper appeared in.
    #[serde(default)]
    pub journal: Option<Journal>,

    /// Normalized venue record, typed as journal or conference.
    #[serde(default)]
    pub publication_venue: Option<PublicationVenue>,

    /// Semantic Scholar landing page.
    #[serde(default)]
    pub url: Option<String>,

    /// Open access PDF information.
    #[serde(default)]
    pub open_access_pdf: Option<OpenAccessPdf>,
}

impl Paper {
    /// Get the open access PDF URL if available.
    #[must_use]
    pub fn pdf_url(&self) -> Option<&str> {
        self.open_access_pdf.as_ref()?.url.as_deref()
    }

    /// Journal name, if the paper has one.
    #[must_use]
    pub fn journal_name(&self) -> Option<&str> {
        self.journal.as_ref()?.name.as_deref()
    }

    /// Venue name when the normalized venue is a conference.
    #[must_use]
    pub fn conference_name(&self) -> Option<&str> {
        let venue = self.publication_venue.as_ref()?;
        if venue.kind.as_deref().is_some_and(|k| k.eq_ignore_ascii_case("conference")) {
            venue.name.as_deref()
        } else {
            None
        }
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .filter_map(|a| a.name.as_ref())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Journal information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    /// Journal name.
    #[serde(default)]
    pub name: Option<String>,

    /// Volume.
    #[serde(default)]
    pub volume: Option<String>,

    /// Page range.
    #[serde(default)]
    pub pages: Option<String>,
}

/// Normalized publication venue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicationVenue {
    /// Venue ID.
    #[serde(default)]
    pub id: Option<String>,

    /// Venue name.
    #[serde(default)]
    pub name: Option<String>,

    /// "journal" or "conference".
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Open access PDF information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAccessPdf {
    /// Direct URL to the PDF.
    pub url: Option<String>,

    /// Status of open access.
    pub status: Option<String>,
}
