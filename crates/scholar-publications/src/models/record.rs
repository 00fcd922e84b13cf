//! Source-neutral author and publication records.
//!
//! These are what a [`ScholarSource`](crate::source::ScholarSource) hands to the
//! pipeline. Every field is optional because a record may be a summary from a
//! listing or a partially expanded entry.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Author, Paper};

/// Publication year as reported by the source.
///
/// Some sources send an integer, others a free-form string such as `"n.d."`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PubYear {
    /// Numeric year.
    Number(i64),
    /// Year as text, kept verbatim.
    Text(String),
}

impl fmt::Display for PubYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(year) => write!(f, "{year}"),
            Self::Text(year) => f.write_str(year),
        }
    }
}

impl From<i32> for PubYear {
    fn from(year: i32) -> Self {
        Self::Number(i64::from(year))
    }
}

impl From<&str> for PubYear {
    fn from(year: &str) -> Self {
        Self::Text(year.to_string())
    }
}

/// Bibliographic fields of a publication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bibliography {
    /// Title.
    #[serde(default)]
    pub title: Option<String>,

    /// Authors as a single free-form string.
    #[serde(default)]
    pub author: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub pub_year: Option<PubYear>,

    /// Journal name.
    #[serde(default)]
    pub journal: Option<String>,

    /// Conference name.
    #[serde(default)]
    pub conference: Option<String>,

    /// Free-form venue.
    #[serde(default)]
    pub venue: Option<String>,

    /// Abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,
}

/// One publication, either a listing summary or fully expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarPublication {
    /// Source-specific key used to expand this record.
    #[serde(default)]
    pub source_id: Option<String>,

    /// Bibliographic fields.
    #[serde(default)]
    pub bib: Bibliography,

    /// Citation count.
    #[serde(default)]
    pub num_citations: Option<i32>,

    /// Canonical landing page.
    #[serde(default)]
    pub pub_url: Option<String>,

    /// Direct PDF / eprint link.
    #[serde(default)]
    pub eprint_url: Option<String>,

    /// Whether full detail has been loaded.
    #[serde(default)]
    pub filled: bool,
}

/// An author profile and, once expanded, its publications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarAuthor {
    /// Source identifier of the author.
    pub scholar_id: String,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Affiliation.
    #[serde(default)]
    pub affiliation: Option<String>,

    /// Total citations.
    #[serde(default)]
    pub citedby: Option<i32>,

    /// h-index.
    #[serde(default)]
    pub hindex: Option<i32>,

    /// i10-index.
    #[serde(default)]
    pub i10index: Option<i32>,

    /// Publication list (empty until expanded).
    #[serde(default)]
    pub publications: Vec<ScholarPublication>,

    /// Whether the publication list has been loaded.
    #[serde(default)]
    pub filled: bool,
}

/// Number of publications with at least ten citations.
#[must_use]
pub fn i10_index(publications: &[ScholarPublication]) -> i32 {
    let count = publications.iter().filter(|p| p.num_citations.unwrap_or(0) >= 10).count();
    i32::try_from(count).unwrap_or(i32::MAX)
}

impl From<Author> for ScholarAuthor {
    fn from(author: Author) -> Self {
        let affiliation = author.affiliation();
        Self {
            scholar_id: author.author_id,
            name: author.name,
            affiliation,
            citedby: author.citation_count,
            hindex: author.h_index,
            i10index: None,
            publications: Vec::new(),
            filled: false,
        }
    }
}

impl From<Paper> for ScholarPublication {
    fn from(paper: Paper) -> Self {
        let author = Some(paper.author_names()).filter(|a| !a.is_empty());
        let journal = paper.journal_name().map(str::to_string);
        let conference = paper.conference_name().map(str::to_string);
        let eprint_url = paper.pdf_url().map(str::to_string);

        Self {
            source_id: Some(paper.paper_id),
            bib: Bibliography {
                title: paper.title,
                author,
                pub_year: paper.year.map(PubYear::from),
                journal,
                conference,
                venue: paper.venue,
                r#abstract: paper.r#abstract,
            },
            num_citations: paper.citation_count,
            pub_url: paper.url,
            eprint_url,
            filled: false,
        }
    }
}
