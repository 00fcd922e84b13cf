//! Raw publication → [`PublicationRecord`].

use crate::models::{PublicationRecord, ScholarPublication, non_negative};

/// Map one raw record to the output schema.
///
/// Returns `None` when the title is missing or empty; such records are dropped.
#[must_use]
pub fn normalize(publication: &ScholarPublication) -> Option<PublicationRecord> {
    let bib = &publication.bib;
    let title = bib.title.as_deref().filter(|t| !t.is_empty())?;

    Some(PublicationRecord {
        title: title.to_string(),
        authors: bib.author.clone().unwrap_or_default(),
        year: bib.pub_year.as_ref().map(ToString::to_string).unwrap_or_default(),
        venue: first_non_empty(&[&bib.journal, &bib.conference, &bib.venue]),
        r#abstract: bib.r#abstract.clone().unwrap_or_default(),
        citations: non_negative(publication.num_citations),
        url: publication.pub_url.clone().unwrap_or_default(),
        pdf_url: publication.eprint_url.clone().unwrap_or_default(),
    })
}

/// Normalize every record, keeping input order. No deduplication.
#[must_use]
pub fn normalize_all(publications: &[ScholarPublication]) -> Vec<PublicationRecord> {
    publications.iter().filter_map(normalize).collect()
}

fn first_non_empty(candidates: &[&Option<String>]) -> String {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|c| !c.is_empty())
        .unwrap_or_default()
        .to_string()
}
