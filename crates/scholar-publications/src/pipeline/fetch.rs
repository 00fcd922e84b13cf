//! Author resolution and per-publication expansion.

use tracing::{debug, info, warn};

use crate::error::{PipelineError, PipelineResult};
use crate::models::{ScholarAuthor, ScholarPublication};
use crate::source::ScholarSource;

/// An expanded author together with the publication records to normalize.
#[derive(Debug, Clone)]
pub struct FetchedAuthor {
    /// The author, with its publication list as returned by expansion.
    pub author: ScholarAuthor,

    /// One entry per listed publication: expanded, or the listing record on failure.
    pub publications: Vec<ScholarPublication>,

    /// How many publications fell back to their listing record.
    pub fallbacks: usize,
}

/// Resolve `author_id`, expand it, then expand each listed publication in turn.
///
/// Author failures abort. A publication that fails to expand is logged and kept
/// in its unexpanded form. Records the source already marks as `filled` are not
/// requested again.
pub async fn fetch_author(
    source: &dyn ScholarSource,
    author_id: &str,
) -> PipelineResult<FetchedAuthor> {
    info!(author_id, "Fetching author profile");
    let author = source
        .resolve_author(author_id)
        .await
        .map_err(|e| PipelineError::author(author_id, e))?;

    let author = if author.filled {
        author
    } else {
        source.expand_author(author).await.map_err(|e| PipelineError::author(author_id, e))?
    };
    info!(author_id, count = author.publications.len(), "Expanding publications");

    let mut publications = Vec::with_capacity(author.publications.len());
    let mut fallbacks = 0;

    for (index, listed) in author.publications.iter().enumerate() {
        if listed.filled {
            publications.push(listed.clone());
            continue;
        }

        match source.expand_publication(listed).await {
            Ok(expanded) => {
                debug!(index, title = ?expanded.bib.title, "Expanded publication");
                publications.push(expanded);
            }
            Err(e) => {
                warn!(
                    index,
                    error = %e,
                    retryable = e.is_retryable(),
                    retry_after = ?e.retry_after(),
                    "Could not expand publication, using listing record"
                );
                fallbacks += 1;
                publications.push(listed.clone());
            }
        }
    }

    Ok(FetchedAuthor { author, publications, fallbacks })
}
