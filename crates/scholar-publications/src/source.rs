//! The data source seam.
//!
//! The pipeline only knows how to resolve an author and how to expand a record
//! to full detail. [`SemanticScholarClient`](crate::client::SemanticScholarClient)
//! implements this against the Graph API; tests plug in fixtures.

use crate::error::ClientResult;
use crate::models::{ScholarAuthor, ScholarPublication};

/// Author lookup and detail expansion.
#[async_trait::async_trait]
pub trait ScholarSource: Send + Sync {
    /// Resolve an author by identifier. Only basic profile fields are expected.
    async fn resolve_author(&self, author_id: &str) -> ClientResult<ScholarAuthor>;

    /// Expand an author with basic fields and the publication list.
    ///
    /// Listed publications may be summaries (`filled == false`).
    async fn expand_author(&self, author: ScholarAuthor) -> ClientResult<ScholarAuthor>;

    /// Expand one publication to full detail.
    async fn expand_publication(
        &self,
        publication: &ScholarPublication,
    ) -> ClientResult<ScholarPublication>;
}
