//! The fetch → normalize → rank → emit pipeline.
//!
//! Each stage runs once, in order, and remote calls are awaited one at a time.

mod emit;
mod fetch;
mod normalize;
mod rank;

pub use emit::{build_document, render, timestamp, write_document};
pub use fetch::{FetchedAuthor, fetch_author};
pub use normalize::{normalize, normalize_all};
pub use rank::rank;

use std::sync::Arc;

use tracing::info;

use crate::config::PipelineConfig;
use crate::error::PipelineResult;
use crate::models::{AuthorProfile, ResultDocument};
use crate::source::ScholarSource;

/// A configured run against one data source.
pub struct Pipeline {
    /// Data source.
    source: Arc<dyn ScholarSource>,

    /// Author and output path.
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline.
    #[must_use]
    pub fn new(source: Arc<dyn ScholarSource>, config: PipelineConfig) -> Self {
        Self { source, config }
    }

    /// The run configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Fetch, normalize and rank without touching the filesystem.
    pub async fn collect(&self) -> PipelineResult<ResultDocument> {
        let fetched = fetch_author(self.source.as_ref(), &self.config.author_id).await?;
        if fetched.fallbacks > 0 {
            info!(fallbacks = fetched.fallbacks, "Some publications kept their listing record");
        }

        let mut publications = normalize_all(&fetched.publications);
        rank(&mut publications);

        let profile = AuthorProfile::from_author(&fetched.author, &self.config.author_id);
        Ok(build_document(profile, publications))
    }

    /// Run the full pipeline and write the document to the configured path.
    pub async fn run(&self) -> PipelineResult<ResultDocument> {
        let document = self.collect().await?;
        write_document(&document, &self.config.output_path)?;
        Ok(document)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline").field("config", &self.config).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, ClientResult};
    use crate::models::{Bibliography, ScholarAuthor, ScholarPublication};

    struct EmptyAuthor;

    #[async_trait::async_trait]
    impl ScholarSource for EmptyAuthor {
        async fn resolve_author(&self, author_id: &str) -> ClientResult<ScholarAuthor> {
            Ok(ScholarAuthor { scholar_id: author_id.to_string(), ..Default::default() })
        }

        async fn expand_author(&self, mut author: ScholarAuthor) -> ClientResult<ScholarAuthor> {
            author.publications = vec![ScholarPublication {
                bib: Bibliography { title: Some("Only".to_string()), ..Default::default() },
                ..Default::default()
            }];
            Ok(author)
        }

        async fn expand_publication(
            &self,
            _publication: &ScholarPublication,
        ) -> ClientResult<ScholarPublication> {
            Err(ClientError::not_found("detail"))
        }
    }

    #[test]
    fn test_collect_falls_back_to_listing() {
        let pipeline = Pipeline::new(Arc::new(EmptyAuthor), PipelineConfig::new("x"));
        let document = tokio_test::block_on(pipeline.collect()).unwrap();

        assert_eq!(document.total, 1);
        assert_eq!(document.publications[0].title, "Only");
        assert_eq!(document.author.scholar_id, "x");
        assert_eq!(document.author.name, "");
    }
}
