//! Scholar Publications
//!
//! Fetches one author's profile and publications from Semantic Scholar,
//! normalizes each publication to a fixed schema, sorts them by year and
//! citations, and writes the result as a JSON document.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use scholar_publications::{Config, Pipeline, PipelineConfig, SemanticScholarClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SemanticScholarClient::new(Config::from_env()?)?;
//!     let pipeline = Pipeline::new(Arc::new(client), PipelineConfig::new("1741101"));
//!
//!     let document = pipeline.run().await?;
//!     println!("Saved {} publications", document.total);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod source;

pub use client::SemanticScholarClient;
pub use config::{Config, PipelineConfig};
pub use error::{ClientError, PipelineError};
pub use pipeline::Pipeline;
pub use source::ScholarSource;
