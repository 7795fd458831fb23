//! # MAF Analyzer
//!
//! Backend service for the MAF repository: fetches raw variant rows for a
//! sample over HTTP, maps them into form-shaped records with catalogue
//! versions, and exposes the result as the `requestSimpleVariants` plugin
//! method (via [`AnalyzerService`], which implements
//! [`maf_core::VariantSource`]).

pub mod catalogue;
pub mod client;
pub mod record;
pub mod service;

pub use catalogue::{CatalogueLookup, StaticCatalogue};
pub use client::MafRepoClient;
pub use record::MafRecord;
pub use service::AnalyzerService;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("request to MAF repository failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read catalogue file: {0}")]
    CatalogueRead(std::io::Error),
    #[error("failed to parse catalogue file: {0}")]
    CatalogueParse(serde_json::Error),
}

pub type AnalyzerResult<T> = std::result::Result<T, AnalyzerError>;
