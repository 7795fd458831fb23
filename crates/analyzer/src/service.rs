//! The `requestSimpleVariants` plugin method.

use crate::catalogue::CatalogueLookup;
use crate::client::MafRepoClient;
use async_trait::async_trait;
use maf_core::VariantSource;
use maf_types::VariantEnvelope;
use std::sync::Arc;

/// Analyzer backend: fetches MAF rows and answers with form-shaped records.
///
/// Implements [`maf_core::VariantSource`], so the import workflow can use it
/// directly as its plugin seam. Transport and upstream failures are turned
/// into failure envelopes; the workflow validates those like any other
/// non-success status.
#[derive(Clone)]
pub struct AnalyzerService {
    client: MafRepoClient,
    catalogue: Arc<dyn CatalogueLookup>,
}

impl AnalyzerService {
    /// Creates the service from a repository client and a catalogue table.
    pub fn new(client: MafRepoClient, catalogue: Arc<dyn CatalogueLookup>) -> Self {
        Self { client, catalogue }
    }
}

#[async_trait]
impl VariantSource for AnalyzerService {
    async fn request_simple_variants(&self, sample_id: &str) -> VariantEnvelope {
        match self.client.fetch_simple_variants(sample_id).await {
            Ok(rows) => {
                tracing::debug!(rows = rows.len(), "mapped simple variants");
                VariantEnvelope::success(
                    rows.iter()
                        .map(|row| row.to_simple_variant(self.catalogue.as_ref()))
                        .collect(),
                )
            }
            Err(e) => {
                tracing::warn!("simple variant request failed: {e}");
                VariantEnvelope::failure(e.to_string())
            }
        }
    }
}
