//! HTTP client for the MAF repository.

use crate::record::MafRecord;
use crate::AnalyzerResult;

/// Client for the MAF repository's sample endpoints.
#[derive(Clone, Debug)]
pub struct MafRepoClient {
    http: reqwest::Client,
    base_url: String,
}

impl MafRepoClient {
    /// Creates a client for the repository at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetches the raw simple-variant rows for a sample.
    pub async fn fetch_simple_variants(&self, sample_id: &str) -> AnalyzerResult<Vec<MafRecord>> {
        let url = self.variants_url(sample_id);
        tracing::debug!(%url, "fetching simple variants");
        let rows = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<MafRecord>>()
            .await?;
        Ok(rows)
    }

    fn variants_url(&self, sample_id: &str) -> String {
        format!(
            "{}/samples/{}/simplevariants",
            self.base_url,
            urlencoding::encode(sample_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_sample_url() {
        let client = MafRepoClient::new("http://mafrepo.local/api/");
        assert_eq!(
            client.variants_url("H-0042"),
            "http://mafrepo.local/api/samples/H-0042/simplevariants"
        );
    }

    #[test]
    fn encodes_path_segment_exactly_once() {
        // Sample ids arrive raw from the workflow and the REST surface; the
        // only escaping happens here. A doubly escaped id would show up as
        // "%25" sequences and address a different upstream resource.
        let client = MafRepoClient::new("http://mafrepo.local");
        let url = client.variants_url("H/2023 0042");
        assert_eq!(
            url,
            "http://mafrepo.local/samples/H%2F2023%200042/simplevariants"
        );
        assert!(!url.contains("%25"));
    }
}
