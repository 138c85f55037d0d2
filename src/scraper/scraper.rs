// scraper.rs
use crate::config::{RegionId, SearchConfig, RESPONSE_PREFIX_LEN};
use crate::scraper::{ScraperError, SearchResponse};
use reqwest::blocking::Client;
use std::time::Instant;
use tracing::debug;

/// Source of sold-listing payloads, one request per region.
pub trait FetchSold {
    /// `None` means the region could not be fetched or decoded; callers
    /// treat it the same as a region with no sales.
    fn fetch(&self, region: RegionId) -> Option<SearchResponse>;
}

pub struct RedfinScraper {
    client: Client,
    config: SearchConfig,
}

impl RedfinScraper {
    pub fn new(config: SearchConfig) -> Result<Self, ScraperError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Single GET against the search endpoint. No retries.
    pub fn try_fetch(&self, region: RegionId) -> Result<SearchResponse, ScraperError> {
        let url = self.config.query_url(region)?;
        let start = Instant::now();
        debug!(region, %url, "requesting sold listings");

        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Http(status));
        }

        let body = resp.bytes()?;
        debug!(region, bytes = body.len(), elapsed = ?start.elapsed(), "response received");

        decode_body(&body)
    }
}

impl FetchSold for RedfinScraper {
    fn fetch(&self, region: RegionId) -> Option<SearchResponse> {
        match self.try_fetch(region) {
            Ok(response) => Some(response),
            Err(e) => {
                debug!(region, reason = %e, "fetch failed");
                None
            }
        }
    }
}

/// Strips the non-JSON prefix and decodes the envelope.
pub fn decode_body(body: &[u8]) -> Result<SearchResponse, ScraperError> {
    let json = body
        .get(RESPONSE_PREFIX_LEN..)
        .ok_or(ScraperError::TruncatedBody(RESPONSE_PREFIX_LEN))?;

    Ok(serde_json::from_slice(json)?)
}
