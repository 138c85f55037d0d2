// runner.rs
use crate::config::RegionId;
use crate::domain::extract_into;
use crate::errors::OutputError;
use crate::scraper::FetchSold;
use crate::spreadsheets::RowSink;
use tracing::{info, warn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub regions: usize,
    /// Regions whose fetch produced no payload.
    pub skipped: usize,
    pub rows: usize,
}

/// Fetches and extracts each region in order, flushing the sink after
/// every region. Only sink failures stop the loop.
pub fn run<F, S>(
    fetcher: &F,
    regions: &[RegionId],
    sink: &mut S,
    listing_base_url: &str,
) -> Result<RunSummary, OutputError>
where
    F: FetchSold + ?Sized,
    S: RowSink + ?Sized,
{
    let mut summary = RunSummary::default();

    for &region in regions {
        summary.regions += 1;

        let response = fetcher.fetch(region);
        match &response {
            None => {
                summary.skipped += 1;
                warn!(region, "no payload for region, skipping");
            }
            Some(r) if !r.is_success() => {
                info!(region, status = ?r.error_message, "search not successful");
            }
            Some(_) => {}
        }

        let rows = extract_into(sink, response.as_ref(), listing_base_url)?;
        sink.flush()?;

        summary.rows += rows;
        info!(region, rows, "region done");
    }

    Ok(summary)
}
