// src/domain/extract.rs

use crate::domain::SoldPropertyRow;
use crate::errors::OutputError;
use crate::scraper::SearchResponse;
use crate::spreadsheets::RowSink;

/// Rows for every listing in a successful response, in listing order.
///
/// An absent response and a non-success status both yield nothing. The
/// iterator borrows the response, so calling again replays the same rows.
pub fn extract_rows<'a>(
    response: Option<&'a SearchResponse>,
    listing_base_url: &'a str,
) -> impl Iterator<Item = SoldPropertyRow> + 'a {
    response
        .map(SearchResponse::listings)
        .unwrap_or_default()
        .iter()
        .map(move |listing| SoldPropertyRow::from_listing(listing, listing_base_url))
}

/// Appends each extracted row to `sink` as soon as it is built.
/// Returns the number of rows written.
pub fn extract_into<S>(
    sink: &mut S,
    response: Option<&SearchResponse>,
    listing_base_url: &str,
) -> Result<usize, OutputError>
where
    S: RowSink + ?Sized,
{
    let mut written = 0;
    for row in extract_rows(response, listing_base_url) {
        sink.append(&row)?;
        written += 1;
    }
    Ok(written)
}
