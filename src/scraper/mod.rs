mod models;
mod scraper;
mod scraper_error;

pub use models::{RawListing, SearchResponse};
pub use scraper::{FetchSold, RedfinScraper};
pub use scraper_error::ScraperError;
