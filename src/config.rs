// src/config.rs

use std::time::Duration;
use url::Url;

/// Redfin region identifier (region_type 6 is a city).
pub type RegionId = u64;

/// This endpoint is allowed for bots in redfin.com/robots.txt, so no
/// rate limiting is applied between regions.
pub const SEARCH_URL: &str = "https://www.redfin.com/stingray/do/gis-search";

/// Prefix for the relative `URL` field of a listing.
pub const LISTING_BASE_URL: &str = "https://redfin.com";

pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/42.0.2311.90 Safari/537.36";

pub const REGION_TYPE: u32 = 6;
pub const TIME_RANGE_DAYS: u32 = 90;
pub const NUM_HOMES: u32 = 100_000;

/// Responses start with `{}&&` before the JSON body.
pub const RESPONSE_PREFIX_LEN: usize = 4;

pub const DEFAULT_OUT_FILE: &str = "recently_sold_redfin.csv";

pub const DEFAULT_REGIONS: [RegionId; 6] = [
    10229, // Melrose
    9614,  // Malden
    10142, // Medford
    29622, // Winchester
    29663, // Burlington
    16064, // Somerville
];

/// Fixed search filters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    pub min_baths: f64,
    pub max_baths: f64,
    pub min_beds: u32,
    pub max_beds: u32,
    pub min_approx_sqft: u32,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            min_baths: 1.25,
            max_baths: 2.0,
            min_beds: 2,
            max_beds: 3,
            min_approx_sqft: 1200,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub endpoint: String,
    pub listing_base_url: String,
    pub sold_within_days: u32,
    pub filters: SearchFilters,
    /// `None` keeps the transport default.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: SEARCH_URL.to_string(),
            listing_base_url: LISTING_BASE_URL.to_string(),
            sold_within_days: TIME_RANGE_DAYS,
            filters: SearchFilters::default(),
            timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl SearchConfig {
    /// Search URL for every home sold in `region` within the lookback window.
    pub fn query_url(&self, region: RegionId) -> Result<Url, url::ParseError> {
        let f = &self.filters;
        let params = [
            ("al", "1".to_string()),
            ("num_homes", NUM_HOMES.to_string()),
            ("region_id", region.to_string()),
            ("region_type", REGION_TYPE.to_string()),
            ("num_baths", f.min_baths.to_string()),
            ("max_num_baths", f.max_baths.to_string()),
            ("num_beds", f.min_beds.to_string()),
            ("max_num_beds", f.max_beds.to_string()),
            ("min_listing_approx_size", f.min_approx_sqft.to_string()),
            ("sold_within_days", self.sold_within_days.to_string()),
        ];

        Url::parse_with_params(&self.endpoint, &params)
    }
}
