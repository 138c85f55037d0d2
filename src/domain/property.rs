// src/domain/property.rs

use crate::domain::logic;
use crate::scraper::RawListing;
use serde::Serialize;
use serde_json::Number;

/// Column order of the output table. Must match the field order of
/// [`SoldPropertyRow`].
pub const SOLD_PROPERTY_FIELDS: [&str; 18] = [
    "date_sold",
    "price",
    "original_price",
    "price_spread",
    "square_footage",
    "lot_size",
    "number_bedrooms",
    "number_bathrooms",
    "year_built",
    "property_type",
    "street_number",
    "street_name",
    "city",
    "state",
    "zip_code",
    "days_until_sold",
    "is_short_sale",
    "url",
];

/// One sold home, flattened to the fixed output schema. Every column is
/// always present; `None` is written as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SoldPropertyRow {
    /// Epoch millis.
    pub date_sold: Option<i64>,
    /// Final sale price.
    pub price: Option<i64>,
    /// Asking price when first listed.
    pub original_price: Option<i64>,
    pub price_spread: Option<i64>,
    pub square_footage: Option<Number>,
    pub lot_size: Option<Number>,
    pub number_bedrooms: Option<Number>,
    pub number_bathrooms: Option<Number>,
    pub year_built: Option<i64>,
    pub property_type: Option<String>,

    // Address
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,

    pub days_until_sold: Option<i64>,
    pub is_short_sale: Option<bool>,
    pub url: Option<String>,
}

impl SoldPropertyRow {
    /// Builds a row from one search result. Each column is looked up on its
    /// own, so a missing or malformed key only leaves that column empty.
    pub fn from_listing(listing: &RawListing, listing_base_url: &str) -> Self {
        let prop = listing.fields();
        let address = prop.group("address_data");

        let date_sold = prop.int("date");
        let price = prop.int("price");
        let original_price = prop.int("original_price");

        SoldPropertyRow {
            date_sold,
            price,
            // Only reported alongside a final price.
            original_price: price.and(original_price),
            price_spread: logic::price_spread(price, original_price),
            square_footage: prop.number("sqft"),
            lot_size: prop.number("lotsize"),
            number_bedrooms: prop.number("beds"),
            number_bathrooms: prop.number("baths"),
            year_built: prop.int("year_built"),
            property_type: prop.text("type"),
            street_number: address.text("number"),
            street_name: logic::street_name(address.text("street"), address.text("type")),
            city: address.text("city"),
            state: address.text("state"),
            zip_code: address.text("zip"),
            days_until_sold: logic::days_until_sold(date_sold, prop.int("listing_added")),
            is_short_sale: prop.flag("is_short_sale"),
            url: logic::listing_url(listing_base_url, prop.text("URL")),
        }
    }
}
