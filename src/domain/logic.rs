// src/domain/logic.rs

/// Listing timestamps are epoch milliseconds.
pub const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Difference between the original asking price and the final price.
pub fn price_spread(price: Option<i64>, original_price: Option<i64>) -> Option<i64> {
    original_price?.checked_sub(price?)
}

/// Whole days from the listing being added to the sale, rounded down.
pub fn days_until_sold(date_sold: Option<i64>, listing_added: Option<i64>) -> Option<i64> {
    let elapsed = date_sold?.checked_sub(listing_added?)?;
    Some(elapsed.div_euclid(MS_PER_DAY))
}

/// "Main" + "St" -> "Main St". Needs both parts.
pub fn street_name(street: Option<String>, street_type: Option<String>) -> Option<String> {
    let (street, street_type) = (street?, street_type?);
    Some(format!("{street} {street_type}"))
}

pub fn listing_url(base_url: &str, path: Option<String>) -> Option<String> {
    path.map(|path| format!("{base_url}{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_needs_both_prices() {
        assert_eq!(price_spread(Some(480_000), Some(500_000)), Some(20_000));
        assert_eq!(price_spread(Some(520_000), Some(500_000)), Some(-20_000));
        assert_eq!(price_spread(None, Some(500_000)), None);
        assert_eq!(price_spread(Some(480_000), None), None);
    }

    #[test]
    fn days_round_down() {
        let added = 1_600_000_000_000;
        assert_eq!(days_until_sold(Some(added), Some(added)), Some(0));
        assert_eq!(days_until_sold(Some(added + MS_PER_DAY - 1), Some(added)), Some(0));
        assert_eq!(days_until_sold(Some(added + 45 * MS_PER_DAY + 10), Some(added)), Some(45));
        assert_eq!(days_until_sold(Some(added - 1), Some(added)), Some(-1));
        assert_eq!(days_until_sold(None, Some(added)), None);
        assert_eq!(days_until_sold(Some(added), None), None);
    }

    #[test]
    fn street_name_joins_with_space() {
        assert_eq!(
            street_name(Some("Main".into()), Some("St".into())).as_deref(),
            Some("Main St")
        );
        assert_eq!(street_name(Some("Main".into()), None), None);
        assert_eq!(street_name(None, Some("St".into())), None);
    }

    #[test]
    fn url_prefixes_base() {
        assert_eq!(
            listing_url("https://redfin.com", Some("/property/123".into())).as_deref(),
            Some("https://redfin.com/property/123")
        );
        assert_eq!(listing_url("https://redfin.com", None), None);
    }
}
