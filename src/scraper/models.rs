use serde::Deserialize;
use serde_json::{Map, Number, Value};

// response
//  ├── errorMessage          "Success" when the search ran
//  └── payload
//       └── search_result[]  one entry per sold home
//            ├── date, listing_added          (epoch millis)
//            ├── price, original_price
//            ├── sqft, lotsize, beds, baths, year_built, type
//            ├── is_short_sale, URL
//            └── address_data
//                 ├── number, street, type
//                 └── city, state, zip

pub const SUCCESS_MESSAGE: &str = "Success";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "errorMessage", default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub payload: Option<SearchPayload>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPayload {
    #[serde(default)]
    pub search_result: Vec<RawListing>,
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        self.error_message.as_deref() == Some(SUCCESS_MESSAGE)
    }

    /// Listings of a successful search; empty for any other status.
    pub fn listings(&self) -> &[RawListing] {
        match (&self.payload, self.is_success()) {
            (Some(payload), true) => &payload.search_result,
            _ => &[],
        }
    }
}

/// One entry of `search_result`, kept as untyped JSON. Every field may be
/// missing, so lookups go through [`Fields`] one key at a time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawListing(Value);

impl RawListing {
    pub fn fields(&self) -> Fields<'_> {
        Fields(self.0.as_object())
    }
}

impl From<Value> for RawListing {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Optional view over a JSON object. A missing object behaves like an
/// empty one, so a lost nested group only unsets its own keys.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a>(Option<&'a Map<String, Value>>);

impl<'a> Fields<'a> {
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|map| map.get(key))
    }

    pub fn group(&self, key: &str) -> Fields<'a> {
        Fields(self.get(key).and_then(Value::as_object))
    }

    /// Integer value; floats are truncated and numeric strings parsed.
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_u64().and_then(|u| i64::try_from(u).ok()))
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
            }
            _ => None,
        }
    }

    /// Numeric value as sent, integer or fractional.
    pub fn number(&self, key: &str) -> Option<Number> {
        match self.get(key)? {
            Value::Number(n) => Some(n.clone()),
            Value::String(s) => s.trim().parse::<Number>().ok(),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listings_require_success_status() {
        let ok: SearchResponse = serde_json::from_value(json!({
            "errorMessage": "Success",
            "payload": { "search_result": [{ "price": 1 }, { "price": 2 }] }
        }))
        .unwrap();
        assert_eq!(ok.listings().len(), 2);

        let failed: SearchResponse = serde_json::from_value(json!({
            "errorMessage": "Invalid argument",
            "payload": { "search_result": [{ "price": 1 }] }
        }))
        .unwrap();
        assert!(failed.listings().is_empty());
    }

    #[test]
    fn missing_envelope_parts_decode_as_empty() {
        let no_status: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!no_status.is_success());
        assert!(no_status.listings().is_empty());

        let no_results: SearchResponse =
            serde_json::from_value(json!({ "errorMessage": "Success", "payload": {} })).unwrap();
        assert!(no_results.is_success());
        assert!(no_results.listings().is_empty());
    }

    #[test]
    fn typed_lookups_tolerate_wrong_shapes() {
        let listing = RawListing::from(json!({
            "price": "425000",
            "sqft": 1450.5,
            "beds": 3,
            "year_built": null,
            "type": { "nested": true },
            "is_short_sale": "no",
            "address_data": "not an object"
        }));
        let fields = listing.fields();

        assert_eq!(fields.int("price"), Some(425_000));
        assert_eq!(fields.int("sqft"), Some(1450));
        assert_eq!(fields.number("sqft").map(|n| n.to_string()), Some("1450.5".into()));
        assert_eq!(fields.number("beds").map(|n| n.to_string()), Some("3".into()));
        assert_eq!(fields.int("year_built"), None);
        assert_eq!(fields.text("type"), None);
        assert_eq!(fields.flag("is_short_sale"), None);
        assert_eq!(fields.group("address_data").text("city"), None);
        assert_eq!(fields.int("absent"), None);
    }

    #[test]
    fn non_object_listing_has_no_fields() {
        let listing = RawListing::from(json!([1, 2, 3]));
        assert_eq!(listing.fields().int("price"), None);
        assert_eq!(listing.fields().group("address_data").text("zip"), None);
    }
}
