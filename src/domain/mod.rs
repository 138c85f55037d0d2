pub mod extract;
pub mod logic;
pub mod property;

pub use extract::extract_into;
pub use property::{SoldPropertyRow, SOLD_PROPERTY_FIELDS};
