pub mod error;
pub mod map;
pub mod results_table;
pub mod selector;

pub use error::error_page;
pub use map::listing_map;
pub use results_table::results_table;
pub use selector::{selector_form, PRICE_PARAM, TRANSIT_PARAM};
