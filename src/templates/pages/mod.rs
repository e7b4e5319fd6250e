pub mod listings;

pub use listings::{listings_page, selection_query};
