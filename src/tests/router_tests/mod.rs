mod api_tests;
mod listings_tests;
mod toggle_tests;
