pub mod errors;
pub mod html;
pub mod json;

pub use errors::{error_to_response, html_error_response, ResultResp};

pub use html::{html_response, see_other, text_response, with_session_cookie};
pub use json::json_response;
