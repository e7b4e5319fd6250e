pub mod store;
pub mod token;

pub use store::{SessionHandle, SessionStore, SESSION_COOKIE};
