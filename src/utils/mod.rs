pub mod constants;
pub mod download;
pub mod storage;

pub use constants::{API_URL, INSTITUTION_NAME};
