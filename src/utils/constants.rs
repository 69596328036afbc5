/// Base URL of the attendance backend.
/// Resolved at compile time from the API_URL env var (see build.rs / .env).
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Institution name printed on exported attendance reports.
pub const INSTITUTION_NAME: &str = "CSI College of Engineering";
