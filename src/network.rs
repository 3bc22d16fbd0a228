//! Network constants for the Network Camp SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://network.camp/api";

/// Environment variable holding the API key, read by `NetworkCampClient::from_env`.
pub const API_KEY_ENV: &str = "NETWORKCAMP_API_KEY";

/// Environment variable overriding the base URL, read by `NetworkCampClient::from_env`.
pub const API_URL_ENV: &str = "NETWORKCAMP_API_URL";
