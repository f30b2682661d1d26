/// Default number of requests admitted per rate-limit period
pub const DEFAULT_RATE_LIMIT: u32 = 180;
/// Default length of the rate-limit period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 1;
/// Default timeout in seconds for a single HTTP round trip
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// Path segment inserted between the base URL and every endpoint
pub const API_PREFIX: &str = "api";
/// Content type sent with JSON request bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("bookstack-client/", env!("CARGO_PKG_VERSION"));
/// Highest status code the form primitive accepts as success (226 IM Used)
pub const FORM_SUCCESS_MAX_STATUS: u16 = 226;
