//! Shared constants for end-to-end tests

/// Bearer token the mock API accepts
pub const TEST_TOKEN: &str = "test-genius-token";

/// Per-request timeout used by test resolvers
pub const CLIENT_TIMEOUT_SEC: u64 = 1;

/// How long slow mock responses stall, must exceed CLIENT_TIMEOUT_SEC
pub const SLOW_RESPONSE_MS: u64 = 2500;

pub const KENDRICK_ID: i64 = 1421;
pub const LORDE_ID: i64 = 12418;
pub const ADELE_ID: i64 = 2300;
