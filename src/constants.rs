//! Shared constants

/// Where the database lives unless told otherwise
pub const DEFAULT_DATABASE_PATH: &str = "uservehicle.sqlite";

/// Longest username we will look up.
pub const MAX_USERNAME_LENGTH: usize = 32;

/// Content type for the plain text vehicle view
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

#[cfg(test)]
/// Host header sent by the in-process test client
pub const TEST_HOST: &str = "localhost";
