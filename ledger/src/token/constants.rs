//! Multi-Token Constants

/// Token type identifiers are issued starting at this value
pub const FIRST_TOKEN_ID: u64 = 1;

/// Maximum number of entries in a single batch operation
pub const MAX_BATCH_SIZE: usize = 100;

/// Maximum base metadata URI length (bytes)
pub const MAX_BASE_URI_LENGTH: usize = 256;

/// Maximum passthrough data length for mint/transfer (4KB)
pub const MAX_DATA_LENGTH: usize = 4096;
