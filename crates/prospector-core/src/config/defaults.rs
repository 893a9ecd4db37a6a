//! Default configuration values.

/// Production SD2 SynBioHub instance.
pub const DEFAULT_SERVER: &str = "https://hub.sd2e.org";

/// Staging SD2 SynBioHub instance.
pub const DEFAULT_STAGING_SERVER: &str = "https://hub-staging.sd2e.org";

/// Default SynBioHub user.
pub const DEFAULT_USER: &str = "sd2e";

/// Capacity of each traversal memoization cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Environment variable holding the SynBioHub password.
pub const PASSWORD_ENV_VAR: &str = "SBH_PASSWORD";
