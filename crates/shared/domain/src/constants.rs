//! Fixed values shared by client and server.

/// Days an issued API token stays valid.
pub const TOKEN_VALIDITY_DAYS: u32 = 30;
/// Experience points needed before community features unlock.
pub const MIN_EXPERIENCE: i32 = 50;
/// Product searches a user without subscription gets per 30 days.
pub const FREE_PRODUCT_SEARCHES_PER_30_DAYS: u32 = 5;

pub const SERVER_URL: &str = "https://dev.allergomat.app";
pub const APPLE_PUBLIC_KEY_URL: &str = "https://appleid.apple.com/auth/keys";
