// Constants module - centralized default values
//
// Wire literals and defaults shared by the transform builder and the
// request signer live here so both sides agree on a single value.

// =============================================================================
// Request signing
// =============================================================================

/// Headers whose lower-cased name starts with this prefix take part in signing
pub const WIX_HEADER_PREFIX: &str = "x-wix-";

/// Service name placed in front of the access key in the Authorization header
pub const DEFAULT_AUTH_SERVICE: &str = "WIX";

/// Algorithm name reported by the HMAC signer
pub const HMAC_ALGORITHM: &str = "HmacSHA256";

// =============================================================================
// Unsharp mask defaults
// =============================================================================

/// Radius used when only amount and/or threshold are supplied
pub const DEFAULT_UNSHARP_RADIUS: f64 = 0.5;

/// Amount used when only radius and/or threshold are supplied
pub const DEFAULT_UNSHARP_AMOUNT: f64 = 0.2;

/// Threshold used when only radius and/or amount are supplied
pub const DEFAULT_UNSHARP_THRESHOLD: f64 = 0.0;

// =============================================================================
// URL segments
// =============================================================================

/// Literal segment preceding the adjustment list
pub const ADJUST_SEGMENT: &str = "adjust";

/// Literal segment preceding the filter list
pub const FILTER_SEGMENT: &str = "filter";

// =============================================================================
// Logging defaults
// =============================================================================

/// Default log level when neither config nor RUST_LOG specify one
pub const DEFAULT_LOG_LEVEL: &str = "info";
