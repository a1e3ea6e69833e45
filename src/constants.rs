//! Application-wide constants
//!
//! Attribute defaults, shortcode tags and test annotation markers.

// =============================================================================
// SHORTCODE ATTRIBUTES
// =============================================================================

/// Default value of the `for` attribute: visible to everyone
pub const DEFAULT_FOR: &str = "all";

/// Default value of the `exclude` attribute: no exclusions
pub const DEFAULT_EXCLUDE: &str = "";

/// Default value of the `test` attribute: no annotation
pub const DEFAULT_TEST: &str = "";

/// Shortcode tags handled when none are configured
pub const DEFAULT_SHORTCODE_TAGS: &[&str] = &["hide", "hidethis"];

// =============================================================================
// RENDERING DEFAULTS
// =============================================================================

/// Content returned in place of a hidden block
pub const DEFAULT_HIDDEN_CONTENT: &str = "";

/// Maximum nesting of shortcodes expanded inside a resolved block
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Default log filter
pub const DEFAULT_RUST_LOG: &str = "info";

// =============================================================================
// TEST ANNOTATIONS
// =============================================================================

pub mod test_modes {
    /// Pass when the resolved content equals the original block
    pub const CONTENT: &str = "content";
    /// Pass when the resolved content is empty
    pub const EMPTY: &str = "empty";
}

pub const TEST_PASSED: &str = " TEST PASSED!";
pub const TEST_FAILED: &str = " TEST FAILED!";
