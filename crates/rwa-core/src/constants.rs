//! Breakpoints, branding and process constants.

/// Viewports narrower than this are mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Viewports at least this wide are desktop. Between the two is tablet.
pub const DESKTOP_BREAKPOINT: u32 = 1024;

/// Width assumed for one terminal column, in pixels.
pub const DEFAULT_PX_PER_COLUMN: u16 = 8;

/// Length of the haptic pulse on bottom navigation taps.
pub const HAPTIC_PULSE_MS: u32 = 50;

/// Brand name shown by the chrome.
pub const BRAND_NAME: &str = "RWA Platform";

/// Short brand mark used in the logo tile.
pub const BRAND_MARK: &str = "RWA";

/// Subtitle under the brand name.
pub const BRAND_TAGLINE: &str = "Real World Assets";

/// Footer line of the mobile menu.
pub const APP_VERSION_LABEL: &str = "RWA Platform v1.0.0";

/// Second footer line of the mobile menu.
pub const APP_DESCRIPTION: &str = "Real World Asset Tokenization";

/// Placeholder of the mobile search input.
pub const SEARCH_PLACEHOLDER: &str = "Search assets, portfolios, transactions...";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or script.
    pub const ERROR_CONFIG: i32 = 4;
}
