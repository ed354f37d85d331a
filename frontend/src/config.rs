use log::Level;

/// Vertical offset, in pixels, past which the header counts as scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

pub const BRAND_NAME: &str = "Online Promotion House";
pub const BRAND_TAGLINE: &str = "Export Growth Partners";
pub const CONTACT_EMAIL: &str = "kitty@onlinepromotionhouse.com";
pub const CONTACT_PHONE: &str = "+91 6262914149";
pub const REPRESENTATIVE: &str = "Kitty Bagga";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
