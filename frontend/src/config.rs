use log::Level;

/// Scroll offset (px) past which the nav bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Distance (px) over which the nav background fades in.
pub const NAV_BACKDROP_FADE_DISTANCE: f64 = 100.0;

/// Maximum nav background opacity once fully faded in.
pub const NAV_BACKDROP_MAX_ALPHA: f64 = 0.95;

/// Scroll offset (px) past which the floating scroll-to-top button shows up.
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 300.0;

pub const CAROUSEL_INTERVAL_MS: u32 = 3_000;

pub const TOAST_DURATION_MS: u32 = 5_000;

/// Toasts kept on screen at once; older ones are pushed out.
pub const TOAST_LIMIT: usize = 1;

// IntersectionObserver settings for entrance animations. A zero threshold
// fires as soon as any pixel of the element is in view.
pub const REVEAL_THRESHOLD: f64 = 0.0;
pub const REVEAL_ROOT_MARGIN: &str = "0px";

/// Delay before mount-triggered entrances flip, so the start pose gets painted.
pub const MOUNT_REVEAL_DELAY_MS: u32 = 20;

pub const LOGO_URL: &str = "/assets/meditox-logo.png";

pub const SUPPORT_EMAIL: &str = "support@meditox.in";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn logo_ships_with_the_static_assets() {
        let logo = Path::new(env!("CARGO_MANIFEST_DIR")).join(LOGO_URL.trim_start_matches('/'));
        assert!(logo.is_file(), "missing {}", logo.display());
    }
}
