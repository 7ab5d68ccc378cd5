use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Unicorn Studio runtime that draws the animated hero backgrounds
pub const UNICORN_STUDIO_SRC: &str =
    "https://cdn.jsdelivr.net/gh/hiunicornstudio/unicornstudio.js@v1.4.33/dist/unicornStudio.umd.js";
pub const UNICORN_STUDIO_MARKER: &str = "unicornStudio";
pub const UNICORN_STUDIO_GLOBAL: &str = "UnicornStudio";

pub const HOME_HERO_PROJECT: &str = "OMzqyUv6M3kSnv0JeAtC";
pub const RESOURCES_HERO_PROJECT: &str = "whwOGlfJ5Rz2rHaEUgHl";

// Delays after load at which injected branding is pruned again
pub const BRANDING_PRUNE_SCHEDULE_MS: [u32; 4] = [0, 500, 1500, 3000];

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3024.2219901290355!2d-74.00369368400567!3d40.71312937933185!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x89c25a23e28c1191%3A0x49f75d3281df052a!2s150%20Park%20Row%2C%20New%20York%2C%20NY%2010007%2C%20USA!5e0!3m2!1sen!2suk!4v1681234567890!5m2!1sen!2suk";

// Scroll reveal: 10% visible, triggered 50px before the element is fully in
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
// Hero backgrounds start loading a little before they scroll into view
pub const LAZY_MOUNT_ROOT_MARGIN: &str = "50px";

pub const NAV_FORCE_SHOW_Y: f64 = 5.0;
pub const NAV_SCROLLED_Y: f64 = 20.0;
pub const NAV_FADE_IN_MS: u32 = 100;
pub const SCROLL_TOP_BUTTON_Y: f64 = 400.0;

pub const CONTACT_SUBMIT_DELAY_MS: u32 = 1000;
pub const RIPPLE_MS: u32 = 600;
pub const TOAST_LIFETIME_MS: u32 = 5000;
pub const TOAST_LIMIT: usize = 3;
