//! Tunables for the scroll effects and timed animations.

/// Scroll offset (px) past which the header gets its elevated treatment.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Scroll offset (px) past which the back-to-top button becomes visible.
pub const SCROLL_THRESHOLD: f64 = 300.0;

/// Minimum interval between scroll handler invocations.
pub const SCROLL_THROTTLE_MS: f64 = 100.0;

/// How long the loading splash stays up after the window `load` event.
pub const LOADING_DELAY_MS: u32 = 1_000;

/// Fade-out duration of the splash before it is removed.
pub const ANIMATION_DELAY_MS: u32 = 500;

/// Stat counter animation duration and frame interval (~60 Hz).
pub const COUNTER_DURATION_MS: f64 = 2_000.0;
pub const COUNTER_FRAME_MS: f64 = 16.0;

/// Simulated send delay for the contact form.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// How long the submission success toast stays visible.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Per-item delay when the mobile menu entries slide in.
pub const MENU_STAGGER_MS: u32 = 60;

/// Extra gap between a scrolled-to section and the fixed header.
pub const ANCHOR_MARGIN_PX: f64 = 16.0;

/// Fallback header height when the header element is missing.
pub const HEADER_FALLBACK_PX: f64 = 80.0;

/// How fast the hero background trails the scroll position.
pub const PARALLAX_FACTOR: f64 = 0.3;
