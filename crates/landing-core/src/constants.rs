// Tuning constants for the pointer and scroll effects.

// Bento tilt
pub const TILT_PERSPECTIVE_PX: f64 = 700.0;
pub const TILT_MAX_DEG: f64 = 5.0; // full sweep across the region, edge to edge
pub const TILT_SCALE: f64 = 0.98; // applied uniformly on x, y and z while tilted

// Story parallax card
pub const PARALLAX_PERSPECTIVE_PX: f64 = 500.0;
pub const PARALLAX_MAX_DEG: f64 = 10.0; // rotation at the region edge, measured from centre
pub const PARALLAX_TRANSITION_SEC: f64 = 0.3;

// Navigation bar
pub const NAV_HIDDEN_OFFSET_PX: f64 = -100.0;
pub const NAV_TRANSITION_SEC: f64 = 0.2;

// Audio indicator
pub const INDICATOR_LINE_COUNT: usize = 4;
pub const INDICATOR_STAGGER_SEC: f64 = 0.1;

// Style class names shared with the stylesheet
pub const FLOATING_NAV_CLASS: &str = "floating-nav";
pub const INDICATOR_ACTIVE_CLASS: &str = "active";
