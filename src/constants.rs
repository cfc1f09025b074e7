// Hooks into the page markup. The stylesheet owns every visual detail;
// these are only the handles the effects attach to.

// Effect regions
pub const TILT_SELECTOR: &str = "[data-fx='tilt']";
pub const PARALLAX_SELECTOR: &str = "[data-fx='parallax']";

// Navigation bar
pub const NAV_CONTAINER_ID: &str = "nav-container";

// Audio toggle
pub const AUDIO_TOGGLE_ID: &str = "audio-toggle";
pub const AUDIO_ELEMENT_ID: &str = "nav-audio";
pub const INDICATOR_LINE_SELECTOR: &str = ".indicator-line";
