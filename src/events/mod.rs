pub mod nav;
pub mod pointer;

pub use nav::{wire_audio_toggle, wire_nav_scroll};
pub use pointer::{wire_parallax_regions, wire_tilt_regions};
