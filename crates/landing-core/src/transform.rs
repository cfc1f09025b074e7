//! Target transforms emitted by the pointer engines.
//!
//! These are targets only. Easing between successive values belongs to the
//! rendering layer, which receives an optional [`Transition`] alongside.

use crate::constants::{PARALLAX_PERSPECTIVE_PX, TILT_PERSPECTIVE_PX, TILT_SCALE};

/// Perspective tilt with a uniform shrink, used by the bento cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub scale: f64,
    pub perspective_px: f64,
}

impl Default for TiltTransform {
    fn default() -> Self {
        Self {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            scale: TILT_SCALE,
            perspective_px: TILT_PERSPECTIVE_PX,
        }
    }
}

/// Two-axis rotation without scale, used by the story card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxTransform {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub perspective_px: f64,
}

impl ParallaxTransform {
    /// Zero rotation at the given perspective.
    pub const fn neutral(perspective_px: f64) -> Self {
        Self {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            perspective_px,
        }
    }
}

impl Default for ParallaxTransform {
    fn default() -> Self {
        Self::neutral(PARALLAX_PERSPECTIVE_PX)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Transform {
    /// No transform at all; the rendering layer clears whatever it had.
    #[default]
    Identity,
    Tilt(TiltTransform),
    Parallax(ParallaxTransform),
}

impl Transform {
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Transform::Identity)
    }
}

impl From<TiltTransform> for Transform {
    fn from(t: TiltTransform) -> Self {
        Transform::Tilt(t)
    }
}

impl From<ParallaxTransform> for Transform {
    fn from(t: ParallaxTransform) -> Self {
        Transform::Parallax(t)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn as_css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// How the rendering layer should ease into a new target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_sec: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_sec: f64, easing: Easing) -> Self {
        Self {
            duration_sec,
            easing,
        }
    }

    /// CSS `transition` shorthand for a single property.
    pub fn as_css(&self, property: &str) -> String {
        format!(
            "{} {}s {}",
            property,
            self.duration_sec,
            self.easing.as_css()
        )
    }
}
