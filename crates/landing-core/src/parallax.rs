use crate::constants::{PARALLAX_MAX_DEG, PARALLAX_PERSPECTIVE_PX, PARALLAX_TRANSITION_SEC};
use crate::geometry::{PointerSample, Rect};
use crate::transform::{Easing, ParallaxTransform, Transition};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub perspective_px: f64,
    pub max_deg: f64,
    pub transition: Transition,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            perspective_px: PARALLAX_PERSPECTIVE_PX,
            max_deg: PARALLAX_MAX_DEG,
            transition: Transition::new(PARALLAX_TRANSITION_SEC, Easing::EaseInOut),
        }
    }
}

/// Centre-relative rotation for the story card.
///
/// Enter, leave and release all snap back to the neutral pose, so a new
/// gesture always starts flat rather than from the last tilt.
#[derive(Clone, Debug, Default)]
pub struct PointerParallaxEngine {
    pub config: ParallaxConfig,
    last: Option<ParallaxTransform>,
}

impl PointerParallaxEngine {
    pub fn new(config: ParallaxConfig) -> Self {
        Self { config, last: None }
    }

    pub fn on_pointer_move(&mut self, rect: Rect, pointer: PointerSample) -> ParallaxTransform {
        if !rect.is_laid_out() || !pointer.is_finite() {
            return self.current();
        }
        let local = rect.local(pointer);
        let center = rect.size() / 2.0;
        let tilt = (local - center) / center * -self.config.max_deg;
        if !tilt.is_finite() {
            return self.current();
        }
        let t = ParallaxTransform {
            rotate_x_deg: tilt.y,
            rotate_y_deg: tilt.x,
            perspective_px: self.config.perspective_px,
        };
        self.last = Some(t);
        t
    }

    pub fn on_pointer_enter(&mut self) -> ParallaxTransform {
        self.reset()
    }

    pub fn on_pointer_leave(&mut self) -> ParallaxTransform {
        self.reset()
    }

    pub fn on_pointer_up(&mut self) -> ParallaxTransform {
        self.reset()
    }

    #[inline]
    pub fn current(&self) -> ParallaxTransform {
        self.last.unwrap_or_else(|| self.neutral())
    }

    #[inline]
    pub fn neutral(&self) -> ParallaxTransform {
        ParallaxTransform::neutral(self.config.perspective_px)
    }

    fn reset(&mut self) -> ParallaxTransform {
        self.last = None;
        self.neutral()
    }
}
