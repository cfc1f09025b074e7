use crate::constants::{TILT_MAX_DEG, TILT_PERSPECTIVE_PX, TILT_SCALE};
use crate::geometry::{PointerSample, Rect};
use crate::transform::{TiltTransform, Transform};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub perspective_px: f64,
    pub max_deg: f64,
    pub scale: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            perspective_px: TILT_PERSPECTIVE_PX,
            max_deg: TILT_MAX_DEG,
            scale: TILT_SCALE,
        }
    }
}

/// Perspective tilt that follows the pointer across a region.
///
/// The only memory is the last transform produced while the pointer was
/// inside, which is handed back when geometry is not ready yet.
#[derive(Clone, Debug, Default)]
pub struct PointerTiltEngine {
    pub config: TiltConfig,
    last: Option<TiltTransform>,
}

impl PointerTiltEngine {
    pub fn new(config: TiltConfig) -> Self {
        Self { config, last: None }
    }

    pub fn on_pointer_move(&mut self, rect: Rect, pointer: PointerSample) -> Transform {
        let Some(rel) = rect.relative(pointer) else {
            return self.current();
        };
        let t = TiltTransform {
            rotate_x_deg: (rel.y - 0.5) * self.config.max_deg,
            rotate_y_deg: (rel.x - 0.5) * -self.config.max_deg,
            scale: self.config.scale,
            perspective_px: self.config.perspective_px,
        };
        self.last = Some(t);
        Transform::Tilt(t)
    }

    /// Target for a pointer leaving the region: no transform at all.
    pub fn on_pointer_leave(&mut self) -> Transform {
        self.last = None;
        Transform::Identity
    }

    #[inline]
    pub fn current(&self) -> Transform {
        self.last.map_or(Transform::Identity, Transform::Tilt)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }
}
