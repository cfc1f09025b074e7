//! Region geometry and pointer samples.
//!
//! Both live in the host's client coordinate space. A [`Rect`] is measured
//! fresh for every pointer event and never cached across frames.

use glam::DVec2;

/// Bounding box of an interactive region at the moment of an event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// False until layout has given the region a real, finite extent.
    #[inline]
    pub fn is_laid_out(&self) -> bool {
        self.origin().is_finite()
            && self.size().is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Offset of `pointer` from the top-left corner, in pixels.
    #[inline]
    pub fn local(&self, pointer: PointerSample) -> DVec2 {
        pointer.as_dvec2() - self.origin()
    }

    /// Pointer position normalized so the region spans `[0, 1]` on both axes.
    ///
    /// The result is not clamped; a pointer outside the region maps outside
    /// the unit square. Returns `None` for unready geometry or a non-finite
    /// pointer so callers never see `NaN` or infinities.
    pub fn relative(&self, pointer: PointerSample) -> Option<DVec2> {
        if !self.is_laid_out() || !pointer.is_finite() {
            return None;
        }
        let rel = self.local(pointer) / self.size();
        rel.is_finite().then_some(rel)
    }
}

/// Absolute pointer coordinates in the same space as [`Rect`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for PointerSample {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}
