//! Capabilities the rendering layer hands to the core.
//!
//! The core never touches a platform UI node directly. It measures through
//! [`Measure`], restyles through [`TransformApplier`] and drives sound
//! through [`AudioSink`].

use crate::constants::NAV_HIDDEN_OFFSET_PX;
use crate::error::PlaybackError;
use crate::geometry::Rect;
use crate::transform::{Transform, Transition};

/// Vertical offset and opacity of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavPose {
    pub translate_y_px: f64,
    pub opacity: f64,
}

impl NavPose {
    pub const VISIBLE: NavPose = NavPose {
        translate_y_px: 0.0,
        opacity: 1.0,
    };
    pub const HIDDEN: NavPose = NavPose {
        translate_y_px: NAV_HIDDEN_OFFSET_PX,
        opacity: 0.0,
    };

    #[inline]
    pub fn for_visibility(visible: bool) -> Self {
        if visible {
            Self::VISIBLE
        } else {
            Self::HIDDEN
        }
    }
}

/// A single style mutation for the rendering layer to carry out.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleUpdate {
    Transform {
        transform: Transform,
        transition: Option<Transition>,
    },
    Pose {
        pose: NavPose,
        transition: Transition,
    },
    /// Immediate class toggle, never animated by the core.
    Class { name: &'static str, enabled: bool },
}

pub trait Measure {
    /// Current layout of the bound region, or `None` when nothing is bound.
    fn measure(&self) -> Option<Rect>;
}

pub trait TransformApplier {
    fn apply(&mut self, update: &StyleUpdate);
}

/// Something that can be both measured and restyled, e.g. a DOM element.
pub trait Region: Measure + TransformApplier {}

impl<T: Measure + TransformApplier> Region for T {}

/// Fire-and-forget playback control.
pub trait AudioSink {
    fn start(&mut self) -> Result<(), PlaybackError>;
    fn stop(&mut self) -> Result<(), PlaybackError>;
}
