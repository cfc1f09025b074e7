//! Scroll-direction state machine for the navigation bar.
//!
//! State is stored as `(visible, floating)`; the phase is derived from it.
//!
//! | offset                | visible   | floating  |
//! |-----------------------|-----------|-----------|
//! | `y == 0`              | true      | false     |
//! | `y < 0` or `y < prev` | true      | true      |
//! | `y > prev`            | false     | true      |
//! | `y == prev`           | unchanged | unchanged |

use crate::applier::NavPose;
use crate::constants::NAV_TRANSITION_SEC;
use crate::transform::{Easing, Transition};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavConfig {
    pub transition: Transition,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            transition: Transition::new(NAV_TRANSITION_SEC, Easing::EaseOut),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub last_offset_y: f64,
    pub visible: bool,
    pub floating: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            last_offset_y: 0.0,
            visible: true,
            floating: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPhase {
    AtTop,
    ScrollingDown,
    ScrollingUp,
}

/// Emitted once per actual change, visibility before floating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    VisibilityChanged { visible: bool },
    FloatingChanged { floating: bool },
}

pub type NavEvents = SmallVec<[NavEvent; 2]>;

#[derive(Clone, Debug, Default)]
pub struct ScrollVisibilityStateMachine {
    pub config: NavConfig,
    state: ScrollState,
}

impl ScrollVisibilityStateMachine {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            state: ScrollState::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn phase(&self) -> NavPhase {
        match (self.state.visible, self.state.floating) {
            (_, false) => NavPhase::AtTop,
            (false, true) => NavPhase::ScrollingDown,
            (true, true) => NavPhase::ScrollingUp,
        }
    }

    #[inline]
    pub fn pose(&self) -> NavPose {
        NavPose::for_visibility(self.state.visible)
    }

    /// Feed one scroll offset. Offsets must arrive in delivery order.
    pub fn on_scroll(&mut self, y: f64) -> NavEvents {
        let mut events = NavEvents::new();
        if !y.is_finite() {
            log::debug!("[nav] ignoring non-finite scroll offset");
            return events;
        }
        let prev = self.state.last_offset_y;
        let next = if y == 0.0 {
            Some((true, false))
        } else if y < 0.0 || y < prev {
            // overscroll above the top reads as scrolling up
            Some((true, true))
        } else if y > prev {
            Some((false, true))
        } else {
            None
        };
        if let Some((visible, floating)) = next {
            if visible != self.state.visible {
                self.state.visible = visible;
                events.push(NavEvent::VisibilityChanged { visible });
            }
            if floating != self.state.floating {
                self.state.floating = floating;
                events.push(NavEvent::FloatingChanged { floating });
            }
        }
        self.state.last_offset_y = y;
        if !events.is_empty() {
            log::debug!("[nav] y={y} phase={:?}", self.phase());
        }
        events
    }
}
