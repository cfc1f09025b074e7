//! Engines bound to their rendering-layer collaborators.
//!
//! Each binding owns one engine and at most one attached collaborator.
//! `attach` and `detach` stand in for mount and unmount; with nothing
//! attached, pointer events are ignored.

use crate::applier::{AudioSink, NavPose, Region, StyleUpdate, TransformApplier};
use crate::constants::{FLOATING_NAV_CLASS, INDICATOR_ACTIVE_CLASS};
use crate::geometry::PointerSample;
use crate::parallax::PointerParallaxEngine;
use crate::scroll::{NavEvent, NavPhase, ScrollVisibilityStateMachine};
use crate::tilt::PointerTiltEngine;
use crate::toggle::{ToggleIndicatorStateMachine, ToggleState};
use crate::transform::Transform;

pub struct TiltBinding<R: Region> {
    pub engine: PointerTiltEngine,
    region: Option<R>,
}

impl<R: Region> TiltBinding<R> {
    pub fn new(engine: PointerTiltEngine) -> Self {
        Self {
            engine,
            region: None,
        }
    }

    pub fn attach(&mut self, region: R) {
        self.region = Some(region);
    }

    /// Clears the region back to identity before handing it back.
    pub fn detach(&mut self) -> Option<R> {
        let transform = self.engine.on_pointer_leave();
        let mut region = self.region.take()?;
        region.apply(&StyleUpdate::Transform {
            transform,
            transition: None,
        });
        Some(region)
    }

    pub fn region(&self) -> Option<&R> {
        self.region.as_ref()
    }

    pub fn on_pointer_move(&mut self, pointer: PointerSample) {
        let Some(region) = self.region.as_mut() else {
            return;
        };
        let Some(rect) = region.measure() else {
            return;
        };
        let transform = self.engine.on_pointer_move(rect, pointer);
        region.apply(&StyleUpdate::Transform {
            transform,
            transition: None,
        });
    }

    pub fn on_pointer_leave(&mut self) {
        let Some(region) = self.region.as_mut() else {
            return;
        };
        let transform = self.engine.on_pointer_leave();
        region.apply(&StyleUpdate::Transform {
            transform,
            transition: None,
        });
    }
}

pub struct ParallaxBinding<R: Region> {
    pub engine: PointerParallaxEngine,
    region: Option<R>,
}

impl<R: Region> ParallaxBinding<R> {
    pub fn new(engine: PointerParallaxEngine) -> Self {
        Self {
            engine,
            region: None,
        }
    }

    pub fn attach(&mut self, region: R) {
        self.region = Some(region);
    }

    /// Eases the region back to neutral before handing it back.
    pub fn detach(&mut self) -> Option<R> {
        let neutral = self.engine.on_pointer_leave();
        let mut region = self.region.take()?;
        region.apply(&StyleUpdate::Transform {
            transform: neutral.into(),
            transition: Some(self.engine.config.transition),
        });
        Some(region)
    }

    pub fn region(&self) -> Option<&R> {
        self.region.as_ref()
    }

    pub fn on_pointer_move(&mut self, pointer: PointerSample) {
        let Some(rect) = self.region.as_ref().and_then(|r| r.measure()) else {
            return;
        };
        let t = self.engine.on_pointer_move(rect, pointer);
        self.emit(t.into());
    }

    pub fn on_pointer_enter(&mut self) {
        if self.region.is_some() {
            let t = self.engine.on_pointer_enter();
            self.emit(t.into());
        }
    }

    pub fn on_pointer_leave(&mut self) {
        if self.region.is_some() {
            let t = self.engine.on_pointer_leave();
            self.emit(t.into());
        }
    }

    pub fn on_pointer_up(&mut self) {
        if self.region.is_some() {
            let t = self.engine.on_pointer_up();
            self.emit(t.into());
        }
    }

    fn emit(&mut self, transform: Transform) {
        let transition = Some(self.engine.config.transition);
        if let Some(region) = self.region.as_mut() {
            region.apply(&StyleUpdate::Transform {
                transform,
                transition,
            });
        }
    }
}

pub struct NavBinding<A: TransformApplier> {
    pub machine: ScrollVisibilityStateMachine,
    chrome: Option<A>,
}

impl<A: TransformApplier> NavBinding<A> {
    pub fn new(machine: ScrollVisibilityStateMachine) -> Self {
        Self {
            machine,
            chrome: None,
        }
    }

    /// Bind the nav chrome and bring it in line with the current state.
    pub fn attach(&mut self, mut chrome: A) {
        let state = self.machine.state();
        chrome.apply(&StyleUpdate::Pose {
            pose: NavPose::for_visibility(state.visible),
            transition: self.machine.config.transition,
        });
        chrome.apply(&StyleUpdate::Class {
            name: FLOATING_NAV_CLASS,
            enabled: state.floating,
        });
        self.chrome = Some(chrome);
    }

    pub fn detach(&mut self) -> Option<A> {
        self.chrome.take()
    }

    pub fn chrome(&self) -> Option<&A> {
        self.chrome.as_ref()
    }

    pub fn phase(&self) -> NavPhase {
        self.machine.phase()
    }

    pub fn on_scroll(&mut self, y: f64) {
        let events = self.machine.on_scroll(y);
        let Some(chrome) = self.chrome.as_mut() else {
            return;
        };
        for ev in events {
            let update = match ev {
                NavEvent::VisibilityChanged { visible } => StyleUpdate::Pose {
                    pose: NavPose::for_visibility(visible),
                    transition: self.machine.config.transition,
                },
                NavEvent::FloatingChanged { floating } => StyleUpdate::Class {
                    name: FLOATING_NAV_CLASS,
                    enabled: floating,
                },
            };
            chrome.apply(&update);
        }
    }
}

pub struct IndicatorBinding<S: AudioSink, A: TransformApplier> {
    pub machine: ToggleIndicatorStateMachine<S>,
    indicator: Option<A>,
}

impl<S: AudioSink, A: TransformApplier> IndicatorBinding<S, A> {
    pub fn new(machine: ToggleIndicatorStateMachine<S>) -> Self {
        Self {
            machine,
            indicator: None,
        }
    }

    pub fn attach(&mut self, mut indicator: A) {
        indicator.apply(&StyleUpdate::Class {
            name: INDICATOR_ACTIVE_CLASS,
            enabled: self.machine.indicator_active(),
        });
        self.indicator = Some(indicator);
    }

    pub fn detach(&mut self) -> Option<A> {
        self.indicator.take()
    }

    pub fn indicator(&self) -> Option<&A> {
        self.indicator.as_ref()
    }

    pub fn toggle(&mut self) -> ToggleState {
        let state = self.machine.toggle();
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.apply(&StyleUpdate::Class {
                name: INDICATOR_ACTIVE_CLASS,
                enabled: state.indicator_active(),
            });
        }
        state
    }
}
