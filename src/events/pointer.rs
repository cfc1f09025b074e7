use crate::constants::{PARALLAX_SELECTOR, TILT_SELECTOR};
use crate::dom;
use crate::element::ElementRegion;
use glam::DVec2;
use landing_core::{
    ParallaxBinding, PointerParallaxEngine, PointerSample, PointerTiltEngine, TiltBinding,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn pointer_sample(ev: &web::PointerEvent) -> PointerSample {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64).into()
}

/// Bento cards: tilt while the pointer is over them, flat once it leaves.
pub fn wire_tilt_regions(root: &web::Element) -> usize {
    let regions = dom::query_all(root, TILT_SELECTOR);
    for el in &regions {
        let binding = Rc::new(RefCell::new(TiltBinding::new(PointerTiltEngine::default())));
        binding.borrow_mut().attach(ElementRegion::new(el.clone()));

        let b = binding.clone();
        dom::add_pointer_listener(el, "pointermove", move |ev| {
            b.borrow_mut().on_pointer_move(pointer_sample(&ev));
        });
        dom::add_pointer_listener(el, "pointerleave", move |_| {
            binding.borrow_mut().on_pointer_leave();
        });
    }
    regions.len()
}

/// Story card: rotation eased by the stylesheet, reset on enter, leave and release.
pub fn wire_parallax_regions(root: &web::Element) -> usize {
    let regions = dom::query_all(root, PARALLAX_SELECTOR);
    for el in &regions {
        let binding = Rc::new(RefCell::new(ParallaxBinding::new(
            PointerParallaxEngine::default(),
        )));
        binding.borrow_mut().attach(ElementRegion::new(el.clone()));

        let b = binding.clone();
        dom::add_pointer_listener(el, "pointermove", move |ev| {
            b.borrow_mut().on_pointer_move(pointer_sample(&ev));
        });
        let b = binding.clone();
        dom::add_pointer_listener(el, "pointerenter", move |_| {
            b.borrow_mut().on_pointer_enter();
        });
        let b = binding.clone();
        dom::add_pointer_listener(el, "pointerleave", move |_| {
            b.borrow_mut().on_pointer_leave();
        });
        dom::add_pointer_listener(el, "pointerup", move |_| {
            binding.borrow_mut().on_pointer_up();
        });
    }
    regions.len()
}
