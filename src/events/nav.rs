use crate::audio::LoopAudio;
use crate::constants::{
    AUDIO_ELEMENT_ID, AUDIO_TOGGLE_ID, INDICATOR_LINE_SELECTOR, NAV_CONTAINER_ID,
};
use crate::dom;
use crate::element::{ElementRegion, IndicatorLines};
use landing_core::{
    IndicatorBinding, NavBinding, ScrollVisibilityStateMachine, ToggleIndicatorStateMachine,
    INDICATOR_LINE_COUNT,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hide the nav while scrolling down, float it back in on the way up.
pub fn wire_nav_scroll(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let nav: web::HtmlElement = dom::element_by_id(document, NAV_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", NAV_CONTAINER_ID))?;

    let binding = Rc::new(RefCell::new(NavBinding::new(
        ScrollVisibilityStateMachine::default(),
    )));
    binding.borrow_mut().attach(ElementRegion::new(nav));

    // A reload can restore the page mid-scroll.
    if let Ok(y) = window.scroll_y() {
        binding.borrow_mut().on_scroll(y);
    }

    let wnd = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Ok(y) = wnd.scroll_y() {
            binding.borrow_mut().on_scroll(y);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}

/// Audio button: one click starts the loop and the bars, the next stops both.
pub fn wire_audio_toggle(document: &web::Document) -> anyhow::Result<()> {
    let audio_el: web::HtmlAudioElement = dom::element_by_id(document, AUDIO_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", AUDIO_ELEMENT_ID))?;
    let button = document
        .get_element_by_id(AUDIO_TOGGLE_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", AUDIO_TOGGLE_ID))?;

    let lines = dom::query_all(&button, INDICATOR_LINE_SELECTOR);
    if lines.len() != INDICATOR_LINE_COUNT {
        log::warn!(
            "[audio] expected {} indicator lines, found {}",
            INDICATOR_LINE_COUNT,
            lines.len()
        );
    }

    let binding = Rc::new(RefCell::new(IndicatorBinding::new(
        ToggleIndicatorStateMachine::new(LoopAudio::mount(audio_el)),
    )));
    binding.borrow_mut().attach(IndicatorLines::mount(lines));

    dom::add_click_listener(&button, move || {
        let state = binding.borrow_mut().toggle();
        log::info!("[audio] active={}", state.active);
    });
    Ok(())
}
