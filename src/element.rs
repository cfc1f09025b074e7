use crate::style;
use landing_core::{Measure, Rect, StyleUpdate, TransformApplier};
use web_sys as web;

/// A live DOM element the effects can measure and restyle.
#[derive(Clone)]
pub struct ElementRegion {
    el: web::HtmlElement,
}

impl ElementRegion {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }
}

impl Measure for ElementRegion {
    fn measure(&self) -> Option<Rect> {
        if !self.el.is_connected() {
            return None;
        }
        let r = self.el.get_bounding_client_rect();
        Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
    }
}

impl TransformApplier for ElementRegion {
    fn apply(&mut self, update: &StyleUpdate) {
        let css = self.el.style();
        match update {
            StyleUpdate::Transform {
                transform,
                transition,
            } => {
                _ = css.set_property(
                    "transition",
                    &style::transform_transition_css(transition.as_ref()),
                );
                _ = css.set_property("transform", &style::transform_css(transform));
            }
            StyleUpdate::Pose { pose, transition } => {
                let (translate, opacity) = style::pose_css(pose);
                _ = css.set_property("transition", &style::pose_transition_css(transition));
                _ = css.set_property("transform", &translate);
                _ = css.set_property("opacity", &opacity);
            }
            StyleUpdate::Class { name, enabled } => {
                _ = self.el.class_list().toggle_with_force(name, *enabled);
            }
        }
    }
}

/// The bars inside the audio button; they only ever take class toggles.
pub struct IndicatorLines {
    lines: Vec<web::HtmlElement>,
}

impl IndicatorLines {
    /// Takes ownership of the bars and staggers their animation start.
    pub fn mount(lines: Vec<web::HtmlElement>) -> Self {
        for (i, line) in lines.iter().enumerate() {
            _ = line
                .style()
                .set_property("animation-delay", &style::indicator_delay_css(i + 1));
        }
        Self { lines }
    }
}

impl TransformApplier for IndicatorLines {
    fn apply(&mut self, update: &StyleUpdate) {
        if let StyleUpdate::Class { name, enabled } = update {
            for line in &self.lines {
                _ = line.class_list().toggle_with_force(name, *enabled);
            }
        }
    }
}
