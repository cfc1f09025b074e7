// Inline-style strings for the effect targets. Pure so the host tests can
// include it directly.

use landing_core::{NavPose, Transform, Transition, INDICATOR_STAGGER_SEC};

pub fn transform_css(transform: &Transform) -> String {
    match transform {
        Transform::Identity => String::new(),
        Transform::Tilt(t) => format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
            t.perspective_px,
            t.rotate_x_deg,
            t.rotate_y_deg,
            s = t.scale
        ),
        Transform::Parallax(p) => format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            p.perspective_px, p.rotate_x_deg, p.rotate_y_deg
        ),
    }
}

/// Empty when the change should land immediately.
pub fn transform_transition_css(transition: Option<&Transition>) -> String {
    transition
        .map(|t| t.as_css("transform"))
        .unwrap_or_default()
}

/// `(transform, opacity)` for the nav container.
pub fn pose_css(pose: &NavPose) -> (String, String) {
    (
        format!("translateY({}px)", pose.translate_y_px),
        format!("{}", pose.opacity),
    )
}

pub fn pose_transition_css(transition: &Transition) -> String {
    format!(
        "{}, {}",
        transition.as_css("transform"),
        transition.as_css("opacity")
    )
}

/// Staggered `animation-delay` for the 1-based indicator line `index`.
pub fn indicator_delay_css(index: usize) -> String {
    format!("{:.1}s", index as f64 * INDICATOR_STAGGER_SEC)
}
