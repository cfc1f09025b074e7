// Host-side tests for the inline-style strings and page hooks.
// The front-end crate is wasm-only, so we include the pure modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use constants::*;
use landing_core::{
    NavConfig, NavPose, ParallaxConfig, ParallaxTransform, TiltTransform, Transform,
    INDICATOR_LINE_COUNT,
};
use style::*;

#[test]
fn tilt_css_carries_perspective_rotation_and_scale() {
    let t = Transform::Tilt(TiltTransform {
        rotate_x_deg: -1.25,
        rotate_y_deg: 2.5,
        ..TiltTransform::default()
    });
    assert_eq!(
        transform_css(&t),
        "perspective(700px) rotateX(-1.25deg) rotateY(2.5deg) scale3d(0.98, 0.98, 0.98)"
    );
}

#[test]
fn parallax_css_has_no_scale() {
    let t = Transform::Parallax(ParallaxTransform {
        rotate_x_deg: 5.0,
        rotate_y_deg: -5.0,
        perspective_px: 500.0,
    });
    let css = transform_css(&t);
    assert_eq!(css, "perspective(500px) rotateX(5deg) rotateY(-5deg)");
    assert!(!css.contains("scale"));
}

#[test]
fn identity_clears_the_inline_transform() {
    assert_eq!(transform_css(&Transform::Identity), "");
    assert_eq!(transform_transition_css(None), "");
}

#[test]
fn transitions_render_as_css_shorthand() {
    let parallax = ParallaxConfig::default().transition;
    assert_eq!(
        transform_transition_css(Some(&parallax)),
        "transform 0.3s ease-in-out"
    );
    let nav = NavConfig::default().transition;
    assert_eq!(
        pose_transition_css(&nav),
        "transform 0.2s ease-out, opacity 0.2s ease-out"
    );
}

#[test]
fn nav_pose_css() {
    assert_eq!(
        pose_css(&NavPose::HIDDEN),
        ("translateY(-100px)".to_string(), "0".to_string())
    );
    assert_eq!(
        pose_css(&NavPose::VISIBLE),
        ("translateY(0px)".to_string(), "1".to_string())
    );
}

#[test]
fn indicator_lines_are_staggered() {
    let delays: Vec<String> = (1..=INDICATOR_LINE_COUNT).map(indicator_delay_css).collect();
    assert_eq!(delays, vec!["0.1s", "0.2s", "0.3s", "0.4s"]);
}

#[test]
fn page_hooks_are_distinct() {
    let ids = [NAV_CONTAINER_ID, AUDIO_TOGGLE_ID, AUDIO_ELEMENT_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.starts_with('#'));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(TILT_SELECTOR, PARALLAX_SELECTOR);
    assert!(INDICATOR_LINE_SELECTOR.starts_with('.'));
}
