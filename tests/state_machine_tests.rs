// Host-side tests for the nav scroll machine and the audio toggle.

use landing_core::*;

fn states(machine: &mut ScrollVisibilityStateMachine, offsets: &[f64]) -> Vec<(bool, bool)> {
    offsets
        .iter()
        .map(|&y| {
            machine.on_scroll(y);
            let s = machine.state();
            (s.visible, s.floating)
        })
        .collect()
}

#[test]
fn scroll_starts_docked_at_top() {
    let machine = ScrollVisibilityStateMachine::default();
    let s = machine.state();
    assert!(s.visible);
    assert!(!s.floating);
    assert_eq!(s.last_offset_y, 0.0);
    assert_eq!(machine.phase(), NavPhase::AtTop);
    assert_eq!(machine.pose(), NavPose::VISIBLE);
}

#[test]
fn scroll_back_to_top_docks_the_bar() {
    let mut machine = ScrollVisibilityStateMachine::default();
    let out = states(&mut machine, &[50.0, 0.0]);
    assert_eq!(out.last(), Some(&(true, false)));
    assert_eq!(machine.phase(), NavPhase::AtTop);
}

#[test]
fn scroll_down_then_up() {
    let mut machine = ScrollVisibilityStateMachine::default();
    let out = states(&mut machine, &[0.0, 10.0, 30.0, 20.0]);
    assert_eq!(
        out,
        vec![(true, false), (false, true), (false, true), (true, true)]
    );
    assert_eq!(machine.phase(), NavPhase::ScrollingUp);
    assert_eq!(machine.state().last_offset_y, 20.0);
}

#[test]
fn scroll_repeat_offset_is_a_no_op() {
    let mut machine = ScrollVisibilityStateMachine::default();
    machine.on_scroll(40.0);
    let before = machine.state();
    let events = machine.on_scroll(40.0);
    assert!(events.is_empty());
    assert_eq!(machine.state(), before);

    machine.on_scroll(25.0);
    let before = machine.state();
    assert!(machine.on_scroll(25.0).is_empty());
    assert_eq!(machine.state(), before);
}

#[test]
fn scroll_emits_only_actual_changes() {
    let mut machine = ScrollVisibilityStateMachine::default();
    assert!(machine.on_scroll(0.0).is_empty());

    let down = machine.on_scroll(10.0);
    assert_eq!(
        down.as_slice(),
        &[
            NavEvent::VisibilityChanged { visible: false },
            NavEvent::FloatingChanged { floating: true },
        ]
    );
    assert!(machine.on_scroll(30.0).is_empty());

    let up = machine.on_scroll(20.0);
    assert_eq!(
        up.as_slice(),
        &[NavEvent::VisibilityChanged { visible: true }]
    );

    let top = machine.on_scroll(0.0);
    assert_eq!(
        top.as_slice(),
        &[NavEvent::FloatingChanged { floating: false }]
    );
}

#[test]
fn scroll_negative_offset_reads_as_scrolling_up() {
    let mut machine = ScrollVisibilityStateMachine::default();
    machine.on_scroll(-12.0);
    assert_eq!(machine.phase(), NavPhase::ScrollingUp);
    // still above the top even though the value grew
    machine.on_scroll(-4.0);
    assert_eq!(machine.phase(), NavPhase::ScrollingUp);
    machine.on_scroll(0.0);
    assert_eq!(machine.phase(), NavPhase::AtTop);
}

#[test]
fn scroll_ignores_non_finite_offsets() {
    let mut machine = ScrollVisibilityStateMachine::default();
    machine.on_scroll(80.0);
    let before = machine.state();
    assert!(machine.on_scroll(f64::NAN).is_empty());
    assert!(machine.on_scroll(f64::INFINITY).is_empty());
    assert_eq!(machine.state(), before);
}

#[test]
fn nav_pose_matches_visibility() {
    assert_eq!(NavPose::for_visibility(true).translate_y_px, 0.0);
    assert_eq!(NavPose::for_visibility(true).opacity, 1.0);
    assert_eq!(NavPose::for_visibility(false).translate_y_px, -100.0);
    assert_eq!(NavPose::for_visibility(false).opacity, 0.0);
    assert_eq!(NavConfig::default().transition.duration_sec, 0.2);
}

#[derive(Default)]
struct FakeSink {
    actions: Vec<&'static str>,
    fail_start: bool,
}

impl AudioSink for FakeSink {
    fn start(&mut self) -> Result<(), PlaybackError> {
        self.actions.push("start");
        if self.fail_start {
            return Err(PlaybackError::Rejected("NotAllowedError".into()));
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), PlaybackError> {
        self.actions.push("stop");
        Ok(())
    }
}

#[test]
fn toggle_starts_inactive_without_side_effects() {
    let machine = ToggleIndicatorStateMachine::new(FakeSink::default());
    assert!(!machine.is_active());
    assert!(!machine.indicator_active());
    assert!(machine.sink().actions.is_empty());
}

#[test]
fn toggle_keeps_playback_in_lockstep() {
    let mut machine = ToggleIndicatorStateMachine::new(FakeSink::default());
    machine.toggle();
    machine.toggle();
    let last = machine.toggle();
    assert!(last.active);
    assert_eq!(machine.sink().actions, vec!["start", "stop", "start"]);
}

#[test]
fn toggle_indicator_tracks_active_flag() {
    let mut machine = ToggleIndicatorStateMachine::new(FakeSink::default());
    for _ in 0..5 {
        let s = machine.toggle();
        assert_eq!(s.indicator_active(), s.active);
        assert_eq!(machine.indicator_active(), machine.is_active());
    }
}

// Known asymmetry: the flag reflects user intent, not device success.
#[test]
fn toggle_stays_active_when_start_fails() {
    let mut machine = ToggleIndicatorStateMachine::new(FakeSink {
        fail_start: true,
        ..FakeSink::default()
    });
    let s = machine.toggle();
    assert!(s.active);
    assert!(machine.is_active());
    assert_eq!(machine.into_sink().actions, vec!["start"]);
}

#[test]
fn playback_error_messages() {
    assert_eq!(
        PlaybackError::Rejected("blocked".into()).to_string(),
        "playback rejected: blocked"
    );
    assert_eq!(
        PlaybackError::Unavailable.to_string(),
        "audio element unavailable"
    );
}
