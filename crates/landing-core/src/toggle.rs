use crate::applier::AudioSink;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub active: bool,
}

impl ToggleState {
    /// The indicator animates exactly when playback is requested.
    #[inline]
    pub fn indicator_active(&self) -> bool {
        self.active
    }
}

/// Couples the audio button's flag to its playback collaborator.
///
/// `active` reflects what the user asked for, not what the device managed:
/// a sink failure is logged and the flag stays where the click put it.
pub struct ToggleIndicatorStateMachine<S: AudioSink> {
    state: ToggleState,
    sink: S,
}

impl<S: AudioSink> ToggleIndicatorStateMachine<S> {
    pub fn new(sink: S) -> Self {
        Self {
            state: ToggleState::default(),
            sink,
        }
    }

    pub fn toggle(&mut self) -> ToggleState {
        self.state.active = !self.state.active;
        let result = if self.state.active {
            self.sink.start()
        } else {
            self.sink.stop()
        };
        if let Err(e) = result {
            log::warn!("[audio] active={} but sink failed: {}", self.state.active, e);
        }
        log::debug!("[audio] toggled active={}", self.state.active);
        self.state
    }

    #[inline]
    pub fn state(&self) -> ToggleState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    #[inline]
    pub fn indicator_active(&self) -> bool {
        self.state.indicator_active()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
