use landing_core::{AudioSink, PlaybackError};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The looping soundtrack behind the nav audio button.
pub struct LoopAudio {
    el: web::HtmlAudioElement,
}

impl LoopAudio {
    pub fn mount(el: web::HtmlAudioElement) -> Self {
        el.set_loop(true);
        Self { el }
    }
}

impl AudioSink for LoopAudio {
    fn start(&mut self) -> Result<(), PlaybackError> {
        if !self.el.is_connected() {
            return Err(PlaybackError::Unavailable);
        }
        let promise: js_sys::Promise = self
            .el
            .play()
            .map_err(|e| PlaybackError::Rejected(format!("{:?}", e)))?;
        // Autoplay policy rejects asynchronously; nobody upstream waits on it.
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] play() rejected: {:?}", e);
            }
        });
        Ok(())
    }

    fn stop(&mut self) -> Result<(), PlaybackError> {
        if !self.el.is_connected() {
            return Err(PlaybackError::Unavailable);
        }
        self.el
            .pause()
            .map_err(|e| PlaybackError::Rejected(format!("{:?}", e)))
    }
}
