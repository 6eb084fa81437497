//! Fire-and-forget audio requests.
//!
//! The core only ever asks for sounds by name; whoever implements
//! [`AudioSink`] decides what that means and swallows any failure.

use std::mem;

pub trait AudioSink {
    fn play_sound(&mut self, name: &str);
    fn play_music(&mut self, track: &str);
    fn set_music_volume(&mut self, volume: f32);
    fn stop_music(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum AudioRequest {
    Sound(String),
    Music(String),
    Volume(f32),
    StopMusic,
}

/// Buffers requests made during an update so the presentation can act on
/// them after the tick.
#[derive(Debug, Default)]
pub struct AudioQueue {
    requests: Vec<AudioRequest>,
}

impl AudioQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[AudioRequest] {
        &self.requests
    }

    pub fn drain(&mut self) -> Vec<AudioRequest> {
        mem::take(&mut self.requests)
    }

    fn push(&mut self, request: AudioRequest) {
        log::debug!("audio request: {request:?}");
        self.requests.push(request);
    }
}

impl AudioSink for AudioQueue {
    fn play_sound(&mut self, name: &str) {
        self.push(AudioRequest::Sound(name.to_string()));
    }

    fn play_music(&mut self, track: &str) {
        self.push(AudioRequest::Music(track.to_string()));
    }

    fn set_music_volume(&mut self, volume: f32) {
        self.push(AudioRequest::Volume(volume));
    }

    fn stop_music(&mut self) {
        self.push(AudioRequest::StopMusic);
    }
}
