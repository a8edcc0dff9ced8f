//! Web Audio implementation of the audio backend
//!
//! The context is created lazily on the first user gesture. Any failure
//! leaves the backend silent; the game never sees an error.

use game_core::{AudioBackend, ToneSpec, Waveform};
use log::{debug, warn};
use web_sys::{AudioContext, AudioContextState, OscillatorType};

#[derive(Default)]
pub struct WebAudio {
    ctx: Option<AudioContext>,
    unavailable: bool,
}

impl WebAudio {
    pub fn new() -> Self {
        Self::default()
    }

    fn start_tone(ctx: &AudioContext, tone: &ToneSpec) -> Result<(), wasm_bindgen::JsValue> {
        let now = ctx.current_time();

        let osc = ctx.create_oscillator()?;
        osc.set_type(match tone.waveform {
            Waveform::Square => OscillatorType::Square,
        });
        let freq = osc.frequency();
        freq.set_value_at_time(tone.freq_start, now)?;
        freq.exponential_ramp_to_value_at_time(tone.freq_end, now + tone.freq_ramp)?;

        let gain = ctx.create_gain()?;
        let level = gain.gain();
        level.set_value_at_time(tone.gain_start, now)?;
        level.exponential_ramp_to_value_at_time(tone.gain_end, now + tone.gain_ramp)?;

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;
        osc.start_with_when(now)?;
        osc.stop_with_when(now + tone.duration)?;
        Ok(())
    }
}

impl AudioBackend for WebAudio {
    fn ensure_ready(&mut self) -> bool {
        if self.unavailable {
            return false;
        }
        if self.ctx.is_none() {
            match AudioContext::new() {
                Ok(ctx) => {
                    debug!("Audio context created");
                    self.ctx = Some(ctx);
                }
                Err(err) => {
                    warn!("Audio unavailable: {err:?}");
                    self.unavailable = true;
                    return false;
                }
            }
        }
        if let Some(ctx) = &self.ctx {
            if ctx.state() == AudioContextState::Suspended {
                // Resolves asynchronously; tones before then are inaudible
                let _ = ctx.resume();
            }
        }
        true
    }

    fn is_ready(&self) -> bool {
        self.ctx.is_some()
    }

    fn play(&mut self, tone: &ToneSpec) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        if let Err(err) = Self::start_tone(ctx, tone) {
            debug!("Tone dropped: {err:?}");
        }
    }
}
