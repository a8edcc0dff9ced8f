//! Procedural sound cues
//!
//! The simulation only describes tones; an [`AudioBackend`] turns them into
//! sound. Without a device every call is a no-op.

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Square,
}

/// A short tone with exponential frequency and gain sweeps.
/// Times are seconds from the moment the tone is started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub freq_start: f32,
    pub freq_end: f32,
    pub freq_ramp: f64,
    pub gain_start: f32,
    pub gain_end: f32,
    pub gain_ramp: f64,
    pub duration: f64,
}

/// Gain an exponential ramp fades toward (it cannot reach zero)
pub const GAIN_FLOOR: f32 = 0.001;

/// Sound effects the game triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Ball disintegrates after a point
    Explosion,
    /// Countdown step
    Beep,
}

impl Cue {
    pub fn tone(self) -> ToneSpec {
        match self {
            Cue::Explosion => ToneSpec {
                waveform: Waveform::Square,
                freq_start: 600.0,
                freq_end: 120.0,
                freq_ramp: 0.25,
                gain_start: 0.4,
                gain_end: GAIN_FLOOR,
                gain_ramp: 0.3,
                duration: 0.32,
            },
            Cue::Beep => ToneSpec {
                waveform: Waveform::Square,
                freq_start: 660.0,
                freq_end: 880.0,
                freq_ramp: 0.15,
                gain_start: 0.25,
                gain_end: GAIN_FLOOR,
                gain_ramp: 0.2,
                duration: 0.22,
            },
        }
    }
}

/// Output device capability
///
/// `ensure_ready` is called on user gestures; browsers refuse to open audio
/// before one. Implementations must never panic when no device exists.
pub trait AudioBackend {
    /// Open (or resume) the device if possible. Returns whether it is usable.
    fn ensure_ready(&mut self) -> bool;

    fn is_ready(&self) -> bool;

    /// Start a tone now. Overlapping tones layer.
    fn play(&mut self, tone: &ToneSpec);
}

/// Silent backend for headless runs and platforms without audio
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn ensure_ready(&mut self) -> bool {
        false
    }

    fn is_ready(&self) -> bool {
        false
    }

    fn play(&mut self, _tone: &ToneSpec) {}
}

/// Play a cue if the backend is ready; otherwise drop it.
pub fn play_cue(audio: &mut dyn AudioBackend, cue: Cue) {
    if audio.is_ready() {
        audio.play(&cue.tone());
    }
}
