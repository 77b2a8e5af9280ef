/// Sound cues.  Playback is fire-and-forget: nothing waits on a cue and
/// nothing reports when one finishes.

use tracing::trace;

use crate::events::SoundCue;

pub trait CuePlayer {
    fn play(&mut self, cue: SoundCue);

    fn play_all(&mut self, cues: &[SoundCue]) {
        for &cue in cues {
            self.play(cue);
        }
    }
}

/// Plays nothing; used when muted or when no output device is available.
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl CuePlayer for SilentPlayer {
    fn play(&mut self, cue: SoundCue) {
        trace!(?cue, "cue (silent)");
    }
}

/// Pitch (Hz) and length (ms) of the tone for each cue.
pub fn tone_for(cue: SoundCue) -> (f32, u64) {
    match cue {
        SoundCue::PlayerFire => (880.0, 60),
        SoundCue::PlayerHit => (196.0, 180),
        SoundCue::BossFire => (330.0, 90),
        SoundCue::BossHit => (523.0, 120),
        SoundCue::PowerUp => (1318.0, 150),
    }
}

#[cfg(feature = "audio")]
pub use tone_bank::ToneBank;

#[cfg(feature = "audio")]
mod tone_bank {
    use std::time::Duration;

    use rodio::source::{SineWave, Source};
    use rodio::{OutputStream, OutputStreamBuilder, Sink};
    use tracing::trace;

    use super::{tone_for, CuePlayer};
    use crate::events::SoundCue;

    const VOLUME: f32 = 0.2;

    /// Synthesized tones on the default output device.
    pub struct ToneBank {
        stream: OutputStream,
    }

    impl ToneBank {
        pub fn open() -> Result<Self, rodio::StreamError> {
            let mut stream = OutputStreamBuilder::open_default_stream()?;
            stream.log_on_drop(false);
            Ok(ToneBank { stream })
        }
    }

    impl CuePlayer for ToneBank {
        fn play(&mut self, cue: SoundCue) {
            let (freq, millis) = tone_for(cue);
            let source = SineWave::new(freq)
                .take_duration(Duration::from_millis(millis))
                .amplify(VOLUME);
            let sink = Sink::connect_new(self.stream.mixer());
            sink.append(source);
            sink.detach();
            trace!(?cue, "cue played");
        }
    }
}

/// Best available player: tones when the `audio` feature is built and a
/// device opens, silence otherwise.
pub fn open_player(muted: bool) -> Box<dyn CuePlayer> {
    if muted {
        return Box::new(SilentPlayer);
    }

    #[cfg(feature = "audio")]
    {
        match ToneBank::open() {
            Ok(bank) => return Box::new(bank),
            Err(err) => tracing::warn!(%err, "audio output unavailable, continuing muted"),
        }
    }

    Box::new(SilentPlayer)
}
