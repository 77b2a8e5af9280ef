use std::collections::HashSet;

use boss_rush::audio::{open_player, tone_for, CuePlayer, SilentPlayer};
use boss_rush::events::SoundCue;

#[derive(Default)]
struct Recorder {
    played: Vec<SoundCue>,
}

impl CuePlayer for Recorder {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}

const ALL_CUES: [SoundCue; 5] = [
    SoundCue::PlayerFire,
    SoundCue::PlayerHit,
    SoundCue::BossFire,
    SoundCue::BossHit,
    SoundCue::PowerUp,
];

#[test]
fn play_all_keeps_order() {
    let mut rec = Recorder::default();
    rec.play_all(&[SoundCue::BossFire, SoundCue::PlayerHit, SoundCue::BossFire]);
    assert_eq!(
        rec.played,
        vec![SoundCue::BossFire, SoundCue::PlayerHit, SoundCue::BossFire]
    );
}

#[test]
fn every_cue_has_its_own_pitch() {
    let pitches: HashSet<u32> = ALL_CUES.iter().map(|&c| tone_for(c).0 as u32).collect();
    assert_eq!(pitches.len(), ALL_CUES.len());
    assert!(ALL_CUES.iter().all(|&c| tone_for(c).1 > 0));
}

#[test]
fn silent_and_muted_players_accept_every_cue() {
    let mut silent = SilentPlayer;
    silent.play_all(&ALL_CUES);

    let mut muted = open_player(true);
    muted.play_all(&ALL_CUES);
}
