use boss_rush::compute::init_state;
use boss_rush::dispatch::*;
use boss_rush::entities::*;
use boss_rush::events::{GameEvent, SoundCue};

#[test]
fn player_hit_costs_one_health() {
    let s = init_state();
    let (s2, cues) = apply_events(&s, vec![GameEvent::PlayerHit]);
    assert_eq!(s2.player.health, 2);
    assert_eq!(cues, vec![SoundCue::PlayerHit]);
}

#[test]
fn boss_hit_costs_health_and_speeds_up_fire() {
    let s = init_state();
    let (s2, cues) = apply_events(&s, vec![GameEvent::BossHit]);
    assert_eq!(s2.boss.health, 9);
    assert_eq!(s2.boss_fire_interval, 43);
    assert_eq!(cues, vec![SoundCue::BossHit]);
}

#[test]
fn fire_interval_drops_by_two_per_hit() {
    let s = init_state();
    for n in 0..=22 {
        let (s2, _) = apply_events(&s, vec![GameEvent::BossHit; n]);
        assert_eq!(s2.boss_fire_interval, 45 - 2 * n as i32);
    }
}

#[test]
fn fire_interval_is_floored() {
    let s = init_state();
    let (s2, _) = apply_events(&s, vec![GameEvent::BossHit; 23]);
    assert_eq!(s2.boss_fire_interval, MIN_BOSS_FIRE_INTERVAL);
    let (s3, _) = apply_events(&s2, vec![GameEvent::BossHit; 10]);
    assert_eq!(s3.boss_fire_interval, MIN_BOSS_FIRE_INTERVAL);
}

#[test]
fn power_up_only_raises_bullet_cap() {
    let s = init_state();
    let (s2, cues) = apply_events(&s, vec![GameEvent::PlayerPowerUp]);

    let mut expected = s.clone();
    expected.player.max_bullets += 1;
    assert_eq!(s2, expected);
    assert_eq!(cues, vec![SoundCue::PowerUp]);
}

#[test]
fn fire_spawns_bullet_at_muzzle() {
    let s = init_state();
    let (s2, cues) = apply_events(&s, vec![GameEvent::FireRequested]);
    assert_eq!(s2.player.bullets, vec![s.player.muzzle_bullet()]);
    assert_eq!(cues, vec![SoundCue::PlayerFire]);
}

#[test]
fn fire_ignored_at_capacity() {
    let s = init_state();
    let (s2, cues) = apply_events(&s, vec![GameEvent::FireRequested; 3]);
    assert_eq!(s2.player.bullets.len(), 2);
    assert_eq!(cues, vec![SoundCue::PlayerFire, SoundCue::PlayerFire]);
}

#[test]
fn events_apply_in_order() {
    // The power-up lands between the second and third shot, so all three fire
    let s = init_state();
    let events = vec![
        GameEvent::FireRequested,
        GameEvent::FireRequested,
        GameEvent::PlayerPowerUp,
        GameEvent::FireRequested,
    ];
    let (s2, cues) = apply_events(&s, events);
    assert_eq!(s2.player.bullets.len(), 3);
    assert_eq!(
        cues,
        vec![
            SoundCue::PlayerFire,
            SoundCue::PlayerFire,
            SoundCue::PowerUp,
            SoundCue::PlayerFire,
        ]
    );
}

#[test]
fn quit_closes_the_match() {
    let s = init_state();
    let (s2, cues) = apply_events(&s, vec![GameEvent::Quit]);
    assert_eq!(s2.status, GameStatus::Closed);
    assert!(cues.is_empty());
}

#[test]
fn no_events_no_change() {
    let s = init_state();
    let (s2, cues) = apply_events(&s, Vec::new());
    assert_eq!(s2, s);
    assert!(cues.is_empty());
}

// ── check_terminal ────────────────────────────────────────────────────────────

#[test]
fn running_while_both_alive() {
    assert_eq!(check_terminal(&init_state()), GameStatus::Running);
}

#[test]
fn boss_at_zero_means_player_won() {
    let mut s = init_state();
    s.boss.health = 0;
    assert_eq!(check_terminal(&s), GameStatus::PlayerWon);
    s.boss.health = -1;
    assert_eq!(check_terminal(&s), GameStatus::PlayerWon);
}

#[test]
fn player_at_zero_means_player_lost() {
    let mut s = init_state();
    s.player.health = 0;
    assert_eq!(check_terminal(&s), GameStatus::PlayerLost);
}

#[test]
fn loss_checked_before_win() {
    let mut s = init_state();
    s.player.health = 0;
    s.boss.health = 0;
    assert_eq!(check_terminal(&s), GameStatus::PlayerLost);
}

#[test]
fn closed_wins_over_health() {
    let mut s = init_state();
    s.player.health = 0;
    s.status = GameStatus::Closed;
    assert_eq!(check_terminal(&s), GameStatus::Closed);
}
