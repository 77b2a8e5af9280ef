use boss_rush::compute::init_state;
use boss_rush::entities::*;
use boss_rush::events::SoundCue;
use boss_rush::spawn::{roll_boss_direction, run_boss_fire};

use rand::rngs::mock::StepRng;

/// Every coin flip and roll comes up "yes".
fn always_yes() -> StepRng {
    StepRng::new(0, 0)
}

/// Every coin flip and roll comes up "no".
fn always_no() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

/// First draw "no" (skip the volley), second draw "yes" (drop a power-up).
fn no_then_yes() -> StepRng {
    StepRng::new(u64::MAX, 1)
}

fn about_to_fire() -> GameState {
    let mut s = init_state();
    s.timers.fire = INITIAL_BOSS_FIRE_INTERVAL - 1;
    s
}

#[test]
fn timers_count_frames() {
    let s = init_state();
    let s1 = roll_boss_direction(&s, &mut always_yes());
    let (s2, cues) = run_boss_fire(&s1, &mut always_yes());
    assert_eq!(s1.timers, SpawnTimers { direction: 1, fire: 0 });
    assert_eq!(s2.timers, SpawnTimers { direction: 1, fire: 1 });
    assert!(cues.is_empty());
    assert!(s2.boss.bullets.is_empty());
}

#[test]
fn volley_fires_on_threshold() {
    let s = about_to_fire();
    let (s2, cues) = run_boss_fire(&s, &mut always_yes());
    assert_eq!(s2.boss.bullets.to_vec(), s.boss.spread_volley().to_vec());
    assert_eq!(cues, vec![SoundCue::BossFire]);
    assert_eq!(s2.timers.fire, 0);
    assert!(s2.boss.power_ups.is_empty());
}

#[test]
fn skipped_volley_may_drop_power_up() {
    let s = about_to_fire();
    let (s2, cues) = run_boss_fire(&s, &mut no_then_yes());
    assert!(s2.boss.bullets.is_empty());
    assert_eq!(s2.boss.power_ups, vec![s.boss.drop_power_up()]);
    assert!(cues.is_empty());
    assert_eq!(s2.timers.fire, 0);
}

#[test]
fn skipped_volley_usually_drops_nothing() {
    let s = about_to_fire();
    let (s2, cues) = run_boss_fire(&s, &mut always_no());
    assert!(s2.boss.bullets.is_empty());
    assert!(s2.boss.power_ups.is_empty());
    assert!(cues.is_empty());
    assert_eq!(s2.timers.fire, 0);
}

#[test]
fn direction_rerolled_every_twenty_frames() {
    let mut s = init_state();
    s.timers.direction = BOSS_DIRECTION_INTERVAL - 1;

    let up = roll_boss_direction(&s, &mut always_yes());
    assert_eq!(up.boss.direction, BossDirection::Up);
    assert_eq!(up.timers.direction, 0);

    s.boss.direction = BossDirection::Up;
    let down = roll_boss_direction(&s, &mut always_no());
    assert_eq!(down.boss.direction, BossDirection::Down);
}

#[test]
fn direction_kept_between_rerolls() {
    let mut s = init_state();
    s.boss.direction = BossDirection::Up;
    s.timers.direction = 5;
    let s2 = roll_boss_direction(&s, &mut always_no());
    assert_eq!(s2.boss.direction, BossDirection::Up);
    assert_eq!(s2.timers.direction, 6);
}

#[test]
fn faster_interval_fires_sooner() {
    let mut s = init_state();
    s.boss_fire_interval = 5;
    let mut rng = always_yes();
    let mut volleys = 0;
    for _ in 0..20 {
        let (next, cues) = run_boss_fire(&s, &mut rng);
        volleys += cues.len();
        s = next;
    }
    assert_eq!(volleys, 4);
    assert_eq!(s.boss.bullets.len(), 12);
}

#[test]
fn floor_interval_fires_every_frame() {
    let mut s = init_state();
    s.boss_fire_interval = MIN_BOSS_FIRE_INTERVAL;
    let mut rng = always_yes();
    for _ in 0..3 {
        s = run_boss_fire(&s, &mut rng).0;
    }
    assert_eq!(s.boss.bullets.len(), 9);
}

#[test]
fn direction_roll_leaves_fire_timer_alone() {
    let mut s = about_to_fire();
    s.timers.direction = BOSS_DIRECTION_INTERVAL - 1;
    let s2 = roll_boss_direction(&s, &mut always_yes());
    assert_eq!(s2.timers.fire, s.timers.fire);
    assert!(s2.boss.bullets.is_empty());
}

#[test]
fn fire_decision_leaves_heading_alone() {
    let mut s = about_to_fire();
    s.timers.direction = BOSS_DIRECTION_INTERVAL - 1;
    let (s2, _) = run_boss_fire(&s, &mut always_yes());
    assert_eq!(s2.boss.direction, s.boss.direction);
    assert_eq!(s2.timers.direction, s.timers.direction);
}
