use fighter_fury::settings::Settings;
use fighter_fury::stats::*;

#[test]
fn new_stats_start_at_level_one() {
    let s = Settings::default();
    let stats = GameStats::new(&s);
    assert_eq!(stats.score, 0);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.lives_left, 3);
    assert_eq!(stats.high_score, 0);
    assert_eq!(stats.difficulty, Difficulty::initial(&s));
}

#[test]
fn escalate_scales_speeds_and_points() {
    let s = Settings::default();
    let mut d = Difficulty::initial(&s);
    d.escalate(&s);
    assert!((d.player_speed - 1.65).abs() < 1e-5);
    assert!((d.bullet_speed - 3.3).abs() < 1e-5);
    assert!((d.enemy_speed - 1.1).abs() < 1e-5);
    assert!((d.missile_speed - 1.65).abs() < 1e-5);
    assert_eq!(d.enemy_points, 75);
    assert_eq!(d.bullets_allowed, 5);

    // 75 * 1.5 = 112.5, truncated
    d.escalate(&s);
    assert_eq!(d.enemy_points, 112);
}

#[test]
fn escalate_grows_bullet_allowance_by_step() {
    let s = Settings {
        bullet_allowance_step: 2,
        ..Settings::default()
    };
    let mut d = Difficulty::initial(&s);
    d.escalate(&s);
    d.escalate(&s);
    assert_eq!(d.bullets_allowed, 9);
}

#[test]
fn level_up_raises_level_and_difficulty() {
    let s = Settings::default();
    let mut stats = GameStats::new(&s);
    stats.level_up(&s);
    assert_eq!(stats.level, 2);
    assert_eq!(stats.difficulty.enemy_points, 75);
}

#[test]
fn reset_keeps_high_score() {
    let s = Settings::default();
    let mut stats = GameStats::new(&s);
    stats.add_points(300);
    stats.check_high_score();
    stats.level_up(&s);
    stats.lose_life();

    stats.reset(&s);
    assert_eq!(stats.score, 0);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.lives_left, 3);
    assert_eq!(stats.high_score, 300);
    assert_eq!(stats.difficulty, Difficulty::initial(&s));
}

#[test]
fn high_score_only_rises() {
    let s = Settings::default();
    let mut stats = GameStats::new(&s);
    stats.high_score = 500;
    stats.add_points(200);
    stats.check_high_score();
    assert_eq!(stats.high_score, 500);
    stats.add_points(400);
    stats.check_high_score();
    assert_eq!(stats.high_score, 600);
}

#[test]
fn add_points_saturates() {
    let s = Settings::default();
    let mut stats = GameStats::new(&s);
    stats.score = u32::MAX - 1;
    stats.add_points(50);
    assert_eq!(stats.score, u32::MAX);
}

#[test]
fn lose_life_counts_down_to_zero() {
    let s = Settings::default();
    let mut stats = GameStats::new(&s);
    assert_eq!(stats.lose_life(), 2);
    assert_eq!(stats.lose_life(), 1);
    assert_eq!(stats.lose_life(), 0);
    assert_eq!(stats.lose_life(), 0);
}
