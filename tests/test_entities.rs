use fighter_fury::entities::*;
use fighter_fury::geometry::{Axis, Positioned, Rect};
use fighter_fury::settings::{Orientation, Rgb, Settings};

fn horizontal() -> Settings {
    Settings {
        orientation: Orientation::Horizontal,
        ..Settings::default()
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rects_sharing_an_edge_do_not_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
    assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
}

#[test]
fn empty_rect_never_intersects() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(5, 5, 0, 3)));
}

#[test]
fn contains_point_is_half_open() {
    let r = Rect::new(10, 20, 5, 5);
    assert!(r.contains_point(10, 20));
    assert!(r.contains_point(14, 24));
    assert!(!r.contains_point(15, 20));
    assert!(!r.contains_point(10, 25));
}

#[test]
fn set_center_rounds_start_down() {
    let mut r = Rect::new(0, 0, 3, 15);
    r.set_center(Axis::X, 600);
    assert_eq!(r.x, 599);
    assert_eq!(r.center(Axis::X), 600);
}

// ── Positioned ────────────────────────────────────────────────────────────────

#[test]
fn positioned_rect_truncates_float() {
    let mut p = Positioned::from_rect(Rect::new(0, 0, 4, 4));
    for _ in 0..3 {
        p.advance(Axis::X, 0.4);
    }
    assert!((p.pos(Axis::X) - 1.2).abs() < 1e-6);
    assert_eq!(p.rect().x, 1);
    assert_eq!(p.rect().y, 0);
}

#[test]
fn positioned_keeps_sub_pixel_progress() {
    let mut p = Positioned::from_rect(Rect::new(10, 10, 4, 4));
    p.advance(Axis::Y, 0.5);
    assert_eq!(p.rect().y, 10);
    p.advance(Axis::Y, 0.5);
    assert_eq!(p.rect().y, 11);
}

#[test]
fn positioned_place_drops_remainder() {
    let mut p = Positioned::from_rect(Rect::new(0, 0, 4, 4));
    p.advance(Axis::X, 2.75);
    p.place(Rect::new(50, 60, 4, 4));
    assert_eq!(p.pos(Axis::X), 50.0);
    assert_eq!(p.rect(), Rect::new(50, 60, 4, 4));
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[test]
fn player_bullet_leaves_top_edge_centred() {
    let settings = Settings::default();
    let player = Player::new(&settings);
    let b = Projectile::from_player(&player, &settings, 3.0);
    assert_eq!(b.rect(), Rect::new(599, 737, 3, 15));
    assert_eq!(b.speed, -3.0);
    assert_eq!(b.color, Rgb(60, 60, 60));
    assert_eq!(b.owner, Owner::Player);
}

#[test]
fn player_bullet_horizontal_leaves_right_edge() {
    let settings = horizontal();
    let player = Player::new(&settings);
    assert_eq!(player.rect(), Rect::new(0, 376, 60, 48));
    let b = Projectile::from_player(&player, &settings, 3.0);
    assert_eq!(b.rect(), Rect::new(60, 399, 15, 3));
    assert_eq!(b.speed, 3.0);
}

#[test]
fn enemy_missile_leaves_bottom_edge_centred() {
    let settings = Settings::default();
    let enemy = Enemy::at(Rect::new(100, 100, 50, 30));
    let m = Projectile::from_enemy(&enemy, &settings, 1.5);
    assert_eq!(m.rect(), Rect::new(124, 130, 2, 8));
    assert_eq!(m.speed, 1.5);
    assert_eq!(m.owner, Owner::Enemy);
}

#[test]
fn projectile_tick_moves_along_its_axis() {
    let settings = Settings::default();
    let player = Player::new(&settings);
    let mut b = Projectile::from_player(&player, &settings, 3.0);
    b.tick();
    assert_eq!(b.rect(), Rect::new(599, 734, 3, 15));
}

#[test]
fn missile_expires_once_past_far_edge() {
    let settings = Settings::default();
    let playfield = settings.playfield();

    let at_edge = Enemy::at(Rect::new(100, 770, 50, 30));
    assert!(Projectile::from_enemy(&at_edge, &settings, 1.5).is_expired(playfield));

    let above = Enemy::at(Rect::new(100, 700, 50, 30));
    assert!(!Projectile::from_enemy(&above, &settings, 1.5).is_expired(playfield));
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_touches_edge_inclusive() {
    let playfield = Settings::default().playfield();
    assert!(Enemy::at(Rect::new(1150, 0, 50, 30)).touches_edge(playfield, Axis::X));
    assert!(Enemy::at(Rect::new(0, 0, 50, 30)).touches_edge(playfield, Axis::X));
    assert!(!Enemy::at(Rect::new(1149, 0, 50, 30)).touches_edge(playfield, Axis::X));
    assert!(!Enemy::at(Rect::new(1, 0, 50, 30)).touches_edge(playfield, Axis::X));
}

#[test]
fn enemy_tick_follows_direction() {
    let mut e = Enemy::at(Rect::new(100, 100, 50, 30));
    e.tick(Axis::X, 1.5, -1.0);
    assert_eq!(e.pos(Axis::X), 98.5);
    assert_eq!(e.rect().x, 98);
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_starts_centred_on_bottom_edge() {
    let p = Player::new(&Settings::default());
    assert_eq!(p.rect(), Rect::new(570, 752, 60, 48));
    assert!(!p.moving_toward_near_edge);
    assert!(!p.moving_toward_far_edge);
}

#[test]
fn set_intent_none_leaves_flag_alone() {
    let mut p = Player::new(&Settings::default());
    p.set_intent(Some(true), Some(true));
    p.set_intent(None, Some(false));
    assert!(p.moving_toward_near_edge);
    assert!(!p.moving_toward_far_edge);
}

#[test]
fn player_with_both_flags_stays_put() {
    let settings = Settings::default();
    let mut p = Player::new(&settings);
    p.set_intent(Some(true), Some(true));
    p.tick(settings.playfield(), Axis::X, 1.5);
    assert_eq!(p.pos(Axis::X), 570.0);
}

#[test]
fn player_stops_at_near_edge() {
    let settings = Settings::default();
    let mut p = Player::new(&settings);
    p.set_intent(Some(true), None);
    for _ in 0..500 {
        p.tick(settings.playfield(), Axis::X, 1.5);
    }
    assert_eq!(p.rect().x, 0);
}

#[test]
fn player_stops_at_far_edge() {
    let settings = Settings::default();
    let mut p = Player::new(&settings);
    p.set_intent(None, Some(true));
    for _ in 0..500 {
        p.tick(settings.playfield(), Axis::X, 1.5);
    }
    assert_eq!(p.rect().right(), 1200);
}

#[test]
fn player_horizontal_moves_along_y() {
    let settings = horizontal();
    let mut p = Player::new(&settings);
    p.set_intent(Some(true), None);
    p.tick(settings.playfield(), Axis::Y, 2.0);
    assert_eq!(p.rect(), Rect::new(0, 374, 60, 48));
}

#[test]
fn player_recenter_returns_home() {
    let settings = Settings::default();
    let mut p = Player::new(&settings);
    p.set_intent(None, Some(true));
    for _ in 0..7 {
        p.tick(settings.playfield(), Axis::X, 1.5);
    }
    assert_ne!(p.rect().x, 570);
    p.recenter(settings.playfield(), settings.orientation);
    assert_eq!(p.rect(), Rect::new(570, 752, 60, 48));
    assert_eq!(p.pos(Axis::X), 570.0);
}
