/// Round controller: game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`. Side effects are limited to the injected RNG and the `log`
/// facade. The only real-time behaviour, the stall after losing a life, is
/// left to the caller: it sees a `GameEvent::LifeLost` and sleeps.

use rand::Rng;

use crate::entities::{Enemy, GameStatus, Owner, Player, Projectile};
use crate::fleet::Fleet;
use crate::geometry::Rect;
use crate::settings::Settings;
use crate::stats::GameStats;

/// What happened during the last update, for the front end to react to.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    GameStarted,
    EnemiesDestroyed { count: usize, points: u32 },
    FleetCleared { level: u32 },
    LifeLost { lives_left: u32 },
    GameOver { score: u32 },
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so pure update functions can return a
/// new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub settings: Settings,
    pub player: Player,
    pub fleet: Fleet,
    /// Player-fired projectiles.
    pub bullets: Vec<Projectile>,
    /// Enemy-fired projectiles.
    pub missiles: Vec<Projectile>,
    pub stats: GameStats,
    pub status: GameStatus,
    pub frame: u64,
    /// Events produced by the most recent update.
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn playfield(&self) -> Rect {
        self.settings.playfield()
    }

    pub fn play_button(&self) -> Rect {
        self.settings.play_button()
    }

    pub fn play_button_visible(&self) -> bool {
        self.status == GameStatus::Inactive
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    /// Every live projectile, player bullets first.
    pub fn projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.bullets.iter().chain(self.missiles.iter())
    }

    /// Fresh fleet, no projectiles, player back home.
    fn reset_round(&mut self) {
        self.bullets.clear();
        self.missiles.clear();
        self.fleet.rebuild(&self.settings, self.player.rect());
        self.player.recenter(self.settings.playfield(), self.settings.orientation);
    }

    fn lose_life(&mut self) {
        let lives_left = self.stats.lose_life();
        if lives_left > 0 {
            self.reset_round();
            log::debug!("Player hit, {} lives left", lives_left);
            self.events.push(GameEvent::LifeLost { lives_left });
        } else {
            self.status = GameStatus::Inactive;
            log::info!(
                "Game over: score {}, level {}, high score {}",
                self.stats.score,
                self.stats.level,
                self.stats.high_score
            );
            self.events.push(GameEvent::GameOver {
                score: self.stats.score,
            });
        }
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Title-screen state: a fleet on display, the play button up, nothing moving.
pub fn init_state(settings: Settings) -> GameState {
    let player = Player::new(&settings);
    let fleet = Fleet::build(&settings, player.rect());
    let stats = GameStats::new(&settings);
    GameState {
        settings,
        player,
        fleet,
        bullets: Vec::new(),
        missiles: Vec::new(),
        stats,
        status: GameStatus::Inactive,
        frame: 0,
        events: Vec::new(),
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Start a session. Ignored unless the game is inactive.
pub fn start_game(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.events.clear();
    if next.status != GameStatus::Inactive {
        return next;
    }

    next.stats.reset(&next.settings);
    next.fleet.direction = 1.0;
    next.player.set_intent(Some(false), Some(false));
    next.reset_round();
    next.status = GameStatus::Active;
    log::info!(
        "Session started: {} enemies, {} lives",
        next.fleet.len(),
        next.stats.lives_left
    );
    next.events.push(GameEvent::GameStarted);
    next
}

/// Start a session if the click landed on the visible play button.
pub fn click(state: &GameState, x: i32, y: i32) -> GameState {
    if state.play_button_visible() && state.play_button().contains_point(x, y) {
        start_game(state)
    } else {
        state.clone()
    }
}

/// Update the player's movement flags; `None` leaves a flag unchanged.
pub fn set_player_intent(
    state: &GameState,
    toward_near: Option<bool>,
    toward_far: Option<bool>,
) -> GameState {
    let mut next = state.clone();
    next.player.set_intent(toward_near, toward_far);
    next
}

/// Fire a bullet from the player, capped at `bullets_allowed` in flight.
pub fn player_shoot(state: &GameState) -> GameState {
    if !state.is_active() {
        return state.clone();
    }
    let active = state
        .bullets
        .iter()
        .filter(|b| b.owner == Owner::Player)
        .count();
    if active >= state.stats.difficulty.bullets_allowed as usize {
        return state.clone();
    }
    let mut next = state.clone();
    let bullet = Projectile::from_player(
        &next.player,
        &next.settings,
        next.stats.difficulty.bullet_speed,
    );
    next.bullets.push(bullet);
    next
}

// ── Per-frame tick (nearly pure, RNG is injected) ──────────────────────────

/// Advance the simulation by one frame. All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Inactive states come back unchanged apart from cleared events.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.events.clear();
    if !next.is_active() {
        return next;
    }
    next.frame += 1;

    let settings = &next.settings;
    let playfield = settings.playfield();
    let orientation = settings.orientation;
    let difficulty = next.stats.difficulty.clone();

    // ── 1. Player ────────────────────────────────────────────────────────────
    next.player
        .tick(playfield, orientation.advance_axis(), difficulty.player_speed);

    // ── 2. Projectiles, discarding any that left the playfield ───────────────
    for projectile in next.bullets.iter_mut().chain(next.missiles.iter_mut()) {
        projectile.tick();
    }
    next.bullets.retain(|b| !b.is_expired(playfield));
    next.missiles.retain(|m| !m.is_expired(playfield));

    // ── 3. Fleet: redirect on edge contact, then sweep ───────────────────────
    next.fleet.check_edges_and_redirect(settings);
    next.fleet.tick(settings, difficulty.enemy_speed);

    // Enemies randomly launch missiles
    if settings.enemy_fire_chance > 0.0 {
        for enemy in &next.fleet.enemies {
            if next.missiles.len() >= settings.missiles_allowed as usize {
                break;
            }
            if rng.gen_bool(settings.enemy_fire_chance) {
                next.missiles.push(Projectile::from_enemy(
                    enemy,
                    settings,
                    difficulty.missile_speed,
                ));
            }
        }
    }

    // ── 4. Collision: player bullets ↔ enemies ───────────────────────────────
    let (used_bullets, killed_enemies) = bullet_enemy_hits(&next.bullets, &next.fleet.enemies);
    if !killed_enemies.is_empty() {
        let points = difficulty
            .enemy_points
            .saturating_mul(killed_enemies.len() as u32)
            .saturating_add(settings.collision_bonus);
        next.bullets = remove_indices(next.bullets, &used_bullets);
        next.fleet.enemies = remove_indices(next.fleet.enemies, &killed_enemies);
        next.stats.add_points(points);
        next.events.push(GameEvent::EnemiesDestroyed {
            count: killed_enemies.len(),
            points,
        });
    }
    next.stats.check_high_score();

    // ── 5. Fleet cleared: new fleet, harder level ────────────────────────────
    if next.fleet.is_cleared() {
        next.bullets.clear();
        next.missiles.clear();
        next.fleet.rebuild(&next.settings, next.player.rect());
        next.stats.level_up(&next.settings);
        log::info!(
            "Fleet cleared, level {} (enemy speed {:.2}, {} points)",
            next.stats.level,
            next.stats.difficulty.enemy_speed,
            next.stats.difficulty.enemy_points
        );
        next.events.push(GameEvent::FleetCleared {
            level: next.stats.level,
        });
    }

    // ── 6–8. Player hit: enemy contact, boundary breach, missile ─────────────
    let player_rect = next.player.rect();
    let rammed = next
        .fleet
        .enemies
        .iter()
        .any(|e| e.rect().intersects(&player_rect));
    let breached = || {
        next.fleet
            .enemies
            .iter()
            .any(|e| orientation.breached(&e.rect(), playfield))
    };
    let missile_hit = || next.missiles.iter().any(|m| m.rect().intersects(&player_rect));

    if rammed || breached() || missile_hit() {
        next.lose_life();
    }

    next
}

/// Two-phase scan for bullet/enemy overlaps.
///
/// Returns the indices of consumed bullets and destroyed enemies. A bullet
/// takes out the first live enemy it overlaps; neither side takes part in
/// more than one pair.
pub fn bullet_enemy_hits(bullets: &[Projectile], enemies: &[Enemy]) -> (Vec<usize>, Vec<usize>) {
    let mut used_bullets: Vec<usize> = Vec::new();
    let mut killed_enemies: Vec<usize> = Vec::new();

    for (bi, bullet) in bullets.iter().enumerate() {
        if bullet.owner != Owner::Player {
            continue;
        }
        let rect = bullet.rect();
        for (ei, enemy) in enemies.iter().enumerate() {
            if !killed_enemies.contains(&ei) && rect.intersects(&enemy.rect()) {
                killed_enemies.push(ei);
                used_bullets.push(bi);
                break;
            }
        }
    }
    (used_bullets, killed_enemies)
}

fn remove_indices<T>(items: Vec<T>, indices: &[usize]) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !indices.contains(i))
        .map(|(_, item)| item)
        .collect()
}
