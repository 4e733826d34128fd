/// Session statistics and the per-level difficulty curve.

use crate::settings::Settings;

/// Values that grow every time a fleet is cleared.
#[derive(Clone, Debug, PartialEq)]
pub struct Difficulty {
    pub player_speed: f32,
    pub bullet_speed: f32,
    pub enemy_speed: f32,
    pub missile_speed: f32,
    pub enemy_points: u32,
    pub bullets_allowed: u32,
}

impl Difficulty {
    pub fn initial(settings: &Settings) -> Self {
        Difficulty {
            player_speed: settings.player_speed,
            bullet_speed: settings.bullet_speed,
            enemy_speed: settings.enemy_speed,
            missile_speed: settings.missile_speed,
            enemy_points: settings.enemy_points,
            bullets_allowed: settings.bullets_allowed,
        }
    }

    /// Speeds scale by `speed_scale`, points by `score_scale` (truncated),
    /// and the bullet allowance grows by `bullet_allowance_step`.
    pub fn escalate(&mut self, settings: &Settings) {
        self.player_speed *= settings.speed_scale;
        self.bullet_speed *= settings.speed_scale;
        self.enemy_speed *= settings.speed_scale;
        self.missile_speed *= settings.speed_scale;
        self.enemy_points = (self.enemy_points as f32 * settings.score_scale) as u32;
        self.bullets_allowed += settings.bullet_allowance_step;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    pub score: u32,
    pub level: u32,
    pub lives_left: u32,
    /// Survives `reset`; only ever raised.
    pub high_score: u32,
    pub difficulty: Difficulty,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        GameStats {
            score: 0,
            level: 1,
            lives_left: settings.player_lives,
            high_score: 0,
            difficulty: Difficulty::initial(settings),
        }
    }

    /// Start-of-session reset. The high score is kept.
    pub fn reset(&mut self, settings: &Settings) {
        self.score = 0;
        self.level = 1;
        self.lives_left = settings.player_lives;
        self.difficulty = Difficulty::initial(settings);
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn check_high_score(&mut self) {
        self.high_score = self.high_score.max(self.score);
    }

    pub fn level_up(&mut self, settings: &Settings) {
        self.difficulty.escalate(settings);
        self.level += 1;
    }

    /// Takes one life and returns how many are left.
    pub fn lose_life(&mut self) -> u32 {
        self.lives_left = self.lives_left.saturating_sub(1);
        self.lives_left
    }
}
