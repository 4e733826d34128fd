//! Static game configuration.
//!
//! Loaded once at startup and stored in `GameState`; every component reads it
//! by reference. The values that change between levels live in
//! `stats::Difficulty`, seeded from here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fleet::grid_dimensions;
use crate::geometry::{Axis, Rect};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// 8-bit RGB colour, serialised as `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

// ── Orientation ───────────────────────────────────────────────────────────────

/// Which screen edge the player defends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Player at the bottom moving left/right; shots travel up.
    #[default]
    Vertical,
    /// Player at the left moving up/down; shots travel right.
    Horizontal,
}

impl Orientation {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vertical" | "v" => Some(Orientation::Vertical),
            "horizontal" | "h" => Some(Orientation::Horizontal),
            _ => None,
        }
    }

    /// Axis the player and the fleet sweep along.
    pub fn advance_axis(self) -> Axis {
        match self {
            Orientation::Vertical => Axis::X,
            Orientation::Horizontal => Axis::Y,
        }
    }

    /// Axis projectiles travel along and the fleet shifts along.
    pub fn depth_axis(self) -> Axis {
        self.advance_axis().other()
    }

    /// Sign of motion along the depth axis from the player toward the fleet.
    pub fn toward_fleet(self) -> f32 {
        match self {
            Orientation::Vertical => -1.0,
            Orientation::Horizontal => 1.0,
        }
    }

    /// Rect with the given extents along the advance and depth axes.
    pub fn sized(self, along: i32, depth: i32) -> Rect {
        match self {
            Orientation::Vertical => Rect::new(0, 0, along, depth),
            Orientation::Horizontal => Rect::new(0, 0, depth, along),
        }
    }

    /// The player's home: centred on the advance axis, flush with the
    /// defended edge.
    pub fn home(self, playfield: Rect, width: i32, height: i32) -> Rect {
        let mut rect = Rect::new(0, 0, width, height);
        rect.set_center(self.advance_axis(), playfield.center(self.advance_axis()));
        match self {
            Orientation::Vertical => rect.y = playfield.bottom() - height,
            Orientation::Horizontal => rect.x = playfield.left(),
        }
        rect
    }

    /// True once `rect` has reached the edge the player defends.
    pub fn breached(self, rect: &Rect, playfield: Rect) -> bool {
        match self {
            Orientation::Vertical => rect.bottom() >= playfield.bottom(),
            Orientation::Horizontal => rect.left() <= playfield.left(),
        }
    }
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Playfield
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Rgb,
    pub orientation: Orientation,

    // Player bullets
    pub bullet_length: i32,
    pub bullet_thickness: i32,
    pub bullet_color: Rgb,
    pub bullet_speed: f32,
    pub bullets_allowed: u32,
    /// Extra bullets allowed per level cleared.
    pub bullet_allowance_step: u32,

    // Player craft
    pub player_width: i32,
    pub player_height: i32,
    pub player_speed: f32,
    pub player_lives: u32,

    // Fleet
    pub enemy_width: i32,
    pub enemy_height: i32,
    pub enemy_speed: f32,
    pub enemy_points: u32,
    /// Flat bonus for every tick in which at least one enemy was shot.
    pub collision_bonus: u32,
    pub fleet_shift: i32,

    // Enemy missiles
    pub missile_length: i32,
    pub missile_thickness: i32,
    pub missile_color: Rgb,
    pub missile_speed: f32,
    pub missiles_allowed: u32,
    /// Per-enemy, per-tick chance of launching a missile.
    pub enemy_fire_chance: f64,

    // Escalation
    pub speed_scale: f32,
    pub score_scale: f32,

    // Flow
    pub play_button_width: i32,
    pub play_button_height: i32,
    pub hit_pause_ms: u64,
    pub frame_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            screen_height: 800,
            bg_color: Rgb(173, 216, 230),
            orientation: Orientation::Vertical,

            bullet_length: 15,
            bullet_thickness: 3,
            bullet_color: Rgb(60, 60, 60),
            bullet_speed: 3.0,
            bullets_allowed: 5,
            bullet_allowance_step: 0,

            player_width: 60,
            player_height: 48,
            player_speed: 1.5,
            player_lives: 3,

            enemy_width: 50,
            enemy_height: 30,
            enemy_speed: 1.0,
            enemy_points: 50,
            collision_bonus: 0,
            fleet_shift: 10,

            missile_length: 8,
            missile_thickness: 2,
            missile_color: Rgb(255, 0, 0),
            missile_speed: 1.5,
            missiles_allowed: 3,
            enemy_fire_chance: 0.0,

            speed_scale: 1.1,
            score_scale: 1.5,

            play_button_width: 200,
            play_button_height: 50,
            hit_pause_ms: 500,
            frame_ms: 16,
        }
    }
}

impl Settings {
    /// Read a JSON config file. Missing fields take their default value.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("bullet_length", self.bullet_length),
            ("bullet_thickness", self.bullet_thickness),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("missile_length", self.missile_length),
            ("missile_thickness", self.missile_thickness),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.fleet_shift < 0 {
            return Err(ConfigError::Invalid("fleet_shift must not be negative".into()));
        }
        for (name, value) in [
            ("bullet_speed", self.bullet_speed),
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("missile_speed", self.missile_speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.speed_scale < 1.0 || self.score_scale < 1.0 {
            return Err(ConfigError::Invalid(
                "speed_scale and score_scale must be at least 1.0".into(),
            ));
        }
        if self.bullets_allowed == 0 {
            return Err(ConfigError::Invalid("bullets_allowed must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.enemy_fire_chance) {
            return Err(ConfigError::Invalid(format!(
                "enemy_fire_chance must be within [0, 1], got {}",
                self.enemy_fire_chance
            )));
        }

        let craft = self.orientation.home(self.playfield(), self.player_width, self.player_height);
        let (along, rows) = grid_dimensions(
            self.playfield(),
            self.enemy_rect(),
            craft,
            self.orientation,
        );
        if along == 0 || rows == 0 {
            return Err(ConfigError::Invalid(format!(
                "a {}x{} playfield cannot hold a fleet of {}x{} enemies",
                self.screen_width, self.screen_height, self.enemy_width, self.enemy_height
            )));
        }
        Ok(())
    }

    pub fn playfield(&self) -> Rect {
        Rect::new(0, 0, self.screen_width, self.screen_height)
    }

    pub fn enemy_rect(&self) -> Rect {
        Rect::new(0, 0, self.enemy_width, self.enemy_height)
    }

    /// Play button, centred in the playfield.
    pub fn play_button(&self) -> Rect {
        let mut rect = Rect::new(0, 0, self.play_button_width, self.play_button_height);
        rect.set_center(Axis::X, self.screen_width / 2);
        rect.set_center(Axis::Y, self.screen_height / 2);
        rect
    }

    pub fn hit_pause(&self) -> Duration {
        Duration::from_millis(self.hit_pause_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
