/// Game entities: projectiles, enemy units and the player craft.
///
/// Each entity embeds a `Positioned` and exposes only the handful of
/// operations the round controller needs.

use crate::geometry::{Axis, Positioned, Rect};
use crate::settings::{Orientation, Rgb, Settings};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Title screen: play button visible, nothing moves.
    Inactive,
    Active,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Owner {
    Player,
    Enemy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pos: Positioned,
    axis: Axis,
    /// Signed per-tick delta along `axis`.
    pub speed: f32,
    pub color: Rgb,
    pub owner: Owner,
}

impl Projectile {
    /// A bullet leaving the craft's fleet-facing edge.
    pub fn from_player(craft: &Player, settings: &Settings, speed: f32) -> Self {
        let o = settings.orientation;
        Self::launch(
            craft.rect(),
            o.sized(settings.bullet_thickness, settings.bullet_length),
            o.depth_axis(),
            o.toward_fleet() * speed,
            settings.bullet_color,
            Owner::Player,
        )
    }

    /// A missile leaving the enemy's player-facing edge.
    pub fn from_enemy(enemy: &Enemy, settings: &Settings, speed: f32) -> Self {
        let o = settings.orientation;
        Self::launch(
            enemy.rect(),
            o.sized(settings.missile_thickness, settings.missile_length),
            o.depth_axis(),
            -o.toward_fleet() * speed,
            settings.missile_color,
            Owner::Enemy,
        )
    }

    fn launch(origin: Rect, mut rect: Rect, axis: Axis, speed: f32, color: Rgb, owner: Owner) -> Self {
        rect.set_center(axis.other(), origin.center(axis.other()));
        if speed < 0.0 {
            rect.set_start(axis, origin.start(axis) - rect.len(axis));
        } else {
            rect.set_start(axis, origin.end(axis));
        }
        Projectile {
            pos: Positioned::from_rect(rect),
            axis,
            speed,
            color,
            owner,
        }
    }

    pub fn tick(&mut self) {
        self.pos.advance(self.axis, self.speed);
    }

    pub fn rect(&self) -> Rect {
        self.pos.rect()
    }

    /// True once the projectile has fully left the playfield on the side it
    /// is travelling toward.
    pub fn is_expired(&self, playfield: Rect) -> bool {
        let rect = self.rect();
        if self.speed < 0.0 {
            rect.end(self.axis) <= playfield.start(self.axis)
        } else {
            rect.start(self.axis) >= playfield.end(self.axis)
        }
    }
}

// ── Enemy unit ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pos: Positioned,
}

impl Enemy {
    pub fn at(rect: Rect) -> Self {
        Enemy {
            pos: Positioned::from_rect(rect),
        }
    }

    pub fn rect(&self) -> Rect {
        self.pos.rect()
    }

    pub fn pos(&self, axis: Axis) -> f32 {
        self.pos.pos(axis)
    }

    /// Advance along the fleet's sweep axis.
    pub fn tick(&mut self, axis: Axis, speed: f32, direction: f32) {
        self.pos.advance(axis, speed * direction);
    }

    pub fn shift(&mut self, axis: Axis, delta: f32) {
        self.pos.advance(axis, delta);
    }

    /// Edge contact is inclusive on both playfield edges.
    pub fn touches_edge(&self, playfield: Rect, axis: Axis) -> bool {
        let rect = self.rect();
        rect.end(axis) >= playfield.end(axis) || rect.start(axis) <= playfield.start(axis)
    }
}

// ── Player craft ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pos: Positioned,
    pub moving_toward_near_edge: bool,
    pub moving_toward_far_edge: bool,
}

impl Player {
    pub fn new(settings: &Settings) -> Self {
        let home = settings.orientation.home(
            settings.playfield(),
            settings.player_width,
            settings.player_height,
        );
        Player {
            pos: Positioned::from_rect(home),
            moving_toward_near_edge: false,
            moving_toward_far_edge: false,
        }
    }

    pub fn rect(&self) -> Rect {
        self.pos.rect()
    }

    pub fn pos(&self, axis: Axis) -> f32 {
        self.pos.pos(axis)
    }

    /// `None` leaves the corresponding flag untouched.
    pub fn set_intent(&mut self, toward_near: Option<bool>, toward_far: Option<bool>) {
        if let Some(near) = toward_near {
            self.moving_toward_near_edge = near;
        }
        if let Some(far) = toward_far {
            self.moving_toward_far_edge = far;
        }
    }

    /// Both flags may be set at once; their moves cancel out.
    pub fn tick(&mut self, playfield: Rect, axis: Axis, speed: f32) {
        let rect = self.rect();
        let mut delta = 0.0;
        if self.moving_toward_near_edge && rect.start(axis) > playfield.start(axis) {
            delta -= speed;
        }
        if self.moving_toward_far_edge && rect.end(axis) < playfield.end(axis) {
            delta += speed;
        }
        if delta != 0.0 {
            self.pos.advance(axis, delta);
        }
    }

    pub fn recenter(&mut self, playfield: Rect, orientation: Orientation) {
        let rect = self.rect();
        self.pos
            .place(orientation.home(playfield, rect.width, rect.height));
    }
}
