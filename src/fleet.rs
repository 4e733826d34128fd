/// The enemy fleet: grid construction and edge-triggered redirection.

use crate::entities::Enemy;
use crate::geometry::Rect;
use crate::settings::{Orientation, Settings};

/// Number of units along the sweep axis and number of rows along the depth
/// axis that fit in `playfield`.
///
/// A one-unit margin is kept at both ends of the sweep axis with a one-unit
/// gutter between units. Along the depth axis the craft's extent plus three
/// units of margin are reserved before rows are laid out every two units.
pub fn grid_dimensions(
    playfield: Rect,
    unit: Rect,
    craft: Rect,
    orientation: Orientation,
) -> (usize, usize) {
    let along = orientation.advance_axis();
    let depth = orientation.depth_axis();

    let unit_along = unit.len(along);
    let unit_depth = unit.len(depth);
    if unit_along <= 0 || unit_depth <= 0 {
        return (0, 0);
    }

    let available_along = playfield.len(along) - 2 * unit_along;
    let per_row = (available_along / (2 * unit_along)).max(0);

    let available_depth = playfield.len(depth) - 3 * unit_depth - craft.len(depth);
    let rows = (available_depth / (2 * unit_depth)).max(0);

    (per_row as usize, rows as usize)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fleet {
    pub enemies: Vec<Enemy>,
    /// +1.0 sweeps toward the far edge of the advance axis, -1.0 back.
    pub direction: f32,
}

impl Fleet {
    pub fn build(settings: &Settings, craft: Rect) -> Self {
        Fleet {
            enemies: layout(settings, craft),
            direction: 1.0,
        }
    }

    /// Replace every unit with a fresh grid. The sweep direction carries over.
    pub fn rebuild(&mut self, settings: &Settings, craft: Rect) {
        self.enemies = layout(settings, craft);
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_cleared(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Shift the whole fleet toward the player and reverse its sweep if any
    /// unit is touching an edge. Returns whether a redirect happened.
    ///
    /// Only the first unit found in contact matters, so the direction flips
    /// at most once per call.
    pub fn check_edges_and_redirect(&mut self, settings: &Settings) -> bool {
        let o = settings.orientation;
        let playfield = settings.playfield();
        let touching = self
            .enemies
            .iter()
            .any(|e| e.touches_edge(playfield, o.advance_axis()));
        if !touching {
            return false;
        }

        let delta = -o.toward_fleet() * settings.fleet_shift as f32;
        for enemy in &mut self.enemies {
            enemy.shift(o.depth_axis(), delta);
        }
        self.direction = -self.direction;
        log::debug!("Fleet redirected, direction now {}", self.direction);
        true
    }

    pub fn tick(&mut self, settings: &Settings, speed: f32) {
        let axis = settings.orientation.advance_axis();
        for enemy in &mut self.enemies {
            enemy.tick(axis, speed, self.direction);
        }
    }
}

fn layout(settings: &Settings, craft: Rect) -> Vec<Enemy> {
    let o = settings.orientation;
    let playfield = settings.playfield();
    let unit = settings.enemy_rect();
    let (per_row, rows) = grid_dimensions(playfield, unit, craft, o);

    let along = o.advance_axis();
    let depth = o.depth_axis();
    let unit_along = unit.len(along);
    let unit_depth = unit.len(depth);

    let mut enemies = Vec::with_capacity(per_row * rows);
    for row in 0..rows as i32 {
        // Rows start one unit in from the edge farthest from the player.
        let offset = unit_depth + 2 * unit_depth * row;
        let depth_start = if o.toward_fleet() < 0.0 {
            playfield.start(depth) + offset
        } else {
            playfield.end(depth) - offset - unit_depth
        };
        for i in 0..per_row as i32 {
            let mut rect = unit;
            rect.set_start(along, playfield.start(along) + unit_along + 2 * unit_along * i);
            rect.set_start(depth, depth_start);
            enemies.push(Enemy::at(rect));
        }
    }
    enemies
}
