/// Screen-space geometry shared by every moving entity.
///
/// Entities keep an exact `f32` position and derive an integer `Rect` from
/// it; the rect is what gets drawn and what collision checks look at.

// ── Axis ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Lowest coordinate covered along `axis`.
    pub fn start(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// One past the highest coordinate covered along `axis`.
    pub fn end(&self, axis: Axis) -> i32 {
        self.start(axis) + self.len(axis)
    }

    pub fn len(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Integer centre along `axis`, rounded down.
    pub fn center(&self, axis: Axis) -> i32 {
        self.start(axis) + self.len(axis) / 2
    }

    pub fn set_start(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    /// Positions the rect so its centre along `axis` is `center`.
    pub fn set_center(&mut self, axis: Axis, center: i32) {
        let len = self.len(axis);
        self.set_start(axis, center - len / 2);
    }

    /// Strict overlap: rects that only share an edge do not collide, and
    /// empty rects never collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

// ── Positioned ────────────────────────────────────────────────────────────────

/// Float position plus the integer rect derived from it.
///
/// The float coordinates are always written first; the rect origin is the
/// truncation of the float value on every axis that moved.
#[derive(Clone, Debug, PartialEq)]
pub struct Positioned {
    x: f32,
    y: f32,
    rect: Rect,
}

impl Positioned {
    pub fn from_rect(rect: Rect) -> Self {
        Positioned {
            x: rect.x as f32,
            y: rect.y as f32,
            rect,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn pos(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn advance(&mut self, axis: Axis, delta: f32) {
        let value = match axis {
            Axis::X => {
                self.x += delta;
                self.x
            }
            Axis::Y => {
                self.y += delta;
                self.y
            }
        };
        self.rect.set_start(axis, value as i32);
    }

    /// Throws away the sub-pixel remainder and snaps to `rect`.
    pub fn place(&mut self, rect: Rect) {
        *self = Positioned::from_rect(rect);
    }
}
