use glam::Vec2;

use crate::components::Side;

/// Axis-aligned rectangle, y grows downwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Point of the rectangle nearest to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Check if circle intersects the rectangle (touching does not count)
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        (center - self.closest_point(center)).length_squared() < radius * radius
    }
}

/// Playfield dimensions
///
/// The top and bottom margins are solid bars one grid unit thick; the ball
/// reflects off them and paddles may not enter them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub grid: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32, grid: f32) -> Self {
        Self {
            width,
            height,
            grid,
        }
    }

    pub fn top_margin(&self) -> f32 {
        self.grid
    }

    pub fn bottom_margin(&self) -> f32 {
        self.grid
    }

    /// Y of the lower edge of the top bar
    pub fn play_top(&self) -> f32 {
        self.top_margin()
    }

    /// Y of the upper edge of the bottom bar
    pub fn play_bottom(&self) -> f32 {
        self.height - self.bottom_margin()
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// X of the paddle's left edge for a side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.grid * 2.0,
            Side::Right => self.width - self.grid * 3.0,
        }
    }

    /// Lowest allowed paddle top edge
    pub fn max_paddle_y(&self, paddle_height: f32) -> f32 {
        self.play_bottom() - paddle_height
    }

    /// Clamp a paddle's top edge into the playfield
    ///
    /// Never panics: when the arena is shorter than a paddle the top margin
    /// wins.
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.min(self.max_paddle_y(paddle_height)).max(self.top_margin())
    }

    /// Whether both paddles fit: apart horizontally and between the bars
    pub fn fits_paddles(&self, paddle_height: f32) -> bool {
        self.width >= self.grid * 6.0 && self.max_paddle_y(paddle_height) >= self.top_margin()
    }

    /// Paddle top edge that vertically centres it
    pub fn paddle_spawn_y(&self, paddle_height: f32) -> f32 {
        self.height / 2.0 - paddle_height / 2.0
    }

    /// Which half of the field a point lies in
    pub fn half_of(&self, x: f32) -> Side {
        if x < self.width / 2.0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(
            crate::Params::ARENA_WIDTH,
            crate::Params::ARENA_HEIGHT,
            crate::Params::GRID,
        )
    }
}
