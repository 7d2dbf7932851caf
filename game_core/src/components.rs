use glam::Vec2;

use crate::arena::Rect;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Player label shown to the host ("Player 1" defends the left)
    pub fn player_label(self) -> &'static str {
        match self {
            Side::Left => "Player 1",
            Side::Right => "Player 2",
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,  // Left edge, fixed per side
    pub y: f32,  // Top edge (clamped to arena)
    pub dy: f32, // Units per tick
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            dy: 0.0,
            width,
            height,
            score: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Set when the ball has left the field and scored; cleared on the next serve
    pub resetting: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            resetting: false,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Put the ball back at `center` with a fresh serve velocity
    ///
    /// Horizontal and vertical signs are chosen independently.
    pub fn serve(&mut self, center: Vec2, speed: f32, dy_ratio: f32, rng: &mut crate::GameRng) {
        use rand::Rng;
        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };

        self.pos = center;
        self.vel = Vec2::new(sx * speed, sy * speed * dy_ratio);
        self.resetting = false;
    }

    /// Re-centre without touching velocity
    pub fn recenter(&mut self, center: Vec2) {
        self.pos = center;
        self.resetting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_serve_sets_base_speed_with_random_signs() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-40.0, 3.0), Vec2::ZERO, 8.0);
        ball.resetting = true;

        let mut seen_dx = [false; 2];
        let mut seen_dy = [false; 2];
        for _ in 0..64 {
            ball.serve(Vec2::new(400.0, 225.0), 7.0, 0.7, &mut rng);
            assert_eq!(ball.pos, Vec2::new(400.0, 225.0));
            assert!(!ball.resetting);
            assert_eq!(ball.vel.x.abs(), 7.0);
            assert!((ball.vel.y.abs() - 4.9).abs() < 1e-5);
            seen_dx[(ball.vel.x > 0.0) as usize] = true;
            seen_dy[(ball.vel.y > 0.0) as usize] = true;
        }
        assert_eq!(seen_dx, [true, true], "Both horizontal directions served");
        assert_eq!(seen_dy, [true, true], "Both vertical directions served");
    }

    #[test]
    fn test_paddle_rect() {
        let paddle = Paddle::new(Side::Left, 30.0, 100.0, 15.0, 75.0);
        let rect = paddle.rect();
        assert_eq!(rect.min, Vec2::new(30.0, 100.0));
        assert_eq!(rect.max, Vec2::new(45.0, 175.0));
        assert_eq!(paddle.center_y(), 137.5);
    }

    #[test]
    fn test_side_labels() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Left.player_label(), "Player 1");
        assert_eq!(Side::Right.player_label(), "Player 2");
    }
}
