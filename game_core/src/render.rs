//! Drawing against an abstract 2D surface
//!
//! The host supplies the surface (a browser canvas in the client); this
//! module decides what a frame looks like.

use glam::Vec2;

use crate::game::Match;

/// Opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    pub const BALL_CORE: Rgb = Rgb(0xff, 0x6e, 0xc7);
    pub const BALL_RIM: Rgb = Rgb(0x00, 0xf2, 0xff);

    /// CSS hex notation, e.g. `#ff6ec7`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Drawing primitives a host must provide
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb);
    /// Filled circle with a two-stop radial gradient from `inner_radius` to `outer_radius`
    fn fill_circle_gradient(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: Rgb,
        outer: Rgb,
    );
}

const BALL_CORE_RADIUS: f32 = 2.0;

/// Draw one frame of the match
pub fn draw_frame(surface: &mut dyn Surface, game: &Match) {
    let arena = game.arena;
    let grid = arena.grid;

    // The surface may be larger than the field while a resize is pending
    surface.clear_rect(0.0, 0.0, surface.width(), surface.height());

    // Top and bottom bars
    surface.fill_rect(0.0, 0.0, arena.width, arena.top_margin(), Rgb::WHITE);
    surface.fill_rect(
        0.0,
        arena.play_bottom(),
        arena.width,
        arena.bottom_margin(),
        Rgb::WHITE,
    );

    // Dashed centre line
    let mut y = arena.play_top();
    while y < arena.play_bottom() {
        surface.fill_rect(arena.width / 2.0 - grid / 2.0, y, grid, grid, Rgb::WHITE);
        y += grid * 2.0;
    }

    for paddle in game.paddles() {
        surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, Rgb::WHITE);
    }

    if let Some(ball) = game.ball() {
        surface.fill_circle_gradient(
            ball.pos,
            BALL_CORE_RADIUS,
            ball.radius,
            Rgb::BALL_CORE,
            Rgb::BALL_RIM,
        );
    }
}
