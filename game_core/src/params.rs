/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const GRID: f32 = 15.0;
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 450.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = Self::GRID;
    pub const PADDLE_HEIGHT: f32 = Self::GRID * 5.0;
    pub const PADDLE_SPEED_STEP: f32 = 0.2; // added on every paddle hit
    pub const PADDLE_SPEED_MAX: f32 = 8.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_STEP: f32 = 0.5; // added on every paddle hit
    pub const BALL_SPEED_MAX: f32 = 14.0;
    pub const SERVE_DY_RATIO: f32 = 0.7;

    // Bounce
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
    pub const BOUNCE_JITTER: f32 = 0.1; // radians, uniform +/-

    // Score
    pub const WIN_SCORE: u32 = 5; // First to 5 wins

    // Frame pacing
    pub const TICK_MS: f64 = 1000.0 / 60.0; // ~60 Hz
    pub const MAX_TICKS_PER_FRAME: u32 = 4; // Clamp to prevent large jumps
}
