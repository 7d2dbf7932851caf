use crate::components::Side;
use crate::config::Difficulty;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Active difficulty and the paddle speed shared by both players
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub difficulty: Difficulty,
    pub paddle_speed: f32, // Units per tick, ramps up on paddle hits
}

impl Tuning {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            paddle_speed: difficulty.paddle_speed(),
        }
    }

    pub fn ball_speed(&self) -> f32 {
        self.difficulty.ball_speed()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// Events that occurred during this tick
///
/// Consumed by the host for sound and scoreboard updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_bounce: bool,
    pub paddle_bounce: Option<Side>, // Paddle that returned the ball
    pub scored: Option<Side>,        // Side that won the point
    pub game_over: Option<Side>,     // Winner
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_bounce = false;
        self.paddle_bounce = None;
        self.scored = None;
        self.game_over = None;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fold another tick's events into this one
    pub fn merge(&mut self, other: &Events) {
        self.wall_bounce |= other.wall_bounce;
        self.paddle_bounce = other.paddle_bounce.or(self.paddle_bounce);
        self.scored = other.scored.or(self.scored);
        self.game_over = other.game_over.or(self.game_over);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuning_starts_from_preset() {
        let tuning = Tuning::new(Difficulty::Insane);
        assert_eq!(tuning.paddle_speed, 9.0);
        assert_eq!(tuning.ball_speed(), 10.0);
        assert_eq!(Tuning::default().difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.wall_bounce = true;
        events.paddle_bounce = Some(Side::Left);
        events.scored = Some(Side::Right);
        events.game_over = Some(Side::Right);

        events.clear();

        assert!(events.is_empty());
    }

    #[test]
    fn test_events_merge_keeps_latest() {
        let mut frame = Events::new();
        frame.wall_bounce = true;
        frame.paddle_bounce = Some(Side::Left);

        let tick = Events {
            paddle_bounce: Some(Side::Right),
            scored: Some(Side::Right),
            ..Events::default()
        };
        frame.merge(&tick);

        assert!(frame.wall_bounce);
        assert_eq!(frame.paddle_bounce, Some(Side::Right));
        assert_eq!(frame.scored, Some(Side::Right));
        assert_eq!(frame.game_over, None);
    }

    #[test]
    fn test_rng_is_deterministic_per_seed() {
        use rand::Rng;
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..8 {
            assert_eq!(a.0.gen::<u32>(), b.0.gen::<u32>());
        }
    }
}
