use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub grid: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed_step: f32,
    pub paddle_speed_max: f32,
    pub ball_radius: f32,
    pub ball_speed_step: f32,
    pub ball_speed_max: f32,
    pub serve_dy_ratio: f32,
    pub max_bounce_angle: f32,
    pub bounce_jitter: f32,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: Params::GRID,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed_step: Params::PADDLE_SPEED_STEP,
            paddle_speed_max: Params::PADDLE_SPEED_MAX,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_step: Params::BALL_SPEED_STEP,
            ball_speed_max: Params::BALL_SPEED_MAX,
            serve_dy_ratio: Params::SERVE_DY_RATIO,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            bounce_jitter: Params::BOUNCE_JITTER,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ball speed after a paddle hit, capped at `ball_speed_max`
    pub fn ramp_ball_speed(&self, speed: f32) -> f32 {
        (speed + self.ball_speed_step).min(self.ball_speed_max)
    }

    /// Shared paddle speed after a paddle hit, capped at `paddle_speed_max`
    pub fn ramp_paddle_speed(&self, speed: f32) -> f32 {
        (speed + self.paddle_speed_step).min(self.paddle_speed_max)
    }
}

/// Preset difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Hard,
    Insane,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DifficultyError {
    #[error("unknown difficulty `{0}` (expected easy, hard or insane)")]
    Unknown(String),
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Hard, Difficulty::Insane];

    /// Base ball speed in units per tick
    pub fn ball_speed(self) -> f32 {
        match self {
            Difficulty::Easy => 4.0,
            Difficulty::Hard => 7.0,
            Difficulty::Insane => 10.0,
        }
    }

    /// Base paddle speed in units per tick
    pub fn paddle_speed(self) -> f32 {
        match self {
            Difficulty::Easy => 4.0,
            Difficulty::Hard => 6.0,
            Difficulty::Insane => 9.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
            Difficulty::Insane => "insane",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DifficultyError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_match_params() {
        let config = Config::new();
        assert_eq!(config.paddle_height, 75.0);
        assert_eq!(config.paddle_width, 15.0);
        assert_eq!(config.win_score, 5);
        assert_eq!(config.ball_speed_max, 14.0);
    }

    #[test]
    fn test_ball_speed_ramp_caps_at_max() {
        let config = Config::new();
        assert_eq!(config.ramp_ball_speed(7.0), 7.5);
        assert_eq!(config.ramp_ball_speed(13.8), 14.0);
        assert_eq!(config.ramp_ball_speed(14.0), 14.0);
    }

    #[test]
    fn test_paddle_speed_ramp_caps_at_max() {
        let config = Config::new();
        assert!((config.ramp_paddle_speed(6.0) - 6.2).abs() < 1e-5);
        assert_eq!(config.ramp_paddle_speed(7.9), 8.0);
        // Insane starts above the cap; the first hit pulls it down to the cap
        assert_eq!(config.ramp_paddle_speed(9.0), 8.0);
    }

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(
            (Difficulty::Easy.ball_speed(), Difficulty::Easy.paddle_speed()),
            (4.0, 4.0)
        );
        assert_eq!(
            (Difficulty::Hard.ball_speed(), Difficulty::Hard.paddle_speed()),
            (7.0, 6.0)
        );
        assert_eq!(
            (Difficulty::Insane.ball_speed(), Difficulty::Insane.paddle_speed()),
            (10.0, 9.0)
        );
        assert_eq!(Difficulty::default(), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" INSANE ".parse::<Difficulty>(), Ok(Difficulty::Insane));
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(DifficultyError::Unknown("nightmare".to_string()))
        );
    }
}
