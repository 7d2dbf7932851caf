use glam::Vec2;
use rand::Rng;

use crate::{Arena, Ball, Config, GameRng, Paddle, Side, Tuning};

/// Where on the paddle the ball struck, -1 (bottom edge) to 1 (top edge)
pub fn normalized_intersect(ball: &Ball, paddle: &Paddle) -> f32 {
    let half_height = paddle.height / 2.0;
    ((paddle.center_y() - ball.pos.y) / half_height).clamp(-1.0, 1.0)
}

/// Velocity after a paddle hit
///
/// The rebound angle follows the contact point (edge hits leave steeply),
/// the speed grows by one step up to the cap, and the ball always heads for
/// the half of the field it is not in.
pub fn bounce_velocity(ball: &Ball, paddle: &Paddle, arena: &Arena, config: &Config, jitter: f32) -> Vec2 {
    let angle = normalized_intersect(ball, paddle) * config.max_bounce_angle + jitter;
    let speed = config.ramp_ball_speed(ball.speed());
    let direction = match arena.half_of(ball.pos.x) {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };

    Vec2::new(speed * angle.cos() * direction, -speed * angle.sin())
}

/// Push the ball out of the paddle face and send it back
pub fn apply_bounce(
    ball: &mut Ball,
    paddle: &Paddle,
    arena: &Arena,
    config: &Config,
    tuning: &mut Tuning,
    rng: &mut GameRng,
) {
    ball.pos.x = match paddle.side {
        Side::Left => paddle.x + paddle.width + ball.radius,
        Side::Right => paddle.x - ball.radius,
    };

    let jitter = rng.0.gen_range(-config.bounce_jitter..=config.bounce_jitter);
    ball.vel = bounce_velocity(ball, paddle, arena, config, jitter);
    tuning.paddle_speed = config.ramp_paddle_speed(tuning.paddle_speed);

    log::debug!(
        "{:?} paddle hit, ball speed {:.2}, paddle speed {:.2}",
        paddle.side,
        ball.speed(),
        tuning.paddle_speed
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(800.0, 450.0, 15.0)
    }

    fn left_paddle() -> Paddle {
        Paddle::new(Side::Left, 30.0, 200.0, 15.0, 75.0)
    }

    #[test]
    fn test_center_hit_is_horizontal() {
        let config = Config::new();
        let ball = Ball::new(Vec2::new(53.0, 237.5), Vec2::new(-5.0, 3.0), 8.0);
        let vel = bounce_velocity(&ball, &left_paddle(), &arena(), &config, 0.0);

        assert!(vel.y.abs() < 1e-5, "No vertical component at the centre");
        assert!(vel.x > 0.0);
    }

    #[test]
    fn test_center_hit_angle_within_jitter() {
        let config = Config::new();
        let mut tuning = Tuning::default();
        let mut rng = GameRng::new(99);
        for _ in 0..50 {
            let mut ball = Ball::new(Vec2::new(50.0, 237.5), Vec2::new(-5.0, 3.0), 8.0);
            apply_bounce(&mut ball, &left_paddle(), &arena(), &config, &mut tuning, &mut rng);
            let angle = (-ball.vel.y).atan2(ball.vel.x);
            assert!(angle.abs() <= config.bounce_jitter + 1e-5, "angle {}", angle);
        }
    }

    #[test]
    fn test_top_edge_hit_leaves_upwards_at_max_angle() {
        let config = Config::new();
        // Above the paddle's top edge: normalised intersect clamps to 1
        let ball = Ball::new(Vec2::new(53.0, 195.0), Vec2::new(-6.0, 0.0), 8.0);
        let vel = bounce_velocity(&ball, &left_paddle(), &arena(), &config, 0.0);

        let speed = 6.5;
        let expected = Vec2::new(
            speed * config.max_bounce_angle.cos(),
            -speed * config.max_bounce_angle.sin(),
        );
        assert!((vel - expected).length() < 1e-4, "got {:?}", vel);
        assert!(vel.y < 0.0, "y grows downwards, so upwards is negative");
    }

    #[test]
    fn test_bottom_edge_hit_leaves_downwards() {
        let config = Config::new();
        let ball = Ball::new(Vec2::new(53.0, 270.0), Vec2::new(-6.0, 0.0), 8.0);
        let vel = bounce_velocity(&ball, &left_paddle(), &arena(), &config, 0.0);
        assert!(vel.y > 0.0);
    }

    #[test]
    fn test_speed_ramps_by_step() {
        let config = Config::new();
        let mut tuning = Tuning::default();
        let mut rng = GameRng::new(1);
        let mut ball = Ball::new(Vec2::new(50.0, 220.0), Vec2::new(-3.0, 4.0), 8.0);

        apply_bounce(&mut ball, &left_paddle(), &arena(), &config, &mut tuning, &mut rng);

        assert!((ball.speed() - 5.5).abs() < 1e-4);
    }

    #[test]
    fn test_speed_never_exceeds_cap() {
        let config = Config::new();
        let mut tuning = Tuning::default();
        let mut rng = GameRng::new(3);
        let paddle = left_paddle();
        let mut ball = Ball::new(Vec2::new(50.0, 230.0), Vec2::new(-13.8, 0.0), 8.0);

        for _ in 0..15 {
            let before = ball.speed();
            ball.vel.x = -ball.vel.x.abs();
            apply_bounce(&mut ball, &paddle, &arena(), &config, &mut tuning, &mut rng);
            let expected = (before + config.ball_speed_step).min(config.ball_speed_max);
            assert!((ball.speed() - expected).abs() < 1e-4);
            assert!(ball.speed() <= config.ball_speed_max + 1e-4);
        }
        assert_eq!(tuning.paddle_speed, config.paddle_speed_max);
    }

    #[test]
    fn test_right_paddle_sends_ball_left() {
        let config = Config::new();
        let mut tuning = Tuning::default();
        let mut rng = GameRng::new(5);
        let paddle = Paddle::new(Side::Right, 755.0, 200.0, 15.0, 75.0);
        let mut ball = Ball::new(Vec2::new(752.0, 240.0), Vec2::new(7.0, 2.0), 8.0);

        apply_bounce(&mut ball, &paddle, &arena(), &config, &mut tuning, &mut rng);

        assert_eq!(ball.pos.x, 747.0);
        assert!(ball.vel.x < 0.0);
    }
}
