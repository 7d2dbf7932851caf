use crate::{apply_bounce, Arena, Ball, Config, Events, GameRng, Paddle, Side, Tuning};
use hecs::World;

/// Circle-vs-rectangle test using the closest point of the paddle
pub fn collides(ball: &Ball, paddle: &Paddle) -> bool {
    paddle.rect().intersects_circle(ball.pos, ball.radius)
}

/// Is the ball travelling towards this paddle's face
pub fn moving_toward(ball: &Ball, side: Side) -> bool {
    match side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    }
}

/// Reflect the ball off the top and bottom bars
///
/// Only a ball still heading into a bar is reflected, so a ball that needs
/// several ticks to leave the margin is flipped once.
pub fn check_wall_bounce(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit_top = ball.pos.y - ball.radius < arena.play_top() && ball.vel.y < 0.0;
        let hit_bottom = ball.pos.y + ball.radius > arena.play_bottom() && ball.vel.y > 0.0;

        if hit_top || hit_bottom {
            ball.vel.y = -ball.vel.y;
            events.wall_bounce = true;
        }
    }
}

/// Check ball collisions with paddles, left paddle first
pub fn check_paddle_collisions(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    tuning: &mut Tuning,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side != Side::Left);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if collides(ball, paddle) && moving_toward(ball, paddle.side) {
                apply_bounce(ball, paddle, arena, config, tuning, rng);
                events.paddle_bounce = Some(paddle.side);
            }
        }
    }
}
