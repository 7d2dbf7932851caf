use crate::{Arena, Ball, Config, Events, MatchAction, MatchFsm, Paddle, Side};
use hecs::World;

/// Side that wins the point if the ball has left the field
pub fn out_of_bounds(ball: &Ball, arena: &Arena) -> Option<Side> {
    if ball.pos.x - ball.radius < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x + ball.radius > arena.width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Check if ball left the arena (scoring)
///
/// A ball that already scored stays `resetting` until it is served again,
/// so repeated ticks outside the field never count twice.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    fsm: &mut MatchFsm,
    events: &mut Events,
) {
    let mut scorer = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.resetting {
            continue;
        }
        if let Some(side) = out_of_bounds(ball, arena) {
            ball.resetting = true;
            scorer = Some(side);
        }
    }

    let Some(scorer) = scorer else {
        return;
    };

    let mut score = 0;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score += 1;
            score = paddle.score;
        }
    }
    events.scored = Some(scorer);

    if score >= config.win_score {
        fsm.transition(MatchAction::Win(scorer));
        events.game_over = Some(scorer);
        log::info!("{} wins with {} points", scorer.player_label(), score);
    } else {
        fsm.transition(MatchAction::Miss(scorer.opponent()));
        log::info!("{} missed, {} on {}", scorer.opponent().player_label(), scorer.player_label(), score);
    }
}
