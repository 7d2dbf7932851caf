use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Turn paddle intents into velocities using the shared paddle speed
pub fn ingest_intents(world: &mut World, tuning: &Tuning) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.dy = intent.dir as f32 * tuning.paddle_speed;
    }
}

/// Set the intent of one side's paddle (last writer wins)
pub fn set_intent(world: &mut World, side: Side, dir: i8) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == side {
            intent.dir = dir.signum();
        }
    }
}
