pub mod arena;
pub mod components;
pub mod config;
pub mod controls;
pub mod frame;
pub mod fsm;
pub mod game;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use controls::*;
pub use frame::*;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use systems::*;

use hecs::World;

/// Run one deterministic tick of the Pong simulation
///
/// Nothing moves unless the match is Running.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    tuning: &mut Tuning,
    fsm: &mut MatchFsm,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    if !fsm.is_running() {
        return;
    }

    // 1. Ingest inputs (apply paddle intents at the current speed)
    ingest_intents(world, tuning);

    // 2. Move paddles, clamped to the play area
    move_paddles(world, arena);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (walls, then paddles)
    check_wall_bounce(world, arena, events);
    check_paddle_collisions(world, arena, config, tuning, events, rng);

    // 5. Check scoring (ball exited arena)
    check_scoring(world, arena, config, fsm, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(
    world: &mut World,
    side: Side,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> hecs::Entity {
    world.spawn((Paddle::new(side, x, y, width, height), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
