use crate::{Arena, Ball, Paddle};
use hecs::World;

/// Apply paddle velocities, keeping paddles out of the margins
pub fn move_paddles(world: &mut World, arena: &Arena) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = arena.clamp_paddle_y(paddle.y + paddle.dy, paddle.height);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut world = World::new();
        let arena = Arena::default();
        let center = arena.center();
        create_ball(&mut world, center, Vec2::new(5.0, 3.0), 8.0);

        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, center + Vec2::new(5.0, 3.0));
        }
    }

    #[test]
    fn test_paddle_clamped_to_margins() {
        let mut world = World::new();
        let arena = Arena::new(800.0, 450.0, 15.0);
        let top = create_paddle(&mut world, Side::Left, 30.0, 18.0, 15.0, 75.0);
        let bottom = create_paddle(&mut world, Side::Right, 755.0, 355.0, 15.0, 75.0);
        world.get::<&mut Paddle>(top).unwrap().dy = -9.0;
        world.get::<&mut Paddle>(bottom).unwrap().dy = 9.0;

        move_paddles(&mut world, &arena);

        assert_eq!(world.get::<&Paddle>(top).unwrap().y, 15.0);
        assert_eq!(world.get::<&Paddle>(bottom).unwrap().y, 360.0);
    }

    #[test]
    fn test_paddle_moves_freely_inside_field() {
        let mut world = World::new();
        let arena = Arena::new(800.0, 450.0, 15.0);
        let paddle = create_paddle(&mut world, Side::Left, 30.0, 200.0, 15.0, 75.0);
        world.get::<&mut Paddle>(paddle).unwrap().dy = 4.0;

        move_paddles(&mut world, &arena);

        assert_eq!(world.get::<&Paddle>(paddle).unwrap().y, 204.0);
    }
}
