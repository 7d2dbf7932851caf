//! The match aggregate: everything one game of Pong owns
//!
//! Hosts drive a `Match` through `tick`, feed it input between ticks and
//! read back `Events` and the current `MatchState`.

use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, set_intent, step, Arena, Ball, Config, Difficulty, Events,
    GameRng, InputEvent, MatchAction, MatchFsm, MatchState, Paddle, Side, Tuning,
};

pub struct Match {
    pub world: World,
    pub arena: Arena,
    pub config: Config,
    pub tuning: Tuning,
    pub fsm: MatchFsm,
    pub events: Events,
    pub rng: GameRng,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Match {
    /// Set up paddles and a resting ball; the match stays Idle until a
    /// difficulty is selected
    pub fn new(arena: Arena, seed: u64) -> Self {
        Self::with_config(arena, Config::new(), seed)
    }

    pub fn with_config(arena: Arena, config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let spawn_y = arena.paddle_spawn_y(config.paddle_height);

        let left = create_paddle(
            &mut world,
            Side::Left,
            arena.paddle_x(Side::Left),
            spawn_y,
            config.paddle_width,
            config.paddle_height,
        );
        let right = create_paddle(
            &mut world,
            Side::Right,
            arena.paddle_x(Side::Right),
            spawn_y,
            config.paddle_width,
            config.paddle_height,
        );
        let ball = create_ball(&mut world, arena.center(), Vec2::ZERO, config.ball_radius);

        Self {
            world,
            arena,
            config,
            tuning: Tuning::default(),
            fsm: MatchFsm::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            left,
            right,
            ball,
        }
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn is_running(&self) -> bool {
        self.fsm.is_running()
    }

    /// Run one simulation step; a no-op unless Running
    pub fn tick(&mut self) -> &Events {
        step(
            &mut self.world,
            &self.arena,
            &self.config,
            &mut self.tuning,
            &mut self.fsm,
            &mut self.events,
            &mut self.rng,
        );
        &self.events
    }

    /// Run up to `ticks` steps, stopping as soon as the match leaves Running
    pub fn advance(&mut self, ticks: u32) -> Events {
        let mut frame = Events::new();
        for _ in 0..ticks {
            if !self.is_running() {
                break;
            }
            let events = self.tick().clone();
            frame.merge(&events);
        }
        frame
    }

    /// Pick a tier, serve from the centre and start if not already running
    ///
    /// From GameOver this begins a fresh match.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        log::info!("difficulty set to {}", difficulty);
        self.tuning = Tuning::new(difficulty);

        if self.fsm.is_game_over() {
            self.new_match();
            return;
        }

        self.serve();
        if !self.fsm.is_running() {
            self.fsm.transition(MatchAction::Start);
        }
    }

    /// Resume after a lost point; false if the match was not paused
    pub fn continue_match(&mut self) -> bool {
        if !self.fsm.can_transition(MatchAction::Continue) {
            return false;
        }
        self.serve();
        self.fsm.transition(MatchAction::Continue).success
    }

    /// Zero the scores, recentre everything and serve at the current difficulty
    pub fn new_match(&mut self) {
        log::info!("new match at {}", self.tuning.difficulty);
        self.tuning = Tuning::new(self.tuning.difficulty);

        let spawn_y = self.arena.paddle_spawn_y(self.config.paddle_height);
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = spawn_y;
            paddle.dy = 0.0;
            paddle.score = 0;
        }

        self.serve();
        self.fsm.transition(MatchAction::Restart);
    }

    /// Adopt new playfield dimensions
    ///
    /// Paddles recentre, the right paddle follows the right edge and the
    /// ball returns to the centre keeping its velocity. A field too small
    /// to hold both paddles between the margins is ignored and false is
    /// returned.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let arena = Arena::new(width, height, self.arena.grid);
        if !arena.fits_paddles(self.config.paddle_height) {
            log::warn!("ignoring resize to {}x{}", width, height);
            return false;
        }
        self.arena = arena;

        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.x = arena.paddle_x(paddle.side);
            paddle.y = arena.paddle_spawn_y(paddle.height);
        }
        if let Ok(ball) = self.world.query_one_mut::<&mut Ball>(self.ball) {
            ball.recenter(arena.center());
        }
        true
    }

    /// Apply one input event (between ticks)
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Pressed(intent) => set_intent(&mut self.world, intent.side(), intent.dir()),
            InputEvent::Released(intent) => set_intent(&mut self.world, intent.side(), 0),
            InputEvent::Confirm => {
                self.continue_match();
            }
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    pub fn paddles(&self) -> impl Iterator<Item = Paddle> + '_ {
        [Side::Left, Side::Right]
            .into_iter()
            .filter_map(move |side| self.paddle(side))
    }

    /// (left, right)
    pub fn scores(&self) -> (u32, u32) {
        let score = |side| self.paddle(side).map_or(0, |p: Paddle| p.score);
        (score(Side::Left), score(Side::Right))
    }

    /// Replace the ball's position and velocity (hosts replaying a state, tests)
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(ball) = self.world.query_one_mut::<&mut Ball>(self.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Text for the host's popup, if the match is waiting on the players
    pub fn status_message(&self) -> Option<String> {
        match self.state() {
            MatchState::Paused { missed } => Some(format!(
                "{} Missed! Press Enter to continue",
                missed.player_label()
            )),
            MatchState::GameOver { winner } => Some(format!("🏆 {} Wins!", winner.player_label())),
            MatchState::Idle | MatchState::Running => None,
        }
    }

    fn serve(&mut self) {
        let center = self.arena.center();
        let speed = self.tuning.ball_speed();
        let ratio = self.config.serve_dy_ratio;
        if let Ok(ball) = self.world.query_one_mut::<&mut Ball>(self.ball) {
            ball.serve(center, speed, ratio, &mut self.rng);
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(Arena::default(), 12345)
    }
}
