//! Browser host: owns the match, the animation frame loop and DOM listeners

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{
    draw_frame, Arena, Difficulty, Events, FrameClock, InputEvent, LoopControl, Match, Params,
};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

use crate::canvas::CanvasSurface;
use crate::input::{canvas_size, handle_key_down, handle_key_up};

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

/// JS functions the page registers for game feedback
#[derive(Default, Clone)]
struct Callbacks {
    scoreboard: Option<Function>,
    pause: Option<Function>,
    match_end: Option<Function>,
}

impl Callbacks {
    fn notify(&self, events: &Events, scores: (u32, u32), status: Option<String>) {
        if events.scored.is_some() {
            self.scoreboard(scores);
        }
        if let Some(winner) = events.game_over {
            call(&self.match_end, &JsValue::from_str(winner.player_label()));
        } else if let (Some(_), Some(message)) = (events.scored, status) {
            call(&self.pause, &JsValue::from_str(&message));
        }
    }

    fn scoreboard(&self, (left, right): (u32, u32)) {
        if let Some(f) = &self.scoreboard {
            if let Err(e) = f.call2(&JsValue::NULL, &left.into(), &right.into()) {
                log::warn!("scoreboard callback failed: {:?}", e);
            }
        }
    }
}

fn call(f: &Option<Function>, arg: &JsValue) {
    if let Some(f) = f {
        if let Err(e) = f.call1(&JsValue::NULL, arg) {
            log::warn!("callback failed: {:?}", e);
        }
    }
}

struct App {
    game: Match,
    surface: CanvasSurface,
    clock: FrameClock,
    control: LoopControl,
    /// Pending animation frame; dropping it cancels the callback
    frame: Option<AnimationFrame>,
    callbacks: Callbacks,
}

impl App {
    fn draw(&mut self) {
        draw_frame(&mut self.surface, &self.game);
    }

    /// Cancel the pending frame and invalidate any callback already queued
    fn stop_loop(&mut self) {
        self.control.stop();
        self.frame.take();
    }
}

/// Arm the loop if the match is running and it is not already armed
fn start_loop(app: &Rc<RefCell<App>>) {
    let token = {
        let mut a = app.borrow_mut();
        if !a.game.is_running() {
            return;
        }
        let Some(token) = a.control.start() else {
            return;
        };
        a.clock.reset();
        token
    };
    request_frame(app, token);
}

fn request_frame(app: &Rc<RefCell<App>>, token: u64) {
    let handle = Rc::clone(app);
    let pending = request_animation_frame(move |time| frame(handle, token, time));
    app.borrow_mut().frame = Some(pending);
}

fn frame(app: Rc<RefCell<App>>, token: u64, time: f64) {
    let (events, scores, status, callbacks, running) = {
        let mut a = app.borrow_mut();
        if !a.control.is_current(token) {
            return;
        }
        a.frame.take();

        let ticks = a.clock.advance(time);
        let events = a.game.advance(ticks);
        a.draw();

        let running = a.game.is_running();
        if !running {
            a.stop_loop();
        }
        (
            events,
            a.game.scores(),
            a.game.status_message(),
            a.callbacks.clone(),
            running,
        )
    };

    // Callbacks may call back into the client, so no borrow is held here
    callbacks.notify(&events, scores, status);

    if running && app.borrow().control.is_current(token) {
        request_frame(&app, token);
    }
}

/// Pong in a canvas element
#[wasm_bindgen]
pub struct PongClient {
    app: Rc<RefCell<App>>,
    // Removed from the window when the client is freed
    _listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl PongClient {
    /// Attach to the canvas with id `canvas_id`, install keyboard and
    /// resize listeners and start a match at the default difficulty
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<PongClient, JsValue> {
        console_error_panic_hook::set_once();
        // A second client on the same page keeps the existing logger
        let _ = console_log::init_with_level(log::Level::Info);

        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element #{}", canvas_id)))?
            .dyn_into()?;

        let (width, height) = canvas_size(
            window.inner_width()?.as_f64().unwrap_or(1000.0),
            window.inner_height()?.as_f64().unwrap_or(750.0),
        );
        let surface = CanvasSurface::new(canvas)?;
        surface.set_size(width, height);

        let seed = js_sys::Date::now() as u64;
        let arena = Arena::new(width as f32, height as f32, Params::GRID);
        let app = Rc::new(RefCell::new(App {
            game: Match::new(arena, seed),
            surface,
            clock: FrameClock::default(),
            control: LoopControl::new(),
            frame: None,
            callbacks: Callbacks::default(),
        }));
        log::info!("Pong client ready ({}x{}, seed {})", width, height, seed);

        let [key_down, key_up] = key_listeners(&window, &app);
        let listeners = vec![key_down, key_up, resize_listener(&window, &app)];

        let client = PongClient {
            app,
            _listeners: listeners,
        };
        client.select(Difficulty::default());
        Ok(client)
    }

    /// `scoreboard(left, right)`, called after every point
    pub fn on_scoreboard(&self, f: Function) {
        self.app.borrow_mut().callbacks.scoreboard = Some(f);
    }

    /// `pause(message)`, called when a side misses
    pub fn on_pause(&self, f: Function) {
        self.app.borrow_mut().callbacks.pause = Some(f);
    }

    /// `match_end(winner)`, called with "Player 1" or "Player 2"
    pub fn on_match_end(&self, f: Function) {
        self.app.borrow_mut().callbacks.match_end = Some(f);
    }

    /// Select `easy`, `hard` or `insane`
    pub fn set_difficulty(&self, name: &str) -> Result<(), JsValue> {
        let difficulty: Difficulty = name
            .parse()
            .map_err(|e: game_core::DifficultyError| JsValue::from_str(&e.to_string()))?;
        self.select(difficulty);
        Ok(())
    }

    /// Resume after a missed ball; false if the match was not paused
    pub fn continue_match(&self) -> bool {
        continue_match(&self.app)
    }

    pub fn new_match(&self) {
        {
            let mut a = self.app.borrow_mut();
            a.game.new_match();
            a.draw();
        }
        self.refresh_scoreboard();
        start_loop(&self.app);
    }

    /// Halt the loop; no further ticks run until the match is resumed
    pub fn stop(&self) {
        self.app.borrow_mut().stop_loop();
    }

    /// Re-arm the loop after `stop`
    pub fn resume(&self) {
        start_loop(&self.app);
    }

    pub fn is_running(&self) -> bool {
        self.app.borrow().control.is_armed()
    }

    pub fn difficulty(&self) -> String {
        self.app.borrow().game.tuning.difficulty.to_string()
    }

    fn select(&self, difficulty: Difficulty) {
        {
            let mut a = self.app.borrow_mut();
            a.game.select_difficulty(difficulty);
            a.draw();
        }
        self.refresh_scoreboard();
        start_loop(&self.app);
    }

    fn refresh_scoreboard(&self) {
        let (callbacks, scores) = {
            let a = self.app.borrow();
            (a.callbacks.clone(), a.game.scores())
        };
        callbacks.scoreboard(scores);
    }
}

fn continue_match(app: &Rc<RefCell<App>>) -> bool {
    let resumed = app.borrow_mut().game.continue_match();
    if resumed {
        start_loop(app);
    }
    resumed
}

fn key_listeners(target: &Window, app: &Rc<RefCell<App>>) -> [EventListener; 2] {
    let down = {
        let app = Rc::clone(app);
        EventListener::new(target, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(input) = handle_key_down(&event.key()) else {
                return;
            };
            event.prevent_default();
            match input {
                InputEvent::Confirm => {
                    continue_match(&app);
                }
                other => app.borrow_mut().game.handle_input(other),
            }
        })
    };

    let up = {
        let app = Rc::clone(app);
        EventListener::new(target, "keyup", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(input) = handle_key_up(&event.key()) {
                app.borrow_mut().game.handle_input(input);
            }
        })
    };

    [down, up]
}

fn resize_listener(target: &Window, app: &Rc<RefCell<App>>) -> EventListener {
    let app = Rc::clone(app);
    EventListener::new(target, "resize", move |_event| {
        let Ok(window) = window() else {
            return;
        };
        let (Ok(w), Ok(h)) = (window.inner_width(), window.inner_height()) else {
            return;
        };
        let (width, height) = canvas_size(w.as_f64().unwrap_or(1000.0), h.as_f64().unwrap_or(750.0));

        let mut a = app.borrow_mut();
        if a.game.resize(width as f32, height as f32) {
            a.surface.set_size(width, height);
            a.draw();
            log::debug!("resized to {}x{}", width, height);
        }
    })
}
