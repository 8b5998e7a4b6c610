//! Pancho Dodge entry point
//!
//! On wasm: canvas/DOM bootstrap, input listeners, and the frame-callback
//! driver. On native: a scripted headless run that exercises the simulation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, KeyboardEvent,
        PointerEvent,
    };

    use pancho_dodge::consts::{MAX_SURFACE_WIDTH, SURFACE_HEIGHT};
    use pancho_dodge::render::{CanvasSurface, draw_frame};
    use pancho_dodge::sim::{GamePhase, GameState, InputState, TickInput, tick};
    use pancho_dodge::{Settings, Tuning};

    const CANVAS_ID: &str = "pancho-game";
    const DEFAULT_SPRITE: &str = "/pancho-face.png";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        settings: Settings,
        canvas: HtmlCanvasElement,
        surface: Option<CanvasSurface>,
        sprite: HtmlImageElement,
        /// Previous frame timestamp (ms); 0 means the anchor is unset and
        /// the next tick integrates a zero delta
        last_time: f64,
        /// Pending animation frame handle, present only while playing
        raf_id: Option<i32>,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(
            canvas: HtmlCanvasElement,
            sprite: HtmlImageElement,
            tuning: Tuning,
            settings: Settings,
        ) -> Self {
            let seed = js_sys::Date::now() as u64;
            Self {
                state: GameState::new(
                    seed,
                    canvas.width() as f32,
                    canvas.height() as f32,
                    tuning,
                ),
                input: InputState::default(),
                settings,
                canvas,
                surface: None,
                sprite,
                last_time: 0.0,
                raf_id: None,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Acquire (once) the 2d context wrapped as a render surface.
        /// Returns false when the context is unavailable; the caller must
        /// not schedule another frame in that case.
        fn ensure_surface(&mut self) -> bool {
            if self.surface.is_some() {
                return true;
            }
            let ctx = self
                .canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
            match ctx {
                Some(ctx) => {
                    self.surface = Some(CanvasSurface::new(ctx, self.sprite.clone()));
                    true
                }
                None => {
                    log::error!("2d context unavailable; aborting frame");
                    false
                }
            }
        }

        /// Draw the current state. Returns false if the surface is gone.
        fn draw(&mut self) -> bool {
            if !self.ensure_surface() {
                return false;
            }
            if let Some(surface) = self.surface.as_mut() {
                draw_frame(surface, &self.state, &self.settings);
            }
            true
        }

        /// Map a pointer event's x to canvas pixel space
        fn pointer_to_surface_x(&self, event: &PointerEvent) -> f32 {
            let client_w = self.canvas.client_width().max(1) as f32;
            event.offset_x() as f32 * (self.canvas.width() as f32 / client_w)
        }

        fn track_fps(&mut self, time: f64) {
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 && time > oldest {
                self.fps = (60_000.0 / (time - oldest)).round() as u32;
            }
        }

        /// Sync the optional page HUD elements. Every lookup is by id and
        /// silently skipped when the embedding page omits the element.
        fn update_hud(&self, document: &Document) {
            if let Some(el) = document.get_element_by_id("dodge-score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("dodge-best") {
                el.set_text_content(Some(&self.state.best.to_string()));
            }
            if self.settings.show_fps
                && let Some(el) = document.get_element_by_id("dodge-fps")
            {
                el.set_text_content(Some(&self.fps.to_string()));
            }
            if let Some(el) = document.get_element_by_id("dodge-status") {
                let text = match self.state.phase {
                    GamePhase::Over => format!(
                        "Pancho: \u{201C}ok.\u{201D} \u{2014} Score {} \u{2022} Best {}",
                        self.state.score, self.state.best
                    ),
                    GamePhase::Idle => "Press Enter or tap to start".to_string(),
                    GamePhase::Playing => String::new(),
                };
                el.set_text_content(Some(&text));
            }
        }
    }

    /// Start (or restart) a run and kick off the frame loop.
    fn start(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.state.phase == GamePhase::Playing {
                return;
            }
            let seed = js_sys::Date::now() as u64;
            g.state.start_run(seed);
            g.last_time = 0.0;
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }
        schedule_frame(game.clone());
    }

    /// Manual quit: end the run, cancel the pending frame, freeze the final
    /// frame on screen.
    fn quit(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();
        if g.state.phase != GamePhase::Playing {
            return;
        }
        g.state.end_run();
        cancel_pending_frame(&mut g);
        g.draw();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            g.update_hud(&document);
        }
    }

    fn cancel_pending_frame(g: &mut Game) {
        if let Some(id) = g.raf_id.take()
            && let Some(window) = web_sys::window()
        {
            let _ = window.cancel_animation_frame(id);
            log::info!("Cancelled pending frame {id}");
        }
    }

    /// Schedule exactly one frame callback, recording its handle so it can
    /// be cancelled when the run ends.
    fn schedule_frame(game: Rc<RefCell<Game>>) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let game_for_frame = game.clone();
        let closure = Closure::once(move |time: f64| {
            game_for_frame.borrow_mut().raf_id = None;
            game_loop(game_for_frame, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => game.borrow_mut().raf_id = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {e:?}"),
        }
        closure.forget();
    }

    /// One frame: advance the simulation by the real elapsed delta, redraw,
    /// and reschedule only while still playing.
    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            let input = TickInput {
                steering: g.input.steering(),
            };
            tick(&mut g.state, &input, dt);
            g.track_fps(time);

            if !g.draw() {
                // Surface lost: abort without rescheduling so we don't spin
                // on a dead canvas
                false
            } else {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    g.update_hud(&document);
                }
                g.state.phase == GamePhase::Playing
            }
        };

        if keep_going {
            schedule_frame(game);
        }
    }

    /// Resize the canvas to the host and propagate to the simulation.
    fn apply_size(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();
        let parent_w = g
            .canvas
            .parent_element()
            .map(|p| p.client_width() as f32)
            .unwrap_or(MAX_SURFACE_WIDTH);
        let width = parent_w.min(MAX_SURFACE_WIDTH).max(0.0);
        g.canvas.set_width(width as u32);
        g.canvas.set_height(SURFACE_HEIGHT as u32);
        g.state.set_surface_size(width, SURFACE_HEIGHT);
        // Keep the canvas presentable while idle/over
        if g.state.phase != GamePhase::Playing {
            g.draw();
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let canvas = game.borrow().canvas.clone();

        // Keyboard steering + start/quit
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                match key.as_str() {
                    "ArrowLeft" | "a" | "A" => game.borrow_mut().input.left = true,
                    "ArrowRight" | "d" | "D" => game.borrow_mut().input.right = true,
                    "Enter" => start(&game),
                    "Escape" => quit(&game),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => game.borrow_mut().input.left = false,
                    "ArrowRight" | "d" | "D" => game.borrow_mut().input.right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer-follow steering; pressing down also starts a run
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let _ = canvas_clone.set_pointer_capture(event.pointer_id());
                let x = game.borrow().pointer_to_surface_x(&event);
                game.borrow_mut().input.pointer_x = Some(x);
                start(&game);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut g = game.borrow_mut();
                if g.input.pointer_x.is_some() {
                    let x = g.pointer_to_surface_x(&event);
                    g.input.pointer_x = Some(x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        for release in ["pointerup", "pointercancel"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                game.borrow_mut().input.clear_pointer();
            });
            let _ =
                canvas.add_event_listener_with_callback(release, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Resize follows the host container
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                apply_size(&game);
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Optional page buttons
        let document = window.document().expect("no document");
        if let Some(btn) = document.get_element_by_id("dodge-start") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        if let Some(btn) = document.get_element_by_id("dodge-quit") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                quit(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Kick off loading the player sprite; the render path falls back to a
    /// placeholder until (and unless) it arrives.
    fn load_sprite(canvas: &HtmlCanvasElement) -> Result<HtmlImageElement, JsValue> {
        let img = HtmlImageElement::new()?;
        let src = canvas
            .get_attribute("data-sprite")
            .unwrap_or_else(|| DEFAULT_SPRITE.to_string());

        {
            let src = src.clone();
            let closure = Closure::once(move |_event: web_sys::Event| {
                log::info!("Player sprite loaded: {src}");
            });
            img.set_onload(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }
        {
            let src = src.clone();
            let closure = Closure::once(move |_event: web_sys::Event| {
                log::warn!("Player sprite failed to load: {src}; placeholder stays");
            });
            img.set_onerror(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        img.set_src(&src);
        Ok(img)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Pancho Dodge starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str("canvas #pancho-game not found"))?
            .dyn_into()?;

        // Page-supplied balance/presentation overrides, both optional
        let tuning = canvas
            .get_attribute("data-tuning")
            .map(|json| Tuning::from_json_str(&json))
            .unwrap_or_default();
        let settings = canvas
            .get_attribute("data-settings")
            .map(|json| Settings::from_json_str(&json))
            .unwrap_or_default();

        let sprite = load_sprite(&canvas)?;

        let game = Rc::new(RefCell::new(Game::new(canvas, sprite, tuning, settings)));
        log::info!("Game initialized with seed: {}", game.borrow().state.seed);

        apply_size(&game);
        setup_input_handlers(game.clone());

        // Static frame + HUD while idle; the loop starts on first input
        game.borrow_mut().draw();
        game.borrow().update_hud(&document);

        log::info!("Pancho Dodge ready (Enter or tap to start)");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pancho_dodge::Tuning;
    use pancho_dodge::consts::{MAX_SURFACE_WIDTH, SURFACE_HEIGHT};
    use pancho_dodge::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Pancho Dodge (headless) starting...");

    // Fixed-step scripted session: the autopilot steers away from the most
    // imminent hazard. Doubles as a smoke test of the simulation crate on
    // hosts without a browser.
    let seed = 0xC0FFEE;
    let dt = 1.0 / 60.0;
    let mut state = GameState::new(seed, MAX_SURFACE_WIDTH, SURFACE_HEIGHT, Tuning::default());
    state.start_run(seed);

    let max_ticks = 60 * 120; // two minutes cap
    let mut ticks = 0u32;
    while state.phase == GamePhase::Playing && ticks < max_ticks {
        let input = TickInput {
            steering: autopilot(&state),
        };
        tick(&mut state, &input, dt);
        ticks += 1;
        if ticks % (60 * 10) == 0 {
            log::info!(
                "t={}s score={} hazards={} difficulty={:.2}",
                ticks / 60,
                state.score,
                state.hazards.len(),
                state.clock.difficulty
            );
        }
    }

    let outcome = if state.phase == GamePhase::Over {
        "hit"
    } else {
        "survived the cap"
    };
    log::info!(
        "Headless run done ({outcome}): {:.1}s, score {}, best {}",
        ticks as f32 * dt,
        state.score,
        state.best
    );
}

/// Steer away from the hazard with the least time to impact; drift back to
/// center when nothing threatens.
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(state: &pancho_dodge::sim::GameState) -> pancho_dodge::sim::Steering {
    use pancho_dodge::sim::Steering;

    let hitbox = state.player.hitbox(state.height);
    let center_x = hitbox.center().x;

    let threat = state
        .hazards
        .iter()
        .filter(|h| h.pos.y < hitbox.max_y() && h.fall_speed > 0.0)
        .filter(|h| (h.pos.x - center_x).abs() < hitbox.size.x / 2.0 + h.radius + 40.0)
        .min_by(|a, b| {
            let ta = (hitbox.pos.y - a.pos.y) / a.fall_speed;
            let tb = (hitbox.pos.y - b.pos.y) / b.fall_speed;
            ta.partial_cmp(&tb).unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(h) = threat {
        if h.pos.x >= center_x {
            Steering::Discrete(-1.0)
        } else {
            Steering::Discrete(1.0)
        }
    } else {
        let home = state.width / 2.0;
        if (center_x - home).abs() < 20.0 {
            Steering::Discrete(0.0)
        } else if center_x > home {
            Steering::Discrete(-1.0)
        } else {
            Steering::Discrete(1.0)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
