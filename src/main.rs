//! Skyflap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use skyflap::FrameClock;
    use skyflap::input::{self, InputEvent};
    use skyflap::overlay::{DomOverlay, Overlay};
    use skyflap::render::{CanvasRenderer, Renderer};
    use skyflap::score::{LocalScore, ScoreStore};
    use skyflap::sim::{Activation, GameEvent, Session, activate, tick};
    use skyflap::tuning::Tuning;

    const READY_TITLE: &str = "Ready?";
    const READY_TEXT: &str = "Tap, click, or press Space to start.";
    const GAME_OVER_TITLE: &str = "Game Over";

    /// Game instance holding all state
    struct Game {
        session: Session,
        clock: FrameClock,
        renderer: CanvasRenderer,
        store: LocalScore,
        overlay: DomOverlay,
    }

    impl Game {
        /// One frame: advance the sim by the clamped elapsed time, react to
        /// events, draw the snapshot.
        fn frame(&mut self, now_ms: f64) {
            let dt = self.clock.tick(now_ms);
            for event in tick(&mut self.session, dt) {
                match event {
                    GameEvent::Scored { total } => {
                        log::debug!("Cleared pipe, score {}", total);
                    }
                    GameEvent::GameOver { score, best } => {
                        self.store.save(best);
                        self.overlay.show(
                            GAME_OVER_TITLE,
                            &format!(
                                "Score: {} | Best: {}\nTap or press Space to restart.",
                                score, best
                            ),
                        );
                        log::info!("Game over: score {}, best {}", score, best);
                    }
                }
            }
            self.renderer.draw(&self.session.frame());
        }

        /// One accepted activate signal.
        fn on_activate(&mut self) {
            match activate(&mut self.session) {
                Activation::Started | Activation::Restarted => self.overlay.hide(),
                Activation::Flapped => {}
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Skyflap starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // The canvas attribute size is the world size.
        let tuning = Tuning::for_surface(canvas.width() as f32, canvas.height() as f32);

        let store = LocalScore;
        let best = store.load();
        let seed = js_sys::Date::now() as u64;

        let session = Session::new(tuning, seed, best).expect("unusable world configuration");
        let renderer = CanvasRenderer::new(&canvas).expect("canvas 2d context");

        let overlay = DomOverlay;
        overlay.show(READY_TITLE, READY_TEXT);

        let game = Rc::new(RefCell::new(Game {
            session,
            clock: FrameClock::new(),
            renderer,
            store,
            overlay,
        }));

        log::info!("Session seeded with {}", seed);

        setup_input_handlers(&canvas, &document, game.clone());
        request_animation_frame(game);

        log::info!("Skyflap running!");
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) {
        // Keyboard: only the gated codes activate, and those also get their
        // default (page scroll) suppressed.
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if input::gate(InputEvent::KeyPress { code: &code }).is_some() {
                    event.prevent_default();
                    game.borrow_mut().on_activate();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer presses on the canvas and on the overlay itself (so the
        // prompt is tappable) always activate.
        let overlay_el = document
            .get_element_by_id("overlay")
            .expect("no overlay element");
        let pointer_targets: [&web_sys::EventTarget; 2] = [canvas.as_ref(), overlay_el.as_ref()];
        for target in pointer_targets {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                if input::gate(InputEvent::PointerPress).is_some() {
                    event.prevent_default();
                    game.borrow_mut().on_activate();
                }
            });
            let _ = target
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Skyflap (native) starting...");

    // No native window; run a short headless session so the sim can be
    // smoke-tested from the command line.
    run_headless();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_headless() {
    use skyflap::Tuning;
    use skyflap::render::{NullRenderer, Renderer};
    use skyflap::score::{MemoryScore, ScoreStore};
    use skyflap::sim::{GameEvent, Session, activate, tick};

    let store = MemoryScore::new(0);
    let mut session = Session::new(Tuning::for_surface(480.0, 640.0), 0x5eed, store.load())
        .expect("stock tuning is valid");
    let mut renderer = NullRenderer;

    activate(&mut session);
    for _ in 0..20_000 {
        // Naive autopilot: flap whenever sinking past mid-world.
        if session.bird().y() > 300.0 {
            activate(&mut session);
        }
        for event in tick(&mut session, 1.0 / 60.0) {
            match event {
                GameEvent::Scored { total } => log::info!("Cleared pipe, score {}", total),
                GameEvent::GameOver { score, best } => {
                    store.save(best);
                    println!("Game over - score {}, best {}", score, best);
                    return;
                }
            }
        }
        renderer.draw(&session.frame());
    }
    println!("Autopilot survived the whole demo run (score {})", session.score());
}
