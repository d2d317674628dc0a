//! Quad Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use quad_pong::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use quad_pong::platform::{KeyState, SystemClock};
    use quad_pong::renderer::QuadRenderer;
    use quad_pong::{Error, Game, Result, Tuning};

    /// Browser host: game, held keys and the GPU surface
    struct Host {
        game: Game<SystemClock>,
        keys: KeyState,
        renderer: QuadRenderer,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Quad Pong starting...");

        match start().await {
            Ok(()) => log::info!("Quad Pong running!"),
            Err(e) => log::error!("Failed to start: {}", e),
        }
    }

    async fn start() -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::Adapter("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| Error::Adapter("no document".into()))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into().ok())
            .ok_or_else(|| Error::Adapter("no canvas element".into()))?;

        // Fixed aspect; the browser scales the canvas
        canvas.set_width(SCREEN_WIDTH);
        canvas.set_height(SCREEN_HEIGHT);

        let tuning = Tuning::load();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| Error::Adapter(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| Error::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let renderer =
            QuadRenderer::new(surface, &adapter, SCREEN_WIDTH, SCREEN_HEIGHT, &tuning).await?;

        let host = Rc::new(RefCell::new(Host {
            game: Game::new(tuning, SystemClock::new()),
            keys: KeyState::default(),
            renderer,
        }));

        setup_input_handlers(host.clone());
        request_animation_frame(host);
        Ok(())
    }

    fn setup_input_handlers(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if host.borrow_mut().keys.key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                host.borrow_mut().keys.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Focus loss drops held keys so paddles don't drift
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                host.borrow_mut().keys.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        let running = {
            let mut h = host.borrow_mut();
            let Host {
                game,
                keys,
                renderer,
            } = &mut *h;

            game.clock_mut().set_now_ms(time);
            game.frame(&*keys, renderer);
            game.is_running()
        };

        if running {
            request_animation_frame(host);
        } else {
            log::info!("Quad Pong stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Quad Pong (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the playable web version");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let tuning_path = arg_value(&args, "--tuning");
    let max_frames = arg_value(&args, "--frames")
        .and_then(|v| v.parse().ok())
        .unwrap_or(600);

    let tuning = quad_pong::Tuning::load(tuning_path);
    run_demo(tuning, max_frames);
}

/// Value following `flag`, e.g. `--frames 300`
#[cfg(not(target_arch = "wasm32"))]
fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Serve, nudge the paddles for a while, then quit
#[cfg(not(target_arch = "wasm32"))]
fn run_demo(tuning: quad_pong::Tuning, max_frames: usize) {
    use quad_pong::Game;
    use quad_pong::platform::{Action, ManualClock, ScriptedInput};
    use quad_pong::renderer::RecordingSurface;

    const FRAME_DT: f32 = 1.0 / 60.0;

    let mut game = Game::new(tuning, ManualClock::new(FRAME_DT));
    let mut surface = RecordingSurface::default();
    let mut input = ScriptedInput::default()
        .hold(&[Action::MoveDownLeft], 4)
        .hold(&[Action::MoveUpLeft], 4)
        .idle(240)
        .hold(&[Action::MoveUpRight], 30)
        .idle(300)
        .hold(&[Action::Quit], 1);

    let frames = game.run_scripted(&mut input, &mut surface, max_frames);

    let state = &game.state;
    log::info!(
        "Played {} frames: ball at ({:.3}, {:.3}), paddles {:.3} / {:.3}, phase {:?}",
        frames,
        state.ball.pos.x,
        state.ball.pos.y,
        state.left.y,
        state.right.y,
        state.round.phase()
    );
    log::info!("Presented {} frames", surface.frames().len());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
