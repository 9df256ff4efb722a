//! Hex Bounce entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use hex_bounce::Settings;
    use hex_bounce::platform::now_seconds;
    use hex_bounce::renderer::RenderState;
    use hex_bounce::sim::SimState;

    /// App instance holding all state
    struct App {
        state: SimState,
        render_state: Option<RenderState>,
        canvas: HtmlCanvasElement,
        fallback_size: (u32, u32),
    }

    impl App {
        /// Viewport in CSS pixels and surface size in physical pixels
        fn measure(&self) -> ((f32, f32), (u32, u32)) {
            let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
            let mut w = self.canvas.client_width() as u32;
            let mut h = self.canvas.client_height() as u32;
            if w == 0 || h == 0 {
                (w, h) = self.fallback_size;
            }
            let physical = ((w as f64 * dpr) as u32, (h as f64 * dpr) as u32);
            ((w as f32, h as f32), physical)
        }

        /// One tick: step the simulation and draw the result
        fn frame(&mut self) {
            let frame = self.state.step(now_seconds());

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render_frame(&frame) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Apply a viewport change before the next tick
        fn resize(&mut self) {
            let (viewport, (pw, ph)) = self.measure();
            self.canvas.set_width(pw);
            self.canvas.set_height(ph);
            self.state.resize(viewport.0, viewport.1);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(pw, ph, viewport);
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hex Bounce starting...");

        let settings = Settings::load();

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        document.set_title("Bouncing Ball in a Spinning Hexagon");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let mut app = App {
            state: SimState::new(
                settings.width as f32,
                settings.height as f32,
                &settings,
                now_seconds(),
            ),
            render_state: None,
            canvas: canvas.clone(),
            fallback_size: (settings.width, settings.height),
        };

        // Size the canvas and fit the hexagon to it
        let (viewport, (width, height)) = app.measure();
        canvas.set_width(width);
        canvas.set_height(height);
        app.state.resize(viewport.0, viewport.1);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        app.render_state = Some(RenderState::new(surface, &adapter, width, height, viewport).await);
        let app = Rc::new(RefCell::new(app));

        setup_resize_handler(app.clone());
        start_frame_loop(app, settings.frame_interval_ms);

        log::info!("Hex Bounce running!");
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Tick on a fixed interval; `dt` is measured inside the step
    fn start_frame_loop(app: Rc<RefCell<App>>, interval_ms: u32) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().frame();
        });
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms as i32,
        ) {
            log::error!("Failed to start frame loop: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hex_bounce::Settings;

    env_logger::init();
    log::info!("Hex Bounce (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let mut settings = Settings::load();
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_size(&args) {
        Ok(Some((width, height))) => {
            settings.width = width;
            settings.height = height;
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: hex-bounce [WIDTH HEIGHT]");
            std::process::exit(2);
        }
    }

    if let Err(e) = settings.validate() {
        log::error!("{}", e);
        std::process::exit(2);
    }

    headless::run(&settings);
}

/// Optional `WIDTH HEIGHT` positional arguments
#[cfg(not(target_arch = "wasm32"))]
fn parse_size(args: &[String]) -> Result<Option<(u32, u32)>, String> {
    match args {
        [] => Ok(None),
        [w, h] => {
            let parse = |s: &str| {
                s.parse::<u32>()
                    .map_err(|e| format!("invalid size `{s}`: {e}"))
            };
            Ok(Some((parse(w)?, parse(h)?)))
        }
        _ => Err(format!("expected 0 or 2 arguments, got {}", args.len())),
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::Duration;

    use hex_bounce::Settings;
    use hex_bounce::platform::now_seconds;
    use hex_bounce::sim::SimState;

    /// Run the frame loop without a window, logging the ball once per second
    pub fn run(settings: &Settings) {
        let mut state = SimState::new(
            settings.width as f32,
            settings.height as f32,
            settings,
            now_seconds(),
        );
        let interval = Duration::from_millis(settings.frame_interval_ms as u64);
        let frames_per_report = (1000 / settings.frame_interval_ms).max(1) as u64;

        loop {
            std::thread::sleep(interval);
            let frame = state.step(now_seconds());

            if log::log_enabled!(log::Level::Trace) {
                if let Ok(json) = serde_json::to_string(&frame) {
                    log::trace!("{}", json);
                }
            }
            if state.frames % frames_per_report == 0 {
                log::info!(
                    "frame {}: ball ({:.1}, {:.1}) vel ({:.1}, {:.1}), hexagon {:.1}°",
                    state.frames,
                    state.ball.pos.x,
                    state.ball.pos.y,
                    state.ball.vel.x,
                    state.ball.vel.y,
                    state.hexagon.angle.to_degrees()
                );
            }
        }
    }
}
